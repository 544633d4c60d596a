//! Incremental Server-Sent Events decoding for the Messages API stream

use geoassist_core::{Error, Result};
use serde::Deserialize;

/// A decoded unit of the upstream event stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SseEvent {
    /// A fragment of generated answer text.
    Delta(String),
    /// The upstream stream finished the message.
    Stop,
}

#[derive(Deserialize)]
struct StreamChunk {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    delta: Option<DeltaChunk>,
    #[serde(default)]
    error: Option<UpstreamError>,
}

#[derive(Deserialize)]
struct DeltaChunk {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: Option<String>,
}

#[derive(Deserialize)]
struct UpstreamError {
    #[serde(default)]
    message: String,
}

/// Incremental SSE decoder.
///
/// Raw body chunks go in via `push`; complete events come out as soon as
/// their terminating blank line has arrived. Chunk boundaries may fall
/// anywhere, including inside a UTF-8 sequence of a `data:` payload, so the
/// parser buffers bytes rather than text.
#[derive(Debug, Default)]
pub struct SseParser {
    buffer: Vec<u8>,
}

impl SseParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed raw bytes, returning every event completed by this chunk.
    pub fn push(&mut self, chunk: &[u8]) -> Result<Vec<SseEvent>> {
        self.buffer.extend_from_slice(chunk);

        let mut events = Vec::new();
        while let Some((end, delimiter)) = find_blank_line(&self.buffer) {
            let raw: Vec<u8> = self.buffer.drain(..end + delimiter).collect();
            let text = String::from_utf8_lossy(&raw[..end]);
            if let Some(event) = parse_event(&text)? {
                events.push(event);
            }
        }
        Ok(events)
    }
}

/// Find the blank line terminating the next event.
///
/// Line endings may be `\n` or `\r\n`, so a blank line is a newline followed
/// by an optional carriage return and another newline. Returns the event end
/// offset and the delimiter length to drain.
fn find_blank_line(buf: &[u8]) -> Option<(usize, usize)> {
    for (i, byte) in buf.iter().enumerate() {
        if *byte != b'\n' {
            continue;
        }
        match (buf.get(i + 1), buf.get(i + 2)) {
            (Some(&b'\n'), _) => return Some((i, 2)),
            (Some(&b'\r'), Some(&b'\n')) => return Some((i, 3)),
            _ => {}
        }
    }
    None
}

/// Parse one complete SSE event block into a stream event.
///
/// Housekeeping events (`ping`, `message_start`, block starts/stops) decode
/// to `None`; a malformed `data:` payload is an upstream failure.
fn parse_event(raw: &str) -> Result<Option<SseEvent>> {
    for line in raw.lines() {
        let Some(data) = line.strip_prefix("data:") else {
            continue;
        };
        let data = data.trim();
        if data.is_empty() {
            continue;
        }

        let chunk: StreamChunk = serde_json::from_str(data).map_err(|e| {
            Error::Upstream(format!("malformed stream event: {} ({})", data, e))
        })?;

        match chunk.kind.as_str() {
            "content_block_delta" => {
                if let Some(delta) = chunk.delta {
                    if delta.kind == "text_delta" {
                        if let Some(text) = delta.text {
                            return Ok(Some(SseEvent::Delta(text)));
                        }
                    }
                }
            }
            "message_stop" => return Ok(Some(SseEvent::Stop)),
            "error" => {
                let message = chunk
                    .error
                    .map(|e| e.message)
                    .unwrap_or_else(|| "unknown upstream error".to_string());
                return Err(Error::Upstream(message));
            }
            // ping, message_start, message_delta, content_block_start/stop
            _ => {}
        }
    }
    Ok(None)
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn decodes_text_deltas_in_order() {
        let mut parser = SseParser::new();
        let body = concat!(
            "event: content_block_delta\n",
            "data: {\"type\":\"content_block_delta\",\"index\":0,\"delta\":{\"type\":\"text_delta\",\"text\":\"Use \"}}\n\n",
            "event: content_block_delta\n",
            "data: {\"type\":\"content_block_delta\",\"index\":0,\"delta\":{\"type\":\"text_delta\",\"text\":\"the \"}}\n\n",
            "event: message_stop\n",
            "data: {\"type\":\"message_stop\"}\n\n",
        );

        let events = parser.push(body.as_bytes()).unwrap();
        assert_eq!(
            events,
            vec![
                SseEvent::Delta("Use ".to_string()),
                SseEvent::Delta("the ".to_string()),
                SseEvent::Stop,
            ]
        );
    }

    #[test]
    fn buffers_events_split_across_chunks() {
        let mut parser = SseParser::new();
        let first = "data: {\"type\":\"content_block_delta\",\"delta\":{\"type\":\"te";
        let second = "xt_delta\",\"text\":\"Circle\"}}\n\n";

        assert!(parser.push(first.as_bytes()).unwrap().is_empty());
        let events = parser.push(second.as_bytes()).unwrap();
        assert_eq!(events, vec![SseEvent::Delta("Circle".to_string())]);
    }

    #[test]
    fn decodes_crlf_framed_events() {
        let mut parser = SseParser::new();
        let body = concat!(
            "event: content_block_delta\r\n",
            "data: {\"type\":\"content_block_delta\",\"delta\":{\"type\":\"text_delta\",\"text\":\"Use \"}}\r\n",
            "\r\n",
            "data: {\"type\":\"message_stop\"}\r\n",
            "\r\n",
        );

        let events = parser.push(body.as_bytes()).unwrap();
        assert_eq!(
            events,
            vec![SseEvent::Delta("Use ".to_string()), SseEvent::Stop]
        );
    }

    #[test]
    fn buffers_crlf_delimiter_split_across_chunks() {
        let mut parser = SseParser::new();
        let first = "data: {\"type\":\"content_block_delta\",\"delta\":{\"type\":\"text_delta\",\"text\":\"Circle\"}}\r\n";
        let second = "\r\ndata: {\"type\":\"message_stop\"}\r\n\r\n";

        assert!(parser.push(first.as_bytes()).unwrap().is_empty());
        let events = parser.push(second.as_bytes()).unwrap();
        assert_eq!(
            events,
            vec![SseEvent::Delta("Circle".to_string()), SseEvent::Stop]
        );
    }

    #[test]
    fn ignores_housekeeping_events() {
        let mut parser = SseParser::new();
        let body = concat!(
            "event: message_start\n",
            "data: {\"type\":\"message_start\",\"message\":{\"id\":\"msg_1\"}}\n\n",
            "event: ping\n",
            "data: {\"type\":\"ping\"}\n\n",
        );
        assert!(parser.push(body.as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn malformed_data_is_an_upstream_error() {
        let mut parser = SseParser::new();
        let err = parser.push(b"data: {not json}\n\n").unwrap_err();
        assert!(matches!(err, Error::Upstream(_)));
    }

    #[test]
    fn upstream_error_event_is_surfaced() {
        let mut parser = SseParser::new();
        let body =
            "data: {\"type\":\"error\",\"error\":{\"type\":\"overloaded_error\",\"message\":\"Overloaded\"}}\n\n";
        let err = parser.push(body.as_bytes()).unwrap_err();
        match err {
            Error::Upstream(msg) => assert_eq!(msg, "Overloaded"),
            other => panic!("unexpected error: {other}"),
        }
    }
}

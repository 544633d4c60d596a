//! Streaming relay
//!
//! Turns the upstream token stream into the caller-facing event sequence:
//! every delta is forwarded in arrival order, the upstream's natural end
//! becomes a terminal sentinel, and a mid-stream failure becomes exactly one
//! interruption notice followed by the sentinel. A raw error never reaches
//! the caller.

use futures::{Stream, StreamExt, stream};

use geoassist_core::{StreamEvent, TokenStream};

/// Appended to the partial answer when the upstream stream fails mid-generation.
pub const INTERRUPTION_NOTICE: &str =
    "\n\n(The answer was interrupted because the connection to the assistant was lost. Please try asking again.)";

enum RelayState {
    Streaming(TokenStream),
    Closing,
    Finished,
}

/// Relay an upstream token stream as ordered caller-facing events.
///
/// The returned stream always ends with exactly one `StreamEvent::Done`. On
/// upstream error the token stream is dropped immediately, releasing the
/// upstream connection; no retry is attempted.
pub fn relay(upstream: TokenStream) -> impl Stream<Item = StreamEvent> {
    stream::unfold(RelayState::Streaming(upstream), |state| async move {
        match state {
            RelayState::Streaming(mut upstream) => match upstream.next().await {
                Some(Ok(text)) => {
                    Some((StreamEvent::Delta(text), RelayState::Streaming(upstream)))
                }
                Some(Err(e)) => {
                    tracing::warn!("upstream stream interrupted: {e}");
                    Some((
                        StreamEvent::Delta(INTERRUPTION_NOTICE.to_string()),
                        RelayState::Closing,
                    ))
                }
                None => Some((StreamEvent::Done, RelayState::Finished)),
            },
            RelayState::Closing => Some((StreamEvent::Done, RelayState::Finished)),
            RelayState::Finished => None,
        }
    })
}

//! Snapshot tests for the retrieval engine

#[cfg(test)]
mod snapshot_tests {
    use crate::{Category, Corpus, Document, search, tokenize};
    use insta::assert_yaml_snapshot;

    fn manual_corpus() -> Corpus {
        Corpus::from_documents(vec![
            Document {
                title: "Circle Command".to_string(),
                category: Category::Command,
                path: "commands/Circle.adoc".to_string(),
                content: "Circle(Point, Radius) creates a circle with given center point and radius."
                    .to_string(),
            },
            Document {
                title: "Circle with Center through Point Tool".to_string(),
                category: Category::Tool,
                path: "tools/Circle_Center_Point.adoc".to_string(),
                content: "Select the center point, then a point on the circle.".to_string(),
            },
            Document {
                title: "Introduction".to_string(),
                category: Category::General,
                path: "Introduction.adoc".to_string(),
                content: "Welcome to the Calculator Suite. Draw points, lines and circles."
                    .to_string(),
            },
        ])
    }

    #[test]
    fn test_tokenize_snapshot() {
        assert_yaml_snapshot!(tokenize("How can I draw a Circle(Point, Radius)?"), @r###"
        ---
        - draw
        - circle
        - point
        - radius
        "###);
    }

    #[test]
    fn test_tokenize_stop_words_snapshot() {
        assert_yaml_snapshot!(tokenize("What is the... !!!"), @r###"
        ---
        []
        "###);
    }

    #[test]
    fn test_search_ranking_snapshot() {
        let corpus = manual_corpus();
        let titles: Vec<&str> = search(&corpus, "circle", 8)
            .into_iter()
            .map(|d| d.title.as_str())
            .collect();

        assert_yaml_snapshot!(titles, @r###"
        ---
        - Circle Command
        - Circle with Center through Point Tool
        - Introduction
        "###);
    }
}

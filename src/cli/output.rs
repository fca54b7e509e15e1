//! Output formatting utilities

use crate::domain::MetaSnapshot;

/// Format a config snapshot for display
pub fn format_snapshot(snapshot: &MetaSnapshot) -> String {
    if snapshot.tags.is_empty() && snapshot.keywords.is_empty() && snapshot.robots.is_empty() {
        return "Empty meta config".to_string();
    }

    let mut output = String::new();
    for (name, content) in &snapshot.tags {
        output.push_str(&format!("{} = {}\n", name, content));
    }
    if !snapshot.keywords.is_empty() {
        output.push_str(&format!("keywords = {}\n", format_value_list(&snapshot.keywords)));
    }
    if !snapshot.robots.is_empty() {
        output.push_str(&format!("robots = {}\n", format_value_list(&snapshot.robots)));
    }

    output
}

fn format_value_list(values: &[String]) -> String {
    values.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_empty_snapshot() {
        let output = format_snapshot(&MetaSnapshot::default());
        assert_eq!(output, "Empty meta config");
    }

    #[test]
    fn test_format_full_snapshot() {
        let mut snapshot = MetaSnapshot::default();
        snapshot
            .tags
            .insert("description".to_string(), "a site".to_string());
        snapshot.keywords = vec!["x".to_string(), "y".to_string()];
        snapshot.robots = vec!["noindex".to_string()];

        let output = format_snapshot(&snapshot);

        assert!(output.contains("description = a site"));
        assert!(output.contains("keywords = x, y"));
        assert!(output.contains("robots = noindex"));
    }

    #[test]
    fn test_format_omits_empty_lists() {
        let mut snapshot = MetaSnapshot::default();
        snapshot
            .tags
            .insert("author".to_string(), "someone".to_string());

        let output = format_snapshot(&snapshot);

        assert_eq!(output, "author = someone\n");
    }
}

//! Configuration snapshot for seeding a tag set

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Initial meta tag state supplied by an external configuration source.
///
/// Every field is optional in the source; absent fields leave the
/// corresponding container empty. The snapshot is read once at construction
/// time and never written back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaSnapshot {
    /// Keyword list for the `keywords` meta element
    #[serde(default)]
    pub keywords: Vec<String>,

    /// Directive list for the `robots` meta element
    #[serde(default)]
    pub robots: Vec<String>,

    /// Named tags, emitted one element per entry; serialized last so the
    /// table follows the top-level values in TOML output
    #[serde(default)]
    pub tags: BTreeMap<String, String>,
}

impl MetaSnapshot {
    /// Starter snapshot written by `metahead init`.
    pub fn starter() -> Self {
        let mut tags = BTreeMap::new();
        tags.insert(
            "description".to_string(),
            "A description of this site".to_string(),
        );

        MetaSnapshot {
            tags,
            keywords: Vec::new(),
            robots: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        let snapshot = MetaSnapshot::default();
        assert!(snapshot.tags.is_empty());
        assert!(snapshot.keywords.is_empty());
        assert!(snapshot.robots.is_empty());
    }

    #[test]
    fn test_deserialize_with_all_fields() {
        let snapshot: MetaSnapshot = toml::from_str(
            r#"
            keywords = ["rust", "web"]
            robots = ["noindex"]

            [tags]
            description = "a site"
            "#,
        )
        .unwrap();

        assert_eq!(snapshot.tags["description"], "a site");
        assert_eq!(snapshot.keywords, vec!["rust", "web"]);
        assert_eq!(snapshot.robots, vec!["noindex"]);
    }

    #[test]
    fn test_deserialize_with_absent_fields() {
        let snapshot: MetaSnapshot = toml::from_str(
            r#"
            keywords = ["only-keywords"]
            "#,
        )
        .unwrap();

        assert!(snapshot.tags.is_empty());
        assert_eq!(snapshot.keywords, vec!["only-keywords"]);
        assert!(snapshot.robots.is_empty());
    }

    #[test]
    fn test_deserialize_empty_document() {
        let snapshot: MetaSnapshot = toml::from_str("").unwrap();
        assert_eq!(snapshot, MetaSnapshot::default());
    }

    #[test]
    fn test_starter_has_description_placeholder() {
        let snapshot = MetaSnapshot::starter();
        assert!(snapshot.tags.contains_key("description"));
        assert!(snapshot.keywords.is_empty());
        assert!(snapshot.robots.is_empty());
    }

    #[test]
    fn test_toml_roundtrip() {
        let snapshot = MetaSnapshot::starter();
        let serialized = toml::to_string_pretty(&snapshot).unwrap();
        let parsed: MetaSnapshot = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed, snapshot);
    }
}

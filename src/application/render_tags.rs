//! Meta tag rendering use case
//!
//! Orchestrates the full workflow of one render cycle: seed a tag set from
//! the optional config snapshot, apply the requested mutations, serialize.

use crate::domain::MetaTagSet;
use crate::error::{MetaheadError, Result};
use crate::infrastructure::config;
use std::fs;
use std::path::PathBuf;

/// Options for rendering
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Config file path (None = resolve via environment, then default file)
    pub config: Option<PathBuf>,

    /// NAME=CONTENT pairs applied as unconditional sets
    pub tags: Vec<String>,

    /// NAME=CONTENT pairs applied as appends
    pub appends: Vec<String>,

    /// Keywords appended to the keyword list
    pub keywords: Vec<String>,

    /// Rules appended to the robots list
    pub robots: Vec<String>,

    /// Output file path (None = caller prints the markup)
    pub output: Option<PathBuf>,
}

/// Service for rendering meta tag markup
pub struct RenderTagsService;

impl RenderTagsService {
    /// Execute one render cycle and return the markup.
    ///
    /// Mutations are applied in a fixed order: snapshot seeding, then sets,
    /// appends, keywords, and robots rules. When an output path is given the
    /// markup is also written there.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config source cannot be resolved or parsed
    /// - A tag argument is not a NAME=CONTENT pair
    /// - Writing the output file fails
    pub fn execute(options: RenderOptions) -> Result<String> {
        // 1. Seed from the config snapshot, if any source exists
        let snapshot = config::load_optional(options.config)?;
        let mut set = MetaTagSet::from_snapshot(snapshot);

        // 2. Apply unconditional sets
        for spec in &options.tags {
            let (name, content) = parse_tag_spec(spec)?;
            set.set_tag(name, content);
        }

        // 3. Apply appends
        for spec in &options.appends {
            let (name, content) = parse_tag_spec(spec)?;
            set.append_tag_value(name, content)
                .map_err(|e| MetaheadError::Config(e.to_string()))?;
        }

        // 4. Extend the keyword and robots lists
        for keyword in &options.keywords {
            set.add_keyword(keyword.clone());
        }
        for rule in &options.robots {
            set.add_robots_rule(rule.clone());
        }

        // 5. Serialize
        let markup = set.render();

        if let Some(path) = &options.output {
            fs::write(path, &markup)?;
        }

        Ok(markup)
    }
}

/// Split a NAME=CONTENT argument at the first '='.
///
/// The content may itself contain '='; only an absent separator or an empty
/// name is rejected.
fn parse_tag_spec(spec: &str) -> Result<(String, String)> {
    match spec.split_once('=') {
        Some((name, content)) if !name.is_empty() => {
            Ok((name.to_string(), content.to_string()))
        }
        _ => Err(MetaheadError::InvalidTagSpec(spec.to_string())),
    }
}

//! Meta tag accumulation and rendering
//!
//! A [`MetaTagSet`] collects named tags, keywords, and robots directives over
//! the lifetime of one page-render cycle and serializes them once as a block
//! of `<meta>` markup.

use super::snapshot::MetaSnapshot;
use super::value::{AppendError, TagValue};

/// Accumulator for the meta tag state of a single render cycle.
///
/// The set is an explicitly constructed, caller-owned value: create one per
/// request or render pass, mutate it freely, then flush it with
/// [`render`](MetaTagSet::render). Tag entries keep their insertion order so
/// repeated renders of the same set produce identical output.
///
/// Values are emitted verbatim; callers must supply markup-safe strings.
///
/// # Examples
///
/// ```
/// use metahead::domain::tag_set::MetaTagSet;
///
/// let mut set = MetaTagSet::new();
/// set.set_tag("description", "a site");
/// set.add_keyword("x");
/// set.add_keyword("y");
/// set.add_robots_rule("noindex");
///
/// assert_eq!(
///     set.render(),
///     "\n<meta name=\"robots\" content=\"noindex\" />\n\
///      <meta name=\"description\" content=\"a site\" />\n\
///      <meta name=\"keywords\" content=\"x,y\" />\n"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetaTagSet {
    /// Named tags in insertion order, one map entry per name
    tags: Vec<(String, String)>,
    /// Keyword list, duplicate-free
    keywords: Vec<String>,
    /// Robots directive list, duplicate-free
    robots: Vec<String>,
}

impl MetaTagSet {
    /// Create an empty tag set.
    pub fn new() -> Self {
        MetaTagSet::default()
    }

    /// Create a tag set seeded from a configuration snapshot.
    ///
    /// Seeding goes through the normal mutation operations, so the
    /// duplicate-free invariants hold even when the snapshot carries
    /// duplicate keywords or rules.
    pub fn from_snapshot(snapshot: MetaSnapshot) -> Self {
        let mut set = MetaTagSet::new();

        for (name, content) in snapshot.tags {
            set.set_tag(name, content);
        }
        for keyword in snapshot.keywords {
            set.add_keyword(keyword);
        }
        for rule in snapshot.robots {
            set.add_robots_rule(rule);
        }

        set
    }

    /// Set a tag, inserting or unconditionally overwriting.
    ///
    /// Overwriting an existing name keeps its original position in the
    /// output ordering.
    pub fn set_tag(&mut self, name: impl Into<String>, content: impl Into<String>) {
        let name = name.into();
        let content = content.into();

        match self.tags.iter().position(|(existing, _)| *existing == name) {
            Some(index) => self.tags[index].1 = content,
            None => self.tags.push((name, content)),
        }
    }

    /// Append content to a tag, setting it if absent.
    ///
    /// A [`TagValue::Many`] content is joined with a single space within this
    /// call. If the tag is unset or currently empty the joined content is
    /// stored as by [`set_tag`](MetaTagSet::set_tag); otherwise it is
    /// concatenated onto the current value with no separator. The space only
    /// ever appears inside one call's sequence, never between calls.
    ///
    /// A [`TagValue::Many`] name cannot address a map entry, so it is
    /// rejected with [`AppendError::NameIsList`] and the set is left
    /// untouched.
    pub fn append_tag_value(
        &mut self,
        name: impl Into<TagValue>,
        content: impl Into<TagValue>,
    ) -> Result<(), AppendError> {
        let name = match name.into() {
            TagValue::Single(name) => name,
            TagValue::Many(_) => return Err(AppendError::NameIsList),
        };
        let content = content.into().into_joined();

        match self.tags.iter().position(|(existing, _)| *existing == name) {
            Some(index) => {
                let current = &mut self.tags[index].1;
                if current.is_empty() {
                    *current = content;
                } else {
                    current.push_str(&content);
                }
            }
            None => self.tags.push((name, content)),
        }

        Ok(())
    }

    /// Get the current content for a tag, or `None` if it was never set.
    pub fn get_tag(&self, name: &str) -> Option<&str> {
        self.tags
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, content)| content.as_str())
    }

    /// Remove a tag and return its prior content.
    ///
    /// Returns `None` for an unknown name; this is not an error.
    pub fn remove_tag(&mut self, name: &str) -> Option<String> {
        let index = self.tags.iter().position(|(existing, _)| existing == name)?;
        Some(self.tags.remove(index).1)
    }

    /// Add a keyword to the end of the keyword list.
    ///
    /// Any existing occurrence is removed first, so re-adding a keyword
    /// moves it to the end.
    pub fn add_keyword(&mut self, keyword: impl Into<String>) {
        let keyword = keyword.into();
        search_and_remove(&mut self.keywords, &keyword);
        self.keywords.push(keyword);
    }

    /// Remove a keyword and return it, or `None` if it was not present.
    pub fn remove_keyword(&mut self, keyword: &str) -> Option<String> {
        search_and_remove(&mut self.keywords, keyword)
    }

    /// Add a robots directive to the end of the rule list.
    ///
    /// Same move-to-end behavior as [`add_keyword`](MetaTagSet::add_keyword).
    pub fn add_robots_rule(&mut self, rule: impl Into<String>) {
        let rule = rule.into();
        search_and_remove(&mut self.robots, &rule);
        self.robots.push(rule);
    }

    /// Remove a robots directive and return it, or `None` if it was not
    /// present.
    pub fn remove_robots_rule(&mut self, rule: &str) -> Option<String> {
        search_and_remove(&mut self.robots, rule)
    }

    /// Tag entries as `(name, content)` pairs in insertion order.
    pub fn tags(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.tags
            .iter()
            .map(|(name, content)| (name.as_str(), content.as_str()))
    }

    /// The keyword list in its current order.
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// The robots directive list in its current order.
    pub fn robots_rules(&self) -> &[String] {
        &self.robots
    }

    /// Serialize the set as a block of `<meta>` markup.
    ///
    /// The block starts with a newline, then a robots element when any rules
    /// are present, then one element per tag in insertion order, then a
    /// keywords element when any keywords are present. List contents are
    /// comma-joined without spaces. Rendering never mutates the set, so
    /// repeated calls produce identical output.
    ///
    /// No HTML escaping is performed; names and contents pass through
    /// verbatim.
    pub fn render(&self) -> String {
        let mut output = String::from("\n");

        if !self.robots.is_empty() {
            output.push_str(&format!(
                "<meta name=\"robots\" content=\"{}\" />\n",
                self.robots.join(",")
            ));
        }

        for (name, content) in &self.tags {
            output.push_str(&format!(
                "<meta name=\"{}\" content=\"{}\" />\n",
                name, content
            ));
        }

        if !self.keywords.is_empty() {
            output.push_str(&format!(
                "<meta name=\"keywords\" content=\"{}\" />\n",
                self.keywords.join(",")
            ));
        }

        output
    }
}

/// Exact-match search helper shared by the keyword and robots lists.
fn search_and_remove(list: &mut Vec<String>, needle: &str) -> Option<String> {
    let index = list.iter().position(|item| item == needle)?;
    Some(list.remove(index))
}

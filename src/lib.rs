//! metahead - HTML meta tag generator
//!
//! A small library and command-line tool that accumulates meta tag state
//! (named tags, keywords, robots directives) over one page-render cycle and
//! flushes it as a literal block of `<meta>` markup.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::MetaheadError;

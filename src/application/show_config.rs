//! Config inspection use case

use crate::domain::MetaSnapshot;
use crate::error::Result;
use crate::infrastructure::config;
use std::path::PathBuf;

/// Service for inspecting the resolved config snapshot
pub struct ShowConfigService;

impl ShowConfigService {
    /// Resolve and load the snapshot that a render would be seeded from.
    pub fn execute(explicit: Option<PathBuf>) -> Result<MetaSnapshot> {
        config::load_optional(explicit)
    }
}

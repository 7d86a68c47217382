use serde::{Deserialize, Serialize};

use super::base::TrackStruct;

/// A prop displaying its name as text on the layout. It has no extent and
/// no links.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextItem {
    #[serde(flatten)]
    pub base: TrackStruct,
}

impl TextItem {
    #[must_use]
    pub fn new(base: TrackStruct) -> Self {
        Self { base }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.base.name
    }
}

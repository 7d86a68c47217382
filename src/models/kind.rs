use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable tag naming the variant of a track item.
///
/// Collaborators dispatch on it (rendering, persistence, signalling) without
/// looking into the item representation. The names are the ones used in the
/// persisted layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrackItemKind {
    LineItem,
    InvisibleLinkItem,
    PlatformItem,
    EndItem,
    Place,
    TextItem,
    PointsItem,
}

impl TrackItemKind {
    pub const ALL: [TrackItemKind; 7] = [
        TrackItemKind::LineItem,
        TrackItemKind::InvisibleLinkItem,
        TrackItemKind::PlatformItem,
        TrackItemKind::EndItem,
        TrackItemKind::Place,
        TrackItemKind::TextItem,
        TrackItemKind::PointsItem,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            TrackItemKind::LineItem => "LineItem",
            TrackItemKind::InvisibleLinkItem => "InvisibleLinkItem",
            TrackItemKind::PlatformItem => "PlatformItem",
            TrackItemKind::EndItem => "EndItem",
            TrackItemKind::Place => "Place",
            TrackItemKind::TextItem => "TextItem",
            TrackItemKind::PointsItem => "PointsItem",
        }
    }

    /// Items with an end point besides their origin
    #[must_use]
    pub fn is_resizable(self) -> bool {
        matches!(
            self,
            TrackItemKind::LineItem | TrackItemKind::InvisibleLinkItem | TrackItemKind::PlatformItem
        )
    }

    /// Items carrying a track code within a place
    #[must_use]
    pub fn is_place_object(self) -> bool {
        self.is_resizable()
    }

    /// Items trains can run on, i.e. that take part in the directional linkage
    #[must_use]
    pub fn is_linkable(self) -> bool {
        !matches!(self, TrackItemKind::Place | TrackItemKind::TextItem)
    }

    /// Should the item be drawn on the scenery
    #[must_use]
    pub fn is_visible(self) -> bool {
        !matches!(self, TrackItemKind::InvisibleLinkItem | TrackItemKind::EndItem)
    }
}

impl fmt::Display for TrackItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

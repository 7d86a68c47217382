use std::fmt;
use thiserror::Error;

use super::{Places, Scenery, TrackItems};
use crate::geometry::segments_cross;
use crate::models::{TrackItem, TrackItemId, TrackItemKind};

/// The reference of an item another item points to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkField {
    Next,
    Previous,
    Reverse,
    Conflict,
}

impl fmt::Display for LinkField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LinkField::Next => "next",
            LinkField::Previous => "previous",
            LinkField::Reverse => "reverse",
            LinkField::Conflict => "conflict",
        })
    }
}

/// A problem found in a bound layout.
///
/// Issues do not prevent navigation; they tell the loading side which parts
/// of the layout traversal cannot be trusted on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutIssue {
    #[error("{field} item {target} of item {item} does not exist")]
    DanglingReference {
        item: TrackItemId,
        field: LinkField,
        target: TrackItemId,
    },
    #[error("item {item} is linked to {target} but {target} is not linked back")]
    AsymmetricLink { item: TrackItemId, target: TrackItemId },
    #[error("item {item} is linked to {target}, which trains cannot run on")]
    LinkToUnlinkable { item: TrackItemId, target: TrackItemId },
    #[error("end item {item} has {links} neighbours instead of one")]
    EndItemLinks { item: TrackItemId, links: usize },
    #[error("{kind} {item} must not be linked to other items")]
    UnexpectedLinks { item: TrackItemId, kind: TrackItemKind },
    #[error("an end of points {item} is not on the side of its square")]
    PointsEndOffSquare { item: TrackItemId },
    #[error("item {item} refers to unknown place {code:?}")]
    UnknownPlace { item: TrackItemId, code: String },
    #[error("place {item} has no code")]
    PlaceWithoutCode { item: TrackItemId },
    #[error("items {item} and {other} cross without declaring a conflict")]
    UndeclaredCrossing { item: TrackItemId, other: TrackItemId },
}

/// Extension trait checking the consistency of a bound layout
pub trait LayoutValidation {
    /// Every issue found, in item load order
    fn validate(&self) -> Vec<LayoutIssue>;
}

impl LayoutValidation for Scenery {
    fn validate(&self) -> Vec<LayoutIssue> {
        let mut issues = Vec::new();
        for item in self.items() {
            check_links(self, item, &mut issues);
            check_shape(item, &mut issues);
            check_place(self, item, &mut issues);
        }
        check_crossings(self, &mut issues);
        issues
    }
}

fn references(item: &TrackItem) -> Vec<(LinkField, TrackItemId)> {
    let base = item.base();
    let mut refs = Vec::new();
    if let Some(id) = base.previous_id {
        refs.push((LinkField::Previous, id));
    }
    if let Some(id) = base.next_id {
        refs.push((LinkField::Next, id));
    }
    if let Some(id) = item.as_points().and_then(|p| p.reverse_id) {
        refs.push((LinkField::Reverse, id));
    }
    if let Some(id) = base.conflict_id {
        refs.push((LinkField::Conflict, id));
    }
    refs
}

fn check_links(scenery: &Scenery, item: &TrackItem, issues: &mut Vec<LayoutIssue>) {
    for (field, target_id) in references(item) {
        let Some(target) = scenery.item(target_id) else {
            issues.push(LayoutIssue::DanglingReference {
                item: item.id(),
                field,
                target: target_id,
            });
            continue;
        };

        if field == LinkField::Conflict {
            if target.base().conflict_id != Some(item.id()) {
                issues.push(LayoutIssue::AsymmetricLink {
                    item: item.id(),
                    target: target_id,
                });
            }
            continue;
        }

        if !target.kind().is_linkable() {
            issues.push(LayoutIssue::LinkToUnlinkable {
                item: item.id(),
                target: target_id,
            });
        } else if !target.linked_ids().contains(&item.id()) {
            issues.push(LayoutIssue::AsymmetricLink {
                item: item.id(),
                target: target_id,
            });
        }
    }
}

fn check_shape(item: &TrackItem, issues: &mut Vec<LayoutIssue>) {
    match item {
        TrackItem::End(_) => {
            let links = item.linked_ids().len();
            if links != 1 {
                issues.push(LayoutIssue::EndItemLinks { item: item.id(), links });
            }
        }
        TrackItem::Place(_) | TrackItem::Text(_) => {
            if !item.linked_ids().is_empty() {
                issues.push(LayoutIssue::UnexpectedLinks {
                    item: item.id(),
                    kind: item.kind(),
                });
            }
        }
        TrackItem::Points(points) => {
            if !points.ends_on_square() {
                issues.push(LayoutIssue::PointsEndOffSquare { item: item.id() });
            }
        }
        TrackItem::Line(_) | TrackItem::InvisibleLink(_) | TrackItem::Platform(_) => {}
    }
}

fn check_place(scenery: &Scenery, item: &TrackItem, issues: &mut Vec<LayoutIssue>) {
    if let Some(place) = item.as_place() {
        if place.code().is_none() {
            issues.push(LayoutIssue::PlaceWithoutCode { item: item.id() });
        }
        return;
    }
    if let Some(code) = item.base().place_code.as_deref() {
        if scenery.place_by_code(code).is_none() {
            issues.push(LayoutIssue::UnknownPlace {
                item: item.id(),
                code: code.to_string(),
            });
        }
    }
}

/// Track items crossing each other without points must declare each other as
/// conflict items, otherwise routes could be set on both at the same time.
fn check_crossings(scenery: &Scenery, issues: &mut Vec<LayoutIssue>) {
    let segments: Vec<_> = scenery
        .items()
        .filter(|item| item.kind() != TrackItemKind::PlatformItem)
        .filter_map(|item| item.end().map(|end| (item, item.origin(), end)))
        .collect();

    for (i, &(a, a1, a2)) in segments.iter().enumerate() {
        for &(b, b1, b2) in &segments[i + 1..] {
            if a.linked_ids().contains(&b.id()) {
                continue;
            }
            let declared = a.base().conflict_id == Some(b.id()) || b.base().conflict_id == Some(a.id());
            if !declared && segments_cross(a1, a2, b1, b2) {
                issues.push(LayoutIssue::UndeclaredCrossing {
                    item: a.id(),
                    other: b.id(),
                });
            }
        }
    }
}

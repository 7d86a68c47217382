use petgraph::algo::connected_components;
use petgraph::graph::{NodeIndex, UnGraph};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{Scenery, TrackItems};
use crate::models::{TrackItem, TrackItemId};

/// The kind of connection between two linked items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Link {
    /// A next/previous connection
    Normal,
    /// The connection at the reverse end of points
    Reverse,
}

/// Extension trait exporting the linkage of `Scenery` as a petgraph graph
pub trait Topology {
    /// Undirected graph of the items trains can run on, one edge per linked
    /// pair. Dangling references are left out.
    fn topology(&self) -> UnGraph<TrackItemId, Link>;

    /// Number of separate track networks in the layout
    fn connected_components(&self) -> usize;
}

impl Topology for Scenery {
    fn topology(&self) -> UnGraph<TrackItemId, Link> {
        let mut graph = UnGraph::new_undirected();
        let nodes: HashMap<TrackItemId, NodeIndex> = self
            .items()
            .filter(|item| item.kind().is_linkable())
            .map(|item| (item.id(), graph.add_node(item.id())))
            .collect();

        let mut connect = |from: TrackItemId, target: Option<TrackItemId>, link: Link| {
            let (Some(&from), Some(&to)) = (nodes.get(&from), target.and_then(|id| nodes.get(&id))) else {
                return;
            };
            // Symmetric links are seen from both ends, keep one edge
            if graph.find_edge(from, to).is_none() {
                graph.add_edge(from, to, link);
            }
        };

        // Reverse ends first: the branch item names the points as an
        // ordinary neighbour, which must not label the edge
        for points in self.items().filter_map(TrackItem::as_points) {
            connect(points.base.id, points.reverse_id, Link::Reverse);
        }
        for item in self.items() {
            connect(item.id(), item.previous_id(), Link::Normal);
            connect(item.id(), item.next_id(), Link::Normal);
        }

        graph
    }

    fn connected_components(&self) -> usize {
        connected_components(&self.topology())
    }
}

use super::id::{RouteId, TrackItemId, TrainId};

/// Mutable state attached to a track item for the duration of a run.
///
/// It is owned by the simulation stepping authority: this crate stores it and
/// reports it, but never decides when routes are set or trains move. It is
/// not part of the persisted layout.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuntimeState {
    active_route: Option<RouteId>,
    active_route_previous_item: Option<TrackItemId>,
    selected: bool,
    trains: Vec<TrainId>,
}

impl RuntimeState {
    #[must_use]
    pub fn active_route(&self) -> Option<RouteId> {
        self.active_route
    }

    /// Item preceding this one on the active route
    #[must_use]
    pub fn active_route_previous_item(&self) -> Option<TrackItemId> {
        self.active_route_previous_item
    }

    pub fn set_active_route(&mut self, route: RouteId, previous_item: Option<TrackItemId>) {
        self.active_route = Some(route);
        self.active_route_previous_item = previous_item;
    }

    pub fn reset_active_route(&mut self) {
        self.active_route = None;
        self.active_route_previous_item = None;
    }

    #[must_use]
    pub fn selected(&self) -> bool {
        self.selected
    }

    pub fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    /// Trains currently occupying the item, in arrival order
    #[must_use]
    pub fn trains(&self) -> &[TrainId] {
        &self.trains
    }

    #[must_use]
    pub fn train_present(&self) -> bool {
        !self.trains.is_empty()
    }

    /// Register a train on this item. A train already present is not added twice.
    pub fn add_train(&mut self, train: TrainId) {
        if !self.trains.contains(&train) {
            self.trains.push(train);
        }
    }

    /// Returns true if the train was present
    pub fn remove_train(&mut self, train: TrainId) -> bool {
        let before = self.trains.len();
        self.trains.retain(|&t| t != train);
        self.trains.len() != before
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

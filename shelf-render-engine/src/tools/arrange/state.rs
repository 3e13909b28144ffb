use bevy::prelude::*;

/// Whether the bookcase is being rearranged, and which root is held.
#[derive(Resource, Default, Debug)]
pub struct ArrangeState {
    pub active: bool,
    /// Root entity under the running drag.
    pub dragged: Option<Entity>,
}

/// Arrange-mode requests, from keyboard shortcuts or other front ends.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrangeAction {
    Toggle,
    Enter,
    Exit,
    /// Drop every override and restore the packed layout.
    ResetPositions,
}

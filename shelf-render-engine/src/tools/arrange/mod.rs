//! Arrange mode: pick up books and ornaments and put them somewhere else.
//!
//! ## Flow
//!
//! ```text
//! Tab ──> ArrangeAction::Toggle ──> ArrangeState.active
//!
//! left press  ──> pick_nearest ──> DragController::pointer_down
//! cursor move ──> pointer_move ──> root Transform follows
//! release / cursor exit / focus loss
//!             ──> pointer_up | pointer_leave | pointer_cancel
//!                 └─> OverrideStore::set (persisted immediately)
//! ```
//!
//! The controller itself knows nothing about windows or entities. It consumes
//! rays and writes through a [`PositionSink`], which keeps it testable
//! without an `App`.
//!
//! While a drag runs the orbit camera ignores the mouse. Books stop
//! reacting to hover for as long as arrange mode is on.

/// Pointer-driven drag state machine.
pub mod controller;
/// Arrange-mode resource and actions.
pub mod state;
/// Input systems that feed the controller.
pub mod systems;
/// Toolbar with the arrange toggle and reset button (native only).
#[cfg(not(target_arch = "wasm32"))]
pub mod ui;

use bevy::prelude::*;

use crate::engine::camera::orbit_camera_controller;
use crate::engine::core::app_state::AppState;
use crate::engine::scene::update_cursor_ray;

pub use controller::{
    DragCommit, DragController, DragSession, DragState, PointerSample, PositionSink,
};
pub use state::{ArrangeAction, ArrangeState};

use systems::{
    arrange_keyboard_shortcuts, begin_drag, end_drag, follow_drag, handle_arrange_actions,
    sync_input_locks,
};

/// Ordering handle for everything that reads the mouse on behalf of the
/// arrange tool.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArrangeSystems;

pub struct ArrangeToolPlugin;

impl Plugin for ArrangeToolPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ArrangeState>()
            .init_resource::<DragController>()
            .add_event::<ArrangeAction>()
            .add_systems(
                Update,
                // Release after grab: a click can press and release in one frame.
                (
                    handle_arrange_actions,
                    begin_drag,
                    follow_drag,
                    end_drag,
                    sync_input_locks,
                )
                    .chain()
                    .in_set(ArrangeSystems)
                    .after(update_cursor_ray)
                    .before(orbit_camera_controller)
                    .run_if(in_state(AppState::Running)),
            );

        app.add_systems(
            Update,
            arrange_keyboard_shortcuts
                .before(handle_arrange_actions)
                .run_if(in_state(AppState::Running)),
        );

        // Add arrange toolbar only for native builds.
        #[cfg(not(target_arch = "wasm32"))]
        {
            app.add_systems(Startup, ui::spawn_arrange_ui);
            app.add_systems(
                Update,
                (
                    (ui::arrange_toggle_interaction, ui::reset_positions_interaction)
                        .before(handle_arrange_actions),
                    ui::reflect_arrange_state.after(handle_arrange_actions),
                )
                    .run_if(in_state(AppState::Running)),
            );
        }
    }
}

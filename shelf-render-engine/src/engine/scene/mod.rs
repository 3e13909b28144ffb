//! The 3D bookcase.
//!
//! Turns a [`ShelfLayout`](crate::engine::layout::ShelfLayout) into entities:
//! frame, boards, floor, one draggable root per book and ornament. Also owns
//! ray picking and the hover response, which both the viewer and the arrange
//! tool rely on.

/// Marker components and the hover resources.
pub mod components;
/// Rebuilds the scene whenever the layout inputs change.
pub mod composer;
/// Cursor tracking and hover easing.
pub mod hover;
/// Procedural meshes for furniture, books and ornaments.
///
/// Everything is built from bevy primitives; there are no model assets.
pub mod meshes;
/// Ray against oriented boxes.
pub mod picking;

use bevy::prelude::*;

use crate::engine::core::app_state::AppState;

pub use components::{BookHoverFreeze, CursorRay, Draggable, HoverStyle, HoverVisual, HoveredItem, ShelfSceneEntity};
pub use composer::{ShelfLayoutDirty, compose_shelf_scene};
pub use hover::{animate_hover, update_cursor_ray, update_hovered_item};
pub use picking::pick_nearest;

/// Composition and hover. Arrange-mode input lives in the tools plugin.
pub struct ShelfScenePlugin;

impl Plugin for ShelfScenePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ShelfLayoutDirty>()
            .init_resource::<HoveredItem>()
            .init_resource::<BookHoverFreeze>()
            .init_resource::<CursorRay>()
            .add_systems(
                Update,
                (update_cursor_ray, compose_shelf_scene, update_hovered_item, animate_hover)
                    .chain()
                    .run_if(in_state(AppState::Running)),
            );
    }
}

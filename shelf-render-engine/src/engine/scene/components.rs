use bevy::prelude::*;

use crate::engine::overrides::DragTarget;

/// Everything the composer spawns. Despawned wholesale on recompose.
#[derive(Component)]
pub struct ShelfSceneEntity;

/// Root of a book or decor item. Its `Transform` is the item's layout
/// position; the picking box is expressed in the root's local space.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct Draggable {
    pub target: DragTarget,
    pub size: Vec3,
    /// Box centre relative to the root.
    pub centre: Vec3,
}

/// How a visual child reacts to the cursor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HoverStyle {
    /// Lift and turn, eased per frame.
    Book,
    /// Scale up, snapped.
    Decor { base_scale: f32 },
}

/// Child of a `Draggable` root that carries the meshes and the hover pose.
#[derive(Component, Debug, Clone, Copy)]
pub struct HoverVisual {
    pub style: HoverStyle,
}

/// Root currently under the cursor, if any.
#[derive(Resource, Default, Debug)]
pub struct HoveredItem(pub Option<Entity>);

/// World-space ray under the cursor, refreshed once per frame before
/// anything picks. `ray` is `None` while the cursor is outside the window.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct CursorRay {
    pub ray: Option<Ray3d>,
    /// Forward direction of the camera the ray was cast from.
    pub view: Dir3,
}

impl Default for CursorRay {
    fn default() -> Self {
        Self {
            ray: None,
            view: Dir3::NEG_Z,
        }
    }
}

/// Set while books must not react to hover, e.g. in arrange mode.
#[derive(Resource, Default, Debug)]
pub struct BookHoverFreeze(pub bool);

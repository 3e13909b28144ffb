use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use constants::interaction::{DECOR_HOVER_SCALE, HOVER_LERP_FACTOR, HOVER_LIFT, HOVER_YAW};

use super::components::{BookHoverFreeze, CursorRay, Draggable, HoverStyle, HoverVisual, HoveredItem};
use super::picking::pick_nearest;

/// One frame of fixed-fraction easing. Frame-rate dependent on purpose: the
/// same fraction is applied however long the frame took.
pub fn smooth_towards(current: f32, target: f32, factor: f32) -> f32 {
    current + (target - current) * factor
}

/// Cast the cursor into the scene. Only writes when the ray actually moved,
/// so readers can rely on change detection.
pub fn update_cursor_ray(
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&GlobalTransform, &Camera), With<Camera3d>>,
    mut cursor: ResMut<CursorRay>,
) {
    let Ok((cam_xf, camera)) = cameras.single() else {
        return;
    };
    let ray = windows
        .single()
        .ok()
        .and_then(Window::cursor_position)
        .and_then(|cursor_pos| camera.viewport_to_world(cam_xf, cursor_pos).ok());

    cursor.set_if_neq(CursorRay {
        ray,
        view: cam_xf.forward(),
    });
}

/// Track which root is under the cursor.
pub fn update_hovered_item(
    cursor: Res<CursorRay>,
    items: Query<(Entity, &GlobalTransform, &Draggable)>,
    mut hovered: ResMut<HoveredItem>,
) {
    let hit = cursor
        .ray
        .and_then(|ray| pick_nearest(ray, items.iter()))
        .map(|(entity, _)| entity);
    if hovered.0 != hit {
        hovered.0 = hit;
    }
}

/// Books lift and turn toward the viewer, ornaments swell. While
/// `BookHoverFreeze` is set books ease back to rest instead.
pub fn animate_hover(
    hovered: Res<HoveredItem>,
    freeze: Res<BookHoverFreeze>,
    mut visuals: Query<(&ChildOf, &HoverVisual, &mut Transform)>,
) {
    for (child_of, visual, mut transform) in visuals.iter_mut() {
        let is_hovered = hovered.0 == Some(child_of.parent());
        match visual.style {
            HoverStyle::Book => {
                let (lift, yaw) = if is_hovered && !freeze.0 {
                    (HOVER_LIFT, HOVER_YAW)
                } else {
                    (0.0, 0.0)
                };
                transform.translation.y = smooth_towards(transform.translation.y, lift, HOVER_LERP_FACTOR);
                let (current_yaw, _, _) = transform.rotation.to_euler(EulerRot::YXZ);
                transform.rotation =
                    Quat::from_rotation_y(smooth_towards(current_yaw, yaw, HOVER_LERP_FACTOR));
            }
            HoverStyle::Decor { base_scale } => {
                let factor = if is_hovered { DECOR_HOVER_SCALE } else { 1.0 };
                transform.scale = Vec3::splat(base_scale * factor);
            }
        }
    }
}

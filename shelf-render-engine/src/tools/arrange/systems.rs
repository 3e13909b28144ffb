use bevy::prelude::*;
use bevy::window::{CursorLeft, WindowFocused};
use constants::interaction::MOUSE_POINTER_ID;

use super::controller::{DragCommit, DragController, PointerSample};
use super::state::{ArrangeAction, ArrangeState};
use crate::engine::camera::CameraInputLock;
use crate::engine::overrides::OverrideStore;
use crate::engine::scene::{BookHoverFreeze, CursorRay, Draggable, ShelfLayoutDirty, pick_nearest};

/// Tab toggles arrange mode, Backspace resets positions while arranging.
pub fn arrange_keyboard_shortcuts(
    keys: Res<ButtonInput<KeyCode>>,
    state: Res<ArrangeState>,
    mut actions: EventWriter<ArrangeAction>,
) {
    if keys.just_pressed(KeyCode::Tab) {
        actions.write(ArrangeAction::Toggle);
    }
    if state.active && keys.just_pressed(KeyCode::Backspace) {
        actions.write(ArrangeAction::ResetPositions);
    }
}

pub fn handle_arrange_actions(
    mut actions: EventReader<ArrangeAction>,
    mut state: ResMut<ArrangeState>,
    mut drag: ResMut<DragController>,
    mut store: ResMut<OverrideStore>,
    mut dirty: ResMut<ShelfLayoutDirty>,
) {
    for action in actions.read() {
        match action {
            ArrangeAction::Toggle | ArrangeAction::Enter | ArrangeAction::Exit => {
                let active = match action {
                    ArrangeAction::Toggle => !state.active,
                    ArrangeAction::Enter => true,
                    _ => false,
                };
                if active == state.active {
                    continue;
                }
                if !active {
                    // Leaving mid-drag keeps where the item was dropped.
                    if let Some(commit) = drag.pointer_cancel(&mut *store) {
                        log_commit(&commit);
                    }
                    state.dragged = None;
                }
                state.active = active;
                info!("Arrange mode {}", if active { "on" } else { "off" });
            }
            ArrangeAction::ResetPositions => {
                if drag.target_lost().is_some() {
                    state.dragged = None;
                }
                store.reset_all();
                dirty.0 = true;
            }
        }
    }
}

/// Grab the nearest item under the cursor. Clicks on toolbar buttons are
/// left alone.
pub fn begin_drag(
    buttons: Res<ButtonInput<MouseButton>>,
    ui_buttons: Query<&Interaction, With<Button>>,
    cursor: Res<CursorRay>,
    items: Query<(Entity, &GlobalTransform, &Draggable)>,
    mut state: ResMut<ArrangeState>,
    mut drag: ResMut<DragController>,
) {
    if !state.active || !buttons.just_pressed(MouseButton::Left) {
        return;
    }
    if ui_buttons.iter().any(|interaction| *interaction != Interaction::None) {
        return;
    }

    let Some(ray) = cursor.ray else { return };
    let Some((entity, _)) = pick_nearest(ray, items.iter()) else {
        return;
    };
    let Ok((_, item_xf, item)) = items.get(entity) else {
        return;
    };

    let sample = PointerSample::new(MOUSE_POINTER_ID, ray);
    if drag.pointer_down(item.target.clone(), item_xf.translation(), cursor.view, sample) {
        state.dragged = Some(entity);
    }
}

/// Move the held root with the cursor. Runs only on frames where the cursor
/// ray changed.
pub fn follow_drag(
    cursor: Res<CursorRay>,
    state: Res<ArrangeState>,
    mut drag: ResMut<DragController>,
    mut roots: Query<&mut Transform, With<Draggable>>,
) {
    if !cursor.is_changed() {
        return;
    }
    let Some(entity) = state.dragged else { return };
    let Some(ray) = cursor.ray else { return };

    let Some(position) = drag.pointer_move(PointerSample::new(MOUSE_POINTER_ID, ray)) else {
        return;
    };
    if let Ok(mut transform) = roots.get_mut(entity) {
        transform.translation = position;
    }
}

/// Release, cursor exit and focus loss all commit; a despawned root does not.
pub fn end_drag(
    buttons: Res<ButtonInput<MouseButton>>,
    mut cursor_left: EventReader<CursorLeft>,
    mut focus: EventReader<WindowFocused>,
    mut state: ResMut<ArrangeState>,
    mut drag: ResMut<DragController>,
    mut store: ResMut<OverrideStore>,
    roots: Query<(), With<Draggable>>,
) {
    let left = cursor_left.read().count() > 0;
    let blurred = focus.read().any(|event| !event.focused);

    let Some(entity) = state.dragged else { return };

    if roots.get(entity).is_err() {
        drag.target_lost();
        state.dragged = None;
        return;
    }

    let commit = if buttons.just_released(MouseButton::Left) {
        drag.pointer_up(MOUSE_POINTER_ID, &mut *store)
    } else if left {
        drag.pointer_leave(MOUSE_POINTER_ID, &mut *store)
    } else if blurred {
        drag.pointer_cancel(&mut *store)
    } else {
        None
    };

    if let Some(commit) = commit {
        log_commit(&commit);
        state.dragged = None;
    } else if !drag.is_dragging() {
        state.dragged = None;
    }
}

/// Hand the mouse to the drag while it runs and keep books still in arrange
/// mode.
pub fn sync_input_locks(
    state: Res<ArrangeState>,
    drag: Res<DragController>,
    mut lock: ResMut<CameraInputLock>,
    mut freeze: ResMut<BookHoverFreeze>,
) {
    lock.locked = drag.is_dragging();
    freeze.0 = state.active;
}

fn log_commit(commit: &DragCommit) {
    info!("✓ Moved `{}` to {}", commit.target.id, commit.position);
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::input::ButtonState;
    use bevy::input::InputPlugin;
    use bevy::input::mouse::MouseButtonInput;
    use bevy::state::app::StatesPlugin;

    use crate::engine::book::BookRecord;
    use crate::engine::camera::OrbitCamera;
    use crate::engine::core::app_state::AppState;
    use crate::engine::layout::{ShelfConfig, ShelfLayout};
    use crate::engine::loading::Library;
    use crate::engine::overrides::{DragTarget, OverrideKind};
    use crate::engine::scene::{HoveredItem, compose_shelf_scene};
    use crate::tools::arrange::ArrangeToolPlugin;

    fn arrange_app() -> App {
        let mut app = App::new();
        app.add_event::<ArrangeAction>()
            .init_resource::<ArrangeState>()
            .init_resource::<DragController>()
            .insert_resource(OverrideStore::in_memory())
            .insert_resource(ShelfLayoutDirty(false))
            .add_systems(Update, handle_arrange_actions);
        app
    }

    fn grab(app: &mut App, id: &str, at: Vec3) {
        let ray = Ray3d::new(at + Vec3::Z * 10.0, Dir3::NEG_Z);
        let mut drag = app.world_mut().resource_mut::<DragController>();
        assert!(drag.pointer_down(DragTarget::book(id), at, Dir3::NEG_Z, PointerSample::new(MOUSE_POINTER_ID, ray)));
    }

    #[test]
    fn toggle_flips_arrange_mode() {
        let mut app = arrange_app();
        app.world_mut().send_event(ArrangeAction::Toggle);
        app.update();
        assert!(app.world().resource::<ArrangeState>().active);

        app.world_mut().send_event(ArrangeAction::Toggle);
        app.update();
        assert!(!app.world().resource::<ArrangeState>().active);
    }

    #[test]
    fn leaving_mid_drag_commits_the_drop() {
        let mut app = arrange_app();
        app.world_mut().send_event(ArrangeAction::Enter);
        app.update();

        grab(&mut app, "b1", Vec3::new(0.5, 1.0, 0.0));
        app.world_mut().send_event(ArrangeAction::Exit);
        app.update();

        assert!(!app.world().resource::<DragController>().is_dragging());
        assert_eq!(app.world().resource::<OverrideStore>().book("b1"), Some(Vec3::new(0.5, 1.0, 0.0)));
        assert!(!app.world().resource::<ShelfLayoutDirty>().0);
    }

    #[test]
    fn reset_drops_overrides_and_running_drag() {
        let mut app = arrange_app();
        app.world_mut().resource_mut::<OverrideStore>().set(
            crate::engine::overrides::OverrideKind::Book,
            "b2",
            Vec3::new(1.0, 2.0, 3.0),
        );
        grab(&mut app, "b1", Vec3::ONE);

        app.world_mut().send_event(ArrangeAction::ResetPositions);
        app.update();

        assert!(!app.world().resource::<DragController>().is_dragging());
        assert!(app.world().resource::<OverrideStore>().is_empty());
        assert!(app.world().resource::<ShelfLayoutDirty>().0);
    }

    #[test]
    fn entering_twice_is_a_no_op() {
        let mut app = arrange_app();
        app.world_mut().send_event(ArrangeAction::Enter);
        app.world_mut().send_event(ArrangeAction::Enter);
        app.update();
        assert!(app.world().resource::<ArrangeState>().active);
    }

    /// The whole arrange plugin in arrange mode. There is no window, so the
    /// cursor ray is set by hand.
    fn plugin_app() -> App {
        let mut app = App::new();
        app.add_plugins((StatesPlugin, InputPlugin))
            .insert_state(AppState::Running)
            .add_event::<CursorLeft>()
            .add_event::<WindowFocused>()
            .insert_resource(OverrideStore::in_memory())
            .insert_resource(ShelfLayoutDirty(false))
            .init_resource::<CameraInputLock>()
            .init_resource::<BookHoverFreeze>()
            .init_resource::<CursorRay>()
            .add_plugins(ArrangeToolPlugin);
        app.world_mut().resource_mut::<ArrangeState>().active = true;
        app
    }

    fn spawn_book(app: &mut App, id: &str, at: Vec3) -> Entity {
        app.world_mut()
            .spawn((
                Transform::from_translation(at),
                GlobalTransform::from_translation(at),
                Draggable {
                    target: DragTarget::book(id),
                    size: Vec3::new(0.3, 1.0, 0.8),
                    centre: Vec3::ZERO,
                },
            ))
            .id()
    }

    fn point_at(app: &mut App, x: f32, y: f32) {
        app.world_mut().resource_mut::<CursorRay>().ray =
            Some(Ray3d::new(Vec3::new(x, y, 10.0), Dir3::NEG_Z));
    }

    fn left_button(app: &mut App, state: ButtonState) {
        app.world_mut().send_event(MouseButtonInput {
            button: MouseButton::Left,
            state,
            window: Entity::PLACEHOLDER,
        });
    }

    fn camera_locked(app: &App) -> bool {
        app.world().resource::<CameraInputLock>().locked
    }

    #[test]
    fn click_inside_one_frame_still_ends_the_drag() {
        let mut app = plugin_app();
        let at = Vec3::new(0.0, 1.0, 0.0);
        spawn_book(&mut app, "b1", at);

        point_at(&mut app, 0.0, 1.0);
        left_button(&mut app, ButtonState::Pressed);
        left_button(&mut app, ButtonState::Released);
        app.update();

        assert!(!app.world().resource::<DragController>().is_dragging());
        assert!(app.world().resource::<ArrangeState>().dragged.is_none());
        assert!(!camera_locked(&app));
        assert_eq!(app.world().resource::<OverrideStore>().book("b1"), Some(at));

        app.update();
        assert!(!app.world().resource::<DragController>().is_dragging());
    }

    #[test]
    fn camera_stays_locked_for_the_whole_drag() {
        let mut app = plugin_app();
        let root = spawn_book(&mut app, "b1", Vec3::new(0.0, 1.0, 0.0));

        point_at(&mut app, 0.0, 1.0);
        left_button(&mut app, ButtonState::Pressed);
        app.update();
        assert_eq!(app.world().resource::<ArrangeState>().dragged, Some(root));
        assert!(camera_locked(&app));
        assert!(app.world().resource::<BookHoverFreeze>().0);

        point_at(&mut app, 1.5, 2.0);
        app.update();
        assert_eq!(app.world().get::<Transform>(root).map(|t| t.translation), Some(Vec3::new(1.5, 2.0, 0.0)));
        assert!(camera_locked(&app));
        assert!(app.world().resource::<OverrideStore>().is_empty());

        left_button(&mut app, ButtonState::Released);
        app.update();
        assert!(!camera_locked(&app));
        assert_eq!(app.world().resource::<OverrideStore>().book("b1"), Some(Vec3::new(1.5, 2.0, 0.0)));
    }

    #[test]
    fn despawned_root_ends_the_drag_without_a_write() {
        let mut app = plugin_app();
        let root = spawn_book(&mut app, "b1", Vec3::new(0.0, 1.0, 0.0));

        point_at(&mut app, 0.0, 1.0);
        left_button(&mut app, ButtonState::Pressed);
        app.update();
        assert!(app.world().resource::<DragController>().is_dragging());

        app.world_mut().despawn(root);
        point_at(&mut app, 2.0, 2.0);
        app.update();

        assert!(!app.world().resource::<DragController>().is_dragging());
        assert!(app.world().resource::<ArrangeState>().dragged.is_none());
        assert!(app.world().resource::<OverrideStore>().is_empty());
        assert!(!camera_locked(&app));
    }

    fn root_positions(app: &mut App, id: &str) -> Vec<Vec3> {
        let mut roots = app.world_mut().query::<(&Draggable, &Transform)>();
        roots
            .iter(app.world())
            .filter(|(item, _)| item.target.id == id)
            .map(|(_, transform)| transform.translation)
            .collect()
    }

    #[test]
    fn reset_rebuilds_the_scene_at_packed_positions() {
        let books = vec![BookRecord::new("b1", "Dune"), BookRecord::new("b2", "Emma")];
        let mut app = arrange_app();
        app.init_resource::<Assets<Mesh>>()
            .init_resource::<Assets<StandardMaterial>>()
            .init_resource::<HoveredItem>()
            .init_resource::<ShelfConfig>()
            .insert_resource(Library { books: books.clone() })
            .insert_resource(OrbitCamera::looking_from(Vec3::new(0.0, 3.0, 10.0), Vec3::ZERO))
            .add_systems(Update, compose_shelf_scene.after(handle_arrange_actions));

        let pinned = Vec3::new(3.0, 3.0, 0.0);
        app.world_mut().resource_mut::<OverrideStore>().set(OverrideKind::Book, "b1", pinned);
        app.world_mut().resource_mut::<ShelfLayoutDirty>().0 = true;
        app.update();
        assert_eq!(root_positions(&mut app, "b1"), vec![pinned]);

        app.world_mut().send_event(ArrangeAction::ResetPositions);
        app.update();

        let packed = ShelfLayout::compute(&books, &ShelfConfig::default(), &OverrideStore::in_memory());
        assert_eq!(root_positions(&mut app, "b1"), vec![packed.books[0].position]);
        assert!(!app.world().resource::<ShelfLayoutDirty>().0);
    }
}

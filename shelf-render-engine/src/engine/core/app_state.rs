use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;

use crate::engine::loading::LibraryLoader;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum AppState {
    #[default]
    Loading,
    Running,
}

#[derive(Component)]
pub struct FpsText;

/// Leave `Loading` once the library has arrived or failed for good.
pub fn transition_to_running(loader: Res<LibraryLoader>, mut next_state: ResMut<NextState<AppState>>) {
    if loader.is_finished() {
        info!("→ Library settled, transitioning to Running state");
        next_state.set(AppState::Running);
    }
}

pub fn fps_text_update_system(
    diagnostics: Res<DiagnosticsStore>,
    mut query: Query<&mut Text, With<FpsText>>,
) {
    for mut text in &mut query {
        if let Some(fps) = diagnostics.get(&FrameTimeDiagnosticsPlugin::FPS) {
            if let Some(value) = fps.smoothed() {
                text.0 = format!("FPS: {value:.1}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::state::app::StatesPlugin;

    #[test]
    fn waits_for_the_library() {
        let mut app = App::new();
        app.add_plugins(StatesPlugin)
            .init_state::<AppState>()
            .init_resource::<LibraryLoader>()
            .add_systems(Update, transition_to_running.run_if(in_state(AppState::Loading)));

        app.update();
        app.update();
        assert_eq!(*app.world().resource::<State<AppState>>().get(), AppState::Loading);

        app.world_mut().resource_mut::<LibraryLoader>().finish();
        app.update();
        app.update();
        assert_eq!(*app.world().resource::<State<AppState>>().get(), AppState::Running);
    }
}

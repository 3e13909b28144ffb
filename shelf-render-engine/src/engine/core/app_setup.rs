use bevy::asset::AssetMetaCheck;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;
use constants::interaction::{CAMERA_FOV_DEGREES, CAMERA_START};
use constants::palette::SCENE_BACKGROUND_COLOUR;

// Crate engine modules
use crate::engine::book::Rgb;
use crate::engine::camera::{CameraInputLock, OrbitCamera, orbit_camera_controller};
use crate::engine::core::app_state::{AppState, FpsText, fps_text_update_system, transition_to_running};
use crate::engine::core::window_config::create_window_config;
use crate::engine::layout::ShelfConfig;
use crate::engine::loading::{
    Library, LibraryLoader, LibraryManifest, poll_library_loading, start_library_loading,
};
use crate::engine::overrides::{OverrideStore, default_storage};
use crate::engine::scene::ShelfScenePlugin;
// Crate tools modules
use crate::tools::arrange::ArrangeToolPlugin;

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .init_state::<AppState>()
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        // Registers the book list as a loadable asset type from JSON files.
        .add_plugins(JsonAssetPlugin::<LibraryManifest>::new(&["json"]))
        .insert_resource(ClearColor(Rgb::from_packed(SCENE_BACKGROUND_COLOUR).to_color()))
        .insert_resource(AmbientLight {
            color: Color::WHITE,
            brightness: 500.0,
            ..default()
        });

    // Initialise resources early
    app.init_resource::<ShelfConfig>()
        .init_resource::<Library>()
        .init_resource::<LibraryLoader>()
        .init_resource::<CameraInputLock>()
        .insert_resource(OverrideStore::load(default_storage()))
        .insert_resource(OrbitCamera::looking_from(
            Vec3::from_array(CAMERA_START),
            Vec3::ZERO,
        ));

    app.add_plugins((ShelfScenePlugin, ArrangeToolPlugin));

    app.add_systems(Startup, (setup, start_library_loading))
        .add_systems(
            Update,
            (poll_library_loading, transition_to_running)
                .chain()
                .run_if(in_state(AppState::Loading)),
        )
        .add_systems(
            Update,
            orbit_camera_controller.run_if(in_state(AppState::Running)),
        );

    // Add fps_text_update_system only for native builds.
    #[cfg(not(target_arch = "wasm32"))]
    {
        app.add_systems(Update, fps_text_update_system);
    }

    app
}

fn spawn_lighting(commands: &mut Commands) {
    commands.spawn((
        DirectionalLight {
            illuminance: 9_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(5.0, 10.0, 8.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    // Warm fill from both sides.
    for (position, colour, intensity) in [
        (Vec3::new(-4.0, 5.0, 4.0), 0xFFE4B5, 400_000.0),
        (Vec3::new(4.0, 3.0, 5.0), 0xFFF8DC, 300_000.0),
    ] {
        commands.spawn((
            PointLight {
                color: Rgb::from_packed(colour).to_color(),
                intensity,
                ..default()
            },
            Transform::from_translation(position),
        ));
    }
}

fn spawn_camera(commands: &mut Commands, orbit: &OrbitCamera) {
    commands.spawn((
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: CAMERA_FOV_DEGREES.to_radians(),
            ..default()
        }),
        orbit.transform(),
    ));
}

// Startup system that only handles basic initialisation
fn setup(mut commands: Commands, orbit: Res<OrbitCamera>) {
    spawn_lighting(&mut commands);
    spawn_camera(&mut commands, &orbit);

    #[cfg(not(target_arch = "wasm32"))]
    {
        create_native_overlays(&mut commands);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn create_native_overlays(commands: &mut Commands) {
    commands
        .spawn(Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                Text::new("FPS: "),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::srgb(1., 0., 0.)),
                Node {
                    position_type: PositionType::Absolute,
                    bottom: Val::Px(12.0),
                    right: Val::Px(12.0),
                    ..default()
                },
                FpsText,
            ));
        });
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}

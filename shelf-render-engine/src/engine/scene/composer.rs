use bevy::prelude::*;
use constants::shelf_geometry::{DECOR_SCALE, INVISIBLE_SHELF_INDEX};

use super::components::{Draggable, HoverStyle, HoverVisual, HoveredItem, ShelfSceneEntity};
use super::meshes::{
    decor_bounds, spawn_book_meshes, spawn_decor_meshes, spawn_floor, spawn_frame, spawn_shelf,
};
use crate::engine::camera::OrbitCamera;
use crate::engine::layout::{PlacedDecor, PlacedItem, ShelfConfig, ShelfLayout};
use crate::engine::loading::Library;
use crate::engine::overrides::{DragTarget, OverrideStore};

/// Set whenever the library or the override maps change in a way the live
/// scene does not already show. Drags move their root directly and leave
/// this alone.
#[derive(Resource, Debug)]
pub struct ShelfLayoutDirty(pub bool);

impl Default for ShelfLayoutDirty {
    fn default() -> Self {
        Self(true)
    }
}

/// Rebuild the bookcase from the current library and overrides.
pub fn compose_shelf_scene(
    mut commands: Commands,
    mut dirty: ResMut<ShelfLayoutDirty>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut orbit: ResMut<OrbitCamera>,
    mut hovered: ResMut<HoveredItem>,
    library: Res<Library>,
    config: Res<ShelfConfig>,
    overrides: Res<OverrideStore>,
    existing: Query<Entity, With<ShelfSceneEntity>>,
) {
    if !dirty.0 {
        return;
    }
    dirty.0 = false;

    for entity in existing.iter() {
        commands.entity(entity).despawn();
    }
    hovered.0 = None;

    let layout = ShelfLayout::compute(&library.books, &config, &overrides);

    spawn_frame(&mut commands, &mut meshes, &mut materials, layout.shelf_count, config.shelf_spacing);
    for shelf_index in 0..layout.shelf_count {
        spawn_shelf(
            &mut commands,
            &mut meshes,
            &mut materials,
            shelf_index,
            config.shelf_y(shelf_index),
            shelf_index == INVISIBLE_SHELF_INDEX,
        );
    }
    spawn_floor(&mut commands, &mut meshes, &mut materials);

    for item in &layout.books {
        spawn_book(&mut commands, &mut meshes, &mut materials, item);
    }
    for decor in &layout.decor {
        spawn_decor(&mut commands, &mut meshes, &mut materials, decor);
    }

    orbit.retarget(layout.shelf_count, config.shelf_spacing);

    let moved = layout.books.iter().filter(|b| b.overridden).count()
        + layout.decor.iter().filter(|d| d.overridden).count();
    info!(
        "✓ Bookcase composed: {} books, {} ornaments, {} shelves ({} moved)",
        layout.books.len(),
        layout.decor.len(),
        layout.shelf_count,
        moved
    );
}

fn spawn_book(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    item: &PlacedItem,
) {
    commands
        .spawn((
            ShelfSceneEntity,
            Name::new(format!("book_{}", item.id)),
            Draggable {
                target: DragTarget::book(item.id.clone()),
                size: item.dimensions.extents(),
                centre: Vec3::ZERO,
            },
            Transform::from_translation(item.position),
            Visibility::default(),
        ))
        .with_children(|root| {
            root.spawn((
                HoverVisual { style: HoverStyle::Book },
                Transform::default(),
                Visibility::default(),
            ))
            .with_children(|visual| spawn_book_meshes(visual, meshes, materials, item));
        });
}

fn spawn_decor(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    decor: &PlacedDecor,
) {
    let kind = decor.slot.kind;
    let (size, centre) = decor_bounds(kind);

    commands
        .spawn((
            ShelfSceneEntity,
            Name::new(decor.slot.id.clone()),
            Draggable {
                target: DragTarget::decor(decor.slot.id.clone()),
                size: size * DECOR_SCALE,
                centre: centre * DECOR_SCALE,
            },
            Transform::from_translation(decor.position),
            Visibility::default(),
        ))
        .with_children(|root| {
            root.spawn((
                HoverVisual {
                    style: HoverStyle::Decor { base_scale: DECOR_SCALE },
                },
                Transform::from_scale(Vec3::splat(DECOR_SCALE)),
                Visibility::default(),
            ))
            .with_children(|visual| spawn_decor_meshes(visual, meshes, materials, kind));
        });
}

//! Primitive meshes for the bookcase, books and ornaments.
//!
//! Everything is built from bevy's mesh primitives; there are no model files.

use std::f32::consts::FRAC_PI_2;

use bevy::prelude::*;
use constants::palette::{PAGE_BOTTOM_COLOUR, PAGE_TOP_COLOUR};
use constants::shelf_geometry::{
    FLOOR_Y, FRAME_WIDTH, SHELF_BOARD_DEPTH, SHELF_BOARD_HEIGHT, SHELF_BOARD_WIDTH,
};

use super::components::ShelfSceneEntity;
use crate::engine::book::Rgb;
use crate::engine::layout::{DecorKind, PlacedItem};

const FRAME_COLOUR: u32 = 0x6B4226;
const FRAME_COLOUR_DARK: u32 = 0x4A2F1A;
const BACK_PANEL_COLOUR: u32 = 0x2A1A0F;
const WOOD_COLOUR: u32 = 0x9B6B3D;
const WOOD_COLOUR_DARK: u32 = 0x7B522D;
const WOOD_COLOUR_LIGHT: u32 = 0xB87D4A;
const FLOOR_COLOUR: u32 = 0x3D2B1F;

/// Opacity of the board that blends into the background.
const INVISIBLE_SHELF_ALPHA: f32 = 0.3;

fn surface(colour: Color, roughness: f32, metalness: f32) -> StandardMaterial {
    StandardMaterial {
        base_color: colour,
        perceptual_roughness: roughness,
        metallic: metalness,
        ..default()
    }
}

fn packed(colour: u32) -> Color {
    Rgb::from_packed(colour).to_color()
}

fn spawn_box(
    parent: &mut ChildSpawnerCommands,
    meshes: &mut Assets<Mesh>,
    material: Handle<StandardMaterial>,
    size: Vec3,
    at: Vec3,
) {
    parent.spawn((
        Mesh3d(meshes.add(Cuboid::from_size(size))),
        MeshMaterial3d(material),
        Transform::from_translation(at),
    ));
}

/// Back panel, side panels, crown and base around `shelf_count` shelves.
pub fn spawn_frame(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    shelf_count: usize,
    shelf_spacing: f32,
) {
    let total_height = shelf_count as f32 * shelf_spacing + 0.5;
    let mid_y = total_height / 2.0 - 0.5;
    let half_width = FRAME_WIDTH / 2.0;

    let frame = materials.add(surface(packed(FRAME_COLOUR), 0.75, 0.05));
    let frame_dark = materials.add(surface(packed(FRAME_COLOUR_DARK), 0.7, 0.05));
    let back = materials.add(surface(packed(BACK_PANEL_COLOUR), 0.95, 0.0));

    commands
        .spawn((
            ShelfSceneEntity,
            Name::new("bookcase_frame"),
            Transform::default(),
            Visibility::default(),
        ))
        .with_children(|parent| {
            let panel_height = total_height + 0.5;
            spawn_box(parent, meshes, back, Vec3::new(FRAME_WIDTH + 0.3, panel_height, 0.15), Vec3::new(0.0, mid_y, -1.0));
            spawn_box(parent, meshes, frame.clone(), Vec3::new(0.2, panel_height, 2.2), Vec3::new(-half_width - 0.1, mid_y, 0.0));
            spawn_box(parent, meshes, frame.clone(), Vec3::new(0.2, panel_height, 2.2), Vec3::new(half_width + 0.1, mid_y, 0.0));
            spawn_box(parent, meshes, frame_dark.clone(), Vec3::new(FRAME_WIDTH + 0.5, 0.25, 2.4), Vec3::new(0.0, total_height - 0.15, 0.2));
            spawn_box(parent, meshes, frame_dark, Vec3::new(FRAME_WIDTH + 0.5, 0.3, 2.6), Vec3::new(0.0, -0.2, 0.3));
            spawn_box(parent, meshes, frame, Vec3::new(FRAME_WIDTH + 0.6, 0.15, 2.8), Vec3::new(0.0, -0.4, 0.4));
        });
}

/// One board with its front lip and groove. An invisible shelf is drawn as a
/// faint dark pane.
pub fn spawn_shelf(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    shelf_index: usize,
    y: f32,
    invisible: bool,
) {
    let wood = |colour: u32, roughness: f32| {
        if invisible {
            StandardMaterial {
                alpha_mode: AlphaMode::Blend,
                ..surface(Color::srgba(0.0, 0.0, 0.0, INVISIBLE_SHELF_ALPHA), roughness, 0.05)
            }
        } else {
            surface(packed(colour), roughness, 0.05)
        }
    };
    let board = materials.add(wood(WOOD_COLOUR, 0.75));
    let lip = materials.add(wood(WOOD_COLOUR_DARK, 0.7));
    let groove = materials.add(wood(WOOD_COLOUR_LIGHT, 0.6));

    commands
        .spawn((
            ShelfSceneEntity,
            Name::new(format!("shelf_{shelf_index}")),
            Transform::from_xyz(0.0, y, 0.0),
            Visibility::default(),
        ))
        .with_children(|parent| {
            spawn_box(parent, meshes, board, Vec3::new(SHELF_BOARD_WIDTH, SHELF_BOARD_HEIGHT, SHELF_BOARD_DEPTH), Vec3::ZERO);
            spawn_box(parent, meshes, lip, Vec3::new(SHELF_BOARD_WIDTH, 0.2, 0.12), Vec3::new(0.0, 0.1, 0.95));
            spawn_box(parent, meshes, groove, Vec3::new(SHELF_BOARD_WIDTH - 0.2, 0.04, 0.02), Vec3::new(0.0, 0.02, 0.96));
        });
}

pub fn spawn_floor(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) {
    commands.spawn((
        ShelfSceneEntity,
        Name::new("floor"),
        Mesh3d(meshes.add(Plane3d::default().mesh().size(14.0, 8.0))),
        MeshMaterial3d(materials.add(surface(packed(FLOOR_COLOUR), 0.85, 0.0))),
        Transform::from_xyz(0.0, FLOOR_Y, 1.0),
    ));
}

/// Body, spine plate, page edges and a title band in the label ink.
pub fn spawn_book_meshes(
    parent: &mut ChildSpawnerCommands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    item: &PlacedItem,
) {
    let dims = item.dimensions;
    let roughness = item.finish.roughness();
    let metalness = item.finish.metalness();
    let half = dims.extents() / 2.0;

    let cover = materials.add(surface(item.colour.varied.to_color(), roughness, metalness));
    let spine = materials.add(surface(item.colour.spine(), roughness - 0.1, metalness + 0.02));
    let shade = materials.add(surface(item.colour.shade(), roughness, metalness));
    let top = materials.add(surface(packed(PAGE_TOP_COLOUR), 0.95, 0.0));
    let bottom = materials.add(surface(packed(PAGE_BOTTOM_COLOUR), 0.95, 0.0));
    let label = materials.add(surface(item.colour.label.to_color(), 0.9, 0.0));

    spawn_box(parent, meshes, cover, dims.extents(), Vec3::ZERO);
    spawn_box(parent, meshes, spine, Vec3::new(dims.width * 0.98, dims.height * 0.98, 0.01), Vec3::new(0.0, 0.0, half.z + 0.005));
    spawn_box(parent, meshes, shade, Vec3::new(dims.width * 0.98, dims.height * 0.98, 0.01), Vec3::new(0.0, 0.0, -half.z - 0.005));
    spawn_box(parent, meshes, top, Vec3::new(dims.width * 0.9, 0.01, dims.depth * 0.9), Vec3::new(0.0, half.y + 0.005, 0.0));
    spawn_box(parent, meshes, bottom, Vec3::new(dims.width * 0.9, 0.01, dims.depth * 0.9), Vec3::new(0.0, -half.y - 0.005, 0.0));
    spawn_box(parent, meshes, label, Vec3::new(dims.width * 0.6, dims.height * 0.35, 0.005), Vec3::new(0.0, dims.height * 0.1, half.z + 0.013));
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PartShape {
    /// Cylinder along y; equal radii make a plain cylinder.
    Frustum { top: f32, bottom: f32, height: f32 },
    Sphere(f32),
    Cuboid(Vec3),
    /// Ring standing in the xy plane.
    Ring { major: f32, minor: f32 },
    /// Flat disc facing +z.
    Disc(f32),
}

impl PartShape {
    fn mesh(self) -> Mesh {
        match self {
            Self::Frustum { top, bottom, height } => ConicalFrustum {
                radius_top: top,
                radius_bottom: bottom,
                height,
            }
            .mesh()
            .build(),
            Self::Sphere(radius) => Sphere::new(radius).mesh().uv(24, 16),
            Self::Cuboid(size) => Cuboid::from_size(size).mesh().build(),
            Self::Ring { major, minor } => Torus::new(major - minor, major + minor).mesh().build(),
            Self::Disc(radius) => Circle::new(radius).mesh().build(),
        }
    }

    /// Half extents in the part's own frame.
    fn half_extents(self) -> Vec3 {
        match self {
            Self::Frustum { top, bottom, height } => {
                let r = top.max(bottom);
                Vec3::new(r, height / 2.0, r)
            }
            Self::Sphere(r) => Vec3::splat(r),
            Self::Cuboid(size) => size / 2.0,
            Self::Ring { major, minor } => Vec3::new(major + minor, major + minor, minor),
            Self::Disc(r) => Vec3::new(r, r, 0.0),
        }
    }
}

/// One primitive of an ornament, in unscaled ornament space with y = 0 at
/// the base.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecorPart {
    pub shape: PartShape,
    pub offset: Vec3,
    /// Rotation about x then z, radians.
    pub turn: (f32, f32),
    pub colour: u32,
    pub roughness: f32,
    pub metalness: f32,
}

const fn part(shape: PartShape, offset: Vec3, colour: u32, roughness: f32, metalness: f32) -> DecorPart {
    DecorPart {
        shape,
        offset,
        turn: (0.0, 0.0),
        colour,
        roughness,
        metalness,
    }
}

const fn frustum(top: f32, bottom: f32, height: f32) -> PartShape {
    PartShape::Frustum { top, bottom, height }
}

const PLANT: [DecorPart; 6] = [
    part(frustum(0.3, 0.22, 0.5), Vec3::new(0.0, 0.25, 0.0), 0xC45C26, 0.8, 0.0),
    part(frustum(0.32, 0.3, 0.08), Vec3::new(0.0, 0.52, 0.0), 0xB54D1A, 0.75, 0.0),
    part(frustum(0.28, 0.28, 0.05), Vec3::new(0.0, 0.48, 0.0), 0x3D2517, 0.95, 0.0),
    part(PartShape::Sphere(0.45), Vec3::new(0.0, 0.85, 0.0), 0x2E8B2E, 0.85, 0.0),
    part(PartShape::Sphere(0.25), Vec3::new(0.2, 1.1, 0.1), 0x3CB371, 0.85, 0.0),
    part(PartShape::Sphere(0.2), Vec3::new(-0.15, 1.05, -0.1), 0x228B22, 0.85, 0.0),
];

const GLOBE: [DecorPart; 4] = [
    part(frustum(0.25, 0.3, 0.2), Vec3::new(0.0, 0.1, 0.0), 0x5D4037, 0.7, 0.2),
    part(frustum(0.05, 0.05, 0.4), Vec3::new(0.0, 0.35, 0.0), 0x8D6E63, 0.6, 0.3),
    DecorPart {
        turn: (0.0, 0.2),
        ..part(PartShape::Ring { major: 0.4, minor: 0.02 }, Vec3::new(0.0, 0.7, 0.0), 0x8D6E63, 0.6, 0.3)
    },
    part(PartShape::Sphere(0.38), Vec3::new(0.0, 0.7, 0.0), 0x5DADE2, 0.4, 0.1),
];

const VASE: [DecorPart; 5] = [
    part(frustum(0.18, 0.28, 1.0), Vec3::new(0.0, 0.5, 0.0), 0xD4A574, 0.5, 0.2),
    part(frustum(0.12, 0.18, 0.15), Vec3::new(0.0, 1.05, 0.0), 0xC9986C, 0.5, 0.2),
    part(PartShape::Sphere(0.15), Vec3::new(0.0, 1.4, 0.0), 0xE74C3C, 0.8, 0.0),
    part(PartShape::Sphere(0.12), Vec3::new(0.12, 1.5, 0.08), 0xF39C12, 0.8, 0.0),
    part(PartShape::Sphere(0.1), Vec3::new(-0.1, 1.45, -0.05), 0x9B59B6, 0.8, 0.0),
];

const CLOCK: [DecorPart; 3] = [
    DecorPart {
        turn: (FRAC_PI_2, 0.0),
        ..part(frustum(0.35, 0.35, 0.12), Vec3::new(0.0, 0.55, 0.0), 0x8B4513, 0.6, 0.2)
    },
    part(PartShape::Disc(0.3), Vec3::new(0.0, 0.55, 0.07), 0xFFFEF0, 0.9, 0.0),
    part(PartShape::Cuboid(Vec3::new(0.5, 0.3, 0.15)), Vec3::new(0.0, 0.15, 0.0), 0x6B4226, 0.7, 0.0),
];

pub fn decor_parts(kind: DecorKind) -> &'static [DecorPart] {
    match kind {
        DecorKind::Plant => &PLANT,
        DecorKind::Globe => &GLOBE,
        DecorKind::Vase => &VASE,
        DecorKind::Clock => &CLOCK,
    }
}

impl DecorPart {
    fn rotation(&self) -> Quat {
        let (x, z) = self.turn;
        let base = match self.shape {
            PartShape::Ring { .. } => Quat::from_rotation_x(FRAC_PI_2),
            _ => Quat::IDENTITY,
        };
        Quat::from_rotation_z(z) * Quat::from_rotation_x(x) * base
    }

    fn is_turned(&self) -> bool {
        self.turn != (0.0, 0.0)
    }
}

/// Unscaled picking box of an ornament: `(size, centre)`. Turned parts are
/// bounded by their enclosing sphere.
pub fn decor_bounds(kind: DecorKind) -> (Vec3, Vec3) {
    let (min, max) = decor_parts(kind).iter().fold(
        (Vec3::splat(f32::INFINITY), Vec3::splat(f32::NEG_INFINITY)),
        |(min, max), part| {
            let half = part.shape.half_extents();
            let half = if part.is_turned() { Vec3::splat(half.length()) } else { half };
            (min.min(part.offset - half), max.max(part.offset + half))
        },
    );
    (max - min, (max + min) / 2.0)
}

pub fn spawn_decor_meshes(
    parent: &mut ChildSpawnerCommands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    kind: DecorKind,
) {
    for part in decor_parts(kind) {
        parent.spawn((
            Mesh3d(meshes.add(part.shape.mesh())),
            MeshMaterial3d(materials.add(surface(packed(part.colour), part.roughness, part.metalness))),
            Transform::from_translation(part.offset).with_rotation(part.rotation()),
        ));
    }
}

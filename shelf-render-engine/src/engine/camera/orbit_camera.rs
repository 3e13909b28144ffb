use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use constants::interaction::{
    CAMERA_MAX_DISTANCE, CAMERA_MAX_POLAR, CAMERA_MIN_DISTANCE, CAMERA_MIN_POLAR,
    ORBIT_SENSITIVITY, ZOOM_STEP,
};

/// Orbit rig around the middle of the bookcase. Angles are spherical:
/// `polar` from +Y, `yaw` around +Y with zero looking down -Z.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct OrbitCamera {
    pub target: Vec3,
    pub distance: f32,
    pub yaw: f32,
    pub polar: f32,
}

impl OrbitCamera {
    /// Rig that looks from `eye` at `target`, pulled inside the limits.
    pub fn looking_from(eye: Vec3, target: Vec3) -> Self {
        let offset = eye - target;
        let distance = offset.length().max(f32::EPSILON);
        let mut rig = Self {
            target,
            distance,
            yaw: offset.x.atan2(offset.z),
            polar: (offset.y / distance).clamp(-1.0, 1.0).acos(),
        };
        rig.clamp();
        rig
    }

    pub fn eye(&self) -> Vec3 {
        let (sin_polar, cos_polar) = self.polar.sin_cos();
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        self.target + self.distance * Vec3::new(sin_polar * sin_yaw, cos_polar, sin_polar * cos_yaw)
    }

    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.eye()).looking_at(self.target, Vec3::Y)
    }

    /// Rotate by a mouse delta in pixels.
    pub fn orbit(&mut self, delta: Vec2) {
        self.yaw -= delta.x * ORBIT_SENSITIVITY;
        self.polar -= delta.y * ORBIT_SENSITIVITY;
        self.clamp();
    }

    /// Positive steps move closer.
    pub fn zoom(&mut self, steps: f32) {
        self.distance -= steps * ZOOM_STEP;
        self.clamp();
    }

    /// Aim at the vertical middle of `shelf_count` shelves.
    pub fn retarget(&mut self, shelf_count: usize, shelf_spacing: f32) {
        self.target = Vec3::new(0.0, shelf_count as f32 * shelf_spacing / 2.0 - 1.0, 0.0);
    }

    fn clamp(&mut self) {
        self.distance = self.distance.clamp(CAMERA_MIN_DISTANCE, CAMERA_MAX_DISTANCE);
        self.polar = self.polar.clamp(CAMERA_MIN_POLAR, CAMERA_MAX_POLAR);
    }
}

/// Set by tools that own the mouse, e.g. while an item is being dragged.
#[derive(Resource, Default, Debug)]
pub struct CameraInputLock {
    pub locked: bool,
}

pub fn orbit_camera_controller(
    mut camera_query: Query<&mut Transform, With<Camera3d>>,
    mut orbit: ResMut<OrbitCamera>,
    lock: Res<CameraInputLock>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut scroll_events: EventReader<MouseWheel>,
    time: Res<Time>,
) {
    let Ok(mut camera_transform) = camera_query.single_mut() else {
        return;
    };

    if lock.locked {
        mouse_motion.clear();
        scroll_events.clear();
    } else {
        let mouse_delta: Vec2 = mouse_motion.read().map(|m| m.delta).sum();
        if mouse_button.pressed(MouseButton::Left) && mouse_delta != Vec2::ZERO {
            orbit.orbit(mouse_delta);
        }

        // Mouse wheel scroll accumulation (pixel and line scroll)
        let mut scroll_accum = 0.0;
        for ev in scroll_events.read() {
            scroll_accum += match ev.unit {
                MouseScrollUnit::Line => ev.y,
                MouseScrollUnit::Pixel => ev.y * 0.05,
            };
        }
        if scroll_accum.abs() > f32::EPSILON {
            orbit.zoom(scroll_accum);
        }
    }

    let target = orbit.transform();
    let lerp_speed = (12.0 * time.delta_secs()).min(1.0);
    camera_transform.translation = camera_transform.translation.lerp(target.translation, lerp_speed);
    camera_transform.rotation = camera_transform.rotation.slerp(target.rotation, lerp_speed);
}

#[cfg(test)]
mod tests {
    use super::*;
    use constants::interaction::CAMERA_START;

    fn start() -> OrbitCamera {
        OrbitCamera::looking_from(Vec3::from_array(CAMERA_START), Vec3::new(0.0, 3.35, 0.0))
    }

    #[test]
    fn eye_round_trips_inside_limits() {
        let rig = OrbitCamera::looking_from(Vec3::new(3.0, 7.0, 8.0), Vec3::new(0.0, 3.0, 0.0));
        assert!(rig.eye().distance(Vec3::new(3.0, 7.0, 8.0)) < 1e-4);
    }

    #[test]
    fn start_position_is_pulled_inside_polar_limit() {
        let rig = start();
        assert!(rig.polar <= CAMERA_MAX_POLAR);
        assert!(rig.distance > 10.0 && rig.distance < 11.1);
        assert!(rig.eye().z > 0.0);
    }

    #[test]
    fn zoom_is_clamped() {
        let mut rig = start();
        rig.zoom(100.0);
        assert_eq!(rig.distance, CAMERA_MIN_DISTANCE);
        rig.zoom(-100.0);
        assert_eq!(rig.distance, CAMERA_MAX_DISTANCE);
    }

    #[test]
    fn cannot_orbit_under_the_floor_or_over_the_top() {
        let mut rig = start();
        rig.orbit(Vec2::new(0.0, -10_000.0));
        assert_eq!(rig.polar, CAMERA_MAX_POLAR);
        rig.orbit(Vec2::new(0.0, 10_000.0));
        assert_eq!(rig.polar, CAMERA_MIN_POLAR);
    }

    #[test]
    fn retarget_follows_shelf_count() {
        let mut rig = start();
        rig.retarget(4, 2.9);
        assert!((rig.target.y - 4.8).abs() < 1e-5);
        assert_eq!(rig.target.x, 0.0);
    }

    fn orbit_app(locked: bool) -> App {
        let mut app = App::new();
        app.init_resource::<Time>()
            .init_resource::<ButtonInput<MouseButton>>()
            .add_event::<MouseMotion>()
            .add_event::<MouseWheel>()
            .insert_resource(start())
            .insert_resource(CameraInputLock { locked })
            .add_systems(Update, orbit_camera_controller);
        app.world_mut().spawn((Camera3d::default(), start().transform()));
        app.world_mut()
            .resource_mut::<ButtonInput<MouseButton>>()
            .press(MouseButton::Left);
        app
    }

    fn drag_and_scroll(app: &mut App) {
        app.world_mut().send_event(MouseMotion { delta: Vec2::new(40.0, 0.0) });
        app.world_mut().send_event(MouseWheel {
            unit: MouseScrollUnit::Line,
            x: 0.0,
            y: 2.0,
            window: Entity::PLACEHOLDER,
        });
        app.update();
    }

    #[test]
    fn locked_rig_ignores_the_mouse() {
        let mut app = orbit_app(true);
        drag_and_scroll(&mut app);
        assert_eq!(*app.world().resource::<OrbitCamera>(), start());
    }

    #[test]
    fn unlocked_rig_orbits_and_zooms() {
        let mut app = orbit_app(false);
        drag_and_scroll(&mut app);
        let rig = *app.world().resource::<OrbitCamera>();
        assert!(rig.yaw < start().yaw);
        assert!(rig.distance < start().distance);
    }
}

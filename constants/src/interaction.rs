/// Lowest y a dragged item may reach.
pub const DRAG_FLOOR_BOUND: f32 = 0.5;

/// Fraction of the remaining distance covered per frame by hover animation.
pub const HOVER_LERP_FACTOR: f32 = 0.1;

/// Hover lift (world units) and yaw (radians) of a book under the cursor.
pub const HOVER_LIFT: f32 = 0.12;
pub const HOVER_YAW: f32 = -0.15;

/// Hover scale of decor items.
pub const DECOR_HOVER_SCALE: f32 = 1.08;

/// Orbit camera limits.
pub const CAMERA_MIN_DISTANCE: f32 = 6.0;
pub const CAMERA_MAX_DISTANCE: f32 = 14.0;
pub const CAMERA_MIN_POLAR: f32 = std::f32::consts::FRAC_PI_4;
pub const CAMERA_MAX_POLAR: f32 = std::f32::consts::PI / 2.1;

/// Initial camera position and vertical field of view in degrees.
pub const CAMERA_START: [f32; 3] = [0.0, 4.0, 11.0];
pub const CAMERA_FOV_DEGREES: f32 = 45.0;

/// Orbit sensitivity per pixel of mouse motion.
pub const ORBIT_SENSITIVITY: f32 = 0.005;

/// Zoom step per scroll line.
pub const ZOOM_STEP: f32 = 0.6;

/// Pointer id used for the mouse. Touch input is not routed to the drag tool.
pub const MOUSE_POINTER_ID: u64 = 0;

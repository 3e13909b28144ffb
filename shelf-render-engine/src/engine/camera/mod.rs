//! Orbit camera around the bookcase.
//!
//! Mouse-driven orbit and zoom with clamped distance and polar angle, no pan.
//! Tools that need exclusive use of the mouse set `CameraInputLock`.

/// Orbit rig resource and controller system.
pub mod orbit_camera;

pub use orbit_camera::{CameraInputLock, OrbitCamera, orbit_camera_controller};

//! Core application setup and state management.
//!
//! Builds the app, holds it in `Loading` until the library has settled and
//! configures the window for native and WASM targets.

/// Application setup and plugin configuration for the Bevy engine.
///
/// Registers the library asset type, the shared resources, the scene and
/// the arrange tool, plus camera and lights.
pub mod app_setup;

/// Loading/running state machine and the native FPS readout.
pub mod app_state;

/// Platform-specific window configuration for native and WASM builds.
///
/// Configures canvas integration for web targets and vsync settings.
pub mod window_config;

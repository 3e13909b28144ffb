pub mod book;
pub mod camera;
pub mod core;
pub mod layout;
pub mod loading;
pub mod overrides;
pub mod scene;

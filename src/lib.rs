pub mod camera;
pub mod cli;
pub mod config;
pub mod core;
pub mod renderer;
pub mod scene;
pub mod traits;

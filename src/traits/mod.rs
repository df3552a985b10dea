pub mod camera;
pub mod lifecycle;
pub mod logger;
pub mod scene;

pub use camera::*;
pub use lifecycle::*;
pub use logger::*;
pub use scene::*;

pub mod camera;
pub mod constants;
pub mod counter;
pub mod error;
pub mod geometry;
pub mod noise;
pub mod particles;
pub mod scene;
pub mod shaders;
pub mod state;
pub mod trigger;

pub use camera::*;
pub use counter::*;
pub use error::*;
pub use geometry::*;
pub use particles::*;
pub use scene::*;
pub use shaders::*;
pub use state::*;
pub use trigger::*;

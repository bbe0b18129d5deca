pub mod chrome;
pub mod constants;
pub mod newsletter;
pub mod particles;
pub mod scene;
pub mod waves;

pub use chrome::*;
pub use newsletter::*;
pub use scene::*;

pub mod catchers;
pub mod user;
pub mod video;

pub use catchers::*;
pub use user::*;
pub use video::*;

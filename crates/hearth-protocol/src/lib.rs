pub mod actions;
pub mod device;
pub mod routine;

pub use actions::*;
pub use device::*;
pub use routine::*;

pub mod consumption;
pub mod solar;
pub mod types;

pub use consumption::*;
pub use solar::*;
pub use types::*;

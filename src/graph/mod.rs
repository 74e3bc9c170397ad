pub mod link;
pub mod store;

pub use link::*;
pub use store::*;

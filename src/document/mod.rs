pub mod conversion;
pub mod flow;
pub mod snapshot;

pub use conversion::*;
pub use flow::*;
pub use snapshot::*;

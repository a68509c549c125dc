//! REST operations against the Hireline backend

mod agencies;
mod candidates;
mod clients;
mod jobs;
mod response;
mod sequence;

pub use candidates::*;
pub use response::*;
pub use sequence::*;

//! Typed models for the Hireline backend

mod agency;
mod candidate;
mod job;
mod org;
mod structured;

pub use agency::*;
pub use candidate::*;
pub use job::*;
pub use org::*;
pub use structured::*;

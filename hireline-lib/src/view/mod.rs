//! Roster view engine
//!
//! Pure, synchronous derivation of everything the candidate table renders:
//! filtering, pagination, column projection, multi-select state, and the
//! per-section edit-mode machine. No operation here performs I/O or holds
//! interior mutability; the consuming UI owns the mutable view state and
//! recomputes the view on every change.

mod columns;
mod criteria;
mod editor;
mod engine;
mod selection;

pub use columns::*;
pub use criteria::*;
pub use editor::*;
pub use engine::*;
pub use selection::*;

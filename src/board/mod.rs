//! Board representation and combat resolution.
//!
//! The board is pure data with query/mutation operations. It knows nothing
//! about turns or phases; `rules::RulesEngine` drives it.

pub mod combat;
pub mod grid;

pub use combat::resolve_combat;
pub use grid::Board;

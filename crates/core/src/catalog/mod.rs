//! Purchasable solutions, categories, and historical snapshots.

pub mod store;
pub mod types;

pub use store::{CategoryStore, SolutionCatalog, SolutionHistory};
pub use types::{Category, ReservationKind, Solution, SolutionKind, SolutionSnapshot};

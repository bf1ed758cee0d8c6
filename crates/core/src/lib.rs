pub mod grid;
pub mod session;
pub mod traverse;
pub mod types;
pub mod visited;

#[cfg(test)]
mod test_support;

pub use grid::Grid;
pub use session::{Session, Snapshot, generate};
pub use types::*;
pub use visited::VisitedSet;

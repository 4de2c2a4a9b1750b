pub mod csv;
mod loader;

pub use loader::{RankIndex, GLOBAL_RANK_COLUMN};

pub mod types;

pub use types::{Star, StarSize, CATALOG};

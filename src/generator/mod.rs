// Generator module: synthetic price/volume histories.

pub mod random_walk;

// Re-export the main generator implementation for ease of use.
pub use random_walk::{RandomWalkGenerator, SeriesGenerator};

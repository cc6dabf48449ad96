// Analyzer module: aggregates submodules for different aspects of analysis.

pub mod momentum;
pub mod snapshot;

// Re-export the snapshot generator for ease of use.
pub use snapshot::SnapshotGenerator;

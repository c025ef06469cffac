mod stats;

pub use stats::{HitStats, Stats};

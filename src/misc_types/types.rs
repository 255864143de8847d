use std::num::*;

pub const DEFAULT_NODE_COUNT: usize = 200;
pub const DEFAULT_MEAN_DEGREE: f64 = 8.0;
pub const DEFAULT_STD_DEV_DEGREE: f64 = 4.0;
pub const DEFAULT_INITIAL_INFECTED: usize = 5;
/// per contact and day
pub const DEFAULT_TRANSMISSION_PROB: f64 = 0.04;
pub const DEFAULT_DAY_COUNT: NonZeroUsize = unsafe{NonZeroUsize::new_unchecked(40)};
pub const DEFAULT_SNAPSHOT_INTERVAL: NonZeroUsize = unsafe{NonZeroUsize::new_unchecked(5)};
pub const DEFAULT_GRAPH_SEED: u64 = 875629289;
pub const DEFAULT_SIR_SEED: u64 = 1489264107025;

//! Value objects shared with the kernel.

pub use user_stats_shared_kernel::value_objects::{Gender, Status, UserCount};

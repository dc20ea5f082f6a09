// crates/shared-kernel/src/value_objects/mod.rs
pub mod counts;
pub mod gender;
pub mod status;

pub use counts::UserCount;
pub use gender::Gender;
pub use status::Status;

pub mod entities;
pub mod value_objects;

pub use entities::UserRecord;
pub use value_objects::{AgeBracket, AgeGroupCounts, StatsSummary};

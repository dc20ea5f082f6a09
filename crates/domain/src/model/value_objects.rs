pub mod age_bracket;
pub mod age_group_counts;
pub mod summary;

pub use age_bracket::AgeBracket;
pub use age_group_counts::AgeGroupCounts;
pub use summary::StatsSummary;

use serde::Serialize;

use crate::{model::AgeGroupCounts, value_objects::UserCount};

/// 集計結果。生成後は変更しない。
///
/// 0 件からは作られないので `female_percentage` は常に `[0, 100]` の有限値。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsSummary {
    active_count: UserCount,
    #[serde(skip)]
    female_count: UserCount,
    female_percentage: f64,
    age_group_counts: AgeGroupCounts,
}

impl StatsSummary {
    pub(crate) fn new(
        active_count: UserCount,
        female_count: UserCount,
        age_group_counts: AgeGroupCounts,
    ) -> Self {
        let total = age_group_counts.total().value();
        debug_assert!(total > 0);
        let female_percentage = female_count.value() as f64 / total as f64 * 100.0;
        Self { active_count, female_count, female_percentage, age_group_counts }
    }

    #[inline]
    pub fn active_count(&self) -> UserCount {
        self.active_count
    }

    #[inline]
    pub fn female_count(&self) -> UserCount {
        self.female_count
    }

    #[inline]
    pub fn female_percentage(&self) -> f64 {
        self.female_percentage
    }

    #[inline]
    pub fn age_group_counts(&self) -> &AgeGroupCounts {
        &self.age_group_counts
    }

    #[inline]
    pub fn total_users(&self) -> UserCount {
        self.age_group_counts.total()
    }
}

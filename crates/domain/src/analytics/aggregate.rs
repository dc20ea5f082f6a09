use user_stats_shared_kernel::{DomainError, DomainResult};

use crate::{
    model::{AgeGroupCounts, StatsSummary, UserRecord},
    value_objects::UserCount,
};

/// 集計途中の状態。
///
/// すべて単純な加算なので、入力をどう分割しても `merge` した結果は
/// 逐次に畳み込んだ結果と一致する。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    active: UserCount,
    female: UserCount,
    age_groups: AgeGroupCounts,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, record: &UserRecord) {
        if record.is_active() {
            self.active.increment();
        }
        if record.is_female() {
            self.female.increment();
        }
        self.age_groups.increment(record.age_bracket());
    }

    #[must_use]
    pub fn merge(mut self, other: Self) -> Self {
        self.active += other.active;
        self.female += other.female;
        self.age_groups += other.age_groups;
        self
    }

    pub fn total(&self) -> UserCount {
        self.age_groups.total()
    }

    pub fn is_empty(&self) -> bool {
        self.total().is_zero()
    }

    /// 集計を確定する。1 件も記録していなければ [`DomainError::EmptyInput`]。
    pub fn finish(self) -> DomainResult<StatsSummary> {
        if self.is_empty() {
            return Err(DomainError::EmptyInput);
        }
        Ok(StatsSummary::new(self.active, self.female, self.age_groups))
    }
}

impl<'a> Extend<&'a UserRecord> for Tally {
    fn extend<I: IntoIterator<Item = &'a UserRecord>>(&mut self, iter: I) {
        for record in iter {
            self.record(record);
        }
    }
}

impl<'a> FromIterator<&'a UserRecord> for Tally {
    fn from_iter<I: IntoIterator<Item = &'a UserRecord>>(iter: I) -> Self {
        let mut tally = Self::new();
        tally.extend(iter);
        tally
    }
}

/// ユーザーレコード列を一回走査して [`StatsSummary`] を作る。
pub struct Aggregator;

impl Aggregator {
    pub fn aggregate<'a, I>(records: I) -> DomainResult<StatsSummary>
    where
        I: IntoIterator<Item = &'a UserRecord>,
    {
        records.into_iter().collect::<Tally>().finish()
    }

    /// スライスを分割して並列に畳み込み、部分集計を `merge` する。
    #[cfg(feature = "parallel")]
    pub fn aggregate_par(records: &[UserRecord]) -> DomainResult<StatsSummary> {
        use rayon::prelude::*;

        records
            .par_iter()
            .fold(Tally::new, |mut tally, record| {
                tally.record(record);
                tally
            })
            .reduce(Tally::new, Tally::merge)
            .finish()
    }
}


use crate::{
    model::AgeBracket,
    value_objects::{Gender, Status},
};

/// 入力表の 1 行。
///
/// `id` は一意であることを期待するが検証はしない。`name` は集計には使わない。
/// `age` は符号付きで保持し、負の値もそのまま `0-18` に振り分けられる。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub id: i64,
    pub name: String,
    pub age: i64,
    pub gender: Gender,
    pub status: Status,
}

impl UserRecord {
    pub fn new(
        id: i64,
        name: impl Into<String>,
        age: i64,
        gender: impl Into<Gender>,
        status: impl Into<Status>,
    ) -> Self {
        Self { id, name: name.into(), age, gender: gender.into(), status: status.into() }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    #[inline]
    pub fn is_female(&self) -> bool {
        self.gender.is_female()
    }

    #[inline]
    pub fn age_bracket(&self) -> AgeBracket {
        AgeBracket::for_age(self.age)
    }
}

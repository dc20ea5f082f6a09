use std::ops::AddAssign;

use serde::{Serialize, Serializer, ser::SerializeMap};

use crate::{model::AgeBracket, value_objects::UserCount};

/// 年齢層ごとの人数。キー順は常に [`AgeBracket::ALL`] の順。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AgeGroupCounts([UserCount; AgeBracket::COUNT]);

impl AgeGroupCounts {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn get(&self, bracket: AgeBracket) -> UserCount {
        self.0[bracket.index()]
    }

    #[inline]
    pub fn increment(&mut self, bracket: AgeBracket) {
        self.0[bracket.index()].increment();
    }

    pub fn iter(&self) -> impl Iterator<Item = (AgeBracket, UserCount)> + '_ {
        AgeBracket::ALL.into_iter().map(|bracket| (bracket, self.get(bracket)))
    }

    /// 全年齢層の合計。各レコードはちょうど 1 区分に入るので処理件数と一致する。
    pub fn total(&self) -> UserCount {
        self.0.iter().sum()
    }
}

impl AddAssign for AgeGroupCounts {
    fn add_assign(&mut self, rhs: Self) {
        for (lhs, rhs) in self.0.iter_mut().zip(rhs.0) {
            *lhs += rhs;
        }
    }
}

impl Serialize for AgeGroupCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(AgeBracket::COUNT))?;
        for (bracket, count) in self.iter() {
            map.serialize_entry(bracket.label(), &count)?;
        }
        map.end()
    }
}

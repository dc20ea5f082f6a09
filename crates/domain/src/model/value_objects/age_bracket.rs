use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// 年齢層。5 区分は固定で、どの年齢もちょうど 1 つに属する。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AgeBracket {
    /// 18 歳以下。下限はない。
    #[serde(rename = "0-18")]
    UpTo18,
    #[serde(rename = "19-30")]
    Age19To30,
    #[serde(rename = "31-45")]
    Age31To45,
    #[serde(rename = "46-60")]
    Age46To60,
    /// 61 歳以上。上限はない。
    #[serde(rename = "61+")]
    Over60,
}

impl AgeBracket {
    /// 表示順 (= 集計結果のキー順)。
    pub const ALL: [Self; 5] = [
        Self::UpTo18,
        Self::Age19To30,
        Self::Age31To45,
        Self::Age46To60,
        Self::Over60,
    ];

    pub const COUNT: usize = Self::ALL.len();

    pub const fn for_age(age: i64) -> Self {
        match age {
            ..=18 => Self::UpTo18,
            19..=30 => Self::Age19To30,
            31..=45 => Self::Age31To45,
            46..=60 => Self::Age46To60,
            _ => Self::Over60,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::UpTo18 => "0-18",
            Self::Age19To30 => "19-30",
            Self::Age31To45 => "31-45",
            Self::Age46To60 => "46-60",
            Self::Over60 => "61+",
        }
    }

    #[inline]
    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for AgeBracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AgeBracket {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|bracket| bracket.label() == s)
            .ok_or_else(|| format!("Unknown age bracket: {s}"))
    }
}

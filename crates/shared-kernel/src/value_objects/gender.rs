// crates/shared-kernel/src/value_objects/gender.rs
use std::{convert::Infallible, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// 入力表の `Gender` 列。
///
/// 比較は大文字小文字を区別する。`"Male"` / `"Female"` 以外の値は
/// [`Gender::Other`] として元の文字列のまま保持し、女性としては数えない。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Gender {
    Male,
    Female,
    Other(String),
}

impl Gender {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other(raw) => raw,
        }
    }

    #[inline]
    pub fn is_female(&self) -> bool {
        matches!(self, Self::Female)
    }
}

impl From<&str> for Gender {
    fn from(raw: &str) -> Self {
        match raw {
            "Male" => Self::Male,
            "Female" => Self::Female,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for Gender {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "Male" => Self::Male,
            "Female" => Self::Female,
            _ => Self::Other(raw),
        }
    }
}

impl From<Gender> for String {
    fn from(gender: Gender) -> Self {
        match gender {
            Gender::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for Gender {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// One of the NSE indices whose constituent list can be watched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum IndexId {
    Nifty500,
    Nifty50,
    NiftyNext50,
    NiftySmallcap50,
    NiftyMidcap50,
}

impl IndexId {
    /// Every known index, in menu order.
    pub const ALL: [IndexId; 5] = [
        Self::Nifty500,
        Self::Nifty50,
        Self::NiftyNext50,
        Self::NiftySmallcap50,
        Self::NiftyMidcap50,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Nifty500 => "ind_nifty500list",
            Self::Nifty50 => "ind_nifty50list",
            Self::NiftyNext50 => "ind_niftynext50list",
            Self::NiftySmallcap50 => "ind_niftysmallcap50list",
            Self::NiftyMidcap50 => "ind_niftymidcap50list",
        }
    }

    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        Self::ALL
            .into_iter()
            .find(|index| index.as_str() == trimmed)
            .ok_or_else(|| ValidationError::UnknownIndex {
                value: trimmed.to_owned(),
            })
    }
}

impl Display for IndexId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IndexId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for IndexId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<IndexId> for String {
    fn from(value: IndexId) -> Self {
        value.as_str().to_owned()
    }
}

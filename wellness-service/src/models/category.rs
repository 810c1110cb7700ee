//! The closed set of activity categories the relay understands.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Which prompt template a request uses. Selected by route, never by payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Water,
    Gym,
    Food,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid category: {0}")]
pub struct UnknownCategory(pub String);

impl Category {
    pub const ALL: [Category; 3] = [Category::Water, Category::Gym, Category::Food];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Water => "water",
            Category::Gym => "gym",
            Category::Food => "food",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "water" => Ok(Category::Water),
            "gym" => Ok(Category::Gym),
            "food" => Ok(Category::Food),
            other => Err(UnknownCategory(other.to_string())),
        }
    }
}

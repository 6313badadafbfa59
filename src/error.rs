use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which strategy slot on an animal a call needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Capability {
    Action,
    Duty,
}

impl Capability {
    pub fn as_str(&self) -> &str {
        match self {
            Capability::Action => "action",
            Capability::Duty => "duty",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FarmError {
    #[error("{animal} has no {capability} assigned!")]
    UnassignedCapability {
        animal: String,
        capability: Capability,
    },
}

impl FarmError {
    /// Name of the animal the error refers to.
    pub fn animal(&self) -> &str {
        match self {
            FarmError::UnassignedCapability { animal, .. } => animal,
        }
    }
}

pub type Result<T> = std::result::Result<T, FarmError>;

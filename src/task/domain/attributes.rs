//! Task priority and size classifications.

use super::{ParseTaskPriorityError, ParseTaskSizeError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Urgency and importance combination of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskPriority {
    /// Urgent and important.
    P1,
    /// Urgent but not important.
    P2,
    /// Important but not urgent.
    P3,
    /// Neither urgent nor important.
    P4,
}

impl TaskPriority {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::P1 => "P1",
            Self::P2 => "P2",
            Self::P3 => "P3",
            Self::P4 => "P4",
        }
    }

    /// Returns whether the priority marks the task as urgent.
    #[must_use]
    pub const fn is_urgent(self) -> bool {
        matches!(self, Self::P1 | Self::P2)
    }

    /// Returns whether the priority marks the task as important.
    #[must_use]
    pub const fn is_important(self) -> bool {
        matches!(self, Self::P1 | Self::P3)
    }
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TaskPriority {
    type Error = ParseTaskPriorityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_uppercase();
        match normalized.as_str() {
            "P1" => Ok(Self::P1),
            "P2" => Ok(Self::P2),
            "P3" => Ok(Self::P3),
            "P4" => Ok(Self::P4),
            _ => Err(ParseTaskPriorityError(value.to_owned())),
        }
    }
}

/// Relative effort class of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskSize {
    /// A few hours at most.
    Small,
    /// Roughly a day.
    Medium,
    /// Several days.
    Large,
    /// A week or more.
    Xlarge,
}

impl TaskSize {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Small => "SMALL",
            Self::Medium => "MEDIUM",
            Self::Large => "LARGE",
            Self::Xlarge => "XLARGE",
        }
    }
}

impl fmt::Display for TaskSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TaskSize {
    type Error = ParseTaskSizeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_uppercase();
        match normalized.as_str() {
            "SMALL" => Ok(Self::Small),
            "MEDIUM" => Ok(Self::Medium),
            "LARGE" => Ok(Self::Large),
            "XLARGE" => Ok(Self::Xlarge),
            _ => Err(ParseTaskSizeError(value.to_owned())),
        }
    }
}

//! Task data model and view settings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::choice::{normalise, UnknownChoice};

/// How urgent a task is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Can wait.
    Low,
    /// The default for new tasks.
    #[default]
    Medium,
    /// Do first.
    High,
}

impl Priority {
    /// Sort rank; higher sorts first under [`SortKey::Priority`].
    #[must_use]
    pub fn rank(self) -> u8 {
        match self {
            Self::High => 3,
            Self::Medium => 2,
            Self::Low => 1,
        }
    }

    /// Lowercase name, as stored.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = UnknownChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalise(s).as_str() {
            "low" | "l" => Ok(Self::Low),
            "medium" | "med" | "m" => Ok(Self::Medium),
            "high" | "h" => Ok(Self::High),
            _ => Err(UnknownChoice {
                kind: "priority",
                value: s.to_string(),
                expected: "low, medium, high",
            }),
        }
    }
}

/// One to-do item. Serialized as `{id, text, done, priority}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique, stable identifier.
    pub id: String,
    /// What to do.
    pub text: String,
    /// Whether it has been completed.
    pub done: bool,
    /// Urgency.
    pub priority: Priority,
}

/// Which tasks are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    /// Every task.
    #[default]
    All,
    /// Tasks not yet done.
    Active,
    /// Completed tasks.
    Done,
}

impl Filter {
    /// Whether `task` passes this filter.
    #[must_use]
    pub fn matches(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Active => !task.done,
            Self::Done => task.done,
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Done => "done",
        })
    }
}

impl FromStr for Filter {
    type Err = UnknownChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalise(s).as_str() {
            "all" => Ok(Self::All),
            "active" | "open" | "todo" => Ok(Self::Active),
            "done" | "completed" => Ok(Self::Done),
            _ => Err(UnknownChoice {
                kind: "filter",
                value: s.to_string(),
                expected: "all, active, done",
            }),
        }
    }
}

/// Order in which visible tasks are listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Insertion order.
    #[default]
    Added,
    /// Highest priority first; insertion order among equals.
    Priority,
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Added => "added",
            Self::Priority => "priority",
        })
    }
}

impl FromStr for SortKey {
    type Err = UnknownChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalise(s).as_str() {
            "added" | "insertion" => Ok(Self::Added),
            "priority" => Ok(Self::Priority),
            _ => Err(UnknownChoice {
                kind: "sort key",
                value: s.to_string(),
                expected: "added, priority",
            }),
        }
    }
}

/// Filter and sort settings, persisted together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewPrefs {
    /// Active filter.
    pub filter: Filter,
    /// Active sort key.
    pub sort: SortKey,
}

use serde::{Deserialize, Serialize};

/// Whether the habit is something the user wants to do or to avoid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionType {
    Do,
    DontDo,
}

/// How often the habit is expected to be performed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Frequency {
    Daily { repeats: u32 },
    /// Weekday numbers, 0 = Sunday through 6 = Saturday.
    Weekly { days: Vec<u8> },
}

fn default_checkbox_target() -> u32 {
    1
}

/// How a single day's progress is recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Measurement {
    /// Toggles between 0 and 1; target is implicitly 1.
    Checkbox {
        #[serde(default = "default_checkbox_target")]
        target: u32,
    },
    /// Increments up to an explicit positive target.
    Counter { target: u32 },
}

impl Measurement {
    /// Daily completion threshold. A checkbox is always satisfied by a
    /// single mark regardless of the stored target.
    pub fn target(&self) -> u32 {
        match self {
            Measurement::Checkbox { .. } => 1,
            Measurement::Counter { target } => *target,
        }
    }

    pub fn is_counter(&self) -> bool {
        matches!(self, Measurement::Counter { .. })
    }
}

//! Activity lifecycle status and transition rules.
//!
//! Statuses map to the `activity_statuses` SMALLINT lookup table; each
//! variant's discriminant matches the seed data order (1-based).

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Status ID type matching SMALLINT/SMALLSERIAL in the database.
pub type StatusId = i16;

/// Activity lifecycle status.
///
/// Activities are created as `Planned`. `Completed` and `Cancelled` are
/// terminal in practice, though no transition out of them is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(i16)]
pub enum ActivityStatus {
    Planned = 1,
    InProgress = 2,
    Completed = 3,
    Cancelled = 4,
}

impl ActivityStatus {
    /// Return the database status ID.
    pub fn id(self) -> StatusId {
        self as StatusId
    }

    /// Look up a status by its database ID.
    ///
    /// Returns `CoreError::Validation` for ids outside the lookup table,
    /// so malformed input is rejected before it reaches persistence.
    pub fn from_id(id: StatusId) -> Result<Self, CoreError> {
        match id {
            1 => Ok(Self::Planned),
            2 => Ok(Self::InProgress),
            3 => Ok(Self::Completed),
            4 => Ok(Self::Cancelled),
            other => Err(CoreError::Validation(format!(
                "unknown activity status id: {other}"
            ))),
        }
    }

    /// Human-readable label matching the lookup table seed data.
    pub fn label(self) -> &'static str {
        match self {
            Self::Planned => "planned",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl From<ActivityStatus> for StatusId {
    fn from(value: ActivityStatus) -> Self {
        value as StatusId
    }
}

// ---------------------------------------------------------------------------
// Transition date rules
// ---------------------------------------------------------------------------

/// Date side effects of a status transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionDates {
    /// Stamp `actual_start_date` with today, but only if it is unset.
    pub stamps_start_if_unset: bool,
    /// Stamp `actual_end_date` with today, unconditionally.
    pub stamps_end: bool,
}

/// Date side effects of transitioning an activity to `target`.
///
/// Moving to `InProgress` records when work actually started, without
/// clobbering an existing start date (re-applying the transition is
/// idempotent). Moving to `Completed` or `Cancelled` records when work
/// actually ended. A pure status change touches no other field.
pub fn transition_dates(target: ActivityStatus) -> TransitionDates {
    match target {
        ActivityStatus::InProgress => TransitionDates {
            stamps_start_if_unset: true,
            stamps_end: false,
        },
        ActivityStatus::Completed | ActivityStatus::Cancelled => TransitionDates {
            stamps_start_if_unset: false,
            stamps_end: true,
        },
        ActivityStatus::Planned => TransitionDates {
            stamps_start_if_unset: false,
            stamps_end: false,
        },
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

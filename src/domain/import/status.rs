use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse lifecycle triage for the dry-run preview. This is not the full
/// booking state machine used by the scheduling board; only these three
/// states are derivable from spreadsheet status columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Collected,
    Delivered,
    Booked,
}

impl Default for BookingStatus {
    fn default() -> Self {
        BookingStatus::Booked
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookingStatus::Collected => write!(f, "collected"),
            BookingStatus::Delivered => write!(f, "delivered"),
            BookingStatus::Booked => write!(f, "booked"),
        }
    }
}

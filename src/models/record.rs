use serde::{Deserialize, Serialize};

/// Turnaround-time bucket for a single record, derived from the signed
/// minute difference between the timeout and expected timestamps.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TatStatus {
    Swift,
    #[serde(rename = "On Time")]
    OnTime,
    Delayed,
    #[serde(rename = "Over Delayed")]
    OverDelayed,
}

impl TatStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TatStatus::Swift => "Swift",
            TatStatus::OnTime => "On Time",
            TatStatus::Delayed => "Delayed",
            TatStatus::OverDelayed => "Over Delayed",
        }
    }
}

/// Day/night bucket derived from the hour of the expected timestamp.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum Shift {
    Day,
    Night,
}

impl Shift {
    pub fn as_str(&self) -> &'static str {
        match self {
            Shift::Day => "DAY",
            Shift::Night => "NIGHT",
        }
    }
}

/// One classified row of the TAT export. Immutable once built; the raw
/// timestamps are not kept past classification.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub department: String,
    pub shift: Shift,
    pub status: TatStatus,
}

use chrono::{NaiveDateTime, Timelike};

use crate::models::{Shift, TatStatus};

/// Records finishing this many minutes (or more) ahead of schedule are Swift.
const SWIFT_THRESHOLD_MIN: f64 = -15.0;
/// Records finishing this many minutes (or more) behind schedule are Over Delayed.
const OVER_DELAYED_THRESHOLD_MIN: f64 = 15.0;

const DAY_SHIFT_START_HOUR: u32 = 8;
const NIGHT_SHIFT_START_HOUR: u32 = 20;

/// Classify the turnaround status from the expected and timeout timestamps.
///
/// The difference is signed: a timeout after the expected time is positive.
/// "On Time" is the fallback branch and covers the whole [-15, 0] range,
/// including both endpoints.
pub fn classify_status(expected: NaiveDateTime, timeout: NaiveDateTime) -> TatStatus {
    let diff_min = (timeout - expected).num_seconds() as f64 / 60.0;

    if diff_min < SWIFT_THRESHOLD_MIN {
        TatStatus::Swift
    } else if diff_min > 0.0 && diff_min < OVER_DELAYED_THRESHOLD_MIN {
        TatStatus::Delayed
    } else if diff_min >= OVER_DELAYED_THRESHOLD_MIN {
        TatStatus::OverDelayed
    } else {
        TatStatus::OnTime
    }
}

/// Classify the shift from the expected timestamp's hour: NIGHT for hours
/// in [0, 8) or [20, 24), DAY otherwise.
pub fn classify_shift(expected: NaiveDateTime) -> Shift {
    let hour = expected.hour();
    if hour < DAY_SHIFT_START_HOUR || hour >= NIGHT_SHIFT_START_HOUR {
        Shift::Night
    } else {
        Shift::Day
    }
}

//! Winter overnight parking ban (Dec 1 - Apr 1, 3am-7am).
//!
//! Only the time window is evaluated here. Whether a street is on the
//! winter ban route list comes from feed data.

use crate::models::CivilInstant;

/// December, January, February, March (0-based months).
const BAN_MONTHS: [u32; 4] = [11, 0, 1, 2];
const BAN_START_HOUR: u32 = 3;
const BAN_END_HOUR: u32 = 7;

pub fn is_winter_ban_active(now: &CivilInstant) -> bool {
    let hour = now.hour();
    BAN_MONTHS.contains(&now.month0()) && (BAN_START_HOUR..BAN_END_HOUR).contains(&hour)
}

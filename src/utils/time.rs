use chrono::{DateTime, SubsecRound, Utc};

/// Current instant truncated to microseconds, the resolution Postgres stores.
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

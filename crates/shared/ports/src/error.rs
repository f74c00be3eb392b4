use thiserror::Error;

/// Errors raised by the checked clock operations
///
/// The core increase/update/read operations are total; only the
/// guarded variants (e.g. `try_update`) can fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClockError {
    #[error("Remote physical time {remote} leads local time {now} by more than {max_drift}ns")]
    DriftExceeded { remote: i64, now: i64, max_drift: i64 },
}

pub type ClockResult<T> = std::result::Result<T, ClockError>;

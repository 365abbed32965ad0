use chrono::{DateTime, Local, NaiveDate};
use rand::Rng;
use serde::{de::DeserializeOwned, Serialize};

use super::{AppError, AppErrorType, KeyValueStore};

pub fn write_json<T>(provider: &dyn KeyValueStore, key: &str, data: &T) -> Result<(), AppError>
where
    T: Serialize,
{
    let json_string = serde_json::to_string(data).map_err(|e| AppError {
        message: Some(format!("Failed to serialize data: {}", e)),
        cause: Some(e.to_string()),
        error_type: AppErrorType::JsonSerializationError,
    })?;

    provider.set(key, &json_string)?;

    Ok(())
}

pub fn read_json<T>(provider: &dyn KeyValueStore, key: &str) -> Result<Option<T>, AppError>
where
    T: DeserializeOwned,
{
    match provider.get(key)? {
        Some(stored) => {
            let data: T = serde_json::from_str(&stored).map_err(|e| AppError {
                message: Some(format!("Failed to parse stored data under {}: {}", key, e)),
                cause: Some(e.to_string()),
                error_type: AppErrorType::JsonParseError,
            })?;
            Ok(Some(data))
        }
        None => Ok(None),
    }
}

/// Source of "now" for ids and default dates.
pub trait Clock {
    fn now(&self) -> DateTime<Local>;

    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Local>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}

/// Display format for message timestamps.
pub const MESSAGE_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Millisecond timestamp id, bumped until it does not collide with `taken`.
pub fn timestamp_id(clock: &dyn Clock, taken: impl Fn(&str) -> bool) -> String {
    let mut millis = clock.now().timestamp_millis();
    loop {
        let candidate = millis.to_string();
        if !taken(&candidate) {
            return candidate;
        }
        millis += 1;
    }
}

pub const MEMBER_ID_RANGE: std::ops::Range<u32> = 1000..10000;

/// Random four digit member id not yet in use.
pub fn random_member_id(taken: impl Fn(&str) -> bool) -> Result<String, AppError> {
    let capacity = (MEMBER_ID_RANGE.end - MEMBER_ID_RANGE.start) as usize;
    let mut rng = rand::thread_rng();
    for _ in 0..capacity {
        let candidate = rng.gen_range(MEMBER_ID_RANGE).to_string();
        if !taken(&candidate) {
            return Ok(candidate);
        }
    }

    // Random probing gave up; fall back to the first free slot.
    MEMBER_ID_RANGE
        .map(|n| n.to_string())
        .find(|candidate| !taken(candidate))
        .ok_or_else(|| AppError::validation_error("No member ids left in the 1000-9999 range"))
}

use anyhow::{anyhow, Result};
use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};

pub trait Clock {
    fn now(&self) -> OffsetDateTime;
}

/// Wall clock shifted to a fixed UTC offset.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    offset: UtcOffset,
}

impl SystemClock {
    pub fn with_offset_hours(hours: i8) -> Result<Self> {
        let offset = UtcOffset::from_hms(hours, 0, 0)
            .map_err(|err| anyhow!("invalid utc offset {}: {}", hours, err))?;
        Ok(Self { offset })
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self {
            offset: UtcOffset::UTC,
        }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc().to_offset(self.offset)
    }
}

/// Two-digit 12-hour time with meridiem, e.g. "09:05 PM".
pub fn wall_time(at: OffsetDateTime) -> Result<String> {
    let format = format_description!("[hour repr:12]:[minute] [period]");
    Ok(at.format(&format)?)
}

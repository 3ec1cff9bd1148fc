use std::str::FromStr;

use anyhow::{anyhow, bail, Context, Result};
use chrono::FixedOffset;

use crate::utils::clock::{SystemClock, TimeZoneSetting};

// ============================================================================
// Clock Configuration
// ============================================================================
//
// ORDER_TIME_ZONE selects the zone used to decide what "today" is when a
// shipping date is computed:
//   local          host system zone (default)
//   utc            UTC
//   +02:00 / -05:30  fixed offset from UTC
//
// ============================================================================

pub const TIME_ZONE_ENV: &str = "ORDER_TIME_ZONE";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClockConfig {
    pub time_zone: TimeZoneSetting,
}

impl ClockConfig {
    /// Read the configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let time_zone = match lookup(TIME_ZONE_ENV) {
            Some(raw) if !raw.trim().is_empty() => raw
                .parse()
                .with_context(|| format!("Invalid {}", TIME_ZONE_ENV))?,
            _ => TimeZoneSetting::default(),
        };

        Ok(Self { time_zone })
    }

    pub fn clock(&self) -> SystemClock {
        SystemClock::new(self.time_zone)
    }
}

impl FromStr for TimeZoneSetting {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        match s.to_ascii_lowercase().as_str() {
            "local" => return Ok(TimeZoneSetting::Local),
            "utc" | "z" => return Ok(TimeZoneSetting::Utc),
            _ => {}
        }

        parse_offset(s).map(TimeZoneSetting::Fixed)
    }
}

/// Parse `+HH:MM`, `-HH:MM` or `+HH`
fn parse_offset(s: &str) -> Result<FixedOffset> {
    let (sign, rest) = match s.chars().next() {
        Some('+') => (1, &s[1..]),
        Some('-') => (-1, &s[1..]),
        _ => bail!("Unrecognised time zone '{}', expected local, utc or +HH:MM", s),
    };

    let (hours, minutes) = rest.split_once(':').unwrap_or((rest, "00"));
    let hours = parse_field(hours, 23).with_context(|| format!("Invalid hours in offset '{}'", s))?;
    let minutes =
        parse_field(minutes, 59).with_context(|| format!("Invalid minutes in offset '{}'", s))?;

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
        .ok_or_else(|| anyhow!("Offset '{}' is out of range", s))
}

/// One or two ASCII digits, at most `max`
fn parse_field(field: &str, max: i32) -> Result<i32> {
    if field.is_empty() || field.len() > 2 || !field.bytes().all(|b| b.is_ascii_digit()) {
        bail!("expected one or two digits, got '{}'", field);
    }

    let value: i32 = field.parse()?;
    if value > max {
        bail!("{} is above {}", value, max);
    }
    Ok(value)
}

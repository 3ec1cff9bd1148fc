use chrono::{FixedOffset, Local, NaiveDate, Utc};

// ============================================================================
// Clock - Injected source of "today"
// ============================================================================
//
// Value objects never read the wall clock themselves. Whatever needs the
// current date takes a `&dyn Clock`, so tests can pin the date.
//
// ============================================================================

pub trait Clock: Send + Sync {
    /// Current calendar date in the clock's time zone
    fn today(&self) -> NaiveDate;
}

/// Time zone used to turn the current instant into a calendar date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeZoneSetting {
    /// The zone of the host system
    #[default]
    Local,
    Utc,
    Fixed(FixedOffset),
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock {
    time_zone: TimeZoneSetting,
}

impl SystemClock {
    pub fn new(time_zone: TimeZoneSetting) -> Self {
        Self { time_zone }
    }

    /// Clock in the host system's default zone
    pub fn system_default() -> Self {
        Self::new(TimeZoneSetting::Local)
    }

    pub fn time_zone(&self) -> TimeZoneSetting {
        self.time_zone
    }
}

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        match self.time_zone {
            TimeZoneSetting::Local => Local::now().date_naive(),
            TimeZoneSetting::Utc => Utc::now().date_naive(),
            TimeZoneSetting::Fixed(offset) => Utc::now().with_timezone(&offset).date_naive(),
        }
    }
}

/// Clock stuck on a single date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl FixedClock {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// The dashboard clock: a fixed civil timezone plus date simulation
///
/// Key concepts:
/// - TimeSource: the one place the real system clock is read
/// - DashboardClock: composes an operator-pinned date with the live
///   time-of-day, so a preview of "day X" keeps ticking realistically
///
/// Every consumer of "now" goes through `DashboardClock::now()`; nothing
/// else in the crate reads the system clock for status purposes.
use chrono::{DateTime, Duration, FixedOffset, NaiveDate, TimeZone, Utc};

/// The academy's civil timezone (UTC+3, no daylight saving). Weekday and
/// hour/minute extraction always happens in this zone regardless of where
/// the dashboard is being viewed from.
pub const ACADEMY_UTC_OFFSET_HOURS: i32 = 3;

pub fn academy_offset() -> FixedOffset {
    FixedOffset::east_opt(ACADEMY_UTC_OFFSET_HOURS * 3600).expect("offset within +/-24h")
}

/// Single-method abstraction over the real clock so tests can substitute a
/// hand-advanced source.
pub trait TimeSource {
    fn now_utc(&self) -> DateTime<Utc>;
}

/// The production time source: the host's system clock.
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Wall clock for the status engine, with optional date simulation
///
/// Live mode: `now()` is the real clock in the academy zone.
///
/// Simulated mode: the operator pins a *date*; `now()` keeps that date but
/// takes the time-of-day from the real clock, so seconds continue to tick
/// while the dashboard pretends it is another day. Switching modes mutates
/// this one value in place; the host's single tick loop re-reads it, so
/// there is never a second ticker to leak.
pub struct DashboardClock {
    source: Box<dyn TimeSource>,
    offset: FixedOffset,
    simulated_date: Option<NaiveDate>,
}

impl DashboardClock {
    /// Clock backed by the real system time
    pub fn new() -> Self {
        DashboardClock::with_source(Box::new(SystemClock))
    }

    /// Clock backed by an arbitrary time source (used by tests)
    pub fn with_source(source: Box<dyn TimeSource>) -> Self {
        DashboardClock {
            source,
            offset: academy_offset(),
            simulated_date: None,
        }
    }

    /// Pin the date portion of "now" to the given epoch instant, or return
    /// to the live clock when None. Only the year/month/day of the instant
    /// is kept; the time-of-day keeps ticking from the real clock.
    pub fn set_simulated_time(&mut self, epoch_millis: Option<i64>) {
        self.simulated_date = epoch_millis
            .and_then(|ms| Utc.timestamp_millis_opt(ms).single())
            .map(|t| t.with_timezone(&self.offset).date_naive());
    }

    pub fn is_simulated(&self) -> bool {
        self.simulated_date.is_some()
    }

    pub fn simulated_date(&self) -> Option<NaiveDate> {
        self.simulated_date
    }

    /// Move the pinned date by whole days, pinning today first if the clock
    /// was live. Scrubbing while live is how the operator enters simulation
    /// from the keyboard.
    pub fn scrub_days(&mut self, days: i64) {
        let base = self
            .simulated_date
            .unwrap_or_else(|| self.real_now().date_naive());
        let moved = base
            .checked_add_signed(Duration::days(days))
            .unwrap_or(base);
        self.simulated_date = Some(moved);
    }

    /// The composed "now" fed to the status engine
    pub fn now(&self) -> DateTime<FixedOffset> {
        let real = self.real_now();
        match self.simulated_date {
            Some(date) => date
                .and_time(real.time())
                .and_local_timezone(self.offset)
                .single()
                .unwrap_or(real),
            None => real,
        }
    }

    fn real_now(&self) -> DateTime<FixedOffset> {
        self.source.now_utc().with_timezone(&self.offset)
    }
}

impl Default for DashboardClock {
    fn default() -> Self {
        DashboardClock::new()
    }
}

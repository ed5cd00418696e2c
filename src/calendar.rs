//! Non-leap 8760-hour year walker shared by the weather and load generators.

/// Days in each month of a non-leap year.
pub const MONTH_DAYS: [usize; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Hours in the simulated year.
pub const HOURS_PER_YEAR: usize = 8760;

/// Days in the simulated year.
pub const DAYS_PER_YEAR: usize = 365;

/// Position of one hour within the simulated year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarHour {
    /// Hour of the year (0..8760).
    pub hour_index: usize,
    /// Month, zero-based (0 = January).
    pub month_index: usize,
    /// Day within the month, zero-based.
    pub day_index_in_month: usize,
    /// Day of the year, zero-based.
    pub day_of_year: usize,
    /// Hour of the day (0..24).
    pub hour_of_day: usize,
    /// Hour index at which this month starts.
    pub month_start_hour: usize,
}

impl CalendarHour {
    /// One-based month number.
    pub fn month(&self) -> u8 {
        (self.month_index + 1) as u8
    }

    /// One-based day of the month.
    pub fn day(&self) -> u8 {
        (self.day_index_in_month + 1) as u8
    }

    /// Day-of-week index in a repeating 7-day cycle.
    ///
    /// Hour 0 of the year is day 0; this does not anchor to a real calendar
    /// (January 1st is not looked up). Indices 5 and 6 are the weekend.
    pub fn day_of_week(&self) -> usize {
        (self.day_index_in_month + self.month_start_hour / 24) % 7
    }

    /// Whether [`day_of_week`](Self::day_of_week) falls on the weekend pair.
    pub fn is_weekend(&self) -> bool {
        self.day_of_week() >= 5
    }
}

/// Walks the hours of a non-leap year in calendar order.
///
/// # Examples
///
/// ```
/// use chiller_sim::calendar::{HOURS_PER_YEAR, YearClock};
///
/// let mut count = 0;
/// YearClock::new().run(|_| count += 1);
/// assert_eq!(count, HOURS_PER_YEAR);
/// ```
#[derive(Debug, Clone, Default)]
pub struct YearClock {
    month_index: usize,
    day_index: usize,
    hour_of_day: usize,
    month_start_hour: usize,
    hour_index: usize,
}

impl YearClock {
    /// Creates a clock positioned at hour 0 of January 1st.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current hour and advances by one.
    ///
    /// # Returns
    ///
    /// * `Some(hour)` - The hour before advancing
    /// * `None` - Once all 8760 hours have been produced
    pub fn tick(&mut self) -> Option<CalendarHour> {
        if self.month_index >= MONTH_DAYS.len() || self.hour_index >= HOURS_PER_YEAR {
            return None;
        }

        let day_of_year = self.month_start_hour / 24 + self.day_index;
        let hour = CalendarHour {
            hour_index: self.hour_index,
            month_index: self.month_index,
            day_index_in_month: self.day_index,
            day_of_year,
            hour_of_day: self.hour_of_day,
            month_start_hour: self.month_start_hour,
        };

        self.hour_index += 1;
        self.hour_of_day += 1;
        if self.hour_of_day == 24 {
            self.hour_of_day = 0;
            self.day_index += 1;
            if self.day_index == MONTH_DAYS[self.month_index] {
                self.month_start_hour += MONTH_DAYS[self.month_index] * 24;
                self.day_index = 0;
                self.month_index += 1;
            }
        }

        Some(hour)
    }

    /// Runs `f` for each remaining hour of the year.
    pub fn run(&mut self, mut f: impl FnMut(CalendarHour)) {
        while let Some(hour) = self.tick() {
            f(hour);
        }
    }
}

impl Iterator for YearClock {
    type Item = CalendarHour;

    fn next(&mut self) -> Option<Self::Item> {
        self.tick()
    }
}

/// Zero-based month index for an hour of the year, clamped to December.
pub fn month_index_of_hour(hour_index: usize) -> usize {
    let mut start = 0;
    for (m, days) in MONTH_DAYS.iter().enumerate() {
        let end = start + days * 24;
        if hour_index < end {
            return m;
        }
        start = end;
    }
    MONTH_DAYS.len() - 1
}

//! First-column weekday configuration.
use chrono::Weekday;

/// The weekday shown in the first grid column.
///
/// Uses the 1-7 convention where 1 is Sunday and 7 is Saturday. Values are
/// normalized modulo 7, so 8 is Sunday again and 0 is Saturday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StartDayOfWeek(u8);

impl StartDayOfWeek {
    /// Sunday first (the default).
    pub const SUNDAY: Self = Self(1);
    /// Monday first.
    pub const MONDAY: Self = Self(2);
    /// Tuesday first.
    pub const TUESDAY: Self = Self(3);
    /// Wednesday first.
    pub const WEDNESDAY: Self = Self(4);
    /// Thursday first.
    pub const THURSDAY: Self = Self(5);
    /// Friday first.
    pub const FRIDAY: Self = Self(6);
    /// Saturday first.
    pub const SATURDAY: Self = Self(7);

    /// Normalizes a raw 1-7 value.
    pub fn new(value: u32) -> Self {
        let normalized = (i64::from(value) - 1).rem_euclid(7) + 1;
        Self(normalized as u8)
    }

    /// Returns the normalized 1-7 value.
    pub fn value(self) -> u8 {
        self.0
    }

    /// Returns the weekday this value stands for.
    pub fn weekday(self) -> Weekday {
        match self.0 {
            1 => Weekday::Sun,
            2 => Weekday::Mon,
            3 => Weekday::Tue,
            4 => Weekday::Wed,
            5 => Weekday::Thu,
            6 => Weekday::Fri,
            _ => Weekday::Sat,
        }
    }

    /// Returns the weekday of the last grid column.
    pub fn last_weekday(self) -> Weekday {
        self.weekday().pred()
    }

    /// Returns the seven weekdays in column order.
    pub fn column_order(self) -> [Weekday; 7] {
        let mut day = self.weekday();
        std::array::from_fn(|_| {
            let current = day;
            day = day.succ();
            current
        })
    }
}

impl Default for StartDayOfWeek {
    fn default() -> Self {
        Self::SUNDAY
    }
}

impl From<u32> for StartDayOfWeek {
    fn from(value: u32) -> Self {
        Self::new(value)
    }
}

impl From<Weekday> for StartDayOfWeek {
    fn from(day: Weekday) -> Self {
        Self(day.num_days_from_sunday() as u8 + 1)
    }
}

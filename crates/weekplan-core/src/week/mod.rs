//! Calendar weeks, month grids and French date labels.

use chrono::{Datelike, Duration, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::schedule::DayOfWeek;

const MONTH_NAMES: [&str; 12] = [
    "janvier", "février", "mars", "avril", "mai", "juin", "juillet", "août", "septembre",
    "octobre", "novembre", "décembre",
];

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "janv.", "févr.", "mars", "avr.", "mai", "juin", "juil.", "août", "sept.", "oct.", "nov.",
    "déc.",
];

const WEEKDAY_NAMES: [&str; 7] = [
    "lundi", "mardi", "mercredi", "jeudi", "vendredi", "samedi", "dimanche",
];

/// A Monday-to-Sunday week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WeekRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl WeekRange {
    /// The week that contains `date`.
    pub fn containing(date: NaiveDate) -> Self {
        let offset = i64::from(date.weekday().num_days_from_monday());
        let start = date - Duration::days(offset);
        Self {
            start,
            end: start + Duration::days(6),
        }
    }

    #[must_use]
    pub fn previous(&self) -> Self {
        Self::containing(self.start - Duration::days(7))
    }

    #[must_use]
    pub fn next(&self) -> Self {
        Self::containing(self.start + Duration::days(7))
    }

    pub fn date_of(&self, day: DayOfWeek) -> NaiveDate {
        self.start + Duration::days(i64::from(day.number()) - 1)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        (self.start..=self.end).contains(&date)
    }

    /// The days shown on the grid, Monday first.
    pub fn days(&self, show_weekend: bool) -> Vec<(DayOfWeek, NaiveDate)> {
        DayOfWeek::all()
            .filter(|day| show_weekend || !day.is_weekend())
            .map(|day| (day, self.date_of(day)))
            .collect()
    }

    /// "3 - 9 novembre 2025", month and year taken from the first day.
    pub fn label(&self) -> String {
        format_date_range(self.start, self.end)
    }
}

fn month_name(date: NaiveDate) -> &'static str {
    MONTH_NAMES[date.month0() as usize]
}

pub fn format_date_range(start: NaiveDate, end: NaiveDate) -> String {
    format!(
        "{} - {} {} {}",
        start.day(),
        end.day(),
        month_name(start),
        start.year()
    )
}

/// "3 nov."
pub fn format_short_date(date: NaiveDate) -> String {
    format!("{} {}", date.day(), MONTH_ABBREVIATIONS[date.month0() as usize])
}

/// "lundi 3 novembre"
pub fn format_long_date(date: NaiveDate) -> String {
    format!(
        "{} {} {}",
        WEEKDAY_NAMES[date.weekday().num_days_from_monday() as usize],
        date.day(),
        month_name(date)
    )
}

/// A month laid out Monday-first, with blanks before the 1st.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    first: NaiveDate,
    /// `None` cells pad the first week.
    cells: Vec<Option<u32>>,
}

impl MonthGrid {
    /// Returns `None` for an invalid month.
    pub fn for_month(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(Self::from_first)
    }

    pub fn containing(date: NaiveDate) -> Self {
        Self::from_first(date - Duration::days(i64::from(date.day0())))
    }

    fn from_first(first: NaiveDate) -> Self {
        let leading = first.weekday().num_days_from_monday() as usize;
        let mut cells = vec![None; leading];
        cells.extend(
            first
                .iter_days()
                .take_while(|day| day.month() == first.month())
                .map(|day| Some(day.day())),
        );
        Self { first, cells }
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    pub fn month(&self) -> u32 {
        self.first.month()
    }

    /// `None` only past the calendar's representable range.
    pub fn previous(&self) -> Option<Self> {
        self.first.pred_opt().map(Self::containing)
    }

    pub fn next(&self) -> Option<Self> {
        self.first
            .checked_add_months(Months::new(1))
            .map(Self::from_first)
    }

    /// "Novembre 2025"
    pub fn title(&self) -> String {
        let name = month_name(self.first);
        let mut chars = name.chars();
        let capitalized: String = chars
            .next()
            .map(|c| c.to_uppercase().chain(chars).collect())
            .unwrap_or_default();
        format!("{} {}", capitalized, self.year())
    }

    pub fn date(&self, day: u32) -> Option<NaiveDate> {
        self.first.with_day(day)
    }

    pub fn is_today(&self, day: u32, today: NaiveDate) -> bool {
        self.date(day) == Some(today)
    }

    /// Cells split into rows of seven.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<u32>]> {
        self.cells.chunks(7)
    }
}

//! Shift catalog and the materialised roster.
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;

/// The fixed shift catalog. Declaration order is the row order of a
/// [`Schedule`] within a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftKind {
    RegularWeekday,
    NightWeekday,
    RegularFriday,
    NightFriday,
    NightSaturday,
}

impl ShiftKind {
    pub const ALL: [ShiftKind; 5] = [
        ShiftKind::RegularWeekday,
        ShiftKind::NightWeekday,
        ShiftKind::RegularFriday,
        ShiftKind::NightFriday,
        ShiftKind::NightSaturday,
    ];

    /// Duration in doubled hours.
    pub const fn hours(self) -> i64 {
        match self {
            ShiftKind::RegularWeekday => 16,
            ShiftKind::NightWeekday => 32,
            ShiftKind::RegularFriday => 10,
            ShiftKind::NightFriday => 38,
            ShiftKind::NightSaturday => 48,
        }
    }

    pub const fn is_night(self) -> bool {
        matches!(
            self,
            ShiftKind::NightWeekday | ShiftKind::NightFriday | ShiftKind::NightSaturday
        )
    }

    pub const fn is_weekend(self) -> bool {
        matches!(self, ShiftKind::NightFriday | ShiftKind::NightSaturday)
    }

    /// Position in [`ShiftKind::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            ShiftKind::RegularWeekday => "regular_weekday",
            ShiftKind::NightWeekday => "night_weekday",
            ShiftKind::RegularFriday => "regular_friday",
            ShiftKind::NightFriday => "night_friday",
            ShiftKind::NightSaturday => "night_saturday",
        }
    }

    pub fn nights() -> impl Iterator<Item = ShiftKind> {
        Self::ALL.into_iter().filter(|s| s.is_night())
    }

    pub fn weekend_nights() -> impl Iterator<Item = ShiftKind> {
        Self::ALL.into_iter().filter(|s| s.is_weekend())
    }
}

impl fmt::Display for ShiftKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Partition `0..num_days` into consecutive windows of `week_length` days.
pub fn week_windows(num_days: usize, week_length: usize) -> Vec<Range<usize>> {
    if week_length == 0 {
        return Vec::new();
    }
    (0..num_days)
        .step_by(week_length)
        .map(|start| start..(start + week_length).min(num_days))
        .collect()
}

/// Days following `day` that fall inside the rest period, clipped to the horizon.
pub fn rest_window(day: usize, rest_days: usize, num_days: usize) -> Range<usize> {
    let start = (day + 1).min(num_days);
    let end = (day + 1 + rest_days).min(num_days);
    start..end
}

/// One worked shift. `day` is 1-indexed for display and export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRow {
    pub day: usize,
    pub shift: ShiftKind,
    pub intern: usize,
}

/// Ordered by day, then catalog order, then intern.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    pub rows: Vec<ScheduleRow>,
}

impl Schedule {
    pub fn new(rows: Vec<ScheduleRow>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScheduleRow> {
        self.rows.iter()
    }

    pub fn for_intern(&self, intern: usize) -> impl Iterator<Item = &ScheduleRow> {
        self.rows.iter().filter(move |r| r.intern == intern)
    }

    /// Whether rows follow the extractor's ordering.
    pub fn is_canonically_ordered(&self) -> bool {
        self.rows
            .windows(2)
            .all(|w| (w[0].day, w[0].shift, w[0].intern) < (w[1].day, w[1].shift, w[1].intern))
    }
}

impl<'a> IntoIterator for &'a Schedule {
    type Item = &'a ScheduleRow;
    type IntoIter = std::slice::Iter<'a, ScheduleRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

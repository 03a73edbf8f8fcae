//! Solver-independent checks of a materialised schedule.
use crate::config::RosterConfig;
use crate::schedule::{Schedule, ShiftKind, rest_window};
use anyhow::{Result, bail};
use std::collections::BTreeMap;

/// A broken roster rule. Days and weeks are 0-indexed here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    Uncovered { day: usize, shift: ShiftKind },
    DoubleCovered { day: usize, shift: ShiftKind, interns: Vec<usize> },
    WeeklyHours { intern: usize, week: usize, hours: i64 },
    WeeklyNights { intern: usize, week: usize, nights: i64 },
    WeekendNights { intern: usize, count: i64 },
    RestRule { intern: usize, first_day: usize, second_day: usize },
    /// Row with an intern id or day outside the instance.
    OutOfRange { day: usize, intern: usize },
}

/// Check `schedule` against every rule in `config` for `intern_count` interns.
pub fn audit(schedule: &Schedule, intern_count: usize, config: &RosterConfig) -> Vec<Violation> {
    let num_days = config.num_days;
    let mut violations = Vec::new();
    // worked[intern][day] -> shifts
    let mut worked: Vec<Vec<Vec<ShiftKind>>> = vec![vec![Vec::new(); num_days]; intern_count];
    let mut slots: BTreeMap<(usize, ShiftKind), Vec<usize>> = BTreeMap::new();

    for row in schedule {
        if row.day == 0 || row.day > num_days || row.intern >= intern_count {
            violations.push(Violation::OutOfRange {
                day: row.day,
                intern: row.intern,
            });
            continue;
        }
        let day = row.day - 1;
        worked[row.intern][day].push(row.shift);
        slots.entry((day, row.shift)).or_default().push(row.intern);
    }

    for day in 0..num_days {
        for shift in ShiftKind::ALL {
            match slots.get(&(day, shift)) {
                None => violations.push(Violation::Uncovered { day, shift }),
                Some(interns) if interns.len() > 1 => violations.push(Violation::DoubleCovered {
                    day,
                    shift,
                    interns: interns.clone(),
                }),
                Some(_) => {}
            }
        }
    }

    for (intern, days) in worked.iter().enumerate() {
        for (week, window) in config.week_windows().into_iter().enumerate() {
            let (mut hours, mut nights) = (0, 0);
            for shift in window.flat_map(|d| days[d].iter()) {
                hours += shift.hours();
                if shift.is_night() {
                    nights += 1;
                }
            }
            if hours > config.weekly_hour_cap {
                violations.push(Violation::WeeklyHours { intern, week, hours });
            }
            if nights > config.weekly_night_cap {
                violations.push(Violation::WeeklyNights { intern, week, nights });
            }
        }

        let weekend = days.iter().flatten().filter(|s| s.is_weekend()).count() as i64;
        if weekend > config.weekend_night_cap {
            violations.push(Violation::WeekendNights {
                intern,
                count: weekend,
            });
        }

        let has_night = |d: usize| days[d].iter().any(|s| s.is_night());
        for first_day in (0..num_days).filter(|&d| has_night(d)) {
            for second_day in rest_window(first_day, config.rest_days, num_days) {
                if has_night(second_day) {
                    violations.push(Violation::RestRule {
                        intern,
                        first_day,
                        second_day,
                    });
                }
            }
        }
    }

    violations
}

/// [`audit`] as a result, summarising the first few violations.
pub fn verify(schedule: &Schedule, intern_count: usize, config: &RosterConfig) -> Result<()> {
    let violations = audit(schedule, intern_count, config);
    if !violations.is_empty() {
        bail!(
            "{} roster violation(s), first: {:?}",
            violations.len(),
            &violations[..violations.len().min(3)]
        );
    }
    Ok(())
}

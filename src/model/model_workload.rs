//! Functions for adding per-intern workload caps.
use super::backend::CspModel;
use super::model_context::{ConstraintGroup, ModelBuilderContext};
use crate::schedule::ShiftKind;

/// Add the weekly hour cap, weekly night cap and horizon-wide weekend-night cap.
///
/// Each week window gets the full caps, including a truncated final window.
pub fn add_workload_constraints<M: CspModel>(ctx: &mut ModelBuilderContext<'_, M>) {
    let config = ctx.config;
    let windows = config.week_windows();

    for i in 0..ctx.intern_count() {
        for week in &windows {
            if ctx.groups.is_enabled(ConstraintGroup::WeeklyHours) {
                let hours: Vec<(i64, M::Var)> = week
                    .clone()
                    .flat_map(|d| ShiftKind::ALL.into_iter().map(move |s| (d, s)))
                    .map(|(d, s)| (s.hours(), ctx.var(i, d, s)))
                    .collect();
                ctx.model.add_weighted_le(hours, config.weekly_hour_cap);
                ctx.stats.weekly_hours += 1;
            }

            if ctx.groups.is_enabled(ConstraintGroup::WeeklyNights) {
                let nights: Vec<(i64, M::Var)> = week
                    .clone()
                    .flat_map(|d| ShiftKind::nights().map(move |s| (d, s)))
                    .map(|(d, s)| (1, ctx.var(i, d, s)))
                    .collect();
                ctx.model.add_weighted_le(nights, config.weekly_night_cap);
                ctx.stats.weekly_nights += 1;
            }
        }

        if ctx.groups.is_enabled(ConstraintGroup::WeekendNights) {
            let weekend: Vec<(i64, M::Var)> = (0..config.num_days)
                .flat_map(|d| ShiftKind::weekend_nights().map(move |s| (d, s)))
                .map(|(d, s)| (1, ctx.var(i, d, s)))
                .collect();
            ctx.model.add_weighted_le(weekend, config.weekend_night_cap);
            ctx.stats.weekend_nights += 1;
        }
    }
}

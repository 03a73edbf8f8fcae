//! Functions for adding rest-period constraints between night shifts.
use super::backend::CspModel;
use super::model_context::{ConstraintGroup, ModelBuilderContext};
use crate::schedule::{ShiftKind, rest_window};

/// A night shift on day `d` excludes every night shift on the following
/// `rest_days` days. Emitted pairwise as `a + b <= 1`; the window is clipped
/// at the end of the horizon.
pub fn add_rest_constraints<M: CspModel>(ctx: &mut ModelBuilderContext<'_, M>) {
    if !ctx.groups.is_enabled(ConstraintGroup::RestRule) {
        return;
    }
    let config = ctx.config;
    for i in 0..ctx.intern_count() {
        for d in 0..config.num_days {
            for later in rest_window(d, config.rest_days, config.num_days) {
                for current in ShiftKind::nights() {
                    for next in ShiftKind::nights() {
                        let pair = vec![(1, ctx.var(i, d, current)), (1, ctx.var(i, later, next))];
                        ctx.model.add_weighted_le(pair, 1);
                        ctx.stats.rest_rule += 1;
                    }
                }
            }
        }
    }
}

//! Functions for adding shift coverage constraints.
use super::backend::CspModel;
use super::model_context::ModelBuilderContext;
use crate::schedule::ShiftKind;

/// Every (day, shift) slot is worked by exactly one intern.
pub fn add_coverage_constraints<M: CspModel>(ctx: &mut ModelBuilderContext<'_, M>) {
    for d in 0..ctx.config.num_days {
        for s in ShiftKind::ALL {
            let slot: Vec<M::Var> = (0..ctx.intern_count()).map(|i| ctx.var(i, d, s)).collect();
            ctx.model.add_exactly_one(slot);
            ctx.stats.coverage += 1;
        }
    }
}

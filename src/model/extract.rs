use super::backend::CspModel;
use super::model_context::ConstraintInstance;
use crate::schedule::{Schedule, ScheduleRow, ShiftKind};

/// Read the worked shifts out of a solved instance.
///
/// Rows come out by day, then catalog order, then intern, with 1-indexed days.
pub fn extract_schedule<M: CspModel>(instance: &ConstraintInstance<M>, solution: &M::Solution) -> Schedule {
    let mut rows = Vec::new();
    for d in 0..instance.vars.num_days() {
        for s in ShiftKind::ALL {
            for i in 0..instance.intern_count {
                if instance.model.value(solution, instance.vars.get(i, d, s)) {
                    rows.push(ScheduleRow {
                        day: d + 1,
                        shift: s,
                        intern: i,
                    });
                }
            }
        }
    }
    Schedule::new(rows)
}

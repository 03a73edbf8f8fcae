use super::backend::{CpSatModel, CspModel, SolveResult, SolveStatus};
use super::extract::extract_schedule;
use super::model_context::{ConstraintGroup, ConstraintGroups, ConstraintInstance, build_model_pipeline};
use crate::audit;
use crate::config::RosterConfig;
use crate::error::RosterError;
use crate::schedule::{Schedule, ShiftKind};
use anyhow::Context;

/// The smallest feasible intern count, with the instance and solve that proved it.
pub struct StaffingResult<M: CspModel> {
    pub intern_count: usize,
    pub instance: ConstraintInstance<M>,
    pub result: SolveResult<M::Solution>,
}

impl<M: CspModel> StaffingResult<M> {
    pub fn schedule(&self) -> Schedule {
        extract_schedule(&self.instance, &self.result.solution)
    }
}

/// What the presentation layer receives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    pub intern_count: usize,
    pub schedule: Schedule,
}

/// Status of the upper-bound instance with one constraint group switched off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupDiagnosis {
    /// `None` is the baseline run with every group enabled.
    pub disabled: Option<ConstraintGroup>,
    pub status: SolveStatus,
}

/// Fewest interns any roster needs to cover every weekend night under the
/// horizon-wide weekend cap. `None` when the cap forbids weekend nights outright.
pub fn weekend_night_lower_bound(config: &RosterConfig) -> Option<usize> {
    if config.weekend_night_cap <= 0 {
        return None;
    }
    let slots = config.num_days * ShiftKind::weekend_nights().count();
    Some(slots.div_ceil(config.weekend_night_cap as usize))
}

/// Scan `config.search` ascending; return the first count CP-SAT finds feasible.
pub fn minimal_roster(config: &RosterConfig) -> Result<Roster, RosterError> {
    let found = find_minimal_staffing(config, CpSatModel::new)?;
    Ok(Roster {
        intern_count: found.intern_count,
        schedule: found.schedule(),
    })
}

/// Like [`find_minimal_staffing`] over an explicit inclusive range.
pub fn find_minimal_staffing_in<M, F>(
    config: &RosterConfig,
    lower: usize,
    upper: usize,
    new_model: F,
) -> Result<StaffingResult<M>, RosterError>
where
    M: CspModel,
    F: FnMut() -> M,
{
    find_minimal_staffing(&config.clone().with_search(lower, upper), new_model)
}

/// Build and solve a fresh instance per intern count in `config.search`,
/// ascending, until one is feasible.
///
/// Infeasible and unknown solves both move on to the next count; only an
/// exhausted range is an error. `new_model` must return an empty model.
pub fn find_minimal_staffing<M, F>(
    config: &RosterConfig,
    mut new_model: F,
) -> Result<StaffingResult<M>, RosterError>
where
    M: CspModel,
    F: FnMut() -> M,
{
    config.validate()?;
    let (lower, upper) = (config.search.lower, config.search.upper);

    if config.log_progress {
        match weekend_night_lower_bound(config) {
            Some(bound) if bound > upper => eprintln!(
                "[DIAG] Weekend-night cap needs at least {} interns, above the search bound {}",
                bound, upper
            ),
            Some(bound) => eprintln!("[DIAG] Weekend-night lower bound: {} interns", bound),
            None => eprintln!("[DIAG] Weekend-night cap forbids weekend nights; no count can cover them"),
        }
    }

    for intern_count in lower..=upper {
        let instance = build_model_pipeline(new_model(), intern_count, config, ConstraintGroups::ALL)?;
        let result = instance.model.solve(&config.solver);
        if config.log_progress {
            eprintln!(
                "[SEARCH] {} interns: {} constraints => {:?}",
                intern_count,
                instance.stats.total(),
                result.status
            );
        }

        if result.status.is_solution_found() {
            let found = StaffingResult {
                intern_count,
                instance,
                result,
            };
            if config.audit_solutions {
                audit::verify(&found.schedule(), intern_count, config)
                    .with_context(|| format!("solver returned an invalid roster for {} interns", intern_count))?;
            }
            return Ok(found);
        }
    }

    if config.diagnose_exhaustion {
        for diag in diagnose_at(config, upper, &mut new_model)? {
            let label = match diag.disabled {
                Some(group) => format!("without {:?}", group),
                None => "all groups".to_string(),
            };
            eprintln!("[DIAG] {} interns, {} => {:?}", upper, label, diag.status);
        }
    }

    Err(RosterError::SearchExhausted { lower, upper })
}

/// Re-solve the upper-bound instance with each toggleable group disabled in
/// turn, after a baseline with all groups on.
pub fn diagnose_exhaustion<M, F>(config: &RosterConfig, mut new_model: F) -> Result<Vec<GroupDiagnosis>, RosterError>
where
    M: CspModel,
    F: FnMut() -> M,
{
    config.validate()?;
    diagnose_at(config, config.search.upper, &mut new_model)
}

fn diagnose_at<M, F>(
    config: &RosterConfig,
    intern_count: usize,
    new_model: &mut F,
) -> Result<Vec<GroupDiagnosis>, RosterError>
where
    M: CspModel,
    F: FnMut() -> M,
{
    let runs = std::iter::once(None).chain(ConstraintGroup::TOGGLEABLE.into_iter().map(Some));
    let mut diag_results = Vec::new();
    for disabled in runs {
        let groups = match disabled {
            Some(group) => ConstraintGroups::ALL.without(group),
            None => ConstraintGroups::ALL,
        };
        let instance = build_model_pipeline(new_model(), intern_count, config, groups)?;
        let status = instance.model.solve(&config.solver).status;
        diag_results.push(GroupDiagnosis { disabled, status });
    }
    Ok(diag_results)
}

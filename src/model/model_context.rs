use super::backend::CspModel;
use super::model_coverage::add_coverage_constraints;
use super::model_rest::add_rest_constraints;
use super::model_workload::add_workload_constraints;
use crate::config::RosterConfig;
use crate::error::RosterError;
use crate::schedule::ShiftKind;

/// Constraint groups the builder can emit. Coverage is always emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstraintGroup {
    Coverage,
    WeeklyHours,
    WeeklyNights,
    WeekendNights,
    RestRule,
}

impl ConstraintGroup {
    /// Groups that may be switched off for diagnosis.
    pub const TOGGLEABLE: [ConstraintGroup; 4] = [
        ConstraintGroup::WeeklyHours,
        ConstraintGroup::WeeklyNights,
        ConstraintGroup::WeekendNights,
        ConstraintGroup::RestRule,
    ];
}

/// Which toggleable groups are enabled for a build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConstraintGroups {
    pub weekly_hours: bool,
    pub weekly_nights: bool,
    pub weekend_nights: bool,
    pub rest_rule: bool,
}

impl Default for ConstraintGroups {
    fn default() -> Self {
        Self::ALL
    }
}

impl ConstraintGroups {
    pub const ALL: ConstraintGroups = ConstraintGroups {
        weekly_hours: true,
        weekly_nights: true,
        weekend_nights: true,
        rest_rule: true,
    };

    pub fn is_enabled(&self, group: ConstraintGroup) -> bool {
        match group {
            ConstraintGroup::Coverage => true,
            ConstraintGroup::WeeklyHours => self.weekly_hours,
            ConstraintGroup::WeeklyNights => self.weekly_nights,
            ConstraintGroup::WeekendNights => self.weekend_nights,
            ConstraintGroup::RestRule => self.rest_rule,
        }
    }

    pub fn without(mut self, group: ConstraintGroup) -> Self {
        match group {
            ConstraintGroup::Coverage => {}
            ConstraintGroup::WeeklyHours => self.weekly_hours = false,
            ConstraintGroup::WeeklyNights => self.weekly_nights = false,
            ConstraintGroup::WeekendNights => self.weekend_nights = false,
            ConstraintGroup::RestRule => self.rest_rule = false,
        }
        self
    }
}

/// Number of constraints emitted per group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConstraintStats {
    pub coverage: usize,
    pub weekly_hours: usize,
    pub weekly_nights: usize,
    pub weekend_nights: usize,
    pub rest_rule: usize,
}

impl ConstraintStats {
    pub fn total(&self) -> usize {
        self.coverage + self.weekly_hours + self.weekly_nights + self.weekend_nights + self.rest_rule
    }
}

/// Assignment variables indexed by `(intern, day, shift)`, stored flat.
#[derive(Debug, Clone)]
pub struct AssignmentGrid<V> {
    num_interns: usize,
    num_days: usize,
    vars: Vec<V>,
}

impl<V> AssignmentGrid<V> {
    fn offset(&self, intern: usize, day: usize, shift: ShiftKind) -> usize {
        (intern * self.num_days + day) * ShiftKind::ALL.len() + shift.index()
    }

    pub fn get(&self, intern: usize, day: usize, shift: ShiftKind) -> &V {
        &self.vars[self.offset(intern, day, shift)]
    }

    pub fn num_interns(&self) -> usize {
        self.num_interns
    }

    pub fn num_days(&self) -> usize {
        self.num_days
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

/// State threaded through the constraint passes of one build.
pub struct ModelBuilderContext<'a, M: CspModel> {
    pub model: M,
    pub vars: AssignmentGrid<M::Var>,
    pub config: &'a RosterConfig,
    pub groups: ConstraintGroups,
    pub stats: ConstraintStats,
}

impl<'a, M: CspModel> ModelBuilderContext<'a, M> {
    /// Create one boolean per `(intern, day, shift)` in `model`.
    pub fn new(
        mut model: M,
        intern_count: usize,
        config: &'a RosterConfig,
        groups: ConstraintGroups,
    ) -> Self {
        let num_days = config.num_days;
        let mut vars = Vec::with_capacity(intern_count * num_days * ShiftKind::ALL.len());
        for i in 0..intern_count {
            for d in 0..num_days {
                for s in ShiftKind::ALL {
                    vars.push(model.new_bool_var(&format!("intern_{i}_day_{d}_{s}")));
                }
            }
        }
        Self {
            model,
            vars: AssignmentGrid {
                num_interns: intern_count,
                num_days,
                vars,
            },
            config,
            groups,
            stats: ConstraintStats::default(),
        }
    }

    pub fn intern_count(&self) -> usize {
        self.vars.num_interns
    }

    pub fn var(&self, intern: usize, day: usize, shift: ShiftKind) -> M::Var {
        self.vars.get(intern, day, shift).clone()
    }

    pub fn into_instance(self) -> ConstraintInstance<M> {
        ConstraintInstance {
            intern_count: self.vars.num_interns,
            model: self.model,
            vars: self.vars,
            groups: self.groups,
            stats: self.stats,
        }
    }
}

/// A fully built model for one intern count. Owned; never reused across counts.
pub struct ConstraintInstance<M: CspModel> {
    pub intern_count: usize,
    pub model: M,
    pub vars: AssignmentGrid<M::Var>,
    pub groups: ConstraintGroups,
    pub stats: ConstraintStats,
}

/// Build the roster model for `intern_count` interns into a fresh `model`.
pub fn build_model_pipeline<M: CspModel>(
    model: M,
    intern_count: usize,
    config: &RosterConfig,
    groups: ConstraintGroups,
) -> Result<ConstraintInstance<M>, RosterError> {
    if intern_count == 0 {
        return Err(RosterError::InvalidConfig(
            "cannot build a roster for zero interns".into(),
        ));
    }
    config.validate_horizon()?;
    let mut ctx = ModelBuilderContext::new(model, intern_count, config, groups);
    add_coverage_constraints(&mut ctx);
    add_workload_constraints(&mut ctx);
    add_rest_constraints(&mut ctx);
    Ok(ctx.into_instance())
}

//! Roster configuration: horizon, workload caps, search range and solver knobs.
use crate::error::RosterError;
use cp_sat::proto::SatParameters;
use serde::{Deserialize, Serialize};

/// Inclusive range of intern counts the search driver scans, ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchRange {
    pub lower: usize,
    pub upper: usize,
}

impl Default for SearchRange {
    fn default() -> Self {
        Self { lower: 10, upper: 40 }
    }
}

/// CP-SAT knobs applied to every per-count solve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverParams {
    pub max_time_in_seconds: f64,
    pub num_search_workers: i32,
    pub random_seed: i32,
}

impl Default for SolverParams {
    fn default() -> Self {
        Self {
            max_time_in_seconds: 60.0,
            num_search_workers: 8,
            random_seed: 42,
        }
    }
}

impl SolverParams {
    pub fn to_sat_parameters(&self) -> SatParameters {
        let mut params = SatParameters::default();
        params.max_time_in_seconds = Some(self.max_time_in_seconds);
        params.num_search_workers = Some(self.num_search_workers);
        params.random_seed = Some(self.random_seed);
        params.log_search_progress = Some(false);
        params
    }
}

/// Everything the builder and driver need, passed explicitly.
///
/// Hours are in doubled units throughout (a 143 cap is 71.5 real hours).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterConfig {
    pub num_days: usize,
    /// Width of a week window. The last window is truncated at the horizon
    /// but keeps the full caps.
    pub week_length: usize,
    pub weekly_hour_cap: i64,
    pub weekly_night_cap: i64,
    pub weekend_night_cap: i64,
    /// Days after a night shift in which no other night shift may start.
    pub rest_days: usize,
    pub search: SearchRange,
    pub solver: SolverParams,
    pub log_progress: bool,
    pub diagnose_exhaustion: bool,
    pub audit_solutions: bool,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            num_days: 30,
            week_length: 7,
            weekly_hour_cap: 143,
            weekly_night_cap: 2,
            weekend_night_cap: 1,
            rest_days: 2,
            search: SearchRange::default(),
            solver: SolverParams::default(),
            log_progress: false,
            diagnose_exhaustion: false,
            audit_solutions: true,
        }
    }
}

impl RosterConfig {
    pub fn with_num_days(mut self, num_days: usize) -> Self {
        self.num_days = num_days;
        self
    }

    pub fn with_weekly_hour_cap(mut self, cap: i64) -> Self {
        self.weekly_hour_cap = cap;
        self
    }

    pub fn with_weekly_night_cap(mut self, cap: i64) -> Self {
        self.weekly_night_cap = cap;
        self
    }

    pub fn with_weekend_night_cap(mut self, cap: i64) -> Self {
        self.weekend_night_cap = cap;
        self
    }

    pub fn with_search(mut self, lower: usize, upper: usize) -> Self {
        self.search = SearchRange { lower, upper };
        self
    }

    pub fn with_solver(mut self, solver: SolverParams) -> Self {
        self.solver = solver;
        self
    }

    pub fn with_log_progress(mut self, on: bool) -> Self {
        self.log_progress = on;
        self
    }

    pub fn with_diagnose_exhaustion(mut self, on: bool) -> Self {
        self.diagnose_exhaustion = on;
        self
    }

    /// Checks the parts of the config a single build depends on.
    pub fn validate_horizon(&self) -> Result<(), RosterError> {
        if self.num_days == 0 {
            return Err(RosterError::InvalidConfig("num_days must be at least 1".into()));
        }
        if self.week_length == 0 {
            return Err(RosterError::InvalidConfig("week_length must be at least 1".into()));
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), RosterError> {
        self.validate_horizon()?;
        if self.search.lower == 0 {
            return Err(RosterError::InvalidConfig(
                "search range must start at 1 or more interns".into(),
            ));
        }
        if self.search.lower > self.search.upper {
            return Err(RosterError::InvalidConfig(format!(
                "empty search range {}..={}",
                self.search.lower, self.search.upper
            )));
        }
        Ok(())
    }

    /// Half-open day ranges of the week windows, in order.
    pub fn week_windows(&self) -> Vec<std::ops::Range<usize>> {
        crate::schedule::week_windows(self.num_days, self.week_length)
    }
}

//! Minimal intern staffing for a fixed-horizon shift roster.
//!
//! The roster is modelled as a boolean CSP over `(intern, day, shift)` and
//! solved with CP-SAT for increasing intern counts until one is feasible.

pub mod audit;
pub mod config;
pub mod error;
pub mod model;
pub mod schedule;

pub use config::{RosterConfig, SearchRange, SolverParams};
pub use error::RosterError;
pub use model::{
    ConstraintGroup, ConstraintGroups, ConstraintInstance, CpSatModel, CspModel, Roster,
    SolveResult, SolveStatus, StaffingResult, build_model_pipeline, diagnose_exhaustion,
    extract_schedule, find_minimal_staffing, find_minimal_staffing_in, minimal_roster,
};
pub use schedule::{Schedule, ScheduleRow, ShiftKind};

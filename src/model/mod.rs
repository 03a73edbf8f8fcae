//! Model building and constraint logic for the roster solver.

mod backend;
mod extract;
mod minimal_staffing;
mod model_context;
mod model_coverage;
mod model_rest;
mod model_workload;

pub use backend::{CpSatModel, CspModel, SolveResult, SolveStatus};
pub use extract::extract_schedule;
pub use minimal_staffing::*;
pub use model_context::{
    AssignmentGrid, ConstraintGroup, ConstraintGroups, ConstraintInstance, ConstraintStats,
    ModelBuilderContext, build_model_pipeline,
};

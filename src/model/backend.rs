//! The narrow solver interface the builder writes into, and its CP-SAT implementation.
use crate::config::SolverParams;
use cp_sat::builder::{BoolVar, CpModelBuilder, LinearExpr};
use cp_sat::proto::{CpSolverResponse, CpSolverStatus};

/// Outcome of one solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveStatus {
    /// Proven optimal. With no objective this is the same as feasible.
    Optimal,
    Feasible,
    Infeasible,
    /// Limits reached without a definite answer.
    Unknown,
}

impl SolveStatus {
    pub fn is_solution_found(&self) -> bool {
        matches!(self, SolveStatus::Optimal | SolveStatus::Feasible)
    }
}

#[derive(Debug, Clone)]
pub struct SolveResult<S> {
    pub status: SolveStatus,
    pub solution: S,
}

/// A boolean CSP under construction.
///
/// Only what the roster needs: boolean variables, exactly-one, and
/// `sum(coeff * var) <= bound`.
pub trait CspModel {
    type Var: Clone;
    type Solution;

    fn new_bool_var(&mut self, name: &str) -> Self::Var;

    fn add_exactly_one(&mut self, vars: Vec<Self::Var>);

    fn add_weighted_le(&mut self, terms: Vec<(i64, Self::Var)>, bound: i64);

    fn solve(&self, params: &SolverParams) -> SolveResult<Self::Solution>;

    /// Truth value of `var` in a solution whose status found one.
    fn value(&self, solution: &Self::Solution, var: &Self::Var) -> bool;
}

/// CP-SAT backed model.
#[derive(Default)]
pub struct CpSatModel {
    builder: CpModelBuilder,
}

impl CpSatModel {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CspModel for CpSatModel {
    type Var = BoolVar;
    type Solution = CpSolverResponse;

    fn new_bool_var(&mut self, name: &str) -> BoolVar {
        self.builder.new_bool_var_with_name(name)
    }

    fn add_exactly_one(&mut self, vars: Vec<BoolVar>) {
        self.builder.add_exactly_one(vars);
    }

    fn add_weighted_le(&mut self, terms: Vec<(i64, BoolVar)>, bound: i64) {
        let expr: LinearExpr = terms.into_iter().collect();
        self.builder.add_le(expr, LinearExpr::from(bound));
    }

    fn solve(&self, params: &SolverParams) -> SolveResult<CpSolverResponse> {
        let response = self.builder.solve_with_parameters(&params.to_sat_parameters());
        let status = match response.status() {
            CpSolverStatus::Optimal => SolveStatus::Optimal,
            CpSolverStatus::Feasible => SolveStatus::Feasible,
            CpSolverStatus::Infeasible => SolveStatus::Infeasible,
            CpSolverStatus::ModelInvalid => {
                eprintln!("[DIAG] CP-SAT rejected the model as invalid; treating as unknown");
                SolveStatus::Unknown
            }
            CpSolverStatus::Unknown => SolveStatus::Unknown,
        };
        SolveResult { status, solution: response }
    }

    fn value(&self, solution: &CpSolverResponse, var: &BoolVar) -> bool {
        var.solution_value(solution)
    }
}

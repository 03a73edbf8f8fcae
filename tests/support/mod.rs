#![allow(dead_code)]

use roster_core::{CspModel, SolveResult, SolveStatus, SolverParams};
use std::cell::Cell;
use std::collections::HashMap;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq)]
pub enum Recorded {
    ExactlyOne(Vec<usize>),
    WeightedLe(Vec<(i64, usize)>, i64),
}

pub type Responder = Rc<dyn Fn(&RecordingModel) -> SolveResult<Vec<bool>>>;

/// Stub model: records everything the builder emits and answers `solve`
/// from a scripted responder.
pub struct RecordingModel {
    pub names: Vec<String>,
    pub constraints: Vec<Recorded>,
    pub solves: Rc<Cell<usize>>,
    responder: Responder,
}

impl RecordingModel {
    pub fn new(responder: Responder, solves: Rc<Cell<usize>>) -> Self {
        Self {
            names: Vec::new(),
            constraints: Vec::new(),
            solves,
            responder,
        }
    }

    pub fn index_of(&self) -> HashMap<&str, usize> {
        self.names.iter().enumerate().map(|(i, n)| (n.as_str(), i)).collect()
    }

    pub fn name(&self, var: usize) -> &str {
        &self.names[var]
    }

    /// Whether `values` satisfies every recorded constraint.
    pub fn satisfied_by(&self, values: &[bool]) -> bool {
        self.constraints.iter().all(|c| match c {
            Recorded::ExactlyOne(vars) => vars.iter().filter(|&&v| values[v]).count() == 1,
            Recorded::WeightedLe(terms, bound) => {
                terms.iter().filter(|(_, v)| values[*v]).map(|(w, _)| w).sum::<i64>() <= *bound
            }
        })
    }

    pub fn weighted_le(&self) -> impl Iterator<Item = (&Vec<(i64, usize)>, i64)> {
        self.constraints.iter().filter_map(|c| match c {
            Recorded::WeightedLe(terms, bound) => Some((terms, *bound)),
            Recorded::ExactlyOne(_) => None,
        })
    }
}

impl CspModel for RecordingModel {
    type Var = usize;
    type Solution = Vec<bool>;

    fn new_bool_var(&mut self, name: &str) -> usize {
        self.names.push(name.to_string());
        self.names.len() - 1
    }

    fn add_exactly_one(&mut self, vars: Vec<usize>) {
        self.constraints.push(Recorded::ExactlyOne(vars));
    }

    fn add_weighted_le(&mut self, terms: Vec<(i64, usize)>, bound: i64) {
        self.constraints.push(Recorded::WeightedLe(terms, bound));
    }

    fn solve(&self, _params: &SolverParams) -> SolveResult<Vec<bool>> {
        self.solves.set(self.solves.get() + 1);
        (self.responder)(self)
    }

    fn value(&self, solution: &Vec<bool>, var: &usize) -> bool {
        solution[*var]
    }
}

/// Factory handing out fresh recording models that share one responder and
/// one solve counter.
pub struct StubBackend {
    pub responder: Responder,
    pub solves: Rc<Cell<usize>>,
}

impl StubBackend {
    pub fn new(responder: Responder) -> Self {
        Self {
            responder,
            solves: Rc::new(Cell::new(0)),
        }
    }

    pub fn factory(&self) -> impl FnMut() -> RecordingModel + '_ {
        move || RecordingModel::new(self.responder.clone(), self.solves.clone())
    }

    pub fn solve_count(&self) -> usize {
        self.solves.get()
    }
}

/// Interns in a recorded model built for `num_days` days.
pub fn intern_count(model: &RecordingModel, num_days: usize) -> usize {
    model.names.len() / (num_days * 5)
}

/// Slot `k = day * 5 + shift` goes to intern `k % n`.
pub fn round_robin(model: &RecordingModel, num_days: usize) -> Vec<bool> {
    let n = intern_count(model, num_days);
    let index = model.index_of();
    let mut values = vec![false; model.names.len()];
    for d in 0..num_days {
        for (s, shift) in roster_core::ShiftKind::ALL.iter().enumerate() {
            let i = (d * 5 + s) % n;
            values[index[format!("intern_{i}_day_{d}_{shift}").as_str()]] = true;
        }
    }
    values
}

/// Feasible with a round-robin valuation from `min_interns` up, infeasible below.
pub fn feasible_from(min_interns: usize, num_days: usize) -> Responder {
    Rc::new(move |model: &RecordingModel| {
        if intern_count(model, num_days) >= min_interns {
            SolveResult {
                status: SolveStatus::Feasible,
                solution: round_robin(model, num_days),
            }
        } else {
            SolveResult {
                status: SolveStatus::Infeasible,
                solution: Vec::new(),
            }
        }
    })
}

pub fn always(status: SolveStatus) -> Responder {
    Rc::new(move |_: &RecordingModel| SolveResult {
        status,
        solution: Vec::new(),
    })
}

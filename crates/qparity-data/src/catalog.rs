//! The shipped problem set.

use qparity_ir::state::basis_state;
use qparity_ir::{GateOp, QubitId, SingleQubitGate, Transform};

use crate::error::{DataError, DataResult};
use crate::label::Label;
use crate::problem::ProblemDefinition;

/// Number of problems in the catalog.
pub const COUNT: usize = 4;

const DEFAULT_TIME_ESTIMATE: f64 = 5.0;

/// Fresh definition of catalog problem `index`.
pub fn definition(index: usize) -> DataResult<ProblemDefinition> {
    match index {
        0 => Ok(problem0()),
        1 => Ok(problem1()),
        2 => Ok(problem2()),
        3 => Ok(problem3()),
        other => Err(DataError::UnknownProblem(other)),
    }
}

/// Every catalog definition, in index order.
pub fn all() -> Vec<ProblemDefinition> {
    vec![problem0(), problem1(), problem2(), problem3()]
}

fn problem0() -> ProblemDefinition {
    let mut transform = Transform::new();
    transform.h(QubitId(0));
    ProblemDefinition {
        name: "problem0".into(),
        title: "single qubit warm-up".into(),
        num_qubits: 1,
        inverse_transform: Some(transform.inverse()),
        transform,
        sample_count: 2,
        time_estimate: DEFAULT_TIME_ESTIMATE,
        hint: "The single qubit problem from the opening walkthrough.\n\
               The hidden circuit puts the qubit into an equal superposition of 0 and 1.\n\
               One Hadamard gate takes it back to a single basis state.\n"
            .into(),
        fixed_training: Some(vec![
            (basis_state(0, 1), Label::Even),
            (basis_state(1, 1), Label::Odd),
        ]),
    }
}

fn problem1() -> ProblemDefinition {
    let mut transform = Transform::new();
    transform.h(QubitId(0)).x(QubitId(1));
    ProblemDefinition {
        name: "problem1".into(),
        title: "one gate per qubit".into(),
        num_qubits: 2,
        inverse_transform: Some(transform.inverse()),
        transform,
        sample_count: 50,
        time_estimate: DEFAULT_TIME_ESTIMATE,
        hint: "The circuit has only two gates, one on each qubit.\n\
               Both are drawn from X, Y, Z and H; work out which.\n"
            .into(),
        fixed_training: None,
    }
}

fn problem2() -> ProblemDefinition {
    let mut transform = Transform::new();
    transform
        .h(QubitId(0))
        .x(QubitId(1))
        .cx(QubitId(0), QubitId(1))
        .y(QubitId(1));
    ProblemDefinition {
        name: "problem2".into(),
        title: "multiple qubits".into(),
        num_qubits: 2,
        transform,
        inverse_transform: None,
        sample_count: 50,
        time_estimate: DEFAULT_TIME_ESTIMATE,
        hint: "Multi-qubit gates appear here.\n\
               Try letting the qubits interact with one another.\n"
            .into(),
        fixed_training: None,
    }
}

fn problem3() -> ProblemDefinition {
    let transform: Transform = (0..7)
        .map(|q| GateOp::single(SingleQubitGate::H, QubitId(q)))
        .collect();
    ProblemDefinition {
        name: "problem3".into(),
        title: "getting larger".into(),
        num_qubits: 7,
        transform,
        inverse_transform: None,
        sample_count: 500,
        time_estimate: DEFAULT_TIME_ESTIMATE,
        hint: "Seven qubits and five hundred samples: a stress test for classical kernels.\n"
            .into(),
        fixed_training: None,
    }
}

//! Plain-text circuit diagrams.
//!
//! Each operation occupies one column; wires run left to right in
//! application order:
//!
//! ```text
//! q0: ─H───●─────
//! q1: ─X───⊕───Y─
//! ```

use crate::error::{IrError, IrResult};
use crate::gate::GateOp;
use crate::transform::Transform;

const WIRE: char = '─';

enum Cell {
    Wire,
    Crossing,
    Symbol(String),
}

/// Render `transform` on a register of `num_qubits` wires.
///
/// Fails if the register is empty or the transform touches a qubit outside it.
pub fn render(transform: &Transform, num_qubits: u32) -> IrResult<String> {
    if num_qubits == 0 {
        return Err(IrError::EmptyRegister);
    }
    transform.validate(num_qubits)?;

    let n = num_qubits as usize;
    let label_width = format!("q{}", n - 1).len();
    let mut rows: Vec<String> = (0..n)
        .map(|q| format!("{:>label_width$}: {WIRE}", format!("q{q}")))
        .collect();

    for op in transform {
        let cells = column(op, n);
        let width = cells
            .iter()
            .map(|cell| match cell {
                Cell::Symbol(s) => s.chars().count(),
                _ => 1,
            })
            .max()
            .unwrap_or(1);

        for (row, cell) in rows.iter_mut().zip(&cells) {
            let body = match cell {
                Cell::Wire => WIRE.to_string(),
                Cell::Crossing => "┼".to_string(),
                Cell::Symbol(s) => s.clone(),
            };
            let len = body.chars().count();
            let left = (width - len) / 2;
            let right = width - len - left;
            push_wire(row, left);
            row.push_str(&body);
            push_wire(row, right);
            push_wire(row, 3);
        }
    }

    let mut out = rows.join("\n");
    out.push('\n');
    Ok(out)
}

fn column(op: &GateOp, n: usize) -> Vec<Cell> {
    let mut cells: Vec<Cell> = (0..n).map(|_| Cell::Wire).collect();
    match *op {
        GateOp::Single { gate, target } => {
            cells[target.index()] = Cell::Symbol(gate.label());
        }
        GateOp::Cnot { control, target } => {
            let (lo, hi) = if control < target {
                (control.index(), target.index())
            } else {
                (target.index(), control.index())
            };
            for cell in &mut cells[lo + 1..hi] {
                *cell = Cell::Crossing;
            }
            cells[control.index()] = Cell::Symbol("●".to_string());
            cells[target.index()] = Cell::Symbol("⊕".to_string());
        }
    }
    cells
}

fn push_wire(row: &mut String, count: usize) {
    row.extend(std::iter::repeat_n(WIRE, count));
}

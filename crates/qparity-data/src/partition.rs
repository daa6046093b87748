//! Basis-index partition by bit parity.

use crate::label::Label;

/// The basis indices `0..2^n` split into even- and odd-popcount classes.
///
/// Both lists are ascending, disjoint, and together cover every index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParityPartition {
    num_qubits: u32,
    even: Vec<usize>,
    odd: Vec<usize>,
}

impl ParityPartition {
    /// Partition the basis of an `num_qubits`-qubit register.
    ///
    /// Allocates `2^num_qubits` indices; callers bound the width first.
    pub fn new(num_qubits: u32) -> Self {
        let (even, odd) = (0..1usize << num_qubits).partition(|&i| Label::of_index(i) == Label::Even);
        Self {
            num_qubits,
            even,
            odd,
        }
    }

    /// Register width this partition was built for.
    pub fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    /// Dimension of the full state space.
    pub fn dimension(&self) -> usize {
        self.even.len() + self.odd.len()
    }

    /// Indices with an even number of set bits.
    pub fn even(&self) -> &[usize] {
        &self.even
    }

    /// Indices with an odd number of set bits.
    pub fn odd(&self) -> &[usize] {
        &self.odd
    }

    /// Indices belonging to `label`'s class.
    pub fn class(&self, label: Label) -> &[usize] {
        match label {
            Label::Even => &self.even,
            Label::Odd => &self.odd,
        }
    }
}

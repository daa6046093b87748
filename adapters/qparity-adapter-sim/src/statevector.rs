//! Statevector simulation engine.

use num_complex::Complex64;

use qparity_ir::gate::Matrix2;
use qparity_ir::{GateOp, SingleQubitGate};

/// Amplitudes of a register being evolved in place.
pub struct Statevector {
    /// `2^n` amplitudes indexed by basis state.
    amplitudes: Vec<Complex64>,
    num_qubits: usize,
}

impl Statevector {
    /// A register of `num_qubits` qubits prepared in `|0…0⟩`.
    pub fn new(num_qubits: usize) -> Self {
        let mut amplitudes = vec![Complex64::new(0.0, 0.0); 1 << num_qubits];
        amplitudes[0] = Complex64::new(1.0, 0.0);
        Self {
            amplitudes,
            num_qubits,
        }
    }

    /// Overwrite the amplitudes with `state`.
    ///
    /// The caller guarantees `state.len() == 2^num_qubits`.
    pub fn load(&mut self, state: &[Complex64]) {
        debug_assert_eq!(state.len(), self.amplitudes.len());
        self.amplitudes.copy_from_slice(state);
    }

    /// Register width.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Current amplitudes.
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    /// Apply one gate operation.
    pub fn apply(&mut self, op: &GateOp) {
        match *op {
            GateOp::Single { gate, target } => self.apply_single(gate, target.mask()),
            GateOp::Cnot { control, target } => {
                let control = control.mask();
                self.for_each_pair(target.mask(), |i, amps| {
                    if i & control != 0 {
                        amps.swap(0, 1);
                    }
                });
            }
        }
    }

    fn apply_single(&mut self, gate: SingleQubitGate, mask: usize) {
        match gate {
            SingleQubitGate::I => {}
            SingleQubitGate::X => self.for_each_pair(mask, |_, amps| amps.swap(0, 1)),
            SingleQubitGate::Z => self.for_each_pair(mask, |_, amps| amps[1] = -amps[1]),
            SingleQubitGate::H => {
                let s = std::f64::consts::FRAC_1_SQRT_2;
                self.for_each_pair(mask, |_, amps| {
                    let (a, b) = (amps[0], amps[1]);
                    amps[0] = s * (a + b);
                    amps[1] = s * (a - b);
                });
            }
            other => {
                let m = other.matrix();
                self.for_each_pair(mask, |_, amps| mix(&m, amps));
            }
        }
    }

    /// Visit every amplitude pair `(|…0…⟩, |…1…⟩)` that differs only in the
    /// bit `mask`. The closure receives the index of the `0` member and the
    /// pair as a two-element array it may rewrite.
    fn for_each_pair<F>(&mut self, mask: usize, mut f: F)
    where
        F: FnMut(usize, &mut [Complex64; 2]),
    {
        for i in (0..self.amplitudes.len()).filter(|i| i & mask == 0) {
            let j = i | mask;
            let mut pair = [self.amplitudes[i], self.amplitudes[j]];
            f(i, &mut pair);
            self.amplitudes[i] = pair[0];
            self.amplitudes[j] = pair[1];
        }
    }
}

/// `amps ← m · amps` for a general 2×2 unitary.
fn mix(m: &Matrix2, amps: &mut [Complex64; 2]) {
    let (a, b) = (amps[0], amps[1]);
    amps[0] = m[0][0] * a + m[0][1] * b;
    amps[1] = m[1][0] * a + m[1][1] * b;
}

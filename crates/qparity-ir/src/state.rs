//! Complex state vectors.

use num_complex::Complex64;

use crate::error::{IrError, IrResult};

/// Amplitudes of an `n`-qubit state, `2^n` entries indexed by basis state.
pub type StateVector = Vec<Complex64>;

/// Widest register whose state vector this crate will size.
pub const MAX_QUBITS: u32 = 30;

/// Dimension of the state space spanned by `num_qubits` qubits.
///
/// Fails with [`IrError::RegisterTooWide`] above [`MAX_QUBITS`].
pub fn dimension(num_qubits: u32) -> IrResult<usize> {
    if num_qubits > MAX_QUBITS {
        return Err(IrError::RegisterTooWide {
            num_qubits,
            max: MAX_QUBITS,
        });
    }
    Ok(1usize << num_qubits)
}

/// Number of qubits whose state space has exactly `dim` entries.
pub fn qubits_for_dimension(dim: usize) -> IrResult<u32> {
    if dim == 0 || !dim.is_power_of_two() {
        return Err(IrError::InvalidDimension(dim));
    }
    Ok(dim.trailing_zeros())
}

/// The computational basis ket `|index⟩`.
///
/// # Panics
///
/// Panics if `num_qubits > MAX_QUBITS` or `index >= 2^num_qubits`.
pub fn basis_state(index: usize, num_qubits: u32) -> StateVector {
    assert!(num_qubits <= MAX_QUBITS, "{num_qubits} qubits exceeds {MAX_QUBITS}");
    let mut amplitudes = vec![Complex64::new(0.0, 0.0); 1usize << num_qubits];
    amplitudes[index] = Complex64::new(1.0, 0.0);
    amplitudes
}

/// L2 norm of a vector of amplitudes.
pub fn norm(amplitudes: &[Complex64]) -> f64 {
    amplitudes.iter().map(Complex64::norm_sqr).sum::<f64>().sqrt()
}

/// Divide every amplitude by the vector's norm.
///
/// Returns the norm before scaling; a zero vector is left untouched.
pub fn normalize(amplitudes: &mut [Complex64]) -> f64 {
    let n = norm(amplitudes);
    if n > 0.0 {
        for amp in amplitudes.iter_mut() {
            *amp /= n;
        }
    }
    n
}

/// Inner product `⟨a|b⟩`.
pub fn inner(a: &[Complex64], b: &[Complex64]) -> Complex64 {
    a.iter().zip(b).map(|(x, y)| x.conj() * y).sum()
}

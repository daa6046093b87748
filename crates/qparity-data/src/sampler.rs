//! Random states confined to one parity subspace.
//!
//! Algorithm:
//!   label ~ uniform{+1, -1}            (+1 ⇒ even class, -1 ⇒ odd class)
//!   for each index k in the class:
//!     r_k ~ U[0, 1),  θ_k ~ U[0, 2π)
//!     ψ_k = r_k · e^{iθ_k}
//!   ψ_j = 0 for every j outside the class
//!   ψ ← ψ / ‖ψ‖

use num_complex::Complex64;
use rand::Rng;
use std::f64::consts::TAU;

use qparity_ir::StateVector;
use qparity_ir::state::normalize;

use crate::label::Label;
use crate::partition::ParityPartition;

/// Draws labeled unit vectors supported on a single parity class.
pub struct StateSampler<'a> {
    partition: &'a ParityPartition,
}

impl<'a> StateSampler<'a> {
    /// Create a sampler over `partition`'s register.
    pub fn new(partition: &'a ParityPartition) -> Self {
        Self { partition }
    }

    /// Draw one `(state, label)` pair.
    ///
    /// Amplitudes outside the chosen class are exactly zero. A draw whose
    /// magnitudes are all zero cannot be normalized and is drawn again.
    ///
    /// Seeding `rng` makes the draw reproducible:
    /// ```rust,ignore
    /// use rand::SeedableRng;
    /// let mut rng = rand::rngs::StdRng::seed_from_u64(42);
    /// let (state, label) = sampler.sample(&mut rng);
    /// ```
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> (StateVector, Label) {
        loop {
            let label = if rng.gen_bool(0.5) {
                Label::Even
            } else {
                Label::Odd
            };

            let mut state = vec![Complex64::new(0.0, 0.0); self.partition.dimension()];
            for &index in self.partition.class(label) {
                let r: f64 = rng.gen_range(0.0..1.0);
                let theta: f64 = rng.gen_range(0.0..TAU);
                state[index] = Complex64::from_polar(r, theta);
            }

            if normalize(&mut state) > 0.0 {
                return (state, label);
            }
        }
    }
}

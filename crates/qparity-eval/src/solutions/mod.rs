//! Built-in solutions, looked up by name.

mod density_contrast;
mod parity_search;
mod zero;

pub use density_contrast::DensityContrast;
pub use parity_search::ParitySearch;
pub use zero::Zero;

use crate::error::{EvalError, EvalResult};
use crate::solution::Solution;

/// Every built-in solution, in listing order.
pub fn builtin() -> Vec<Box<dyn Solution>> {
    vec![
        Box::new(Zero),
        Box::new(DensityContrast),
        Box::new(ParitySearch::default()),
    ]
}

/// The solution registered as `name`.
pub fn find(name: &str) -> EvalResult<Box<dyn Solution>> {
    let all = builtin();
    let available = all
        .iter()
        .map(|s| s.name().to_string())
        .collect::<Vec<_>>()
        .join(", ");
    all.into_iter()
        .find(|s| s.name() == name)
        .ok_or_else(|| EvalError::UnknownSolution {
            name: name.to_string(),
            available,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find() {
        assert_eq!(find("zero").unwrap().name(), "zero");
        assert_eq!(find("parity_search").unwrap().name(), "parity_search");
        match find("svm") {
            Err(EvalError::UnknownSolution { available, .. }) => {
                assert_eq!(available, "zero, density_contrast, parity_search")
            }
            Err(other) => panic!("expected UnknownSolution, got {other:?}"),
            Ok(s) => panic!("unexpectedly found '{}'", s.name()),
        }
    }

    #[test]
    fn test_every_solution_ships_source() {
        for solution in builtin() {
            let source = solution.source().unwrap();
            assert!(source.contains("impl Solution for"));
            assert!(!solution.summary().is_empty());
        }
    }
}

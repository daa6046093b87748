use num_complex::Complex64;
use rand::SeedableRng;
use rand::rngs::StdRng;

use qparity_adapter_sim::StatevectorSimulator;
use qparity_data::{DataError, DatasetBuilder, Label, ParityPartition, ProblemDefinition, catalog, store};
use qparity_hal::{HalError, TransformAdapter};
use qparity_ir::state::{basis_state, inner, norm};
use qparity_ir::{QubitId, Transform};

const EPS: f64 = 1e-9;

fn close(a: &[Complex64], b: &[Complex64]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| (x - y).norm() < EPS)
}

fn definition(num_qubits: u32, transform: Transform, sample_count: usize) -> ProblemDefinition {
    ProblemDefinition {
        name: "scratch".into(),
        title: "scratch".into(),
        num_qubits,
        transform,
        inverse_transform: None,
        sample_count,
        time_estimate: 1.0,
        hint: String::new(),
        fixed_training: None,
    }
}

#[test]
fn test_set_enumerates_basis_in_order() {
    let sim = StatevectorSimulator::new();
    let builder = DatasetBuilder::new(&sim);
    let (vectors, labels) = builder.test_set(2, &Transform::new()).unwrap();

    assert_eq!(vectors.len(), 4);
    for (i, v) in vectors.iter().enumerate() {
        assert!(close(v, &basis_state(i, 2)));
    }
    assert_eq!(labels, vec![Label::Even, Label::Odd, Label::Odd, Label::Even]);
}

#[test]
fn test_set_with_x_keeps_index_labels() {
    let sim = StatevectorSimulator::new();
    let builder = DatasetBuilder::new(&sim);
    let mut t = Transform::new();
    t.x(QubitId(0));
    let (vectors, labels) = builder.test_set(1, &t).unwrap();

    assert!(close(&vectors[0], &basis_state(1, 1)));
    assert!(close(&vectors[1], &basis_state(0, 1)));
    assert_eq!(labels, vec![Label::Even, Label::Odd]);
}

#[test]
fn test_set_with_hadamard() {
    let sim = StatevectorSimulator::new();
    let builder = DatasetBuilder::new(&sim);
    let mut t = Transform::new();
    t.h(QubitId(0));
    let (vectors, _) = builder.test_set(1, &t).unwrap();

    let s = std::f64::consts::FRAC_1_SQRT_2;
    assert!(close(&vectors[0], &[Complex64::new(s, 0.0), Complex64::new(s, 0.0)]));
    assert!(close(&vectors[1], &[Complex64::new(s, 0.0), Complex64::new(-s, 0.0)]));
}

#[test]
fn test_set_ignores_rng() {
    let sim = StatevectorSimulator::new();
    let builder = DatasetBuilder::new(&sim);
    let def = catalog::definition(2).unwrap();

    let a = builder.build(&def, &mut StdRng::seed_from_u64(1)).unwrap();
    let b = builder.build(&def, &mut StdRng::seed_from_u64(2)).unwrap();

    assert_eq!(a.test_vectors(), b.test_vectors());
    assert_eq!(a.test_labels(), b.test_labels());
    assert_ne!(a.train_vectors(), b.train_vectors());
}

#[test]
fn test_same_seed_same_training_set() {
    let sim = StatevectorSimulator::new();
    let builder = DatasetBuilder::new(&sim);
    let def = catalog::definition(1).unwrap();

    let a = builder.build(&def, &mut StdRng::seed_from_u64(7)).unwrap();
    let b = builder.build(&def, &mut StdRng::seed_from_u64(7)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn training_labels_are_fixed_before_transform() {
    // X flips qubit 0, so every transformed draw lands in the opposite
    // parity class while keeping its draw-time label.
    let sim = StatevectorSimulator::new();
    let builder = DatasetBuilder::new(&sim);
    let mut t = Transform::new();
    t.x(QubitId(0));
    let def = definition(2, t, 40);
    let partition = ParityPartition::new(2);

    let (vectors, labels) = builder
        .training_set(&def, &mut StdRng::seed_from_u64(11))
        .unwrap();
    assert_eq!(vectors.len(), 40);

    for (v, label) in vectors.iter().zip(&labels) {
        let flipped = match label {
            Label::Even => Label::Odd,
            Label::Odd => Label::Even,
        };
        for (i, amp) in v.iter().enumerate() {
            if !partition.class(flipped).contains(&i) {
                assert!(amp.norm() < EPS, "amplitude {i} outside class {flipped}");
            }
        }
    }
}

#[test]
fn training_vectors_are_transformed_draws() {
    let sim = StatevectorSimulator::new();
    let builder = DatasetBuilder::new(&sim);
    let def = catalog::definition(2).unwrap();
    let inverse = def.transform.inverse();
    let partition = ParityPartition::new(2);

    let (vectors, labels) = builder
        .training_set(&def, &mut StdRng::seed_from_u64(5))
        .unwrap();
    for (v, label) in vectors.iter().zip(&labels) {
        assert!((norm(v) - 1.0).abs() < EPS);
        let original = sim.apply(&inverse, v).unwrap();
        let outside: f64 = original
            .iter()
            .enumerate()
            .filter(|(i, _)| !partition.class(*label).contains(i))
            .map(|(_, a)| a.norm_sqr())
            .sum();
        assert!(outside < EPS);
    }
}

#[test]
fn problem0_uses_fixed_training_data() {
    let sim = StatevectorSimulator::new();
    let builder = DatasetBuilder::new(&sim);
    let spec = builder
        .build(&catalog::definition(0).unwrap(), &mut StdRng::seed_from_u64(0))
        .unwrap();

    assert_eq!(spec.sample_count(), 2);
    assert_eq!(spec.train_vectors()[0], basis_state(0, 1));
    assert_eq!(spec.train_vectors()[1], basis_state(1, 1));
    assert_eq!(spec.train_labels(), &[Label::Even, Label::Odd]);
    assert_eq!(spec.test_vectors().len(), 2);
}

#[test]
fn every_catalog_problem_builds() {
    let sim = StatevectorSimulator::new();
    let builder = DatasetBuilder::new(&sim);
    let mut rng = StdRng::seed_from_u64(3);
    for def in catalog::all() {
        let spec = builder.build(&def, &mut rng).unwrap();
        assert_eq!(spec.train_vectors().len(), def.sample_count);
        assert_eq!(spec.test_vectors().len(), 1 << def.num_qubits);
    }
    assert_eq!(sim.live_registers(), 0);
}

#[test]
fn test_vectors_are_orthonormal() {
    let sim = StatevectorSimulator::new();
    let builder = DatasetBuilder::new(&sim);
    let def = catalog::definition(2).unwrap();
    let (vectors, _) = builder.test_set(def.num_qubits, &def.transform).unwrap();
    for (i, a) in vectors.iter().enumerate() {
        for (j, b) in vectors.iter().enumerate() {
            let expected = if i == j { 1.0 } else { 0.0 };
            assert!((inner(a, b).norm() - expected).abs() < EPS);
        }
    }
}

#[test]
fn build_rejects_out_of_range_transform() {
    let sim = StatevectorSimulator::new();
    let builder = DatasetBuilder::new(&sim);
    let mut t = Transform::new();
    t.h(QubitId(3));
    let def = definition(2, t, 4);
    assert!(builder.build(&def, &mut StdRng::seed_from_u64(0)).is_err());
}

#[test]
fn build_rejects_register_wider_than_adapter() {
    let sim = StatevectorSimulator::with_max_qubits(4);
    let builder = DatasetBuilder::new(&sim);
    let def = definition(40, Transform::new(), 10);

    let err = builder.build(&def, &mut StdRng::seed_from_u64(0)).unwrap_err();
    assert!(matches!(
        err,
        DataError::Adapter(HalError::TooManyQubits {
            requested: 40,
            max: 4
        })
    ));
    assert!(builder.test_set(64, &Transform::new()).is_err());
    assert_eq!(sim.allocations(), 0);
}

#[test]
fn build_rejects_training_count_off_definition() {
    let sim = StatevectorSimulator::new();
    let builder = DatasetBuilder::new(&sim);
    let mut def = definition(1, Transform::new(), 2);
    def.fixed_training = Some(vec![(basis_state(0, 1), Label::Even)]);

    let err = builder.build(&def, &mut StdRng::seed_from_u64(0)).unwrap_err();
    assert!(matches!(err, DataError::InvalidProblem { .. }));
    assert!(err.to_string().contains("sample_count is 2"));
}

#[test]
fn store_round_trip_validates() {
    let sim = StatevectorSimulator::new();
    let builder = DatasetBuilder::new(&sim);
    let spec = builder
        .build(&catalog::definition(1).unwrap(), &mut StdRng::seed_from_u64(9))
        .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = store::save(&spec, dir.path()).unwrap();
    assert!(path.ends_with("problem1_spec.json"));

    let loaded = store::load(dir.path(), "problem1").unwrap();
    assert_eq!(loaded.name(), "problem1");
    assert_eq!(loaded.index(), Some(1));
    assert_eq!(loaded.train_labels(), spec.train_labels());
    assert_eq!(loaded.test_labels(), spec.test_labels());
    assert_eq!(loaded.transform(), spec.transform());
    for (a, b) in loaded.train_vectors().iter().zip(spec.train_vectors()) {
        assert!(close(a, b));
    }
}

#[test]
fn store_rejects_tampered_labels() {
    let sim = StatevectorSimulator::new();
    let builder = DatasetBuilder::new(&sim);
    let spec = builder
        .build(&catalog::definition(1).unwrap(), &mut StdRng::seed_from_u64(9))
        .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = store::save(&spec, dir.path()).unwrap();

    let mut json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    json["test_labels"][0] = serde_json::json!(-1);
    std::fs::write(&path, serde_json::to_string(&json).unwrap()).unwrap();

    let err = store::load(dir.path(), "problem1").unwrap_err();
    assert!(err.to_string().contains("parity"));
}

//! End-to-end checks of the calculator's public operations.
//!
//! Covers:
//! - Sequence shape and canonical labelling
//! - Level properties and metrics computed from the formula
//! - Both branches of the time/space relation, recomputed independently
//! - Purity of repeated calls

use std::thread;

use gb_sequence::{Error, LevelProperties, SequenceCalculator, TimeSpaceRelation};

#[test]
fn sequence_has_one_entry_per_dimension() {
    for n in 1..=20 {
        let calculator = SequenceCalculator::with_dimensions(n).unwrap();
        let sequence = calculator.generate_sequence();
        assert_eq!(sequence.len(), n);
        for (position, dimension) in sequence.iter().enumerate() {
            assert_eq!(dimension.index, position + 1);
        }
    }
}

#[test]
fn canonical_sequence_labels() {
    use gb_sequence::DimensionLabel::{Space, Time};

    let sequence = SequenceCalculator::default().generate_sequence();
    let labels: Vec<_> = sequence.iter().map(|d| d.label).collect();
    assert_eq!(
        labels,
        [Space, Space, Space, Time, Space, Time, Space, Time, Space, Time, Space]
    );
    assert_eq!(sequence.space_indices(), vec![1, 2, 3, 5, 7, 9, 11]);
    assert_eq!(sequence.time_indices(), vec![4, 6, 8, 10]);
}

#[test]
fn level_two_uses_formula_not_name() {
    let props = SequenceCalculator::default().level_properties(2).unwrap();
    assert_eq!(
        props,
        LevelProperties {
            level: 2,
            name: "3D being".to_string(),
            spatial_dims: 5,
            temporal_dim: 6,
            total_dims: 6,
            inhabited_dims: vec![1, 2, 3, 4, 5],
            experiential_time: 6,
        }
    );
}

#[test]
fn level_three_metric() {
    let calculator = SequenceCalculator::default();
    let props = calculator.level_properties(3).unwrap();
    let metric = calculator.level_metric(3).unwrap();

    let k = props.spatial_dims;
    assert_eq!(metric.metric.nrows(), k + 1);
    assert_eq!(metric.metric.ncols(), k + 1);

    let diagonal = metric.diagonal();
    assert!(diagonal[..k].iter().all(|&v| v == 1));
    assert_eq!(diagonal[k], -1);
    assert_eq!(metric.signature_string(), format!("({}, 1)", k));
}

#[test]
fn level_one_is_invalid() {
    let calculator = SequenceCalculator::default();
    assert!(matches!(
        calculator.level_properties(1),
        Err(Error::InvalidArgument(_))
    ));
    assert!(matches!(
        calculator.level_metric(1),
        Err(Error::InvalidArgument(_))
    ));
    assert!(matches!(
        calculator.time_space_relation(1, 2),
        Err(Error::InvalidArgument(_))
    ));
}

/// Recompute the relation directly from the properties.
fn expected_relation(calculator: &SequenceCalculator, lower: u32, upper: u32) -> bool {
    let time = calculator.level_properties(lower).unwrap().temporal_dim;
    calculator
        .level_properties(upper)
        .unwrap()
        .inhabited_dims
        .contains(&time)
}

#[test]
fn relation_matches_recomputation() {
    let calculator = SequenceCalculator::default();

    // containment holds
    let related = calculator.time_space_relation(2, 3).unwrap();
    assert!(expected_relation(&calculator, 2, 3));
    assert_eq!(related.is_related(), expected_relation(&calculator, 2, 3));
    assert_eq!(
        related.dimension(),
        Some(calculator.level_properties(2).unwrap().temporal_dim)
    );

    // containment fails
    let unrelated = calculator.time_space_relation(4, 2).unwrap();
    assert!(!expected_relation(&calculator, 4, 2));
    assert_eq!(
        unrelated,
        TimeSpaceRelation::Unrelated {
            lower_level: 4,
            upper_level: 2,
        }
    );

    for lower in 2..=8 {
        for upper in 2..=8 {
            let relation = calculator.time_space_relation(lower, upper).unwrap();
            assert_eq!(
                relation.is_related(),
                expected_relation(&calculator, lower, upper),
                "levels {} and {}",
                lower,
                upper
            );
        }
    }
}

#[test]
fn repeated_calls_are_identical() {
    let calculator = SequenceCalculator::default();
    assert_eq!(calculator.generate_sequence(), calculator.generate_sequence());
    assert_eq!(
        calculator.level_properties(5).unwrap(),
        calculator.level_properties(5).unwrap()
    );
    assert_eq!(
        calculator.level_metric(4).unwrap(),
        calculator.level_metric(4).unwrap()
    );
    assert_eq!(
        calculator.time_space_relation(3, 4).unwrap(),
        calculator.time_space_relation(3, 4).unwrap()
    );
}

#[test]
fn shared_across_threads() {
    let calculator = SequenceCalculator::default();
    let expected = calculator.level_metric(4).unwrap();

    thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| calculator.level_metric(4).unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

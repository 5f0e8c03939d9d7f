//! Integration tests for pipeline composition, conditional gating, and
//! per-sample execution.

use serde_json::json;
use tsaug::prelude::*;

#[test]
fn combine_two_augmenters() {
    let mut set = Dataset::new(vec![vec![1.0; 100]], vec![String::from("1")]).unwrap();

    let pipeline = AugmentationPipeline::new()
        .add(Repeat::new(5).unwrap())
        .add(Crop::new(20).unwrap());
    pipeline.execute(&mut set, true, false).unwrap();

    assert_eq!(set.n_samples(), 5);
    assert_eq!(set.features()[3].len(), 20);
    assert_eq!(set.labels().len(), 5);
}

#[test]
fn conditional_augmenter_gates_per_row() {
    let mut set =
        Dataset::new(vec![vec![1.0; 100]; 100], vec![String::from("1"); 100]).unwrap();

    let gated = ConditionalAugmenter::new(Drop::new(1.0, None).unwrap(), 0.5)
        .unwrap()
        .with_seed(Seed::new(42));
    gated.augment_batch(&mut set, true).unwrap();

    assert_eq!(set.n_samples(), 100);
    let mut dropped = 0;
    for row in set.features() {
        if row == &vec![0.0; 100] {
            dropped += 1;
        } else {
            assert_eq!(row, &vec![1.0; 100]);
        }
    }
    assert!(dropped > 0 && dropped < 100);
}

#[test]
fn conditional_extremes() {
    let never = ConditionalAugmenter::new(Rotation::new(0.0).unwrap(), 0.0).unwrap();
    let mut set = Dataset::new(vec![vec![1.0; 10]; 20], vec![String::from("1"); 20]).unwrap();
    never.augment_batch(&mut set, false).unwrap();
    assert!(set.features().iter().all(|row| row == &vec![1.0; 10]));

    let always = ConditionalAugmenter::new(Rotation::new(0.0).unwrap(), 1.0).unwrap();
    always.augment_batch(&mut set, false).unwrap();
    assert!(set.features().iter().all(|row| row == &vec![-1.0; 10]));
}

#[test]
fn per_sample_pipelining() {
    let mut set = Dataset::new(
        vec![vec![1.0; 10], vec![2.0; 10], vec![3.0; 10]],
        vec!["a".into(), "b".into(), "c".into()],
    )
    .unwrap();

    // Scaling (multiply by 2.0) then Crop (length 5)
    let pipeline = AugmentationPipeline::new()
        .add(Scaling::new(2.0, 2.0).unwrap())
        .add(Crop::new(5).unwrap());
    pipeline.execute(&mut set, false, true).unwrap();

    assert_eq!(set.n_samples(), 3);
    for (i, row) in set.features().iter().enumerate() {
        let expected = vec![(i as f64 + 1.0) * 2.0; 5];
        assert_eq!(&row[..], &expected[..]);
    }
}

#[test]
fn per_sample_rejects_batch_only_stage_without_mutation() {
    let mut set = Dataset::new(
        vec![vec![1.0; 10], vec![2.0; 10]],
        vec!["a".into(), "b".into()],
    )
    .unwrap();
    let original = set.clone();

    let pipeline = AugmentationPipeline::new()
        .add(Scaling::new(2.0, 2.0).unwrap())
        .add(Repeat::new(3).unwrap());

    match pipeline.execute(&mut set, true, true) {
        Err(CoreError::PipelineCompatibility { stage }) => assert_eq!(stage, "Repeat"),
        other => panic!("expected PipelineCompatibility, got {other:?}"),
    }
    assert_eq!(set, original);
}

#[test]
fn per_sample_rejects_time_domain_frequency_stage() {
    let mut set = Dataset::new(vec![vec![1.0; 16]], vec!["a".into()]).unwrap();

    let pipeline = AugmentationPipeline::new()
        .add(AmplitudePhasePerturbation::new(0.1, 0.1, true).unwrap());

    let err = pipeline.execute(&mut set, false, true).unwrap_err();
    assert!(matches!(err, CoreError::PipelineCompatibility { .. }));
}

#[test]
fn parallel_and_sequential_agree_for_fixed_seed() {
    let base = Dataset::new(
        (0..32)
            .map(|i| (0..64).map(|t| f64::from(i * t)).collect())
            .collect(),
        (0..32).map(|i| i.to_string()).collect(),
    )
    .unwrap();

    let augmenter = Jittering::new(0.3).unwrap().with_seed(Seed::new(7));

    let mut sequential = base.clone();
    augmenter.augment_batch(&mut sequential, false).unwrap();

    let mut parallel = base.clone();
    augmenter.augment_batch(&mut parallel, true).unwrap();

    assert_eq!(sequential.features(), parallel.features());
    assert_ne!(sequential.features(), base.features());
}

#[test]
fn stage_order_matters() {
    // Crop-then-repeat and repeat-then-crop must both end with five rows of
    // twenty points, built strictly in stage order.
    let mut set = Dataset::new(vec![vec![1.0; 100]], vec!["1".into()]).unwrap();
    let pipeline = AugmentationPipeline::new()
        .add(Crop::new(20).unwrap())
        .add(Repeat::new(5).unwrap());
    pipeline.execute(&mut set, false, false).unwrap();

    assert_eq!(set.n_samples(), 5);
    assert_eq!(set.seq_len(), 20);
}

#[test]
fn ragged_length_change_fails_atomically() {
    // Gating a length-changing augmenter crops only some rows; the batch
    // must fail with a dimension error and leave the dataset untouched.
    let mut set =
        Dataset::new(vec![vec![1.0; 40]; 50], vec![String::from("1"); 50]).unwrap();
    let original = set.clone();

    let gated = ConditionalAugmenter::new(Crop::new(10).unwrap(), 0.5)
        .unwrap()
        .with_seed(Seed::new(13));
    let err = gated.augment_batch(&mut set, true).unwrap_err();

    assert!(matches!(err, CoreError::Dimension(_)));
    assert_eq!(set, original);
}

#[test]
fn pipeline_from_config_records() {
    let records = vec![
        ("Repeat".to_string(), json!({ "times": 4 })),
        ("Crop".to_string(), json!({ "size": 10 })),
        ("Jittering".to_string(), json!({ "std_dev": 0.05 })),
    ];

    let mut set = Dataset::new(vec![vec![1.0; 50]], vec!["1".into()]).unwrap();
    let pipeline = build_pipeline(&records).unwrap();
    pipeline.execute(&mut set, true, false).unwrap();

    assert_eq!(set.n_samples(), 4);
    assert_eq!(set.seq_len(), 10);
}

#[test]
fn shape_invariant_holds_after_every_call() {
    let mut set = Dataset::new(
        vec![vec![1.0; 30], vec![2.0; 30]],
        vec!["a".into(), "b".into()],
    )
    .unwrap();

    let pipeline = AugmentationPipeline::new()
        .add(Repeat::new(3).unwrap())
        .add(Crop::new(12).unwrap())
        .add(ConditionalAugmenter::new(Jittering::new(0.1).unwrap(), 0.5).unwrap());
    pipeline.execute(&mut set, true, false).unwrap();

    assert_eq!(set.features().len(), set.labels().len());
    assert!(set.features().iter().all(|row| row.len() == set.seq_len()));
}

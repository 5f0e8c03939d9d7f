//! Integration tests covering the augmenter variants end to end.

use tsaug::prelude::*;

fn make_test_dataset() -> Dataset {
    Dataset::new(
        vec![
            vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0],
            vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0],
        ],
        vec!["A".into(), "B".into()],
    )
    .unwrap()
}

fn rng() -> rand_chacha::ChaCha8Rng {
    Seed::new(42).to_rng()
}

#[test]
fn addnoise_uniform_bounds() {
    let series = vec![1.0; 100];
    let augmenter = AddNoise::uniform(-1.0, 1.0).unwrap();
    let out = augmenter.augment_one(&series, &mut rng()).unwrap();

    out.iter().for_each(|&val| assert!((0.0..=2.0).contains(&val)));
    assert_ne!(out, series);
}

#[test]
fn addnoise_spike_touches_one_point() {
    let series = vec![1.0; 100];
    let augmenter = AddNoise::spike(-2.0, 2.0).unwrap();
    let out = augmenter.augment_one(&series, &mut rng()).unwrap();

    assert_eq!(out.iter().filter(|&&val| val != 1.0).count(), 1);
}

#[test]
fn convolve_preserves_length() {
    let series = vec![1.0, 2.0, 3.0, 4.0, 5.0];

    for window in [KernelWindow::Flat, KernelWindow::Gaussian] {
        let augmenter = Convolve::new(window, 3).unwrap();
        let out = augmenter.augment_one(&series, &mut rng()).unwrap();
        assert_eq!(out.len(), series.len());
        assert_ne!(out, series);
    }
}

#[test]
fn drift_zero_is_identity() {
    let series = vec![1.0, 2.0, 3.0, 4.0];
    let augmenter = Drift::new(0.0, 3).unwrap();
    let out = augmenter.augment_one(&series, &mut rng()).unwrap();
    assert_eq!(out, series);
}

#[test]
fn repeat_expands_labels_in_block_order() {
    let mut set = make_test_dataset();
    let augmenter = Repeat::new(3).unwrap();
    augmenter.augment_batch(&mut set, false).unwrap();

    assert_eq!(set.n_samples(), 6);
    assert_eq!(set.labels(), &["A", "B", "A", "B", "A", "B"]);
    assert_eq!(set.features()[0], set.features()[2]);
    assert_eq!(set.features()[1], set.features()[5]);
}

#[test]
fn crop_batch_is_uniform() {
    let mut set = make_test_dataset();
    let augmenter = Crop::new(4).unwrap();
    augmenter.augment_batch(&mut set, true).unwrap();

    assert_eq!(set.n_samples(), 2);
    assert!(set.features().iter().all(|row| row.len() == 4));
}

#[test]
fn crop_larger_than_rows_clamps() {
    let mut set = make_test_dataset();
    let augmenter = Crop::new(100).unwrap();
    augmenter.augment_batch(&mut set, false).unwrap();
    assert_eq!(set.seq_len(), 8);
}

#[test]
fn reverse_round_trip() {
    let set = make_test_dataset();
    let augmenter = Reverse::new();

    let mut once = set.clone();
    augmenter.augment_batch(&mut once, false).unwrap();
    assert_eq!(once.features()[0], vec![7.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0, 0.0]);

    augmenter.augment_batch(&mut once, true).unwrap();
    assert_eq!(once.features(), set.features());
}

#[test]
fn permutate_keeps_multiset_of_values() {
    let series: Vec<f64> = (0..24).map(f64::from).collect();
    let augmenter = Permutate::new(8, 2).unwrap();
    let out = augmenter.augment_one(&series, &mut rng()).unwrap();

    assert_eq!(out.len(), series.len());
    let mut sorted = out.clone();
    sorted.sort_by(f64::total_cmp);
    assert_eq!(sorted, series);
}

#[test]
fn rotation_is_involutive() {
    let set = make_test_dataset();
    let augmenter = Rotation::new(1.5).unwrap();

    let mut twice = set.clone();
    augmenter.augment_batch(&mut twice, false).unwrap();
    augmenter.augment_batch(&mut twice, false).unwrap();
    assert_eq!(twice.features(), set.features());
}

#[test]
fn scaling_deterministic_batch_matches_modes() {
    let base = make_test_dataset();
    let augmenter = Scaling::new(0.5, 1.5).unwrap().with_seed(Seed::new(9));

    let mut sequential = base.clone();
    augmenter.augment_batch(&mut sequential, false).unwrap();
    let mut parallel = base.clone();
    augmenter.augment_batch(&mut parallel, true).unwrap();

    assert_eq!(sequential.features(), parallel.features());
}

#[test]
fn quantize_levels_bound_distinct_values() {
    let series: Vec<f64> = (0..100).map(f64::from).collect();
    let augmenter = Quantize::new(5).unwrap();
    let out = augmenter.augment_one(&series, &mut rng()).unwrap();

    let mut distinct = out.clone();
    distinct.sort_by(f64::total_cmp);
    distinct.dedup();
    assert!(distinct.len() <= 5);
}

#[test]
fn pool_average_keeps_series_mean() {
    let series: Vec<f64> = (0..8).map(f64::from).collect();
    let augmenter = Pool::new(PoolKind::Average, 2).unwrap();
    let out = augmenter.augment_one(&series, &mut rng()).unwrap();

    let before: f64 = series.iter().sum();
    let after: f64 = out.iter().sum();
    assert!((before - after).abs() < 1e-12);
}

#[test]
fn time_warp_preserves_length_and_endpoints() {
    let series: Vec<f64> = (0..60).map(|i| (i as f64 * 0.2).cos()).collect();
    let augmenter = RandomTimeWarp::new(20, (0.5, 2.0)).unwrap();
    let out = augmenter.augment_one(&series, &mut rng()).unwrap();

    assert_eq!(out.len(), series.len());
    assert_eq!(out[0], series[0]);
    assert_eq!(out[59], series[59]);
}

#[test]
fn app_time_domain_batch_keeps_shape() {
    let mut set = make_test_dataset();
    let original = set.clone();

    let augmenter = AmplitudePhasePerturbation::new(0.1, 0.1, true).unwrap();
    augmenter.augment_batch(&mut set, true).unwrap();

    assert_eq!(set.n_samples(), 2);
    assert_eq!(set.seq_len(), 8);
    assert_eq!(set.labels(), original.labels());
    assert_ne!(set.features()[0], original.features()[0]);
}

#[test]
fn frequency_mask_time_domain_batch_keeps_shape() {
    let mut set = make_test_dataset();

    let augmenter = FrequencyMask::new(2, true).unwrap();
    augmenter.augment_batch(&mut set, false).unwrap();

    assert_eq!(set.n_samples(), 2);
    assert_eq!(set.seq_len(), 8);
}

#[test]
fn every_variant_preserves_the_shape_invariant() {
    let augmenters: Vec<Box<dyn Augmenter>> = vec![
        Box::new(AddNoise::gaussian(0.0, 0.5).unwrap()),
        Box::new(Jittering::new(0.2).unwrap()),
        Box::new(Drop::new(0.3, None).unwrap()),
        Box::new(Crop::new(4).unwrap()),
        Box::new(Rotation::new(0.0).unwrap()),
        Box::new(Scaling::new(0.5, 1.5).unwrap()),
        Box::new(Quantize::new(4).unwrap()),
        Box::new(Reverse::new()),
        Box::new(Permutate::new(4, 2).unwrap()),
        Box::new(Convolve::new(KernelWindow::Gaussian, 3).unwrap()),
        Box::new(Pool::new(PoolKind::Max, 2).unwrap()),
        Box::new(Resize::new(12).unwrap()),
        Box::new(Drift::new(0.5, 4).unwrap()),
        Box::new(RandomTimeWarp::new(4, (0.5, 2.0)).unwrap()),
        Box::new(Repeat::new(2).unwrap()),
        Box::new(AmplitudePhasePerturbation::new(0.1, 0.1, true).unwrap()),
        Box::new(FrequencyMask::new(2, true).unwrap()),
    ];

    for augmenter in augmenters {
        let mut set = make_test_dataset();
        augmenter
            .augment_batch(&mut set, true)
            .unwrap_or_else(|e| panic!("{} failed: {e}", augmenter.name()));

        assert_eq!(
            set.features().len(),
            set.labels().len(),
            "{} broke the row/label invariant",
            augmenter.name()
        );
        let len = set.seq_len();
        assert!(
            set.features().iter().all(|row| row.len() == len),
            "{} produced ragged rows",
            augmenter.name()
        );
    }
}

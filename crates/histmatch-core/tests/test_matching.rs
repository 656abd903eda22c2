mod common;

use approx::assert_abs_diff_eq;

use histmatch_core::channel::{ChannelArray, ChannelSelection};
use histmatch_core::consts::{CDF_TOLERANCE, LEVEL_COUNT};
use histmatch_core::error::HistMatchError;
use histmatch_core::matching::{
    apply_mapping, build_mapping, estimate_cdf, match_channels, Cdf, MappingTable,
};

use common::{constant_channel, ramp_channel, triple};

// ---------------------------------------------------------------------------
// estimate_cdf
// ---------------------------------------------------------------------------

#[test]
fn test_cdf_is_monotonic_and_ends_at_one() {
    let inputs = [
        ramp_channel(16, 16),
        ramp_channel(7, 13),
        constant_channel(3, 3, 0),
        constant_channel(5, 2, 255),
        ChannelArray::from_shape_fn((9, 11), |(r, c)| ((r * r * 31 + c * 17) % 256) as u8),
    ];
    for channel in inputs.iter() {
        let cdf = estimate_cdf(channel).unwrap();
        let values = cdf.values();
        for pair in values.windows(2) {
            assert!(pair[0] <= pair[1], "CDF decreased: {} -> {}", pair[0], pair[1]);
        }
        assert_abs_diff_eq!(values[LEVEL_COUNT - 1], 1.0, epsilon = CDF_TOLERANCE);
        assert!(values.iter().all(|v| (0.0..=1.0 + CDF_TOLERANCE).contains(v)));
    }
}

#[test]
fn test_cdf_of_constant_channel_is_step() {
    let cdf = estimate_cdf(&constant_channel(4, 4, 50)).unwrap();
    for level in 0..50u8 {
        assert_eq!(cdf.get(level), 0.0);
    }
    for level in 50..=255u8 {
        assert_abs_diff_eq!(cdf.get(level), 1.0, epsilon = CDF_TOLERANCE);
    }
}

#[test]
fn test_cdf_uniform_ramp() {
    // 256 samples, one per level: CDF[k] = (k + 1) / 256.
    let cdf = estimate_cdf(&ramp_channel(16, 16)).unwrap();
    for k in 0..LEVEL_COUNT {
        assert_abs_diff_eq!(cdf.values()[k], (k + 1) as f64 / 256.0, epsilon = 1e-12);
    }
}

#[test]
fn test_cdf_rejects_empty_channel() {
    let err = estimate_cdf(&ChannelArray::zeros((0, 0))).unwrap_err();
    assert!(matches!(err, HistMatchError::InvalidInput(_)));
}

// ---------------------------------------------------------------------------
// build_mapping
// ---------------------------------------------------------------------------

#[test]
fn test_self_match_strictly_increasing_is_identity() {
    let cdf = estimate_cdf(&ramp_channel(16, 16)).unwrap();
    let mapping = build_mapping(&cdf, &cdf);
    assert!(mapping.is_identity());
}

#[test]
fn test_self_match_lands_on_equal_cdf_value() {
    // Sparse histogram: long flat stretches in the CDF.
    let channel = ChannelArray::from_shape_vec((2, 4), vec![10, 10, 40, 40, 40, 200, 200, 255])
        .unwrap();
    let cdf = estimate_cdf(&channel).unwrap();
    let mapping = build_mapping(&cdf, &cdf);
    for s in 0..=255u8 {
        assert_eq!(cdf.get(mapping[s]), cdf.get(s), "level {s}");
        // Ties resolve to the first level with that CDF value.
        assert!(mapping[s] <= s);
    }
    assert_eq!(mapping[0], 0);
    assert_eq!(mapping[15], 10);
    assert_eq!(mapping[40], 40);
    assert_eq!(mapping[199], 40);
}

#[test]
fn test_tie_break_picks_lowest_flat_level() {
    // Target CDF flat at 0.5 over levels 100 and 101; source asks for 0.5.
    let mut target = [1.0f64; LEVEL_COUNT];
    target[..100].fill(0.0);
    target[100] = 0.5;
    target[101] = 0.5;
    let mut source = [1.0f64; LEVEL_COUNT];
    source[..7].fill(0.0);
    source[7] = 0.5;

    let target = Cdf::from_values(target);
    let source = Cdf::from_values(source);
    for _ in 0..5 {
        let mapping = build_mapping(&source, &target);
        assert_eq!(mapping[7], 100);
        assert_eq!(mapping[0], 0);
        assert_eq!(mapping[8], 102);
    }
}

#[test]
fn test_tie_break_equidistant_neighbours() {
    // 0.5 sits exactly between 0.25 (level 60) and 0.75 (level 61).
    let mut target = [1.0f64; LEVEL_COUNT];
    target[..60].fill(0.0);
    target[60] = 0.25;
    target[61] = 0.75;
    let source = Cdf::from_values([0.5; LEVEL_COUNT]);
    let mapping = build_mapping(&source, &Cdf::from_values(target));
    assert!(mapping.levels().iter().all(|&t| t == 60));
}

#[test]
fn test_mapping_need_not_be_monotonic() {
    // A decreasing source CDF forces the table to run backwards.
    let source: [f64; LEVEL_COUNT] = std::array::from_fn(|k| 1.0 - k as f64 / 255.0);
    let target: [f64; LEVEL_COUNT] = std::array::from_fn(|k| k as f64 / 255.0);
    let mapping = build_mapping(&Cdf::from_values(source), &Cdf::from_values(target));
    assert!(!mapping.is_monotonic());
    assert_eq!(mapping[0], 255);
    assert_eq!(mapping[255], 0);
}

// ---------------------------------------------------------------------------
// apply_mapping
// ---------------------------------------------------------------------------

#[test]
fn test_apply_preserves_shape() {
    let channel = ramp_channel(5, 9);
    let out = apply_mapping(&channel, &MappingTable::from_levels([3; LEVEL_COUNT]));
    assert_eq!(out.dim(), (5, 9));
    assert!(out.iter().all(|&v| v == 3));
}

#[test]
fn test_apply_identity_is_noop() {
    let channel = ramp_channel(12, 12);
    assert_eq!(apply_mapping(&channel, &MappingTable::identity()), channel);
}

// ---------------------------------------------------------------------------
// match_channels
// ---------------------------------------------------------------------------

#[test]
fn test_constant_source_to_constant_target() {
    let source = triple(&constant_channel(4, 4, 50));
    let target = triple(&constant_channel(4, 4, 200));
    let result = match_channels(&source, &target, &ChannelSelection::default()).unwrap();

    for (channel, mapping) in result.channels.iter().zip(result.mappings.iter()) {
        assert_eq!(mapping[50], 200);
        assert!(channel.iter().all(|&v| v == 200));
        assert_eq!(channel.dim(), (4, 4));
    }
}

#[test]
fn test_equal_constant_images_are_unchanged() {
    let source = triple(&constant_channel(6, 3, 128));
    let target = triple(&constant_channel(2, 9, 128));
    let result = match_channels(&source, &target, &ChannelSelection::default()).unwrap();
    for (i, channel) in result.channels.iter().enumerate() {
        assert_eq!(result.mappings[i][128], 128);
        assert_eq!(channel, &source[i]);
    }
}

#[test]
fn test_unselected_channels_pass_through() {
    let source = [ramp_channel(8, 8), constant_channel(8, 8, 50), ramp_channel(8, 8)];
    let target = triple(&constant_channel(8, 8, 7));
    let selection = ChannelSelection::new([false, true, false]);
    let result = match_channels(&source, &target, &selection).unwrap();

    assert_eq!(result.channels[0], source[0]);
    assert_eq!(result.channels[2], source[2]);
    assert!(result.mappings[0].is_identity());
    assert!(result.mappings[2].is_identity());

    assert_eq!(result.mappings[1][50], 7);
    assert!(result.channels[1].iter().all(|&v| v == 7));
}

#[test]
fn test_shape_follows_source_not_target() {
    let source = triple(&ramp_channel(10, 3));
    let target = triple(&ramp_channel(40, 25));
    let result = match_channels(&source, &target, &ChannelSelection::default()).unwrap();
    for channel in result.channels.iter() {
        assert_eq!(channel.dim(), (10, 3));
    }
}

#[test]
fn test_empty_selected_channel_fails_atomically() {
    let source = [
        ramp_channel(4, 4),
        ramp_channel(4, 4),
        ChannelArray::zeros((0, 4)),
    ];
    let target = triple(&ramp_channel(4, 4));
    let err = match_channels(&source, &target, &ChannelSelection::default()).unwrap_err();
    assert!(matches!(err, HistMatchError::InvalidInput(_)));
}

#[test]
fn test_empty_target_for_unselected_channel_is_ignored() {
    let source = triple(&ramp_channel(4, 4));
    let target = [
        ramp_channel(4, 4),
        ChannelArray::zeros((0, 0)),
        ramp_channel(4, 4),
    ];
    let selection = ChannelSelection::new([true, false, true]);
    let result = match_channels(&source, &target, &selection).unwrap();
    assert!(result.mappings[1].is_identity());
}

#[test]
fn test_selection_of_wrong_length_is_rejected() {
    let err = ChannelSelection::from_slice(&[true, true]).unwrap_err();
    assert!(matches!(err, HistMatchError::InvalidInput(_)));
}

#[test]
fn test_parallel_and_sequential_paths_agree() {
    // 300x300 crosses the parallel threshold; 8x8 does not.
    let big_source = [
        ramp_channel(300, 300),
        constant_channel(300, 300, 90),
        ChannelArray::from_shape_fn((300, 300), |(r, c)| ((r ^ c) % 256) as u8),
    ];
    let big_target = triple(&ChannelArray::from_shape_fn((120, 80), |(r, c)| {
        ((r * 3 + c * 5) % 200) as u8
    }));
    let result = match_channels(&big_source, &big_target, &ChannelSelection::default()).unwrap();

    for i in 0..3 {
        let mapping = build_mapping(
            &estimate_cdf(&big_source[i]).unwrap(),
            &estimate_cdf(&big_target[i]).unwrap(),
        );
        assert_eq!(result.mappings[i], mapping);
        assert_eq!(result.channels[i], apply_mapping(&big_source[i], &mapping));
    }
}

#[test]
fn test_wide_samples_are_clamped_before_matching() {
    use histmatch_core::channel::{ChannelImage, ColorSpace};
    use ndarray::Array2;

    // Decoder overshoot: -4 and 260 land on the 0 and 255 bounds.
    let raw = Array2::from_shape_vec((2, 2), vec![-4, 0, 255, 260]).unwrap();
    let source = ChannelImage::from_samples(&[raw.clone(), raw.clone(), raw], ColorSpace::Rgb)
        .unwrap();
    let target = triple(&constant_channel(3, 3, 42));

    assert_eq!(source.channels[0].as_slice().unwrap(), &[0, 0, 255, 255]);

    // Level 0 holds half the mass, tying 0.0 and 1.0 in the target CDF; the
    // lower level wins. Level 255 lands on the target's step at 42.
    let result = match_channels(&source.channels, &target, &ChannelSelection::default()).unwrap();
    for (channel, mapping) in result.channels.iter().zip(result.mappings.iter()) {
        assert_eq!(mapping[0], 0);
        assert_eq!(mapping[255], 42);
        assert_eq!(channel.as_slice().unwrap(), &[0, 0, 42, 42]);
    }
}

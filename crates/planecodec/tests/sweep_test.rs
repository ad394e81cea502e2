//! Integration tests for the quality sweep

use planecodec::*;

fn create_test_channels(size: usize) -> Channels {
    Channels::new(
        Plane::from_fn(size, size, |x, y| ((x * 5 + y * 3) % 256) as i32),
        Plane::from_fn(size, size, |x, _| x as i32 - 40),
        Plane::from_fn(size, size, |_, y| 30 - y as i32),
    )
    .unwrap()
}

#[test]
fn test_full_sweep_produces_every_step() {
    let config = CodecConfig::new(16).unwrap();
    let input = create_test_channels(16);

    let sweep = QualitySweep::new(&input, config, SweepOptions::default()).unwrap();
    let frames: Vec<SweepFrame> = sweep.collect::<PlaneResult<_>>().unwrap();

    assert_eq!(frames.len(), 64);
    for (i, frame) in frames.iter().enumerate() {
        assert_eq!(frame.step, i + 1);
        assert_eq!(frame.dct_retention, i + 1);
        assert_eq!(frame.dwt_retention, (i + 1) * config.sweep_stride());
    }

    // The last step keeps everything
    let last = frames.last().unwrap();
    assert_eq!(last.dwt, input);
    for (decoded, original) in last.dct.planes().iter().zip(input.planes()) {
        assert!(decoded.max_abs_diff(original).unwrap() <= 1);
    }
}

#[test]
fn test_frames_match_independent_runs() {
    let config = CodecConfig::new(32).unwrap();
    let input = create_test_channels(32);
    let options = SweepOptions::new().first_step(7).last_step(9);

    for frame in QualitySweep::new(&input, config, options).unwrap() {
        let frame = frame.unwrap();
        let dct = DctCodec::new(config)
            .reconstruct_channels(&input, frame.dct_retention)
            .unwrap();
        let dwt = DwtCodec::new(config)
            .reconstruct_channels(&input, frame.dwt_retention)
            .unwrap();
        assert_eq!(frame.dct, dct);
        assert_eq!(frame.dwt, dwt);
    }
}

#[test]
fn test_default_sweep_budgets() {
    let config = CodecConfig::default();
    let input = Channels::new(
        Plane::new(512, 512),
        Plane::new(512, 512),
        Plane::new(512, 512),
    )
    .unwrap();

    let options = SweepOptions::new().first_step(64).last_step(64);
    let frame = QualitySweep::new(&input, config, options)
        .unwrap()
        .next()
        .unwrap()
        .unwrap();
    assert_eq!(frame.dct_retention, 64);
    assert_eq!(frame.dwt_retention, 262_144);
    assert_eq!(frame.dct, input);
    assert_eq!(frame.dwt, input);
}

#[test]
fn test_compare_single_budget() {
    let config = CodecConfig::new(64).unwrap();
    let input = create_test_channels(64);

    let frame = compare(&input, config, 3 * config.sweep_stride()).unwrap();
    assert_eq!(frame.dct_retention, 3);
    assert_eq!(frame.dct.width(), 64);
    assert_eq!(frame.dwt.height(), 64);
}

#[test]
fn test_sweep_input_validated() {
    let config = CodecConfig::new(16).unwrap();
    let input = create_test_channels(32);
    assert!(matches!(
        QualitySweep::new(&input, config, SweepOptions::default()),
        Err(PlaneError::DimensionMismatch { .. })
    ));
}

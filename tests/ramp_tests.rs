//! Integration tests for BrightnessRamp

mod common;
use common::*;

use rgbw_ramp::{AnimationError, BrightnessRamp};

#[test]
fn thirty_steps_yield_thirty_one_samples() {
    let ramp = BrightnessRamp::new(0.2, 1.0, 30).unwrap();
    let samples: Vec<f32> = ramp.samples().collect();

    assert_eq!(samples.len(), 31);
    assert_eq!(ramp.sample_count(), 31);
    assert_eq!(samples[0], 0.2);
    assert_eq!(samples[30], 1.0);
}

#[test]
fn midpoint_of_ramp_up_is_point_six() {
    let ramp = BrightnessRamp::new(0.2, 1.0, 30).unwrap();

    assert!(approx_eq(ramp.step_size(), 0.8 / 30.0));
    assert!(approx_eq(ramp.sample(15).unwrap(), 0.2 + 15.0 * (0.8 / 30.0)));
    assert!(approx_eq(ramp.sample(15).unwrap(), 0.6));
}

#[test]
fn ramp_down_ends_dark() {
    let ramp = BrightnessRamp::new(1.0, 0.0, 30).unwrap();
    let samples: Vec<f32> = ramp.samples().collect();

    assert_eq!(samples.first(), Some(&1.0));
    assert_eq!(samples.last(), Some(&0.0));
    assert!(samples.windows(2).all(|w| w[1] < w[0]));
}

#[test]
fn samples_follow_begin_plus_step_times_index() {
    let ramp = BrightnessRamp::new(0.1, 0.9, 8).unwrap();
    for (i, sample) in ramp.samples().enumerate() {
        assert!(approx_eq(sample, 0.1 + 0.1 * i as f32));
    }
}

#[test]
fn single_step_ramp_hits_both_endpoints() {
    let ramp = BrightnessRamp::new(0.3, 0.7, 1).unwrap();
    let samples: Vec<f32> = ramp.samples().collect();
    assert_eq!(samples, vec![0.3, 0.7]);
}

#[test]
fn flat_ramp_repeats_the_same_brightness() {
    let ramp = BrightnessRamp::new(0.5, 0.5, 4).unwrap();
    assert!(ramp.samples().all(|s| s == 0.5));
}

#[test]
fn zero_steps_are_rejected() {
    assert_eq!(
        BrightnessRamp::new(0.2, 1.0, 0),
        Err(AnimationError::ZeroSteps)
    );
}

#[test]
fn nan_endpoint_is_rejected() {
    assert_eq!(
        BrightnessRamp::new(0.2, f32::NAN, 30),
        Err(AnimationError::NonFiniteBrightness)
    );
}

// Host-side tests for the per-frame control routine.

use blob_core::state::{Rotation, UniformState};
use blob_core::{FrameUpdater, SmoothingConfig, SmoothingMode};
use glam::Vec2;

const DT: f32 = 1.0 / 60.0;

fn fresh() -> (FrameUpdater, UniformState, Rotation) {
    (FrameUpdater::default(), UniformState::new(0.3, 0.4), Rotation::default())
}

#[test]
fn hover_converges_monotonically_without_overshoot() {
    let (updater, mut state, mut rot) = fresh();
    state.hover_flag().set(true);
    let mut prev = state.intensity();
    for n in 1..=400 {
        updater.update(&mut state, &mut rot, n as f32 * DT, Vec2::ZERO);
        let i = state.intensity();
        assert!(i >= prev, "intensity decreased at frame {n}");
        assert!(i <= 0.8, "intensity overshot at frame {n}: {i}");
        prev = i;
    }
    assert!((prev - 0.8).abs() < 1e-3);
}

#[test]
fn idle_converges_back_toward_base() {
    let (updater, mut state, mut rot) = fresh();
    state.hover_flag().set(true);
    for n in 1..=200 {
        updater.update(&mut state, &mut rot, n as f32 * DT, Vec2::ZERO);
    }
    state.hover_flag().set(false);
    let mut prev = state.intensity();
    for n in 201..=600 {
        updater.update(&mut state, &mut rot, n as f32 * DT, Vec2::ZERO);
        let i = state.intensity();
        assert!(i <= prev, "intensity increased at frame {n}");
        assert!(i >= 0.3, "intensity undershot at frame {n}: {i}");
        prev = i;
    }
    assert!((prev - 0.3).abs() < 1e-3);
}

#[test]
fn single_hover_frame_then_decay() {
    let (updater, mut state, mut rot) = fresh();
    state.hover_flag().set(true);
    updater.update(&mut state, &mut rot, DT, Vec2::ZERO);
    // One step of 5% toward 0.8 from 0.3
    assert!((state.intensity() - 0.325).abs() < 1e-6);

    state.hover_flag().set(false);
    let mut prev = state.intensity();
    for n in 2..=51 {
        updater.update(&mut state, &mut rot, n as f32 * DT, Vec2::ZERO);
        let i = state.intensity();
        assert!(i < prev);
        assert!(i > 0.3 && i < 0.8, "reached a bound at frame {n}: {i}");
        prev = i;
    }
    let expected = 0.3 + 0.025 * 0.95f32.powi(50);
    assert!((prev - expected).abs() < 1e-5, "got {prev}, expected {expected}");
}

#[test]
fn pointer_closes_ten_percent_per_frame() {
    let (updater, mut state, mut rot) = fresh();
    let raw = Vec2::new(1.0, 1.0);
    let mut prev_gap = (raw - state.pointer()).length();
    for n in 1..=43 {
        updater.update(&mut state, &mut rot, n as f32 * DT, raw);
        let gap = (raw - state.pointer()).length();
        assert!((gap / prev_gap - 0.9).abs() < 1e-4, "frame {n}: ratio {}", gap / prev_gap);
        assert!(state.pointer().x <= 1.0 && state.pointer().y <= 1.0);
        prev_gap = gap;
    }
    // 0.9^43 > 0.01 > 0.9^44
    assert!(1.0 - state.pointer().x > 0.01);
    updater.update(&mut state, &mut rot, 44.0 * DT, raw);
    assert!(1.0 - state.pointer().x < 0.01);
    assert!(1.0 - state.pointer().y < 0.01);
}

#[test]
fn pointer_converges_without_overshoot() {
    let (updater, mut state, mut rot) = fresh();
    let raw = Vec2::new(-0.6, 0.25);
    for n in 1..=500 {
        updater.update(&mut state, &mut rot, n as f32 * DT, raw);
        let p = state.pointer();
        assert!(p.x >= raw.x && p.x <= 0.0);
        assert!(p.y <= raw.y && p.y >= 0.0);
    }
    assert!((state.pointer() - raw).length() < 1e-5);
}

#[test]
fn rotation_follows_pointer_tilt() {
    let (updater, mut state, mut rot) = fresh();
    let raw = Vec2::new(1.0, -0.5);
    updater.update(&mut state, &mut rot, DT, raw);
    assert!((rot.x - (-0.5 * 0.2 * 0.05)).abs() < 1e-6);
    assert!((rot.y - (1.0 * 0.2 * 0.05)).abs() < 1e-6);
    for n in 2..=600 {
        updater.update(&mut state, &mut rot, n as f32 * DT, raw);
    }
    assert!((rot.x + 0.1).abs() < 1e-4);
    assert!((rot.y - 0.2).abs() < 1e-4);
}

#[test]
fn time_never_moves_backwards() {
    let (updater, mut state, mut rot) = fresh();
    updater.update(&mut state, &mut rot, 2.0, Vec2::ZERO);
    assert_eq!(state.time(), 2.0);
    updater.update(&mut state, &mut rot, 1.5, Vec2::ZERO);
    assert_eq!(state.time(), 2.0);
    updater.update(&mut state, &mut rot, 2.5, Vec2::ZERO);
    assert_eq!(state.time(), 2.5);
}

fn run_time_corrected(fps: f32, seconds: f32) -> (f32, Vec2) {
    let updater = FrameUpdater {
        smoothing: SmoothingConfig {
            mode: SmoothingMode::time_corrected(),
            ..SmoothingConfig::default()
        },
        ..FrameUpdater::default()
    };
    let mut state = UniformState::new(0.3, 0.4);
    let mut rot = Rotation::default();
    state.hover_flag().set(true);
    let frames = (seconds * fps).round() as u32;
    for n in 1..=frames {
        updater.update(&mut state, &mut rot, n as f32 / fps, Vec2::ONE);
    }
    (state.intensity(), state.pointer())
}

#[test]
fn time_corrected_smoothing_ignores_frame_rate() {
    let (i30, p30) = run_time_corrected(30.0, 1.0);
    let (i120, p120) = run_time_corrected(120.0, 1.0);
    assert!((i30 - i120).abs() < 1e-4, "{i30} vs {i120}");
    assert!((p30 - p120).length() < 1e-4, "{p30} vs {p120}");

    // Matches sixty per-frame steps
    let expected = 0.8 - 0.5 * 0.95f32.powi(60);
    assert!((i30 - expected).abs() < 1e-3, "{i30} vs {expected}");
}

#[test]
fn per_frame_smoothing_depends_on_frame_count() {
    let (updater, mut state, mut rot) = fresh();
    state.hover_flag().set(true);
    // Same wall time, twice the frames: per-frame mode settles further
    for n in 1..=120 {
        updater.update(&mut state, &mut rot, n as f32 / 120.0, Vec2::ZERO);
    }
    let fast = state.intensity();

    let (updater, mut state, mut rot) = fresh();
    state.hover_flag().set(true);
    for n in 1..=60 {
        updater.update(&mut state, &mut rot, n as f32 / 60.0, Vec2::ZERO);
    }
    assert!(fast > state.intensity());
}

#[test]
fn smoothing_mode_parses_and_toggles() {
    assert_eq!("frame".parse::<SmoothingMode>().ok(), Some(SmoothingMode::PerFrame));
    assert_eq!(
        " Time-Corrected ".parse::<SmoothingMode>().ok(),
        Some(SmoothingMode::time_corrected())
    );
    assert!("sometimes".parse::<SmoothingMode>().is_err());
    assert_eq!(SmoothingMode::default(), SmoothingMode::PerFrame);
    assert_eq!(SmoothingMode::PerFrame.toggled(), SmoothingMode::time_corrected());
    assert_eq!(SmoothingMode::time_corrected().toggled(), SmoothingMode::PerFrame);
    assert_eq!(SmoothingMode::time_corrected().to_string(), "time-corrected@60fps");
}

#[test]
fn time_corrected_factor_at_reference_rate_is_base() {
    let mode = SmoothingMode::time_corrected();
    assert!((mode.factor(0.05, 1.0 / 60.0) - 0.05).abs() < 1e-5);
    assert_eq!(mode.factor(0.05, 0.0), 0.0);
    assert_eq!(SmoothingMode::PerFrame.factor(0.05, 10.0), 0.05);
}

#[test]
fn smoothing_mode_validation() {
    assert!(SmoothingMode::PerFrame.validate().is_ok());
    assert!(SmoothingMode::time_corrected().validate().is_ok());
    for reference_fps in [f32::NAN, 0.0, -1.0, f32::NEG_INFINITY] {
        assert!(SmoothingMode::TimeCorrected { reference_fps }.validate().is_err());
    }
}

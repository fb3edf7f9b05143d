use micro_tone::{ToneControl, ToneGenerator, TonePhase, ToneSettings};
use rand::Rng;

const SAMPLE_RATE: u32 = 48_000;
const TOLERANCE: f32 = 1e-3;

fn generator() -> ToneGenerator {
    ToneGenerator::new(SAMPLE_RATE).expect("valid sample rate")
}

#[test]
fn test_immediate_stop_releases_after_the_delay() {
    let mut tone = generator();
    tone.start_sound();
    tone.stop_sound();
    assert_eq!(tone.phase(), TonePhase::RampingDown);

    tone.advance(0.49);
    assert_eq!(tone.phase(), TonePhase::RampingDown);
    assert_eq!(tone.active_sources(), 2);

    tone.advance(0.01);
    assert_eq!(tone.phase(), TonePhase::Idle);
    assert_eq!(tone.active_sources(), 0);
}

#[test]
fn test_double_start_does_not_stack_sources() {
    let mut tone = generator();
    tone.start_sound();
    tone.advance(0.05);
    let envelope = tone.envelope();
    tone.start_sound();
    assert_eq!(tone.active_sources(), 2);
    assert_eq!(tone.envelope(), envelope);
}

#[test]
fn test_stop_while_idle_is_ignored() {
    let mut tone = generator();
    tone.stop_sound();
    tone.stop_sound();
    assert_eq!(tone.phase(), TonePhase::Idle);
    assert_eq!(tone.active_sources(), 0);
}

#[test]
fn test_second_stop_keeps_the_original_release_time() {
    let mut tone = generator();
    tone.start_sound();
    tone.advance(1.0);
    tone.stop_sound();
    tone.advance(0.3);
    tone.stop_sound();
    tone.advance(0.2);
    assert_eq!(tone.phase(), TonePhase::Idle);
}

#[test]
fn test_restart_during_ramp_down_keeps_playing() {
    let mut tone = generator();
    tone.start_sound();
    tone.advance(1.0);
    tone.stop_sound();
    tone.advance(0.25);
    tone.start_sound();
    tone.advance(2.0);
    assert_eq!(tone.phase(), TonePhase::Sustained);
    assert_eq!(tone.active_sources(), 2);
    assert!((tone.envelope() - 0.2).abs() < TOLERANCE);
}

#[test]
fn test_envelope_follows_the_exponential_approach() {
    let mut tone = generator();
    tone.start_sound();
    tone.advance(0.1);
    // 0.2 * (1 - e^-1)
    assert!(
        (tone.envelope() - 0.126_424).abs() < TOLERANCE,
        "Expected 0.1264, got {}",
        tone.envelope()
    );
}

#[test]
fn test_sustained_output_stays_in_range() {
    let settings = ToneSettings::default();
    let mut tone = generator();
    tone.start_sound();
    tone.advance(1.0);

    let mut buffer = vec![0.0f32; SAMPLE_RATE as usize];
    tone.fill(&mut buffer);
    let peak = buffer.iter().fold(0.0f32, |acc, s| acc.max(s.abs()));
    assert!(peak <= settings.level + settings.lfo_depth + 5e-3);
    assert!(peak > 0.1);
}

#[test]
fn test_fade_out_goes_silent() {
    let mut tone = generator();
    tone.start_sound();
    tone.advance(1.0);
    tone.stop_sound();
    tone.advance(0.45);

    let mut buffer = vec![0.0f32; 2_400];
    tone.fill(&mut buffer);
    let peak = buffer.iter().fold(0.0f32, |acc, s| acc.max(s.abs()));
    assert!(peak < 0.01, "fade tail too loud: {}", peak);

    tone.advance(0.1);
    buffer.iter_mut().for_each(|s| *s = 1.0);
    tone.fill(&mut buffer);
    assert!(buffer.iter().all(|&s| s == 0.0));
}

#[test]
fn test_random_control_sequence_never_stacks() {
    let mut rng = rand::rng();
    let mut tone = generator();

    for _ in 0..500 {
        match rng.random_range(0..3) {
            0 => tone.start_sound(),
            1 => tone.stop_sound(),
            _ => tone.advance(rng.random_range(0.0..0.7)),
        }
        let sources = tone.active_sources();
        assert!(sources == 0 || sources == 2);
        match tone.phase() {
            TonePhase::Idle => assert_eq!(sources, 0),
            _ => assert_eq!(sources, 2),
        }
        assert!(tone.envelope() >= 0.0 && tone.envelope() <= 0.2 + TOLERANCE);
    }
}

//! Animation domain: unit tests for staged tweens.

use super::*;

#[derive(Debug, Default)]
struct Probe {
    x: f32,
    y: f32,
    z: f32,
    spin: f32,
}

impl Animated for Probe {
    fn channel(&self, channel: Channel) -> f32 {
        match channel {
            Channel::X => self.x,
            Channel::Y => self.y,
            Channel::Z => self.z,
            Channel::Spin => self.spin,
        }
    }

    fn set_channel(&mut self, channel: Channel, value: f32) {
        match channel {
            Channel::X => self.x = value,
            Channel::Y => self.y = value,
            Channel::Z => self.z = value,
            Channel::Spin => self.spin = value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Hook {
    Halfway,
    Done,
}

#[test]
fn test_linear_interpolation_midpoint() {
    let mut probe = Probe::default();
    let mut seq = Sequence::<Hook>::begin(
        [Stage::new(Channel::X, Target::Absolute(10.0), 1000.0)],
        0.0,
        &probe,
    );
    let fired = seq.tick(500.0, &mut probe);
    assert!(fired.is_empty());
    assert!((probe.x - 5.0).abs() < 1e-6);
    assert!(!seq.is_finished());
}

#[test]
fn test_final_value_is_exact_and_hooks_fire_once() {
    let mut probe = Probe::default();
    let mut seq = Sequence::begin(
        [Stage::new(Channel::X, Target::Absolute(10.0), 1000.0).then(Hook::Done)],
        0.0,
        &probe,
    );
    assert_eq!(seq.tick(1500.0, &mut probe), vec![Hook::Done]);
    assert_eq!(probe.x, 10.0);
    assert!(seq.is_finished());

    assert!(seq.tick(2000.0, &mut probe).is_empty());
    assert_eq!(probe.x, 10.0);
}

#[test]
fn test_completed_stage_lands_on_uneven_end_value() {
    let mut probe = Probe {
        x: -43.585003,
        ..Default::default()
    };
    let mut seq = Sequence::begin(
        [Stage::new(Channel::X, Target::Absolute(70.5268), 2000.0).then(Hook::Done)],
        16.0,
        &probe,
    );
    assert_eq!(seq.tick(2016.0, &mut probe), vec![Hook::Done]);
    assert_eq!(probe.x, 70.5268);

    // Overshooting the duration gives the same exact value.
    let mut late = Probe {
        x: -43.585003,
        ..Default::default()
    };
    let mut seq = Sequence::<Hook>::begin(
        [Stage::new(Channel::X, Target::Absolute(70.5268), 2000.0)],
        16.0,
        &late,
    );
    seq.tick(9000.0, &mut late);
    assert_eq!(late.x, 70.5268);
}

#[test]
fn test_offset_is_relative_to_stage_entry() {
    let mut probe = Probe {
        y: 5.0,
        ..Default::default()
    };
    let mut seq = Sequence::<Hook>::begin(
        [Stage::new(Channel::Y, Target::Offset(-8.0), 1000.0)],
        100.0,
        &probe,
    );
    seq.tick(1100.0, &mut probe);
    assert_eq!(probe.y, -3.0);
}

#[test]
fn test_stages_run_in_order_on_their_own_channels() {
    let mut probe = Probe::default();
    let mut seq = Sequence::begin(
        [
            Stage::new(Channel::Y, Target::Absolute(2.0), 100.0).then(Hook::Halfway),
            Stage::new(Channel::Z, Target::Absolute(1.8), 100.0).then(Hook::Done),
        ],
        0.0,
        &probe,
    );

    assert_eq!(seq.tick(100.0, &mut probe), vec![Hook::Halfway]);
    assert_eq!(probe.y, 2.0);
    assert_eq!(probe.z, 0.0);

    seq.tick(150.0, &mut probe);
    assert!((probe.z - 0.9).abs() < 1e-6);
    assert_eq!(probe.y, 2.0);

    assert_eq!(seq.tick(200.0, &mut probe), vec![Hook::Done]);
    assert!((probe.z - 1.8).abs() < 1e-6);
    assert!(seq.is_finished());
}

#[test]
fn test_zero_duration_stage_completes_immediately() {
    let mut probe = Probe::default();
    let mut seq = Sequence::begin(
        [
            Stage::new(Channel::Spin, Target::Absolute(1.0), 0.0).then(Hook::Halfway),
            Stage::new(Channel::Spin, Target::Absolute(3.0), 0.0).then(Hook::Done),
        ],
        0.0,
        &probe,
    );
    assert_eq!(seq.tick(0.0, &mut probe), vec![Hook::Halfway, Hook::Done]);
    assert_eq!(probe.spin, 3.0);
}

#[test]
fn test_empty_sequence_is_finished() {
    let probe = Probe::default();
    let seq = Sequence::<Hook>::begin(Vec::new(), 0.0, &probe);
    assert!(seq.is_finished());
}

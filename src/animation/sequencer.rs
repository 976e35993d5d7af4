//! Timed property tweens chained into stages with completion hooks.
//!
//! A [`Sequence`] drives one channel of an [`Animated`] target at a time.
//! Each stage interpolates linearly from the value the channel had when the
//! stage was entered, so stages expressed as offsets compose naturally.

use std::collections::VecDeque;

/// A scalar property a sequence can drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    X,
    Y,
    Z,
    /// Rotation about the x axis, radians.
    Spin,
}

/// Anything exposing animatable channels.
pub trait Animated {
    fn channel(&self, channel: Channel) -> f32;
    fn set_channel(&mut self, channel: Channel, value: f32);
}

/// End value of a stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Target {
    Absolute(f32),
    /// Relative to the value at stage entry.
    Offset(f32),
}

impl Target {
    fn resolve(self, from: f32) -> f32 {
        match self {
            Target::Absolute(to) => to,
            Target::Offset(delta) => from + delta,
        }
    }
}

/// One tween plus the hooks fired when it completes.
#[derive(Debug, Clone)]
pub struct Stage<E> {
    pub channel: Channel,
    pub target: Target,
    pub duration_ms: f64,
    pub on_complete: Vec<E>,
}

impl<E> Stage<E> {
    pub fn new(channel: Channel, target: Target, duration_ms: f64) -> Self {
        Self {
            channel,
            target,
            duration_ms,
            on_complete: Vec::new(),
        }
    }

    pub fn then(mut self, hook: E) -> Self {
        self.on_complete.push(hook);
        self
    }
}

#[derive(Debug, Clone)]
struct Running<E> {
    stage: Stage<E>,
    from: f32,
    to: f32,
    started_ms: f64,
}

impl<E> Running<E> {
    fn progress(&self, now_ms: f64) -> f64 {
        if self.stage.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now_ms - self.started_ms) / self.stage.duration_ms).clamp(0.0, 1.0)
    }
}

/// Ordered chain of stages. Hooks of a stage fire exactly once.
#[derive(Debug, Clone)]
pub struct Sequence<E> {
    pending: VecDeque<Stage<E>>,
    running: Option<Running<E>>,
}

impl<E> Sequence<E> {
    /// Enter the first stage at `now_ms`, capturing its start value from `target`.
    pub fn begin(
        stages: impl IntoIterator<Item = Stage<E>>,
        now_ms: f64,
        target: &impl Animated,
    ) -> Self {
        let mut sequence = Self {
            pending: stages.into_iter().collect(),
            running: None,
        };
        sequence.enter_next(now_ms, target);
        sequence
    }

    pub fn is_finished(&self) -> bool {
        self.running.is_none()
    }

    /// Advance to `now_ms`, writing the interpolated value into `target`.
    /// Returns the hooks of every stage that completed during this tick.
    pub fn tick(&mut self, now_ms: f64, target: &mut impl Animated) -> Vec<E> {
        let mut fired = Vec::new();

        while let Some(running) = &self.running {
            let t = running.progress(now_ms) as f32;
            if t < 1.0 {
                let value = running.from + (running.to - running.from) * t;
                target.set_channel(running.stage.channel, value);
                break;
            }
            // Completed stages land on the end value exactly.
            target.set_channel(running.stage.channel, running.to);

            if let Some(done) = self.running.take() {
                fired.extend(done.stage.on_complete);
            }
            self.enter_next(now_ms, &*target);
        }

        fired
    }

    fn enter_next(&mut self, now_ms: f64, target: &impl Animated) {
        self.running = self.pending.pop_front().map(|stage| {
            let from = target.channel(stage.channel);
            let to = stage.target.resolve(from);
            Running {
                stage,
                from,
                to,
                started_ms: now_ms,
            }
        });
    }
}

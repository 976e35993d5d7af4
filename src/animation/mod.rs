//! Animation domain: staged tweens for scripted motion.

mod sequencer;

#[cfg(test)]
mod tests;

pub use sequencer::{Animated, Channel, Sequence, Stage, Target};

//! Presentation math: blur-layer gradients and the wavy divider

pub mod blur;
pub mod wave;

pub use blur::{blur_layers, BlurConfig, BlurLayer, Curve, Position, Preset};
pub use wave::{WaveConfig, WavePath};

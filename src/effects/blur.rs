//! Gradual blur: stacked backdrop-blur layers with stepped mask gradients

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Easing curve mapping layer progress in [0, 1] to eased progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Curve {
    Linear,
    Bezier,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl Curve {
    pub fn apply(self, p: f64) -> f64 {
        match self {
            Self::Linear => p,
            Self::Bezier => p * p * (3.0 - 2.0 * p),
            Self::EaseIn => p * p,
            Self::EaseOut => 1.0 - (1.0 - p).powi(2),
            Self::EaseInOut => {
                if p < 0.5 {
                    2.0 * p * p
                } else {
                    1.0 - (-2.0 * p + 2.0).powi(2) / 2.0
                }
            }
        }
    }
}

impl FromStr for Curve {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "linear" => Ok(Self::Linear),
            "bezier" => Ok(Self::Bezier),
            "ease-in" => Ok(Self::EaseIn),
            "ease-out" => Ok(Self::EaseOut),
            "ease-in-out" => Ok(Self::EaseInOut),
            other => Err(format!(
                "Unknown curve: {}. Available: linear, bezier, ease-in, ease-out, ease-in-out",
                other
            )),
        }
    }
}

/// Edge the blur is anchored to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Top,
    Bottom,
    Left,
    Right,
}

impl Position {
    /// CSS `linear-gradient` direction
    pub fn gradient_direction(self) -> &'static str {
        match self {
            Self::Top => "to top",
            Self::Bottom => "to bottom",
            Self::Left => "to left",
            Self::Right => "to right",
        }
    }
}

impl FromStr for Position {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => Ok(Self::Top),
            "bottom" => Ok(Self::Bottom),
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            other => Err(format!("Unknown position: {}", other)),
        }
    }
}

/// Blur configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlurConfig {
    pub position: Position,
    pub strength: f64,
    /// Number of stacked layers
    pub div_count: usize,
    /// Exponential rather than linear blur growth
    pub exponential: bool,
    pub opacity: f64,
    pub curve: Curve,
    /// Strength multiplier while hovered
    pub hover_intensity: Option<f64>,
}

impl Default for BlurConfig {
    fn default() -> Self {
        Self {
            position: Position::Bottom,
            strength: 2.0,
            div_count: 5,
            exponential: true,
            opacity: 1.0,
            curve: Curve::EaseIn,
            hover_intensity: None,
        }
    }
}

impl BlurConfig {
    /// Defaults with a preset merged over them
    pub fn from_preset(preset: Preset) -> Self {
        preset.apply(Self::default())
    }

    /// Effective strength, scaled by the hover multiplier when hovered
    pub fn current_strength(&self, hovered: bool) -> f64 {
        match self.hover_intensity {
            Some(intensity) if hovered => self.strength * intensity,
            _ => self.strength,
        }
    }
}

/// Named starting points for common placements
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    Top,
    Bottom,
    Left,
    Right,
    Subtle,
    Intense,
    Smooth,
    Sharp,
    Header,
    Footer,
}

impl Preset {
    /// Overlay this preset's fields onto `config`
    pub fn apply(self, mut config: BlurConfig) -> BlurConfig {
        match self {
            Self::Top => config.position = Position::Top,
            Self::Bottom => config.position = Position::Bottom,
            Self::Left => config.position = Position::Left,
            Self::Right => config.position = Position::Right,
            Self::Subtle => {
                config.strength = 1.0;
                config.opacity = 0.8;
                config.div_count = 3;
            }
            Self::Intense => {
                config.strength = 4.0;
                config.div_count = 8;
                config.exponential = true;
            }
            Self::Smooth => {
                config.curve = Curve::Bezier;
                config.div_count = 10;
            }
            Self::Sharp => {
                config.curve = Curve::Linear;
                config.div_count = 4;
            }
            Self::Header => {
                config.position = Position::Top;
                config.curve = Curve::EaseOut;
            }
            Self::Footer => {
                config.position = Position::Bottom;
                config.curve = Curve::EaseOut;
            }
        }
        config
    }
}

impl FromStr for Preset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => Ok(Self::Top),
            "bottom" => Ok(Self::Bottom),
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            "subtle" => Ok(Self::Subtle),
            "intense" => Ok(Self::Intense),
            "smooth" => Ok(Self::Smooth),
            "sharp" => Ok(Self::Sharp),
            "header" => Ok(Self::Header),
            "footer" => Ok(Self::Footer),
            other => Err(format!("Unknown preset: {}", other)),
        }
    }
}

/// One blur layer of the stack
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlurLayer {
    /// 1-based layer index
    pub index: usize,
    /// Eased progress of this layer
    pub progress: f64,
    /// Blur radius in rem
    pub blur: f64,
    /// transparent, opaque, opaque, transparent boundaries in percent
    pub stops: [f64; 4],
    pub mask_image: String,
    pub opacity: f64,
}

impl BlurLayer {
    /// CSS declarations for this layer
    pub fn to_css(&self) -> String {
        format!(
            "mask-image: {mask}; -webkit-mask-image: {mask}; \
             backdrop-filter: blur({blur:.3}rem); -webkit-backdrop-filter: blur({blur:.3}rem); \
             opacity: {opacity};",
            mask = self.mask_image,
            blur = self.blur,
            opacity = self.opacity,
        )
    }
}

fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

/// Build the stepped mask for a layer; stops past 100% are dropped
fn mask_gradient(position: Position, stops: [f64; 4]) -> String {
    let [p1, p2, p3, p4] = stops;
    let mut gradient = format!("transparent {}%, black {}%", p1, p2);
    if p3 <= 100.0 {
        gradient.push_str(&format!(", black {}%", p3));
    }
    if p4 <= 100.0 {
        gradient.push_str(&format!(", transparent {}%", p4));
    }
    format!("linear-gradient({}, {})", position.gradient_direction(), gradient)
}

/// Compute every layer of the blur stack
pub fn blur_layers(config: &BlurConfig, hovered: bool) -> Vec<BlurLayer> {
    let n = config.div_count;
    if n == 0 {
        return Vec::new();
    }

    let increment = 100.0 / n as f64;
    let strength = config.current_strength(hovered);

    (1..=n)
        .map(|i| {
            let progress = config.curve.apply(i as f64 / n as f64);
            let blur = if config.exponential {
                2f64.powf(progress * 4.0) * 0.0625 * strength
            } else {
                0.0625 * (progress * n as f64 + 1.0) * strength
            };

            let base = increment * i as f64;
            let stops = [
                round1(base - increment),
                round1(base),
                round1(base + increment),
                round1(base + increment * 2.0),
            ];

            BlurLayer {
                index: i,
                progress,
                blur,
                stops,
                mask_image: mask_gradient(config.position, stops),
                opacity: config.opacity,
            }
        })
        .collect()
}

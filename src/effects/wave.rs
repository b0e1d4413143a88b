//! Seamless wavy divider path
//!
//! The wave is built one period wider than the viewport on each side, so a
//! copy translated right by exactly one period lines up with the original
//! and a looping translation never shows an edge.

use serde::{Deserialize, Serialize};

/// Viewport width in SVG user units
pub const VIEW_WIDTH: f64 = 100.0;
/// Viewport height in SVG user units
pub const VIEW_HEIGHT: f64 = 12.0;
/// Cubic control-point offset as a fraction of a half period
pub const CONTROL_RATIO: f64 = 0.3642;

/// Wave configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaveConfig {
    /// Full waves across the viewport; floored, at least 1
    pub waves: f64,
    pub amplitude: f64,
    /// Scroll speed in viewport units per second
    pub speed: f64,
    pub color: String,
    pub stroke_width: f64,
    pub height_px: u32,
}

impl Default for WaveConfig {
    fn default() -> Self {
        Self {
            waves: 52.0,
            amplitude: 2.0,
            speed: 1.0,
            color: "currentColor".to_string(),
            stroke_width: 0.4,
            height_px: 12,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One cubic Bézier half-period
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CubicSegment {
    pub from: Point,
    pub c1: Point,
    pub c2: Point,
    pub to: Point,
}

/// A generated wave and its animation timing
#[derive(Debug, Clone, Serialize)]
pub struct WavePath {
    pub periods: u32,
    pub period: f64,
    pub amplitude: f64,
    /// Seconds to scroll one period
    pub duration: f64,
    /// Alternating up and down halves, left to right
    pub segments: Vec<CubicSegment>,
}

impl WavePath {
    /// Build the wave from `x = -period` to `x = 100 + period`.
    ///
    /// Each period rises from a trough to a crest and falls back to a
    /// trough. Crests and troughs have horizontal tangents, so every period
    /// boundary matches in position and slope.
    pub fn build(config: &WaveConfig) -> Self {
        let periods = config.waves.floor().max(1.0) as u32;
        let period = VIEW_WIDTH / periods as f64;
        let half = period / 2.0;
        let offset = CONTROL_RATIO * half;

        let mid_y = VIEW_HEIGHT / 2.0;
        let crest = mid_y - config.amplitude;
        let trough = mid_y + config.amplitude;

        // One padding period on each side of the viewport
        let mut segments = Vec::with_capacity(2 * (periods as usize + 2));
        for n in 0..periods + 2 {
            let x = -period + n as f64 * period;
            let x_crest = x + half;
            let x_next = x + period;

            segments.push(CubicSegment {
                from: Point::new(x, trough),
                c1: Point::new(x + offset, trough),
                c2: Point::new(x_crest - offset, crest),
                to: Point::new(x_crest, crest),
            });
            segments.push(CubicSegment {
                from: Point::new(x_crest, crest),
                c1: Point::new(x_crest + offset, crest),
                c2: Point::new(x_next - offset, trough),
                to: Point::new(x_next, trough),
            });
        }

        Self {
            periods,
            period,
            amplitude: config.amplitude,
            duration: period / config.speed.max(0.001),
            segments,
        }
    }

    /// SVG path data (`M ... C ...`)
    pub fn path_data(&self) -> String {
        let Some(first) = self.segments.first() else {
            return String::new();
        };

        let mut d = format!("M {} {}", num(first.from.x), num(first.from.y));
        for seg in &self.segments {
            d.push_str(&format!(
                " C {} {}, {} {}, {} {}",
                num(seg.c1.x),
                num(seg.c1.y),
                num(seg.c2.x),
                num(seg.c2.y),
                num(seg.to.x),
                num(seg.to.y)
            ));
        }
        d
    }

    /// Standalone animated SVG: two tiles one period apart, scrolled right
    /// by one period per `duration`, forever.
    pub fn to_svg(&self, config: &WaveConfig) -> String {
        let d = self.path_data();
        let period = num(self.period);
        let stroke = format!(
            r#"fill="none" stroke="{}" stroke-width="{}" stroke-linecap="butt" stroke-linejoin="round" vector-effect="non-scaling-stroke" shape-rendering="geometricPrecision""#,
            config.color,
            num(config.stroke_width)
        );

        let mut svg = String::new();
        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {} {}" preserveAspectRatio="none" width="100%" height="{}" aria-hidden="true">"#,
            num(VIEW_WIDTH),
            num(VIEW_HEIGHT),
            config.height_px
        ));
        svg.push('\n');
        svg.push_str("  <g>\n");
        svg.push_str(&format!(
            r#"    <animateTransform attributeName="transform" type="translate" from="0 0" to="{} 0" dur="{}s" calcMode="linear" repeatCount="indefinite"/>"#,
            period,
            num(self.duration)
        ));
        svg.push('\n');
        svg.push_str(&format!("    <path d=\"{}\" {}/>\n", d, stroke));
        svg.push_str(&format!(
            "    <g transform=\"translate(-{}, 0)\"><path d=\"{}\" {} opacity=\"0.9\"/></g>\n",
            period, d, stroke
        ));
        svg.push_str("  </g>\n");
        svg.push_str("</svg>\n");
        svg
    }
}

/// Compact number: at most four decimals, no trailing zeros
fn num(x: f64) -> String {
    let s = format!("{:.4}", x);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn close(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS
    }

    fn shifted(seg: &CubicSegment, dx: f64) -> CubicSegment {
        let mv = |p: Point| Point::new(p.x + dx, p.y);
        CubicSegment {
            from: mv(seg.from),
            c1: mv(seg.c1),
            c2: mv(seg.c2),
            to: mv(seg.to),
        }
    }

    #[test]
    fn test_period_and_duration() {
        let wave = WavePath::build(&WaveConfig::default());
        assert_eq!(wave.periods, 52);
        assert!((wave.period - 100.0 / 52.0).abs() < EPS);
        assert!((wave.duration - wave.period).abs() < EPS);

        let slow = WavePath::build(&WaveConfig {
            waves: 4.7,
            speed: 0.5,
            ..Default::default()
        });
        assert_eq!(slow.periods, 4);
        assert!((slow.duration - 50.0).abs() < EPS);

        let stalled = WavePath::build(&WaveConfig {
            waves: 0.0,
            speed: 0.0,
            ..Default::default()
        });
        assert_eq!(stalled.periods, 1);
        assert!((stalled.duration - 100_000.0).abs() < 1e-6);
    }

    #[test]
    fn test_spans_padded_viewport() {
        let wave = WavePath::build(&WaveConfig {
            waves: 10.0,
            ..Default::default()
        });
        let first = wave.segments.first().unwrap();
        let last = wave.segments.last().unwrap();
        assert!((first.from.x + wave.period).abs() < EPS);
        assert!((last.to.x - (100.0 + wave.period)).abs() < EPS);
        assert_eq!(wave.segments.len(), 2 * (10 + 2));
    }

    #[test]
    fn test_segments_are_continuous_and_alternate() {
        let wave = WavePath::build(&WaveConfig::default());
        for pair in wave.segments.windows(2) {
            assert!(close(pair[0].to, pair[1].from));
        }
        for (i, seg) in wave.segments.iter().enumerate() {
            if i % 2 == 0 {
                assert!(seg.to.y < seg.from.y, "segment {} should rise", i);
            } else {
                assert!(seg.to.y > seg.from.y, "segment {} should fall", i);
            }
        }
    }

    #[test]
    fn test_translation_by_one_period_is_seamless() {
        let wave = WavePath::build(&WaveConfig {
            waves: 7.0,
            amplitude: 3.0,
            ..Default::default()
        });
        let n = wave.segments.len();

        // Shifted tile overlays the original two segments (one period) later
        for i in 0..n - 2 {
            let moved = shifted(&wave.segments[i], wave.period);
            let target = &wave.segments[i + 2];
            assert!(close(moved.from, target.from));
            assert!(close(moved.c1, target.c1));
            assert!(close(moved.c2, target.c2));
            assert!(close(moved.to, target.to));
        }

        // Every join has a horizontal tangent on both sides
        for pair in wave.segments.windows(2) {
            assert!((pair[0].c2.y - pair[0].to.y).abs() < EPS);
            assert!((pair[1].c1.y - pair[1].from.y).abs() < EPS);
        }

        // Both tiles cover the viewport throughout one period of motion
        let start = wave.segments[0].from.x;
        let end = wave.segments[n - 1].to.x;
        assert!(start + wave.period <= EPS);
        assert!(end >= VIEW_WIDTH + wave.period - EPS);
    }

    #[test]
    fn test_path_data() {
        let wave = WavePath::build(&WaveConfig {
            waves: 4.0,
            amplitude: 2.0,
            ..Default::default()
        });
        let d = wave.path_data();
        assert!(d.starts_with("M -25 8 C -20.4475 8, -17.0525 4, -12.5 4 C"));
        assert!(d.ends_with(", 125 8"));
    }

    #[test]
    fn test_svg() {
        let config = WaveConfig {
            waves: 4.0,
            ..Default::default()
        };
        let svg = WavePath::build(&config).to_svg(&config);
        assert!(svg.contains(r#"viewBox="0 0 100 12""#));
        assert!(svg.contains(r#"to="25 0" dur="25s""#));
        assert!(svg.contains(r#"repeatCount="indefinite""#));
        assert!(svg.contains(r#"translate(-25, 0)"#));
        assert_eq!(svg.matches("<path ").count(), 2);
    }

    #[test]
    fn test_num_format() {
        assert_eq!(num(25.0), "25");
        assert_eq!(num(-0.0), "0");
        assert_eq!(num(1.923076923), "1.9231");
        assert_eq!(num(0.4), "0.4");
    }
}

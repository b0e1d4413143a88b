//! Print blur-layer CSS and wave SVG

use anyhow::Result;

use crate::effects::{blur_layers, BlurConfig, WaveConfig, WavePath};

/// Format the blur stack as CSS rules (`.gradual-blur-layer-N`) or JSON
pub fn render_blur(config: &BlurConfig, hovered: bool, json: bool) -> Result<String> {
    let layers = blur_layers(config, hovered);

    if json {
        return Ok(serde_json::to_string_pretty(&layers)?);
    }

    let mut css = String::new();
    for layer in &layers {
        css.push_str(&format!(
            ".gradual-blur-layer-{} {{ {} }}\n",
            layer.index,
            layer.to_css()
        ));
    }
    Ok(css)
}

/// Format the wave as an animated SVG or as JSON path parameters
pub fn render_wave(config: &WaveConfig, json: bool) -> Result<String> {
    let wave = WavePath::build(config);

    if json {
        let value = serde_json::json!({
            "periods": wave.periods,
            "period": wave.period,
            "amplitude": wave.amplitude,
            "duration": wave.duration,
            "d": wave.path_data(),
        });
        return Ok(serde_json::to_string_pretty(&value)?);
    }

    Ok(wave.to_svg(config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::Preset;

    #[test]
    fn test_render_blur_css() {
        let config = BlurConfig::from_preset(Preset::Sharp);
        let css = render_blur(&config, false, false).unwrap();
        assert_eq!(css.lines().count(), 4);
        assert!(css.starts_with(".gradual-blur-layer-1 { mask-image: linear-gradient(to bottom,"));
    }

    #[test]
    fn test_render_blur_json() {
        let out = render_blur(&BlurConfig::default(), false, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 5);
        assert_eq!(value[4]["index"], 5);
    }

    #[test]
    fn test_render_wave_json() {
        let config = WaveConfig {
            waves: 4.0,
            ..Default::default()
        };
        let out = render_wave(&config, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["periods"], 4);
        assert_eq!(value["period"], 25.0);
        assert!(value["d"].as_str().unwrap().starts_with("M -25 8"));
    }
}

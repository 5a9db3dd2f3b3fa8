use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use eframe::egui::Color32;
use serde::Deserialize;

use crate::net::Camera;

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct VizConfig {
    pub layers: Vec<usize>,
    pub layer_distance: f32,
    pub node_spacing: f32,
    pub node_jitter: f32,
    pub rotation_speed: f32,
    pub fov: f32,
    pub camera_distance: f32,
    pub node_radius: f32,
    pub edge_opacity: f32,
    pub input_rgb: [u8; 3],
    pub hidden_rgb: [u8; 3],
    pub output_rgb: [u8; 3],
    pub edge_rgb: [u8; 3],
    pub background_rgb: [u8; 3],
}

impl Default for VizConfig {
    fn default() -> Self {
        Self {
            layers: vec![6, 8, 8, 4],
            layer_distance: 220.0,
            node_spacing: 60.0,
            node_jitter: 25.0,
            rotation_speed: 0.002,
            fov: 300.0,
            camera_distance: 500.0,
            node_radius: 3.0,
            edge_opacity: 0.3,
            input_rgb: [114, 239, 221],
            hidden_rgb: [160, 196, 255],
            output_rgb: [255, 158, 0],
            edge_rgb: [160, 196, 255],
            background_rgb: [19, 23, 29],
        }
    }
}

impl VizConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read configuration file {}", path.display()))?;
        Self::from_json(&raw)
    }

    fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).context("invalid JSON in configuration file")
    }

    pub fn validate(&self) -> Result<()> {
        if self.layers.is_empty() {
            return Err(anyhow!("layer configuration is empty"));
        }

        if let Some(layer) = self.layers.iter().position(|&count| count == 0) {
            return Err(anyhow!("layer {layer} has no neurons"));
        }

        for (name, value) in [
            ("layer_distance", self.layer_distance),
            ("node_spacing", self.node_spacing),
            ("fov", self.fov),
            ("camera_distance", self.camera_distance),
            ("node_radius", self.node_radius),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(anyhow!("{name} must be a positive number, got {value}"));
            }
        }

        if !self.node_jitter.is_finite() || self.node_jitter < 0.0 {
            return Err(anyhow!(
                "node_jitter must be zero or positive, got {}",
                self.node_jitter
            ));
        }

        if !self.rotation_speed.is_finite() {
            return Err(anyhow!("rotation_speed must be finite"));
        }

        if !(self.edge_opacity > 0.0 && self.edge_opacity <= 1.0) {
            return Err(anyhow!(
                "edge_opacity must be within (0, 1], got {}",
                self.edge_opacity
            ));
        }

        let extent = self.depth_extent();
        if self.camera_distance <= extent {
            return Err(anyhow!(
                "camera_distance {} must exceed the rotated network extent {extent:.1}",
                self.camera_distance
            ));
        }

        Ok(())
    }

    pub fn depth_extent(&self) -> f32 {
        let half_depth =
            self.layers.len().saturating_sub(1) as f32 / 2.0 * self.layer_distance;
        half_depth.hypot(self.node_jitter)
    }

    pub fn camera(&self) -> Camera {
        Camera {
            fov: self.fov,
            distance: self.camera_distance,
        }
    }

    pub fn node_count(&self) -> usize {
        self.layers.iter().sum()
    }

    pub fn edge_count(&self) -> usize {
        self.layers.windows(2).map(|pair| pair[0] * pair[1]).sum()
    }

    pub fn role_color(&self, layer: usize) -> Color32 {
        if layer == 0 {
            rgb(self.input_rgb)
        } else if layer + 1 >= self.layers.len() {
            rgb(self.output_rgb)
        } else {
            rgb(self.hidden_rgb)
        }
    }

    pub fn edge_color(&self) -> Color32 {
        rgb(self.edge_rgb)
    }

    pub fn background_color(&self) -> Color32 {
        rgb(self.background_rgb)
    }
}

fn rgb(components: [u8; 3]) -> Color32 {
    let [r, g, b] = components;
    Color32::from_rgb(r, g, b)
}

pub fn parse_layer_list(raw: &str) -> Result<Vec<usize>> {
    raw.split(',')
        .map(str::trim)
        .filter(|chunk| !chunk.is_empty())
        .map(|chunk| {
            chunk
                .parse::<usize>()
                .with_context(|| format!("invalid neuron count {chunk:?} in layer list"))
        })
        .collect()
}

pub fn resolve_config(
    path: Option<&Path>,
    layers: Option<&str>,
    rotation_speed: Option<f32>,
) -> Result<VizConfig> {
    let mut config = match path {
        Some(path) => VizConfig::from_file(path)?,
        None => VizConfig::default(),
    };

    if let Some(raw) = layers {
        config.layers = parse_layer_list(raw)?;
    }

    if let Some(speed) = rotation_speed {
        config.rotation_speed = speed;
    }

    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_validates() {
        let config = VizConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.node_count(), 26);
        assert_eq!(config.edge_count(), 144);
    }

    #[test]
    fn test_depth_extent_covers_jitter() {
        let config = VizConfig::default();
        let extent = config.depth_extent();
        assert!((extent - 330.0_f32.hypot(25.0)).abs() < 0.001);
        assert!(extent < config.camera_distance);
    }

    #[test]
    fn test_role_colors_by_layer() {
        let config = VizConfig::default();
        assert_eq!(config.role_color(0), Color32::from_rgb(114, 239, 221));
        assert_eq!(config.role_color(1), Color32::from_rgb(160, 196, 255));
        assert_eq!(config.role_color(2), Color32::from_rgb(160, 196, 255));
        assert_eq!(config.role_color(3), Color32::from_rgb(255, 158, 0));

        let single = VizConfig {
            layers: vec![4],
            ..VizConfig::default()
        };
        assert_eq!(single.role_color(0), Color32::from_rgb(114, 239, 221));
    }

    #[test]
    fn test_parse_layer_list_accepts_plain_and_spaced_input() {
        assert_eq!(parse_layer_list("6,8,8,4").unwrap(), vec![6, 8, 8, 4]);
        assert_eq!(parse_layer_list(" 3 , 5 ,2,").unwrap(), vec![3, 5, 2]);
        assert!(parse_layer_list("6,x,4").is_err());
        assert!(parse_layer_list("6,-2").is_err());
    }

    #[test]
    fn test_from_json_keeps_defaults_for_missing_fields() {
        let config = VizConfig::from_json(r#"{"rotation_speed": 0.01, "layers": [2, 3]}"#).unwrap();
        assert_eq!(config.layers, vec![2, 3]);
        assert!((config.rotation_speed - 0.01).abs() < 0.0001);
        assert!((config.layer_distance - 220.0).abs() < 0.001);
        assert_eq!(config.input_rgb, [114, 239, 221]);
    }

    #[test]
    fn test_from_json_rejects_malformed_input() {
        assert!(VizConfig::from_json("{not json").is_err());
        assert!(VizConfig::from_json(r#"{"layers": "wide"}"#).is_err());
    }

    #[test]
    fn test_validate_rejects_bad_layer_lists() {
        let empty = VizConfig {
            layers: Vec::new(),
            ..VizConfig::default()
        };
        assert!(empty.validate().is_err());

        let hollow = VizConfig {
            layers: vec![4, 0, 2],
            ..VizConfig::default()
        };
        let error = hollow.validate().unwrap_err();
        assert!(error.to_string().contains("layer 1"));
    }

    #[test]
    fn test_validate_rejects_degenerate_camera() {
        let close = VizConfig {
            camera_distance: 300.0,
            ..VizConfig::default()
        };
        let error = close.validate().unwrap_err();
        assert!(error.to_string().contains("camera_distance"));

        let negative_fov = VizConfig {
            fov: 0.0,
            ..VizConfig::default()
        };
        assert!(negative_fov.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_edge_opacity() {
        let zero = VizConfig {
            edge_opacity: 0.0,
            ..VizConfig::default()
        };
        assert!(zero.validate().is_err());

        let above_one = VizConfig {
            edge_opacity: 1.5,
            ..VizConfig::default()
        };
        assert!(above_one.validate().is_err());
    }

    #[test]
    fn test_resolve_config_applies_overrides() {
        let config = resolve_config(None, Some("3,3"), Some(0.05)).unwrap();
        assert_eq!(config.layers, vec![3, 3]);
        assert!((config.rotation_speed - 0.05).abs() < 0.0001);

        assert!(resolve_config(None, Some("3,0"), None).is_err());
    }
}

use serde::Deserialize;
use std::error::Error;
use std::fs;
use std::path::Path;

use sculpt_aim::Reach;
use sculpt_geom::Vec3;

#[derive(Clone, Debug, Default, Deserialize)]
pub struct SculptConfig {
    #[serde(default)]
    pub camera: CameraConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub reach: ReachConfig,
    #[serde(default)]
    pub shapes: ShapesConfig,
}

#[derive(Clone, Debug, Deserialize)]
pub struct CameraConfig {
    #[serde(default = "d_speed")]
    pub speed: f32,
    #[serde(default = "d_start")]
    pub start: [f32; 3],
    #[serde(default)]
    pub yaw: f32,
    #[serde(default)]
    pub pitch: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            speed: d_speed(),
            start: d_start(),
            yaw: 0.0,
            pitch: 0.0,
        }
    }
}

impl CameraConfig {
    pub fn start_position(&self) -> Vec3 {
        Vec3::new(self.start[0], self.start[1], self.start[2])
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "d_width")]
    pub width: u32,
    #[serde(default = "d_height")]
    pub height: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: d_width(),
            height: d_height(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct ReachConfig {
    #[serde(default = "d_reach")]
    pub initial: i32,
}

impl Default for ReachConfig {
    fn default() -> Self {
        Self { initial: d_reach() }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct ShapesConfig {
    #[serde(default = "d_min_size")]
    pub min_size: i32,
    #[serde(default = "d_max_size")]
    pub max_size: i32,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for ShapesConfig {
    fn default() -> Self {
        Self {
            min_size: d_min_size(),
            max_size: d_max_size(),
            seed: None,
        }
    }
}

impl ShapesConfig {
    /// Inclusive size range with the bounds put in order and at least 1.
    pub fn size_range(&self) -> (i32, i32) {
        let lo = self.min_size.max(1);
        let hi = self.max_size.max(1);
        (lo.min(hi), lo.max(hi))
    }
}

fn d_speed() -> f32 {
    0.1
}
fn d_start() -> [f32; 3] {
    [0.0, 0.0, -3.0]
}
fn d_width() -> u32 {
    800
}
fn d_height() -> u32 {
    600
}
fn d_reach() -> i32 {
    Reach::default().get()
}
fn d_min_size() -> i32 {
    1
}
fn d_max_size() -> i32 {
    19
}

pub fn load_config_from_str(s: &str) -> Result<SculptConfig, Box<dyn Error>> {
    Ok(toml::from_str(s)?)
}

pub fn load_config_from_path(path: &Path) -> Result<SculptConfig, Box<dyn Error>> {
    let s = fs::read_to_string(path)?;
    load_config_from_str(&s)
}

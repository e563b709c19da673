use serde_derive::Deserialize;
use std::error::Error;
use std::path::Path;
use std::path::PathBuf;

use crate::config::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use crate::paint::Color;
use crate::style::{self, StyleSource};

#[derive(Deserialize, Default, Debug)]
#[serde(deny_unknown_fields)]
pub struct BarConfig {
	pub segment_count: Option<u32>,
	pub container_color: Option<String>,
	pub fill_color: Option<String>,
	pub gap_size: Option<i32>,
	pub corner_radius: Option<i32>,
	pub density: Option<f32>,
}

#[derive(Deserialize, Default, Debug)]
#[serde(deny_unknown_fields)]
pub struct UserConfig {
	#[serde(default)]
	pub bar: BarConfig,
}

fn find_user_config() -> Option<PathBuf> {
	let path = dirs::config_dir()?.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME);
	path.exists().then_some(path)
}

pub fn read_user_config(path: Option<&Path>) -> Result<UserConfig, Box<dyn Error>> {
	let path = match path.map(Path::to_owned).or_else(find_user_config) {
		Some(path) => path,
		None => return Ok(Default::default()),
	};

	let config_file = std::fs::read_to_string(path)?;
	let config: UserConfig = toml::from_str(&config_file)?;
	Ok(config)
}

fn color_or(value: Option<&str>, fallback: Color) -> Color {
	match value {
		Some(raw) => match raw.parse() {
			Ok(color) => color,
			Err(error) => {
				eprintln!("Ignoring configured color: {}", error);
				fallback
			}
		},
		None => fallback,
	}
}

impl StyleSource for BarConfig {
	fn density(&self) -> f32 {
		self.density.unwrap_or(1.0)
	}

	fn segment_count(&self) -> u32 {
		self.segment_count.unwrap_or(style::DEFAULT_SEGMENT_COUNT)
	}

	fn container_color(&self) -> Color {
		color_or(self.container_color.as_deref(), Color::LIGHT_GRAY)
	}

	fn fill_color(&self) -> Color {
		color_or(self.fill_color.as_deref(), Color::BLUE)
	}

	fn gap_size(&self) -> i32 {
		self.gap_size
			.unwrap_or_else(|| style::dp(style::DEFAULT_SEGMENT_GAP_DP, self.density()))
	}

	fn corner_radius(&self) -> i32 {
		self.corner_radius
			.unwrap_or_else(|| style::dp(style::DEFAULT_CORNER_RADIUS_DP, self.density()))
	}
}

use crate::paint::Color;

pub const DEFAULT_SEGMENT_COUNT: u32 = 5;
pub const DEFAULT_CORNER_RADIUS_DP: i32 = 12;
pub const DEFAULT_SEGMENT_GAP_DP: i32 = 2;

/// Density-independent pixels to pixels, truncating.
pub(crate) fn dp(value: i32, density: f32) -> i32 {
	(value as f32 * density) as i32
}

/// Typed style values with defaults applied. The host side implements this
/// over whatever it reads its configuration from; dimension getters return
/// pixels, already scaled by `density`.
pub trait StyleSource {
	fn density(&self) -> f32 {
		1.0
	}

	fn segment_count(&self) -> u32 {
		DEFAULT_SEGMENT_COUNT
	}

	fn container_color(&self) -> Color {
		Color::LIGHT_GRAY
	}

	fn fill_color(&self) -> Color {
		Color::BLUE
	}

	fn gap_size(&self) -> i32 {
		dp(DEFAULT_SEGMENT_GAP_DP, self.density())
	}

	fn corner_radius(&self) -> i32 {
		dp(DEFAULT_CORNER_RADIUS_DP, self.density())
	}
}

/// Style source with every value left at its default.
#[derive(Debug, Default)]
pub struct DefaultStyle;

impl StyleSource for DefaultStyle {}

#[derive(Debug, thiserror::Error)]
pub enum StyleError {
	#[error("segment count must be at least 1")]
	SegmentCount,
}

/// Validated bar configuration: slot count, paints, slot gap and corner
/// radius. Progress state lives on the bar, not here.
#[derive(Debug, Clone)]
pub struct BarStyle {
	segment_count: u32,
	container_color: Color,
	fill_color: Color,
	segment_gap: i32,
	corner_radius: i32,
}

impl BarStyle {
	pub fn new(
		segment_count: u32,
		container_color: Color,
		fill_color: Color,
		segment_gap: i32,
		corner_radius: i32,
	) -> Result<Self, StyleError> {
		if segment_count == 0 {
			return Err(StyleError::SegmentCount);
		}
		Ok(Self {
			segment_count,
			container_color,
			fill_color,
			segment_gap,
			corner_radius,
		})
	}

	pub fn from_source(source: &dyn StyleSource) -> Result<Self, StyleError> {
		Self::new(
			source.segment_count(),
			source.container_color(),
			source.fill_color(),
			source.gap_size(),
			source.corner_radius(),
		)
	}

	pub fn segment_count(&self) -> u32 {
		self.segment_count
	}

	pub fn container_color(&self) -> Color {
		self.container_color
	}

	pub fn fill_color(&self) -> Color {
		self.fill_color
	}

	pub fn segment_gap(&self) -> i32 {
		self.segment_gap
	}

	pub fn corner_radius(&self) -> i32 {
		self.corner_radius
	}

	/// Replaces the slot count. Callers must keep `count >= 1`; passing 0
	/// makes the slot geometry undefined.
	pub fn set_segment_count(&mut self, count: u32) {
		debug_assert!(count > 0, "segment count must be at least 1");
		self.segment_count = count;
	}

	pub fn set_container_color(&mut self, color: Color) {
		self.container_color = color;
	}

	pub fn set_fill_color(&mut self, color: Color) {
		self.fill_color = color;
	}
}

impl Default for BarStyle {
	fn default() -> Self {
		Self {
			segment_count: DEFAULT_SEGMENT_COUNT,
			container_color: Color::LIGHT_GRAY,
			fill_color: Color::BLUE,
			segment_gap: DEFAULT_SEGMENT_GAP_DP,
			corner_radius: DEFAULT_CORNER_RADIUS_DP,
		}
	}
}

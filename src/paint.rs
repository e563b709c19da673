use std::str;

/// Opaque RGB color. The bar never inspects these, it only hands them to
/// the draw backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
}

impl Color {
	pub const LIGHT_GRAY: Color = Color::rgb(0xcc, 0xcc, 0xcc);
	pub const BLUE: Color = Color::rgb(0x00, 0x00, 0xff);

	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b }
	}
}

impl str::FromStr for Color {
	type Err = ParseColorError;

	/// Parses a `#rrggbb` string.
	fn from_str(input: &str) -> Result<Self, Self::Err> {
		let hex = input
			.strip_prefix('#')
			.filter(|hex| hex.len() == 6 && hex.is_ascii())
			.ok_or_else(|| ParseColorError(input.to_owned()))?;
		let channel = |range: std::ops::Range<usize>| {
			u8::from_str_radix(&hex[range], 16).map_err(|_| ParseColorError(input.to_owned()))
		};
		Ok(Color::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
	}
}

#[derive(Debug, thiserror::Error)]
#[error("not a #rrggbb color: {0:?}")]
pub struct ParseColorError(String);

/// Solid fill paint for one draw command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paint {
	pub color: Color,
}

impl Paint {
	pub const fn fill(color: Color) -> Self {
		Self { color }
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_hex_colors() {
		assert_eq!("#ff00cc".parse::<Color>().unwrap(), Color::rgb(0xff, 0x00, 0xcc));
		assert_eq!("#000000".parse::<Color>().unwrap(), Color::rgb(0, 0, 0));
	}

	#[test]
	fn rejects_malformed_colors() {
		for input in ["", "#", "#fff", "ff00cc", "#ff00cg", "#ff00cc00"] {
			assert!(input.parse::<Color>().is_err(), "accepted {:?}", input);
		}
	}
}

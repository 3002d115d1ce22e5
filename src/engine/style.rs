use derive_more::Display;
use std::str::FromStr;
use thiserror::Error;

pub const DEFAULT_LINE_WIDTH: f32 = 7.0;
pub const DEFAULT_COLOR: Rgba = Rgba([0x55, 0x55, 0xbb, 0xff]);

#[derive(Debug, Error)]
pub enum StyleError {
	#[error("invalid color {0:?}: {1}")]
	InvalidColor(String, csscolorparser::ParseColorError),

	#[error("unknown line cap {0:?}")]
	UnknownLineCap(String),
}

/// An 8-bit straight-alpha color.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Rgba(pub [u8; 4]);

static_assertions::assert_eq_size!(Rgba, [u8; 4]);

impl Rgba {
	pub const TRANSPARENT: Rgba = Rgba([0, 0, 0, 0]);

	/// Parses any CSS color, e.g. `#5555bb`, `rebeccapurple` or `rgba(0, 0, 0, 0.5)`.
	pub fn parse(css: &str) -> Result<Self, StyleError> {
		csscolorparser::parse(css)
			.map(|color| Self(color.to_rgba8()))
			.map_err(|err| StyleError::InvalidColor(css.to_owned(), err))
	}

	pub fn alpha(&self) -> f32 {
		self.0[3] as f32 / 255.0
	}

	/// `#rrggbb`, as accepted by `<input type="color">`. Alpha is dropped.
	pub fn to_hex(&self) -> String {
		let [r, g, b, _] = self.0;
		format!("#{r:02x}{g:02x}{b:02x}")
	}
}

impl FromStr for Rgba {
	type Err = StyleError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::parse(s)
	}
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display)]
pub enum LineCap {
	#[display("butt")]
	Butt,
	#[default]
	#[display("round")]
	Round,
	#[display("square")]
	Square,
}

impl LineCap {
	pub const ALL: [LineCap; 3] = [LineCap::Butt, LineCap::Round, LineCap::Square];
}

impl FromStr for LineCap {
	type Err = StyleError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"butt" => Ok(Self::Butt),
			"round" => Ok(Self::Round),
			"square" => Ok(Self::Square),
			_ => Err(StyleError::UnknownLineCap(s.to_owned())),
		}
	}
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display)]
pub enum Tool {
	#[default]
	#[display("pen")]
	Pen,
	/// Removes ink along the stroke instead of adding it.
	#[display("eraser")]
	Eraser,
}

/// How a segment is rendered. Replaced as a whole; never mutated in place.
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
	line_width: f32,
	color: Rgba,
	line_cap: LineCap,
	tool: Tool,
}

impl Default for StrokeStyle {
	fn default() -> Self {
		Self {
			line_width: DEFAULT_LINE_WIDTH,
			color: DEFAULT_COLOR,
			line_cap: LineCap::default(),
			tool: Tool::default(),
		}
	}
}

/// Replaces a non-positive or non-finite line width with one pixel. Hairlines
/// thinner than a pixel are kept.
pub fn clamp_line_width(width: f32) -> f32 {
	if width > 0.0 && width.is_finite() {
		width
	} else {
		tracing::warn!(width, "line width clamped to 1");
		1.0
	}
}

impl StrokeStyle {
	pub fn line_width(&self) -> f32 {
		self.line_width
	}

	pub fn half_width(&self) -> f32 {
		0.5 * self.line_width
	}

	pub fn color(&self) -> Rgba {
		self.color
	}

	pub fn line_cap(&self) -> LineCap {
		self.line_cap
	}

	pub fn tool(&self) -> Tool {
		self.tool
	}

	pub fn with_line_width(self, line_width: f32) -> Self {
		Self {
			line_width: clamp_line_width(line_width),
			..self
		}
	}

	pub fn with_color(self, color: Rgba) -> Self {
		Self { color, ..self }
	}

	pub fn with_line_cap(self, line_cap: LineCap) -> Self {
		Self { line_cap, ..self }
	}

	pub fn with_tool(self, tool: Tool) -> Self {
		Self { tool, ..self }
	}

	/// Opacity of the ink laid down at full coverage.
	pub fn opacity(&self) -> f32 {
		match self.tool {
			Tool::Pen => self.color.alpha(),
			Tool::Eraser => 1.0,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_css_colors() {
		assert_eq!(Rgba::parse("#5555bb").unwrap(), DEFAULT_COLOR);
		assert_eq!(Rgba::parse("red").unwrap(), Rgba([255, 0, 0, 255]));
		assert_eq!(Rgba::parse("rgba(0, 0, 255, 0.5)").unwrap().0[3], 128);
		assert!(matches!(
			Rgba::parse("not a color"),
			Err(StyleError::InvalidColor(..))
		));
	}

	#[test]
	fn hex_drops_alpha() {
		assert_eq!(Rgba([0x55, 0x55, 0xbb, 0x10]).to_hex(), "#5555bb");
	}

	#[test]
	fn line_cap_round_trips_through_display() {
		for cap in LineCap::ALL {
			assert_eq!(cap.to_string().parse::<LineCap>().unwrap(), cap);
		}
		assert!("bevel".parse::<LineCap>().is_err());
	}

	#[test]
	fn line_width_is_clamped() {
		let style = StrokeStyle::default();
		assert_eq!(style.clone().with_line_width(0.0).line_width(), 1.0);
		assert_eq!(style.clone().with_line_width(-3.0).line_width(), 1.0);
		assert_eq!(style.clone().with_line_width(f32::NAN).line_width(), 1.0);
		assert_eq!(style.clone().with_line_width(f32::INFINITY).line_width(), 1.0);
		assert_eq!(style.clone().with_line_width(0.5).line_width(), 0.5);
		assert_eq!(style.with_line_width(14.0).line_width(), 14.0);
	}

	#[test]
	fn eraser_is_opaque_regardless_of_color() {
		let style = StrokeStyle::default()
			.with_color(Rgba([0, 0, 0, 0]))
			.with_tool(Tool::Eraser);
		assert_eq!(style.opacity(), 1.0);
	}
}

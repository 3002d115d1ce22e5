use crate::engine::raster::{clamp_size, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::engine::style::StrokeStyle;

/// Line widths offered by the demo toolbar.
pub const LINE_WIDTHS: [u32; 8] = [1, 2, 3, 5, 7, 10, 14, 20];

/// Monotonic version of the host's clear request.
///
/// Each new version is observed exactly once by a surface; repeated or older
/// versions are ignored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClearToken(u64);

impl ClearToken {
	pub fn version(self) -> u64 {
		self.0
	}

	#[must_use]
	pub fn next(self) -> Self {
		Self(self.0.wrapping_add(1))
	}
}

/// What a click without any drag leaves on the surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TapBehavior {
	/// A move-to without a line-to inks nothing.
	#[default]
	Nothing,
	/// A single cap-shaped mark at the tap position.
	Dot,
}

#[derive(Clone, Debug, PartialEq, bon::Builder)]
pub struct SurfaceConfig {
	#[builder(default = DEFAULT_WIDTH)]
	width: u32,
	#[builder(default = DEFAULT_HEIGHT)]
	height: u32,
	#[builder(default)]
	style: StrokeStyle,
	#[builder(default)]
	tap: TapBehavior,
	#[builder(default)]
	clear_token: ClearToken,
}

impl Default for SurfaceConfig {
	fn default() -> Self {
		Self::builder().build()
	}
}

impl SurfaceConfig {
	pub fn width(&self) -> u32 {
		clamp_size(self.width, self.height).0
	}

	pub fn height(&self) -> u32 {
		clamp_size(self.width, self.height).1
	}

	pub fn style(&self) -> &StrokeStyle {
		&self.style
	}

	pub fn tap(&self) -> TapBehavior {
		self.tap
	}

	pub fn clear_token(&self) -> ClearToken {
		self.clear_token
	}
}

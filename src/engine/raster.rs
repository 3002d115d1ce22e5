use super::style::Rgba;
use crate::geom::PixelRect;
use std::sync::Arc;

pub const DEFAULT_WIDTH: u32 = 500;
pub const DEFAULT_HEIGHT: u32 = 300;

/// Largest accepted width or height, the common browser canvas limit.
pub const MAX_DIMENSION: u32 = 16_384;

/// Largest accepted pixel count. Larger requests keep their width and lose rows.
pub const MAX_PIXELS: usize = 1 << 26;

/// Clamps a surface dimension to `1..=MAX_DIMENSION`.
pub fn clamp_dimension(value: u32) -> u32 {
	let clamped = value.clamp(1, MAX_DIMENSION);
	if clamped != value {
		tracing::warn!(value, clamped, "surface dimension clamped");
	}
	clamped
}

/// Clamps both dimensions, then trims the height so the area stays within [`MAX_PIXELS`].
pub fn clamp_size(width: u32, height: u32) -> (u32, u32) {
	let width = clamp_dimension(width);
	let height = clamp_dimension(height);
	match (width as usize).checked_mul(height as usize) {
		Some(area) if area <= MAX_PIXELS => (width, height),
		_ => {
			let trimmed = (MAX_PIXELS / width as usize) as u32;
			tracing::warn!(width, height, trimmed, "surface area clamped");
			(width, trimmed)
		}
	}
}

fn to_unit(v: u8) -> f32 {
	v as f32 / 255.0
}

fn from_unit(v: f32) -> u8 {
	(v.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Source-over compositing of `color` at `alpha` onto `dst`, in straight alpha.
fn blend_over(dst: Rgba, color: Rgba, alpha: f32) -> Rgba {
	let da = to_unit(dst.0[3]);
	let out_a = alpha + da * (1.0 - alpha);
	if out_a <= 0.0 {
		return Rgba::TRANSPARENT;
	}
	let channel = |i: usize| {
		let s = to_unit(color.0[i]);
		let d = to_unit(dst.0[i]);
		from_unit((s * alpha + d * da * (1.0 - alpha)) / out_a)
	};
	Rgba([channel(0), channel(1), channel(2), from_unit(out_a)])
}

/// Destination-out compositing: removes `alpha` of the existing ink.
fn erase(dst: Rgba, alpha: f32) -> Rgba {
	let a = from_unit(to_unit(dst.0[3]) * (1.0 - alpha));
	if a == 0 {
		return Rgba::TRANSPARENT;
	}
	let [r, g, b, _] = dst.0;
	Rgba([r, g, b, a])
}

/// A fixed-size RGBA pixel buffer, initially transparent.
///
/// Every mutation is recorded in a dirty region which the presenter drains with
/// [`Raster::take_dirty`].
#[derive(Clone, Debug)]
pub struct Raster {
	width: u32,
	height: u32,
	pixels: Vec<Rgba>,
	dirty: Option<PixelRect>,
}

impl Raster {
	pub fn new(width: u32, height: u32) -> Self {
		let (width, height) = clamp_size(width, height);
		Self {
			width,
			height,
			pixels: vec![Rgba::TRANSPARENT; width as usize * height as usize],
			dirty: Some(PixelRect::full(width, height)),
		}
	}

	pub fn width(&self) -> u32 {
		self.width
	}

	pub fn height(&self) -> u32 {
		self.height
	}

	pub fn len(&self) -> usize {
		self.pixels.len()
	}

	pub fn is_empty(&self) -> bool {
		self.pixels.is_empty()
	}

	pub(crate) fn index(&self, x: u32, y: u32) -> usize {
		y as usize * self.width as usize + x as usize
	}

	pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
		(x < self.width && y < self.height).then(|| self.pixels[self.index(x, y)])
	}

	pub fn pixels(&self) -> &[Rgba] {
		&self.pixels
	}

	/// Tightly packed RGBA bytes, row-major.
	pub fn as_bytes(&self) -> &[u8] {
		bytemuck::cast_slice(&self.pixels)
	}

	pub fn is_blank(&self) -> bool {
		self.pixels.iter().all(|p| *p == Rgba::TRANSPARENT)
	}

	pub fn clear(&mut self) {
		self.pixels.fill(Rgba::TRANSPARENT);
		self.mark_dirty(PixelRect::full(self.width, self.height));
	}

	pub(crate) fn blend_over(&mut self, x: u32, y: u32, color: Rgba, alpha: f32) {
		let i = self.index(x, y);
		self.pixels[i] = blend_over(self.pixels[i], color, alpha);
	}

	pub(crate) fn erase(&mut self, x: u32, y: u32, alpha: f32) {
		let i = self.index(x, y);
		self.pixels[i] = erase(self.pixels[i], alpha);
	}

	pub fn mark_dirty(&mut self, rect: PixelRect) {
		self.dirty = Some(match self.dirty {
			Some(dirty) => dirty.union(rect),
			None => rect,
		});
	}

	/// Returns and resets the region changed since the previous call.
	pub fn take_dirty(&mut self) -> Option<PixelRect> {
		self.dirty.take()
	}

	/// Copies a region out as tightly packed RGBA bytes.
	pub fn region_bytes(&self, rect: PixelRect) -> Vec<u8> {
		debug_assert!(rect.right() <= self.width && rect.bottom() <= self.height);
		let mut bytes = Vec::with_capacity(rect.width as usize * rect.height as usize * 4);
		for y in rect.y..rect.bottom() {
			let start = self.index(rect.x, y);
			let row = &self.pixels[start..start + rect.width as usize];
			bytes.extend_from_slice(bytemuck::cast_slice(row));
		}
		bytes
	}

	pub fn snapshot(&self) -> Snapshot {
		Snapshot {
			width: self.width,
			height: self.height,
			pixels: Arc::from(self.pixels.as_slice()),
		}
	}
}

/// An immutable copy of a raster handed out with update notifications.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
	width: u32,
	height: u32,
	pixels: Arc<[Rgba]>,
}

impl Snapshot {
	pub fn width(&self) -> u32 {
		self.width
	}

	pub fn height(&self) -> u32 {
		self.height
	}

	pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
		(x < self.width && y < self.height).then(|| self.pixels[y as usize * self.width as usize + x as usize])
	}

	pub fn as_bytes(&self) -> &[u8] {
		bytemuck::cast_slice(&self.pixels)
	}

	pub fn is_blank(&self) -> bool {
		self.pixels.iter().all(|p| *p == Rgba::TRANSPARENT)
	}

	pub fn encode_png(&self) -> Result<Vec<u8>, crate::export::ExportError> {
		crate::export::encode_png(self.as_bytes(), self.width, self.height)
	}

	pub fn to_data_url(&self) -> Result<String, crate::export::ExportError> {
		Ok(crate::export::encode_data_url(
			&self.encode_png()?,
			Some(crate::export::PNG_MEDIA_TYPE),
		))
	}
}

use glam::Vec2;

/// Axis-aligned box in surface coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AABox {
	min: Vec2,
	max: Vec2,
}

impl AABox {
	pub fn new(min: Vec2, max: Vec2) -> Self {
		Self { min, max }
	}

	pub fn empty() -> Self {
		Self::new(Vec2::MAX, Vec2::MIN)
	}

	pub fn is_empty(&self) -> bool {
		self.min.x > self.max.x || self.min.y > self.max.y
	}

	pub fn expanded_to_contain(self, point: Vec2) -> Self {
		Self::new(self.min.min(point), self.max.max(point))
	}

	pub fn containing(points: impl IntoIterator<Item = Vec2>) -> Self {
		points
			.into_iter()
			.fold(Self::empty(), |b, p| b.expanded_to_contain(p))
	}

	pub fn padded(self, amount: f32) -> Self {
		if self.is_empty() {
			return self;
		}
		Self::new(self.min - Vec2::splat(amount), self.max + Vec2::splat(amount))
	}

	/// The pixels whose area intersects this box, clipped to a `width × height` grid.
	pub fn pixel_rect(&self, width: u32, height: u32) -> Option<PixelRect> {
		if self.is_empty() {
			return None;
		}
		let x0 = self.min.x.floor().max(0.0);
		let y0 = self.min.y.floor().max(0.0);
		let x1 = self.max.x.ceil().min(width as f32);
		let y1 = self.max.y.ceil().min(height as f32);
		if !(x0 < x1 && y0 < y1) {
			return None;
		}
		Some(PixelRect {
			x: x0 as u32,
			y: y0 as u32,
			width: (x1 - x0) as u32,
			height: (y1 - y0) as u32,
		})
	}
}

/// Non-empty rectangle of whole pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PixelRect {
	pub x: u32,
	pub y: u32,
	pub width: u32,
	pub height: u32,
}

impl PixelRect {
	pub fn full(width: u32, height: u32) -> Self {
		Self {
			x: 0,
			y: 0,
			width,
			height,
		}
	}

	pub fn right(&self) -> u32 {
		self.x + self.width
	}

	pub fn bottom(&self) -> u32 {
		self.y + self.height
	}

	pub fn union(self, other: Self) -> Self {
		let x = self.x.min(other.x);
		let y = self.y.min(other.y);
		Self {
			x,
			y,
			width: self.right().max(other.right()) - x,
			height: self.bottom().max(other.bottom()) - y,
		}
	}

	pub fn contains(&self, x: u32, y: u32) -> bool {
		x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
	}

	/// Pixel coordinates in row-major order.
	pub fn pixels(self) -> impl Iterator<Item = (u32, u32)> {
		(self.y..self.bottom()).flat_map(move |y| (self.x..self.right()).map(move |x| (x, y)))
	}
}

use super::raster::Raster;
use super::style::{LineCap, StrokeStyle, Tool};
use crate::geom::AABox;
use glam::{vec2, Vec2};

/// Coverage of a pixel whose center lies `distance` from the stroke's center line.
fn edge(distance: f32, half_width: f32) -> f32 {
	(half_width - distance + 0.5).clamp(0.0, 1.0)
}

/// Coverage along the stroke direction for a span `[start, end]`.
fn span(x: f32, start: f32, end: f32) -> f32 {
	let enter = (x - start + 0.5).clamp(0.0, 1.0);
	let leave = (end - x + 0.5).clamp(0.0, 1.0);
	enter.min(leave)
}

/// A single straight piece of a stroke.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
	pub from: Vec2,
	pub to: Vec2,
}

impl Segment {
	pub fn new(from: Vec2, to: Vec2) -> Self {
		Self { from, to }
	}

	/// A zero-length segment, rendered as a lone cap.
	pub fn dot(at: Vec2) -> Self {
		Self::new(at, at)
	}

	pub fn bounds(&self, half_width: f32, cap: LineCap) -> AABox {
		let reach = match cap {
			// A square cap's corner sits `sqrt(2) * half_width` from the end point.
			LineCap::Square => half_width * std::f32::consts::SQRT_2,
			LineCap::Butt | LineCap::Round => half_width,
		};
		AABox::containing([self.from, self.to]).padded(reach + 1.0)
	}

	/// Anti-aliased coverage in `[0, 1]` of the pixel centered at `p`.
	pub fn coverage(&self, p: Vec2, half_width: f32, cap: LineCap) -> f32 {
		let d = self.to - self.from;
		let length = d.length();
		if length <= f32::EPSILON {
			let q = (p - self.from).abs();
			return match cap {
				LineCap::Butt => 0.0,
				LineCap::Round => edge(q.length(), half_width),
				LineCap::Square => edge(q.x, half_width).min(edge(q.y, half_width)),
			};
		}
		let dir = d / length;
		let rel = p - self.from;
		let along = rel.dot(dir);
		let across = dir.perp_dot(rel).abs();
		match cap {
			LineCap::Round => {
				let closest = self.from + dir * along.clamp(0.0, length);
				edge(p.distance(closest), half_width)
			}
			LineCap::Butt => edge(across, half_width).min(span(along, 0.0, length)),
			LineCap::Square => {
				edge(across, half_width).min(span(along, -half_width, length + half_width))
			}
		}
	}
}

/// Coverage already laid down by the current stroke, per pixel.
///
/// Adjacent segments overlap at their joints. Compositing only the coverage a
/// segment adds on top of the mask keeps joints and anti-aliased edges from being
/// inked twice.
#[derive(Clone, Debug)]
pub struct Ink {
	coverage: Vec<f32>,
}

impl Ink {
	pub fn for_raster(raster: &Raster) -> Self {
		Self {
			coverage: vec![0.0; raster.len()],
		}
	}

	/// Renders `segment` into `raster` and returns whether any pixel changed.
	pub fn paint(&mut self, raster: &mut Raster, segment: Segment, style: &StrokeStyle) -> bool {
		if self.coverage.len() != raster.len() {
			tracing::warn!("ink mask does not match raster, resetting");
			*self = Self::for_raster(raster);
		}
		let half_width = style.half_width();
		let cap = style.line_cap();
		let Some(rect) = segment
			.bounds(half_width, cap)
			.pixel_rect(raster.width(), raster.height())
		else {
			return false;
		};

		let opacity = style.opacity();
		let mut painted = false;
		for (x, y) in rect.pixels() {
			let center = vec2(x as f32 + 0.5, y as f32 + 0.5);
			let coverage = segment.coverage(center, half_width, cap);
			let i = raster.index(x, y);
			let previous = self.coverage[i];
			if coverage <= previous {
				continue;
			}
			self.coverage[i] = coverage;

			// Compositing `before` and then `step` has the same effect as compositing
			// `after` once.
			let before = opacity * previous;
			let after = opacity * coverage;
			if before >= 1.0 {
				continue;
			}
			let step = (after - before) / (1.0 - before);
			match style.tool() {
				Tool::Pen => raster.blend_over(x, y, style.color(), step),
				Tool::Eraser => raster.erase(x, y, step),
			}
			painted = true;
		}
		if painted {
			raster.mark_dirty(rect);
		}
		painted
	}
}

/// A stroke between pointer-down and pointer-up.
#[derive(Clone, Debug)]
pub struct ActiveStroke {
	last_point: Vec2,
	segments: usize,
	ink: Ink,
}

impl ActiveStroke {
	pub fn begin(at: Vec2, raster: &Raster) -> Self {
		Self {
			last_point: at,
			segments: 0,
			ink: Ink::for_raster(raster),
		}
	}

	pub fn last_point(&self) -> Vec2 {
		self.last_point
	}

	pub fn segments(&self) -> usize {
		self.segments
	}

	/// Renders the segment from the last point to `to` and advances.
	pub fn extend(&mut self, to: Vec2, raster: &mut Raster, style: &StrokeStyle) {
		let segment = Segment::new(self.last_point, to);
		self.ink.paint(raster, segment, style);
		self.last_point = to;
		self.segments += 1;
	}

	/// Renders a lone cap at the last point.
	pub fn dot(&mut self, raster: &mut Raster, style: &StrokeStyle) -> bool {
		self.ink.paint(raster, Segment::dot(self.last_point), style)
	}
}

#[derive(Clone, Debug, Default)]
pub enum StrokeState {
	#[default]
	Idle,
	Drawing(ActiveStroke),
}

impl StrokeState {
	pub fn is_drawing(&self) -> bool {
		matches!(self, Self::Drawing(_))
	}

	pub fn last_point(&self) -> Option<Vec2> {
		match self {
			Self::Idle => None,
			Self::Drawing(stroke) => Some(stroke.last_point()),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::engine::style::Rgba;
	use approx::assert_relative_eq;

	#[test]
	fn round_segment_coverage() {
		let s = Segment::new(vec2(10.0, 10.0), vec2(20.0, 10.0));
		assert_relative_eq!(s.coverage(vec2(15.0, 10.0), 3.5, LineCap::Round), 1.0);
		assert_relative_eq!(s.coverage(vec2(15.0, 13.5), 3.5, LineCap::Round), 0.5);
		assert_relative_eq!(s.coverage(vec2(15.0, 14.5), 3.5, LineCap::Round), 0.0);
		// Round caps extend past the end points.
		assert_relative_eq!(s.coverage(vec2(22.0, 10.0), 3.5, LineCap::Round), 1.0);
		assert_relative_eq!(s.coverage(vec2(6.5, 10.0), 3.5, LineCap::Round), 0.5);
	}

	#[test]
	fn butt_segment_stops_at_end_points() {
		let s = Segment::new(vec2(10.0, 10.0), vec2(20.0, 10.0));
		assert_relative_eq!(s.coverage(vec2(15.0, 10.0), 3.5, LineCap::Butt), 1.0);
		assert_relative_eq!(s.coverage(vec2(10.0, 10.0), 3.5, LineCap::Butt), 0.5);
		assert_relative_eq!(s.coverage(vec2(9.0, 10.0), 3.5, LineCap::Butt), 0.0);
	}

	#[test]
	fn square_segment_extends_by_half_width() {
		let s = Segment::new(vec2(10.0, 10.0), vec2(20.0, 10.0));
		assert_relative_eq!(s.coverage(vec2(7.0, 12.0), 3.5, LineCap::Square), 1.0);
		assert_relative_eq!(s.coverage(vec2(6.0, 10.0), 3.5, LineCap::Square), 0.0);
	}

	#[test]
	fn dots_follow_cap_shape() {
		let s = Segment::dot(vec2(5.0, 5.0));
		assert_relative_eq!(s.coverage(vec2(5.5, 5.5), 2.0, LineCap::Butt), 0.0);
		assert_relative_eq!(s.coverage(vec2(5.5, 5.5), 2.0, LineCap::Round), 1.0);
		assert_relative_eq!(s.coverage(vec2(6.4, 6.4), 2.0, LineCap::Square), 1.0);
		// The square's corner is inked where the disc is not.
		assert!(s.coverage(vec2(6.9, 6.9), 2.0, LineCap::Square) > 0.5);
		assert_relative_eq!(s.coverage(vec2(6.9, 6.9), 2.0, LineCap::Round), 0.0);
	}

	#[test]
	fn joints_are_not_inked_twice() {
		let mut raster = Raster::new(40, 20);
		let style = StrokeStyle::default().with_color(Rgba([0, 0, 0, 128]));
		let mut stroke = ActiveStroke::begin(vec2(5.0, 10.0), &raster);
		stroke.extend(vec2(20.0, 10.0), &mut raster, &style);
		stroke.extend(vec2(35.0, 10.0), &mut raster, &style);

		let middle = raster.pixel(12, 10).unwrap();
		let joint = raster.pixel(20, 10).unwrap();
		assert_eq!(middle, joint);
		assert_eq!(stroke.segments(), 2);
		assert_eq!(stroke.last_point(), vec2(35.0, 10.0));
	}

	#[test]
	fn painting_outside_the_raster_changes_nothing() {
		let mut raster = Raster::new(10, 10);
		raster.take_dirty();
		let mut ink = Ink::for_raster(&raster);
		let segment = Segment::new(vec2(100.0, 100.0), vec2(200.0, 100.0));
		assert!(!ink.paint(&mut raster, segment, &StrokeStyle::default()));
		assert!(raster.is_blank());
		assert_eq!(raster.take_dirty(), None);
	}

	#[test]
	fn idle_state_has_no_last_point() {
		let state = StrokeState::default();
		assert!(!state.is_drawing());
		assert_eq!(state.last_point(), None);
	}
}

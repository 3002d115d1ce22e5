use super::raster::Raster;
use super::stroke::{ActiveStroke, StrokeState};
use super::style::StrokeStyle;
use crate::config::{ClearToken, SurfaceConfig, TapBehavior};
use derive_more::Display;
use glam::Vec2;
use std::fmt;

/// Why the raster changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
pub enum UpdateCause {
	#[display("stroke ended")]
	StrokeEnded,
	#[display("cleared")]
	Cleared,
}

pub type UpdateListener = Box<dyn FnMut(&Raster, UpdateCause)>;

/// Turns pointer input into strokes on an owned raster.
///
/// The raster is attached explicitly once the embedding element exists. Until
/// then every operation is a no-op.
pub struct DrawSurface {
	raster: Option<Raster>,
	stroke: StrokeState,
	style: StrokeStyle,
	tap: TapBehavior,
	seen_clear: ClearToken,
	listener: Option<UpdateListener>,
}

impl fmt::Debug for DrawSurface {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("DrawSurface")
			.field("ready", &self.is_ready())
			.field("stroke", &self.stroke)
			.field("style", &self.style)
			.field("tap", &self.tap)
			.field("seen_clear", &self.seen_clear)
			.finish_non_exhaustive()
	}
}

impl DrawSurface {
	/// A surface without a raster.
	pub fn new(config: &SurfaceConfig) -> Self {
		Self {
			raster: None,
			stroke: StrokeState::Idle,
			style: config.style().clone(),
			tap: config.tap(),
			seen_clear: config.clear_token(),
			listener: None,
		}
	}

	/// A surface with a blank raster of the configured size.
	pub fn mounted(config: &SurfaceConfig) -> Self {
		let mut surface = Self::new(config);
		surface.attach(Raster::new(config.width(), config.height()));
		surface
	}

	pub fn attach(&mut self, raster: Raster) {
		tracing::debug!(
			width = raster.width(),
			height = raster.height(),
			"raster attached"
		);
		self.stroke = StrokeState::Idle;
		self.raster = Some(raster);
	}

	pub fn detach(&mut self) -> Option<Raster> {
		self.stroke = StrokeState::Idle;
		self.raster.take()
	}

	pub fn is_ready(&self) -> bool {
		self.raster.is_some()
	}

	pub fn raster(&self) -> Option<&Raster> {
		self.raster.as_ref()
	}

	/// Mutable access for presenters draining the dirty region.
	pub fn raster_mut(&mut self) -> Option<&mut Raster> {
		self.raster.as_mut()
	}

	pub fn stroke_state(&self) -> &StrokeState {
		&self.stroke
	}

	pub fn is_drawing(&self) -> bool {
		self.stroke.is_drawing()
	}

	pub fn style(&self) -> &StrokeStyle {
		&self.style
	}

	/// Applies to segments rendered from now on.
	pub fn set_style(&mut self, style: StrokeStyle) {
		self.style = style;
	}

	/// Replaces the single update listener.
	pub fn set_listener(&mut self, listener: impl FnMut(&Raster, UpdateCause) + 'static) {
		self.listener = Some(Box::new(listener));
	}

	fn notify(&mut self, cause: UpdateCause) {
		let (Some(raster), Some(listener)) = (self.raster.as_ref(), self.listener.as_mut()) else {
			return;
		};
		listener(raster, cause);
	}

	pub fn on_pointer_down(&mut self, point: Vec2) {
		let Some(raster) = self.raster.as_ref() else {
			tracing::debug!("pointer down before raster attached");
			return;
		};
		if self.stroke.is_drawing() {
			return;
		}
		tracing::debug!(x = point.x, y = point.y, "stroke begins");
		self.stroke = StrokeState::Drawing(ActiveStroke::begin(point, raster));
	}

	pub fn on_pointer_move(&mut self, point: Vec2) {
		let (StrokeState::Drawing(stroke), Some(raster)) = (&mut self.stroke, self.raster.as_mut())
		else {
			return;
		};
		tracing::trace!(x = point.x, y = point.y, "stroke extends");
		stroke.extend(point, raster, &self.style);
	}

	pub fn on_pointer_up(&mut self) {
		self.end_stroke();
	}

	/// Leaving the surface ends the stroke exactly like releasing the pointer.
	pub fn on_pointer_leave(&mut self) {
		self.end_stroke();
	}

	fn end_stroke(&mut self) {
		let StrokeState::Drawing(mut stroke) = std::mem::take(&mut self.stroke) else {
			return;
		};
		let Some(raster) = self.raster.as_mut() else {
			return;
		};
		if stroke.segments() == 0 && self.tap == TapBehavior::Dot {
			stroke.dot(raster, &self.style);
		}
		tracing::debug!(segments = stroke.segments(), "stroke ends");
		self.notify(UpdateCause::StrokeEnded);
	}

	/// Wipes the raster whatever the stroke state.
	pub fn on_clear_signal(&mut self) {
		self.stroke = StrokeState::Idle;
		let Some(raster) = self.raster.as_mut() else {
			tracing::debug!("clear before raster attached");
			return;
		};
		tracing::info!("surface cleared");
		raster.clear();
		self.notify(UpdateCause::Cleared);
	}

	/// Clears once for each token newer than the last one observed.
	pub fn observe_clear(&mut self, token: ClearToken) -> bool {
		if token <= self.seen_clear {
			if token < self.seen_clear {
				tracing::debug!(?token, seen = ?self.seen_clear, "stale clear token ignored");
			}
			return false;
		}
		self.seen_clear = token;
		self.on_clear_signal();
		true
	}
}

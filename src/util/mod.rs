use glam::Vec2;
use wasm_bindgen::JsCast;

mod result_ext;
pub use result_ext::*;

mod leptos_try;
pub use leptos_try::*;

pub mod canvas;

#[derive(thiserror::Error, Debug)]
#[error("javascript error: {0}")]
pub struct JsError(String);

impl JsError {
	pub fn msg(message: impl Into<String>) -> Self {
		Self(message.into())
	}
}

impl From<wasm_bindgen::JsValue> for JsError {
	fn from(value: wasm_bindgen::JsValue) -> Self {
		JsError(format!("{:?}", value))
	}
}

pub trait CoordinateSource {
	/// Position in raster pixels of a surface `width × height` pixels large.
	fn surface_coordinates(&self, width: u32, height: u32) -> Option<Vec2>;
}

impl CoordinateSource for web_sys::PointerEvent {
	fn surface_coordinates(&self, width: u32, height: u32) -> Option<Vec2> {
		let element = self
			.current_target()
			.and_then(|target| target.dyn_into::<web_sys::Element>().ok())?;
		let (client_width, client_height) = (element.client_width(), element.client_height());
		if client_width <= 0 || client_height <= 0 {
			return None;
		}
		// The canvas may be scaled by CSS.
		Some(Vec2::new(
			self.offset_x() as f32 * width as f32 / client_width as f32,
			self.offset_y() as f32 * height as f32 / client_height as f32,
		))
	}
}

pub trait PointerButtons {
	fn is_primary_button(&self) -> bool;
}

impl PointerButtons for web_sys::PointerEvent {
	fn is_primary_button(&self) -> bool {
		self.button() == 0
	}
}

use super::JsError;
use crate::engine::Raster;
use crate::geom::PixelRect;
use wasm_bindgen::{Clamped, JsCast};
use web_sys::{CanvasRenderingContext2d, HtmlAnchorElement, HtmlCanvasElement, ImageData};

pub fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, JsError> {
	canvas
		.get_context("2d")?
		.ok_or_else(|| JsError::msg("canvas has no 2d context"))?
		.dyn_into::<CanvasRenderingContext2d>()
		.map_err(|_| JsError::msg("context is not a CanvasRenderingContext2d"))
}

/// Copies `region` of the raster onto the canvas at the same position.
pub fn blit(canvas: &HtmlCanvasElement, raster: &Raster, region: PixelRect) -> Result<(), JsError> {
	let context = context_2d(canvas)?;
	let bytes = raster.region_bytes(region);
	let image = ImageData::new_with_u8_clamped_array_and_sh(
		Clamped(bytes.as_slice()),
		region.width,
		region.height,
	)?;
	context.put_image_data(&image, region.x as f64, region.y as f64)?;
	Ok(())
}

/// Offers `url` as a file download through a temporary anchor.
pub fn download(file_name: &str, url: &str) -> Result<(), JsError> {
	let document = web_sys::window()
		.and_then(|window| window.document())
		.ok_or_else(|| JsError::msg("no document"))?;
	let anchor = document
		.create_element("a")?
		.dyn_into::<HtmlAnchorElement>()
		.map_err(|_| JsError::msg("created element is not an anchor"))?;
	anchor.set_href(url);
	anchor.set_download(file_name);
	anchor.click();
	anchor.remove();
	Ok(())
}

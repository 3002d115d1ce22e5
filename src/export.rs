use base64::Engine;
use thiserror::Error;
use zune_core::colorspace::ColorSpace;
use zune_image::codecs::ImageFormat;
use zune_image::image::Image;

/// File name offered when saving the drawing.
pub const EXPORT_FILE_NAME: &str = "handwriting.png";

pub const PNG_MEDIA_TYPE: &str = "image/png";

#[derive(Debug, Error)]
pub enum ExportError {
	#[error("nothing has been drawn yet")]
	NothingToExport,

	#[error("expected {expected} bytes of RGBA data, got {actual}")]
	SizeMismatch { expected: usize, actual: usize },

	#[error("failed to encode png: {0}")]
	Encode(String),
}

/// Encodes tightly packed 8-bit RGBA pixels as a PNG file.
pub fn encode_png(rgba: &[u8], width: u32, height: u32) -> Result<Vec<u8>, ExportError> {
	let expected = width as usize * height as usize * 4;
	if rgba.len() != expected {
		return Err(ExportError::SizeMismatch {
			expected,
			actual: rgba.len(),
		});
	}
	let image = Image::from_u8(rgba, width as usize, height as usize, ColorSpace::RGBA);
	image
		.write_to_vec(ImageFormat::PNG)
		.map_err(|err| ExportError::Encode(format!("{err:?}")))
}

pub fn encode_data_url(data: &[u8], mediatype: Option<&str>) -> String {
	let mediatype = mediatype.unwrap_or("");
	let data = base64::engine::general_purpose::STANDARD.encode(data);
	format!("data:{mediatype};base64,{data}")
}

/// A finished export, ready to be saved.
#[derive(Clone, Debug)]
pub struct Export {
	pub file_name: &'static str,
	pub png: Vec<u8>,
}

impl Export {
	pub fn data_url(&self) -> String {
		encode_data_url(&self.png, Some(PNG_MEDIA_TYPE))
	}
}

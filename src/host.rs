use crate::config::{ClearToken, SurfaceConfig};
use crate::engine::raster::Snapshot;
use crate::engine::style::{LineCap, Rgba, StrokeStyle, StyleError, Tool};
use crate::export::{Export, ExportError, EXPORT_FILE_NAME};

/// Owns what the surface is told and keeps what it reports back.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Host {
	style: StrokeStyle,
	clear: ClearToken,
	latest: Option<Snapshot>,
}

impl Host {
	pub fn new(config: &SurfaceConfig) -> Self {
		Self {
			style: config.style().clone(),
			clear: config.clear_token(),
			latest: None,
		}
	}

	pub fn style(&self) -> &StrokeStyle {
		&self.style
	}

	pub fn clear_token(&self) -> ClearToken {
		self.clear
	}

	pub fn set_line_width(&mut self, line_width: f32) {
		self.style = self.style.clone().with_line_width(line_width);
	}

	/// Leaves the style untouched if `css` is not a color.
	pub fn set_color(&mut self, css: &str) -> Result<(), StyleError> {
		let color = Rgba::parse(css)?;
		self.style = self.style.clone().with_color(color);
		Ok(())
	}

	pub fn set_line_cap(&mut self, line_cap: LineCap) {
		self.style = self.style.clone().with_line_cap(line_cap);
	}

	pub fn set_tool(&mut self, tool: Tool) {
		self.style = self.style.clone().with_tool(tool);
	}

	pub fn trigger_clear(&mut self) -> ClearToken {
		self.clear = self.clear.next();
		tracing::debug!(token = self.clear.version(), "clear requested");
		self.clear
	}

	/// Keeps the snapshot carried by a surface update.
	pub fn receive(&mut self, snapshot: Snapshot) {
		self.latest = Some(snapshot);
	}

	pub fn latest(&self) -> Option<&Snapshot> {
		self.latest.as_ref()
	}

	pub fn can_export(&self) -> bool {
		self.latest.is_some()
	}

	pub fn export(&self) -> Result<Export, ExportError> {
		let snapshot = self.latest.as_ref().ok_or(ExportError::NothingToExport)?;
		let png = snapshot.encode_png()?;
		tracing::info!(bytes = png.len(), "exported {EXPORT_FILE_NAME}");
		Ok(Export {
			file_name: EXPORT_FILE_NAME,
			png,
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::engine::raster::Raster;

	#[test]
	fn invalid_color_leaves_style_unchanged() {
		let mut host = Host::default();
		let before = host.style().clone();
		assert!(host.set_color("nope").is_err());
		assert_eq!(host.style(), &before);
		host.set_color("#ff0000").unwrap();
		assert_eq!(host.style().color(), Rgba([255, 0, 0, 255]));
	}

	#[test]
	fn setters_replace_single_fields() {
		let mut host = Host::default();
		host.set_line_width(14.0);
		host.set_line_cap(LineCap::Square);
		host.set_tool(Tool::Eraser);
		let style = host.style();
		assert_eq!(style.line_width(), 14.0);
		assert_eq!(style.line_cap(), LineCap::Square);
		assert_eq!(style.tool(), Tool::Eraser);
	}

	#[test]
	fn trigger_clear_advances_token() {
		let mut host = Host::new(&SurfaceConfig::default());
		let first = host.trigger_clear();
		let second = host.trigger_clear();
		assert!(second > first);
		assert_eq!(host.clear_token(), second);
	}

	#[test]
	fn export_requires_a_snapshot() {
		let mut host = Host::default();
		assert!(!host.can_export());
		assert!(matches!(host.export(), Err(ExportError::NothingToExport)));

		host.receive(Raster::new(8, 4).snapshot());
		assert!(host.can_export());
		let export = host.export().unwrap();
		assert_eq!(export.file_name, "handwriting.png");
		assert!(export.data_url().starts_with("data:image/png;base64,"));
	}
}

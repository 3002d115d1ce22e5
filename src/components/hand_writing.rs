use crate::config::{ClearToken, SurfaceConfig, TapBehavior};
use crate::engine::raster::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::engine::{DrawSurface, Raster, Snapshot, StrokeStyle};
use crate::util::canvas::blit;
use crate::util::*;
use leptos::ev::PointerEvent;
use leptos::html;
use leptos::prelude::*;

type SurfaceHandle = StoredValue<DrawSurface, LocalStorage>;

/// Pushes whatever changed since the last call onto the canvas.
fn present(canvas_ref: NodeRef<html::Canvas>, surface: SurfaceHandle) {
	let Some(canvas) = canvas_ref.get_untracked() else {
		return;
	};
	surface.update_or_log(|surface| {
		let Some(raster) = surface.raster_mut() else {
			return;
		};
		let Some(region) = raster.take_dirty() else {
			return;
		};
		blit(&canvas, raster, region).ok_or_log("presenting raster");
	});
}

/// A canvas that captures freehand strokes.
///
/// `on_update` receives a snapshot whenever a stroke ends or the surface is
/// cleared. A new `clear` token wipes the surface.
#[component]
pub fn HandWriting(
	#[prop(default = DEFAULT_WIDTH)] width: u32,
	#[prop(default = DEFAULT_HEIGHT)] height: u32,
	#[prop(into)] style: Signal<StrokeStyle>,
	#[prop(into)] clear: Signal<ClearToken>,
	#[prop(optional)] tap: TapBehavior,
	#[prop(optional, into)] on_update: Option<Callback<Snapshot>>,
) -> impl IntoView {
	let config = SurfaceConfig::builder()
		.width(width)
		.height(height)
		.style(style.get_untracked())
		.tap(tap)
		.clear_token(clear.get_untracked())
		.build();
	let (width, height) = (config.width(), config.height());

	let mut surface = DrawSurface::new(&config);
	if let Some(on_update) = on_update {
		surface.set_listener(move |raster: &Raster, cause| {
			tracing::debug!(%cause, "surface updated");
			on_update.run(raster.snapshot());
		});
	}
	let surface: SurfaceHandle = StoredValue::new_local(surface);
	let canvas_ref = NodeRef::<html::Canvas>::new();

	// Attach the raster once the canvas exists.
	Effect::new(move |_| {
		if canvas_ref.get().is_none() {
			return;
		}
		surface.update_or_log(|surface| {
			if !surface.is_ready() {
				surface.attach(Raster::new(width, height));
			}
		});
		present(canvas_ref, surface);
	});

	Effect::new(move |_| {
		let style = style.get();
		surface.update_or_log(|surface| surface.set_style(style));
	});

	Effect::new(move |_| {
		let token = clear.get();
		if surface.update_or_log(|surface| surface.observe_clear(token)) == Some(true) {
			present(canvas_ref, surface);
		}
	});

	let pointerdown = move |e: PointerEvent| {
		if !e.is_primary_button() {
			return;
		}
		e.prevent_default();
		let Some(point) = e.surface_coordinates(width, height) else {
			return;
		};
		surface.update_or_log(|surface| surface.on_pointer_down(point));
	};

	let pointermove = move |e: PointerEvent| {
		let Some(point) = e.surface_coordinates(width, height) else {
			return;
		};
		surface.update_or_log(|surface| surface.on_pointer_move(point));
		present(canvas_ref, surface);
	};

	let pointerup = move |_: PointerEvent| {
		surface.update_or_log(|surface| surface.on_pointer_up());
		present(canvas_ref, surface);
	};

	let pointerleave = move |_: PointerEvent| {
		surface.update_or_log(|surface| surface.on_pointer_leave());
		present(canvas_ref, surface);
	};

	view! {
		<canvas
			class="HandWriting"
			node_ref=canvas_ref
			width=width.to_string()
			height=height.to_string()
			style="touch-action: none"
			on:pointerdown=pointerdown
			on:pointermove=pointermove
			on:pointerup=pointerup
			on:pointerleave=pointerleave
			on:pointercancel=pointerleave
		/>
	}
}

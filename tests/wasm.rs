#![cfg(target_arch = "wasm32")]

use futures::channel::oneshot;
use handwriting::*;
use leptos::prelude::*;
use std::time::Duration;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlElement, PointerEvent, PointerEventInit};

// https://rustwasm.github.io/wasm-bindgen/wasm-bindgen-test/browsers.html
wasm_bindgen_test_configure!(run_in_browser);

/// Lets pending effects run.
async fn settle() {
	let (done, settled) = oneshot::channel();
	set_timeout(
		move || {
			let _ = done.send(());
		},
		Duration::from_millis(20),
	);
	settled.await.unwrap();
}

struct Mounted {
	canvas: HtmlCanvasElement,
	clear: RwSignal<ClearToken>,
	updates: RwSignal<Vec<Snapshot>>,
}

/// Mounts a `HandWriting` into its own container and records its updates.
fn mount(width: u32, height: u32) -> Mounted {
	let container = document()
		.create_element("div")
		.unwrap()
		.dyn_into::<HtmlElement>()
		.unwrap();
	document().body().unwrap().append_child(&container).unwrap();

	let style = RwSignal::new(StrokeStyle::default());
	let clear = RwSignal::new(ClearToken::default());
	let updates = RwSignal::new(Vec::new());
	let on_update = Callback::new(move |snapshot: Snapshot| updates.update(|updates| updates.push(snapshot)));
	leptos::mount::mount_to(container.clone(), move || {
		view! { <HandWriting width=width height=height style=style clear=clear on_update=on_update/> }
	})
	.forget();

	let canvas = container
		.query_selector("canvas.HandWriting")
		.unwrap()
		.unwrap()
		.dyn_into()
		.unwrap();
	Mounted {
		canvas,
		clear,
		updates,
	}
}

impl Mounted {
	/// Dispatches a pointer event at `(x, y)` CSS pixels from the canvas corner.
	fn pointer(&self, kind: &str, x: f64, y: f64) {
		let rect = self.canvas.get_bounding_client_rect();
		let init = PointerEventInit::new();
		init.set_bubbles(true);
		init.set_cancelable(true);
		init.set_is_primary(true);
		init.set_client_x((rect.left() + x) as i32);
		init.set_client_y((rect.top() + y) as i32);
		let event = PointerEvent::new_with_event_init_dict(kind, &init).unwrap();
		self.canvas.dispatch_event(&event).unwrap();
	}

	/// Alpha the canvas shows at a raster pixel.
	fn alpha_at(&self, x: u32, y: u32) -> u8 {
		let context = self
			.canvas
			.get_context("2d")
			.unwrap()
			.unwrap()
			.dyn_into::<CanvasRenderingContext2d>()
			.unwrap();
		context
			.get_image_data(x as f64, y as f64, 1.0, 1.0)
			.unwrap()
			.data()
			.0[3]
	}

	fn update_count(&self) -> usize {
		self.updates.with_untracked(Vec::len)
	}
}

#[wasm_bindgen_test]
async fn mounts_a_canvas_of_the_requested_size() {
	let mounted = mount(320, 200);
	settle().await;
	assert_eq!((mounted.canvas.width(), mounted.canvas.height()), (320, 200));
	assert_eq!(mounted.update_count(), 0);
}

#[wasm_bindgen_test]
async fn stroke_on_scaled_canvas_lands_in_raster_pixels() {
	let mounted = mount(320, 200);
	mounted
		.canvas
		.set_attribute("style", "touch-action: none; width: 160px; height: 100px")
		.unwrap();
	settle().await;

	mounted.pointer("pointerdown", 10.0, 50.0);
	mounted.pointer("pointermove", 80.0, 50.0);
	mounted.pointer("pointermove", 150.0, 50.0);
	assert_eq!(mounted.update_count(), 0);
	mounted.pointer("pointerup", 150.0, 50.0);

	let updates = mounted.updates.get_untracked();
	assert_eq!(updates.len(), 1);
	// CSS (80, 50) is raster (160, 100) at half scale.
	assert_eq!(updates[0].pixel(160, 100).map(|p| p.0[3]), Some(255));
	assert_eq!(updates[0].pixel(80, 50).map(|p| p.0[3]), Some(0));
	assert_eq!(mounted.alpha_at(160, 100), 255);
	assert_eq!(mounted.alpha_at(80, 50), 0);
}

#[wasm_bindgen_test]
async fn new_clear_token_blanks_canvas_and_reports_once() {
	let mounted = mount(120, 80);
	settle().await;
	mounted.pointer("pointerdown", 20.0, 20.0);
	mounted.pointer("pointermove", 100.0, 60.0);
	mounted.pointer("pointerup", 100.0, 60.0);
	assert_eq!(mounted.update_count(), 1);
	assert_eq!(mounted.alpha_at(60, 40), 255);

	mounted.clear.update(|token| *token = token.next());
	settle().await;
	let updates = mounted.updates.get_untracked();
	assert_eq!(updates.len(), 2);
	assert!(updates[1].is_blank());
	assert_eq!(mounted.alpha_at(60, 40), 0);

	// Re-sending the same token is not a new clear.
	mounted.clear.set(mounted.clear.get_untracked());
	settle().await;
	assert_eq!(mounted.update_count(), 2);
}

#[wasm_bindgen_test]
fn export_produces_a_png_data_url() {
	let mut host = Host::default();
	host.receive(Raster::new(16, 16).snapshot());
	let url = host.export().unwrap().data_url();
	assert!(url.starts_with("data:image/png;base64,iVBORw0KGgo"));
}

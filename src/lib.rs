pub(crate) mod util;

mod components;
pub mod config;
pub mod engine;
pub mod export;
pub mod geom;
pub mod host;
mod pages;

pub use components::{HandWriting, HandWritingProps};
pub use config::{ClearToken, SurfaceConfig, TapBehavior};
pub use engine::{DrawSurface, Raster, Snapshot, StrokeStyle, UpdateCause};
pub use host::Host;


use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	view! {
		<Html attr:lang="en" attr:dir="ltr"/>

		<Title formatter=|page: String| format!("Handwriting - {page}")/>

		// Inject metadata in the <head> tag.
		<Meta charset="UTF-8"/>
		<Meta name="viewport" content="width=device-width, initial-scale=1.0"/>

		<Router>
			<Routes fallback=|| view! { <pages::NotFound/> }>
				<Route path=path!("/") view=pages::Home/>
			</Routes>
		</Router>
	}
}

use crate::components::*;
use crate::config::SurfaceConfig;
use crate::engine::Snapshot;
use crate::host::Host;
use crate::util::ResultExt;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::hooks::use_location;
use leptos_router::components::A;

#[component]
pub fn Home() -> impl IntoView {
	let config = SurfaceConfig::default();
	let host = RwSignal::new(Host::new(&config));

	let style = Memo::new(move |_| host.with(|host| host.style().clone()));
	let clear = Memo::new(move |_| host.with(Host::clear_token));
	let preview = Memo::new(move |_| {
		host.with(|host| {
			host
				.latest()
				.and_then(|snapshot| snapshot.to_data_url().ok_or_log("encoding preview"))
		})
	});
	let on_update = Callback::new(move |snapshot: Snapshot| host.update(|host| host.receive(snapshot)));

	view! {
		<Title text="Home"/>
		<div class="Home">
			<Panel title="Handwriting">
				<Toolbar host=host/>
				<HandWriting
					width=config.width()
					height=config.height()
					style=style
					clear=clear
					on_update=on_update
				/>
			</Panel>
			<Panel title="Preview (updated when a stroke ends)">
				<SnapshotPreview src=preview/>
			</Panel>
			<DownloadButton host=host/>
		</div>
	}
}

#[component]
pub fn NotFound() -> impl IntoView {
	let path = use_location().pathname.get();

	view! {
		<Title text="Not found"/>
		<div class="NotFound">
			<div>{format!("Not found: {path}")}</div>
			<A href="/">"Return home"</A>
		</div>
	}
}

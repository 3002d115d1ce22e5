use leptos::prelude::*;

/// Mirrors the latest snapshot as an `<img>`.
#[component]
pub fn SnapshotPreview(#[prop(into)] src: Signal<Option<String>>) -> impl IntoView {
	view! {
		<div class="SnapshotPreview">
			<Show when=move || src.with(Option::is_some) fallback=|| view! { <span>"Nothing drawn yet"</span> }>
				<img alt="" src=move || src.get().unwrap_or_default()/>
			</Show>
		</div>
	}
}

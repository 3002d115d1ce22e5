use leptos::prelude::*;

/// A labelled control in the toolbar.
#[component]
pub fn BrushSetting(
	#[prop(into)] name: String,
	#[prop(into)] label: String,
	children: Children,
) -> impl IntoView {
	view! {
		<div class="BrushSetting">
			<label class="BrushSettingName" for=name>{label}</label>
			{children()}
		</div>
	}
}

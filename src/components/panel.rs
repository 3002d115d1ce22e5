use leptos::prelude::*;

#[component]
pub fn Panel(#[prop(into)] title: String, children: Children) -> impl IntoView {
	view! {
		<section class="Panel">
			<h2 class="PanelHeader">{title}</h2>
			<div class="PanelBody">{children()}</div>
		</section>
	}
}

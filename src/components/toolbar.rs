use super::BrushSetting;
use crate::config::LINE_WIDTHS;
use crate::engine::{LineCap, Tool};
use crate::host::Host;
use crate::util::canvas::download;
use crate::util::ResultExt;
use leptos::prelude::*;

#[component]
pub fn LineWidthSelect(host: RwSignal<Host>) -> impl IntoView {
	let line_width = move || host.with(|host| host.style().line_width() as u32).to_string();
	let change = move |ev: leptos::ev::Event| {
		let Some(width) = event_target_value(&ev).parse::<f32>().ok_or_log("parsing line width")
		else {
			return;
		};
		host.update(|host| host.set_line_width(width));
	};

	view! {
		<BrushSetting name="lineWidth" label="Line width">
			<select id="lineWidth" name="lineWidth" prop:value=line_width on:change=change>
				{LINE_WIDTHS
					.iter()
					.map(|&width| view! { <option value=width.to_string()>{width.to_string()}</option> })
					.collect_view()}
			</select>
		</BrushSetting>
	}
}

#[component]
pub fn LineCapSelect(host: RwSignal<Host>) -> impl IntoView {
	let line_cap = move || host.with(|host| host.style().line_cap().to_string());
	let change = move |ev: leptos::ev::Event| {
		let Some(cap) = event_target_value(&ev).parse::<LineCap>().ok_or_log("parsing line cap") else {
			return;
		};
		host.update(|host| host.set_line_cap(cap));
	};

	view! {
		<BrushSetting name="lineCap" label="Line cap">
			<select id="lineCap" name="lineCap" prop:value=line_cap on:change=change>
				{LineCap::ALL
					.iter()
					.map(|cap| view! { <option value=cap.to_string()>{cap.to_string()}</option> })
					.collect_view()}
			</select>
		</BrushSetting>
	}
}

#[component]
pub fn ColorInput(host: RwSignal<Host>) -> impl IntoView {
	let color = move || host.with(|host| host.style().color().to_hex());
	let change = move |ev: leptos::ev::Event| {
		let value = event_target_value(&ev);
		host.update(|host| {
			host.set_color(&value).ok_or_log("setting color");
		});
	};

	view! {
		<BrushSetting name="lineColor" label="Color">
			<input id="lineColor" name="lineColor" type="color" prop:value=color on:change=change/>
		</BrushSetting>
	}
}

#[component]
pub fn ToolToggle(host: RwSignal<Host>) -> impl IntoView {
	let tool = Memo::new(move |_| host.with(|host| host.style().tool()));
	let button = move |label: &'static str, choice: Tool| {
		view! {
			<button
				type="button"
				class:active=move || tool.get() == choice
				on:click=move |_| host.update(|host| host.set_tool(choice))
			>
				{label}
			</button>
		}
	};

	view! {
		<div class="ToolToggle">
			{button("Pen", Tool::Pen)}
			{button("Eraser", Tool::Eraser)}
		</div>
	}
}

#[component]
pub fn ClearButton(host: RwSignal<Host>) -> impl IntoView {
	view! {
		<button
			type="button"
			on:click=move |_| {
				host.update(|host| {
					host.trigger_clear();
				})
			}
		>
			"Clear"
		</button>
	}
}

#[component]
pub fn DownloadButton(host: RwSignal<Host>) -> impl IntoView {
	let disabled = move || !host.with(Host::can_export);
	let click = move |_: leptos::ev::MouseEvent| {
		let Some(export) = host.with_untracked(Host::export).ok_or_log("exporting drawing") else {
			return;
		};
		download(export.file_name, &export.data_url()).ok_or_log("downloading drawing");
	};

	view! {
		<button type="button" prop:disabled=disabled on:click=click>
			"Download image"
		</button>
	}
}

#[component]
pub fn Toolbar(host: RwSignal<Host>) -> impl IntoView {
	view! {
		<div class="Toolbar">
			<LineWidthSelect host=host/>
			<LineCapSelect host=host/>
			<ColorInput host=host/>
			<ToolToggle host=host/>
			<ClearButton host=host/>
		</div>
	}
}

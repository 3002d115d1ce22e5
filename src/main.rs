#[derive(thiserror::Error, Debug)]
#[error("no tracing subscriber available for this target")]
struct NoSubscriber;

/// Most verbose level the native subscriber records.
fn native_max_level() -> tracing::Level {
	if cfg!(debug_assertions) {
		tracing::Level::DEBUG
	} else {
		tracing::Level::WARN
	}
}

fn install_subscriber() -> anyhow::Result<()> {
	let installed: Result<(), Box<dyn std::error::Error + Send + Sync>> = Err(NoSubscriber.into());

	// The browser console when running as the demo page.
	#[cfg(all(target_arch = "wasm32", feature = "csr"))]
	let installed = installed.or_else(|_| tracing_wasm::try_set_as_global_default().map_err(Into::into));

	let installed: Result<(), Box<dyn std::error::Error + Send + Sync>> = installed.or_else(|_| {
		let subscriber = tracing_subscriber::FmtSubscriber::builder()
			.with_max_level(native_max_level())
			.finish();
		tracing::subscriber::set_global_default(subscriber).map_err(Into::into)
	});

	installed.map_err(|error| anyhow::anyhow!(error))
}

fn init_diagnostics() -> anyhow::Result<()> {
	#[cfg(all(target_arch = "wasm32", feature = "csr"))]
	console_error_panic_hook::set_once();

	install_subscriber()?;

	#[cfg(feature = "log")]
	tracing_log::LogTracer::init()?;

	Ok(())
}

fn main() {
	if let Err(error) = init_diagnostics() {
		// Drawing works without diagnostics.
		tracing::warn!(%error, "diagnostics unavailable");
	}

	leptos::mount::mount_to_body(handwriting::App)
}

pub trait ResultExt<T, E> {
	/// Logs the error, naming what was attempted, and discards it.
	fn ok_or_log(self, attempted: &str) -> Option<T>
	where
		E: std::fmt::Display;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
	fn ok_or_log(self, attempted: &str) -> Option<T>
	where
		E: std::fmt::Display,
	{
		self
			.inspect_err(|err| tracing::error!(error = %err, "{attempted} failed"))
			.ok()
	}
}

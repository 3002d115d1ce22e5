use leptos::prelude::*;
use thiserror::Error;

use super::ResultExt;

#[derive(Error, Debug)]
#[error("stored value disposed")]
struct DisposedError;

pub trait UpdateValueExt<T> {
	/// Like `try_update_value`, but logs instead of silently ignoring a disposed value.
	fn update_or_log<O>(&self, f: impl FnOnce(&mut T) -> O) -> Option<O>;
}

impl<T: 'static> UpdateValueExt<T> for StoredValue<T, LocalStorage> {
	fn update_or_log<O>(&self, f: impl FnOnce(&mut T) -> O) -> Option<O> {
		self
			.try_update_value(f)
			.ok_or(DisposedError)
			.ok_or_log("updating stored value")
	}
}

//! Handlers attached to rendered controls
//!
//! Template options carry their handlers as [`Callback`] values so options stay
//! cloneable and printable.
//!
//! ```
//! use formbridge_pages::Callback;
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicBool, Ordering};
//!
//! let clicked = Arc::new(AtomicBool::new(false));
//! let on_click = Callback::new({
//!     let clicked = Arc::clone(&clicked);
//!     move |_: ()| clicked.store(true, Ordering::SeqCst)
//! });
//!
//! on_click.clone().call(());
//! assert!(clicked.load(Ordering::SeqCst));
//! ```

use std::fmt;
use std::sync::Arc;

/// Shared handler taking `Args` and returning `Ret`
///
/// Clones share the same function.
pub struct Callback<Args = (), Ret = ()> {
	handler: Arc<dyn Fn(Args) -> Ret + Send + Sync + 'static>,
}

impl<Args, Ret> Callback<Args, Ret> {
	pub fn new<F>(handler: F) -> Self
	where
		F: Fn(Args) -> Ret + Send + Sync + 'static,
	{
		Self {
			handler: Arc::new(handler),
		}
	}

	pub fn call(&self, args: Args) -> Ret {
		(self.handler)(args)
	}
}

impl<Args, Ret> Clone for Callback<Args, Ret> {
	fn clone(&self) -> Self {
		Self {
			handler: Arc::clone(&self.handler),
		}
	}
}

impl<Args, Ret> fmt::Debug for Callback<Args, Ret> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("Callback(<handler>)")
	}
}

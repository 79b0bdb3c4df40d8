//! # client
//!
//! Browser-side behavior for the portfolio page, compiled to WebAssembly.
//!
//! The crate is split in two layers. `state`, `util` and `net` hold the pure
//! models (theme preference, typing animator, filter index, modal state,
//! contact submission, scroll math) and build natively so they can be unit
//! tested and shared with the server. `components` and `app` bind those
//! models to the live DOM and only exist with the `browser` feature.

#[cfg(feature = "browser")]
pub mod app;
#[cfg(feature = "browser")]
pub mod components;
pub mod net;
pub mod state;
pub mod util;

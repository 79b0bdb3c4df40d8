//! Helpers shared across page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! These modules hold the arithmetic and lookup tables behind the browser
//! bindings so they can be reused and tested without a DOM.

pub mod cancel;
pub mod intro;
pub mod nav;
pub mod resume;
pub mod scroll;
pub mod tilt;

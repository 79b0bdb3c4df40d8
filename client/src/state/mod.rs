//! Page component state models.
//!
//! DESIGN
//! ======
//! Each component keeps its state in a small focused model with no DOM
//! access, so the browser bindings in `components` stay thin and the
//! behavior can be exercised natively.

pub mod counter;
pub mod modal;
pub mod projects;
pub mod reveal;
pub mod theme;
pub mod typing;

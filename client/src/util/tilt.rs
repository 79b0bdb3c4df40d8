//! Pointer-driven 3D tilt.
//!
//! The pointer's position inside the element, centered on zero, becomes a
//! small rotation around both axes. Leaving the element clears the
//! transform.

#[cfg(test)]
#[path = "tilt_test.rs"]
mod tilt_test;

pub const AVATAR_INTENSITY: f64 = 8.0;
pub const CARD_INTENSITY: f64 = 6.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// CSS transform for a pointer at (`client_x`, `client_y`).
///
/// Returns `None` for a zero-sized element.
pub fn tilt_transform(rect: Rect, client_x: f64, client_y: f64, intensity: f64) -> Option<String> {
    if rect.width <= 0.0 || rect.height <= 0.0 {
        return None;
    }
    let x = (client_x - rect.left) / rect.width - 0.5;
    let y = (client_y - rect.top) / rect.height - 0.5;
    Some(format!(
        "rotateX({:.2}deg) rotateY({:.2}deg) translateZ(6px)",
        unsigned_zero(-y * intensity),
        unsigned_zero(x * intensity)
    ))
}

// Avoid rendering "-0.00".
fn unsigned_zero(v: f64) -> f64 {
    if v.abs() < 0.005 { 0.0 } else { v }
}

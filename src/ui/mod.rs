//! egui rendering. Reads and mutates [`crate::state::AppState`], holds no state of its own.

pub mod panels;
pub mod plot;

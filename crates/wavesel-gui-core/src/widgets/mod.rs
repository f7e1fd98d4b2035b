//! Selection widgets.
//!
//! - [`ComboItems`] — option list and selection of one dropdown
//! - [`combo_box`] — egui rendering of a [`ComboItems`]

mod combo;

pub use combo::{ComboItems, combo_box};

//! Shared GUI components for the waveform selector.
//!
//! This crate provides the combo box model and widget, the [`ParamBridge`]
//! trait that decouples editor parameter access from the underlying storage,
//! the [`ComboAttachment`] binding a combo to a choice parameter, and the
//! [`WaveformEditor`] view built from them.
//!
//! # Modules
//!
//! - [`param_bridge`] — Parameter bridge trait with gesture protocol
//! - [`widgets`] — Combo box model and egui rendering
//! - [`attachment`] — Combo ↔ choice parameter binding
//! - [`editor`] — The waveform selector editor view
//! - [`theme`] — Visual styling constants and egui theme application

pub mod attachment;
pub mod editor;
pub mod param_bridge;
pub mod theme;
pub mod widgets;

pub use attachment::{AttachError, ComboAttachment};
pub use editor::{EDITOR_SIZE, WaveformEditor, selector_rect};
pub use param_bridge::{ParamBridge, ParamIndex};
pub use theme::Theme;
pub use widgets::{ComboItems, combo_box};

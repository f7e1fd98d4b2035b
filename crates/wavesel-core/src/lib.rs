//! Wavesel Core - item lists and parameter info for the waveform selector
//!
//! This crate holds the toolkit-independent half of the waveform selector:
//! the ordered value/name tables that drive dropdown widgets, the waveform
//! domain type, and the parameter descriptions a host or editor binds to.
//!
//! # Core Abstractions
//!
//! ## Item Lists
//!
//! - [`ItemList`] - Immutable (value, name) table with 1-based id lookups
//! - [`Entry`] - One (value, display name) pair
//! - [`ItemId`] - Selection id; [`ItemId::NONE`] is "no selection"
//! - [`ItemSink`] - Anything an item list can populate (combo models, ...)
//!
//! ## Waveforms
//!
//! - [`LfoType`] - Waveform shapes
//! - [`LFO_TYPES`] - The canonical waveform list, ids 1..=5
//!
//! ## Parameters
//!
//! - [`ParameterInfo`] - Index-based parameter introspection
//! - [`ParamDescriptor`] - Range, step, and ID metadata
//! - [`WaveformParams`] - The processor's `waveformType` parameter
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible (it needs `alloc` for owned item lists).
//! Disable the default `std` feature in your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! wavesel-core = { version = "0.1", default-features = false }
//! ```
//!
//! Enable the `tracing` feature to get a warning when an item list is built
//! with duplicate values.
//!
//! # Example
//!
//! ```rust
//! use wavesel_core::{ItemId, LFO_TYPES, LfoType};
//!
//! let mut options: Vec<(ItemId, String)> = Vec::new();
//! LFO_TYPES.apply_to(&mut options);
//!
//! assert_eq!(options[4], (ItemId(5), "Reverse Saw".to_string()));
//! assert_eq!(LFO_TYPES.value_to_id(&LfoType::Triangle), ItemId(3));
//! assert_eq!(LFO_TYPES.id_to_value(ItemId(3)), LfoType::Triangle);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod item_list;
pub mod param_info;
pub mod params;
pub mod waveform;

// Re-export main types at crate root
pub use item_list::{Entry, ItemId, ItemList, ItemSink};
pub use param_info::{ParamDescriptor, ParamFlags, ParamId, ParameterInfo};
pub use params::{WAVEFORM_TYPE, WAVEFORM_TYPE_ID, WAVEFORM_TYPE_INDEX, WaveformParams};
pub use waveform::{LFO_TYPES, LfoType};

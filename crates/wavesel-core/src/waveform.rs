//! LFO waveform types and their selection list.
//!
//! [`LFO_TYPES`] is the canonical (value, name) table for the `waveformType`
//! parameter. It is built in a `const` context and never mutated, so it can
//! be read from any thread without synchronization.

use crate::item_list::{Entry, ItemList};

/// LFO waveform shape.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LfoType {
    /// Sinusoid.
    #[default]
    Sine,
    /// 50% duty-cycle square.
    Square,
    /// Symmetric triangle.
    Triangle,
    /// Rising ramp.
    Saw,
    /// Falling ramp.
    ReverseSaw,
}

const LFO_TYPE_ENTRIES: &[Entry<LfoType>] = &[
    Entry::new(LfoType::Sine, "Sine"),
    Entry::new(LfoType::Square, "Square"),
    Entry::new(LfoType::Triangle, "Triangle"),
    Entry::new(LfoType::Saw, "Saw"),
    Entry::new(LfoType::ReverseSaw, "Reverse Saw"),
];

/// Waveform choices in display order (ids 1..=5).
pub static LFO_TYPES: ItemList<LfoType> = ItemList::from_static(LFO_TYPE_ENTRIES);

impl LfoType {
    /// Display name from [`LFO_TYPES`].
    pub fn name(self) -> &'static str {
        LFO_TYPES
            .name_for_id(LFO_TYPES.value_to_id(&self))
            .unwrap_or("")
    }
}

impl core::fmt::Display for LfoType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

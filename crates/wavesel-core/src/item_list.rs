//! Ordered value/name tables for enumerated parameters.
//!
//! An [`ItemList`] holds a fixed sequence of [`Entry`] pairs and provides the
//! two lookups a selection widget binding needs:
//!
//! - **Forward** ([`ItemList::value_to_id`]): domain value → selection id
//! - **Reverse** ([`ItemList::id_to_value`]): selection id → domain value
//!
//! Ids are derived purely from position: the first entry is id 1, the second
//! id 2, and so on. Id 0 ([`ItemId::NONE`]) is reserved for "no selection".
//!
//! ```text
//! position:   0        1         2           3       4
//! entry:    Sine    Square   Triangle      Saw   Reverse Saw
//! id:         1        2         3           4       5
//! ```
//!
//! Widgets are populated through the [`ItemSink`] capability, which keeps the
//! list independent of any concrete GUI toolkit.
//!
//! # Example
//!
//! ```rust
//! use wavesel_core::{Entry, ItemId, ItemList};
//!
//! #[derive(Clone, Copy, Debug, Default, PartialEq)]
//! enum Mode {
//!     #[default]
//!     Off,
//!     On,
//! }
//!
//! let modes = ItemList::new(vec![Entry::new(Mode::Off, "Off"), Entry::new(Mode::On, "On")]);
//!
//! assert_eq!(modes.value_to_id(&Mode::On), ItemId(2));
//! assert_eq!(modes.id_to_value(ItemId(1)), Mode::Off);
//! assert_eq!(modes.id_to_value(ItemId(9)), Mode::default());
//! assert_eq!(modes.try_id_to_value(ItemId(9)), None);
//! ```

#[cfg(not(feature = "std"))]
use alloc::{borrow::Cow, string::String, vec::Vec};
#[cfg(feature = "std")]
use std::borrow::Cow;

use core::fmt;

/// Selection id assigned to an item list entry.
///
/// Ids are 1-based positions. [`ItemId::NONE`] (`0`) means "no selection" and
/// is what forward lookups return when a value is not in the list. Negative
/// ids never map to an entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemId(pub i32);

impl ItemId {
    /// Sentinel id meaning "no selection" / "not found".
    pub const NONE: Self = Self(0);

    /// Id of the entry at the given 0-based position.
    #[inline]
    pub const fn from_position(position: usize) -> Self {
        Self(position as i32 + 1)
    }

    /// 0-based position this id refers to, or `None` for ids below 1.
    ///
    /// The position is not range-checked against any particular list.
    #[inline]
    pub const fn position(self) -> Option<usize> {
        if self.0 > 0 {
            Some(self.0 as usize - 1)
        } else {
            None
        }
    }

    /// Whether this is the [`NONE`](Self::NONE) sentinel.
    #[inline]
    pub const fn is_none(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for ItemId {
    fn from(v: i32) -> Self {
        Self(v)
    }
}

/// A selectable-list target that an [`ItemList`] can populate.
///
/// Implemented by GUI combo models and by anything else that needs the
/// list's labels in id order. The list never owns the target.
pub trait ItemSink {
    /// Remove every option currently held by the target.
    fn clear(&mut self);

    /// Append an option with the given display label and selection id.
    fn add_item(&mut self, label: &str, id: ItemId);
}

impl ItemSink for Vec<(ItemId, String)> {
    fn clear(&mut self) {
        Vec::clear(self);
    }

    fn add_item(&mut self, label: &str, id: ItemId) {
        self.push((id, String::from(label)));
    }
}

/// One (value, display name) pair in an [`ItemList`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<T> {
    /// Domain value selected by this entry.
    pub value: T,
    /// Human-readable label shown in selection widgets.
    pub name: Cow<'static, str>,
}

impl<T> Entry<T> {
    /// Create an entry with a static display name.
    ///
    /// Usable in `const` context, so entry tables can live in statics.
    pub const fn new(value: T, name: &'static str) -> Self {
        Self {
            value,
            name: Cow::Borrowed(name),
        }
    }

    /// Create an entry with a runtime-built display name.
    pub fn owned(value: T, name: impl Into<String>) -> Self {
        Self {
            value,
            name: Cow::Owned(name.into()),
        }
    }

    /// Display name as a string slice.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Immutable ordered table of [`Entry`] values with id lookups.
///
/// Construction is total: any sequence of entries (including none) yields a
/// valid list. Entry order is fixed for the list's lifetime and is the only
/// input to id assignment.
///
/// Values are expected to be unique. With duplicates, forward lookup resolves
/// to the first matching entry; use [`first_duplicate`](Self::first_duplicate)
/// to detect them.
///
/// Both lookups are linear scans. Lists are sized for dropdowns (a few dozen
/// entries at most), so no index is maintained.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemList<T: Clone + 'static> {
    entries: Cow<'static, [Entry<T>]>,
}

impl<T: Clone + 'static> Default for ItemList<T> {
    fn default() -> Self {
        Self::from_static(&[])
    }
}

impl<T: Clone + 'static> ItemList<T> {
    /// Create a list that borrows a static entry table.
    ///
    /// ```rust
    /// use wavesel_core::{Entry, ItemList};
    ///
    /// const ENTRIES: &[Entry<u8>] = &[Entry::new(1, "One"), Entry::new(2, "Two")];
    /// static NUMBERS: ItemList<u8> = ItemList::from_static(ENTRIES);
    ///
    /// assert_eq!(NUMBERS.len(), 2);
    /// ```
    pub const fn from_static(entries: &'static [Entry<T>]) -> Self {
        Self {
            entries: Cow::Borrowed(entries),
        }
    }

    /// Number of entries (also the highest valid id).
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the list has no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in id order.
    #[inline]
    pub fn entries(&self) -> &[Entry<T>] {
        &self.entries
    }

    /// Iterate `(id, entry)` pairs in list order, starting at id 1.
    pub fn iter(&self) -> impl Iterator<Item = (ItemId, &Entry<T>)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(pos, entry)| (ItemId::from_position(pos), entry))
    }

    /// Populate a selectable-list target with this list's labels.
    ///
    /// Clears the target first, then appends every entry's name with ids
    /// `1..=len()` in list order. Applying the same list twice leaves the
    /// target in the same state.
    pub fn apply_to<S: ItemSink + ?Sized>(&self, sink: &mut S) {
        sink.clear();
        for (id, entry) in self.iter() {
            sink.add_item(entry.name(), id);
        }
    }

    /// Entry at the given id, or `None` if the id is out of range.
    #[inline]
    pub fn get(&self, id: ItemId) -> Option<&Entry<T>> {
        id.position().and_then(|pos| self.entries.get(pos))
    }

    /// Value at the given id, or `None` if `id` is not in `1..=len()`.
    pub fn try_id_to_value(&self, id: ItemId) -> Option<T> {
        self.get(id).map(|entry| entry.value.clone())
    }

    /// Value at the given id, falling back to `T::default()`.
    ///
    /// Out-of-range ids (including [`ItemId::NONE`] and negatives) return the
    /// default value. Callers that must tell "invalid id" apart from an entry
    /// whose value happens to equal the default should use
    /// [`try_id_to_value`](Self::try_id_to_value).
    pub fn id_to_value(&self, id: ItemId) -> T
    where
        T: Default,
    {
        self.try_id_to_value(id).unwrap_or_default()
    }

    /// Display name at the given id.
    pub fn name_for_id(&self, id: ItemId) -> Option<&str> {
        self.get(id).map(Entry::name)
    }

    /// Id of the first entry whose display name equals `name` exactly.
    ///
    /// Returns [`ItemId::NONE`] if no entry carries that name.
    pub fn id_for_name(&self, name: &str) -> ItemId {
        self.entries
            .iter()
            .position(|entry| entry.name() == name)
            .map_or(ItemId::NONE, ItemId::from_position)
    }
}

impl<T: Clone + PartialEq + 'static> ItemList<T> {
    /// Create a list that owns its entries.
    pub fn new(entries: Vec<Entry<T>>) -> Self {
        let list = Self {
            entries: Cow::Owned(entries),
        };

        #[cfg(feature = "tracing")]
        if let Some((first, second)) = list.first_duplicate() {
            tracing::warn!(
                first,
                second,
                "item list has duplicate values; lookups resolve to position {first}"
            );
        }

        list
    }

    /// Id of the first entry whose value equals `value`.
    ///
    /// Returns [`ItemId::NONE`] if the value is not in the list.
    pub fn value_to_id(&self, value: &T) -> ItemId {
        self.entries
            .iter()
            .position(|entry| entry.value == *value)
            .map_or(ItemId::NONE, ItemId::from_position)
    }

    /// Whether any entry carries `value`.
    pub fn contains(&self, value: &T) -> bool {
        !self.value_to_id(value).is_none()
    }

    /// Positions `(first, later)` of the first pair of entries sharing a value.
    ///
    /// `None` means every value is unique and forward lookup is unambiguous.
    pub fn first_duplicate(&self) -> Option<(usize, usize)> {
        self.entries.iter().enumerate().find_map(|(later, entry)| {
            self.entries[..later]
                .iter()
                .position(|earlier| earlier.value == entry.value)
                .map(|first| (first, later))
        })
    }
}

impl<T: Clone + PartialEq + 'static> From<Vec<Entry<T>>> for ItemList<T> {
    fn from(entries: Vec<Entry<T>>) -> Self {
        Self::new(entries)
    }
}

impl<T: Clone + PartialEq + 'static> FromIterator<Entry<T>> for ItemList<T> {
    fn from_iter<I: IntoIterator<Item = Entry<T>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

//! Combo box model and its egui rendering.
//!
//! [`ComboItems`] is the option list plus current selection of one dropdown.
//! It implements [`ItemSink`], so an [`ItemList`](wavesel_core::ItemList)
//! populates it directly:
//!
//! ```rust
//! use wavesel_core::{ItemId, LFO_TYPES};
//! use wavesel_gui_core::widgets::ComboItems;
//!
//! let mut combo = ComboItems::new();
//! LFO_TYPES.apply_to(&mut combo);
//! combo.select(ItemId(2));
//!
//! assert_eq!(combo.selected_text(), Some("Square"));
//! ```

use egui::{Response, Ui};
use std::hash::Hash;
use wavesel_core::{ItemId, ItemSink};

/// Options and selection of a single dropdown.
///
/// Selection is tracked by id. Clearing the options also clears the
/// selection, and selecting an id that is not among the options leaves the
/// combo with no selection ([`ItemId::NONE`]).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComboItems {
    options: Vec<(ItemId, String)>,
    selected: ItemId,
}

impl ComboItems {
    /// Create an empty combo with nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of options.
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Whether the combo has no options.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Options in display order.
    pub fn options(&self) -> &[(ItemId, String)] {
        &self.options
    }

    /// Whether an option with this id exists.
    pub fn contains(&self, id: ItemId) -> bool {
        !id.is_none() && self.options.iter().any(|(opt, _)| *opt == id)
    }

    /// Currently selected id, [`ItemId::NONE`] when nothing is selected.
    pub fn selected_id(&self) -> ItemId {
        self.selected
    }

    /// Label of the selected option.
    pub fn selected_text(&self) -> Option<&str> {
        self.options
            .iter()
            .find(|(id, _)| *id == self.selected)
            .map(|(_, label)| label.as_str())
    }

    /// Select the option with `id`.
    ///
    /// Unknown ids (including [`ItemId::NONE`]) deselect. Returns `true` if
    /// the selection changed.
    pub fn select(&mut self, id: ItemId) -> bool {
        let next = if self.contains(id) { id } else { ItemId::NONE };
        let changed = next != self.selected;
        self.selected = next;
        changed
    }
}

impl ItemSink for ComboItems {
    fn clear(&mut self) {
        self.options.clear();
        self.selected = ItemId::NONE;
    }

    fn add_item(&mut self, label: &str, id: ItemId) {
        self.options.push((id, label.to_owned()));
    }
}

/// Render a dropdown for `items`, filling the available width.
///
/// When the user picks a different option the selection is updated and the
/// returned response is marked changed.
pub fn combo_box(ui: &mut Ui, id_salt: impl Hash, items: &mut ComboItems) -> Response {
    let current = items.selected_id();
    let mut picked = None;

    let mut response = egui::ComboBox::from_id_salt(id_salt)
        .selected_text(items.selected_text().unwrap_or_default())
        .width(ui.available_width())
        .show_ui(ui, |ui| {
            for (id, label) in items.options() {
                if ui.selectable_label(*id == current, label.as_str()).clicked() {
                    picked = Some(*id);
                }
            }
        })
        .response;

    if let Some(id) = picked
        && items.select(id)
    {
        response.mark_changed();
    }
    response
}

//! The waveform selector editor view.
//!
//! Layout (default 400 x 300):
//!
//! ```text
//! ┌──────────────────────────────────────┐
//! │ ┌──────────────────────────────────┐ │ ← 10 px margin
//! │ │ Waveform dropdown          ▼     │ │ ← 30 px strip
//! │ └──────────────────────────────────┘ │
//! │                                      │
//! │             Hello World!             │ ← centred caption
//! │                                      │
//! └──────────────────────────────────────┘
//! ```

use crate::ParamBridge;
use crate::attachment::{AttachError, ComboAttachment};
use crate::theme::Theme;
use crate::widgets::ComboItems;
use egui::{Align, Align2, FontId, Layout, Rect, Response, Ui, UiBuilder, Vec2, vec2};
use wavesel_core::{LFO_TYPES, WAVEFORM_TYPE};

/// Default editor size in points.
pub const EDITOR_SIZE: Vec2 = vec2(400.0, 300.0);

/// Inset between the editor bounds and its contents.
pub const EDITOR_MARGIN: f32 = 10.0;

/// Height of the waveform dropdown strip.
pub const SELECTOR_HEIGHT: f32 = 30.0;

/// Placeholder caption painted in the middle of the editor.
pub const CAPTION: &str = "Hello World!";

const CAPTION_SIZE: f32 = 15.0;

/// Where the waveform dropdown goes within `bounds`.
///
/// The bounds are inset by [`EDITOR_MARGIN`] on every side and the top
/// [`SELECTOR_HEIGHT`] of what remains is taken, or less if the editor is
/// too short.
pub fn selector_rect(bounds: Rect) -> Rect {
    let area = bounds.shrink(EDITOR_MARGIN);
    let width = area.width().max(0.0);
    let height = SELECTOR_HEIGHT.min(area.height().max(0.0));
    Rect::from_min_size(area.min, vec2(width, height))
}

/// Editor for the `waveformType` parameter.
pub struct WaveformEditor {
    selector: ComboItems,
    attachment: ComboAttachment,
    theme: Theme,
}

impl WaveformEditor {
    /// Build the editor and attach its dropdown to `waveformType` on `bridge`.
    pub fn new(bridge: &dyn ParamBridge) -> Result<Self, AttachError> {
        let mut selector = ComboItems::new();
        LFO_TYPES.apply_to(&mut selector);
        let attachment = ComboAttachment::new(bridge, WAVEFORM_TYPE, &mut selector)?;

        Ok(Self {
            selector,
            attachment,
            theme: Theme::default(),
        })
    }

    /// The dropdown's options and current selection.
    pub fn selector(&self) -> &ComboItems {
        &self.selector
    }

    /// Theme used for painting.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Paint the editor into the whole of `ui`'s available area.
    ///
    /// Returns the dropdown's response; it is marked changed on the frame the
    /// user picks a different waveform.
    pub fn ui(&mut self, ui: &mut Ui, bridge: &dyn ParamBridge) -> Response {
        let bounds = ui.available_rect_before_wrap();
        self.paint(ui, bounds);

        let mut child = ui.new_child(
            UiBuilder::new()
                .id_salt("waveform_selector")
                .max_rect(selector_rect(bounds))
                .layout(Layout::top_down_justified(Align::Min)),
        );
        let response = self
            .attachment
            .show(&mut child, bridge, &mut self.selector, "waveform_type");

        ui.advance_cursor_after_rect(bounds);
        response
    }

    fn paint(&self, ui: &Ui, bounds: Rect) {
        let painter = ui.painter_at(bounds);
        painter.rect_filled(bounds, 0.0, self.theme.background);
        painter.text(
            bounds.center(),
            Align2::CENTER_CENTER,
            CAPTION,
            FontId::proportional(CAPTION_SIZE),
            self.theme.caption,
        );
    }
}

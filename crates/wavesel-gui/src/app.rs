//! Standalone application hosting the waveform editor.

use crate::atomic_param_bridge::AtomicParamBridge;
use egui::{CentralPanel, Context, Frame};
use std::sync::Arc;
use wavesel_core::{LfoType, WaveformParams};
use wavesel_gui_core::{AttachError, WaveformEditor};

/// eframe application: one editor bound to one set of processor params.
pub struct WaveselApp {
    bridge: Arc<AtomicParamBridge>,
    params: WaveformParams,
    editor: WaveformEditor,
    last_waveform: LfoType,
}

impl WaveselApp {
    /// Create the app with `initial` selected.
    ///
    /// Fails only if the editor cannot attach to the processor's
    /// `waveformType` parameter.
    pub fn new(cc: &eframe::CreationContext<'_>, initial: LfoType) -> Result<Self, AttachError> {
        let app = Self::headless(initial)?;
        app.editor.theme().apply(&cc.egui_ctx);
        Ok(app)
    }

    /// Build the app state without a window.
    pub fn headless(initial: LfoType) -> Result<Self, AttachError> {
        let mut params = WaveformParams::new();
        params.set_waveform(initial);

        let bridge = Arc::new(AtomicParamBridge::new(&params));
        let editor = WaveformEditor::new(bridge.as_ref())?;

        tracing::info!(waveform = %initial, "editor ready");

        Ok(Self {
            bridge,
            params,
            editor,
            last_waveform: initial,
        })
    }

    /// Shared handle to the parameter bridge.
    pub fn bridge(&self) -> &Arc<AtomicParamBridge> {
        &self.bridge
    }

    /// Processor-side parameters as of the last sync.
    pub fn params(&self) -> &WaveformParams {
        &self.params
    }

    /// Push bridge values to the processor params.
    ///
    /// Returns the new waveform if it changed since the last sync.
    pub fn sync(&mut self) -> Option<LfoType> {
        if self.bridge.sync_to(&mut self.params).is_empty() {
            return None;
        }

        let waveform = self.params.waveform();
        if waveform == self.last_waveform {
            return None;
        }

        tracing::info!(from = %self.last_waveform, to = %waveform, "waveform changed");
        self.last_waveform = waveform;
        Some(waveform)
    }

    /// Draw one frame of the editor into `ctx`.
    pub fn show(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(Frame::NONE)
            .show(ctx, |ui| self.editor.ui(ui, self.bridge.as_ref()));
    }
}

impl eframe::App for WaveselApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
        self.sync();
    }
}

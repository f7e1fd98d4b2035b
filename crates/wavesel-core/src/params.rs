//! Processor-side parameter set.
//!
//! The waveform selector exposes a single parameter, `waveformType`: a
//! stepped choice whose plain value is the 0-based position of the selected
//! entry in [`LFO_TYPES`]. Editors attach to it by string ID.

use crate::item_list::ItemId;
use crate::param_info::{ParamDescriptor, ParamId, ParameterInfo};
use crate::waveform::{LFO_TYPES, LfoType};

/// String ID of the waveform choice parameter.
pub const WAVEFORM_TYPE: &str = "waveformType";

/// Stable host ID of the waveform choice parameter.
pub const WAVEFORM_TYPE_ID: ParamId = ParamId(100);

/// Parameter index of `waveformType`.
pub const WAVEFORM_TYPE_INDEX: usize = 0;

/// Parameters owned by the audio processor.
#[derive(Debug, Clone, PartialEq)]
pub struct WaveformParams {
    /// Choice index into [`LFO_TYPES`].
    waveform_index: f32,
}

impl Default for WaveformParams {
    fn default() -> Self {
        Self::new()
    }
}

impl WaveformParams {
    /// Create the parameter set with every parameter at its default.
    pub fn new() -> Self {
        Self {
            waveform_index: Self::waveform_descriptor().default,
        }
    }

    /// Descriptor of the `waveformType` choice parameter.
    pub fn waveform_descriptor() -> ParamDescriptor {
        let default_index = LFO_TYPES
            .value_to_id(&LfoType::default())
            .position()
            .unwrap_or(0);
        ParamDescriptor::choice("Waveform", "Wave", LFO_TYPES.len(), default_index)
            .with_id(WAVEFORM_TYPE_ID, WAVEFORM_TYPE)
    }

    /// Currently selected waveform.
    pub fn waveform(&self) -> LfoType {
        LFO_TYPES.id_to_value(ItemId::from_position(self.waveform_index as usize))
    }

    /// Select a waveform. Values missing from [`LFO_TYPES`] are ignored.
    pub fn set_waveform(&mut self, waveform: LfoType) {
        if let Some(pos) = LFO_TYPES.value_to_id(&waveform).position() {
            self.waveform_index = pos as f32;
        }
    }
}

impl ParameterInfo for WaveformParams {
    fn param_count(&self) -> usize {
        1
    }

    fn param_info(&self, index: usize) -> Option<ParamDescriptor> {
        match index {
            WAVEFORM_TYPE_INDEX => Some(Self::waveform_descriptor()),
            _ => None,
        }
    }

    fn get_param(&self, index: usize) -> f32 {
        match index {
            WAVEFORM_TYPE_INDEX => self.waveform_index,
            _ => 0.0,
        }
    }

    fn set_param(&mut self, index: usize, value: f32) {
        if index == WAVEFORM_TYPE_INDEX {
            self.waveform_index = Self::waveform_descriptor().clamp(value);
        }
    }
}

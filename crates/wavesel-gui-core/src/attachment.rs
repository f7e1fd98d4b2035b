//! Two-way binding between a combo box and a choice parameter.
//!
//! A [`ComboAttachment`] ties one [`ComboItems`] to one stepped parameter on
//! a [`ParamBridge`]. The parameter stores the 0-based option index; the
//! combo shows the matching 1-based id:
//!
//! ```text
//! parameter value:   0     1     2     3     4
//! combo id:          1     2     3     4     5
//! ```
//!
//! Parameter → combo happens every frame ([`sync_from_param`]) so host
//! automation shows up in the editor. Combo → parameter happens when the user
//! picks an option ([`commit_selection`]) and is wrapped in a gesture.
//!
//! [`sync_from_param`]: ComboAttachment::sync_from_param
//! [`commit_selection`]: ComboAttachment::commit_selection

use crate::widgets::{ComboItems, combo_box};
use crate::{ParamBridge, ParamIndex};
use egui::{Response, Ui};
use thiserror::Error;
use wavesel_core::ItemId;

/// Errors raised when wiring a combo box to a parameter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttachError {
    /// No parameter carries the requested string ID.
    #[error("unknown parameter: {0}")]
    UnknownParameter(String),

    /// The parameter exists but is continuous or does not count from zero,
    /// so its values cannot be read as option indices.
    #[error("parameter '{0}' is not a choice parameter")]
    NotAChoice(String),
}

/// Keeps a combo selection and a choice parameter in sync.
#[derive(Debug, Clone)]
pub struct ComboAttachment {
    param: ParamIndex,
    string_id: String,
}

impl ComboAttachment {
    /// Attach `combo` to the parameter named `string_id`.
    ///
    /// The parameter must be stepped with a minimum of `0`, so each value is
    /// an option index. The combo should already be populated; its selection is set from the
    /// parameter's current value before this returns.
    pub fn new(
        bridge: &dyn ParamBridge,
        string_id: &str,
        combo: &mut ComboItems,
    ) -> Result<Self, AttachError> {
        let param = bridge
            .find_param(string_id)
            .ok_or_else(|| AttachError::UnknownParameter(string_id.to_owned()))?;

        if !bridge
            .param_descriptor(param)
            .is_some_and(|d| d.is_stepped() && d.min == 0.0)
        {
            return Err(AttachError::NotAChoice(string_id.to_owned()));
        }

        let attachment = Self {
            param,
            string_id: string_id.to_owned(),
        };
        attachment.sync_from_param(bridge, combo);

        tracing::debug!(
            param = %param,
            string_id,
            options = combo.len(),
            "combo attached"
        );
        Ok(attachment)
    }

    /// Index of the bound parameter.
    pub fn param(&self) -> ParamIndex {
        self.param
    }

    /// String ID of the bound parameter.
    pub fn string_id(&self) -> &str {
        &self.string_id
    }

    /// Combo id that shows the parameter's current value.
    pub fn param_to_id(&self, bridge: &dyn ParamBridge) -> ItemId {
        let value = bridge.get(self.param);
        if value.is_finite() && value >= 0.0 {
            ItemId::from_position(value.round() as usize)
        } else {
            ItemId::NONE
        }
    }

    /// Pull the parameter into the combo selection.
    ///
    /// Returns `true` if the combo's selection changed.
    pub fn sync_from_param(&self, bridge: &dyn ParamBridge, combo: &mut ComboItems) -> bool {
        combo.select(self.param_to_id(bridge))
    }

    /// Push the combo selection into the parameter as one gesture.
    ///
    /// With nothing selected the parameter is left untouched.
    pub fn commit_selection(&self, bridge: &dyn ParamBridge, combo: &ComboItems) {
        let id = combo.selected_id();
        let Some(position) = id.position() else {
            return;
        };

        bridge.begin_set(self.param);
        bridge.set(self.param, position as f32);
        bridge.end_set(self.param);

        tracing::debug!(
            string_id = %self.string_id,
            id = %id,
            label = combo.selected_text().unwrap_or_default(),
            "selection committed"
        );
    }

    /// Sync, render, and commit in one call.
    pub fn show(
        &self,
        ui: &mut Ui,
        bridge: &dyn ParamBridge,
        combo: &mut ComboItems,
        id_salt: &str,
    ) -> Response {
        self.sync_from_param(bridge, combo);
        let response = combo_box(ui, id_salt, combo);
        if response.changed() {
            self.commit_selection(bridge, combo);
        }
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use wavesel_core::{
        LFO_TYPES, LfoType, ParamDescriptor, ParamFlags, ParameterInfo, WAVEFORM_TYPE,
        WaveformParams,
    };

    /// Bridge over `WaveformParams` plus one continuous parameter, recording calls.
    struct MockBridge {
        params: Mutex<WaveformParams>,
        gain: Mutex<f32>,
        log: Mutex<Vec<String>>,
    }

    impl MockBridge {
        fn new() -> Self {
            Self {
                params: Mutex::new(WaveformParams::new()),
                gain: Mutex::new(0.5),
                log: Mutex::new(Vec::new()),
            }
        }

        fn waveform(&self) -> LfoType {
            self.params.lock().unwrap().waveform()
        }

        fn log(&self) -> Vec<String> {
            self.log.lock().unwrap().clone()
        }
    }

    impl ParamBridge for MockBridge {
        fn param_count(&self) -> usize {
            3
        }

        fn param_descriptor(&self, param: ParamIndex) -> Option<ParamDescriptor> {
            match param.0 {
                0 => self.params.lock().unwrap().param_info(0),
                1 => Some(
                    ParamDescriptor::continuous("Gain", "Gain", 0.0, 1.0, 0.5)
                        .with_id(wavesel_core::ParamId(7), "gain"),
                ),
                2 => Some(
                    ParamDescriptor::continuous("Octave", "Oct", -2.0, 2.0, 0.0)
                        .with_id(wavesel_core::ParamId(8), "octave")
                        .with_flags(ParamFlags::AUTOMATABLE.union(ParamFlags::STEPPED)),
                ),
                _ => None,
            }
        }

        fn get(&self, param: ParamIndex) -> f32 {
            match param.0 {
                0 => self.params.lock().unwrap().get_param(0),
                1 => *self.gain.lock().unwrap(),
                _ => 0.0,
            }
        }

        fn set(&self, param: ParamIndex, value: f32) {
            self.log.lock().unwrap().push(format!("set {param} {value}"));
            match param.0 {
                0 => self.params.lock().unwrap().set_param(0, value),
                1 => *self.gain.lock().unwrap() = value,
                _ => {}
            }
        }

        fn begin_set(&self, param: ParamIndex) {
            self.log.lock().unwrap().push(format!("begin {param}"));
        }

        fn end_set(&self, param: ParamIndex) {
            self.log.lock().unwrap().push(format!("end {param}"));
        }
    }

    fn populated() -> ComboItems {
        let mut combo = ComboItems::new();
        LFO_TYPES.apply_to(&mut combo);
        combo
    }

    #[test]
    fn attach_selects_current_value() {
        let bridge = MockBridge::new();
        bridge.params.lock().unwrap().set_waveform(LfoType::Saw);

        let mut combo = populated();
        let attachment = ComboAttachment::new(&bridge, WAVEFORM_TYPE, &mut combo).unwrap();

        assert_eq!(attachment.param(), ParamIndex(0));
        assert_eq!(attachment.string_id(), "waveformType");
        assert_eq!(combo.selected_id(), ItemId(4));
        assert_eq!(combo.selected_text(), Some("Saw"));
    }

    #[test]
    fn unknown_parameter_is_rejected() {
        let bridge = MockBridge::new();
        let mut combo = populated();
        let err = ComboAttachment::new(&bridge, "filterType", &mut combo).unwrap_err();
        assert_eq!(err, AttachError::UnknownParameter("filterType".to_string()));
        assert_eq!(err.to_string(), "unknown parameter: filterType");
    }

    #[test]
    fn continuous_parameter_is_rejected() {
        let bridge = MockBridge::new();
        let mut combo = populated();
        let err = ComboAttachment::new(&bridge, "gain", &mut combo).unwrap_err();
        assert_eq!(err, AttachError::NotAChoice("gain".to_string()));
    }

    #[test]
    fn offset_stepped_parameter_is_rejected() {
        let bridge = MockBridge::new();
        let mut combo = populated();
        let err = ComboAttachment::new(&bridge, "octave", &mut combo).unwrap_err();
        assert_eq!(err, AttachError::NotAChoice("octave".to_string()));
        assert_eq!(combo.selected_id(), ItemId::NONE);
    }

    #[test]
    fn commit_wraps_set_in_gesture() {
        let bridge = MockBridge::new();
        let mut combo = populated();
        let attachment = ComboAttachment::new(&bridge, WAVEFORM_TYPE, &mut combo).unwrap();

        combo.select(ItemId(5));
        attachment.commit_selection(&bridge, &combo);

        assert_eq!(bridge.log(), ["begin 0", "set 0 4", "end 0"]);
        assert_eq!(bridge.waveform(), LfoType::ReverseSaw);
    }

    #[test]
    fn commit_without_selection_is_a_no_op() {
        let bridge = MockBridge::new();
        let mut combo = populated();
        let attachment = ComboAttachment::new(&bridge, WAVEFORM_TYPE, &mut combo).unwrap();

        combo.select(ItemId::NONE);
        attachment.commit_selection(&bridge, &combo);

        assert!(bridge.log().is_empty());
        assert_eq!(bridge.waveform(), LfoType::Sine);
    }

    #[test]
    fn host_changes_flow_back_to_combo() {
        let bridge = MockBridge::new();
        let mut combo = populated();
        let attachment = ComboAttachment::new(&bridge, WAVEFORM_TYPE, &mut combo).unwrap();
        assert_eq!(combo.selected_id(), ItemId(1));

        bridge.set(ParamIndex(0), 2.0);
        assert!(attachment.sync_from_param(&bridge, &mut combo));
        assert_eq!(combo.selected_text(), Some("Triangle"));

        // Already in sync
        assert!(!attachment.sync_from_param(&bridge, &mut combo));
    }

    #[test]
    fn param_outside_options_deselects() {
        let bridge = MockBridge::new();
        // Combo that only knows the first two waveforms
        let mut combo = ComboItems::new();
        wavesel_core::ItemList::new(LFO_TYPES.entries()[..2].to_vec()).apply_to(&mut combo);
        let attachment = ComboAttachment::new(&bridge, WAVEFORM_TYPE, &mut combo).unwrap();

        bridge.set(ParamIndex(0), 3.0);
        attachment.sync_from_param(&bridge, &mut combo);

        assert_eq!(combo.selected_id(), ItemId::NONE);
    }
}

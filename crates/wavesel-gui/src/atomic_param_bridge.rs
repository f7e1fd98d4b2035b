//! Standalone `ParamBridge` implementation backed by atomic floats.
//!
//! [`AtomicParamBridge`] stores parameter values in lock-free atomics,
//! mirroring the [`ParameterInfo`] index convention. The editor calls
//! `set()`, the processor side reads through `get()` or
//! [`sync_to`](AtomicParamBridge::sync_to).
//!
//! The parameter layout is fixed at construction, so no lock guards the
//! storage itself.

use std::sync::atomic::{AtomicU32, AtomicUsize, Ordering};
use wavesel_core::{ParamDescriptor, ParameterInfo};
use wavesel_gui_core::{ParamBridge, ParamIndex};

/// Thread-safe parameter bridge for the standalone host.
///
/// Values are stored as plain values (choice index for stepped parameters)
/// and clamped to each descriptor's range on write.
pub struct AtomicParamBridge {
    /// Atomic f32 values, one per parameter.
    values: Vec<AtomicU32>,
    /// Cached descriptors for display and validation.
    descriptors: Vec<ParamDescriptor>,
    /// Number of edit gestures currently open.
    open_gestures: AtomicUsize,
}

impl AtomicParamBridge {
    /// Build a bridge mirroring every parameter of `params`.
    ///
    /// Values start at the processor's current values, not the descriptor
    /// defaults, so a pre-configured processor is reflected in the editor.
    ///
    /// Bridge indices must equal processor indices, so mirroring stops at
    /// the first index without a descriptor.
    pub fn new(params: &dyn ParameterInfo) -> Self {
        let count = params.param_count();
        let descriptors: Vec<ParamDescriptor> =
            (0..count).map_while(|i| params.param_info(i)).collect();
        let values = descriptors
            .iter()
            .enumerate()
            .map(|(i, desc)| AtomicU32::new(desc.clamp(params.get_param(i)).to_bits()))
            .collect();

        if descriptors.len() < count {
            tracing::warn!(
                mirrored = descriptors.len(),
                declared = count,
                "parameter without descriptor, later parameters not bridged"
            );
        }
        tracing::debug!(params = descriptors.len(), "parameter bridge created");

        Self {
            values,
            descriptors,
            open_gestures: AtomicUsize::new(0),
        }
    }

    /// Push every bridged value into `params`.
    ///
    /// Returns the indices whose value changed.
    pub fn sync_to<P: ParameterInfo + ?Sized>(&self, params: &mut P) -> Vec<usize> {
        let mut changed = Vec::new();
        for (index, atomic_val) in self.values.iter().enumerate() {
            let val = f32::from_bits(atomic_val.load(Ordering::Acquire));
            if params.get_param(index) != val {
                params.set_param(index, val);
                changed.push(index);
            }
        }
        changed
    }

    /// Whether an edit gesture is in progress.
    pub fn is_editing(&self) -> bool {
        self.open_gestures.load(Ordering::Acquire) > 0
    }
}

impl ParamBridge for AtomicParamBridge {
    fn param_count(&self) -> usize {
        self.descriptors.len()
    }

    fn param_descriptor(&self, param: ParamIndex) -> Option<ParamDescriptor> {
        self.descriptors.get(param.0).copied()
    }

    fn get(&self, param: ParamIndex) -> f32 {
        self.values
            .get(param.0)
            .map(|v| f32::from_bits(v.load(Ordering::Acquire)))
            .unwrap_or(0.0)
    }

    fn set(&self, param: ParamIndex, value: f32) {
        if let Some((atomic, desc)) = self.values.get(param.0).zip(self.descriptors.get(param.0)) {
            let clamped = desc.clamp(value);
            atomic.store(clamped.to_bits(), Ordering::Release);
        }
    }

    fn begin_set(&self, param: ParamIndex) {
        if let Some(desc) = self.descriptors.get(param.0) {
            self.open_gestures.fetch_add(1, Ordering::AcqRel);
            tracing::debug!(param = desc.string_id, "begin edit");
        }
    }

    fn end_set(&self, param: ParamIndex) {
        if let Some(desc) = self.descriptors.get(param.0) {
            // Unbalanced end_set calls must not wrap the counter
            let _ = self
                .open_gestures
                .fetch_update(Ordering::AcqRel, Ordering::Acquire, |n| n.checked_sub(1));
            tracing::debug!(param = desc.string_id, value = self.get(param), "end edit");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wavesel_core::{LfoType, WAVEFORM_TYPE, WaveformParams};

    #[test]
    fn bridge_from_params() {
        let params = WaveformParams::new();
        let bridge = AtomicParamBridge::new(&params);

        assert_eq!(bridge.param_count(), 1);
        let desc = bridge.param_descriptor(ParamIndex(0)).unwrap();
        assert_eq!(desc.string_id, "waveformType");
        assert_eq!(bridge.find_param(WAVEFORM_TYPE), Some(ParamIndex(0)));
    }

    #[test]
    fn starts_from_current_values() {
        let mut params = WaveformParams::new();
        params.set_waveform(LfoType::Square);
        let bridge = AtomicParamBridge::new(&params);
        assert_eq!(bridge.get(ParamIndex(0)), 1.0);
    }

    #[test]
    fn get_set_clamps() {
        let bridge = AtomicParamBridge::new(&WaveformParams::new());

        bridge.set(ParamIndex(0), 3.0);
        assert_eq!(bridge.get(ParamIndex(0)), 3.0);

        bridge.set(ParamIndex(0), 999.0);
        assert_eq!(bridge.get(ParamIndex(0)), 4.0);

        bridge.set(ParamIndex(0), 1.4);
        assert_eq!(bridge.get(ParamIndex(0)), 1.0);
    }

    #[test]
    fn sync_pushes_changes() {
        let mut params = WaveformParams::new();
        let bridge = AtomicParamBridge::new(&params);

        assert!(bridge.sync_to(&mut params).is_empty());

        bridge.set(ParamIndex(0), 4.0);
        assert_eq!(bridge.sync_to(&mut params), vec![0]);
        assert_eq!(params.waveform(), LfoType::ReverseSaw);
        assert!(bridge.sync_to(&mut params).is_empty());
    }

    #[test]
    fn nan_set_settles() {
        let mut params = WaveformParams::new();
        let bridge = AtomicParamBridge::new(&params);

        bridge.set(ParamIndex(0), 3.0);
        assert_eq!(bridge.sync_to(&mut params), vec![0]);

        bridge.set(ParamIndex(0), f32::NAN);
        assert_eq!(bridge.get(ParamIndex(0)), 0.0);
        assert_eq!(bridge.sync_to(&mut params), vec![0]);
        assert_eq!(params.waveform(), LfoType::Sine);
        assert!(bridge.sync_to(&mut params).is_empty());
        assert!(bridge.sync_to(&mut params).is_empty());
    }

    /// Three declared parameters with no descriptor at index 1.
    struct GappedParams {
        values: [f32; 3],
    }

    impl ParameterInfo for GappedParams {
        fn param_count(&self) -> usize {
            3
        }

        fn param_info(&self, index: usize) -> Option<ParamDescriptor> {
            match index {
                0 | 2 => Some(ParamDescriptor::continuous("P", "P", 0.0, 10.0, 0.0)),
                _ => None,
            }
        }

        fn get_param(&self, index: usize) -> f32 {
            self.values.get(index).copied().unwrap_or(0.0)
        }

        fn set_param(&mut self, index: usize, value: f32) {
            if let Some(v) = self.values.get_mut(index) {
                *v = value;
            }
        }
    }

    #[test]
    fn descriptor_gap_keeps_indices_aligned() {
        let mut params = GappedParams {
            values: [1.0, 2.0, 3.0],
        };
        let bridge = AtomicParamBridge::new(&params);
        assert_eq!(bridge.param_count(), 1);
        assert_eq!(bridge.get(ParamIndex(0)), 1.0);

        bridge.set(ParamIndex(0), 7.0);
        assert_eq!(bridge.sync_to(&mut params), vec![0]);
        assert_eq!(params.values, [7.0, 2.0, 3.0]);
    }

    #[test]
    fn gestures_balance() {
        let bridge = AtomicParamBridge::new(&WaveformParams::new());
        assert!(!bridge.is_editing());

        bridge.begin_set(ParamIndex(0));
        assert!(bridge.is_editing());
        bridge.end_set(ParamIndex(0));
        assert!(!bridge.is_editing());

        // Extra end_set is ignored
        bridge.end_set(ParamIndex(0));
        assert!(!bridge.is_editing());
    }

    #[test]
    fn out_of_range_safe() {
        let bridge = AtomicParamBridge::new(&WaveformParams::new());

        assert_eq!(bridge.get(ParamIndex(99)), 0.0);
        assert!(bridge.param_descriptor(ParamIndex(99)).is_none());

        // These should not panic
        bridge.set(ParamIndex(99), 1.0);
        bridge.begin_set(ParamIndex(99));
        assert!(!bridge.is_editing());
    }
}

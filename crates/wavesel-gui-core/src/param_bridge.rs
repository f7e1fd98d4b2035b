//! Parameter bridge trait for decoupled GUI-to-processor parameter access.
//!
//! [`ParamBridge`] abstracts over where parameter values live, so the same
//! editor works against the standalone host (atomic floats) or a plugin
//! host's parameter store.
//!
//! ```text
//! Editor widgets ──► ParamBridge::set(param, value)
//!                          │
//!                     ┌────┴────┐
//!                     │ Atomic  │  (standalone)
//!                     │  Host   │  (plugin)
//!                     └────┬────┘
//!                          │
//! Processor ◄────── ParamBridge::get(param)
//! ```
//!
//! User edits are bracketed by [`begin_set`](ParamBridge::begin_set) /
//! [`end_set`](ParamBridge::end_set) so hosts can group them for undo and
//! automation recording.

use core::fmt;
use wavesel_core::ParamDescriptor;

/// Type-safe index into the bridge's parameter array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParamIndex(pub usize);

impl fmt::Display for ParamIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for ParamIndex {
    fn from(v: usize) -> Self {
        Self(v)
    }
}

/// Trait for bridging parameter values between the editor and the processor.
///
/// Implementations must be thread-safe: `get` and `set` may be called from
/// different threads simultaneously. Indices mirror
/// [`ParameterInfo`](wavesel_core::ParameterInfo).
pub trait ParamBridge: Send + Sync {
    /// Number of parameters.
    fn param_count(&self) -> usize;

    /// Parameter descriptor for display and validation.
    ///
    /// Returns `None` if the index is out of range.
    fn param_descriptor(&self, param: ParamIndex) -> Option<ParamDescriptor>;

    /// Read the current plain value of a parameter.
    ///
    /// Returns `0.0` if the index is out of range.
    fn get(&self, param: ParamIndex) -> f32;

    /// Write a new plain value for a parameter.
    ///
    /// Out-of-range indices are silently ignored. Values are clamped to the
    /// parameter's valid range by the implementation.
    fn set(&self, param: ParamIndex, value: f32);

    /// Start of a user edit gesture.
    fn begin_set(&self, _param: ParamIndex) {}

    /// End of a user edit gesture.
    fn end_set(&self, _param: ParamIndex) {}

    /// Find a parameter by its [`ParamDescriptor::string_id`].
    fn find_param(&self, string_id: &str) -> Option<ParamIndex> {
        (0..self.param_count())
            .map(ParamIndex)
            .find(|&i| {
                self.param_descriptor(i)
                    .is_some_and(|d| d.string_id == string_id)
            })
    }
}

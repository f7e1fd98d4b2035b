//! Parameter introspection for host-facing parameter sets.
//!
//! [`ParameterInfo`] exposes a processor's parameters by index; each one is
//! described by a [`ParamDescriptor`] carrying the metadata a host or GUI
//! needs to display, validate, and automate it:
//!
//! - [`ParamId`] — stable numeric ID for automation and host mapping
//! - `string_id` — stable textual ID that editors attach widgets by
//! - [`ParamFlags`] — capability flags (automatable, stepped, ...)
//!
//! Choice parameters (dropdowns) are stepped parameters whose plain value is
//! the 0-based index of the selected option.
//!
//! # Example
//!
//! ```rust
//! use wavesel_core::{ParameterInfo, ParamDescriptor, ParamId};
//!
//! struct Router {
//!     output: f32,
//! }
//!
//! impl ParameterInfo for Router {
//!     fn param_count(&self) -> usize { 1 }
//!
//!     fn param_info(&self, index: usize) -> Option<ParamDescriptor> {
//!         match index {
//!             0 => Some(ParamDescriptor::choice("Output", "Out", 4, 0)
//!                 .with_id(ParamId(10), "routerOutput")),
//!             _ => None,
//!         }
//!     }
//!
//!     fn get_param(&self, index: usize) -> f32 {
//!         if index == 0 { self.output } else { 0.0 }
//!     }
//!
//!     fn set_param(&mut self, index: usize, value: f32) {
//!         if let Some(desc) = self.param_info(index) {
//!             self.output = desc.clamp(value);
//!         }
//!     }
//! }
//!
//! let router = Router { output: 0.0 };
//! assert_eq!(router.find_param_by_string_id("routerOutput"), Some(0));
//! ```

/// Stable parameter identifier that survives reordering.
///
/// Once assigned, a `ParamId` must never change for a given parameter:
/// hosts record automation against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParamId(pub u32);

/// Parameter capability flags for host communication.
///
/// ```rust
/// use wavesel_core::ParamFlags;
///
/// let flags = ParamFlags::AUTOMATABLE.union(ParamFlags::STEPPED);
/// assert!(flags.contains(ParamFlags::STEPPED));
/// assert!(!flags.contains(ParamFlags::HIDDEN));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamFlags(u8);

impl ParamFlags {
    /// No flags set.
    pub const NONE: Self = Self(0);
    /// Host can automate this parameter.
    pub const AUTOMATABLE: Self = Self(1 << 0);
    /// Parameter has discrete integer steps (choices, switches).
    pub const STEPPED: Self = Self(1 << 1);
    /// Parameter should be hidden from generic host UI.
    pub const HIDDEN: Self = Self(1 << 2);

    /// Returns `true` if all bits in `other` are set in `self`.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns the union of two flag sets.
    #[inline]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
}

impl Default for ParamFlags {
    fn default() -> Self {
        Self::AUTOMATABLE
    }
}

/// Trait for processors that expose introspectable parameters.
///
/// Parameters are accessed by zero-based index, stable for the lifetime of
/// the instance. Out-of-range indices are handled gracefully: descriptors
/// are `None`, reads return `0.0`, writes are ignored.
pub trait ParameterInfo {
    /// Number of parameters. Valid indices are `0..param_count()`.
    fn param_count(&self) -> usize;

    /// Descriptor for the parameter at `index`, or `None` if out of range.
    fn param_info(&self, index: usize) -> Option<ParamDescriptor>;

    /// Current plain value of the parameter at `index`.
    fn get_param(&self, index: usize) -> f32;

    /// Set the plain value of the parameter at `index`.
    ///
    /// Implementations clamp to the descriptor's range.
    fn set_param(&mut self, index: usize, value: f32);

    /// Find a parameter index by its [`ParamDescriptor::string_id`].
    ///
    /// Exact, case-sensitive match. O(n), meant for setup paths such as
    /// attaching editor widgets.
    fn find_param_by_string_id(&self, string_id: &str) -> Option<usize> {
        (0..self.param_count())
            .find(|&i| self.param_info(i).is_some_and(|d| d.string_id == string_id))
    }
}

/// Describes a single parameter's metadata for display and validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamDescriptor {
    /// Full parameter name for display (e.g., "Waveform").
    pub name: &'static str,

    /// Short name for compact displays, max 8 characters.
    pub short_name: &'static str,

    /// Minimum allowed plain value.
    pub min: f32,

    /// Maximum allowed plain value.
    pub max: f32,

    /// Default plain value.
    pub default: f32,

    /// Recommended step increment (`1.0` for stepped parameters).
    pub step: f32,

    /// Stable numeric ID for host automation. Default: `ParamId(0)` (unassigned).
    pub id: ParamId,

    /// Stable textual ID that editors attach by (e.g., `"waveformType"`).
    ///
    /// Default: `""` (unassigned).
    pub string_id: &'static str,

    /// Capability flags. Default: [`ParamFlags::AUTOMATABLE`].
    pub flags: ParamFlags,
}

impl ParamDescriptor {
    /// Continuous parameter over `[min, max]`.
    pub fn continuous(
        name: &'static str,
        short_name: &'static str,
        min: f32,
        max: f32,
        default: f32,
    ) -> Self {
        Self {
            name,
            short_name,
            min,
            max,
            default,
            step: 0.01,
            id: ParamId(0),
            string_id: "",
            flags: ParamFlags::AUTOMATABLE,
        }
    }

    /// Stepped choice over `count` options, stored as the option index.
    ///
    /// The range is `0.0..=(count - 1)`. An empty choice collapses to the
    /// single value `0.0`.
    ///
    /// ```rust
    /// use wavesel_core::ParamDescriptor;
    ///
    /// let desc = ParamDescriptor::choice("Waveform", "Wave", 5, 0);
    /// assert_eq!(desc.max, 4.0);
    /// assert_eq!(desc.step_count(), 4);
    /// assert!(desc.is_stepped());
    /// ```
    pub fn choice(
        name: &'static str,
        short_name: &'static str,
        count: usize,
        default_index: usize,
    ) -> Self {
        let max = count.saturating_sub(1) as f32;
        Self {
            name,
            short_name,
            min: 0.0,
            max,
            default: (default_index as f32).min(max),
            step: 1.0,
            id: ParamId(0),
            string_id: "",
            flags: ParamFlags::AUTOMATABLE.union(ParamFlags::STEPPED),
        }
    }

    /// Set the stable IDs.
    pub const fn with_id(mut self, id: ParamId, string_id: &'static str) -> Self {
        self.id = id;
        self.string_id = string_id;
        self
    }

    /// Replace the capability flags.
    pub const fn with_flags(mut self, flags: ParamFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Whether the parameter only takes whole-step values.
    #[inline]
    pub const fn is_stepped(&self) -> bool {
        self.flags.contains(ParamFlags::STEPPED)
    }

    /// Number of steps between `min` and `max` for stepped parameters, `0` otherwise.
    pub fn step_count(&self) -> usize {
        if self.is_stepped() {
            libm::roundf(self.max - self.min).max(0.0) as usize
        } else {
            0
        }
    }

    /// Clamps a plain value to `[min, max]`, snapping stepped values to whole steps.
    ///
    /// NaN maps to the default value.
    ///
    /// ```rust
    /// use wavesel_core::ParamDescriptor;
    ///
    /// let desc = ParamDescriptor::choice("Waveform", "Wave", 5, 0);
    /// assert_eq!(desc.clamp(2.4), 2.0);
    /// assert_eq!(desc.clamp(-3.0), 0.0);
    /// assert_eq!(desc.clamp(99.0), 4.0);
    /// assert_eq!(desc.clamp(f32::NAN), 0.0);
    /// ```
    #[inline]
    pub fn clamp(&self, value: f32) -> f32 {
        if value.is_nan() {
            return self.default;
        }
        let value = if self.is_stepped() {
            self.min + libm::roundf(value - self.min)
        } else {
            value
        };
        if value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        }
    }

    /// Converts a plain value to the normalized range `[0, 1]`.
    #[inline]
    pub fn normalize(&self, value: f32) -> f32 {
        let range = self.max - self.min;
        if range == 0.0 {
            return 0.0;
        }
        (value - self.min) / range
    }

    /// Converts a normalized value back to the plain range.
    ///
    /// Stepped parameters snap to the nearest step.
    #[inline]
    pub fn denormalize(&self, normalized: f32) -> f32 {
        let plain = self.min + normalized * (self.max - self.min);
        if self.is_stepped() {
            self.clamp(plain)
        } else {
            plain
        }
    }
}

//! Wavesel standalone host.
//!
//! Runs the waveform editor in its own window, with an atomic parameter
//! bridge standing in for the plugin host's parameter tree.

pub mod app;
pub mod atomic_param_bridge;

pub use app::WaveselApp;
pub use atomic_param_bridge::AtomicParamBridge;

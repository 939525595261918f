//! src/form.rs
//!
//! Top-level `form` module exposing the panel registry, flag store, and toggler.

pub mod flags;
pub mod registry;
pub mod state;

/// Re-exports
pub use flags::FlagStore;
pub use registry::{Field, PanelKind, PLACEHOLDER};
pub use state::{FormState, HeightMode, OptionEntry, SharedForm};

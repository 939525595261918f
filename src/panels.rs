//! src/panels.rs
//!
//! Top-level panels module and re-exports.

pub mod constraint;
pub mod header;
pub mod help;
pub mod results;
pub mod selector;

pub use constraint::ConstraintPanel;
pub use header::HeaderPanel;
pub use help::HelpPanel;
pub use results::ResultsPanel;
pub use selector::SelectorPanel;

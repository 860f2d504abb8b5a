//! Toolbar layer of the calculator: controls, groups, width-driven
//! relocation of the options strip, and the bridge into the engine's display
//! configuration.

pub mod bridge;
pub mod catalog;
pub mod control;
pub mod engine;
pub mod error;
pub mod glyph;
pub mod group;
pub mod host;
pub mod markup;
pub mod options;
pub mod relocate;

#[cfg(test)]
pub(crate) mod testing;

pub use bridge::{BindingTable, ConfigurationBridge, Setting};
pub use catalog::{Shortcut, ToolbarKind, Toolbars};
pub use control::{ControlId, CyclicControl, ReportMode, Selection, StaticControl};
pub use engine::{AngleUnit, EngineConfig, Notation, Variable};
pub use error::ToolbarError;
pub use glyph::{Glyph, IconResolver};
pub use group::{ControlGroup, Entry, Item};
pub use host::{ClipboardOp, DigitColor, InsertKind, ToolbarHost};
pub use relocate::{LayoutPolicy, Relocation, Surface};

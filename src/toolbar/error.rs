use super::bridge::Setting;
use super::control::ControlId;
use thiserror::Error;

/// Failures surfaced by toolbar controls and the configuration bridge.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToolbarError {
    #[error("digit limit payload {0:?} is not an integer")]
    InvalidDigitLimit(String),
    #[error("integer base payload {0:?} is not an integer")]
    InvalidBase(String),
    #[error("{value} is out of range for {setting:?}")]
    SettingOutOfRange { setting: Setting, value: i64 },
    #[error("option index {index} is out of range for {len} options")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("a display option set needs at least one option")]
    EmptyOptionSet,
    #[error("control {id} is pinned to group {group:?}")]
    PinnedControl { id: ControlId, group: String },
    #[error("no control {id} in group {group:?}")]
    UnknownControl { id: ControlId, group: String },
    #[error("control {id} has no menu entry {index}")]
    UnknownMenuEntry { id: ControlId, index: usize },
}

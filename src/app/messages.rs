use crate::toolbar::{ControlId, ToolbarKind};
use iced::Size;

/// Messages emitted by the UI.
#[derive(Debug, Clone)]
pub enum Message {
    Activate(ControlId),
    OpenMenu(ControlId),
    CloseMenu,
    MenuEntry(ControlId, usize),
    SelectToolbar(ToolbarKind),
    ExpressionEdited(String),
    Pasted(Option<String>),
    WindowResized(Size),
    Accelerator(String),
}

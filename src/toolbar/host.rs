use super::engine::EngineConfig;
use std::fmt;

/// How inserted text relates to the expression being edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertKind {
    /// Operator applied to what precedes the cursor (`**2`, `&`).
    PostOperator,
    /// Function call wrapping the operand (`sqrt`, `sin`).
    Function,
    /// Literal text (`pi`, `help(sqrt)`).
    Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipboardOp {
    Copy,
    Cut,
    Paste,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl DigitColor {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for DigitColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Colours a digit button steps through; the first one is the default.
pub const DIGIT_PALETTE: [DigitColor; 8] = [
    DigitColor::rgb(0x28, 0x28, 0x28),
    DigitColor::rgb(0xd0, 0x21, 0x2d),
    DigitColor::rgb(0xf2, 0x8c, 0x28),
    DigitColor::rgb(0xc8, 0xa2, 0x00),
    DigitColor::rgb(0x3f, 0x9b, 0x35),
    DigitColor::rgb(0x1d, 0x6f, 0xc4),
    DigitColor::rgb(0x7b, 0x3f, 0xb5),
    DigitColor::rgb(0x8a, 0x8a, 0x8a),
];

/// Everything toolbar callbacks may touch in the surrounding application.
pub trait ToolbarHost {
    fn engine(&mut self) -> &mut dyn EngineConfig;

    fn insert(&mut self, kind: InsertKind, text: &str);

    fn clipboard(&mut self, op: ClipboardOp);

    fn digit_color_changed(&mut self, digit: u8, color: DigitColor);
}

//! Recording doubles for the engine and the host.

use super::engine::{AngleUnit, EngineConfig, Notation, Variable};
use super::host::{ClipboardOp, DigitColor, InsertKind, ToolbarHost};

#[derive(Debug, Clone)]
pub struct RecordingEngine {
    pub angle: Option<Variable<AngleUnit>>,
    pub notation: Notation,
    pub digit_limit: u32,
    pub integer_base: u32,
    pub notations: Vec<Notation>,
    pub digit_limits: Vec<u32>,
    pub bases: Vec<u32>,
}

impl Default for RecordingEngine {
    fn default() -> Self {
        Self {
            angle: Some(Variable::new("angle_scaling", AngleUnit::Degrees)),
            notation: Notation::Scientific,
            digit_limit: 9,
            integer_base: 10,
            notations: Vec::new(),
            digit_limits: Vec::new(),
            bases: Vec::new(),
        }
    }
}

impl EngineConfig for RecordingEngine {
    fn angle_variable(&self) -> Option<&Variable<AngleUnit>> {
        self.angle.as_ref()
    }

    fn angle_variable_mut(&mut self) -> Option<&mut Variable<AngleUnit>> {
        self.angle.as_mut()
    }

    fn notation(&self) -> Notation {
        self.notation
    }

    fn set_notation(&mut self, notation: Notation) {
        self.notation = notation;
        self.notations.push(notation);
    }

    fn digit_limit(&self) -> u32 {
        self.digit_limit
    }

    fn set_digit_limit(&mut self, digits: u32) {
        self.digit_limit = digits;
        self.digit_limits.push(digits);
    }

    fn integer_base(&self) -> u32 {
        self.integer_base
    }

    fn set_integer_base(&mut self, base: u32) {
        self.integer_base = base;
        self.bases.push(base);
    }
}

#[derive(Debug, Clone, Default)]
pub struct RecordingHost {
    pub engine: RecordingEngine,
    pub inserted: Vec<(InsertKind, String)>,
    pub clipboard: Vec<ClipboardOp>,
    pub colors: Vec<(u8, DigitColor)>,
}

impl ToolbarHost for RecordingHost {
    fn engine(&mut self) -> &mut dyn EngineConfig {
        &mut self.engine
    }

    fn insert(&mut self, kind: InsertKind, text: &str) {
        self.inserted.push((kind, text.to_string()));
    }

    fn clipboard(&mut self, op: ClipboardOp) {
        self.clipboard.push(op);
    }

    fn digit_color_changed(&mut self, digit: u8, color: DigitColor) {
        self.colors.push((digit, color));
    }
}

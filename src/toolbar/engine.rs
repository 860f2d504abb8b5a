//! The slice of the evaluation engine's configuration that the toolbars read
//! and write. The engine itself lives outside the toolbar layer.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AngleUnit {
    #[default]
    #[serde(rename = "deg")]
    Degrees,
    #[serde(rename = "rad")]
    Radians,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Notation {
    #[default]
    #[serde(rename = "sci")]
    Scientific,
    #[serde(rename = "exp")]
    Exponent,
}

impl fmt::Display for AngleUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AngleUnit::Degrees => write!(f, "deg"),
            AngleUnit::Radians => write!(f, "rad"),
        }
    }
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notation::Scientific => write!(f, "sci"),
            Notation::Exponent => write!(f, "exp"),
        }
    }
}

/// A named engine variable whose value can be reassigned in place.
#[derive(Debug, Clone, PartialEq)]
pub struct Variable<T> {
    name: String,
    pub value: T,
}

impl<T> Variable<T> {
    pub fn new(name: impl Into<String>, value: T) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Engine configuration surface used by the configuration bridge.
pub trait EngineConfig {
    /// The angle scaling variable, absent when the engine does not define it.
    fn angle_variable(&self) -> Option<&Variable<AngleUnit>>;
    fn angle_variable_mut(&mut self) -> Option<&mut Variable<AngleUnit>>;

    fn notation(&self) -> Notation;
    fn set_notation(&mut self, notation: Notation);

    fn digit_limit(&self) -> u32;
    fn set_digit_limit(&mut self, digits: u32);

    fn integer_base(&self) -> u32;
    fn set_integer_base(&mut self, base: u32);
}

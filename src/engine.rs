//! Display configuration of the calculator's evaluation engine. Only the
//! settings the toolbars drive are modelled here.

use crate::config::AppConfig;
use crate::toolbar::{AngleUnit, EngineConfig, Notation, Variable};
use std::fmt;

pub const ANGLE_VARIABLE: &str = "angle_scaling";

#[derive(Debug, Clone)]
pub struct CalcEngine {
    angle_scaling: Option<Variable<AngleUnit>>,
    notation: Notation,
    digit_limit: u32,
    integer_base: u32,
}

impl CalcEngine {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            angle_scaling: Some(Variable::new(ANGLE_VARIABLE, config.angle_unit)),
            notation: config.notation,
            digit_limit: config.digit_limit,
            integer_base: config.integer_base,
        }
    }
}

impl EngineConfig for CalcEngine {
    fn angle_variable(&self) -> Option<&Variable<AngleUnit>> {
        self.angle_scaling.as_ref()
    }

    fn angle_variable_mut(&mut self) -> Option<&mut Variable<AngleUnit>> {
        self.angle_scaling.as_mut()
    }

    fn notation(&self) -> Notation {
        self.notation
    }

    fn set_notation(&mut self, notation: Notation) {
        self.notation = notation;
    }

    fn digit_limit(&self) -> u32 {
        self.digit_limit
    }

    fn set_digit_limit(&mut self, digits: u32) {
        self.digit_limit = digits;
    }

    fn integer_base(&self) -> u32 {
        self.integer_base
    }

    fn set_integer_base(&mut self, base: u32) {
        self.integer_base = base;
    }
}

impl fmt::Display for CalcEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.angle_scaling {
            Some(angle) => write!(f, "{}", angle.value)?,
            None => write!(f, "-")?,
        }
        write!(
            f,
            " · {} · {} digits · base {}",
            self.notation, self.digit_limit, self.integer_base
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_from_config_and_reports_settings() {
        let config = AppConfig {
            angle_unit: AngleUnit::Radians,
            integer_base: 16,
            ..AppConfig::default()
        };
        let mut engine = CalcEngine::from_config(&config);
        assert_eq!(engine.angle_variable().map(Variable::name), Some(ANGLE_VARIABLE));
        assert_eq!(engine.to_string(), "rad · sci · 9 digits · base 16");

        engine.set_digit_limit(12);
        engine.set_notation(Notation::Exponent);
        assert_eq!(engine.to_string(), "rad · exp · 12 digits · base 16");
    }
}

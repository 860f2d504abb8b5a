//! Pushes cyclic-control selections into the engine configuration.

use super::engine::{AngleUnit, EngineConfig, Notation};
use super::error::ToolbarError;
use super::options::DisplayOptionSet;
use tracing::{debug, warn};

/// Engine settings a cyclic control can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Setting {
    AngleUnit,
    Notation,
    DigitLimit,
    IntegerBase,
}

/// Payload-to-engine mapping for the enumerated settings. Digit limit and
/// integer base payloads are parsed as integers instead.
#[derive(Debug, Clone, PartialEq)]
pub struct BindingTable {
    pub angle: Vec<(String, AngleUnit)>,
    pub notation: Vec<(String, Notation)>,
}

impl Default for BindingTable {
    fn default() -> Self {
        Self {
            angle: vec![
                ("deg".to_string(), AngleUnit::Degrees),
                ("rad".to_string(), AngleUnit::Radians),
            ],
            notation: vec![
                ("sci".to_string(), Notation::Scientific),
                ("exp".to_string(), Notation::Exponent),
            ],
        }
    }
}

fn lookup<T: Copy>(pairs: &[(String, T)], payload: &str) -> Option<T> {
    pairs
        .iter()
        .find(|(key, _)| key == payload)
        .map(|(_, value)| *value)
}

fn reverse_lookup<T: PartialEq>(pairs: &[(String, T)], value: &T) -> Option<String> {
    pairs
        .iter()
        .find(|(_, candidate)| candidate == value)
        .map(|(key, _)| key.clone())
}

/// Parse an integer payload for a count-like setting. Any integer is accepted
/// syntactically; values outside `u32` are rejected separately.
fn parse_count(setting: Setting, payload: &str) -> Result<u32, ToolbarError> {
    let value: i64 = payload.trim().parse().map_err(|_| match setting {
        Setting::IntegerBase => ToolbarError::InvalidBase(payload.to_string()),
        _ => ToolbarError::InvalidDigitLimit(payload.to_string()),
    })?;
    u32::try_from(value).map_err(|_| ToolbarError::SettingOutOfRange { setting, value })
}

#[derive(Debug, Clone, Default)]
pub struct ConfigurationBridge {
    table: BindingTable,
}

impl ConfigurationBridge {
    pub fn new(table: BindingTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &BindingTable {
        &self.table
    }

    /// Unknown payloads and a missing angle variable are logged and ignored.
    pub fn apply_angle_unit(&self, engine: &mut dyn EngineConfig, payload: &str) {
        let Some(unit) = lookup(&self.table.angle, payload) else {
            warn!(payload, "Unknown angle unit payload; ignoring");
            return;
        };
        let Some(variable) = engine.angle_variable_mut() else {
            warn!("Angle scaling variable not defined; ignoring");
            return;
        };
        variable.value = unit;
        debug!(variable = variable.name(), angle = %unit, "Angle scaling updated");
    }

    pub fn apply_notation(&self, engine: &mut dyn EngineConfig, payload: &str) {
        let Some(notation) = lookup(&self.table.notation, payload) else {
            warn!(payload, "Unknown notation payload; ignoring");
            return;
        };
        engine.set_notation(notation);
        debug!(notation = %engine.notation(), "Notation updated");
    }

    pub fn apply_digit_limit(
        &self,
        engine: &mut dyn EngineConfig,
        payload: &str,
    ) -> Result<(), ToolbarError> {
        let digits = parse_count(Setting::DigitLimit, payload)?;
        engine.set_digit_limit(digits);
        debug!(digit_limit = engine.digit_limit(), "Digit limit updated");
        Ok(())
    }

    pub fn apply_integer_base(
        &self,
        engine: &mut dyn EngineConfig,
        payload: &str,
    ) -> Result<(), ToolbarError> {
        let base = parse_count(Setting::IntegerBase, payload)?;
        engine.set_integer_base(base);
        debug!(integer_base = engine.integer_base(), "Integer base updated");
        Ok(())
    }

    /// Route a payload to the setter for `setting`.
    pub fn apply(
        &self,
        setting: Setting,
        engine: &mut dyn EngineConfig,
        payload: &str,
    ) -> Result<(), ToolbarError> {
        match setting {
            Setting::AngleUnit => self.apply_angle_unit(engine, payload),
            Setting::Notation => self.apply_notation(engine, payload),
            Setting::DigitLimit => self.apply_digit_limit(engine, payload)?,
            Setting::IntegerBase => self.apply_integer_base(engine, payload)?,
        }
        Ok(())
    }

    /// The payload describing the engine's current value for `setting`.
    pub fn current_payload(&self, setting: Setting, engine: &dyn EngineConfig) -> Option<String> {
        match setting {
            Setting::AngleUnit => engine
                .angle_variable()
                .and_then(|variable| reverse_lookup(&self.table.angle, &variable.value)),
            Setting::Notation => reverse_lookup(&self.table.notation, &engine.notation()),
            Setting::DigitLimit => Some(engine.digit_limit().to_string()),
            Setting::IntegerBase => Some(engine.integer_base().to_string()),
        }
    }

    /// Index of the option matching the engine's current value, or 0 when
    /// none matches.
    pub fn initial_index(
        &self,
        setting: Setting,
        options: &DisplayOptionSet,
        engine: &dyn EngineConfig,
    ) -> usize {
        let current = self.current_payload(setting, engine);
        match current.as_deref().and_then(|payload| options.position(payload)) {
            Some(index) => index,
            None => {
                debug!(?setting, ?current, "Engine value not among options; starting at 0");
                0
            }
        }
    }
}

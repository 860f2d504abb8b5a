use super::error::ToolbarError;
use super::glyph::{Glyph, IconResolver};
use std::ops::Index;

/// One selectable state of a cyclic control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayOption {
    glyph: Glyph,
    tooltip: String,
    payload: String,
}

impl DisplayOption {
    pub fn new(glyph: Glyph, tooltip: impl Into<String>, payload: impl Into<String>) -> Self {
        Self {
            glyph,
            tooltip: tooltip.into(),
            payload: payload.into(),
        }
    }

    pub fn glyph(&self) -> &Glyph {
        &self.glyph
    }

    pub fn tooltip(&self) -> &str {
        &self.tooltip
    }

    pub fn payload(&self) -> &str {
        &self.payload
    }
}

/// Static description of an option; the markup doubles as the payload.
#[derive(Debug, Clone, Copy)]
pub struct OptionSpec {
    pub icon: &'static str,
    pub markup: &'static str,
    pub tooltip: Option<&'static str>,
}

impl OptionSpec {
    pub const fn new(icon: &'static str, markup: &'static str) -> Self {
        Self {
            icon,
            markup,
            tooltip: None,
        }
    }

    pub const fn with_tooltip(mut self, tooltip: &'static str) -> Self {
        self.tooltip = Some(tooltip);
        self
    }
}

/// Ordered, non-empty list of options. Index 0 is the initial selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayOptionSet {
    options: Vec<DisplayOption>,
}

impl DisplayOptionSet {
    pub fn new(options: Vec<DisplayOption>) -> Result<Self, ToolbarError> {
        if options.is_empty() {
            return Err(ToolbarError::EmptyOptionSet);
        }
        Ok(Self { options })
    }

    /// Build a set from static specs, resolving each icon once. Options
    /// without their own tooltip use `description`.
    pub fn resolve(
        specs: &[OptionSpec],
        description: &str,
        icons: &dyn IconResolver,
    ) -> Result<Self, ToolbarError> {
        Self::new(
            specs
                .iter()
                .map(|spec| {
                    DisplayOption::new(
                        Glyph::resolve(spec.icon, Some(spec.markup), icons),
                        spec.tooltip.unwrap_or(description),
                        spec.markup,
                    )
                })
                .collect(),
        )
    }

    pub fn at(&self, index: usize) -> Result<&DisplayOption, ToolbarError> {
        self.options.get(index).ok_or(ToolbarError::IndexOutOfRange {
            index,
            len: self.options.len(),
        })
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Always false; construction rejects empty sets.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn position(&self, payload: &str) -> Option<usize> {
        self.options
            .iter()
            .position(|option| option.payload == payload)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DisplayOption> {
        self.options.iter()
    }
}

impl Index<usize> for DisplayOptionSet {
    type Output = DisplayOption;

    fn index(&self, index: usize) -> &DisplayOption {
        &self.options[index]
    }
}

use crate::toolbar::relocate::{DEFAULT_GRID_CELL_SIZE, DEFAULT_THRESHOLD_CELLS};
use crate::toolbar::{AngleUnit, LayoutPolicy, Notation};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_DIGIT_LIMIT: u32 = 9;
pub const DEFAULT_INTEGER_BASE: u32 = 10;

/// Runtime configuration, flat form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub grid_cell_size: f32,
    pub threshold_cells: f32,
    pub window_width: f32,
    pub window_height: f32,
    pub icon_paths: Vec<PathBuf>,
    pub angle_unit: AngleUnit,
    pub notation: Notation,
    pub digit_limit: u32,
    pub integer_base: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            grid_cell_size: DEFAULT_GRID_CELL_SIZE,
            threshold_cells: DEFAULT_THRESHOLD_CELLS,
            window_width: 1200.0,
            window_height: 420.0,
            icon_paths: vec![PathBuf::from("icons")],
            angle_unit: AngleUnit::Degrees,
            notation: Notation::Scientific,
            digit_limit: DEFAULT_DIGIT_LIMIT,
            integer_base: DEFAULT_INTEGER_BASE,
        }
    }
}

impl AppConfig {
    pub fn layout_policy(&self) -> LayoutPolicy {
        LayoutPolicy {
            grid_cell_size: self.grid_cell_size,
            threshold_cells: self.threshold_cells,
        }
    }
}

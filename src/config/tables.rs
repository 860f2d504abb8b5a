use super::models::AppConfig;
use crate::toolbar::{AngleUnit, Notation};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Sectioned on-disk form of [`AppConfig`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigTables {
    #[serde(default)]
    pub layout: LayoutTable,
    #[serde(default)]
    pub icons: IconsTable,
    #[serde(default)]
    pub engine: EngineTable,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutTable {
    pub grid_cell_size: f32,
    pub threshold_cells: f32,
    pub window_width: f32,
    pub window_height: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IconsTable {
    pub paths: Vec<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineTable {
    pub angle_unit: AngleUnit,
    pub notation: Notation,
    pub digit_limit: u32,
    pub integer_base: u32,
}

impl Default for LayoutTable {
    fn default() -> Self {
        let base = AppConfig::default();
        Self {
            grid_cell_size: base.grid_cell_size,
            threshold_cells: base.threshold_cells,
            window_width: base.window_width,
            window_height: base.window_height,
        }
    }
}

impl Default for IconsTable {
    fn default() -> Self {
        Self {
            paths: AppConfig::default().icon_paths,
        }
    }
}

impl Default for EngineTable {
    fn default() -> Self {
        let base = AppConfig::default();
        Self {
            angle_unit: base.angle_unit,
            notation: base.notation,
            digit_limit: base.digit_limit,
            integer_base: base.integer_base,
        }
    }
}

impl From<ConfigTables> for AppConfig {
    fn from(tables: ConfigTables) -> Self {
        Self {
            grid_cell_size: tables.layout.grid_cell_size,
            threshold_cells: tables.layout.threshold_cells,
            window_width: tables.layout.window_width,
            window_height: tables.layout.window_height,
            icon_paths: tables.icons.paths,
            angle_unit: tables.engine.angle_unit,
            notation: tables.engine.notation,
            digit_limit: tables.engine.digit_limit,
            integer_base: tables.engine.integer_base,
        }
    }
}

impl From<&AppConfig> for ConfigTables {
    fn from(config: &AppConfig) -> Self {
        Self {
            layout: LayoutTable {
                grid_cell_size: config.grid_cell_size,
                threshold_cells: config.threshold_cells,
                window_width: config.window_width,
                window_height: config.window_height,
            },
            icons: IconsTable {
                paths: config.icon_paths.clone(),
            },
            engine: EngineTable {
                angle_unit: config.angle_unit,
                notation: config.notation,
                digit_limit: config.digit_limit,
                integer_base: config.integer_base,
            },
        }
    }
}

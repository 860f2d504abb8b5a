use super::models::AppConfig;
use super::tables::ConfigTables;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// On-disk shape of a config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigLayout {
    /// `[layout]`, `[icons]` and `[engine]` tables.
    Sectioned,
    /// Bare `key = value` pairs mirroring [`AppConfig`].
    Flat,
}

impl ConfigLayout {
    fn detect(document: &toml::Table) -> Self {
        if document.values().any(toml::Value::is_table) {
            ConfigLayout::Sectioned
        } else {
            ConfigLayout::Flat
        }
    }
}

/// Load configuration from the given path. Missing or invalid files yield the
/// defaults and a warning.
pub fn load_config(path: &Path) -> AppConfig {
    let contents = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(err) => {
            warn!(path = %path.display(), "Config not readable, using defaults: {err}");
            return AppConfig::default();
        }
    };

    match parse_config(&contents) {
        Ok(cfg) => {
            info!(path = %path.display(), "Loaded calculator config");
            debug!(?cfg, "Effective configuration");
            cfg
        }
        Err(err) => {
            warn!(path = %path.display(), "Invalid config, using defaults: {err}");
            AppConfig::default()
        }
    }
}

/// Parse either layout. The layout is decided from the document's shape, so a
/// bad value inside a table is reported instead of being read as a flat file.
pub fn parse_config(contents: &str) -> Result<AppConfig, toml::de::Error> {
    let document: toml::Table = contents.parse()?;
    let layout = ConfigLayout::detect(&document);
    debug!(?layout, "Detected config layout");
    match layout {
        ConfigLayout::Sectioned => Ok(toml::from_str::<ConfigTables>(contents)?.into()),
        ConfigLayout::Flat => toml::from_str(contents),
    }
}

pub fn serialize_config(config: &AppConfig) -> Result<String, toml::ser::Error> {
    toml::to_string(&ConfigTables::from(config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toolbar::{AngleUnit, Notation};
    use std::io::Write;
    use std::path::PathBuf;

    #[test]
    fn parses_sectioned_config() {
        let cfg = parse_config(
            r#"
            [layout]
            grid_cell_size = 55.0

            [icons]
            paths = ["/usr/share/icons/calc"]

            [engine]
            angle_unit = "rad"
            notation = "exp"
            integer_base = 16
            "#,
        )
        .unwrap();
        assert_eq!(cfg.grid_cell_size, 55.0);
        assert_eq!(cfg.threshold_cells, 14.0);
        assert_eq!(cfg.icon_paths, [PathBuf::from("/usr/share/icons/calc")]);
        assert_eq!(cfg.angle_unit, AngleUnit::Radians);
        assert_eq!(cfg.notation, Notation::Exponent);
        assert_eq!(cfg.integer_base, 16);
        assert_eq!(cfg.digit_limit, 9);
    }

    #[test]
    fn bad_value_in_a_section_is_an_error() {
        let err = parse_config(
            "[layout]\ngrid_cell_size = 55.0\n\n[engine]\nangle_unit = \"grad\"\n",
        );
        assert!(err.is_err());

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("calc.toml");
        std::fs::write(&path, "[layout]\nthreshold_cells = 10.0\n[engine]\ndigit_limit = -3\n")
            .unwrap();
        assert_eq!(load_config(&path), AppConfig::default());
    }

    #[test]
    fn unknown_keys_are_rejected_in_both_layouts() {
        assert!(parse_config("[layout]\ngrid_size = 55.0\n").is_err());
        assert!(parse_config("[logging]\nlevel = \"debug\"\n").is_err());
        assert!(parse_config("threshold_cels = 10.0\n").is_err());
        assert_eq!(parse_config("").unwrap(), AppConfig::default());
    }

    #[test]
    fn parses_flat_config() {
        let cfg = parse_config("threshold_cells = 10.0\ndigit_limit = 12\n").unwrap();
        assert_eq!(cfg.threshold_cells, 10.0);
        assert_eq!(cfg.digit_limit, 12);
        assert_eq!(cfg.layout_policy().width_threshold(), 750.0);
    }

    #[test]
    fn serialized_config_is_sectioned() {
        let mut cfg = AppConfig::default();
        cfg.notation = Notation::Exponent;
        let text = serialize_config(&cfg).unwrap();
        assert!(text.contains("[layout]"));
        assert!(text.contains("[engine]"));
        assert!(text.contains("notation = \"exp\""));
        assert_eq!(parse_config(&text).unwrap(), cfg);
    }

    #[test]
    fn missing_or_invalid_files_fall_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(load_config(&dir.path().join("absent.toml")), AppConfig::default());

        let path = dir.path().join("broken.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[layout\ngrid_cell_size = [").unwrap();
        assert_eq!(load_config(&path), AppConfig::default());
    }
}

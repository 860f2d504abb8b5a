//! File-based icon theme: an icon named `algebra-sqrt` is drawn from
//! `algebra-sqrt.svg` or `algebra-sqrt.png` in the first search path that has
//! it. Directories are indexed once when the theme is created.

use crate::toolbar::IconResolver;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconFormat {
    Svg,
    Png,
}

#[derive(Debug, Clone)]
struct IndexedIcon {
    dir_rank: usize,
    path: PathBuf,
    format: IconFormat,
}

#[derive(Debug, Clone, Default)]
pub struct IconTheme {
    icons: HashMap<String, IndexedIcon>,
}

impl IconTheme {
    pub fn new(search_paths: Vec<PathBuf>) -> Self {
        let mut icons: HashMap<String, IndexedIcon> = HashMap::new();
        for (dir_rank, dir) in search_paths.iter().enumerate() {
            let entries = match fs::read_dir(dir) {
                Ok(entries) => entries,
                Err(err) => {
                    debug!(path = %dir.display(), "Skipping icon directory: {err}");
                    continue;
                }
            };
            for entry in entries {
                let path = match entry {
                    Ok(entry) => entry.path(),
                    Err(err) => {
                        warn!(path = %dir.display(), "Unreadable icon directory entry: {err}");
                        continue;
                    }
                };
                let Some((name, format)) = icon_name(&path) else {
                    continue;
                };
                let candidate = IndexedIcon {
                    dir_rank,
                    path,
                    format,
                };
                match icons.get(&name) {
                    Some(existing) if !prefer(&candidate, existing) => {}
                    _ => {
                        icons.insert(name, candidate);
                    }
                }
            }
        }
        info!(
            directories = search_paths.len(),
            icons = icons.len(),
            "Indexed icon theme"
        );
        Self { icons }
    }

    pub fn lookup(&self, name: &str) -> Option<(&Path, IconFormat)> {
        self.icons
            .get(name)
            .map(|icon| (icon.path.as_path(), icon.format))
    }
}

/// Earlier directories win; within one directory SVG beats PNG.
fn prefer(candidate: &IndexedIcon, existing: &IndexedIcon) -> bool {
    candidate.dir_rank < existing.dir_rank
        || (candidate.dir_rank == existing.dir_rank
            && candidate.format == IconFormat::Svg
            && existing.format == IconFormat::Png)
}

fn icon_name(path: &Path) -> Option<(String, IconFormat)> {
    if !path.is_file() {
        return None;
    }
    let format = match path.extension()?.to_str()? {
        "svg" => IconFormat::Svg,
        "png" => IconFormat::Png,
        _ => return None,
    };
    let stem = path.file_stem()?.to_str()?;
    if stem.is_empty() || stem.starts_with('.') {
        return None;
    }
    Some((stem.to_string(), format))
}

impl IconResolver for IconTheme {
    fn icon_exists(&self, name: &str) -> bool {
        self.icons.contains_key(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn earlier_directories_win_and_svg_beats_png() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        fs::write(second.path().join("plot.svg"), "<svg/>").unwrap();
        fs::write(first.path().join("plot.png"), [0u8; 4]).unwrap();
        fs::write(second.path().join("base-16.png"), [0u8; 4]).unwrap();
        fs::write(second.path().join("base-16.svg"), "<svg/>").unwrap();
        fs::write(second.path().join("notes.txt"), "not an icon").unwrap();

        let theme = IconTheme::new(vec![
            first.path().to_path_buf(),
            PathBuf::from("/nonexistent/icon/dir"),
            second.path().to_path_buf(),
        ]);
        let plot = first.path().join("plot.png");
        assert_eq!(theme.lookup("plot"), Some((plot.as_path(), IconFormat::Png)));
        let base = second.path().join("base-16.svg");
        assert_eq!(theme.lookup("base-16"), Some((base.as_path(), IconFormat::Svg)));
        assert!(!theme.icon_exists("notes"));
        assert!(!theme.icon_exists("base-8"));
    }

    #[test]
    fn hidden_and_empty_names_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(".svg"), "<svg/>").unwrap();
        fs::write(dir.path().join(".hidden.svg"), "<svg/>").unwrap();
        let theme = IconTheme::new(vec![dir.path().to_path_buf()]);
        assert!(!theme.icon_exists(""));
        assert!(!theme.icon_exists(".hidden"));
    }
}

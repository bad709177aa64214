use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use directories::BaseDirs;
use flex_core::fuel::ComparisonRecord;
use tracing::warn;

pub const HISTORY_FILE: &str = "history.json";

pub fn data_dir() -> Option<PathBuf> {
    let base = BaseDirs::new()?;
    Some(base.data_dir().join("flexfuel"))
}

/// The single persisted location: one JSON array of records.
pub fn history_path() -> Option<PathBuf> {
    Some(data_dir()?.join(HISTORY_FILE))
}

/// Read the stored history. A missing file means an empty history; a
/// file that no longer parses is treated the same, with a warning, so a
/// damaged install never blocks startup.
pub fn load_history(path: &Path) -> Vec<ComparisonRecord> {
    if !path.exists() {
        return Vec::new();
    }
    let data = match fs::read(path) {
        Ok(d) => d,
        Err(e) => {
            warn!(target: "persist", "unreadable history {}: {}", path.display(), e);
            return Vec::new();
        }
    };
    match serde_json::from_slice(&data) {
        Ok(records) => records,
        Err(e) => {
            warn!(
                target: "persist",
                "malformed history {}: {}; starting empty",
                path.display(),
                e
            );
            Vec::new()
        }
    }
}

/// Overwrite the stored history with the full record list. Writes to a
/// sibling tmp file first and renames over the target so a crash cannot
/// leave a half-written file behind.
pub fn save_history(path: &Path, records: &[ComparisonRecord]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).ok();
    }
    let data = serde_json::to_vec_pretty(records)?;
    let mut tmp = path.to_path_buf();
    tmp.set_extension("json.tmp");
    {
        let mut f =
            fs::File::create(&tmp).with_context(|| format!("create tmp: {}", tmp.display()))?;
        f.write_all(&data)?;
        f.flush()?;
    }
    fs::rename(&tmp, path).with_context(|| format!("persist history to {}", path.display()))?;
    Ok(())
}

/// Delete the stored history. Removing an already-absent file is fine.
pub fn clear_history(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path).with_context(|| format!("remove {}", path.display()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use flex_core::fuel::{ComparisonRecord, Outcome};
    use tempfile::TempDir;

    fn temp_history() -> (TempDir, PathBuf) {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join(HISTORY_FILE);
        (dir, path)
    }

    #[test]
    fn load_missing_file_is_empty() {
        let (_dir, path) = temp_history();
        assert!(load_history(&path).is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let (_dir, path) = temp_history();
        let records = vec![
            ComparisonRecord::new("4.79", "6.15", Outcome::Gasoline),
            ComparisonRecord::new("3.50", "5.00", Outcome::Ethanol),
        ];
        save_history(&path, &records).expect("save");
        let loaded = load_history(&path);
        assert_eq!(loaded, records);
    }

    #[test]
    fn save_overwrites_previous_contents() {
        let (_dir, path) = temp_history();
        let first = vec![ComparisonRecord::new("3.50", "5.00", Outcome::Ethanol)];
        save_history(&path, &first).expect("save first");
        let second = vec![
            ComparisonRecord::new("4.79", "6.15", Outcome::Gasoline),
            ComparisonRecord::new("3.50", "5.00", Outcome::Ethanol),
        ];
        save_history(&path, &second).expect("save second");
        assert_eq!(load_history(&path), second);
    }

    #[test]
    fn clear_removes_the_file() {
        let (_dir, path) = temp_history();
        let records = vec![ComparisonRecord::new("3.50", "5.00", Outcome::Ethanol)];
        save_history(&path, &records).expect("save");
        clear_history(&path).expect("clear");
        assert!(!path.exists());
        assert!(load_history(&path).is_empty());
    }

    #[test]
    fn clear_on_missing_file_is_ok() {
        let (_dir, path) = temp_history();
        clear_history(&path).expect("clear without file");
    }

    #[test]
    fn malformed_file_loads_as_empty() {
        let (_dir, path) = temp_history();
        fs::write(&path, b"{ not json").expect("write garbage");
        assert!(load_history(&path).is_empty());
    }

    #[test]
    fn stored_shape_uses_wire_field_names() {
        let (_dir, path) = temp_history();
        let records = vec![ComparisonRecord::new("3.50", "5.00", Outcome::Ethanol)];
        save_history(&path, &records).expect("save");
        let raw = fs::read_to_string(&path).expect("read back");
        for key in ["alcool", "gasolina", "resultado", "data"] {
            assert!(raw.contains(key), "missing key {key}");
        }
    }
}

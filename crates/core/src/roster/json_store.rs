use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::roster::player::Roster;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("failed to read roster {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed roster {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to serialize roster: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("failed to write roster {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Loads a roster from a UTF-8 JSON file.
pub fn load(path: &Path) -> Result<Roster, RosterError> {
    let text = fs::read_to_string(path).map_err(|source| RosterError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| RosterError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes a roster as two-space-indented JSON, creating parent directories.
///
/// Non-ASCII names are written as-is rather than `\u` escaped.
pub fn save(roster: &Roster, path: &Path) -> Result<(), RosterError> {
    let json = serde_json::to_string_pretty(roster).map_err(RosterError::Serialize)?;
    let write_err = |source| RosterError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_err)?;
    }
    fs::write(path, json).map_err(write_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::player::Player;

    #[test]
    fn test_load_reads_players() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("players.json");
        fs::write(&path, r#"{"players":[{"name":"A"},{"name":"요정"}]}"#).unwrap();

        let roster = load(&path).unwrap();
        assert_eq!(roster.players.len(), 2);
        assert_eq!(roster.players[1].name, "요정");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, RosterError::Read { .. }));
    }

    #[test]
    fn test_load_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("players.json");
        fs::write(&path, "{\"players\": [").unwrap();
        let err = load(&path).unwrap_err();
        assert!(matches!(err, RosterError::Parse { .. }));
    }

    #[test]
    fn test_load_without_players_field_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("players.json");
        fs::write(&path, "{\"teams\": []}").unwrap();
        assert!(matches!(load(&path), Err(RosterError::Parse { .. })));
    }

    #[test]
    fn test_save_pretty_prints_unescaped_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("players_updated.json");
        let roster = Roster::new(vec![Player::new("여울 シ")]);

        save(&roster, &path).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("여울 シ"));
        assert!(text.contains("\n  \"players\": ["));
        assert_eq!(load(&path).unwrap(), roster);
    }
}

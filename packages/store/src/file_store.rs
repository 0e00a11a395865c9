//! # File-backed session storage
//!
//! [`FileStorage`] keeps each key in its own JSON file so native builds keep the
//! session across restarts.
//!
//! ```text
//! <base_dir>/
//! └── <key>.json
//! ```
//!
//! [`FileStorage::default_location`] resolves `<data_dir>/ctn` via [`dirs::data_dir()`]:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS | `~/Library/Application Support/ctn/` |
//! | Linux | `~/.local/share/ctn/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\ctn\` |

use std::path::PathBuf;

use crate::session::SessionStorage;

#[derive(Clone, Debug)]
pub struct FileStorage {
    base: PathBuf,
}

impl FileStorage {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    /// Storage under the platform data directory, if one exists.
    pub fn default_location() -> Option<Self> {
        dirs::data_dir().map(|dir| Self::new(dir.join("ctn")))
    }

    fn path(&self, key: &str) -> PathBuf {
        let name: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        self.base.join(format!("{name}.json"))
    }
}

impl SessionStorage for FileStorage {
    fn load(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.path(key)).ok()
    }

    fn save(&self, key: &str, value: &str) {
        let path = self.path(key);
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        if let Err(e) = std::fs::write(&path, value) {
            tracing::warn!(path = %path.display(), error = %e, "could not write session file");
        }
    }

    fn clear(&self, key: &str) {
        let _ = std::fs::remove_file(self.path(key));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Role, Session};
    use crate::session::SessionStore;

    #[test]
    fn test_file_storage_survives_reopen() {
        let dir = std::env::temp_dir().join(format!("ctn_session_test_{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);

        let mut store = SessionStore::hydrate(FileStorage::new(dir.clone()), "ctn-user");
        store.set(Session {
            id: "a7".into(),
            fullname: "Karim".into(),
            email: "karim@ctn.tn".into(),
            role: Role::Agent,
            action: Some("export_manager".into()),
            created_at: None,
            updated_at: None,
        });
        assert!(dir.join("ctn-user.json").exists());

        let reopened = SessionStore::hydrate(FileStorage::new(dir.clone()), "ctn-user");
        assert_eq!(reopened.current().map(|s| s.role), Some(Role::Agent));

        let mut reopened = reopened;
        reopened.clear();
        assert!(!dir.join("ctn-user.json").exists());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_missing_file_is_absent() {
        let storage = FileStorage::new(std::env::temp_dir().join("ctn_session_never_written"));
        assert!(storage.load("nope").is_none());
    }
}

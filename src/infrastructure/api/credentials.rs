#[cfg(test)]
#[path = "credentials_test.rs"]
mod tests;

use std::fs;
use std::path;
use std::sync::Mutex;

use crate::configuration::Config;
use crate::configuration::ConfigKey;

/// Opaque storage for the bearer credential. The credential is never
/// validated or inspected, sessions read it right before each send.
pub trait CredentialStore: Send + Sync {
    fn get(&self) -> String;
    fn set(&self, value: &str);
}

pub type CredentialStoreBox = Box<dyn CredentialStore>;

/// Process-wide store backed by [`Config`], fed by flags, env vars and the
/// config file. Used when the credential is supplied up front.
#[derive(Default)]
pub struct ConfigCredentialStore {}

impl CredentialStore for ConfigCredentialStore {
    fn get(&self) -> String {
        return Config::get(ConfigKey::ApiToken);
    }

    fn set(&self, value: &str) {
        Config::set(ConfigKey::ApiToken, value);
    }
}

/// Plain-file store so a credential entered once survives across runs.
pub struct FileCredentialStore {
    path: path::PathBuf,
}

impl Default for FileCredentialStore {
    fn default() -> FileCredentialStore {
        let dir = dirs::config_dir()
            .unwrap_or_else(|| return path::PathBuf::from("."))
            .join("contextlab");

        return FileCredentialStore {
            path: dir.join("credential"),
        };
    }
}

impl FileCredentialStore {
    pub fn with_path(path: path::PathBuf) -> FileCredentialStore {
        return FileCredentialStore { path };
    }
}

impl CredentialStore for FileCredentialStore {
    fn get(&self) -> String {
        return fs::read_to_string(&self.path)
            .map(|value| return value.trim().to_string())
            .unwrap_or_default();
    }

    fn set(&self, value: &str) {
        if let Some(parent) = self.path.parent() {
            if let Err(err) = fs::create_dir_all(parent) {
                tracing::warn!(error = ?err, "unable to create credential directory");
                return;
            }
        }

        if let Err(err) = fs::write(&self.path, value) {
            tracing::warn!(error = ?err, "unable to persist credential");
        }
    }
}

/// In-memory store for tests and library consumers that manage the
/// credential themselves.
#[derive(Default)]
pub struct MemoryCredentialStore {
    value: Mutex<String>,
}

impl MemoryCredentialStore {
    pub fn with_value(value: &str) -> MemoryCredentialStore {
        return MemoryCredentialStore {
            value: Mutex::new(value.to_string()),
        };
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn get(&self) -> String {
        return self.value.lock().unwrap().clone();
    }

    fn set(&self, value: &str) {
        *self.value.lock().unwrap() = value.to_string();
    }
}

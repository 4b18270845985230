use anyhow::{Context, Result};
use sked_core::manager::ScheduleManager;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Where the CLI keeps its schedules between runs.
pub trait ScheduleStore {
    /// Loads the saved schedules, or a fresh manager when nothing was saved yet.
    fn load(&self) -> Result<ScheduleManager>;
    fn save(&self, manager: &ScheduleManager) -> Result<()>;
}

/// Pretty-printed JSON snapshot of the whole [`ScheduleManager`].
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScheduleStore for JsonFileStore {
    fn load(&self) -> Result<ScheduleManager> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no saved state, starting fresh");
            return Ok(ScheduleManager::new());
        }
        let json = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        let manager = ScheduleManager::from_json(&json)
            .with_context(|| format!("Failed to load schedules from {}", self.path.display()))?;
        Ok(manager)
    }

    fn save(&self, manager: &ScheduleManager) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(&self.path, manager.to_json()?)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        info!(path = %self.path.display(), "schedules saved");
        Ok(())
    }
}

/// Keeps state in memory; used by command tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStore {
    manager: std::cell::RefCell<Option<ScheduleManager>>,
}

#[cfg(test)]
impl MemoryStore {
    pub fn snapshot(&self) -> ScheduleManager {
        self.manager.borrow().clone().unwrap_or_default()
    }
}

#[cfg(test)]
impl ScheduleStore for MemoryStore {
    fn load(&self) -> Result<ScheduleManager> {
        Ok(self.snapshot())
    }

    fn save(&self, manager: &ScheduleManager) -> Result<()> {
        *self.manager.borrow_mut() = Some(manager.clone());
        Ok(())
    }
}

//! Process-wide registry of named loggers
//!
//! The global registry is created on first use and lives until the process
//! exits; it is never reset. Looking a name up twice yields the same
//! [`Logger`], so configuring a handle through one caller affects every
//! other caller using that name. Use distinct names for isolation.
//!
//! Names form a dotted hierarchy: `"app.db"` has `"app"` as its parent if
//! that logger exists, otherwise the root logger.

use super::{log_level::LogLevel, logger::Logger};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

/// Name of the logger selected when no name is given
pub const ROOT_LOGGER_NAME: &str = "root";

static GLOBAL_REGISTRY: OnceLock<LoggerRegistry> = OnceLock::new();

/// The process-wide registry
pub fn global() -> &'static LoggerRegistry {
    GLOBAL_REGISTRY.get_or_init(LoggerRegistry::new)
}

/// Get (creating if needed) a logger from the process-wide registry
pub fn get_logger(name: Option<&str>) -> Arc<Logger> {
    global().get(name)
}

pub struct LoggerRegistry {
    root: Arc<Logger>,
    loggers: Mutex<HashMap<String, Arc<Logger>>>,
}

impl LoggerRegistry {
    /// A fresh registry whose root logger starts at `Warning` with no
    /// destinations.
    pub fn new() -> Self {
        let root = Logger::new(ROOT_LOGGER_NAME);
        root.set_level(LogLevel::Warning);
        Self {
            root: Arc::new(root),
            loggers: Mutex::new(HashMap::new()),
        }
    }

    pub fn root(&self) -> Arc<Logger> {
        Arc::clone(&self.root)
    }

    /// Return the logger registered under `name`, creating it if absent.
    ///
    /// `None`, the empty string and `"root"` all select the root logger.
    pub fn get(&self, name: Option<&str>) -> Arc<Logger> {
        let name = match name {
            None | Some("") | Some(ROOT_LOGGER_NAME) => return self.root(),
            Some(name) => name,
        };

        let mut loggers = self.loggers.lock();
        if let Some(existing) = loggers.get(name) {
            return Arc::clone(existing);
        }

        let logger = Arc::new(Logger::new(name));
        logger.set_parent(Some(self.nearest_ancestor(&loggers, name)));

        // Existing descendants whose nearest ancestor sat above the new
        // logger are re-parented onto it.
        let prefix = format!("{}.", name);
        for (existing_name, existing) in loggers.iter() {
            if !existing_name.starts_with(&prefix) {
                continue;
            }
            let reparent = existing.parent().map_or(true, |parent| {
                Arc::ptr_eq(&parent, &self.root) || parent.name().len() < name.len()
            });
            if reparent {
                existing.set_parent(Some(Arc::clone(&logger)));
            }
        }

        loggers.insert(name.to_string(), Arc::clone(&logger));
        logger
    }

    /// Look a logger up without creating it; `""` and `"root"` give the root
    pub fn lookup(&self, name: &str) -> Option<Arc<Logger>> {
        if name.is_empty() || name == ROOT_LOGGER_NAME {
            return Some(self.root());
        }
        self.loggers.lock().get(name).cloned()
    }

    /// Names of all registered loggers except the root, sorted
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.loggers.lock().keys().cloned().collect();
        names.sort();
        names
    }

    fn nearest_ancestor(&self, loggers: &HashMap<String, Arc<Logger>>, name: &str) -> Arc<Logger> {
        let mut current = name;
        while let Some((ancestor, _)) = current.rsplit_once('.') {
            if let Some(found) = loggers.get(ancestor) {
                return Arc::clone(found);
            }
            current = ancestor;
        }
        self.root()
    }
}

impl Default for LoggerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Shared Configuration
// Process-wide configuration store guarded by a reader-writer lock
// ============================================================================

use super::Config;
use crate::number::BigNumberResult;
use parking_lot::RwLock;
use std::sync::Arc;

/// A configuration shared between threads.
///
/// Writers go through [`SharedConfig::update`], which validates the edited
/// copy before publishing it. Readers take a [`SharedConfig::snapshot`] and
/// pass it to operations, so a computation never observes a half-applied
/// change.
#[derive(Debug, Clone, Default)]
pub struct SharedConfig {
    inner: Arc<RwLock<Config>>,
}

impl SharedConfig {
    /// Wrap an initial configuration.
    pub fn new(config: Config) -> BigNumberResult<Self> {
        config.validate()?;
        Ok(Self {
            inner: Arc::new(RwLock::new(config)),
        })
    }

    /// Clone the current configuration.
    pub fn snapshot(&self) -> Config {
        self.inner.read().clone()
    }

    /// Apply `edit` to a copy and publish it if it validates.
    ///
    /// The stored configuration is left untouched when `edit` or the
    /// validation fails.
    pub fn update<F>(&self, edit: F) -> BigNumberResult<Config>
    where
        F: FnOnce(&mut Config) -> BigNumberResult<()>,
    {
        let mut guard = self.inner.write();
        let mut next = guard.clone();
        edit(&mut next)?;
        next.validate()?;
        *guard = next.clone();
        tracing::debug!(
            decimal_places = next.decimal_places,
            rounding_mode = %next.rounding_mode,
            "configuration updated"
        );
        Ok(next)
    }

    /// Replace the whole configuration.
    pub fn replace(&self, config: Config) -> BigNumberResult<()> {
        config.validate()?;
        *self.inner.write() = config;
        Ok(())
    }
}

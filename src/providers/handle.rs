// providers/handle.rs
//
// Shared slot for a loaded model engine. Model weights are expensive to
// load, so an engine is initialized once per process and the handle is
// cloned into every collaborator that needs it, as an explicitly passed
// replacement for an ambient global.

use std::sync::Arc;

use log::info;
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::{FusionError, Result};

/// An explicitly passed, process-wide slot for a loaded engine.
///
/// Lifecycle: created empty, initialized exactly once, then shared by
/// cloning (clones point at the same slot). A second `initialize` fails
/// with `AlreadyInitialized` rather than silently replacing loaded weights.
#[derive(Debug)]
pub struct ModelHandle<T> {
    slot: Arc<RwLock<Option<T>>>,
    what: &'static str,
}

impl<T> Clone for ModelHandle<T> {
    fn clone(&self) -> Self {
        Self {
            slot: self.slot.clone(),
            what: self.what,
        }
    }
}

impl<T> ModelHandle<T> {
    /// Create an empty handle. `what` names the engine in logs and errors.
    pub fn empty(what: &'static str) -> Self {
        Self {
            slot: Arc::new(RwLock::new(None)),
            what,
        }
    }

    /// Install the loaded engine. Fails if the slot is already occupied.
    pub async fn initialize(&self, engine: T) -> Result<()> {
        let mut guard = self.slot.write().await;
        if guard.is_some() {
            return Err(FusionError::AlreadyInitialized { what: self.what });
        }

        *guard = Some(engine);
        info!("{} initialized", self.what);

        Ok(())
    }

    pub async fn is_initialized(&self) -> bool {
        self.slot.read().await.is_some()
    }

    /// Read access to the slot; `None` inside means not yet initialized.
    pub async fn read(&self) -> RwLockReadGuard<'_, Option<T>> {
        self.slot.read().await
    }

    /// Write access to the slot, for engines with interior session state.
    pub async fn write(&self) -> RwLockWriteGuard<'_, Option<T>> {
        self.slot.write().await
    }

    pub fn name(&self) -> &'static str {
        self.what
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_initialize_once() {
        let handle: ModelHandle<u32> = ModelHandle::empty("test engine");
        assert!(!handle.is_initialized().await);

        handle.initialize(7).await.unwrap();
        assert!(handle.is_initialized().await);
        assert_eq!(*handle.read().await, Some(7));
    }

    #[tokio::test]
    async fn test_second_initialize_fails() {
        let handle: ModelHandle<u32> = ModelHandle::empty("test engine");
        handle.initialize(1).await.unwrap();

        let err = handle.initialize(2).await.unwrap_err();
        assert!(matches!(err, FusionError::AlreadyInitialized { what: "test engine" }));

        // First value survives
        assert_eq!(*handle.read().await, Some(1));
    }

    #[tokio::test]
    async fn test_clones_share_the_slot() {
        let handle: ModelHandle<String> = ModelHandle::empty("shared engine");
        let clone = handle.clone();

        handle.initialize("weights".to_string()).await.unwrap();
        assert!(clone.is_initialized().await);
        assert_eq!(clone.read().await.as_deref(), Some("weights"));
    }
}

//! Durable key-value slots

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use anyhow::Result;

/// A named-slot store holding one serialized value per key
pub trait SlotStore: Send {
    /// Read a slot. `Ok(None)` means the slot has never been written.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite a slot
    fn write(&self, key: &str, value: &str) -> Result<()>;
}

/// Process-local slot store. Clones share the same slots.
#[derive(Debug, Clone, Default)]
pub struct MemorySlotStore {
    slots: Arc<Mutex<HashMap<String, String>>>,
}

impl MemorySlotStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn slots(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.slots.lock().expect("Memory slot lock poisoned")
    }
}

impl SlotStore for MemorySlotStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.slots().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        self.slots().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

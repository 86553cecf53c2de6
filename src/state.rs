use log::warn;
use std::collections::HashMap;

use crate::errors::Result;

/// key under which the sidebar flag is persisted
pub const SIDEBAR_OPEN_KEY: &str = "sidebar:open";

/// key/value persistence injected into ui state objects
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// in-process store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// open/closed state of the navigation sidebar, written through to a store
#[derive(Debug)]
pub struct SidebarState<S: KeyValueStore> {
    store: S,
    open: bool,
}

impl<S: KeyValueStore> SidebarState<S> {
    /// read the persisted flag; missing means open, corrupt values are
    /// logged and treated as missing
    pub fn load(store: S) -> Result<Self> {
        let open = match store.get(SIDEBAR_OPEN_KEY)? {
            None => true,
            Some(raw) => match serde_json::from_str::<bool>(&raw) {
                Ok(open) => open,
                Err(err) => {
                    warn!("ignoring stored sidebar state {:?}: {}", raw, err);
                    true
                }
            },
        };
        Ok(Self { store, open })
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) -> Result<()> {
        self.set_open(true)
    }

    pub fn close(&mut self) -> Result<()> {
        self.set_open(false)
    }

    /// flip the flag and return the new value
    pub fn toggle(&mut self) -> Result<bool> {
        let next = !self.open;
        self.set_open(next)?;
        Ok(next)
    }

    pub fn set_open(&mut self, open: bool) -> Result<()> {
        let raw = serde_json::to_string(&open)?;
        self.store.set(SIDEBAR_OPEN_KEY, &raw)?;
        self.open = open;
        Ok(())
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

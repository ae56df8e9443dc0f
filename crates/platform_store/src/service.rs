//! Object-store service contracts and in-memory implementations.

use std::{
    cell::RefCell,
    collections::BTreeMap,
    future::Future,
    pin::Pin,
    rc::Rc,
};

use serde_json::json;

use crate::{error::StoreError, types::ObjectEntry};

/// Object-safe boxed future used by [`ObjectStore`] async methods.
pub type ObjectStoreFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service for a single remote object-storage bucket.
///
/// Implementations flatten their errors to strings at this boundary; callers decide how a
/// failure for a given operation is logged or surfaced.
pub trait ObjectStore {
    /// Lists objects under `prefix`, bounded to `limit` entries, in store-defined order.
    fn list<'a>(
        &'a self,
        prefix: &'a str,
        limit: u32,
    ) -> ObjectStoreFuture<'a, Result<Vec<ObjectEntry>, String>>;

    /// Uploads `bytes` under `key` and returns the stored key.
    fn upload<'a>(
        &'a self,
        key: &'a str,
        bytes: Vec<u8>,
        content_type: Option<String>,
    ) -> ObjectStoreFuture<'a, Result<String, String>>;

    /// Removes the given keys. Removing an absent key is a successful no-op.
    fn remove<'a>(&'a self, keys: &'a [String]) -> ObjectStoreFuture<'a, Result<(), String>>;

    /// Derives the public fetch URL for `key` without performing I/O.
    ///
    /// Returns `None` when the store cannot produce a usable URL.
    fn public_url(&self, key: &str) -> Option<String>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op object store for unsupported targets and baseline tests.
pub struct NoopObjectStore;

impl NoopObjectStore {
    fn unavailable(op: &'static str) -> String {
        StoreError::Unavailable(op).to_string()
    }
}

impl ObjectStore for NoopObjectStore {
    fn list<'a>(
        &'a self,
        _prefix: &'a str,
        _limit: u32,
    ) -> ObjectStoreFuture<'a, Result<Vec<ObjectEntry>, String>> {
        Box::pin(async { Err(Self::unavailable("list")) })
    }

    fn upload<'a>(
        &'a self,
        _key: &'a str,
        _bytes: Vec<u8>,
        _content_type: Option<String>,
    ) -> ObjectStoreFuture<'a, Result<String, String>> {
        Box::pin(async { Err(Self::unavailable("upload")) })
    }

    fn remove<'a>(&'a self, _keys: &'a [String]) -> ObjectStoreFuture<'a, Result<(), String>> {
        Box::pin(async { Err(Self::unavailable("remove")) })
    }

    fn public_url(&self, _key: &str) -> Option<String> {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Operation selector for [`MemoryObjectStore`] fault injection.
pub enum MemoryStoreFault {
    /// Fail the next and all subsequent `list` calls.
    List,
    /// Fail the next and all subsequent `upload` calls.
    Upload,
    /// Fail the next and all subsequent `remove` calls.
    Remove,
}

#[derive(Debug, Clone, Default)]
/// In-memory object store keyed by object name, with deterministic listing order.
///
/// Used by runtime tests in place of the network-backed adapter. The optional URL base makes
/// `public_url` resolvable; leaving it unset models a store that cannot derive public URLs.
pub struct MemoryObjectStore {
    objects: Rc<RefCell<BTreeMap<String, Vec<u8>>>>,
    url_base: Rc<RefCell<Option<String>>>,
    fault: Rc<RefCell<Option<MemoryStoreFault>>>,
}

impl MemoryObjectStore {
    /// Creates an empty store with no public-URL base and no injected fault.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base joined with object keys by `public_url`.
    pub fn with_url_base(self, base: impl Into<String>) -> Self {
        *self.url_base.borrow_mut() = Some(base.into());
        self
    }

    /// Injects a persistent fault for one operation kind; `None` clears it.
    pub fn set_fault(&self, fault: Option<MemoryStoreFault>) {
        *self.fault.borrow_mut() = fault;
    }

    /// Seeds an object directly, bypassing the upload path.
    pub fn seed(&self, name: impl Into<String>, bytes: Vec<u8>) {
        self.objects.borrow_mut().insert(name.into(), bytes);
    }

    /// Returns the current object count.
    pub fn len(&self) -> usize {
        self.objects.borrow().len()
    }

    /// Returns `true` when the store holds no objects.
    pub fn is_empty(&self) -> bool {
        self.objects.borrow().is_empty()
    }

    fn faulted(&self, op: MemoryStoreFault, label: &'static str) -> Result<(), String> {
        if *self.fault.borrow() == Some(op) {
            return Err(StoreError::Unavailable(label).to_string());
        }
        Ok(())
    }
}

impl ObjectStore for MemoryObjectStore {
    fn list<'a>(
        &'a self,
        prefix: &'a str,
        limit: u32,
    ) -> ObjectStoreFuture<'a, Result<Vec<ObjectEntry>, String>> {
        Box::pin(async move {
            self.faulted(MemoryStoreFault::List, "list")?;
            let entries = self
                .objects
                .borrow()
                .iter()
                .filter(|(name, _)| name.starts_with(prefix))
                .take(limit as usize)
                .map(|(name, bytes)| ObjectEntry {
                    name: name.clone(),
                    id: None,
                    created_at: None,
                    updated_at: None,
                    metadata: json!({ "size": bytes.len() }),
                })
                .collect();
            Ok(entries)
        })
    }

    fn upload<'a>(
        &'a self,
        key: &'a str,
        bytes: Vec<u8>,
        _content_type: Option<String>,
    ) -> ObjectStoreFuture<'a, Result<String, String>> {
        Box::pin(async move {
            self.faulted(MemoryStoreFault::Upload, "upload")?;
            let mut objects = self.objects.borrow_mut();
            if objects.contains_key(key) {
                return Err(StoreError::AlreadyExists(key.to_string()).to_string());
            }
            objects.insert(key.to_string(), bytes);
            Ok(key.to_string())
        })
    }

    fn remove<'a>(&'a self, keys: &'a [String]) -> ObjectStoreFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.faulted(MemoryStoreFault::Remove, "remove")?;
            let mut objects = self.objects.borrow_mut();
            for key in keys {
                objects.remove(key);
            }
            Ok(())
        })
    }

    fn public_url(&self, key: &str) -> Option<String> {
        self.url_base
            .borrow()
            .as_ref()
            .map(|base| format!("{}/{}", base.trim_end_matches('/'), key))
    }
}

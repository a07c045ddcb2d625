//! Mock repository for controller tests.
//!
//! Unconfigured reads answer with the type's empty value (an empty list,
//! `None`), writes succeed, and every call is counted so tests can assert
//! that an action did or did not reach the store.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::AppError;
use crate::result::AppResult;
use crate::traits::entity::Entity;
use crate::traits::repository::Repository;

/// Per-operation call counters.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CallCounts {
    /// Number of `get_all` calls.
    pub get_all: usize,
    /// Number of `get_by_id` calls.
    pub get_by_id: usize,
    /// Number of `create` calls.
    pub create: usize,
    /// Number of `update` calls.
    pub update: usize,
    /// Number of `delete` calls.
    pub delete: usize,
}

/// In-memory stand-in for a [`Repository`].
#[derive(Debug)]
pub struct MockRepository<T: Entity> {
    all: Mutex<Vec<T>>,
    by_id: Mutex<HashMap<i32, T>>,
    next_id: Mutex<Option<i32>>,
    failure: Mutex<Option<AppError>>,
    calls: Mutex<CallCounts>,
    created: Mutex<Vec<T>>,
    updated: Mutex<Vec<T>>,
    deleted: Mutex<Vec<T>>,
}

impl<T: Entity> Default for MockRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> MockRepository<T> {
    /// Create a mock with no configured results.
    pub fn new() -> Self {
        Self {
            all: Mutex::new(Vec::new()),
            by_id: Mutex::new(HashMap::new()),
            next_id: Mutex::new(None),
            failure: Mutex::new(None),
            calls: Mutex::new(CallCounts::default()),
            created: Mutex::new(Vec::new()),
            updated: Mutex::new(Vec::new()),
            deleted: Mutex::new(Vec::new()),
        }
    }

    /// Configure the result of `get_all`.
    pub fn returns_all(&self, entities: Vec<T>) {
        *self.all.lock().unwrap_or_else(|e| e.into_inner()) = entities;
    }

    /// Configure `get_by_id(id)` to return `entity`.
    pub fn returns_by_id(&self, id: i32, entity: T) {
        self.by_id
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(id, entity);
    }

    /// Identity handed to transient entities passed to `create`.
    pub fn assigns_id(&self, id: i32) {
        *self.next_id.lock().unwrap_or_else(|e| e.into_inner()) = Some(id);
    }

    /// Make every subsequent call fail with `error`.
    pub fn fails_with(&self, error: AppError) {
        *self.failure.lock().unwrap_or_else(|e| e.into_inner()) = Some(error);
    }

    /// Snapshot of the call counters.
    pub fn calls(&self) -> CallCounts {
        *self.calls.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Entities passed to `create`, in call order.
    pub fn created(&self) -> Vec<T> {
        self.created.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Entities passed to `update`, in call order.
    pub fn updated(&self) -> Vec<T> {
        self.updated.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Entities passed to `delete`, in call order.
    pub fn deleted(&self) -> Vec<T> {
        self.deleted.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn record(&self, bump: impl FnOnce(&mut CallCounts)) -> AppResult<()> {
        bump(&mut *self.calls.lock().unwrap_or_else(|e| e.into_inner()));
        match self
            .failure
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .as_ref()
        {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl<T: Entity> Repository<T> for MockRepository<T> {
    async fn get_all(&self) -> AppResult<Vec<T>> {
        self.record(|c| c.get_all += 1)?;
        Ok(self.all.lock().unwrap_or_else(|e| e.into_inner()).clone())
    }

    async fn get_by_id(&self, id: i32) -> AppResult<Option<T>> {
        self.record(|c| c.get_by_id += 1)?;
        Ok(self
            .by_id
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(&id)
            .cloned())
    }

    async fn create(&self, entity: &T) -> AppResult<T> {
        self.record(|c| c.create += 1)?;
        let mut stored = entity.clone();
        if stored.is_transient() {
            if let Some(id) = *self.next_id.lock().unwrap_or_else(|e| e.into_inner()) {
                stored.set_id(id);
            }
        }
        self.created
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(entity.clone());
        Ok(stored)
    }

    async fn update(&self, entity: &T) -> AppResult<()> {
        self.record(|c| c.update += 1)?;
        self.updated
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(entity.clone());
        Ok(())
    }

    async fn delete(&self, entity: &T) -> AppResult<()> {
        self.record(|c| c.delete += 1)?;
        self.deleted
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(entity.clone());
        Ok(())
    }
}

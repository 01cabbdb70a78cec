use serde::Serialize;
use thiserror::Error;

use crate::domain::EntityId;
use crate::infra::ids::IdSource;

/// Anything an [`EntityStore`] can hold.
pub trait Record {
    fn id(&self) -> &EntityId;
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("duplicate record id: {0}")]
    DuplicateId(EntityId),
    #[error("failed to generate record id: {0}")]
    IdGeneration(String),
}

/// Ordered snapshot of records.
///
/// Every mutating operation borrows the current snapshot and returns a new
/// one; the input is never modified. Two snapshots compare equal when they
/// hold equal records in the same order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EntityStore<T> {
    records: Vec<T>,
}

impl<T> Default for EntityStore<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<T: Record + Clone> EntityStore<T> {
    /// Wraps `records` as they are. Ids are not checked; callers pass
    /// records whose ids are already unique.
    pub fn from_records(records: Vec<T>) -> Self {
        Self { records }
    }

    /// Prepends a record built around a freshly generated id.
    pub fn insert_front<I, F>(&self, ids: &mut I, build: F) -> Result<Self, StoreError>
    where
        I: IdSource + ?Sized,
        F: FnOnce(EntityId) -> T,
    {
        let record = self.build_unique(ids, build)?;
        let mut records = Vec::with_capacity(self.records.len() + 1);
        records.push(record);
        records.extend(self.records.iter().cloned());
        Ok(Self { records })
    }

    /// Appends a record built around a freshly generated id.
    pub fn push_back<I, F>(&self, ids: &mut I, build: F) -> Result<Self, StoreError>
    where
        I: IdSource + ?Sized,
        F: FnOnce(EntityId) -> T,
    {
        let record = self.build_unique(ids, build)?;
        let mut records = self.records.clone();
        records.push(record);
        Ok(Self { records })
    }

    /// Replaces the record matching `id` with `update(record)`.
    ///
    /// An unknown id yields a snapshot equal to `self`.
    pub fn update_by_id<F>(&self, id: &EntityId, update: F) -> Self
    where
        F: FnOnce(T) -> T,
    {
        let Some(index) = self.position(id) else {
            return self.clone();
        };

        let mut records = self.records.clone();
        let current = records[index].clone();
        records[index] = update(current);
        Self { records }
    }

    pub fn find(&self, id: &EntityId) -> Option<&T> {
        self.records.iter().find(|record| record.id() == id)
    }

    pub fn contains(&self, id: &EntityId) -> bool {
        self.position(id).is_some()
    }

    /// Subsequence of records matching `keep`, order preserved.
    pub fn filtered<P>(&self, mut keep: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        Self {
            records: self.records.iter().filter(|r| keep(*r)).cloned().collect(),
        }
    }

    fn position(&self, id: &EntityId) -> Option<usize> {
        self.records.iter().position(|record| record.id() == id)
    }

    fn build_unique<I, F>(&self, ids: &mut I, build: F) -> Result<T, StoreError>
    where
        I: IdSource + ?Sized,
        F: FnOnce(EntityId) -> T,
    {
        let id = ids.next_id()?;
        if self.contains(&id) {
            return Err(StoreError::DuplicateId(id));
        }
        Ok(build(id))
    }
}

impl<T> EntityStore<T> {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.records
    }

    pub fn first(&self) -> Option<&T> {
        self.records.first()
    }

    pub fn last(&self) -> Option<&T> {
        self.records.last()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.records
    }
}

impl<'a, T> IntoIterator for &'a EntityStore<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl<T> FromIterator<T> for EntityStore<T> {
    fn from_iter<It: IntoIterator<Item = T>>(iter: It) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::errors::{DalError, Result};
use crate::repo::{require_id, validate, Record, RecordId, Repository};

/// Repository backed by an in-memory, insertion-ordered sequence
///
/// Reads clone a snapshot under a read lock; insert and delete validate,
/// check and mutate under a single write lock, so two inserts of the same id
/// cannot both succeed.
#[derive(Debug)]
pub struct MemoryRepository<T> {
    rows: RwLock<Vec<T>>,
}

impl<T: Record> MemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(Vec::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.read().map(|rows| rows.len()).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<T>>> {
        self.rows.read().map_err(|_| poisoned::<T>())
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<T>>> {
        self.rows.write().map_err(|_| poisoned::<T>())
    }
}

impl<T: Record> Default for MemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn poisoned<T: Record>() -> DalError {
    DalError::Persistence {
        message: format!("{} repository lock poisoned", T::KIND),
    }
}

impl<T: Record> Repository<T> for MemoryRepository<T> {
    fn insert(&self, record: T) -> Result<RecordId> {
        let id = validate(&record)?;
        let mut rows = self.write()?;
        if rows.iter().any(|row| row.id() == Some(id)) {
            return Err(DalError::DuplicateId { kind: T::KIND, id });
        }
        rows.push(record);
        tracing::debug!(record_kind = T::KIND, record_id = id, "inserted");
        Ok(id)
    }

    fn delete(&self, record: &T) -> Result<()> {
        let id = require_id(record)?;
        let mut rows = self.write()?;
        let index = rows
            .iter()
            .position(|row| row.id() == Some(id))
            .ok_or(DalError::NotFound { kind: T::KIND, id })?;
        rows.remove(index);
        tracing::debug!(record_kind = T::KIND, record_id = id, "deleted");
        Ok(())
    }

    fn find_all(&self) -> Result<Vec<T>> {
        Ok(self.read()?.clone())
    }

    fn find_by_id(&self, id: RecordId) -> Result<Option<T>> {
        Ok(self.read()?.iter().find(|row| row.id() == Some(id)).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::TeamRecord;

    fn team(id: RecordId, city: &str) -> TeamRecord {
        TeamRecord {
            id: Some(id),
            city: Some(city.to_string()),
            nickname: Some("Nick".to_string()),
            abbreviation: Some("ABC".to_string()),
        }
    }

    #[test]
    fn test_new_repository_is_empty() {
        let repo = MemoryRepository::<TeamRecord>::new();
        assert!(repo.is_empty());
        assert!(repo.find_all().unwrap().is_empty());
    }

    #[test]
    fn test_find_all_keeps_insertion_order() {
        let repo = MemoryRepository::<TeamRecord>::new();
        repo.insert(team(5, "Boston")).unwrap();
        repo.insert(team(1, "Chicago")).unwrap();
        repo.insert(team(3, "Denver")).unwrap();

        let ids: Vec<_> = repo.find_all().unwrap().iter().map(|t| t.id).collect();

        assert_eq!(ids, vec![Some(5), Some(1), Some(3)]);
    }

    #[test]
    fn test_duplicate_id_rejected_without_mutation() {
        let repo = MemoryRepository::<TeamRecord>::new();
        repo.insert(team(0, "Boston")).unwrap();

        let err = repo.insert(team(0, "Chicago")).unwrap_err();

        assert_eq!(err, DalError::DuplicateId { kind: "team", id: 0 });
        assert_eq!(repo.len(), 1);
        assert_eq!(
            repo.find_by_id(0).unwrap().unwrap().city.as_deref(),
            Some("Boston")
        );
    }

    #[test]
    fn test_delete_removes_only_the_match() {
        let repo = MemoryRepository::<TeamRecord>::new();
        repo.insert(team(0, "Boston")).unwrap();
        repo.insert(team(1, "Chicago")).unwrap();

        repo.delete(&team(0, "ignored")).unwrap();

        assert_eq!(repo.find_by_id(0).unwrap(), None);
        assert!(repo.find_by_id(1).unwrap().is_some());
    }

    #[test]
    fn test_delete_without_id_is_validation_error() {
        let repo = MemoryRepository::<TeamRecord>::new();
        let err = repo.delete(&TeamRecord::default()).unwrap_err();
        assert!(err.is_validation());
    }
}

//! Single-bucket durable key-value store backed by redb.
//!
//! Every operation runs in its own transaction. Keys are SWIFT codes,
//! values are JSON-encoded records.

use std::fmt;
use std::path::Path;

use redb::{Database, ReadableTable, ReadableTableMetadata, TableDefinition, TableError};

use crate::error::SwiftError;

type Bucket<'a> = TableDefinition<'a, &'static str, &'static [u8]>;

/// Embedded store holding one named bucket.
pub struct Store {
    db: Database,
    bucket: String,
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("bucket", &self.bucket)
            .finish_non_exhaustive()
    }
}

impl Store {
    /// Opens (or creates) the database file and ensures the bucket exists.
    ///
    /// # Arguments
    /// * `path` - Database file path
    /// * `bucket` - Name of the bucket holding all records
    pub fn open(path: impl AsRef<Path>, bucket: &str) -> Result<Self, SwiftError> {
        let path = path.as_ref();
        let db = Database::create(path)?;
        let store = Self {
            db,
            bucket: bucket.to_string(),
        };

        let txn = store.db.begin_write()?;
        txn.open_table(store.definition())
            .map_err(|e| store.table_error(e))?;
        txn.commit()?;

        tracing::info!(path = %path.display(), bucket, "Opened store");
        Ok(store)
    }

    /// Name of the bucket.
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    fn definition(&self) -> Bucket<'_> {
        TableDefinition::new(&self.bucket)
    }

    fn table_error(&self, e: TableError) -> SwiftError {
        match e {
            TableError::TableDoesNotExist(_) => SwiftError::BucketNotFound(self.bucket.clone()),
            other => SwiftError::Storage(other.to_string()),
        }
    }

    /// Returns the value stored under `key`, if any.
    pub fn get(&self, key: &str) -> Result<Option<Vec<u8>>, SwiftError> {
        let txn = self.db.begin_read()?;
        let table = txn
            .open_table(self.definition())
            .map_err(|e| self.table_error(e))?;
        let value = table.get(key)?.map(|guard| guard.value().to_vec());
        Ok(value)
    }

    /// Stores `value` under `key`, overwriting any previous value.
    pub fn put(&self, key: &str, value: &[u8]) -> Result<(), SwiftError> {
        let txn = self.db.begin_write()?;
        {
            let mut table = txn
                .open_table(self.definition())
                .map_err(|e| self.table_error(e))?;
            table.insert(key, value)?;
        }
        txn.commit()?;
        Ok(())
    }

    /// Stores every entry in one transaction.
    pub fn put_batch<K, V>(&self, entries: &[(K, V)]) -> Result<usize, SwiftError>
    where
        K: AsRef<str>,
        V: AsRef<[u8]>,
    {
        let txn = self.db.begin_write()?;
        {
            let mut table = txn
                .open_table(self.definition())
                .map_err(|e| self.table_error(e))?;
            for (key, value) in entries {
                table.insert(key.as_ref(), value.as_ref())?;
            }
        }
        txn.commit()?;
        Ok(entries.len())
    }

    /// Removes `key`. Removing a missing key is not an error.
    pub fn delete(&self, key: &str) -> Result<(), SwiftError> {
        let txn = self.db.begin_write()?;
        {
            let mut table = txn
                .open_table(self.definition())
                .map_err(|e| self.table_error(e))?;
            table.remove(key)?;
        }
        txn.commit()?;
        Ok(())
    }

    /// Visits every entry in key order. An error from `visit` stops the scan.
    pub fn for_each<F>(&self, mut visit: F) -> Result<(), SwiftError>
    where
        F: FnMut(&str, &[u8]) -> Result<(), SwiftError>,
    {
        let txn = self.db.begin_read()?;
        let table = txn
            .open_table(self.definition())
            .map_err(|e| self.table_error(e))?;
        for entry in table.iter()? {
            let (key, value) = entry?;
            visit(key.value(), value.value())?;
        }
        Ok(())
    }

    /// True when the bucket holds no entries.
    pub fn is_empty(&self) -> Result<bool, SwiftError> {
        let txn = self.db.begin_read()?;
        let table = txn
            .open_table(self.definition())
            .map_err(|e| self.table_error(e))?;
        Ok(table.is_empty()?)
    }
}

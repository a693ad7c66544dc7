//! Query service: the four registry operations built on store primitives.

use std::sync::Arc;

use serde::Serialize;

use crate::error::SwiftError;
use crate::record::{is_branch_of, BranchView, CountryGroup, HeadquarterResponse, Record};
use crate::store::Store;

/// Result of a lookup by code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CodeDetails {
    /// Headquarters with its branches
    Headquarter(HeadquarterResponse),
    /// Branch, or a record that cannot own branches
    Single(Record),
}

/// Registry operations over a shared store handle.
#[derive(Debug, Clone)]
pub struct SwiftCodeService {
    store: Arc<Store>,
}

impl SwiftCodeService {
    /// Creates a service over the given store.
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    /// Underlying store.
    pub fn store(&self) -> &Arc<Store> {
        &self.store
    }

    /// Fetches a record by code; headquarters are returned with their branches.
    ///
    /// The record read and the branch scan are separate transactions.
    pub fn get_details(&self, code: &str) -> Result<CodeDetails, SwiftError> {
        let bytes = self.store.get(code)?.ok_or_else(|| SwiftError::NotFound {
            code: code.to_string(),
        })?;
        let record = Record::from_stored(&bytes)?.normalized();

        if !record.owns_branches() {
            tracing::debug!(code, "Found branch");
            return Ok(CodeDetails::Single(record));
        }

        let mut branches = Vec::new();
        self.store.for_each(|key, value| {
            if !is_branch_of(key, code) {
                return Ok(());
            }
            match Record::from_stored(value) {
                Ok(branch) => branches.push(BranchView::from(branch)),
                Err(e) => tracing::warn!(key, error = %e, "Skipping undecodable branch"),
            }
            Ok(())
        })?;

        tracing::debug!(code, branches = branches.len(), "Found headquarters");
        Ok(CodeDetails::Headquarter(HeadquarterResponse { record, branches }))
    }

    /// Deletes a record. Deleting a missing code succeeds.
    pub fn delete(&self, code: &str) -> Result<(), SwiftError> {
        self.store.delete(code)
    }

    /// Lists every record whose country matches `iso2`, case-insensitively.
    ///
    /// The country name comes from the first match in key order.
    pub fn list_by_country(&self, iso2: &str) -> Result<CountryGroup, SwiftError> {
        let iso2 = iso2.to_uppercase();
        let mut swift_codes = Vec::new();

        self.store.for_each(|key, value| {
            match Record::from_stored(value) {
                Ok(record) if record.country_iso2.to_uppercase() == iso2 => {
                    swift_codes.push(record.normalized());
                }
                Ok(_) => {}
                Err(e) => tracing::warn!(key, error = %e, "Skipping undecodable record"),
            }
            Ok(())
        })?;

        let Some(first) = swift_codes.first() else {
            return Err(SwiftError::CountryNotFound { iso2 });
        };
        let country_name = first.country_name.clone();

        Ok(CountryGroup {
            country_iso2: iso2,
            country_name,
            swift_codes,
        })
    }

    /// Stores a record under its code, overwriting any existing entry.
    pub fn insert(&self, record: Record) -> Result<(), SwiftError> {
        let record = record.normalized();
        let value = record.to_stored()?;
        self.store.put(&record.code, &value)
    }
}

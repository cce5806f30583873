//! Storage layer for FinSmart
//!
//! Persisted state is two independently keyed JSON lists, one of
//! transactions and one of goals. The [`Store`] trait is the key-value
//! capability the dashboard is handed; encoding and decoding of the lists
//! happens here so every backend stores the same text.

pub mod file_io;
pub mod json_store;
pub mod memory;
pub mod samples;

pub use file_io::{read_optional, write_atomic, write_json_atomic};
pub use json_store::JsonFileStore;
pub use memory::MemoryStore;

use std::fmt;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::{FinsmartError, FinsmartResult};

/// Keys of the persisted lists, under the fixed application namespace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreKey {
    Transactions,
    Goals,
}

impl StoreKey {
    /// The namespaced key string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Transactions => "finsmartai_transactions",
            Self::Goals => "finsmartai_goals",
        }
    }
}

impl fmt::Display for StoreKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Local key-value storage for the persisted lists
pub trait Store {
    /// Read the raw value under `key`, `None` if nothing was ever stored
    fn get(&self, key: StoreKey) -> FinsmartResult<Option<String>>;

    /// Replace the value under `key`
    fn set(&self, key: StoreKey, value: &str) -> FinsmartResult<()>;
}

impl<S: Store + ?Sized> Store for &S {
    fn get(&self, key: StoreKey) -> FinsmartResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: StoreKey, value: &str) -> FinsmartResult<()> {
        (**self).set(key, value)
    }
}

/// Decode the list stored under `key`
///
/// `Ok(None)` when the key is missing; an error when the stored text is not
/// a valid list.
pub fn read_list<T, S>(store: &S, key: StoreKey) -> FinsmartResult<Option<Vec<T>>>
where
    T: DeserializeOwned,
    S: Store + ?Sized,
{
    match store.get(key)? {
        Some(text) => serde_json::from_str(&text).map(Some).map_err(|e| {
            FinsmartError::Storage(format!("Failed to parse {}: {}", key, e))
        }),
        None => Ok(None),
    }
}

/// Encode and store a list under `key`
pub fn write_list<T, S>(store: &S, key: StoreKey, items: &[T]) -> FinsmartResult<()>
where
    T: Serialize,
    S: Store + ?Sized,
{
    let text = serde_json::to_string(items)
        .map_err(|e| FinsmartError::Storage(format!("Failed to serialize {}: {}", key, e)))?;
    store.set(key, &text)
}

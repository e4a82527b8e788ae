//! Read access to the four catalog collections.
//!
//! Query resolvers describe what they want with a [`Find`] and a backend
//! turns it into a database query ([`Connection`](crate::db::Connection))
//! or evaluates it over seeded records ([`MemoryStore`]).

mod filter;
mod memory;
mod postgres;

use std::{cmp::Ordering, sync::Arc};

use async_trait::async_trait;
pub use filter::{Document, Field, FieldValue, Filter, Matcher, Predicate, Value};
pub use memory::{Catalog, MemoryStore};
pub use postgres::Columns;

use crate::entities::{albums, artists, members, songs};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sea_orm::DbErr),
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse catalog file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{collection} has no field {field:?}")]
    UnknownField {
        collection: &'static str,
        field: Field,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

impl Direction {
    /// Maps the `sort` argument of the list and search queries: `true` is
    /// ascending.
    #[must_use]
    pub fn ascending(ascending: bool) -> Self {
        if ascending {
            Self::Asc
        } else {
            Self::Desc
        }
    }

    #[must_use]
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort {
    pub field: Field,
    pub direction: Direction,
}

/// A filtered, sorted and limited multi-record fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Find {
    pub filter: Option<Filter>,
    pub sort: Option<Sort>,
    pub limit: Option<u64>,
}

impl Find {
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn filter(filter: Filter) -> Self {
        Self {
            filter: Some(filter),
            ..Self::default()
        }
    }

    /// Point lookup by identifier.
    #[must_use]
    pub fn by_id(id: impl Into<String>) -> Self {
        Self::filter(Filter::eq(Field::Id, Value::String(id.into()))).limit(1)
    }

    /// Multi-get by identifier. Results come back in no particular order.
    #[must_use]
    pub fn by_ids(ids: impl IntoIterator<Item = String>) -> Self {
        Self::filter(Filter::is_in(Field::Id, ids))
    }

    #[must_use]
    pub fn sort(mut self, field: Field, direction: Direction) -> Self {
        self.sort = Some(Sort { field, direction });
        self
    }

    /// Caps the result count. Zero and negative values leave it unbounded.
    #[must_use]
    pub fn limit(mut self, limit: impl TryInto<u64>) -> Self {
        self.limit = limit.try_into().ok().filter(|l| *l > 0);
        self
    }
}

/// A backend holding the catalog collections.
#[async_trait]
pub trait Store: Send + Sync + 'static {
    async fn members(&self, find: Find) -> Result<Vec<members::Model>, StoreError>;

    async fn artists(&self, find: Find) -> Result<Vec<artists::Model>, StoreError>;

    async fn albums(&self, find: Find) -> Result<Vec<albums::Model>, StoreError>;

    async fn songs(&self, find: Find) -> Result<Vec<songs::Model>, StoreError>;
}

pub type SharedStore = Arc<dyn Store>;

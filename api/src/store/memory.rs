use std::path::Path;

use async_trait::async_trait;
use catalog_core::tracing::debug;
use serde::Deserialize;

use super::{Document, Find, Sort, Store, StoreError};
use crate::entities::{albums, artists, members, songs};

/// A catalog snapshot as stored in a JSON seed file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub members: Vec<members::Model>,
    #[serde(default)]
    pub artists: Vec<artists::Model>,
    #[serde(default)]
    pub albums: Vec<albums::Model>,
    #[serde(default)]
    pub songs: Vec<songs::Model>,
}

/// Serves the catalog from memory. Records keep their seeded order, which is
/// the order unsorted queries return them in.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    catalog: Catalog,
}

impl MemoryStore {
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    /// Load a catalog from a JSON file.
    ///
    /// # Errors
    /// This function fails if the file cannot be read or is not a valid catalog
    pub async fn from_file(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let bytes = catalog_core::tokio::fs::read(path).await?;
        let catalog: Catalog = serde_json::from_slice(&bytes)?;

        debug!(
            members = catalog.members.len(),
            artists = catalog.artists.len(),
            albums = catalog.albums.len(),
            songs = catalog.songs.len(),
            "catalog loaded"
        );

        Ok(Self::new(catalog))
    }
}

fn select<D: Document + Clone>(docs: &[D], find: Find) -> Vec<D> {
    let Find {
        filter,
        sort,
        limit,
    } = find;

    let matcher = filter.as_ref().map(|f| f.compile());

    let mut found: Vec<D> = docs
        .iter()
        .filter(|doc| matcher.as_ref().map_or(true, |m| m.matches(*doc)))
        .cloned()
        .collect();

    if let Some(Sort { field, direction }) = sort {
        found.sort_by(|a, b| direction.apply(a.field(field).sort_cmp(&b.field(field))));
    }

    if let Some(limit) = limit {
        found.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
    }

    debug!(collection = D::COLLECTION, found = found.len(), "memory select");

    found
}

#[async_trait]
impl Store for MemoryStore {
    async fn members(&self, find: Find) -> Result<Vec<members::Model>, StoreError> {
        Ok(select(&self.catalog.members, find))
    }

    async fn artists(&self, find: Find) -> Result<Vec<artists::Model>, StoreError> {
        Ok(select(&self.catalog.artists, find))
    }

    async fn albums(&self, find: Find) -> Result<Vec<albums::Model>, StoreError> {
        Ok(select(&self.catalog.albums, find))
    }

    async fn songs(&self, find: Find) -> Result<Vec<songs::Model>, StoreError> {
        Ok(select(&self.catalog.songs, find))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{Direction, Field, Filter};

    fn song(id: &str, album_order: i32) -> songs::Model {
        songs::Model {
            id: id.to_owned(),
            album_id: "a1".to_owned(),
            album_order,
            title_nat: Some(format!("{id} title")),
            title_rom: None,
            artists: None,
            length: 200,
            is_instrumental: false,
            is_radio_drama: false,
        }
    }

    fn store() -> MemoryStore {
        MemoryStore::new(Catalog {
            songs: vec![song("s3", 3), song("s1", 1), song("s2", 2)],
            ..Catalog::default()
        })
    }

    #[tokio::test]
    async fn sorts_then_limits() {
        let found = store()
            .songs(Find::all().sort(Field::AlbumOrder, Direction::Asc).limit(2))
            .await
            .unwrap();

        let ids: Vec<_> = found.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["s1", "s2"]);
    }

    #[tokio::test]
    async fn unsorted_keeps_seeded_order() {
        let found = store().songs(Find::all()).await.unwrap();

        let ids: Vec<_> = found.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["s3", "s1", "s2"]);
    }

    #[tokio::test]
    async fn multi_get_skips_unknown_ids() {
        let found = store()
            .songs(Find::by_ids(["s2".to_owned(), "nope".to_owned()]))
            .await
            .unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "s2");
    }

    #[tokio::test]
    async fn filters_by_title() {
        let found = store()
            .songs(Find::filter(Filter::matches(Field::TitleNat, "S2 T")))
            .await
            .unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "s2");
    }

    #[test]
    fn parses_mongo_style_ids() {
        let catalog: Catalog = serde_json::from_str(
            r#"{"members": [{"_id": "m1", "firstNameNat": "A", "lastNameNat": "B"}]}"#,
        )
        .unwrap();

        assert_eq!(catalog.members[0].id, "m1");
        assert!(!catalog.members[0].foreign_name_order);
        assert!(catalog.songs.is_empty());
    }
}

use std::collections::HashMap;

use async_graphql::{dataloader::Loader, FieldError, Result};
use poem::async_trait;

use crate::{objects::Album, store::Find, store::SharedStore};

#[derive(Clone)]
pub struct AlbumLoader {
    pub store: SharedStore,
}

impl AlbumLoader {
    #[must_use]
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Loader<String> for AlbumLoader {
    type Error = FieldError;
    type Value = Album;

    async fn load(&self, keys: &[String]) -> Result<HashMap<String, Self::Value>, Self::Error> {
        let albums = self.store.albums(Find::by_ids(keys.to_vec())).await?;

        Ok(albums
            .into_iter()
            .map(|album| (album.id.clone(), album.into()))
            .collect())
    }
}

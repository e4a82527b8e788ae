use std::collections::HashMap;

use async_graphql::{dataloader::Loader, FieldError, Result};
use poem::async_trait;

use crate::{objects::Artist, store::Find, store::SharedStore};

#[derive(Clone)]
pub struct ArtistLoader {
    pub store: SharedStore,
}

impl ArtistLoader {
    #[must_use]
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Loader<String> for ArtistLoader {
    type Error = FieldError;
    type Value = Artist;

    async fn load(&self, keys: &[String]) -> Result<HashMap<String, Self::Value>, Self::Error> {
        let artists = self.store.artists(Find::by_ids(keys.to_vec())).await?;

        Ok(artists
            .into_iter()
            .map(|artist| (artist.id.clone(), artist.into()))
            .collect())
    }
}

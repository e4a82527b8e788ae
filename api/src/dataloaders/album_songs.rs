use std::collections::HashMap;

use async_graphql::{dataloader::Loader as DataLoader, FieldError, Result};
use poem::async_trait;

use crate::{
    objects::Song,
    store::{Field, Filter, Find, SharedStore},
};

/// Songs keyed by the album they belong to, in store order.
#[derive(Clone)]
pub struct Loader {
    pub store: SharedStore,
}

impl Loader {
    #[must_use]
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl DataLoader<String> for Loader {
    type Error = FieldError;
    type Value = Vec<Song>;

    async fn load(&self, keys: &[String]) -> Result<HashMap<String, Self::Value>, Self::Error> {
        let songs = self
            .store
            .songs(Find::filter(Filter::is_in(Field::AlbumId, keys.to_vec())))
            .await?;

        Ok(songs.into_iter().fold(HashMap::new(), |mut acc, song| {
            acc.entry(song.album_id.clone())
                .or_insert_with(Vec::new)
                .push(song.into());

            acc
        }))
    }
}

use async_graphql::{Context, Object, Result};

use crate::{objects::Artist, store::Find, AppContext};

#[derive(Debug, Clone, Copy, Default)]
pub struct Query;

#[Object(name = "ArtistQuery")]
impl Query {
    /// Every artist in the catalog.
    async fn get_all_artists(&self, ctx: &Context<'_>) -> Result<Vec<Artist>> {
        let AppContext { store, .. } = ctx.data::<AppContext>()?;

        let artists = store.artists(Find::all()).await?;

        Ok(artists.into_iter().map(Into::into).collect())
    }

    /// Look up an `artist` by its ID.
    async fn get_artist_by_id(&self, ctx: &Context<'_>, id: String) -> Result<Option<Artist>> {
        let AppContext { store, .. } = ctx.data::<AppContext>()?;

        let artist = store.artists(Find::by_id(id)).await?;

        Ok(artist.into_iter().next().map(Into::into))
    }
}

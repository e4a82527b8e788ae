use async_graphql::{ComplexObject, Context, Result, SimpleObject, ID};

use super::{Artist, Date, Song};
use crate::{dataloaders::load_in_order, entities::albums::Model, AppContext};

/// A released album, single or drama CD.
#[derive(Clone, Debug, PartialEq, Eq, SimpleObject)]
#[graphql(complex)]
pub struct Album {
    pub id: ID,
    pub title_nat: String,
    pub title_rom: Option<String>,
    pub release_date: Date,
    /// Catalog code printed on the release.
    pub catalog: Option<String>,
    pub subtitle: Option<String>,
    /// Free-form grouping the album belongs to.
    pub parent: String,
    #[graphql(skip)]
    pub artist_ids: Vec<String>,
}

#[ComplexObject]
impl Album {
    /// The songs of the album. No particular order is guaranteed; use
    /// `getAllSongsInAlbum` for track order.
    async fn songs(&self, ctx: &Context<'_>) -> Result<Vec<Song>> {
        let AppContext {
            album_songs_loader, ..
        } = ctx.data::<AppContext>()?;

        Ok(album_songs_loader
            .load_one(self.id.to_string())
            .await?
            .unwrap_or_default())
    }

    /// The artists credited on the album.
    async fn artists(&self, ctx: &Context<'_>) -> Result<Vec<Option<Artist>>> {
        let AppContext { artist_loader, .. } = ctx.data::<AppContext>()?;

        load_in_order(artist_loader, &self.artist_ids).await
    }
}

impl From<Model> for Album {
    fn from(
        Model {
            id,
            title_nat,
            title_rom,
            release_date,
            catalog,
            subtitle,
            parent,
            artists,
        }: Model,
    ) -> Self {
        Self {
            id: id.into(),
            title_nat,
            title_rom,
            release_date: release_date.into(),
            catalog,
            subtitle,
            parent,
            artist_ids: artists,
        }
    }
}

use async_graphql::{ComplexObject, Context, Result, SimpleObject};

use super::{Album, Artist};
use crate::{dataloaders::load_in_order, entities::songs::Model, AppContext};

/// A track on an album.
#[derive(Clone, Debug, PartialEq, Eq, SimpleObject)]
#[graphql(complex)]
pub struct Song {
    pub id: String,
    /// Track position within the album.
    pub album_order: i32,
    pub title_nat: Option<String>,
    pub title_rom: Option<String>,
    /// Duration in seconds.
    pub length: i32,
    pub is_instrumental: bool,
    /// Whether the track is a radio drama excerpt.
    pub is_radio_drama: bool,
    #[graphql(skip)]
    pub album_id: String,
    #[graphql(skip)]
    pub artist_ids: Vec<String>,
}

#[ComplexObject]
impl Song {
    /// The album the song belongs to, or `null` when the album id matches no
    /// record.
    async fn in_album(&self, ctx: &Context<'_>) -> Result<Option<Album>> {
        let AppContext { album_loader, .. } = ctx.data::<AppContext>()?;

        album_loader.load_one(self.album_id.clone()).await
    }

    /// The artists credited on the song itself. Empty when the song carries
    /// no credits of its own.
    async fn artists(&self, ctx: &Context<'_>) -> Result<Vec<Option<Artist>>> {
        let AppContext { artist_loader, .. } = ctx.data::<AppContext>()?;

        load_in_order(artist_loader, &self.artist_ids).await
    }
}

impl From<Model> for Song {
    fn from(
        Model {
            id,
            album_id,
            album_order,
            title_nat,
            title_rom,
            artists,
            length,
            is_instrumental,
            is_radio_drama,
        }: Model,
    ) -> Self {
        Self {
            id,
            album_order,
            title_nat,
            title_rom,
            length,
            is_instrumental,
            is_radio_drama,
            album_id,
            artist_ids: artists.unwrap_or_default(),
        }
    }
}

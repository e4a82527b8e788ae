mod album;
mod album_songs;
mod artist;
mod member;

pub use album::AlbumLoader;
pub use album_songs::Loader as AlbumSongsLoader;
pub use artist::ArtistLoader;
use async_graphql::{
    dataloader::{DataLoader, Loader},
    FieldError, Result,
};
pub use member::MemberLoader;

/// Load `ids` through `loader` and return the records in the order of `ids`.
/// An id without a matching record yields `None` in its position.
pub async fn load_in_order<L>(
    loader: &DataLoader<L>,
    ids: &[String],
) -> Result<Vec<Option<<L as Loader<String>>::Value>>>
where
    L: Loader<String, Error = FieldError>,
{
    if ids.is_empty() {
        return Ok(Vec::new());
    }

    let found = loader.load_many(ids.iter().cloned()).await?;

    Ok(ids.iter().map(|id| found.get(id).cloned()).collect())
}

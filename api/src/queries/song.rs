use std::{
    cmp::Ordering,
    collections::{BTreeSet, HashMap},
    iter,
};

use async_graphql::{Context, Object, Result};
use catalog_core::tracing::debug;
use sea_orm::prelude::DateTimeWithTimeZone;

use crate::{
    entities::songs,
    objects::Song,
    store::{Direction, Field, Filter, Find, Store, StoreError},
    AppContext,
};

/// Instrumental and radio drama tracks are left out of searches unless the
/// caller opts in to each.
#[derive(Debug, Clone, Copy, Default)]
struct Exclusions {
    include_instrumental: bool,
    include_radio_drama: bool,
}

impl Exclusions {
    fn filters(self) -> impl Iterator<Item = Filter> {
        [
            (!self.include_instrumental).then(|| Filter::eq(Field::IsInstrumental, false)),
            (!self.include_radio_drama).then(|| Filter::eq(Field::IsRadioDrama, false)),
        ]
        .into_iter()
        .flatten()
    }
}

fn title_matches(name: &str, exclusions: Exclusions) -> Filter {
    let title = Filter::any([
        Filter::matches(Field::TitleRom, name),
        Filter::matches(Field::TitleNat, name),
    ]);

    Filter::all(iter::once(title).chain(exclusions.filters()))
}

/// Songs carrying their own credit for the artist.
fn credited_to(artist_id: &str, exclusions: Exclusions) -> Filter {
    Filter::all(iter::once(Filter::contains(Field::Artists, artist_id)).chain(exclusions.filters()))
}

/// Songs without credits of their own on any of the albums.
fn inheriting_from(album_ids: impl IntoIterator<Item = String>, exclusions: Exclusions) -> Filter {
    Filter::all(
        [
            Filter::is_in(Field::AlbumId, album_ids),
            Filter::empty(Field::Artists),
        ]
        .into_iter()
        .chain(exclusions.filters()),
    )
}

/// Order songs by the release date of their album, keeping each album's
/// tracks together in track order, then apply `limit` (0 is unbounded).
/// Songs whose album is missing go last in either direction.
async fn by_release_date(
    store: &dyn Store,
    mut songs: Vec<songs::Model>,
    sort: bool,
    limit: i32,
) -> Result<Vec<songs::Model>, StoreError> {
    let album_ids: BTreeSet<String> = songs.iter().map(|s| s.album_id.clone()).collect();

    let released: HashMap<String, DateTimeWithTimeZone> = if album_ids.is_empty() {
        HashMap::new()
    } else {
        store
            .albums(Find::by_ids(album_ids))
            .await?
            .into_iter()
            .map(|album| (album.id, album.release_date))
            .collect()
    };

    let direction = Direction::ascending(sort);

    songs.sort_by(
        |a, b| match (released.get(&a.album_id), released.get(&b.album_id)) {
            (Some(x), Some(y)) => direction
                .apply(x.cmp(y))
                .then_with(|| a.album_id.cmp(&b.album_id))
                .then(a.album_order.cmp(&b.album_order)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        },
    );

    if let Some(limit) = usize::try_from(limit).ok().filter(|l| *l > 0) {
        songs.truncate(limit);
    }

    Ok(songs)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Query;

#[Object(name = "SongQuery")]
impl Query {
    /// Every song in the catalog.
    async fn get_all_songs(&self, ctx: &Context<'_>) -> Result<Vec<Song>> {
        let AppContext { store, .. } = ctx.data::<AppContext>()?;

        let songs = store.songs(Find::all()).await?;

        Ok(songs.into_iter().map(Into::into).collect())
    }

    /// The songs of an album in track order.
    async fn get_all_songs_in_album(
        &self,
        ctx: &Context<'_>,
        album_id: String,
    ) -> Result<Vec<Song>> {
        let AppContext { store, .. } = ctx.data::<AppContext>()?;

        let find = Find::filter(Filter::eq(Field::AlbumId, album_id))
            .sort(Field::AlbumOrder, Direction::Asc);
        let songs = store.songs(find).await?;

        Ok(songs.into_iter().map(Into::into).collect())
    }

    /// Look up a `song` by its ID.
    async fn get_song_by_id(&self, ctx: &Context<'_>, id: String) -> Result<Option<Song>> {
        let AppContext { store, .. } = ctx.data::<AppContext>()?;

        let song = store.songs(Find::by_id(id)).await?;

        Ok(song.into_iter().next().map(Into::into))
    }

    /// Songs whose native or romanized title matches `name`, ignoring case.
    /// `name` is a regular expression.
    async fn find_songs_by_name(
        &self,
        ctx: &Context<'_>,
        name: String,
        #[graphql(default)] include_instrumental: bool,
        #[graphql(default)] include_radio_drama: bool,
        #[graphql(default = true)] sort: bool,
        #[graphql(default)] limit: i32,
    ) -> Result<Vec<Song>> {
        let AppContext { store, .. } = ctx.data::<AppContext>()?;

        let exclusions = Exclusions {
            include_instrumental,
            include_radio_drama,
        };
        let filter = title_matches(&name, exclusions);

        debug!(?filter, "finding songs by name");

        let songs = store.songs(Find::filter(filter)).await?;
        let songs = by_release_date(store.as_ref(), songs, sort, limit).await?;

        Ok(songs.into_iter().map(Into::into).collect())
    }

    /// Songs credited to the artist. A song without credits of its own counts
    /// as credited to its album's artists.
    async fn find_songs_by_artist(
        &self,
        ctx: &Context<'_>,
        artist_id: String,
        #[graphql(default)] include_instrumental: bool,
        #[graphql(default)] include_radio_drama: bool,
        #[graphql(default = true)] sort: bool,
        #[graphql(default)] limit: i32,
    ) -> Result<Vec<Song>> {
        let AppContext { store, .. } = ctx.data::<AppContext>()?;

        let exclusions = Exclusions {
            include_instrumental,
            include_radio_drama,
        };

        let mut songs = store
            .songs(Find::filter(credited_to(&artist_id, exclusions)))
            .await?;

        let albums = store
            .albums(Find::filter(Filter::contains(Field::Artists, artist_id.as_str())))
            .await?;

        debug!(
            artist_id = artist_id.as_str(),
            credited = songs.len(),
            albums = albums.len(),
            "finding songs by artist"
        );

        if !albums.is_empty() {
            let inherited = inheriting_from(albums.into_iter().map(|a| a.id), exclusions);

            songs.extend(store.songs(Find::filter(inherited)).await?);
        }

        let songs = by_release_date(store.as_ref(), songs, sort, limit).await?;

        Ok(songs.into_iter().map(Into::into).collect())
    }
}

use async_graphql::{Context, Object, Result};
use catalog_core::tracing::debug;
use sea_orm::prelude::DateTimeWithTimeZone;

use crate::{
    objects::{Album, Date},
    store::{Direction, Field, Filter, Find},
    AppContext,
};

/// Albums matching `filter` ordered by release date, ascending when `sort` is
/// true, capped at `limit` unless it is 0.
fn by_release_date(filter: Option<Filter>, sort: bool, limit: i32) -> Find {
    Find {
        filter,
        ..Find::default()
    }
    .sort(Field::ReleaseDate, Direction::ascending(sort))
    .limit(limit)
}

fn title_matches(name: &str) -> Filter {
    Filter::any([
        Filter::matches(Field::TitleNat, name),
        Filter::matches(Field::TitleRom, name),
    ])
}

fn released_between(since: Option<Date>, until: Option<Date>) -> Option<Filter> {
    let bounds: Vec<_> = since
        .map(|since| Filter::gte(Field::ReleaseDate, DateTimeWithTimeZone::from(since)))
        .into_iter()
        .chain(until.map(|until| Filter::lte(Field::ReleaseDate, DateTimeWithTimeZone::from(until))))
        .collect();

    (!bounds.is_empty()).then(|| Filter::all(bounds))
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Query;

impl Query {
    async fn find(ctx: &Context<'_>, find: Find) -> Result<Vec<Album>> {
        let AppContext { store, .. } = ctx.data::<AppContext>()?;

        debug!(?find, "finding albums");

        let albums = store.albums(find).await?;

        Ok(albums.into_iter().map(Into::into).collect())
    }
}

#[Object(name = "AlbumQuery")]
impl Query {
    /// Every album ordered by release date. `sort: false` lists the newest
    /// first; a `limit` of 0 returns all albums.
    async fn get_all_albums(
        &self,
        ctx: &Context<'_>,
        #[graphql(default = true)] sort: bool,
        #[graphql(default)] limit: i32,
    ) -> Result<Vec<Album>> {
        Self::find(ctx, by_release_date(None, sort, limit)).await
    }

    /// Look up an `album` by its ID.
    async fn get_album_by_id(&self, ctx: &Context<'_>, id: String) -> Result<Option<Album>> {
        let AppContext { store, .. } = ctx.data::<AppContext>()?;

        let album = store.albums(Find::by_id(id)).await?;

        Ok(album.into_iter().next().map(Into::into))
    }

    /// Albums whose native or romanized title matches `name`, ignoring case.
    async fn find_albums_by_name(
        &self,
        ctx: &Context<'_>,
        name: String,
        #[graphql(default = true)] sort: bool,
        #[graphql(default)] limit: i32,
    ) -> Result<Vec<Album>> {
        Self::find(ctx, by_release_date(Some(title_matches(&name)), sort, limit)).await
    }

    /// Albums crediting the artist.
    async fn find_albums_by_artist(
        &self,
        ctx: &Context<'_>,
        artist_id: String,
        #[graphql(default = true)] sort: bool,
        #[graphql(default)] limit: i32,
    ) -> Result<Vec<Album>> {
        let filter = Filter::contains(Field::Artists, artist_id);

        Self::find(ctx, by_release_date(Some(filter), sort, limit)).await
    }

    /// Albums released within the inclusive range. Either bound may be
    /// omitted.
    async fn find_albums_by_date(
        &self,
        ctx: &Context<'_>,
        since: Option<Date>,
        until: Option<Date>,
        #[graphql(default = true)] sort: bool,
        #[graphql(default)] limit: i32,
    ) -> Result<Vec<Album>> {
        Self::find(ctx, by_release_date(released_between(since, until), sort, limit)).await
    }

    /// Albums grouped under `parent`.
    async fn find_albums_by_parent(
        &self,
        ctx: &Context<'_>,
        parent: String,
        #[graphql(default = true)] sort: bool,
        #[graphql(default)] limit: i32,
    ) -> Result<Vec<Album>> {
        let filter = Filter::eq(Field::Parent, parent);

        Self::find(ctx, by_release_date(Some(filter), sort, limit)).await
    }

    /// The earliest album released under the catalog code.
    async fn find_album_by_catalog(
        &self,
        ctx: &Context<'_>,
        catalog: String,
    ) -> Result<Option<Album>> {
        let filter = Filter::eq(Field::Catalog, catalog);
        let albums = Self::find(ctx, by_release_date(Some(filter), true, 1)).await?;

        Ok(albums.into_iter().next())
    }
}

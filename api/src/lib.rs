#![deny(clippy::disallowed_methods, clippy::suspicious, clippy::style)]
#![warn(clippy::pedantic, clippy::cargo)]
#![allow(clippy::module_name_repetitions)]

pub mod dataloaders;
pub mod db;
pub mod entities;
pub mod handlers;
pub mod objects;
pub mod queries;
pub mod store;

use std::path::PathBuf;

use async_graphql::{
    dataloader::DataLoader, extensions, EmptyMutation, EmptySubscription, Schema,
};
use catalog_core::{clap, tokio};
use dataloaders::{AlbumLoader, AlbumSongsLoader, ArtistLoader, MemberLoader};
use queries::Query;
use store::SharedStore;

#[derive(Debug, clap::Args)]
#[command(version, author, about)]
pub struct Args {
    #[arg(short, long, env, default_value_t = 3002)]
    pub port: u16,

    /// Serve the catalog from a JSON file instead of Postgres.
    #[arg(long, env)]
    pub catalog_file: Option<PathBuf>,

    #[command(flatten)]
    pub db: db::DbArgs,
}

pub type AppSchema = Schema<Query, EmptyMutation, EmptySubscription>;

/// Builds the GraphQL Schema. The store travels with each request in its
/// [`AppContext`].
#[must_use]
pub fn build_schema() -> AppSchema {
    Schema::build(Query::default(), EmptyMutation, EmptySubscription)
        .extension(extensions::Logger)
        .finish()
}

#[derive(Clone)]
pub struct AppState {
    pub schema: AppSchema,
    pub store: SharedStore,
}

impl AppState {
    #[must_use]
    pub fn new(schema: AppSchema, store: SharedStore) -> Self {
        Self { schema, store }
    }
}

/// Per-request data: the store and the loaders batching relationship lookups
/// made while resolving one response.
pub struct AppContext {
    pub store: SharedStore,
    pub member_loader: DataLoader<MemberLoader>,
    pub artist_loader: DataLoader<ArtistLoader>,
    pub album_loader: DataLoader<AlbumLoader>,
    pub album_songs_loader: DataLoader<AlbumSongsLoader>,
}

impl AppContext {
    #[must_use]
    pub fn new(store: SharedStore) -> Self {
        let member_loader = DataLoader::new(MemberLoader::new(store.clone()), tokio::spawn);
        let artist_loader = DataLoader::new(ArtistLoader::new(store.clone()), tokio::spawn);
        let album_loader = DataLoader::new(AlbumLoader::new(store.clone()), tokio::spawn);
        let album_songs_loader =
            DataLoader::new(AlbumSongsLoader::new(store.clone()), tokio::spawn);

        Self {
            store,
            member_loader,
            artist_loader,
            album_loader,
            album_songs_loader,
        }
    }
}

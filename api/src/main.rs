//!

use std::sync::Arc;

use catalog_core::{
    anyhow::Context as AnyhowContext,
    tracing::{info, warn},
};
use music_catalog_api::{
    build_schema,
    db::Connection,
    handlers::{graphql_handler, health, playground},
    store::{MemoryStore, SharedStore},
    AppState, Args,
};
use poem::{get, listener::TcpListener, middleware::AddData, post, EndpointExt, Route, Server};

pub fn main() {
    let opts = catalog_core::StartConfig {
        service_name: "music-catalog",
    };

    catalog_core::run(opts, |common, args: Args| {
        let Args {
            port,
            catalog_file,
            db,
        } = args;

        common.rt.block_on(async move {
            let store: SharedStore = if let Some(path) = catalog_file {
                if db.database_url.is_some() {
                    warn!("both a catalog file and a database url are set, using the catalog file");
                }

                info!(path = %path.display(), "serving catalog from file");

                Arc::new(
                    MemoryStore::from_file(&path)
                        .await
                        .context("failed to load catalog file")?,
                )
            } else {
                Arc::new(
                    Connection::new(db)
                        .await
                        .context("failed to get database connection")?,
                )
            };

            let schema = build_schema();
            let state = AppState::new(schema, store);

            info!(port, "listening");

            Server::new(TcpListener::bind(format!("0.0.0.0:{port}")))
                .run(
                    Route::new()
                        .at("/graphql", post(graphql_handler).with(AddData::new(state)))
                        .at("/playground", get(playground))
                        .at("/health", get(health)),
                )
                .await
                .context("failed to build graphql server")
        })
    });
}

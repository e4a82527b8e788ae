use std::sync::Arc;

use async_graphql::Request;
use music_catalog_api::{
    build_schema,
    entities::{albums, artists, members, songs},
    store::{Find, MemoryStore, SharedStore, Store, StoreError},
    AppContext,
};
use serde_json::{json, Value};

fn fixture() -> String {
    format!("{}/fixtures/catalog.json", env!("CARGO_MANIFEST_DIR"))
}

#[tokio::test]
async fn serves_catalog_file() {
    let store: SharedStore = Arc::new(MemoryStore::from_file(fixture()).await.unwrap());

    let response = build_schema()
        .execute(
            Request::new(
                r#"{
                    getAllSongsInAlbum(albumId: "a1") { id }
                    findSongsByName(name: "s1-title") { id inAlbum { id catalog } }
                    findSongsByArtist(artistId: "art1") { id }
                    getMemberById(id: "m1") { firstNameRom foreignNameOrder }
                }"#,
            )
            .data(AppContext::new(store)),
        )
        .await;

    assert!(response.errors.is_empty(), "{:?}", response.errors);
    assert_eq!(
        response.data.into_json().unwrap(),
        json!({
            "getAllSongsInAlbum": [{ "id": "s1" }, { "id": "s2" }],
            "findSongsByName": [{ "id": "s1", "inAlbum": { "id": "a1", "catalog": "CAT-001" } }],
            "findSongsByArtist": [{ "id": "s1" }],
            "getMemberById": { "firstNameRom": "Ann", "foreignNameOrder": true },
        })
    );
}

#[tokio::test]
async fn missing_catalog_file_is_an_error() {
    let err = MemoryStore::from_file("/definitely/not/here.json")
        .await
        .unwrap_err();

    assert!(matches!(err, StoreError::Io(_)));
}

/// Serves the fixture but fails every member lookup.
struct BrokenMembers(MemoryStore);

#[async_trait::async_trait]
impl Store for BrokenMembers {
    async fn members(&self, _find: Find) -> Result<Vec<members::Model>, StoreError> {
        Err(sea_orm::DbErr::Custom("members offline".to_owned()).into())
    }

    async fn artists(&self, find: Find) -> Result<Vec<artists::Model>, StoreError> {
        self.0.artists(find).await
    }

    async fn albums(&self, find: Find) -> Result<Vec<albums::Model>, StoreError> {
        self.0.albums(find).await
    }

    async fn songs(&self, find: Find) -> Result<Vec<songs::Model>, StoreError> {
        self.0.songs(find).await
    }
}

#[tokio::test]
async fn lookup_failure_fails_the_relationship_field() {
    let store: SharedStore = Arc::new(BrokenMembers(
        MemoryStore::from_file(fixture()).await.unwrap(),
    ));

    let response = build_schema()
        .execute(
            Request::new(
                r#"{
                    getArtistById(id: "art1") { id members { id } }
                    getSongById(id: "s1") { id }
                }"#,
            )
            .data(AppContext::new(store)),
        )
        .await;

    assert_eq!(response.errors.len(), 1);
    assert!(response.errors[0].message.contains("members offline"));

    let data = response.data.into_json().unwrap();
    assert_eq!(data["getArtistById"], Value::Null);
    assert_eq!(data["getSongById"], json!({ "id": "s1" }));
}

use std::sync::Arc;

use async_graphql::Request;
use chrono::{TimeZone, Utc};
use music_catalog_api::{
    build_schema,
    entities::{albums, artists, members, songs},
    store::{Catalog, MemoryStore, SharedStore},
    AppContext,
};
use serde_json::{json, Value};

fn member(id: &str, first: &str) -> members::Model {
    members::Model {
        id: id.to_owned(),
        first_name_nat: first.to_owned(),
        last_name_nat: "Doe".to_owned(),
        first_name_rom: None,
        last_name_rom: None,
        foreign_name_order: false,
    }
}

fn artist(id: &str, members: &[&str]) -> artists::Model {
    artists::Model {
        id: id.to_owned(),
        name_nat: Some(format!("{id} name")),
        name_rom: None,
        members: members.iter().map(ToString::to_string).collect(),
    }
}

fn album(id: &str, title: &str, released_ms: i64, parent: &str, artists: &[&str]) -> albums::Model {
    albums::Model {
        id: id.to_owned(),
        title_nat: title.to_owned(),
        title_rom: None,
        release_date: Utc.timestamp_millis_opt(released_ms).unwrap().into(),
        catalog: None,
        subtitle: None,
        parent: parent.to_owned(),
        artists: artists.iter().map(ToString::to_string).collect(),
    }
}

fn song(id: &str, album_id: &str, album_order: i32, title: &str) -> songs::Model {
    songs::Model {
        id: id.to_owned(),
        album_id: album_id.to_owned(),
        album_order,
        title_nat: Some(title.to_owned()),
        title_rom: None,
        artists: None,
        length: 240,
        is_instrumental: false,
        is_radio_drama: false,
    }
}

fn credited(mut song: songs::Model, artists: &[&str]) -> songs::Model {
    song.artists = Some(artists.iter().map(ToString::to_string).collect());
    song
}

fn catalog() -> Catalog {
    let mut a1 = album("a1", "First Light", 1_000, "series", &["art1"]);
    a1.catalog = Some("CAT-001".to_owned());
    let a2 = album("a2", "Second Wind", 3_000, "series", &["art2"]);
    let mut a3 = album("a3", "Third Eye", 2_000, "other", &["art1", "art2"]);
    a3.catalog = Some("CAT-003".to_owned());

    let mut s1 = song("s1", "a1", 1, "s1-title Opening");
    s1.title_rom = Some("Abc Opening".to_owned());
    let mut s2 = song("s2", "a1", 2, "Opening (Instrumental)");
    s2.is_instrumental = true;
    let s3 = credited(song("s3", "a2", 2, "Abc Song"), &["art1"]);
    let mut s4 = credited(song("s4", "a2", 1, "Fourth"), &["art2"]);
    s4.title_rom = Some("xabcy".to_owned());
    let mut s5 = song("s5", "a3", 1, "Drama Part");
    s5.is_radio_drama = true;
    let s6 = credited(song("s6", "nope", 1, "abc lost"), &["art1"]);

    Catalog {
        members: vec![member("m1", "Ann"), member("m2", "Ben"), member("m3", "Cid")],
        artists: vec![
            artist("art1", &["m2", "m1"]),
            artist("art2", &["m3", "missing"]),
            artist("art3", &[]),
        ],
        albums: vec![a1, a2, a3],
        songs: vec![s1, s2, s3, s4, s5, s6],
    }
}

fn store() -> SharedStore {
    Arc::new(MemoryStore::new(catalog()))
}

async fn execute(store: SharedStore, query: &str) -> Value {
    let schema = build_schema();
    let response = schema
        .execute(Request::new(query).data(AppContext::new(store)))
        .await;

    assert!(response.errors.is_empty(), "{:?}", response.errors);

    response.data.into_json().unwrap()
}

fn ids<'a>(data: &'a Value, field: &str) -> Vec<&'a str> {
    data[field]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["id"].as_str().unwrap())
        .collect()
}

#[tokio::test]
async fn lists_every_record() {
    let data = execute(
        store(),
        "{ getAllMembers { id } getAllArtists { id } getAllSongs { id } }",
    )
    .await;

    assert_eq!(ids(&data, "getAllMembers"), ["m1", "m2", "m3"]);
    assert_eq!(ids(&data, "getAllArtists"), ["art1", "art2", "art3"]);
    assert_eq!(ids(&data, "getAllSongs").len(), 6);
}

#[tokio::test]
async fn albums_sort_by_release_date() {
    let data = execute(
        store(),
        r"{
            asc: getAllAlbums { id }
            desc: getAllAlbums(sort: false) { id }
        }",
    )
    .await;

    assert_eq!(ids(&data, "asc"), ["a1", "a3", "a2"]);
    assert_eq!(ids(&data, "desc"), ["a2", "a3", "a1"]);
}

#[tokio::test]
async fn album_limit_zero_is_unbounded() {
    let data = execute(
        store(),
        r"{
            capped: getAllAlbums(limit: 2) { id }
            all: getAllAlbums(limit: 0) { id }
        }",
    )
    .await;

    assert_eq!(ids(&data, "capped"), ["a1", "a3"]);
    assert_eq!(ids(&data, "all").len(), 3);
}

#[tokio::test]
async fn songs_in_album_follow_track_order() {
    let data = execute(store(), r#"{ getAllSongsInAlbum(albumId: "a2") { id albumOrder } }"#).await;

    assert_eq!(ids(&data, "getAllSongsInAlbum"), ["s4", "s3"]);
}

#[tokio::test]
async fn point_lookups_return_null_when_missing() {
    let data = execute(
        store(),
        r#"{
            getSongById(id: "does-not-exist") { id }
            getMemberById(id: "nope") { id }
            getArtistById(id: "nope") { id }
            getAlbumById(id: "nope") { id }
            found: getSongById(id: "s3") { id titleNat }
        }"#,
    )
    .await;

    assert_eq!(data["getSongById"], Value::Null);
    assert_eq!(data["getMemberById"], Value::Null);
    assert_eq!(data["getArtistById"], Value::Null);
    assert_eq!(data["getAlbumById"], Value::Null);
    assert_eq!(data["found"], json!({ "id": "s3", "titleNat": "Abc Song" }));
}

#[tokio::test]
async fn name_search_matches_either_title_ignoring_case() {
    let data = execute(
        store(),
        r#"{
            asc: findSongsByName(name: "abc") { id }
            desc: findSongsByName(name: "ABC", sort: false) { id }
            capped: findSongsByName(name: "abc", limit: 2) { id }
        }"#,
    )
    .await;

    assert_eq!(ids(&data, "asc"), ["s1", "s4", "s3", "s6"]);
    assert_eq!(ids(&data, "desc"), ["s4", "s3", "s1", "s6"]);
    assert_eq!(ids(&data, "capped"), ["s1", "s4"]);
}

#[tokio::test]
async fn name_search_excludes_instrumental_and_drama_unless_included() {
    let data = execute(
        store(),
        r#"{
            default: findSongsByName(name: "opening") { id }
            instrumental: findSongsByName(name: "opening", includeInstrumental: true) { id }
            noDrama: findSongsByName(name: "drama") { id }
            drama: findSongsByName(name: "drama", includeRadioDrama: true) { id }
        }"#,
    )
    .await;

    assert_eq!(ids(&data, "default"), ["s1"]);
    assert_eq!(ids(&data, "instrumental"), ["s1", "s2"]);
    assert!(ids(&data, "noDrama").is_empty());
    assert_eq!(ids(&data, "drama"), ["s5"]);
}

#[tokio::test]
async fn name_search_pattern_is_not_escaped() {
    let data = execute(store(), r#"{ findSongsByName(name: "^abc ") { id } }"#).await;

    assert_eq!(ids(&data, "findSongsByName"), ["s1", "s3", "s6"]);
}

#[tokio::test]
async fn artist_search_inherits_album_credits() {
    let data = execute(
        store(),
        r#"{
            default: findSongsByArtist(artistId: "art1") { id }
            everything: findSongsByArtist(
                artistId: "art1",
                includeInstrumental: true,
                includeRadioDrama: true
            ) { id }
            newest: findSongsByArtist(
                artistId: "art1",
                includeInstrumental: true,
                includeRadioDrama: true,
                sort: false
            ) { id }
            capped: findSongsByArtist(artistId: "art1", limit: 1) { id }
            own: findSongsByArtist(artistId: "art2") { id }
        }"#,
    )
    .await;

    assert_eq!(ids(&data, "default"), ["s1", "s3", "s6"]);
    assert_eq!(ids(&data, "everything"), ["s1", "s2", "s5", "s3", "s6"]);
    assert_eq!(ids(&data, "newest"), ["s3", "s5", "s1", "s2", "s6"]);
    assert_eq!(ids(&data, "capped"), ["s1"]);
    assert_eq!(ids(&data, "own"), ["s4"]);
}

#[tokio::test]
async fn artist_members_keep_listed_order() {
    let data = execute(
        store(),
        r#"{
            art1: getArtistById(id: "art1") { members { id } }
            art2: getArtistById(id: "art2") { members { id } }
            art3: getArtistById(id: "art3") { members { id } }
        }"#,
    )
    .await;

    assert_eq!(data["art1"]["members"], json!([{ "id": "m2" }, { "id": "m1" }]));
    assert_eq!(data["art2"]["members"], json!([{ "id": "m3" }, null]));
    assert_eq!(data["art3"]["members"], json!([]));
}

#[tokio::test]
async fn song_relationships() {
    let data = execute(
        store(),
        r#"{
            getAllSongsInAlbum(albumId: "a2") { id artists { id } }
            inherited: getSongById(id: "s1") { artists { id } inAlbum { id releaseDate } }
            dangling: getSongById(id: "s6") { inAlbum { id } }
        }"#,
    )
    .await;

    assert_eq!(
        data["getAllSongsInAlbum"],
        json!([
            { "id": "s4", "artists": [{ "id": "art2" }] },
            { "id": "s3", "artists": [{ "id": "art1" }] },
        ])
    );
    assert_eq!(data["inherited"]["artists"], json!([]));
    assert_eq!(
        data["inherited"]["inAlbum"],
        json!({ "id": "a1", "releaseDate": 1000 })
    );
    assert_eq!(data["dangling"]["inAlbum"], Value::Null);
}

#[tokio::test]
async fn album_relationships() {
    let data = execute(
        store(),
        r#"{
            getAlbumById(id: "a3") { artists { id } }
            getAllAlbums { id songs { id } }
        }"#,
    )
    .await;

    assert_eq!(
        data["getAlbumById"]["artists"],
        json!([{ "id": "art1" }, { "id": "art2" }])
    );

    let albums = data["getAllAlbums"].as_array().unwrap();
    let songs_of = |id: &str| {
        let album = albums.iter().find(|a| a["id"] == id).unwrap();
        let mut ids: Vec<_> = album["songs"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["id"].as_str().unwrap().to_owned())
            .collect();
        ids.sort();
        ids
    };

    assert_eq!(songs_of("a1"), ["s1", "s2"]);
    assert_eq!(songs_of("a2"), ["s3", "s4"]);
    assert_eq!(songs_of("a3"), ["s5"]);
}

#[tokio::test]
async fn album_searches() {
    let data = execute(
        store(),
        r#"{
            byName: findAlbumsByName(name: "third") { id }
            byArtist: findAlbumsByArtist(artistId: "art1") { id }
            byArtistDesc: findAlbumsByArtist(artistId: "art1", sort: false) { id }
            byDate: findAlbumsByDate(since: 1500, until: 3000) { id }
            byDateString: findAlbumsByDate(since: "1970-01-01T00:00:02Z") { id }
            untilDate: findAlbumsByDate(until: 2000) { id }
            byParent: findAlbumsByParent(parent: "series") { id }
            byCatalog: findAlbumByCatalog(catalog: "CAT-003") { id }
            noCatalog: findAlbumByCatalog(catalog: "CAT-999") { id }
        }"#,
    )
    .await;

    assert_eq!(ids(&data, "byName"), ["a3"]);
    assert_eq!(ids(&data, "byArtist"), ["a1", "a3"]);
    assert_eq!(ids(&data, "byArtistDesc"), ["a3", "a1"]);
    assert_eq!(ids(&data, "byDate"), ["a3", "a2"]);
    assert_eq!(ids(&data, "byDateString"), ["a3", "a2"]);
    assert_eq!(ids(&data, "untilDate"), ["a1", "a3"]);
    assert_eq!(ids(&data, "byParent"), ["a1", "a2"]);
    assert_eq!(data["byCatalog"], json!({ "id": "a3" }));
    assert_eq!(data["noCatalog"], Value::Null);
}

#[tokio::test]
async fn single_album_scenario() {
    let store: SharedStore = Arc::new(MemoryStore::new(Catalog {
        albums: vec![album("a1", "Album", 1_000, "p", &[])],
        songs: vec![song("s1", "a1", 1, "s1-title")],
        ..Catalog::default()
    }));

    let data = execute(
        store,
        r#"{
            getAllSongsInAlbum(albumId: "a1") { id inAlbum { id releaseDate } }
            findSongsByName(name: "s1-title") { id }
        }"#,
    )
    .await;

    assert_eq!(
        data["getAllSongsInAlbum"],
        json!([{ "id": "s1", "inAlbum": { "id": "a1", "releaseDate": 1000 } }])
    );
    assert_eq!(ids(&data, "findSongsByName"), ["s1"]);
}

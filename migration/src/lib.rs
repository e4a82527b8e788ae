pub use sea_orm_migration::prelude::*;

mod m20241002_101500_create_members_table;
mod m20241002_101512_create_artists_table;
mod m20241002_101524_create_albums_table;
mod m20241002_101536_create_songs_table;
mod m20241009_143010_create_songs_album_id_idx;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20241002_101500_create_members_table::Migration),
            Box::new(m20241002_101512_create_artists_table::Migration),
            Box::new(m20241002_101524_create_albums_table::Migration),
            Box::new(m20241002_101536_create_songs_table::Migration),
            Box::new(m20241009_143010_create_songs_album_id_idx::Migration),
        ]
    }
}

use sea_orm_migration::prelude::*;

use crate::m20241002_101536_create_songs_table::Songs;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                IndexCreateStatement::new()
                    .name("songs_album_id_album_order_idx")
                    .table(Songs::Table)
                    .col(Songs::AlbumId)
                    .col(Songs::AlbumOrder)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("songs_album_id_album_order_idx")
                    .table(Songs::Table)
                    .to_owned(),
            )
            .await
    }
}

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // album_id carries no foreign key: songs may reference albums that
        // are not in the catalog yet
        manager
            .create_table(
                Table::create()
                    .table(Songs::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Songs::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Songs::AlbumId).string().not_null())
                    .col(ColumnDef::new(Songs::AlbumOrder).integer().not_null())
                    .col(ColumnDef::new(Songs::TitleNat).string())
                    .col(ColumnDef::new(Songs::TitleRom).string())
                    .col(ColumnDef::new(Songs::Artists).array(ColumnType::Text))
                    .col(ColumnDef::new(Songs::Length).integer().not_null())
                    .col(
                        ColumnDef::new(Songs::IsInstrumental)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Songs::IsRadioDrama)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Songs::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Songs {
    Table,
    Id,
    AlbumId,
    AlbumOrder,
    TitleNat,
    TitleRom,
    Artists,
    Length,
    IsInstrumental,
    IsRadioDrama,
}

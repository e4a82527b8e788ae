use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Albums::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Albums::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Albums::TitleNat).string().not_null())
                    .col(ColumnDef::new(Albums::TitleRom).string())
                    .col(
                        ColumnDef::new(Albums::ReleaseDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Albums::Catalog).string())
                    .col(ColumnDef::new(Albums::Subtitle).string())
                    .col(ColumnDef::new(Albums::Parent).string().not_null())
                    .col(
                        ColumnDef::new(Albums::Artists)
                            .array(ColumnType::Text)
                            .not_null()
                            .extra("default '{}'".to_string()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                IndexCreateStatement::new()
                    .name("albums_release_date_idx")
                    .table(Albums::Table)
                    .col(Albums::ReleaseDate)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Albums::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Albums {
    Table,
    Id,
    TitleNat,
    TitleRom,
    ReleaseDate,
    Catalog,
    Subtitle,
    Parent,
    Artists,
}

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Members::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Members::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Members::FirstNameNat).string().not_null())
                    .col(ColumnDef::new(Members::LastNameNat).string().not_null())
                    .col(ColumnDef::new(Members::FirstNameRom).string())
                    .col(ColumnDef::new(Members::LastNameRom).string())
                    .col(
                        ColumnDef::new(Members::ForeignNameOrder)
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
            .drop_table(Table::drop().table(Members::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Members {
    Table,
    Id,
    FirstNameNat,
    LastNameNat,
    FirstNameRom,
    LastNameRom,
    ForeignNameOrder,
}

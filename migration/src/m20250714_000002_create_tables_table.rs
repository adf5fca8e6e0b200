use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Tables::Table)
                    .if_not_exists()
                    .col(pk_uuid(Tables::Id))
                    .col(string_uniq(Tables::Name))
                    // Capacity below 1 is meaningless for a seating unit.
                    .col(
                        ColumnDef::new(Tables::Capacity)
                            .integer()
                            .not_null()
                            .check(Expr::col(Tables::Capacity).gte(1)),
                    )
                    .col(string_null(Tables::Location))
                    .col(string_null(Tables::Notes))
                    .col(timestamp_with_time_zone(Tables::CreatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Tables::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Tables {
    Table,
    Id,
    Name,
    Capacity,
    Location,
    Notes,
    CreatedAt,
}

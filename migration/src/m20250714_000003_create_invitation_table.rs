use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250714_000002_create_tables_table::Tables;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Invitations::Table)
                    .if_not_exists()
                    .col(pk_uuid(Invitations::Id))
                    .col(string_uniq(Invitations::Name))
                    .col(string_null(Invitations::Message))
                    .col(date_null(Invitations::EventDate))
                    .col(string_null(Invitations::Location))
                    .col(string_null(Invitations::QrCode))
                    // Unique when present; multiple NULLs are allowed.
                    .col(
                        ColumnDef::new(Invitations::OperationId)
                            .string()
                            .null()
                            .unique_key(),
                    )
                    .col(uuid_null(Invitations::TableId))
                    .col(timestamp_with_time_zone(Invitations::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_invitation_table_id")
                            .from(Invitations::Table, Invitations::TableId)
                            .to(Tables::Table, Tables::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Invitations::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Invitations {
    Table,
    Id,
    Name,
    Message,
    EventDate,
    Location,
    QrCode,
    OperationId,
    TableId,
    CreatedAt,
}

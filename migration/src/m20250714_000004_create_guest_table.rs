use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250714_000003_create_invitation_table::Invitations;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Guests::Table)
                    .if_not_exists()
                    .col(pk_uuid(Guests::Id))
                    .col(string_uniq(Guests::Name))
                    .col(string_len(Guests::Side, 8))
                    .col(string_null(Guests::Phone))
                    .col(string_null(Guests::Email))
                    .col(string_len(Guests::Status, 16))
                    .col(uuid_null(Guests::InvitationId))
                    // Unique when present; multiple NULLs are allowed.
                    .col(
                        ColumnDef::new(Guests::OperationId)
                            .string()
                            .null()
                            .unique_key(),
                    )
                    .col(timestamp_with_time_zone(Guests::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_guest_invitation_id")
                            .from(Guests::Table, Guests::InvitationId)
                            .to(Invitations::Table, Invitations::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Guests::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Guests {
    Table,
    Id,
    Name,
    Side,
    Phone,
    Email,
    Status,
    InvitationId,
    OperationId,
    CreatedAt,
}

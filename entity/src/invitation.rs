use sea_orm::entity::prelude::*;

/// Invitation: a named party of guests, optionally assigned to a seating
/// table. `operation_id` correlates records imported from an external system
/// and must stay unique when present.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "invitations")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub name: String,
    pub message: Option<String>,
    pub event_date: Option<Date>,
    pub location: Option<String>,
    pub qr_code: Option<String>,
    #[sea_orm(unique)]
    pub operation_id: Option<String>,
    pub table_id: Option<Uuid>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::guest::Entity")]
    Guest,
    #[sea_orm(
        belongs_to = "super::table::Entity",
        from = "Column::TableId",
        to = "super::table::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Table,
}

impl Related<super::guest::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Guest.def()
    }
}

impl Related<super::table::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Table.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

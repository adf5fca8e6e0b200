pub use sea_orm_migration::prelude::*;

mod m20250714_000001_create_user_table;
mod m20250714_000002_create_tables_table;
mod m20250714_000003_create_invitation_table;
mod m20250714_000004_create_guest_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250714_000001_create_user_table::Migration),
            Box::new(m20250714_000002_create_tables_table::Migration),
            Box::new(m20250714_000003_create_invitation_table::Migration),
            Box::new(m20250714_000004_create_guest_table::Migration),
        ]
    }
}

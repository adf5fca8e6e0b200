use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{
        guest::create_guests_for_invitation, invitation::InvitationFactory, table::TableFactory,
    },
};

use crate::{
    data::table::TableRepository,
    model::table::{CreateTableParams, UpdateTableParams},
};

fn params(name: &str, capacity: i32) -> CreateTableParams {
    CreateTableParams {
        name: name.to_string(),
        capacity,
        location: None,
        notes: None,
    }
}

/// Tests creating a table and finding it by its unique name.
///
/// Expected: Ok with the created table found by name
#[tokio::test]
async fn creates_and_finds_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_wedding_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TableRepository::new(db);
    let created = repo.create(params("Head Table", 12)).await?;

    let found = repo.find_by_name("Head Table").await?;

    assert_eq!(found.map(|t| t.id), Some(created.id));

    Ok(())
}

/// Tests that the guest count spans every invitation assigned to the table.
///
/// Expected: 5 guests across two invitations, 2 invitations counted
#[tokio::test]
async fn counts_guests_across_invitations() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_wedding_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let table = TableFactory::new(db).capacity(10).build().await?;
    let inv_a = InvitationFactory::new(db).table_id(table.id).build().await?;
    let inv_b = InvitationFactory::new(db).table_id(table.id).build().await?;
    create_guests_for_invitation(db, inv_a.id, 2).await?;
    create_guests_for_invitation(db, inv_b.id, 3).await?;

    // A guest without any invitation must not count anywhere.
    test_utils::factory::guest::create_guest(db).await?;

    let repo = TableRepository::new(db);

    assert_eq!(repo.guest_count(table.id).await?, 5);
    assert_eq!(repo.invitation_count(table.id).await?, 2);
    assert!(repo.has_invitations(table.id).await?);

    let stats = repo.find_by_id_with_stats(table.id).await?.unwrap();
    assert_eq!(stats.guest_count, 5);
    assert_eq!(stats.invitation_count, 2);
    assert_eq!(stats.available(), 5);

    Ok(())
}

/// Tests the stats listing for a table with no assignments.
///
/// Expected: zero counts and full availability
#[tokio::test]
async fn empty_table_has_full_availability() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_wedding_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    TableFactory::new(db).name("Lonely Table").capacity(6).build().await?;

    let repo = TableRepository::new(db);
    let all = repo.find_all_with_stats(None).await?;

    assert_eq!(all.len(), 1);
    assert_eq!(all[0].guest_count, 0);
    assert_eq!(all[0].invitation_count, 0);
    assert_eq!(all[0].available(), 6);
    assert!(!repo.has_invitations(all[0].table.id).await?);

    Ok(())
}

/// Tests partial updates.
///
/// Expected: only provided fields change
#[tokio::test]
async fn updates_partial_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_wedding_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let table = TableFactory::new(db).name("Corner Table").capacity(4).build().await?;

    let repo = TableRepository::new(db);
    let updated = repo
        .update(
            table.id,
            UpdateTableParams {
                capacity: Some(6),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.capacity, 6);
    assert_eq!(updated.name, "Corner Table");

    Ok(())
}

/// Tests deletion.
///
/// Expected: true on the first delete, false once the row is gone
#[tokio::test]
async fn delete_reports_row_presence() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_wedding_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let table = TableFactory::new(db).build().await?;

    let repo = TableRepository::new(db);

    assert!(repo.delete(table.id).await?);
    assert!(!repo.delete(table.id).await?);

    Ok(())
}

use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{
        guest::create_guests_for_invitation, invitation::InvitationFactory, table::TableFactory,
    },
};
use uuid::Uuid;

use crate::{
    error::AppError,
    model::table::{CreateTableParams, UpdateTableParams},
    service::table::TableService,
    util::pagination::ListResult,
};

fn params(name: &str, capacity: i32) -> CreateTableParams {
    CreateTableParams {
        name: name.to_string(),
        capacity,
        location: None,
        notes: None,
    }
}

/// Tests that a duplicate table name is rejected on create.
///
/// Expected: Conflict with "Table with this name already exists"
#[tokio::test]
async fn rejects_duplicate_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_wedding_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = TableService::new(db);
    service.create(params("Window Table", 8)).await.unwrap();

    let err = service.create(params("Window Table", 4)).await.unwrap_err();

    assert!(matches!(err, AppError::Conflict(_)));
    assert_eq!(err.to_string(), "Table with this name already exists");

    Ok(())
}

/// Tests the rename rules on update.
///
/// Expected: renaming onto another table's name is rejected; restating the
/// table's own name passes
#[tokio::test]
async fn update_checks_name_collisions() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_wedding_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = TableService::new(db);
    let first = service.create(params("First Table", 8)).await.unwrap();
    service.create(params("Second Table", 8)).await.unwrap();

    let err = service
        .update(
            first.table.id,
            UpdateTableParams {
                name: Some("Second Table".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));

    // A table may keep its own name through an update.
    let updated = service
        .update(
            first.table.id,
            UpdateTableParams {
                name: Some("First Table".to_string()),
                notes: Some("Near the band".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.table.notes.as_deref(), Some("Near the band"));

    Ok(())
}

/// Tests that capacity cannot drop below the current occupancy.
///
/// Expected: Conflict naming the occupancy when shrinking below it;
/// shrinking exactly to the occupancy passes
#[tokio::test]
async fn update_rejects_capacity_below_occupancy() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_wedding_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let table = TableFactory::new(db).capacity(8).build().await?;
    let invitation = InvitationFactory::new(db).table_id(table.id).build().await?;
    create_guests_for_invitation(db, invitation.id, 5).await?;

    let service = TableService::new(db);

    let err = service
        .update(
            table.id,
            UpdateTableParams {
                capacity: Some(4),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));
    assert_eq!(
        err.to_string(),
        "Cannot reduce capacity below current guest count (5 guests)"
    );

    let updated = service
        .update(
            table.id,
            UpdateTableParams {
                capacity: Some(5),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.table.capacity, 5);
    assert_eq!(updated.available(), 0);

    Ok(())
}

/// Tests the deletion guard.
///
/// Expected: a referenced table cannot be deleted; an unassigned one can
#[tokio::test]
async fn delete_rejects_assigned_tables() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_wedding_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let assigned = TableFactory::new(db).build().await?;
    let free = TableFactory::new(db).build().await?;
    InvitationFactory::new(db).table_id(assigned.id).build().await?;

    let service = TableService::new(db);

    let err = service.delete(assigned.id).await.unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));
    assert_eq!(
        err.to_string(),
        "Cannot delete table with assigned invitations"
    );

    service.delete(free.id).await.unwrap();
    let err = service.get_by_id(free.id).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    Ok(())
}

/// Tests the capacity validation shared with the invitation service.
///
/// Expected: exact fit passes, one seat over fails, missing table is 404
#[tokio::test]
async fn validates_capacity_boundaries() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_wedding_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let table = TableFactory::new(db).capacity(4).build().await?;
    let invitation = InvitationFactory::new(db).table_id(table.id).build().await?;
    create_guests_for_invitation(db, invitation.id, 2).await?;

    let service = TableService::new(db);

    service.validate_table_capacity(table.id, 2).await.unwrap();

    let err = service.validate_table_capacity(table.id, 3).await.unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));
    assert_eq!(err.to_string(), "Table capacity exceeded (5/4)");

    let err = service
        .validate_table_capacity(Uuid::new_v4(), 1)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    Ok(())
}

/// Tests list pagination and the embedded occupancy numbers.
///
/// Expected: paginated envelope with totals; items carry guest counts
#[tokio::test]
async fn lists_with_stats_and_pagination() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_wedding_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..12 {
        TableFactory::new(db).build().await?;
    }

    let service = TableService::new(db);

    match service.get_all(Some(2), Some(10)).await.unwrap() {
        ListResult::Paginated(page) => {
            assert_eq!(page.data.len(), 2);
            assert_eq!(page.total, 12);
            assert_eq!(page.page, 2);
        }
        ListResult::Full(_) => panic!("expected paginated result"),
    }

    match service.get_all(None, None).await.unwrap() {
        ListResult::Full(all) => {
            assert_eq!(all.len(), 12);
            assert!(all.iter().all(|t| t.guest_count == 0));
        }
        ListResult::Paginated(_) => panic!("expected full result"),
    }

    Ok(())
}

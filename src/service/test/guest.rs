use entity::guest::{GuestSide, GuestStatus};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory::guest::GuestFactory};
use uuid::Uuid;

use crate::{
    error::AppError,
    model::guest::{CreateGuestParams, UpdateGuestParams},
    service::guest::GuestService,
    util::pagination::ListResult,
};

fn params(name: &str) -> CreateGuestParams {
    CreateGuestParams {
        name: name.to_string(),
        side: GuestSide::Bride,
        phone: None,
        email: None,
        status: GuestStatus::Pending,
        invitation_id: None,
        operation_id: None,
    }
}

/// Tests that a duplicate guest name is rejected while distinct names pass.
///
/// Expected: Conflict for the duplicate, Ok for a fresh name
#[tokio::test]
async fn rejects_duplicate_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_wedding_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = GuestService::new(db);
    service.create(params("Uncle Bob")).await.unwrap();

    let err = service.create(params("Uncle Bob")).await.unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));
    assert_eq!(err.to_string(), "Guest with this name already exists");

    service.create(params("Aunt Alice")).await.unwrap();

    Ok(())
}

/// Tests that a duplicate operationId is rejected.
///
/// Expected: Conflict with the operationId message
#[tokio::test]
async fn rejects_duplicate_operation_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_wedding_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = GuestService::new(db);
    service
        .create(CreateGuestParams {
            operation_id: Some("OP-1".to_string()),
            ..params("First Guest")
        })
        .await
        .unwrap();

    let err = service
        .create(CreateGuestParams {
            operation_id: Some("OP-1".to_string()),
            ..params("Second Guest")
        })
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Conflict(_)));
    assert_eq!(err.to_string(), "Guest with this operationId already exists");

    Ok(())
}

/// Tests the pagination contract of the list operation.
///
/// Expected: page 2 with limit 10 holds rows 11-20 of 25 and reports
/// total 25; omitting page/limit returns the full unpaginated list
#[tokio::test]
async fn paginates_when_both_parameters_present() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_wedding_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..25 {
        GuestFactory::new(db).build().await?;
    }

    let service = GuestService::new(db);

    match service.get_all(None, Some(2), Some(10)).await.unwrap() {
        ListResult::Paginated(page) => {
            assert_eq!(page.data.len(), 10);
            assert_eq!(page.total, 25);
            assert_eq!(page.page, 2);
            assert_eq!(page.limit, 10);
        }
        ListResult::Full(_) => panic!("expected paginated result"),
    }

    match service.get_all(None, None, None).await.unwrap() {
        ListResult::Full(all) => assert_eq!(all.len(), 25),
        ListResult::Paginated(_) => panic!("expected full result"),
    }

    // Only one of the two parameters disables pagination.
    match service.get_all(None, Some(2), None).await.unwrap() {
        ListResult::Full(all) => assert_eq!(all.len(), 25),
        ListResult::Paginated(_) => panic!("expected full result"),
    }

    Ok(())
}

/// Tests 404 mapping of the id-based operations.
///
/// Expected: NotFound with "Guest not found" for get, update, and delete
#[tokio::test]
async fn missing_guest_maps_to_not_found() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_wedding_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = GuestService::new(db);
    let missing = Uuid::new_v4();

    for err in [
        service.get_by_id(missing).await.unwrap_err(),
        service
            .update(missing, UpdateGuestParams::default())
            .await
            .unwrap_err(),
        service.delete(missing).await.unwrap_err(),
    ] {
        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(err.to_string(), "Guest not found");
    }

    Ok(())
}

/// Tests a full update round trip through the service.
///
/// Expected: status change persists, delete removes the row
#[tokio::test]
async fn update_and_delete_round_trip() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_wedding_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = GuestService::new(db);
    let guest = service.create(params("RSVP Pending")).await.unwrap();

    let updated = service
        .update(
            guest.id,
            UpdateGuestParams {
                status: Some(GuestStatus::Declined),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.status, GuestStatus::Declined);

    service.delete(guest.id).await.unwrap();
    let err = service.get_by_id(guest.id).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    Ok(())
}

use entity::guest::{GuestSide, GuestStatus};
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{guest::GuestFactory, invitation::create_invitation},
};

use crate::{
    data::guest::GuestRepository,
    model::guest::{CreateGuestParams, UpdateGuestParams},
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

/// Tests creating a guest and reading it back through the unique lookups.
///
/// Expected: Ok with the guest found by name and by operationId
#[tokio::test]
async fn creates_and_finds_by_unique_columns() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_wedding_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuestRepository::new(db);
    let created = repo
        .create(CreateGuestParams {
            operation_id: Some("OP-77".to_string()),
            ..params("Maid Of Honor")
        })
        .await?;

    let by_name = repo.find_by_name("Maid Of Honor").await?;
    let by_operation = repo.find_by_operation_id("OP-77").await?;

    assert_eq!(by_name.map(|g| g.id), Some(created.id));
    assert_eq!(by_operation.map(|g| g.id), Some(created.id));

    Ok(())
}

/// Tests that the list can be filtered to guests of one invitation.
///
/// Expected: Ok with only the attached guests returned and counted
#[tokio::test]
async fn filters_by_invitation() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_wedding_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let invitation = create_invitation(db).await?;
    GuestFactory::new(db).invitation_id(invitation.id).build().await?;
    GuestFactory::new(db).invitation_id(invitation.id).build().await?;
    GuestFactory::new(db).build().await?; // unattached

    let repo = GuestRepository::new(db);
    let attached = repo.find_all(Some(invitation.id), None).await?;
    let all = repo.find_all(None, None).await?;

    assert_eq!(attached.len(), 2);
    assert_eq!(all.len(), 3);
    assert_eq!(repo.count(Some(invitation.id)).await?, 2);
    assert_eq!(repo.count(None).await?, 3);

    Ok(())
}

/// Tests the offset/limit window used by pagination.
///
/// Expected: 25 guests split into disjoint pages of 10/10/5 with total 25
#[tokio::test]
async fn paginates_with_offset_and_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_wedding_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..25 {
        GuestFactory::new(db).build().await?;
    }

    let repo = GuestRepository::new(db);
    let page1 = repo.find_all(None, Some((0, 10))).await?;
    let page2 = repo.find_all(None, Some((10, 10))).await?;
    let page3 = repo.find_all(None, Some((20, 10))).await?;

    assert_eq!(page1.len(), 10);
    assert_eq!(page2.len(), 10);
    assert_eq!(page3.len(), 5);
    assert_eq!(repo.count(None).await?, 25);

    // Pages must not overlap.
    for guest in &page2 {
        assert!(page1.iter().all(|g| g.id != guest.id));
        assert!(page3.iter().all(|g| g.id != guest.id));
    }

    Ok(())
}

/// Tests partial updates, including detaching from an invitation with an
/// explicit null.
///
/// Expected: only the provided fields change; `Some(None)` clears the link
#[tokio::test]
async fn updates_partial_fields_and_detaches() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_wedding_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let invitation = create_invitation(db).await?;
    let guest = GuestFactory::new(db)
        .name("Plus One")
        .invitation_id(invitation.id)
        .build()
        .await?;

    let repo = GuestRepository::new(db);

    let updated = repo
        .update(
            guest.id,
            UpdateGuestParams {
                status: Some(GuestStatus::Confirmed),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.status, GuestStatus::Confirmed);
    assert_eq!(updated.name, "Plus One");
    assert_eq!(updated.invitation_id, Some(invitation.id));

    let detached = repo
        .update(
            guest.id,
            UpdateGuestParams {
                invitation_id: Some(None),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(detached.invitation_id, None);

    Ok(())
}

/// Tests deletion.
///
/// Expected: true on the first delete, false once the row is gone
#[tokio::test]
async fn delete_reports_row_presence() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_wedding_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guest = GuestFactory::new(db).build().await?;

    let repo = GuestRepository::new(db);

    assert!(repo.delete(guest.id).await?);
    assert!(!repo.delete(guest.id).await?);
    assert!(repo.find_by_id(guest.id).await?.is_none());

    Ok(())
}

/// Tests the status aggregation used by the dashboard.
///
/// Expected: per-status counts and the overall total
#[tokio::test]
async fn counts_by_status() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_wedding_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..3 {
        GuestFactory::new(db).status(GuestStatus::Confirmed).build().await?;
    }
    for _ in 0..2 {
        GuestFactory::new(db).status(GuestStatus::Pending).build().await?;
    }
    GuestFactory::new(db).status(GuestStatus::Declined).build().await?;

    let counts = GuestRepository::new(db).count_by_status().await?;

    assert_eq!(counts.total, 6);
    assert_eq!(counts.confirmed, 3);
    assert_eq!(counts.pending, 2);
    assert_eq!(counts.declined, 1);

    Ok(())
}

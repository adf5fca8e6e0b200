use chrono::{Days, Utc};
use entity::guest::{GuestSide, GuestStatus};
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{guest::GuestFactory, invitation::InvitationFactory, table::create_table},
};

use crate::{
    data::{guest::GuestRepository, invitation::InvitationRepository},
    model::{
        guest::CreateGuestParams,
        invitation::{CreateInvitationParams, UpdateInvitationParams},
    },
};

fn invitation_params(name: &str) -> CreateInvitationParams {
    CreateInvitationParams {
        name: name.to_string(),
        message: None,
        event_date: None,
        location: None,
        qr_code: None,
        operation_id: None,
        table_id: None,
    }
}

fn guest_params(name: &str) -> CreateGuestParams {
    CreateGuestParams {
        name: name.to_string(),
        side: GuestSide::Groom,
        phone: None,
        email: None,
        status: GuestStatus::Pending,
        invitation_id: None,
        operation_id: None,
    }
}

/// Tests creating an invitation and loading it with its guests.
///
/// Expected: Ok with both attached guests embedded
#[tokio::test]
async fn loads_invitation_with_guests() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_wedding_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = InvitationRepository::new(db);
    let invitation = repo.create(invitation_params("Garcia Family")).await?;

    GuestFactory::new(db).invitation_id(invitation.id).build().await?;
    GuestFactory::new(db).invitation_id(invitation.id).build().await?;

    let detail = repo.find_by_id_with_guests(invitation.id).await?.unwrap();

    assert_eq!(detail.invitation.name, "Garcia Family");
    assert_eq!(detail.guests.len(), 2);

    Ok(())
}

/// Tests that the with-guests transaction persists everything on success.
///
/// Expected: invitation and both guests exist, linked to the invitation
#[tokio::test]
async fn create_with_guests_commits_all_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_wedding_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = InvitationRepository::new(db);
    let result = repo
        .create_with_guests(
            invitation_params("Nguyen Family"),
            vec![guest_params("An Nguyen"), guest_params("Binh Nguyen")],
        )
        .await?;

    assert_eq!(result.guests.len(), 2);
    assert!(result
        .guests
        .iter()
        .all(|g| g.invitation_id == Some(result.invitation.id)));

    let guest_repo = GuestRepository::new(db);
    assert_eq!(guest_repo.count(Some(result.invitation.id)).await?, 2);

    Ok(())
}

/// Tests that a mid-batch unique violation rolls the whole transaction back.
///
/// A guest named "An Nguyen" already exists, so inserting the second guest
/// of the batch trips the unique index after the invitation and the first
/// guest were already written inside the transaction.
///
/// Expected: Err, and neither the invitation nor the first guest persists
#[tokio::test]
async fn create_with_guests_rolls_back_on_mid_batch_failure() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_wedding_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    GuestFactory::new(db).name("An Nguyen").build().await?;

    let repo = InvitationRepository::new(db);
    let result = repo
        .create_with_guests(
            invitation_params("Rollback Party"),
            vec![guest_params("Fresh Guest"), guest_params("An Nguyen")],
        )
        .await;

    assert!(result.is_err());

    let guest_repo = GuestRepository::new(db);
    assert!(repo.find_by_name("Rollback Party").await?.is_none());
    assert!(guest_repo.find_by_name("Fresh Guest").await?.is_none());

    Ok(())
}

/// Tests the offset/limit window used by pagination.
///
/// Expected: pages of 10/2 from 12 rows with total 12
#[tokio::test]
async fn paginates_with_offset_and_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_wedding_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..12 {
        InvitationFactory::new(db).build().await?;
    }

    let repo = InvitationRepository::new(db);
    let page1 = repo.find_all(Some((0, 10))).await?;
    let page2 = repo.find_all(Some((10, 10))).await?;

    assert_eq!(page1.len(), 10);
    assert_eq!(page2.len(), 2);
    assert_eq!(repo.count().await?, 12);

    Ok(())
}

/// Tests partial updates, including unassigning the table with an explicit
/// null.
///
/// Expected: only provided fields change; `Some(None)` clears the link
#[tokio::test]
async fn updates_partial_fields_and_unassigns_table() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_wedding_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let table = create_table(db).await?;
    let invitation = InvitationFactory::new(db)
        .name("Movable Party")
        .table_id(table.id)
        .build()
        .await?;

    let repo = InvitationRepository::new(db);

    let updated = repo
        .update(
            invitation.id,
            UpdateInvitationParams {
                message: Some("See you there".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.message.as_deref(), Some("See you there"));
    assert_eq!(updated.table_id, Some(table.id));

    let unassigned = repo
        .update(
            invitation.id,
            UpdateInvitationParams {
                table_id: Some(None),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(unassigned.table_id, None);

    Ok(())
}

/// Tests that deleting an invitation leaves its guests behind with the
/// link cleared by the foreign key.
///
/// Expected: guest row survives with `invitation_id` NULL
#[tokio::test]
async fn delete_clears_guest_links() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_wedding_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let invitation = InvitationFactory::new(db).build().await?;
    let guest = GuestFactory::new(db).invitation_id(invitation.id).build().await?;

    let repo = InvitationRepository::new(db);
    assert!(repo.delete(invitation.id).await?);

    let survivor = GuestRepository::new(db).find_by_id(guest.id).await?.unwrap();
    assert_eq!(survivor.invitation_id, None);

    Ok(())
}

/// Tests the event-date query behind the dashboard countdown.
///
/// Expected: the nearest date on or after today wins; past dates are ignored
#[tokio::test]
async fn finds_nearest_future_event_date() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_wedding_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let today = Utc::now().date_naive();
    let soon = today.checked_add_days(Days::new(10)).unwrap();
    let later = today.checked_add_days(Days::new(100)).unwrap();
    let past = today.checked_sub_days(Days::new(30)).unwrap();

    InvitationFactory::new(db).event_date(later).build().await?;
    InvitationFactory::new(db).event_date(soon).build().await?;
    InvitationFactory::new(db).event_date(past).build().await?;
    InvitationFactory::new(db).build().await?; // no date

    let repo = InvitationRepository::new(db);
    assert_eq!(repo.nearest_future_event_date(today).await?, Some(soon));

    Ok(())
}

/// Tests that no future date yields None.
///
/// Expected: Ok(None) with only past-dated invitations present
#[tokio::test]
async fn no_future_event_date_returns_none() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_wedding_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let today = Utc::now().date_naive();
    let past = today.checked_sub_days(Days::new(1)).unwrap();

    InvitationFactory::new(db).event_date(past).build().await?;

    let repo = InvitationRepository::new(db);
    assert_eq!(repo.nearest_future_event_date(today).await?, None);

    Ok(())
}

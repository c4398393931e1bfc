//! Admin panel integration tests against the mock backend

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tempfile::TempDir;
use tiffin_client::models::{GroupCreate, OrderStatusUpdate, TableStatus, User};
use tiffin_client::{AdminClient, ClientConfig, ClientError, SyncConfig, TiffinClient};
use tiffin_mock::{AppState, ADMIN_PASSWORD, ADMIN_USERNAME};

async fn start() -> (TiffinClient, SocketAddr, Arc<AppState>, TempDir) {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    let (addr, state) = tiffin_mock::spawn().await;
    let dir = TempDir::new().expect("tempdir");
    let config = ClientConfig::new(format!("http://{}", addr)).with_sync(SyncConfig {
        // Long debounce; these tests push explicitly
        debounce: Duration::from_secs(60),
        cooldown: Duration::from_millis(100),
    });
    let app = TiffinClient::new(config, dir.path()).expect("client");
    (app, addr, state, dir)
}

async fn operator(app: &TiffinClient) -> AdminClient {
    let admin = app.admin().expect("admin client");
    admin.login(ADMIN_USERNAME, ADMIN_PASSWORD).await.expect("admin login");
    admin
}

async fn booked_group(app: &TiffinClient) -> (String, User) {
    let user = app
        .session
        .signup("Asha", "9876543210", "secret")
        .await
        .expect("signup");
    let group_id = app
        .groups
        .create_group(&GroupCreate {
            admin_name: user.name.clone(),
            admin_id: user.id.clone(),
            arrival_time: "19:00".into(),
            departure_time: "21:00".into(),
            date: "2026-09-01".into(),
            guest_count: Some(4),
        })
        .await
        .expect("create group");
    (group_id, user)
}

#[tokio::test]
async fn bad_admin_credentials_are_rejected() {
    let (app, _addr, _state, _dir) = start().await;
    let admin = app.admin().unwrap();
    let err = admin.login(ADMIN_USERNAME, "nope").await.unwrap_err();
    assert!(matches!(err, ClientError::Unauthorized));
    assert!(!admin.is_authenticated());
}

#[tokio::test]
async fn dashboard_requires_an_admin_token() {
    let (app, _addr, _state, _dir) = start().await;
    let admin = app.admin().unwrap();
    assert!(matches!(
        admin.dashboard().await.unwrap_err(),
        ClientError::Unauthorized
    ));
}

#[tokio::test]
async fn dashboard_shows_tables_and_pending_reservations() {
    let (app, _addr, _state, _dir) = start().await;
    let (group_id, _user) = booked_group(&app).await;
    let admin = operator(&app).await;
    assert_eq!(admin.current_admin().unwrap().username, ADMIN_USERNAME);

    let dashboard = admin.dashboard().await.unwrap();
    assert_eq!(dashboard.tables.len(), 6);
    assert!(dashboard
        .pending_reservations
        .iter()
        .any(|g| g.id == group_id));
    assert!(dashboard.active_orders.is_empty());
}

#[tokio::test]
async fn reservation_confirm_and_cancel_change_group_status() {
    let (app, _addr, _state, _dir) = start().await;
    let (group_id, _user) = booked_group(&app).await;
    let admin = operator(&app).await;

    admin.confirm_reservation(&group_id).await.unwrap();
    let group = app.groups.load_group(&group_id).await.unwrap();
    assert_eq!(group.status.as_deref(), Some("confirmed"));

    admin.cancel_reservation(&group_id).await.unwrap();
    let group = app.groups.load_group(&group_id).await.unwrap();
    assert_eq!(group.status.as_deref(), Some("cancelled"));

    let dashboard = admin.dashboard().await.unwrap();
    assert!(dashboard.pending_reservations.is_empty());
}

#[tokio::test]
async fn table_status_updates_are_visible_in_the_table_list() {
    let (app, _addr, _state, _dir) = start().await;
    let admin = operator(&app).await;

    admin
        .update_table_status("t1", TableStatus::Occupied, Some(3))
        .await
        .unwrap();

    let tables = admin.tables().await.unwrap().tables;
    let t1 = tables.iter().find(|t| t.id == "t1").unwrap();
    assert_eq!(t1.status, TableStatus::Occupied);
    assert_eq!(t1.current_guests, 3);

    assert!(matches!(
        admin
            .update_table_status("t99", TableStatus::Cleaning, None)
            .await
            .unwrap_err(),
        ClientError::NotFound(_)
    ));
}

#[tokio::test]
async fn order_status_set_by_admin_is_seen_by_the_group() {
    let (app, _addr, state, _dir) = start().await;
    let (group_id, _user) = booked_group(&app).await;
    let admin = operator(&app).await;

    let cart = app.cart().unwrap();
    cart.set_current_group(Some(group_id.clone())).await.unwrap();
    tokio::time::sleep(Duration::from_millis(200)).await;
    cart.add_item(&app.menu.get_menu_item("mn-01").await.unwrap())
        .await;
    cart.sync_now().await.unwrap();
    assert_eq!(state.order_writes(&group_id), 1);

    let order = admin
        .update_order_status(
            &format!("order-{}", group_id),
            &OrderStatusUpdate {
                status: Some("preparing".into()),
                payment_status: None,
            },
        )
        .await
        .unwrap();
    assert_eq!(order.status, "preparing");

    let seen = cart.group_order().await.unwrap().expect("order exists");
    assert_eq!(seen.status, "preparing");

    let dashboard = admin.dashboard().await.unwrap();
    assert_eq!(dashboard.active_orders.len(), 1);
}

//! Session, group and catalog integration tests against the mock backend

use std::net::SocketAddr;
use std::sync::Arc;

use tempfile::TempDir;
use tiffin_client::models::{GroupCreate, User, WeatherKind};
use tiffin_client::{
    ClientConfig, ClientError, Credential, CredentialStorage, MenuSource, TiffinClient,
};
use tiffin_mock::{AppState, MOCK_OTP};

async fn start() -> (TiffinClient, SocketAddr, Arc<AppState>, TempDir) {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    let (addr, state) = tiffin_mock::spawn().await;
    let dir = TempDir::new().expect("tempdir");
    let app = TiffinClient::new(ClientConfig::new(format!("http://{}", addr)), dir.path())
        .expect("client");
    (app, addr, state, dir)
}

/// Another client process against the same backend, with its own data dir
fn second_client(addr: SocketAddr) -> (TiffinClient, TempDir) {
    let dir = TempDir::new().expect("tempdir");
    let app = TiffinClient::new(ClientConfig::new(format!("http://{}", addr)), dir.path())
        .expect("client");
    (app, dir)
}

fn booking(admin: &User) -> GroupCreate {
    GroupCreate {
        admin_name: admin.name.clone(),
        admin_id: admin.id.clone(),
        arrival_time: "19:00".into(),
        departure_time: "21:00".into(),
        date: "2026-09-01".into(),
        guest_count: Some(4),
    }
}

// ========== Session ==========

#[tokio::test]
async fn signup_persists_credential_and_restore_resumes_it() {
    let (app, addr, _state, dir) = start().await;
    let user = app
        .session
        .signup("Asha", "9876543210", "secret")
        .await
        .unwrap();
    assert!(app.session.is_authenticated());
    assert!(dir.path().join("session.json").exists());

    // A fresh process over the same data directory picks the session back up
    let app2 = TiffinClient::new(
        ClientConfig::new(format!("http://{}", addr)),
        dir.path(),
    )
    .unwrap();
    let restored = app2.session.restore().await.unwrap().expect("restored");
    assert_eq!(restored.id, user.id);
    assert!(app2.session.is_authenticated());
}

#[tokio::test]
async fn wrong_password_is_an_auth_error() {
    let (app, _addr, _state, _dir) = start().await;
    app.session
        .signup("Asha", "9876543210", "secret")
        .await
        .unwrap();
    app.session.logout();

    let err = app.session.login("9876543210", "wrong").await.unwrap_err();
    assert!(matches!(err, ClientError::Auth(_)));
    assert!(!app.session.is_authenticated());
}

#[tokio::test]
async fn duplicate_phone_signup_is_rejected() {
    let (app, _addr, _state, _dir) = start().await;
    app.session
        .signup("Asha", "9876543210", "secret")
        .await
        .unwrap();

    let err = app
        .session
        .signup("Imposter", "9876543210", "other")
        .await
        .unwrap_err();
    match err {
        ClientError::Auth(msg) => assert!(msg.contains("already")),
        other => panic!("expected auth error, got {other:?}"),
    }
}

#[tokio::test]
async fn otp_login_with_local_resend_throttle() {
    let (app, _addr, _state, _dir) = start().await;
    app.session
        .signup("Asha", "9876543210", "secret")
        .await
        .unwrap();
    app.session.logout();

    app.session.send_otp("9876543210").await.unwrap();
    let err = app.session.send_otp("9876543210").await.unwrap_err();
    match err {
        ClientError::Validation(msg) => assert!(msg.contains("retry in")),
        other => panic!("expected validation error, got {other:?}"),
    }
    assert!(app.session.otp_resend_remaining().is_some());

    let err = app
        .session
        .verify_otp("9876543210", "000000")
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Auth(_)));

    let user = app
        .session
        .verify_otp("9876543210", MOCK_OTP)
        .await
        .unwrap();
    assert_eq!(user.phone, "9876543210");
    assert!(app.session.is_authenticated());
}

#[tokio::test]
async fn stale_stored_token_starts_unauthenticated_and_is_purged() {
    let (app, _addr, _state, dir) = start().await;
    let storage = CredentialStorage::new(dir.path(), "session");
    storage
        .save(&Credential::new(
            "expired-token",
            User {
                id: "u-old".into(),
                name: "Ghost".into(),
                phone: "9".into(),
                avatar: "G".into(),
                color: "#000".into(),
            },
        ))
        .unwrap();

    assert!(app.session.restore().await.unwrap().is_none());
    assert!(!app.session.is_authenticated());
    assert!(!storage.exists(), "rejected credential must be deleted");
}

#[tokio::test]
async fn logout_removes_the_credential_file() {
    let (app, _addr, _state, dir) = start().await;
    app.session
        .signup("Asha", "9876543210", "secret")
        .await
        .unwrap();
    assert!(dir.path().join("session.json").exists());

    app.session.logout();
    assert!(!app.session.is_authenticated());
    assert!(!dir.path().join("session.json").exists());
}

#[tokio::test]
async fn profile_update_reaches_the_stored_credential() {
    let (app, _addr, _state, dir) = start().await;
    app.session
        .signup("Asha", "9876543210", "secret")
        .await
        .unwrap();

    let updated = app.session.update_profile("Asha K").await.unwrap();
    assert_eq!(updated.name, "Asha K");
    assert_eq!(app.session.current_user().unwrap().name, "Asha K");

    let stored = CredentialStorage::new(dir.path(), "session")
        .load()
        .expect("credential present");
    assert_eq!(stored.user.name, "Asha K");
}

#[tokio::test]
async fn search_user_is_none_for_unknown_phone() {
    let (app, _addr, _state, _dir) = start().await;
    app.session
        .signup("Asha", "9876543210", "secret")
        .await
        .unwrap();

    assert!(app.session.search_user("0000000000").await.unwrap().is_none());
    let found = app
        .session
        .search_user("9876543210")
        .await
        .unwrap()
        .expect("known phone");
    assert_eq!(found.name, "Asha");
}

// ========== Groups ==========

#[tokio::test]
async fn booking_creates_a_group_with_the_admin_as_sole_member() {
    let (app, _addr, _state, _dir) = start().await;
    let user = app
        .session
        .signup("Asha", "9876543210", "secret")
        .await
        .unwrap();

    let group_id = app.groups.create_group(&booking(&user)).await.unwrap();

    let group = app.groups.group().expect("active group");
    assert_eq!(group.id, group_id);
    assert_eq!(group.invite_code.len(), 6);
    assert!(group.is_admin(&user.id));
    assert_eq!(group.status.as_deref(), Some("pending"));
    assert!(app.groups.invite_link().is_some());

    let members = app.groups.members();
    assert_eq!(members.len(), 1);
    assert!(members[0].is_admin && members[0].has_accepted);
}

#[tokio::test]
async fn join_by_code_then_reload_replaces_members_wholesale() {
    let (app, addr, _state, _dir) = start().await;
    let admin = app
        .session
        .signup("Asha", "9876543210", "secret")
        .await
        .unwrap();
    let group_id = app.groups.create_group(&booking(&admin)).await.unwrap();
    let code = app.groups.group().unwrap().invite_code;

    let (guest_app, _guest_dir) = second_client(addr);
    guest_app
        .session
        .signup("Ravi", "9876543211", "secret")
        .await
        .unwrap();
    let joined = guest_app.groups.join_group_by_code(&code).await.unwrap();
    assert_eq!(joined.id, group_id);
    assert_eq!(joined.group_members.len(), 2);

    // Admin's registry still holds the single-member snapshot until reload
    assert_eq!(app.groups.members().len(), 1);
    app.groups.load_group(&group_id).await.unwrap();
    assert_eq!(app.groups.members().len(), 2);
}

#[tokio::test]
async fn invite_link_generation_is_admin_only() {
    let (app, addr, _state, _dir) = start().await;
    let admin = app
        .session
        .signup("Asha", "9876543210", "secret")
        .await
        .unwrap();
    app.groups.create_group(&booking(&admin)).await.unwrap();
    let code = app.groups.group().unwrap().invite_code;

    let (guest_app, _guest_dir) = second_client(addr);
    let guest = guest_app
        .session
        .signup("Ravi", "9876543211", "secret")
        .await
        .unwrap();
    guest_app.groups.join_group_by_code(&code).await.unwrap();

    let err = guest_app
        .groups
        .generate_invite_link(&guest.id)
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Validation(_)));

    let link = app.groups.generate_invite_link(&admin.id).await.unwrap();
    assert!(link.contains(&code));
}

#[tokio::test]
async fn phone_invite_shows_up_as_notification_and_accept_joins() {
    let (app, addr, _state, _dir) = start().await;
    let admin = app
        .session
        .signup("Asha", "9876543210", "secret")
        .await
        .unwrap();
    let group_id = app.groups.create_group(&booking(&admin)).await.unwrap();

    let (guest_app, _guest_dir) = second_client(addr);
    guest_app
        .session
        .signup("Ravi", "9876543211", "secret")
        .await
        .unwrap();

    let invited = app.groups.invite_user_by_phone("9876543211").await.unwrap();
    assert_eq!(invited, "Ravi");

    guest_app.session.refresh_notifications().await.unwrap();
    assert_eq!(guest_app.session.notification_count(), 1);
    let invite = &guest_app.session.pending_invites()[0];
    assert_eq!(invite.group_id, group_id);
    assert_eq!(invite.invited_by, "Asha");

    guest_app.session.accept_invitation(&group_id).await.unwrap();
    assert_eq!(guest_app.session.notification_count(), 0);

    let group = app.groups.load_group(&group_id).await.unwrap();
    assert_eq!(group.group_members.len(), 2);
    assert!(group.group_members.iter().all(|m| m.has_accepted));
}

#[tokio::test]
async fn group_preview_by_code_does_not_join() {
    let (app, addr, _state, _dir) = start().await;
    let admin = app
        .session
        .signup("Asha", "9876543210", "secret")
        .await
        .unwrap();
    let group_id = app.groups.create_group(&booking(&admin)).await.unwrap();
    let code = app.groups.group().unwrap().invite_code;

    let (guest_app, _guest_dir) = second_client(addr);
    guest_app
        .session
        .signup("Ravi", "9876543211", "secret")
        .await
        .unwrap();
    let preview = guest_app.groups.group_by_invite_code(&code).await.unwrap();
    assert_eq!(preview.id, group_id);
    assert_eq!(preview.group_members.len(), 1, "preview must not join");
    assert!(guest_app.groups.group().is_none());
}

#[tokio::test]
async fn delete_is_refused_for_non_members_and_clears_local_state() {
    let (app, addr, _state, _dir) = start().await;
    let admin = app
        .session
        .signup("Asha", "9876543210", "secret")
        .await
        .unwrap();
    let group_id = app.groups.create_group(&booking(&admin)).await.unwrap();

    let (stranger_app, _stranger_dir) = second_client(addr);
    let stranger = stranger_app
        .session
        .signup("Mallory", "9876543212", "secret")
        .await
        .unwrap();
    let err = stranger_app
        .groups
        .delete_group(&group_id, &stranger.id)
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Forbidden(_)));

    app.groups.delete_group(&group_id, &admin.id).await.unwrap();
    assert!(app.groups.group().is_none());
    assert!(app.groups.my_groups().await.unwrap().is_empty());
}

#[tokio::test]
async fn my_groups_carries_membership_stats() {
    let (app, _addr, state, _dir) = start().await;
    let user = app
        .session
        .signup("Asha", "9876543210", "secret")
        .await
        .unwrap();
    let group_id = app.groups.create_group(&booking(&user)).await.unwrap();

    // Booking seeds an empty cart, which must not surface as an order
    assert!(state.order_view(&group_id).is_none());

    let groups = app.groups.my_groups().await.unwrap();
    assert_eq!(groups.len(), 1);
    assert!(groups[0].is_admin);
    assert_eq!(groups[0].member_count, 1);
    assert!(groups[0].order.is_none(), "no order before any cart push");
}

// ========== Menu ==========

#[tokio::test]
async fn menu_loads_remotely_when_the_backend_is_up() {
    let (app, _addr, _state, _dir) = start().await;
    let menu = app.menu.get_menu().await.unwrap();
    assert_eq!(menu.source, MenuSource::Remote);
    assert!(menu.data.data.iter().any(|s| s.title == "Starters"));

    let item = app.menu.get_menu_item("mn-02").await.unwrap();
    assert_eq!(item.name, "Butter Chicken");
    assert!(matches!(
        app.menu.get_menu_item("nope").await.unwrap_err(),
        ClientError::NotFound(_)
    ));
}

#[tokio::test]
async fn menu_falls_back_to_bundled_data_when_unreachable() {
    let dir = TempDir::new().unwrap();
    let config = ClientConfig::new("http://127.0.0.1:9").with_timeout(1);
    let app = TiffinClient::new(config, dir.path()).unwrap();

    let menu = app.menu.get_menu().await.unwrap();
    assert_eq!(menu.source, MenuSource::Bundled);
    assert!(!menu.data.data.is_empty());
}

// ========== Weather ==========

#[tokio::test]
async fn weather_update_is_visible_in_current_and_history() {
    let (app, _addr, _state, _dir) = start().await;
    let updated = app.weather.update(WeatherKind::Rainy).await.unwrap();
    assert_eq!(updated.current, WeatherKind::Rainy);

    assert_eq!(
        app.weather.current().await.unwrap().current,
        WeatherKind::Rainy
    );
    let history = app.weather.history().await.unwrap();
    assert_eq!(history[0].weather, WeatherKind::Rainy);
}

//! Mock REST API
//!
//! Mirrors the production backend surface closely enough for the client
//! crate's integration tests: same paths, same envelope, same status codes.
//! Business rules are the bare minimum (no hashing, fixed OTP, permissive
//! authorization wherever the real backend is the authority).

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
    Json, Router,
};
use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use rand::{distributions::Alphanumeric, Rng};
use serde::{Deserialize, Serialize};
use shared::client::{
    AdminAuthData, AdminLoginRequest, AuthData, CurrentUserData, DashboardData, GroupData,
    InviteLinkData, InvitedUserData, LoginRequest, NotificationsData, OrderData,
    ProfileUpdateRequest, SearchUserData, SearchUserRequest, SendOtpRequest, SignupRequest,
    TablesData, UserRef, VerifyOtpRequest,
};
use shared::models::{
    AdminUser, Group, GroupCreate, GroupMember, GroupOrderSummary, GroupSummary, GroupUpdate,
    InviteByPhone, InviteCreate, JoinRequest, OrderStatusUpdate, OrderUpdate, PendingInvite,
    TableStatusUpdate, User, WeatherData, WeatherHistoryEntry, WeatherKind,
};
use shared::response::Empty;
use shared::ApiResponse;

use crate::state::{AppState, ADMIN_PASSWORD, ADMIN_USERNAME, MOCK_OTP};

const AVATAR_COLORS: [&str; 6] = [
    "#e07a5f", "#3d405b", "#81b29a", "#f2cc8f", "#6d6875", "#457b9d",
];

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    exp: usize,
}

// ========== Helpers ==========

fn ok<T: Serialize>(data: T) -> Response {
    Json(ApiResponse::ok(data)).into_response()
}

fn fail(status: StatusCode, message: &str) -> Response {
    (status, Json(ApiResponse::<Empty>::error(message))).into_response()
}

fn issue_token(state: &AppState, sub: &str) -> String {
    let exp = (Utc::now().timestamp() + 24 * 3600) as usize;
    let claims = Claims {
        sub: sub.to_string(),
        exp,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(state.jwt_secret.as_bytes()),
    )
    .unwrap_or_default()
}

fn bearer_sub(state: &AppState, headers: &HeaderMap) -> Option<String> {
    let auth = headers.get("authorization")?.to_str().ok()?;
    let token = auth.strip_prefix("Bearer ")?;
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(state.jwt_secret.as_bytes()),
        &Validation::new(Algorithm::HS256),
    )
    .ok()?;
    Some(data.claims.sub)
}

fn authed_user(state: &AppState, headers: &HeaderMap) -> Result<User, Response> {
    bearer_sub(state, headers)
        .and_then(|sub| state.user_by_id(&sub))
        .ok_or_else(|| fail(StatusCode::UNAUTHORIZED, "Authentication required"))
}

fn authed_admin(state: &AppState, headers: &HeaderMap) -> Result<(), Response> {
    match bearer_sub(state, headers).as_deref() {
        Some("admin") => Ok(()),
        Some(_) => Err(fail(StatusCode::FORBIDDEN, "Admin access required")),
        None => Err(fail(StatusCode::UNAUTHORIZED, "Authentication required")),
    }
}

fn invite_code() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(6)
        .map(char::from)
        .collect::<String>()
        .to_uppercase()
}

fn member_of(user: &User, is_admin: bool, has_accepted: bool) -> GroupMember {
    GroupMember {
        user_id: user.id.clone(),
        name: user.name.clone(),
        avatar: user.avatar.clone(),
        color: user.color.clone(),
        is_admin,
        has_accepted,
    }
}

// ========== Auth ==========

async fn signup(State(state): State<Arc<AppState>>, Json(req): Json<SignupRequest>) -> Response {
    if req.name.is_empty() || req.phone.is_empty() || req.password.is_empty() {
        return fail(StatusCode::BAD_REQUEST, "Name, phone and password are required");
    }
    if state.phone_index.contains_key(&req.phone) {
        return fail(StatusCode::CONFLICT, "Phone number already registered");
    }

    let id = format!("u-{}", uuid::Uuid::new_v4());
    let avatar = req
        .name
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_else(|| "?".to_string());
    let color = AVATAR_COLORS[state.accounts.len() % AVATAR_COLORS.len()].to_string();
    let user = User {
        id: id.clone(),
        name: req.name,
        phone: req.phone.clone(),
        avatar,
        color,
    };

    state.accounts.insert(
        id.clone(),
        crate::state::Account {
            user: user.clone(),
            password: req.password,
        },
    );
    state.phone_index.insert(req.phone, id.clone());

    tracing::info!("Signed up {}", user.name);
    ok(AuthData {
        token: issue_token(&state, &id),
        user,
    })
}

async fn login(State(state): State<Arc<AppState>>, Json(req): Json<LoginRequest>) -> Response {
    let Some(id) = state.phone_index.get(&req.phone).map(|v| v.value().clone()) else {
        return fail(StatusCode::UNAUTHORIZED, "Invalid phone or password");
    };
    let Some(account) = state.accounts.get(&id) else {
        return fail(StatusCode::UNAUTHORIZED, "Invalid phone or password");
    };
    if account.password != req.password {
        return fail(StatusCode::UNAUTHORIZED, "Invalid phone or password");
    }

    ok(AuthData {
        token: issue_token(&state, &id),
        user: account.user.clone(),
    })
}

async fn send_otp(State(state): State<Arc<AppState>>, Json(req): Json<SendOtpRequest>) -> Response {
    state.bump("send-otp");
    if state.user_by_phone(&req.phone).is_none() {
        return fail(StatusCode::NOT_FOUND, "No account for this phone number");
    }
    tracing::debug!("OTP for {}: {}", req.phone, MOCK_OTP);
    ok(Empty {})
}

async fn verify_otp(
    State(state): State<Arc<AppState>>,
    Json(req): Json<VerifyOtpRequest>,
) -> Response {
    let Some(user) = state.user_by_phone(&req.phone) else {
        return fail(StatusCode::NOT_FOUND, "No account for this phone number");
    };
    if req.otp != MOCK_OTP {
        return fail(StatusCode::UNAUTHORIZED, "Invalid OTP");
    }
    ok(AuthData {
        token: issue_token(&state, &user.id),
        user,
    })
}

async fn me(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Response {
    match authed_user(&state, &headers) {
        Ok(user) => ok(CurrentUserData { user }),
        Err(resp) => resp,
    }
}

async fn update_profile(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(req): Json<ProfileUpdateRequest>,
) -> Response {
    let user = match authed_user(&state, &headers) {
        Ok(user) => user,
        Err(resp) => return resp,
    };
    if req.name.is_empty() {
        return fail(StatusCode::BAD_REQUEST, "Name is required");
    }
    let updated = {
        let mut account = match state.accounts.get_mut(&user.id) {
            Some(a) => a,
            None => return fail(StatusCode::NOT_FOUND, "User not found"),
        };
        account.user.name = req.name;
        account.user.clone()
    };
    ok(CurrentUserData { user: updated })
}

async fn search_user(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SearchUserRequest>,
) -> Response {
    ok(SearchUserData {
        user: state.user_by_phone(&req.phone),
    })
}

async fn admin_login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AdminLoginRequest>,
) -> Response {
    if req.username != ADMIN_USERNAME || req.password != ADMIN_PASSWORD {
        return fail(StatusCode::UNAUTHORIZED, "Invalid credentials");
    }
    ok(AdminAuthData {
        token: issue_token(&state, "admin"),
        admin: AdminUser {
            id: "admin".to_string(),
            username: ADMIN_USERNAME.to_string(),
            role: "manager".to_string(),
        },
    })
}

// ========== Groups ==========

async fn create_group(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(req): Json<GroupCreate>,
) -> Response {
    let user = match authed_user(&state, &headers) {
        Ok(user) => user,
        Err(resp) => return resp,
    };

    let id = format!("g-{}", uuid::Uuid::new_v4());
    let code = invite_code();
    let group = Group {
        id: id.clone(),
        name: format!("{}'s Group", req.admin_name),
        group_admin_id: req.admin_id.clone(),
        invite_code: code.clone(),
        arrival_time: req.arrival_time,
        departure_time: req.departure_time,
        date: req.date,
        table: None,
        discount: None,
        group_members: vec![member_of(&user, true, true)],
        status: Some("pending".to_string()),
        invite_link: Some(format!("https://tiffin.example/join/{}", code)),
    };

    state.groups.insert(id.clone(), group.clone());
    state.order_items.insert(id.clone(), Vec::new());
    tracing::info!("Group created: {}", id);
    ok(GroupData { group })
}

async fn my_groups(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Response {
    let user = match authed_user(&state, &headers) {
        Ok(user) => user,
        Err(resp) => return resp,
    };

    let summaries: Vec<GroupSummary> = state
        .groups
        .iter()
        .filter(|entry| entry.group_members.iter().any(|m| m.user_id == user.id))
        .map(|entry| {
            let group = entry.value().clone();
            let order = state.order_view(&group.id).map(|o| GroupOrderSummary {
                id: o.id.clone(),
                final_amount: o.final_amount,
                status: o.status.clone(),
                item_count: o.items.iter().map(|i| i.quantity).sum(),
            });
            GroupSummary {
                member_count: group.group_members.len() as u32,
                is_admin: group.is_admin(&user.id),
                order,
                group,
            }
        })
        .collect();
    ok(summaries)
}

async fn get_group(State(state): State<Arc<AppState>>, Path(id): Path<String>) -> Response {
    match state.groups.get(&id) {
        Some(group) => ok(GroupData {
            group: group.value().clone(),
        }),
        None => fail(StatusCode::NOT_FOUND, "Group not found"),
    }
}

async fn update_group(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<GroupUpdate>,
) -> Response {
    let Some(mut group) = state.groups.get_mut(&id) else {
        return fail(StatusCode::NOT_FOUND, "Group not found");
    };
    if let Some(name) = req.name {
        group.name = name;
    }
    if let Some(arrival) = req.arrival_time {
        group.arrival_time = arrival;
    }
    if let Some(departure) = req.departure_time {
        group.departure_time = departure;
    }
    if let Some(date) = req.date {
        group.date = date;
    }
    if let Some(table) = req.table {
        group.table = Some(table);
    }
    ok(GroupData {
        group: group.value().clone(),
    })
}

async fn delete_group(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<UserRef>,
) -> Response {
    let Some(group) = state.groups.get(&id).map(|g| g.value().clone()) else {
        return fail(StatusCode::NOT_FOUND, "Group not found");
    };
    if !group.group_members.iter().any(|m| m.user_id == req.user_id) {
        return fail(StatusCode::FORBIDDEN, "Only members can delete a group");
    }
    state.groups.remove(&id);
    state.order_items.remove(&id);
    state.order_status.remove(&id);
    tracing::info!("Group deleted: {}", id);
    ok(Empty {})
}

// ========== Orders ==========

async fn update_order(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(group_id): Path<String>,
    Json(req): Json<OrderUpdate>,
) -> Response {
    if authed_user(&state, &headers).is_err() {
        return fail(StatusCode::UNAUTHORIZED, "Authentication required");
    }
    if !state.groups.contains_key(&group_id) {
        return fail(StatusCode::NOT_FOUND, "Group not found");
    }
    state.bump(format!("order-write:{}", group_id));

    // Full replace of this member's portion; other members' lines are untouched
    let mut items = state.order_items.entry(group_id.clone()).or_default();
    items.retain(|line| line.added_by != req.user_id);
    items.extend(req.items.into_iter().map(|mut line| {
        line.added_by = req.user_id.clone();
        line
    }));
    drop(items);

    ok(OrderData {
        order: state.order_view(&group_id),
    })
}

async fn get_order(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(group_id): Path<String>,
) -> Response {
    if authed_user(&state, &headers).is_err() {
        return fail(StatusCode::UNAUTHORIZED, "Authentication required");
    }
    if !state.groups.contains_key(&group_id) {
        return fail(StatusCode::NOT_FOUND, "Group not found");
    }
    state.bump(format!("order-read:{}", group_id));
    ok(OrderData {
        order: state.order_view(&group_id),
    })
}

async fn update_order_status(
    State(state): State<Arc<AppState>>,
    Path(order_id): Path<String>,
    Json(req): Json<OrderStatusUpdate>,
) -> Response {
    let group_id = order_id.trim_start_matches("order-").to_string();
    if !state.groups.contains_key(&group_id) {
        return fail(StatusCode::NOT_FOUND, "Order not found");
    }
    if let Some(status) = req.status {
        state.order_status.insert(group_id.clone(), status);
    }
    ok(OrderData {
        order: state.order_view(&group_id),
    })
}

async fn remove_order_item(
    State(state): State<Arc<AppState>>,
    Path((group_id, item_id)): Path<(String, String)>,
    Json(req): Json<UserRef>,
) -> Response {
    let Some(mut items) = state.order_items.get_mut(&group_id) else {
        return fail(StatusCode::NOT_FOUND, "Group not found");
    };
    items.retain(|line| !(line.id == item_id && line.added_by == req.user_id));
    drop(items);
    ok(OrderData {
        order: state.order_view(&group_id),
    })
}

// ========== Invites ==========

async fn invite_member(
    State(state): State<Arc<AppState>>,
    Json(req): Json<InviteCreate>,
) -> Response {
    let Some(group) = state.groups.get(&req.group_id) else {
        return fail(StatusCode::NOT_FOUND, "Group not found");
    };
    if group.group_admin_id != req.admin_id {
        return fail(StatusCode::FORBIDDEN, "Only the admin can generate invites");
    }
    ok(InviteLinkData {
        invite_link: format!("https://tiffin.example/join/{}", group.invite_code),
    })
}

async fn invite_user(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(req): Json<InviteByPhone>,
) -> Response {
    let inviter = match authed_user(&state, &headers) {
        Ok(user) => user,
        Err(resp) => return resp,
    };
    let Some(group) = state.groups.get(&req.group_id).map(|g| g.value().clone()) else {
        return fail(StatusCode::NOT_FOUND, "Group not found");
    };
    let Some(invited) = state.user_by_phone(&req.phone) else {
        return fail(StatusCode::NOT_FOUND, "No account for this phone number");
    };

    state
        .invites
        .entry(invited.id.clone())
        .or_default()
        .push(PendingInvite {
            group_id: group.id.clone(),
            group_name: group.name.clone(),
            invited_by: inviter.name.clone(),
            invited_at: Utc::now(),
        });
    ok(InvitedUserData { invited_user: invited })
}

async fn join_group(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(req): Json<JoinRequest>,
) -> Response {
    let user = match authed_user(&state, &headers) {
        Ok(user) => user,
        Err(resp) => return resp,
    };
    let Some(group_id) = state
        .groups
        .iter()
        .find(|g| g.invite_code == req.invite_code)
        .map(|g| g.id.clone())
    else {
        return fail(StatusCode::NOT_FOUND, "Invalid invite code");
    };

    let group = {
        let mut group = match state.groups.get_mut(&group_id) {
            Some(g) => g,
            None => return fail(StatusCode::NOT_FOUND, "Group not found"),
        };
        if !group.group_members.iter().any(|m| m.user_id == user.id) {
            group.group_members.push(member_of(&user, false, true));
        }
        group.value().clone()
    };

    if let Some(mut invites) = state.invites.get_mut(&user.id) {
        invites.retain(|i| i.group_id != group_id);
    }
    ok(GroupData { group })
}

async fn group_by_code(State(state): State<Arc<AppState>>, Path(code): Path<String>) -> Response {
    match state.groups.iter().find(|g| g.invite_code == code) {
        Some(group) => ok(GroupData {
            group: group.value().clone(),
        }),
        None => fail(StatusCode::NOT_FOUND, "Invalid invite code"),
    }
}

async fn accept_invitation(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(group_id): Path<String>,
) -> Response {
    let user = match authed_user(&state, &headers) {
        Ok(user) => user,
        Err(resp) => return resp,
    };
    {
        let Some(mut group) = state.groups.get_mut(&group_id) else {
            return fail(StatusCode::NOT_FOUND, "Group not found");
        };
        match group.group_members.iter_mut().find(|m| m.user_id == user.id) {
            Some(member) => member.has_accepted = true,
            None => {
                let member = member_of(&user, false, true);
                group.group_members.push(member);
            }
        }
    }
    if let Some(mut invites) = state.invites.get_mut(&user.id) {
        invites.retain(|i| i.group_id != group_id);
    }
    ok(Empty {})
}

async fn notifications(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Response {
    let user = match authed_user(&state, &headers) {
        Ok(user) => user,
        Err(resp) => return resp,
    };
    let pending = state
        .invites
        .get(&user.id)
        .map(|v| v.value().clone())
        .unwrap_or_default();
    ok(NotificationsData {
        count: pending.len() as u32,
        pending_invites: pending,
    })
}

// ========== Menu ==========

async fn get_menu(State(state): State<Arc<AppState>>) -> Response {
    state.bump("menu");
    ok(state.menu.clone())
}

async fn get_menu_item(State(state): State<Arc<AppState>>, Path(id): Path<String>) -> Response {
    match state.menu.find_item(&id) {
        Some(item) => ok(item.clone()),
        None => fail(StatusCode::NOT_FOUND, "Menu item not found"),
    }
}

// ========== Weather ==========

#[derive(Deserialize)]
struct WeatherUpdateRequest {
    weather: WeatherKind,
}

async fn weather_current(State(state): State<Arc<AppState>>) -> Response {
    match state.weather.read() {
        Ok(guard) => ok(guard.0.clone()),
        Err(_) => fail(StatusCode::INTERNAL_SERVER_ERROR, "Weather state poisoned"),
    }
}

async fn weather_update(
    State(state): State<Arc<AppState>>,
    Json(req): Json<WeatherUpdateRequest>,
) -> Response {
    match state.weather.write() {
        Ok(mut guard) => {
            let data = WeatherData {
                current: req.weather,
                updated_at: Utc::now(),
            };
            guard.1.insert(
                0,
                WeatherHistoryEntry {
                    weather: req.weather,
                    changed_at: data.updated_at,
                },
            );
            guard.0 = data.clone();
            ok(data)
        }
        Err(_) => fail(StatusCode::INTERNAL_SERVER_ERROR, "Weather state poisoned"),
    }
}

async fn weather_history(State(state): State<Arc<AppState>>) -> Response {
    match state.weather.read() {
        Ok(guard) => ok(guard.1.clone()),
        Err(_) => fail(StatusCode::INTERNAL_SERVER_ERROR, "Weather state poisoned"),
    }
}

// ========== Admin ==========

async fn dashboard(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Response {
    if let Err(resp) = authed_admin(&state, &headers) {
        return resp;
    }
    let tables = state.tables.iter().map(|t| t.value().clone()).collect();
    let pending_reservations = state
        .groups
        .iter()
        .filter(|g| g.status.as_deref() == Some("pending"))
        .map(|g| g.value().clone())
        .collect();
    let active_orders = state
        .groups
        .iter()
        .filter_map(|g| state.order_view(&g.id))
        .filter(|o| !o.items.is_empty())
        .collect();
    ok(DashboardData {
        tables,
        pending_reservations,
        active_orders,
    })
}

async fn confirm_reservation(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    if let Err(resp) = authed_admin(&state, &headers) {
        return resp;
    }
    let Some(mut group) = state.groups.get_mut(&id) else {
        return fail(StatusCode::NOT_FOUND, "Group not found");
    };
    group.status = Some("confirmed".to_string());
    ok(GroupData {
        group: group.value().clone(),
    })
}

async fn cancel_reservation(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    if let Err(resp) = authed_admin(&state, &headers) {
        return resp;
    }
    let Some(mut group) = state.groups.get_mut(&id) else {
        return fail(StatusCode::NOT_FOUND, "Group not found");
    };
    group.status = Some("cancelled".to_string());
    ok(Empty {})
}

async fn admin_tables(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Response {
    if let Err(resp) = authed_admin(&state, &headers) {
        return resp;
    }
    ok(TablesData {
        tables: state.tables.iter().map(|t| t.value().clone()).collect(),
    })
}

async fn update_table_status(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(req): Json<TableStatusUpdate>,
) -> Response {
    if let Err(resp) = authed_admin(&state, &headers) {
        return resp;
    }
    let Some(mut table) = state.tables.get_mut(&id) else {
        return fail(StatusCode::NOT_FOUND, "Table not found");
    };
    table.status = req.status;
    if let Some(guests) = req.current_guests {
        table.current_guests = guests;
    }
    ok(table.value().clone())
}

async fn admin_update_order_status(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(order_id): Path<String>,
    Json(req): Json<OrderStatusUpdate>,
) -> Response {
    if let Err(resp) = authed_admin(&state, &headers) {
        return resp;
    }
    update_order_status(State(state), Path(order_id), Json(req)).await
}

// ========== Router ==========

pub fn router(state: Arc<AppState>) -> Router {
    use tower::limit::ConcurrencyLimitLayer;
    use tower_http::cors::CorsLayer;
    use tower_http::trace::TraceLayer;

    Router::new()
        // Auth
        .route("/api/auth/signup", post(signup))
        .route("/api/auth/login", post(login))
        .route("/api/auth/send-otp", post(send_otp))
        .route("/api/auth/verify-otp", post(verify_otp))
        .route("/api/auth/me", get(me))
        .route("/api/auth/profile", put(update_profile))
        .route("/api/auth/search-user", post(search_user))
        .route("/api/auth/admin-login", post(admin_login))
        // Groups
        .route("/api/groups/my-groups", get(my_groups))
        .route("/api/groups/create-group", post(create_group))
        .route("/api/groups/{id}", get(get_group).put(update_group).delete(delete_group))
        .route("/api/groups/{id}/group-order", get(get_order))
        // Orders
        .route("/api/orders/{group_id}/update-order", post(update_order))
        .route("/api/orders/{group_id}", get(get_order))
        .route("/api/orders/{group_id}/status", put(update_order_status))
        .route("/api/orders/{group_id}/item/{item_id}", delete(remove_order_item))
        // Invites
        .route("/api/invites/invite-member", post(invite_member))
        .route("/api/invites/invite-user", post(invite_user))
        .route("/api/invites/join", post(join_group))
        .route("/api/invites/group/{code}", get(group_by_code))
        .route("/api/invites/accept/{group_id}", post(accept_invitation))
        .route("/api/invites/notifications", get(notifications))
        // Menu
        .route("/api/menu", get(get_menu))
        .route("/api/menu/item/{id}", get(get_menu_item))
        // Weather
        .route("/api/weather/current", get(weather_current))
        .route("/api/weather/update", post(weather_update))
        .route("/api/weather/history", get(weather_history))
        // Admin
        .route("/api/admin/dashboard", get(dashboard))
        .route("/api/admin/reservation/{id}/confirm", post(confirm_reservation))
        .route("/api/admin/reservation/{id}/cancel", post(cancel_reservation))
        .route("/api/admin/tables", get(admin_tables))
        .route("/api/admin/table/{id}/status", put(update_table_status))
        .route("/api/admin/order/{id}/status", put(admin_update_order_status))
        .layer(ConcurrencyLimitLayer::new(100))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

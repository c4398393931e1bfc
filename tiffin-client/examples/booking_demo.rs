//! End-to-end booking walkthrough against a running backend
//!
//! Signs up a diner, books a table, fills the shared cart and prints the
//! server-computed bill. Start the mock first:
//!
//! Run: cargo run -p tiffin-mock
//! Then: cargo run --example booking_demo

use std::time::Duration;

use tiffin_client::models::GroupCreate;
use tiffin_client::{ClientConfig, TiffinClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let data_dir = std::env::temp_dir().join("tiffin-demo");
    let app = TiffinClient::new(ClientConfig::from_env(), data_dir)?;

    let phone = format!("98{}", rand_suffix());
    let user = app.session.signup("Demo Diner", &phone, "secret").await?;
    println!("Signed up as {} ({})", user.name, user.phone);

    let group_id = app
        .groups
        .create_group(&GroupCreate {
            admin_name: user.name.clone(),
            admin_id: user.id.clone(),
            arrival_time: "19:00".into(),
            departure_time: "21:00".into(),
            date: "2026-09-01".into(),
            guest_count: Some(2),
        })
        .await?;
    let group = app.groups.group().ok_or("group not loaded")?;
    println!("Booked group {} (invite code {})", group_id, group.invite_code);

    let menu = app.menu.get_menu().await?;
    println!("Menu loaded from {:?}:", menu.source);
    for section in &menu.data.data {
        println!("  {} ({} items)", section.title, section.items.len());
    }

    let cart = app.cart()?;
    cart.set_current_group(Some(group_id.clone())).await?;

    // Order the first two dishes on the menu
    for item in menu.data.data.iter().flat_map(|s| s.items.iter()).take(2) {
        cart.add_item(item).await;
        println!("Added {} (₹{})", item.name, item.price);
    }

    // Wait out the debounce and cooldown, then make sure the push landed
    let sync = app.config().sync;
    tokio::time::sleep(sync.debounce + Duration::from_millis(500)).await;
    tokio::time::sleep(sync.cooldown).await;
    cart.sync_now().await?;

    if let Some(order) = cart.group_order().await? {
        println!("Bill for group {}:", order.group_id);
        println!("  items      ₹{:.2}", order.total_amount);
        println!("  service    ₹{:.2}", order.service_charge);
        println!("  tax        ₹{:.2}", order.tax);
        println!("  total      ₹{:.2}", order.final_amount);
    }

    app.session.logout();
    Ok(())
}

fn rand_suffix() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(0);
    format!("{:08}", nanos % 100_000_000)
}

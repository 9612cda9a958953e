//! End-to-end order tracking example
//!
//! Resolves a brand slug, composes the customer number, creates an order,
//! and follows it to a terminal state or payment expiry.
//!
//! Run: cargo run --example track_order -- <base_url> <brand-slug> <user_id> [zone_id]

use std::sync::Arc;

use shared::profile;
use shared::slug::find_brand_by_slug;
use topup_client::{ClientConfig, CreateOrderRequest, OrderTracker};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let mut args = std::env::args().skip(1);
    let base_url = args.next().unwrap_or_else(|| "http://localhost:8080".to_string());
    let brand_slug = args.next().unwrap_or_else(|| "mobile-legends".to_string());
    let user_id = args.next().unwrap_or_else(|| "12345678".to_string());
    let zone_id = args.next();

    let client = ClientConfig::new(&base_url).build_http_client();

    // Slug -> canonical brand, over the merged catalog universe
    let brands = client.brand_names().await?;
    let Some(brand) = find_brand_by_slug(&brand_slug, &brands) else {
        eprintln!("Brand not found: {brand_slug}");
        std::process::exit(1);
    };
    println!("Brand: {brand}");

    // Strict validation first, then the lenient composition
    profile::ensure_complete(brand, &user_id, zone_id.as_deref())?;
    let customer_no = profile::compose_customer_number(brand, &user_id, zone_id.as_deref());
    println!("Customer number: {customer_no}");

    let order = client
        .create_order(&CreateOrderRequest {
            product_code: "example-sku".to_string(),
            customer_no,
            payment_method: "qris".to_string(),
            phone: None,
        })
        .await?;
    println!("Order created: {} (ref {})", order.id, order.ref_id);

    let initial = client.order_status(&order.id).await?;
    let tracker = OrderTracker::new(Arc::new(client), &order.id, Some(order.ref_id), initial);

    let mut updates = tracker.subscribe();
    let handle = tracker.start();

    let printer = tokio::spawn(async move {
        while updates.changed().await.is_ok() {
            let state = updates.borrow().clone();
            if state.locally_expired {
                println!("Payment window expired ({})", state.status_label);
            } else {
                println!(
                    "[{}s left] {:?} - {}",
                    state.remaining_seconds, state.status, state.status_label
                );
            }
        }
    });

    handle.await?;
    printer.abort();
    println!("Final status: {:?}", tracker.current().status);
    Ok(())
}

//! Console admin for the storefront back office.
//!
//! Commands:
//! - `orders [input [column]]` — fetch all orders newest-first and optionally
//!   filter them; without a column the input filters across all columns.
//! - `order-status <id> <status>` — request a status transition.
//! - `report [bucket]` — customer report for a relative date bucket
//!   (default `today`).

use chrono::Local;
use dotenvy::dotenv;
use fstore_admin::api::ApiClient;
use fstore_admin::config;
use fstore_admin::core::filter::OrderColumn;
use fstore_admin::core::report::{CustomerReportQuery, load_customer_report, render_customer_report};
use fstore_admin::core::table::{FilterEvent, order_table_config};
use fstore_admin::core::time_filter::{FilterBucket, resolve_bucket};
use fstore_admin::core::workflow::OrderWorkflow;
use fstore_admin::entities::{Order, OrderStatus};
use fstore_admin::errors::{Error, Result};
use std::env;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file (non-fatal, env vars can be set externally)
    dotenv().ok();

    // 3. Load the main application configuration
    let app_config = config::load_app_configuration()?;
    info!("Using storefront API at {}", app_config.api.base_url);

    // 4. Build the API client
    let client = ApiClient::new(&app_config.api)?;

    // 5. Dispatch the requested command; failures are scoped to the action
    // and surfaced as a single notification
    let args: Vec<String> = env::args().skip(1).collect();
    if let Err(err) = run_command(client, &args).await {
        error!("Operation failed: {err}");
    }

    Ok(())
}

async fn run_command(client: ApiClient, args: &[String]) -> Result<()> {
    match args.first().map(String::as_str) {
        None | Some("orders") => {
            let input = args.get(1).cloned().unwrap_or_default();
            let column = match args.get(2) {
                Some(key) => Some(OrderColumn::from_key(key).ok_or_else(|| Error::Config {
                    message: format!("unknown column `{key}`"),
                })?),
                None => None,
            };
            show_orders(client, &input, column).await
        }
        Some("order-status") => {
            let id: i64 = args
                .get(1)
                .and_then(|raw| raw.parse().ok())
                .ok_or_else(|| Error::Config {
                    message: "usage: order-status <id> <status>".to_string(),
                })?;
            let status: OrderStatus = args
                .get(2)
                .ok_or_else(|| Error::Config {
                    message: "usage: order-status <id> <status>".to_string(),
                })?
                .parse()?;
            change_order_status(client, id, status).await
        }
        Some("report") => {
            let bucket = match args.get(1) {
                Some(key) => FilterBucket::from_key(key).ok_or_else(|| Error::Config {
                    message: format!("unknown bucket `{key}`"),
                })?,
                None => FilterBucket::Today,
            };
            show_customer_report(client, bucket).await
        }
        Some(other) => Err(Error::Config {
            message: format!(
                "unknown command `{other}`; expected `orders`, `order-status`, or `report`"
            ),
        }),
    }
}

async fn show_orders(client: ApiClient, input: &str, column: Option<OrderColumn>) -> Result<()> {
    let workflow = OrderWorkflow::new(client);
    workflow.refresh().await?;

    let snapshot = workflow.orders_snapshot();
    let event = FilterEvent {
        input: input.to_string(),
        column,
    };
    let filtered = event.apply(&snapshot);
    info!(
        total = snapshot.len(),
        shown = filtered.len(),
        "orders fetched"
    );
    print_orders(&filtered);
    Ok(())
}

fn print_orders(orders: &[Order]) {
    let table = order_table_config();
    for order in orders {
        let cells: Vec<String> = table
            .visible_columns()
            .filter(|column| column.key != OrderColumn::Images)
            .map(|column| format!("{}: {}", column.title, column.key.project(order)))
            .collect();
        let color = table.row_color(order.status).unwrap_or("plain");
        println!("[{color:>6}] {}", cells.join(" | "));
    }
}

async fn change_order_status(client: ApiClient, id: i64, status: OrderStatus) -> Result<()> {
    let workflow = OrderWorkflow::new(client);
    workflow.refresh().await?;
    workflow.update_status(id, status).await?;

    if let Some(updated) = workflow
        .orders_snapshot()
        .into_iter()
        .find(|order| order.id == id)
    {
        println!("Order {} is now {}", updated.id, updated.status);
    }
    Ok(())
}

async fn show_customer_report(client: ApiClient, bucket: FilterBucket) -> Result<()> {
    let now = Local::now().naive_local();
    let query = CustomerReportQuery::for_bucket(bucket);
    let rows = load_customer_report(&client, &query, now).await?;
    print!("{}", render_customer_report(&rows, &resolve_bucket(bucket, now)));
    Ok(())
}

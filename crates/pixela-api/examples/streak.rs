//! Record today's effort on a graph and print where it stands.
//!
//! Reads `PIXELA_USERNAME` and `PIXELA_USER_TOKEN` from the environment:
//!
//! ```sh
//! cargo run --example streak -- reading-streak
//! ```

use chrono::Utc;
use pixela_api::{GraphColor, GraphType, Pixela};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let graph_id = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "reading-streak".to_string());

    let pixela = Pixela::from_env()?;
    let graphs = pixela.graphs();

    // Create the graph on first use; an existing id is fine.
    let existing = graphs.list().await?;
    if !existing.iter().any(|g| g.id == graph_id) {
        graphs
            .create(
                &graph_id,
                "Pages read",
                "pages",
                GraphType::Int,
                GraphColor::Shibafu,
                Some("UTC"),
                None,
            )
            .await?;
        println!("created graph {graph_id}");
    }

    let today = Utc::now().date_naive();
    pixela.pixel().create(&graph_id, today, 10, None).await?;

    let stats = graphs.stats(&graph_id).await?;
    println!(
        "{} days recorded, {} pages total, {} today",
        stats.total_pixels_count, stats.total_quantity, stats.todays_quantity
    );
    println!("details: {}", graphs.details_url(&graph_id));

    Ok(())
}

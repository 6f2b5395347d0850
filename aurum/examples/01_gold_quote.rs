mod common;

use aurum::{Aurum, ChatQuery};
use common::{get_connectors, init_logging};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    // 1. Register every connector. Ones without credentials are skipped at call time.
    let mut builder = Aurum::builder();
    for c in get_connectors() {
        builder = builder.with_connector(c);
    }
    let aurum = builder.build()?;

    // 2. Spot price. Falls back to the synthetic walk when no provider answers.
    let quote = aurum.price().await;
    println!(
        "Gold: ${}/oz ({:+}, {:+}%) via {}",
        quote.spot_price_usd_per_oz, quote.change_24h_abs, quote.change_24h_pct, quote.source
    );

    // 3. A chat question.
    let reply = aurum
        .chat(ChatQuery::new("Is gold a good hedge against inflation?"))
        .await?;
    println!("\n[{:?}] {}", reply.source, reply.text);

    // 4. Provider health.
    let report = aurum.health_report().await;
    println!("\nStatus: {:?}", report.status);
    for h in &report.providers {
        println!(
            "  {:<12} {:<6} {:?} attempts={} last_error={:?}",
            h.provider_name, h.capability, h.last_status, h.attempts, h.last_error
        );
    }
    Ok(())
}

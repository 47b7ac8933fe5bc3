//! Walkthrough of the freelas services
//!
//! Registers a customer and two projects for one user, lists them, updates
//! one, and shows that a second user cannot see any of it.
//!
//! Run with: `cargo run --example walkthrough [config.yaml]`

use freelas::prelude::*;
use freelas::telemetry::init_tracing;

#[tokio::main]
async fn main() -> Result<()> {
    let config = match std::env::args().nth(1) {
        Some(path) => FreelasConfig::from_yaml_file(&path)?,
        None => FreelasConfig::default(),
    };
    init_tracing(&config.logging)?;

    let freelas = FreelasBuilder::new()
        .with_config(config)
        .with_repository(InMemoryProjectRepository::new())
        .build()?;

    let alice = UserId::new(1);
    let bob = UserId::new(2);

    let customer = freelas
        .customers
        .register(
            alice,
            RegisterCustomerRequest {
                name: "ACME".to_string(),
            },
        )
        .await?;
    println!("customer: {}", serde_json::to_string_pretty(&customer)?);

    let start = NaiveDate::from_ymd_opt(2024, 1, 31)
        .ok_or_else(|| anyhow::anyhow!("invalid start date"))?;

    let website = freelas
        .projects
        .register(
            alice,
            RegisterFreelaRequest {
                name: "Website".to_string(),
                price: Decimal::from(100),
                payment_installment_count: 3,
                start_payment_date: start,
                customer_id: customer.id.clone(),
            },
        )
        .await?;
    println!("registered: {}", serde_json::to_string_pretty(&website)?);

    freelas
        .projects
        .register(
            alice,
            RegisterFreelaRequest {
                name: "Api".to_string(),
                price: Decimal::from(1200),
                payment_installment_count: 12,
                start_payment_date: start,
                customer_id: customer.id.clone(),
            },
        )
        .await?;

    let page = freelas
        .projects
        .list_all(alice, &NameFilter::default(), Pagination::new(1, 10))
        .await?;
    println!("listing: {}", serde_json::to_string_pretty(&page)?);

    freelas
        .projects
        .update(
            alice,
            &website.id,
            UpdateFreelaRequest {
                name: Some("Website v2".to_string()),
                ..Default::default()
            },
        )
        .await?;

    match freelas.projects.get_by_id(bob, &website.id).await {
        Err(e) => println!("bob sees: {} ({})", e, e.error_code()),
        Ok(_) => anyhow::bail!("bob must not see alice's project"),
    }

    freelas.projects.delete(alice, &website.id).await?;
    let remaining = freelas
        .projects
        .list_all(alice, &NameFilter::default(), Pagination::default())
        .await?;
    println!("remaining projects: {}", remaining.pagination.total);

    Ok(())
}

use anyhow::Result;

use crate::backend::HttpBackend;
use crate::core::AppConfig;

pub async fn run(config: &AppConfig) -> Result<()> {
    let backend = HttpBackend::from_config(config);

    let info = backend.info().await?;
    println!("{}", info.message);
    println!("Backend: {}", backend.base_url());
    for (path, description) in info.endpoints.iter() {
        println!("  {:<20} {}", path, description);
    }
    if let Some(goal) = &info.goal {
        println!("Goal: {}", goal);
    }

    let preview = backend.database_preview().await?;
    println!("\nCustomers:");
    for (user, customer) in preview.customers.iter() {
        println!(
            "  {:<10} {} ({}) orders: {} payment on file: {}",
            user,
            customer.name,
            customer.customer_id,
            customer.order_count,
            if customer.has_payment_info { "yes" } else { "no" }
        );
    }

    Ok(())
}

//! Demo: Sandbox tour
//!
//! Showcases: signed requests, typed responses, error maps
//!
//! Run: COINSPAID_PUBLIC_KEY=... COINSPAID_SECRET_KEY=... \
//!      COINSPAID_ENDPOINT=https://sandbox.coinspaid.com/api/v2 \
//!      cargo run --bin sandbox_tour

use coinspaid_rest::{ClientConfig, CoinsPaidClient, RestError};
use colored::*;
use rust_decimal_macros::dec;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("{}", "═".repeat(60).cyan());
    println!("{}", "  COINSPAID SANDBOX TOUR".cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!();

    let config = ClientConfig::from_env()?.with_timeout(Duration::from_secs(15));
    let client = CoinsPaidClient::new(config)?;

    if client.ping().await {
        println!("{} {} is reachable", "✓".green(), client.endpoint());
    } else {
        println!("{} {} did not answer", "✗".red(), client.endpoint());
        return Ok(());
    }

    println!("\n{}", "Currencies".bold());
    for currency in client.list_currencies().await? {
        println!(
            "  {:<8} {:<6} min {:<12} withdrawal fee {}%",
            currency.currency,
            currency.kind.to_string(),
            currency.minimum_amount.to_string(),
            currency.withdrawal_fee_percent
        );
    }

    println!("\n{}", "Balances".bold());
    for account in client.list_balances().await? {
        println!("  {:<8} {}", account.currency, account.balance);
    }

    println!("\n{}", "Quote: 0.01 BTC -> USD".bold());
    match client.calculate_exchange_by_sent("BTC", "USD", dec!(0.01)).await {
        Ok(quote) => println!(
            "  receive {} {} at {} (fee {} {}), valid {}s",
            quote.receiver_amount,
            quote.receiver_currency,
            quote.price,
            quote.fee_amount,
            quote.fee_currency,
            quote.fix_period
        ),
        Err(RestError::Api(errors)) => {
            for (field, message) in errors.errors().iter() {
                println!("  {} {}: {}", "✗".red(), field, message);
            }
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}

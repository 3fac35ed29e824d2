use anyhow::{Context, Result};
use clap::Parser;
use payhook::{config::Config, models::TransactionRequest, services::gateway_from_config};

/// Initialize a checkout transaction and print the checkout details.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Amount in the minor currency unit (kobo, cents, ...)
    #[arg(long, default_value_t = 10000)]
    amount: u64,

    /// Customer email
    #[arg(long, default_value = "test@example.com")]
    email: String,

    /// Customer name (KoraPay only)
    #[arg(long)]
    customer_name: Option<String>,

    /// Currency code, e.g. NGN
    #[arg(long)]
    currency: Option<String>,

    /// Reference to attach to the transaction
    #[arg(long, conflicts_with = "generate_reference")]
    reference: Option<String>,

    /// Generate a <PROVIDER>-<timestamp>-<id> reference instead of letting the provider pick one
    #[arg(long)]
    generate_reference: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = Config::from_env()?;
    let gateway = gateway_from_config(&config);

    let mut request = TransactionRequest::new(cli.amount, cli.email);
    if let Some(name) = cli.customer_name {
        request = request.with_customer_name(name);
    }
    if let Some(currency) = cli.currency {
        request = request.with_currency(currency);
    }
    if let Some(reference) = cli.reference {
        request = request.with_reference(reference);
    } else if cli.generate_reference {
        request = request.with_reference(payhook::services::generate_reference(
            config.provider.name(),
        ));
    }

    let response = gateway
        .initialize_transaction(&request)
        .await
        .context("Failed to initialize transaction")?;

    println!("Provider:          {}", config.provider.name());
    println!(
        "Authorization URL: {}",
        response.data.authorization_url().unwrap_or("-")
    );
    println!(
        "Access code:       {}",
        response.data.access_code().unwrap_or("-")
    );
    println!("Reference:         {}", response.data.reference);
    println!();
    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}

/// Example: Send USDT through the gasless relay and wait for confirmation
///
/// Run with: cargo run -p examples --bin send_usdt
///
/// Required environment variables:
/// - LOGIN_EMAIL, LOGIN_PASSWORD
/// - RECIPIENT (username or email of the receiving user)
///
/// Optional:
/// - BACKEND_BASE (defaults to http://127.0.0.1:5050)
/// - TRANSFER_AMOUNT (defaults to 1.00)
use common::status::TransferStatus;
use session::Session;
use std::env;

#[tokio::main]
async fn main() -> Result<(), String> {
    // Load environment variables
    dotenvy::dotenv().ok();
    env_logger::init();

    let client = backend::Client::from_env(Session::new())
        .map_err(|e| format!("Failed to build client: {}", e))?;

    println!("Logging in...");
    let email = env::var("LOGIN_EMAIL").expect("LOGIN_EMAIL must be set");
    let password = env::var("LOGIN_PASSWORD").expect("LOGIN_PASSWORD must be set");
    let auth = client
        .login(&email, &password)
        .await
        .map_err(|e| format!("Login failed: {}", e))?;
    println!("Logged in as {} ({})", auth.user.name, auth.user.email);

    let recipient = env::var("RECIPIENT").expect("RECIPIENT must be set");
    let amount = env::var("TRANSFER_AMOUNT").unwrap_or_else(|_| "1.00".to_string());

    // The send page vets the recipient before enabling the button
    match client.user_exists(&recipient).await {
        Ok(true) => println!("Recipient {} exists", recipient),
        Ok(false) => println!("⚠️  {} is not a known user, sending anyway", recipient),
        Err(e) => println!("Recipient lookup failed ({}), sending anyway", e),
    }

    println!("\nSending {} USDT to {}...", amount, recipient);
    let status = plasmapay::send_and_wait(&client, &recipient, &amount)
        .await
        .map_err(|e| format!("Transfer failed: {}", e))?;

    match status {
        TransferStatus::Confirmed { tx_hash } => {
            println!(
                "✅ Confirmed! txHash: {}",
                tx_hash.unwrap_or_else(|| "<not reported>".to_string())
            );
        }
        TransferStatus::Failed { error } => {
            println!(
                "❌ Failed: {}",
                error.unwrap_or_else(|| "Unknown revert".to_string())
            );
        }
        TransferStatus::Timeout { error } => {
            println!("⏳ Pending... ({})", error.unwrap_or_default());
        }
        TransferStatus::Pending => {}
    }

    Ok(())
}

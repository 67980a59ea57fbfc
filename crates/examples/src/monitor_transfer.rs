/// Example: Watch an already-submitted transfer until it settles
///
/// Polls the status endpoint for an existing authorization id, printing each
/// attempt as it lands. Useful when a send timed out client-side but the
/// relay may still confirm it.
///
/// Run with: cargo run -p examples --bin monitor_transfer
///
/// Required environment variables:
/// - AUTHORIZATION_ID
///
/// Optional:
/// - BACKEND_BASE (defaults to http://127.0.0.1:5050)
use common::status::TransferStatus;
use plasmapay::AuthorizationId;
use plasmapay::poll::{PollAttempt, PollParams, wait_for_final};
use session::Session;
use std::env;

#[tokio::main]
async fn main() -> Result<(), String> {
    // Load environment variables
    dotenvy::dotenv().ok();
    env_logger::init();

    let client = backend::Client::from_env(Session::new())
        .map_err(|e| format!("Failed to build client: {}", e))?;

    let authorization_id =
        env::var("AUTHORIZATION_ID").expect("AUTHORIZATION_ID must be set");

    println!("Monitoring transfer {} ...", authorization_id);
    println!("Press Ctrl+C to stop\n");

    let mut params = PollParams::new(AuthorizationId::new(authorization_id));
    params.on_attempt = Some(Box::new(|attempt: PollAttempt| {
        Box::pin(async move {
            println!(
                "  [{}/{}] status: {}",
                attempt.attempt,
                attempt.max_attempts,
                attempt.status.as_deref().unwrap_or("<no answer>")
            );
        })
    }));

    let status = wait_for_final(&client, params)
        .await
        .map_err(|e| format!("Polling failed: {}", e))?;

    println!();
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
            println!("⏳ {}", error.unwrap_or_default());
        }
        TransferStatus::Pending => {}
    }

    Ok(())
}

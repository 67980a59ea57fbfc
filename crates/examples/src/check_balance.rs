/// Example: Check the on-chain USDT0 balance behind a user's wallet
///
/// Looks up the custodial wallet address for the logged-in user, then reads
/// the token balance straight from the testnet RPC. The chain is read-only
/// here; transfers always go through the backend relay.
///
/// Run with: cargo run -p examples --bin check_balance
///
/// Required environment variables:
/// - LOGIN_EMAIL, LOGIN_PASSWORD
///
/// Optional:
/// - BACKEND_BASE, PLASMA_RPC_URL, USDT0_CONTRACT
use plasmapay::dashboard::format_usd;
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
    client
        .login(&email, &password)
        .await
        .map_err(|e| format!("Login failed: {}", e))?;

    let user_id = client.user_id().ok_or("No user id after login")?;
    let address = client
        .wallet_address(&user_id)
        .await
        .map_err(|e| format!("Wallet lookup failed: {}", e))?;

    println!("\n📊 Wallet: {}", address);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");

    let rpc_url =
        env::var("PLASMA_RPC_URL").unwrap_or_else(|_| chain::PLASMA_TESTNET_RPC_URL.to_string());
    let token = env::var("USDT0_CONTRACT").unwrap_or_else(|_| chain::USDT0_CONTRACT.to_string());

    let reader =
        chain::TokenReader::new(&rpc_url, &token).map_err(|e| format!("Bad RPC setup: {}", e))?;
    let balance = reader
        .balance_of(&address)
        .await
        .map_err(|e| format!("Balance read failed: {}", e))?;

    println!("Raw balance:  {} (decimals: {})", balance.raw, balance.decimals);
    println!("USDT balance: {}", balance);
    println!("Displayed as: {}", format_usd(balance.to_f64()));

    Ok(())
}

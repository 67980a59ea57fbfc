/// Example: Print the dashboard the way the home screen renders it
///
/// Run with: cargo run -p examples --bin dashboard_summary
///
/// Required environment variables:
/// - LOGIN_EMAIL, LOGIN_PASSWORD
///
/// Optional:
/// - BACKEND_BASE (defaults to http://127.0.0.1:5050)
use plasmapay::dashboard::render;
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

    let data = client
        .dashboard()
        .await
        .map_err(|e| format!("Dashboard fetch failed: {}", e))?;
    let view = render(&data);

    println!("\n💰 {} — {}", auth.user.name, view.balance);
    println!("{}", view.monthly_pill);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    if view.lines.is_empty() {
        println!("No transactions yet.");
    }
    for line in &view.lines {
        println!("  {}  {} ({})", line.amount, line.title, line.subtitle);
    }

    Ok(())
}

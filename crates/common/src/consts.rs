pub const DEFAULT_BACKEND_BASE: &str = "http://127.0.0.1:5050";

pub const POLL_INTERVAL_MS: u64 = 2000;
pub const MAX_POLL_ATTEMPTS: u32 = 30;

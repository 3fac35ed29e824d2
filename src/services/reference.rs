use chrono::Utc;
use uuid::Uuid;

/// Builds a reference like `PAYSTACK-20261019120000-3f9c1a2b7d4e`.
pub fn generate_reference(provider: &str) -> String {
    let timestamp = Utc::now().format("%Y%m%d%H%M%S");
    let unique_id = Uuid::new_v4().simple().to_string();
    format!("{}-{}-{}", provider.to_uppercase(), timestamp, &unique_id[..12])
}

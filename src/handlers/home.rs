pub const HOME_MESSAGE: &str = "Webhook server running!";

pub async fn home() -> &'static str {
    HOME_MESSAGE
}

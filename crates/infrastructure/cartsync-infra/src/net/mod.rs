use reqwest::Client;

/// Shared HTTP client for the cart endpoint. No request timeout is set: a hung
/// write stays pending until the endpoint answers.
pub fn default_http_client() -> reqwest::Result<Client> {
    Client::builder()
        .user_agent(cartsync_config::USER_AGENT)
        .build()
}

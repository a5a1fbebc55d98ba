//! Central configuration constants for the remote endpoint and user-facing texts.

/// Default cart document endpoint (a JSON resource supporting GET and PUT).
pub const DEFAULT_CART_ENDPOINT: &str = "http://127.0.0.1:8080/cart.json";

/// User agent sent with every gateway request.
pub const USER_AGENT: &str = concat!("cartsync/", env!("CARGO_PKG_VERSION"));

pub const SENDING_TITLE: &str = "Sending";
pub const SENDING_MESSAGE: &str = "Sending cart data";

pub const SENT_TITLE: &str = "Success!";
pub const SENT_MESSAGE: &str = "Sent cart data successfully!";

pub const ERROR_TITLE: &str = "Error!";
pub const SEND_FAILED_MESSAGE: &str = "Sending cart data failed!";
pub const FETCH_FAILED_MESSAGE: &str = "Fetching cart data failed!";

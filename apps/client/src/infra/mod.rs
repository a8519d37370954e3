pub mod api;
pub mod http;
pub mod retry;

pub use api::GameApi;
pub use http::HttpGameApi;
pub use retry::{retry_idempotent, RetryPolicy};

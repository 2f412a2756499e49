//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to one endpoint.

pub mod expand;
pub mod health;
pub mod shorten;
pub mod url;
pub mod urls;

pub use expand::expand_handler;
pub use health::health_handler;
pub use shorten::shorten_handler;
pub use url::url_handler;
pub use urls::urls_handler;

mod use_api_client;
mod use_page;

pub use use_api_client::use_api_client;
pub use use_page::{spawn_action, use_page};

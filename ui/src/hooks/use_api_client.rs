use payloads::APIClient;
use std::sync::Arc;
use yew::prelude::*;

/// The client provided by the root component. Outside of it (for example in
/// an isolated component preview) a client is built from the build-time
/// configuration instead.
#[hook]
pub fn use_api_client() -> APIClient {
    use_context::<APIClient>()
        .unwrap_or_else(|| APIClient::new(Arc::new(crate::api_config())))
}

use poem::http::StatusCode;
use poem::{Endpoint, IntoResponse, Middleware, Request, Response};

use crate::config::api_key_config::ApiKeyConfig;

pub const API_KEY_HEADER: &str = "X-Api-Key";

const MISSING_KEY_BODY: &str = "API Key was not provided.";
const WRONG_KEY_BODY: &str = "Unauthorized client.";

/// Static API-key gate for the whole route tree.
///
/// Every request must carry the `X-Api-Key` header with the exact configured
/// secret. A missing header is a 401, anything else that does not match is a
/// 403. There are no exempt routes.
pub struct ApiKeyAuth {
    secret: String,
}

impl ApiKeyAuth {
    pub fn new(config: &ApiKeyConfig) -> Self {
        Self {
            secret: config.api_key.clone(),
        }
    }
}

impl<E: Endpoint> Middleware<E> for ApiKeyAuth {
    type Output = ApiKeyAuthEndpoint<E>;

    fn transform(&self, ep: E) -> Self::Output {
        ApiKeyAuthEndpoint {
            ep,
            secret: self.secret.clone(),
        }
    }
}

pub struct ApiKeyAuthEndpoint<E> {
    ep: E,
    secret: String,
}

impl<E: Endpoint> Endpoint for ApiKeyAuthEndpoint<E> {
    type Output = Response;

    async fn call(&self, req: Request) -> poem::Result<Self::Output> {
        match req.headers().get(API_KEY_HEADER) {
            None => {
                tracing::warn!("Rejected request without {API_KEY_HEADER} header");
                Ok(Response::builder()
                    .status(StatusCode::UNAUTHORIZED)
                    .body(MISSING_KEY_BODY))
            }
            // Compared as bytes, so a non-UTF-8 header value can never match.
            Some(value) if value.as_bytes() != self.secret.as_bytes() => {
                tracing::warn!("Rejected request with mismatched {API_KEY_HEADER}");
                Ok(Response::builder()
                    .status(StatusCode::FORBIDDEN)
                    .body(WRONG_KEY_BODY))
            }
            Some(_) => Ok(self.ep.call(req).await?.into_response()),
        }
    }
}

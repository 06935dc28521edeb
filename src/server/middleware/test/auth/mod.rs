use std::sync::Arc;

use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue};
use test_utils::{builder::TestBuilder, factory::user::UserFactory};

use crate::server::{
    config::Config,
    error::{auth::AuthError, AppError},
    middleware::auth::AuthGuard,
    service::auth::{
        credential::{CredentialChain, SENTINEL_CREDENTIAL, SENTINEL_SUBJECT},
        token::TokenService,
    },
};

mod require;

/// Token service and credential chain built from the test configuration.
fn credentials(allow_mock_token: bool) -> (Arc<TokenService>, CredentialChain) {
    let mut config = Config::for_test();
    config.allow_mock_token = allow_mock_token;

    let tokens = Arc::new(TokenService::from_config(&config));
    let chain = CredentialChain::from_config(&config, tokens.clone());

    (tokens, chain)
}

fn bearer(credential: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", credential)).unwrap(),
    );
    headers
}

//! # POST /api/confirm
//!
//! アカウント確認（サインアップ確認コード）をDevvio APIに中継する。
//! ユーザー認証は不要。

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::State;
use axum::response::Response;
use devvio_types::{ConfirmSignUpPayload, ConfirmSignUpRequest};

use super::{parse_json_body, read_body};
use crate::config::GatewayState;
use crate::error::GatewayError;
use crate::relay::relay_to_devvio;

/// 中継先パス
pub const UPSTREAM_PATH: &str = "/auth/confirmSignUp";

/// POST /api/confirm: サインアップ確認の中継。
pub async fn handle_confirm(
    State(state): State<Arc<GatewayState>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Response, GatewayError> {
    let api_key = state.api_key()?;
    let request: ConfirmSignUpRequest = parse_json_body(&read_body(body)?)?;

    let payload = ConfirmSignUpPayload {
        username: request.username,
        verify_code: request.verify_code,
        apikey: api_key.to_string(),
    };

    relay_to_devvio(&state, UPSTREAM_PATH, None, &payload).await
}

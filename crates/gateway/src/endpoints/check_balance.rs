//! # POST /api/checkBalance
//!
//! ウォレット残高照会をDevvio APIに中継する。
//! ユーザーのアクセストークン（Bearer）が必要。

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::Response;
use devvio_types::{BalancePayload, BalanceRequest};

use super::{parse_json_body, read_body};
use crate::auth::bearer_token;
use crate::config::GatewayState;
use crate::error::GatewayError;
use crate::relay::relay_to_devvio;

/// 中継先パス
pub const UPSTREAM_PATH: &str = "/core/wallet/balances";

/// POST /api/checkBalance: ウォレット残高照会の中継。
///
/// クライアントの `coinIds` にサーバー秘密鍵を付与し、
/// アクセストークンと共に `/core/wallet/balances` へ転送する。
pub async fn handle_check_balance(
    State(state): State<Arc<GatewayState>>,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Result<Response, GatewayError> {
    let access_token = bearer_token(&headers)?;
    let api_key = state.api_key()?;
    let request: BalanceRequest = parse_json_body(&read_body(body)?)?;

    let payload = BalancePayload {
        coin_ids: request.coin_ids,
        apikey: api_key.to_string(),
    };

    relay_to_devvio(&state, UPSTREAM_PATH, Some(&access_token), &payload).await
}

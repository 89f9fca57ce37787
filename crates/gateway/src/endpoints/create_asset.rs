//! # POST /api/createAsset
//!
//! アセット発行をDevvio APIに中継する。
//! ユーザーのアクセストークン（Bearer）が必要。
//!
//! チェックサムはサーバー秘密鍵を使ってGateway側で計算するため、
//! クライアント（ブラウザ）が秘密鍵を知ることはない。

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::Response;
use devvio_types::{CreateAssetPayload, CreateAssetRequest, LedgerScalar};

use super::{parse_json_body, read_body};
use crate::auth::bearer_token;
use crate::config::GatewayState;
use crate::error::GatewayError;
use crate::relay::relay_to_devvio;

/// 中継先パス
pub const UPSTREAM_PATH: &str = "/core/asset/create";

/// POST /api/createAsset: アセット発行の中継。
///
/// `coinId`, `amount`, `clientId` がすべて揃っていることを確認してから
/// `SHA-256(coinId + apikey + amount + clientId)` を計算し、
/// チェックサムとサーバー秘密鍵を付与して `/core/asset/create` へ転送する。
pub async fn handle_create_asset(
    State(state): State<Arc<GatewayState>>,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Result<Response, GatewayError> {
    let access_token = bearer_token(&headers)?;
    let api_key = state.api_key()?;
    let request: CreateAssetRequest = parse_json_body(&read_body(body)?)?;

    let payload = build_payload(request, api_key)?;

    relay_to_devvio(&state, UPSTREAM_PATH, Some(&access_token), &payload).await
}

/// 入力を検証し、チェックサム付きのペイロードを構築する。
fn build_payload(
    request: CreateAssetRequest,
    api_key: &str,
) -> Result<CreateAssetPayload, GatewayError> {
    let coin_id = required(request.coin_id, "coinId")?;
    let amount = required(request.amount, "amount")?;
    let client_id = required(request.client_id, "clientId")?;

    let checksum = devvio_crypto::transaction_checksum(&coin_id, api_key, &amount, &client_id);

    Ok(CreateAssetPayload {
        coin_id,
        amount,
        client_id,
        checksum,
        apikey: api_key.to_string(),
    })
}

fn required(field: Option<LedgerScalar>, name: &str) -> Result<LedgerScalar, GatewayError> {
    field.ok_or_else(|| GatewayError::BadRequest(format!("missing field `{name}`")))
}

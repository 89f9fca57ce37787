//! # Devvio Proxy Gateway
//!
//! Devvio API（台帳・ウォレットAPI）へのステートレスなHTTPプロキシ。
//!
//! ## 役割
//! - サーバー秘密鍵（APIキー）の付与（クライアントには公開しない）
//! - アセット発行リクエストのチェックサム計算
//! - ユーザーのアクセストークンの転送
//! - Devvio APIのレスポンス（ステータス・JSON）の中継
//!
//! ## API エンドポイント
//! - `POST /api/checkBalance`: ウォレット残高照会（Bearer必須）
//! - `POST /api/confirm`: サインアップ確認
//! - `POST /api/createAsset`: アセット発行（Bearer必須、チェックサム付与）
//!
//! ## 環境変数
//! - `DEVVIO_API_KEY`: サーバー秘密鍵
//! - `DEVVIO_BASE_URL`: Devvio APIのベースURL（デフォルト: テストネット）
//! - `GATEWAY_BIND_ADDR`: 待ち受けアドレス（デフォルト: `0.0.0.0:3000`）
//! - `UPSTREAM_TIMEOUT_SECS`: 上流呼び出しのタイムアウト秒数（デフォルト: 30）
//! - `MAX_BODY_BYTES`: リクエストボディの上限バイト数（デフォルト: 2MiB）

mod auth;
mod config;
mod endpoints;
mod error;
mod relay;

use std::sync::Arc;

use config::{GatewayConfig, GatewayState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = GatewayConfig::from_env()?;

    if config.api_key.is_none() {
        tracing::warn!("DEVVIO_API_KEYが未設定です。全エンドポイントが500を返します");
    }
    tracing::info!(
        base_url = %config.base_url,
        timeout_secs = config.upstream_timeout.as_secs(),
        max_body_bytes = config.max_body_bytes,
        "Devvio API中継先"
    );

    let bind_addr = config.bind_addr.clone();
    let state = Arc::new(GatewayState::new(config)?);
    let app = endpoints::router(state);

    tracing::info!("Gatewayを {} で起動します", bind_addr);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

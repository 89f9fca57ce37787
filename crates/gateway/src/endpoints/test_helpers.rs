//! # エンドポイントテスト用共通ヘルパー
//!
//! Devvio APIのモックサーバーと、テスト用Gatewayの起動処理。

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::http::{HeaderMap, StatusCode, Uri};
use axum::Json;

use crate::config::{GatewayConfig, GatewayState};

/// モックDevvio APIが受け取ったリクエスト。
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// リクエストパス
    pub path: String,
    /// Authorizationヘッダー（存在する場合）
    pub authorization: Option<String>,
    /// JSONボディ
    pub body: serde_json::Value,
}

/// 起動済みのモックDevvio API。
pub struct MockDevvio {
    /// モックのベースURL（`http://127.0.0.1:<port>`）
    pub base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockDevvio {
    /// 受信したリクエスト数
    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// 受信したリクエストの一覧
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

/// 全パスで指定ステータス・JSONを返すモックDevvio APIを起動する。
pub async fn start_mock_devvio(status: StatusCode, response: serde_json::Value) -> MockDevvio {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let recorded = requests.clone();

    let app = axum::Router::new().fallback(
        move |uri: Uri, headers: HeaderMap, Json(body): Json<serde_json::Value>| {
            let recorded = recorded.clone();
            let response = response.clone();
            async move {
                recorded.lock().unwrap().push(RecordedRequest {
                    path: uri.path().to_string(),
                    authorization: headers
                        .get("authorization")
                        .and_then(|v| v.to_str().ok())
                        .map(str::to_string),
                    body,
                });
                (status, Json(response))
            }
        },
    );

    MockDevvio {
        base_url: serve(app).await,
        requests,
    }
}

/// JSONではないボディを返すモックDevvio APIを起動する。
pub async fn start_mock_devvio_text(status: StatusCode, body: &'static str) -> String {
    let app = axum::Router::new().fallback(move || async move { (status, body) });
    serve(app).await
}

/// テスト用のGateway設定
pub fn test_config(base_url: &str, api_key: Option<&str>) -> GatewayConfig {
    GatewayConfig {
        api_key: api_key.map(str::to_string),
        base_url: base_url.to_string(),
        bind_addr: "127.0.0.1:0".to_string(),
        upstream_timeout: Duration::from_secs(5),
        max_body_bytes: crate::config::DEFAULT_MAX_BODY_BYTES,
    }
}

/// Gatewayをランダムポートで起動し、ベースURLを返す。
pub async fn spawn_gateway(config: GatewayConfig) -> String {
    let state = Arc::new(GatewayState::new(config).unwrap());
    serve(super::router(state)).await
}

async fn serve(app: axum::Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    tokio::time::sleep(Duration::from_millis(50)).await;
    format!("http://127.0.0.1:{port}")
}

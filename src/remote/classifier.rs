//! 远程危机分类接口
//! 请求体：{ "content": string }；响应体为本地检测结果结构的超集

use std::time::Duration;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;
use url::Url;

use crate::config::{GlobalConfig, ScoringOptions};
use crate::error::{RscResult, RscrisisError};
use crate::keyword::{CrisisCategory, DetectionResult, DetectionSource};

/// 远程分类结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteDetection {
    #[serde(default)]
    pub detected: bool,
    #[serde(default)]
    pub category: Option<CrisisCategory>,
    #[serde(default)]
    pub matched_phrases: Vec<String>,
    #[serde(default)]
    pub confidence: f64,
    #[serde(default)]
    pub suggested_action: Option<String>,
    #[serde(default)]
    pub show_resources: Option<bool>,
    // 服务端返回的其他字段原样保留
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RemoteDetection {
    /// 转换为统一的检测结果（置信度限制在 [0,1]，缺省字段按本地规则补齐）
    pub fn into_result(self, options: &ScoringOptions) -> DetectionResult {
        let confidence = if self.confidence.is_finite() {
            self.confidence.clamp(0.0, 1.0)
        } else {
            0.0
        };
        let urgent = confidence > options.urgent_threshold;
        let suggested_action = self.suggested_action.unwrap_or_else(|| {
            self.category
                .unwrap_or(CrisisCategory::Other)
                .suggested_action(urgent)
                .to_string()
        });

        DetectionResult {
            detected: self.detected,
            category: self.category,
            matched_phrases: self.matched_phrases,
            confidence,
            suggested_action,
            show_resources: self.show_resources.unwrap_or(self.detected),
            urgent,
            source: DetectionSource::Remote,
        }
    }
}

/// 远程分类器
#[async_trait]
pub trait CrisisClassifier: Send + Sync {
    async fn classify(&self, content: &str) -> RscResult<RemoteDetection>;
}

#[derive(Serialize)]
struct ClassifyRequest<'a> {
    content: &'a str,
}

/// 基于HTTP的远程分类器
#[derive(Debug, Clone)]
pub struct HttpCrisisClassifier {
    client: Client,
    endpoint: Url,
    auth_token: Option<String>,
}

impl HttpCrisisClassifier {
    pub fn new(endpoint: &str, timeout: Duration, auth_token: Option<String>) -> RscResult<Self> {
        let endpoint = Url::parse(endpoint)?;
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint,
            auth_token,
        })
    }

    /// 从全局配置创建（未配置接口地址时返回 None）
    pub fn from_config(config: &GlobalConfig) -> RscResult<Option<Self>> {
        config
            .classify_endpoint
            .as_deref()
            .map(|endpoint| {
                Self::new(
                    endpoint,
                    Duration::from_secs(config.http_timeout),
                    config.auth_token.clone(),
                )
            })
            .transpose()
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl CrisisClassifier for HttpCrisisClassifier {
    async fn classify(&self, content: &str) -> RscResult<RemoteDetection> {
        let mut request = self
            .client
            .post(self.endpoint.clone())
            .header("User-Agent", concat!("rscrisis/", env!("CARGO_PKG_VERSION")))
            .json(&ClassifyRequest { content });
        if let Some(token) = &self.auth_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(RscrisisError::RemoteError(format!(
                "URL {} 返回状态码 {}",
                self.endpoint, status
            )));
        }

        let detection: RemoteDetection = response.json().await?;
        debug!(
            "远程分类完成：detected={}，category={:?}，confidence={}",
            detection.detected, detection.category, detection.confidence
        );
        Ok(detection)
    }
}

//! HTTP client for the host scripting gateway
//!
//! The host runs a small JSON gateway inside its scripting layer; every
//! operation is a POST of `{"fn": ..., "args": {...}}` to `/call` and the
//! response body is the JSON-encoded result of that one call. The gateway
//! is request/response only; there is no session state on this side.

use crate::adapters::host::bridge::{HostBridge, SequenceInfo, SystemInfo};
use crate::adapters::host::models::{
    AckResponse, ActiveSequenceResponse, ExportsPathResponse, HasVideoResponse,
    QueueExportResponse, ScriptEnvelope, SelectedSequencesResponse, SystemInfoResponse,
};
use crate::config::HostConfig;
use crate::domain::errors::{EncodaError, HostError};
use crate::domain::ids::{JobId, SequenceName};
use crate::domain::result::Result;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::json;
use std::path::Path;
use std::time::Duration;

/// HTTP implementation of [`HostBridge`]
pub struct HostClient {
    http: reqwest::Client,
    base_url: String,
}

impl HostClient {
    /// Create a new client from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the HTTP client
    /// cannot be constructed.
    pub fn new(config: &HostConfig) -> Result<Self> {
        url::Url::parse(&config.base_url).map_err(|e| {
            EncodaError::Configuration(format!(
                "Invalid host base URL '{}': {}",
                config.base_url, e
            ))
        })?;

        let mut builder = reqwest::Client::builder();
        if config.request_timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(config.request_timeout_secs));
        }
        let http = builder.build().map_err(|e| {
            EncodaError::Configuration(format!("Failed to build HTTP client: {e}"))
        })?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Issue one gateway call and parse its envelope
    async fn call<T>(&self, func: &str, args: serde_json::Value) -> std::result::Result<T, HostError>
    where
        T: DeserializeOwned + ScriptEnvelope,
    {
        let url = format!("{}/call", self.base_url);
        tracing::debug!(func, %url, "Calling host gateway");

        let response = self
            .http
            .post(&url)
            .json(&json!({ "fn": func, "args": args }))
            .send()
            .await
            .map_err(HostError::from)?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(HostError::Unavailable(format!(
                "{func} is not implemented by this host version"
            )));
        }

        let body = response.text().await.map_err(HostError::from)?;
        if !status.is_success() {
            return Err(HostError::ScriptError(format!(
                "{func} returned HTTP {status}: {body}"
            )));
        }

        let parsed: T = serde_json::from_str(&body)
            .map_err(|e| HostError::InvalidResponse(format!("{func}: {e}")))?;

        if !parsed.ok() {
            return Err(HostError::ScriptError(format!(
                "{func}: {}",
                parsed.error_message().unwrap_or("host reported failure")
            )));
        }

        Ok(parsed)
    }
}

#[async_trait]
impl HostBridge for HostClient {
    async fn get_selected_sequences(&self) -> Result<Vec<SequenceInfo>> {
        let resp: SelectedSequencesResponse =
            self.call("getSelectedSequences", json!({})).await?;

        let mut sequences = Vec::with_capacity(resp.sequences.len());
        for entry in resp.sequences {
            match SequenceName::new(&entry.name) {
                Ok(name) => sequences.push(SequenceInfo::new(name, entry.node_id)),
                Err(_) => {
                    // A nameless entry cannot be exported; drop it rather
                    // than failing the whole selection.
                    tracing::warn!(node_id = %entry.node_id, "Skipping selection entry without a name");
                }
            }
        }

        tracing::debug!(
            reported = resp.count,
            parsed = sequences.len(),
            "Host reported selection"
        );
        Ok(sequences)
    }

    async fn has_video_for_sequence(&self, name: &SequenceName) -> Result<bool> {
        let resp: HasVideoResponse = self
            .call("hasVideoForSequence", json!({ "name": name.as_str() }))
            .await?;
        Ok(resp.has_video)
    }

    async fn has_video_tracks(&self) -> Result<bool> {
        let resp: HasVideoResponse = self.call("hasVideoTracks", json!({})).await?;
        Ok(resp.has_video)
    }

    async fn get_active_sequence(&self) -> Result<SequenceName> {
        let resp: ActiveSequenceResponse = self.call("getActiveSequence", json!({})).await?;

        SequenceName::new(&resp.name).map_err(|_| {
            HostError::NoActiveSequence("host returned an empty sequence name".to_string()).into()
        })
    }

    async fn get_system_info(&self) -> Result<SystemInfo> {
        let resp: SystemInfoResponse = self.call("getSystemInfo", json!({})).await?;
        Ok(SystemInfo {
            is_windows: resp.is_windows,
            downloads_path: resp.downloads_path,
        })
    }

    async fn get_project_exports_path(&self, folder_name: &str, depth: u32) -> Result<String> {
        let resp: ExportsPathResponse = self
            .call(
                "getProjectExportsPathWithDepth",
                json!({ "folderName": folder_name, "depth": depth }),
            )
            .await?;

        if resp.path.trim().is_empty() {
            return Err(HostError::InvalidResponse(
                "getProjectExportsPathWithDepth returned an empty path".to_string(),
            )
            .into());
        }
        Ok(resp.path)
    }

    async fn export_sequence_by_name(
        &self,
        name: &SequenceName,
        output_path: &Path,
        preset_path: &Path,
    ) -> Result<JobId> {
        let resp: QueueExportResponse = self
            .call(
                "exportSequenceByName",
                json!({
                    "name": name.as_str(),
                    "outputPath": output_path.to_string_lossy(),
                    "presetPath": preset_path.to_string_lossy(),
                }),
            )
            .await?;

        let raw = resp.job_id.unwrap_or_default();
        JobId::new(raw).map_err(|_| {
            HostError::InvalidResponse(
                "exportSequenceByName succeeded without a job ID".to_string(),
            )
            .into()
        })
    }

    async fn start_encoder_batch(&self) -> Result<()> {
        let _resp: AckResponse = self.call("startEncoderBatch", json!({})).await?;
        Ok(())
    }

    async fn export_direct(
        &self,
        output_path: &Path,
        preset_path: &Path,
        use_in_out: bool,
    ) -> Result<()> {
        let _resp: AckResponse = self
            .call(
                "exportDirect",
                json!({
                    "outputPath": output_path.to_string_lossy(),
                    "presetPath": preset_path.to_string_lossy(),
                    "useInOut": use_in_out,
                }),
            )
            .await?;
        Ok(())
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }
}

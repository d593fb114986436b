//! Wire models for the host scripting gateway
//!
//! Every gateway call returns a JSON object with a `success` flag and an
//! optional `error` string; payload fields are camelCase on the wire
//! because the gateway runs inside the host's JavaScript scripting layer.
//! Missing payload fields deserialize to defaults so a malformed response
//! degrades into a reported failure instead of a parse panic.

use serde::Deserialize;

/// Common accessors over the `success`/`error` envelope
pub trait ScriptEnvelope {
    /// Whether the host reported success
    fn ok(&self) -> bool;

    /// Host-reported error message, if any
    fn error_message(&self) -> Option<&str>;
}

macro_rules! impl_envelope {
    ($ty:ty) => {
        impl ScriptEnvelope for $ty {
            fn ok(&self) -> bool {
                self.success
            }

            fn error_message(&self) -> Option<&str> {
                self.error.as_deref()
            }
        }
    };
}

/// One sequence entry in a selection response
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SequenceEntry {
    /// Display name
    #[serde(default)]
    pub name: String,

    /// Host-internal node identifier
    #[serde(default)]
    pub node_id: String,
}

/// Response to `getSelectedSequences`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedSequencesResponse {
    pub success: bool,
    #[serde(default)]
    pub sequences: Vec<SequenceEntry>,
    #[serde(default)]
    pub count: usize,
    #[serde(default)]
    pub error: Option<String>,
}
impl_envelope!(SelectedSequencesResponse);

/// Response to `hasVideoForSequence` / `hasVideoTracks`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HasVideoResponse {
    pub success: bool,
    #[serde(default)]
    pub has_video: bool,
    #[serde(default)]
    pub error: Option<String>,
}
impl_envelope!(HasVideoResponse);

/// Response to `getActiveSequence`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveSequenceResponse {
    pub success: bool,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub error: Option<String>,
}
impl_envelope!(ActiveSequenceResponse);

/// Response to `getSystemInfo`
///
/// This call predates the envelope convention on some hosts, so `success`
/// defaults to true when absent.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemInfoResponse {
    #[serde(default = "default_true")]
    pub success: bool,
    #[serde(default)]
    pub is_windows: bool,
    #[serde(default)]
    pub downloads_path: String,
    #[serde(default)]
    pub error: Option<String>,
}
impl_envelope!(SystemInfoResponse);

/// Response to `getProjectExportsPathWithDepth`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportsPathResponse {
    pub success: bool,
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub error: Option<String>,
}
impl_envelope!(ExportsPathResponse);

/// Response to `exportSequenceByName` (queue-only, no start)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueueExportResponse {
    pub success: bool,
    #[serde(default, rename = "jobID")]
    pub job_id: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}
impl_envelope!(QueueExportResponse);

/// Response to `startEncoderBatch` and `exportDirect`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AckResponse {
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}
impl_envelope!(AckResponse);

fn default_true() -> bool {
    true
}

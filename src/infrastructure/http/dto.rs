//! Data Transfer Objects
//!
//! JSON 字段使用 camelCase

use serde::{Deserialize, Serialize};

use crate::application::{HealthReport, SynthesizeSpeech, VoiceDescriptor};

// ============================================================================
// Synthesize DTOs
// ============================================================================

/// 合成请求体
///
/// `text` 可缺省，缺省与空字符串一样返回 400
#[derive(Debug, Default, Deserialize)]
pub struct SynthesizeRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub voice: Option<String>,
    #[serde(default)]
    pub rate: Option<String>,
    #[serde(default)]
    pub pitch: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
}

impl From<SynthesizeRequest> for SynthesizeSpeech {
    fn from(req: SynthesizeRequest) -> Self {
        Self {
            text: req.text.unwrap_or_default(),
            voice: req.voice,
            rate: req.rate,
            pitch: req.pitch,
            language: req.language,
        }
    }
}

// ============================================================================
// Voice DTOs
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceResponse {
    pub name: String,
    pub short_name: String,
    pub gender: String,
    pub locale: String,
    pub friendly_name: String,
}

impl From<VoiceDescriptor> for VoiceResponse {
    fn from(voice: VoiceDescriptor) -> Self {
        Self {
            name: voice.short_name.clone(),
            short_name: voice.short_name,
            gender: voice.gender,
            locale: voice.locale,
            friendly_name: voice.friendly_name,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct VoiceListResponse {
    pub voices: Vec<VoiceResponse>,
    pub count: usize,
}

// ============================================================================
// Status DTOs
// ============================================================================

#[derive(Debug, Serialize)]
pub struct ServiceInfoResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub endpoints: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub cache_dir: String,
    pub cache_file_count: u64,
    pub cache_size_bytes: u64,
    pub cache_hits: u64,
    pub cache_misses: u64,
    pub audio_format: &'static str,
    pub provider_healthy: bool,
    pub checked_at: String,
}

impl HealthResponse {
    pub fn from_report(service: &'static str, report: HealthReport) -> Self {
        Self {
            status: "healthy",
            service,
            cache_dir: report.cache_dir.display().to_string(),
            cache_file_count: report.cache_stats.total_entries,
            cache_size_bytes: report.cache_stats.total_size_bytes,
            cache_hits: report.cache_stats.hit_count,
            cache_misses: report.cache_stats.miss_count,
            audio_format: report.format.extension(),
            provider_healthy: report.provider_healthy,
            checked_at: report.checked_at.to_rfc3339(),
        }
    }
}

// ============================================================================
// Cache DTOs
// ============================================================================

#[derive(Debug, Serialize)]
pub struct ClearCacheResponse {
    pub status: &'static str,
    pub cleared: u64,
    pub message: String,
}

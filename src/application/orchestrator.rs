//! Synthesis Orchestrator - 合成编排
//!
//! 清洗 → 分块 → 逐块调用合成服务 → 按顺序拼接音频。
//! 编排器不接触缓存，缓存查找与写入由调用方负责。

use futures_util::StreamExt;
use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{InferRequest, SpeechFragment, TtsEnginePort};
use crate::domain::synthesis::SynthesisRequest;
use crate::domain::{chunk_text, normalize, NormalizedText};

pub struct SynthesisOrchestrator {
    tts_engine: Arc<dyn TtsEnginePort>,
    max_chunk_chars: usize,
}

impl SynthesisOrchestrator {
    pub fn new(tts_engine: Arc<dyn TtsEnginePort>, max_chunk_chars: usize) -> Self {
        Self {
            tts_engine,
            max_chunk_chars,
        }
    }

    /// 合成完整请求
    pub async fn synthesize(&self, request: &SynthesisRequest) -> Result<Vec<u8>, ApplicationError> {
        let text = normalize(&request.text)?;

        tracing::info!(
            original_chars = request.text.chars().count(),
            cleaned_chars = text.char_count(),
            "Text cleaned"
        );

        self.synthesize_normalized(&text, request).await
    }

    /// 合成已清洗的文本，音色参数取自 `request`
    ///
    /// 块严格按顺序处理：上一块的片段流读完后才请求下一块。
    pub async fn synthesize_normalized(
        &self,
        text: &NormalizedText,
        request: &SynthesisRequest,
    ) -> Result<Vec<u8>, ApplicationError> {
        let chunks = chunk_text(text, self.max_chunk_chars);

        tracing::info!(
            voice = %request.voice,
            rate = %request.rate,
            pitch = %request.pitch,
            chunks = chunks.len(),
            max_chunk_chars = self.max_chunk_chars,
            "Starting synthesis"
        );

        let mut audio = Vec::new();

        for chunk in &chunks {
            let infer_request = InferRequest {
                text: chunk.content.clone(),
                voice: request.voice.clone(),
                rate: request.rate.clone(),
                pitch: request.pitch.clone(),
            };

            let mut fragments = self.tts_engine.stream(infer_request).await.map_err(|e| {
                tracing::error!(chunk_index = chunk.index, error = %e, "Failed to open synthesis stream");
                ApplicationError::from(e)
            })?;

            let mut chunk_bytes = 0usize;
            while let Some(fragment) = fragments.next().await {
                match fragment {
                    Ok(SpeechFragment::Audio(data)) => {
                        chunk_bytes += data.len();
                        audio.extend_from_slice(&data);
                    }
                    Ok(SpeechFragment::Metadata(_)) => {}
                    Err(e) => {
                        tracing::error!(chunk_index = chunk.index, error = %e, "Synthesis stream failed");
                        return Err(e.into());
                    }
                }
            }

            tracing::debug!(
                chunk_index = chunk.index,
                chunk_chars = chunk.char_count(),
                chunk_bytes = chunk_bytes,
                "Chunk synthesized"
            );
        }

        if audio.is_empty() {
            return Err(ApplicationError::provider(
                "TTS generation failed: provider returned no audio",
            ));
        }

        tracing::info!(audio_size = audio.len(), "Synthesis completed");

        Ok(audio)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{FragmentStream, TtsError, VoiceDescriptor};
    use crate::domain::synthesis::{Pitch, Rate, VoiceName};
    use async_trait::async_trait;
    use futures_util::stream;
    use std::sync::Mutex;

    /// 记录每次调用的文本，回显为 `<text>` 音频片段
    #[derive(Default)]
    struct RecordingEngine {
        calls: Mutex<Vec<String>>,
        fail_on_call: Option<usize>,
        silent: bool,
    }

    #[async_trait]
    impl TtsEnginePort for RecordingEngine {
        async fn stream(&self, request: InferRequest) -> Result<FragmentStream, TtsError> {
            let call_index = {
                let mut calls = self.calls.lock().unwrap();
                calls.push(request.text.clone());
                calls.len() - 1
            };

            if self.fail_on_call == Some(call_index) {
                return Err(TtsError::ServiceError("HTTP 503: busy".to_string()));
            }
            if self.silent {
                let fragments = vec![Ok(SpeechFragment::Metadata("boundary".to_string()))];
                return Ok(stream::iter(fragments).boxed());
            }

            let body = format!("<{}>", request.text).into_bytes();
            let (head, tail) = body.split_at(body.len() / 2);
            let fragments = vec![
                Ok(SpeechFragment::Metadata("WordBoundary".to_string())),
                Ok(SpeechFragment::Audio(head.to_vec())),
                Ok(SpeechFragment::Metadata("WordBoundary".to_string())),
                Ok(SpeechFragment::Audio(tail.to_vec())),
            ];
            Ok(stream::iter(fragments).boxed())
        }

        async fn list_voices(&self) -> Result<Vec<VoiceDescriptor>, TtsError> {
            Ok(Vec::new())
        }
    }

    fn request(text: &str) -> SynthesisRequest {
        SynthesisRequest::new(
            text,
            VoiceName::new("en-US-AriaNeural").unwrap(),
            Rate::default(),
            Pitch::default(),
        )
    }

    #[tokio::test]
    async fn test_single_chunk_single_call() {
        let engine = Arc::new(RecordingEngine::default());
        let orchestrator = SynthesisOrchestrator::new(engine.clone(), 1000);

        let audio = orchestrator.synthesize(&request("Hello world.")).await.unwrap();

        assert_eq!(audio, b"<Hello world.>".to_vec());
        assert_eq!(*engine.calls.lock().unwrap(), vec!["Hello world."]);
    }

    #[tokio::test]
    async fn test_chunks_are_concatenated_in_order() {
        let engine = Arc::new(RecordingEngine::default());
        let orchestrator = SynthesisOrchestrator::new(engine.clone(), 12);

        let audio = orchestrator
            .synthesize(&request("One thing. Two things! Three?"))
            .await
            .unwrap();

        let calls = engine.calls.lock().unwrap().clone();
        assert_eq!(calls, vec!["One thing.", "Two things.", "Three."]);
        assert_eq!(
            String::from_utf8(audio).unwrap(),
            "<One thing.><Two things.><Three.>"
        );
    }

    #[tokio::test]
    async fn test_sends_cleaned_text() {
        let engine = Arc::new(RecordingEngine::default());
        let orchestrator = SynthesisOrchestrator::new(engine.clone(), 1000);

        orchestrator
            .synthesize(&request("  \u{201C}Hi\u{201D}\x07   there.  "))
            .await
            .unwrap();

        assert_eq!(*engine.calls.lock().unwrap(), vec!["\"Hi\" there."]);
    }

    #[tokio::test]
    async fn test_empty_content_fails_before_provider_call() {
        let engine = Arc::new(RecordingEngine::default());
        let orchestrator = SynthesisOrchestrator::new(engine.clone(), 1000);

        let err = orchestrator.synthesize(&request("\x01\x02   ")).await.unwrap_err();

        assert!(matches!(err, ApplicationError::EmptyContent(_)));
        assert!(engine.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_provider_error_stops_remaining_chunks() {
        let engine = Arc::new(RecordingEngine {
            fail_on_call: Some(1),
            ..Default::default()
        });
        let orchestrator = SynthesisOrchestrator::new(engine.clone(), 12);

        let err = orchestrator
            .synthesize(&request("One thing. Two things! Three?"))
            .await
            .unwrap_err();

        assert!(matches!(err, ApplicationError::ProviderError(_)));
        assert_eq!(engine.calls.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_no_audio_is_provider_error() {
        let engine = Arc::new(RecordingEngine {
            silent: true,
            ..Default::default()
        });
        let orchestrator = SynthesisOrchestrator::new(engine, 1000);

        let err = orchestrator.synthesize(&request("Hello.")).await.unwrap_err();
        assert_eq!(err.kind(), "ProviderError");
    }
}

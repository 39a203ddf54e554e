use crate::domain::error::AstroError;
use crate::domain::language;
use crate::domain::model::{record_key, InsightRecord, Prediction, PredictionRequest};
use crate::domain::traits::{InsightGenerator, Translator};
use crate::domain::zodiac;
use crate::infrastructure::storage::cache::RecordCache;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Orchestrates the prediction pipeline: validate, look up, compute,
/// store. Capabilities and the default language are injected once at
/// construction.
pub struct PredictionService {
    cache: Arc<RecordCache>,
    generator: Arc<dyn InsightGenerator>,
    translator: Arc<dyn Translator>,
    default_language: String,
    // Serializes lookup/compute/store: the rewrite-whole-file store is
    // not safe under interleaved read-modify-write cycles.
    pipeline_lock: Mutex<()>,
}

impl PredictionService {
    pub fn new(
        cache: Arc<RecordCache>,
        generator: Arc<dyn InsightGenerator>,
        translator: Arc<dyn Translator>,
        default_language: impl Into<String>,
    ) -> Self {
        Self {
            cache,
            generator,
            translator,
            default_language: default_language.into(),
            pipeline_lock: Mutex::new(()),
        }
    }

    /// Run one prediction request through the pipeline.
    ///
    /// Caller errors (`MissingField`, `InvalidDate`) are returned as-is
    /// and leave the cache untouched. Backend failures degrade to
    /// fallback text. Anything else surfaces as a generic `Internal`
    /// error; the detail only goes to the log.
    pub async fn predict(&self, request: &PredictionRequest) -> Result<Prediction, AstroError> {
        let name = required_field(request.name.as_deref(), "name")?;
        let birth_date = required_field(request.birth_date.as_deref(), "birth_date")?;
        required_field(request.birth_time.as_deref(), "birth_time")?;
        required_field(request.birth_place.as_deref(), "birth_place")?;
        let date = zodiac::parse_birth_date(birth_date)?;

        let language = self.normalize_language(request.language.as_deref());
        let key = record_key(name, birth_date);

        let _guard = self.pipeline_lock.lock().await;

        if let Some(record) = self.cache.get(&key) {
            // The stored language wins: language is not part of the
            // cache identity.
            return Ok(Prediction {
                record,
                cached: true,
            });
        }

        let sign = zodiac::resolve(date);
        let insight = self.generator.generate(sign, name, &language).await;

        let insight = if !self.generator.localizes() && language != self.default_language {
            let code = language::code_for(&language).unwrap_or("en");
            match self.translator.translate(&insight, code).await {
                Ok(translated) => translated,
                Err(e) => {
                    tracing::warn!(
                        backend = self.translator.name(),
                        error = %e,
                        "translation failed, keeping untranslated insight"
                    );
                    insight
                }
            }
        } else {
            insight
        };

        let record = InsightRecord {
            zodiac: sign,
            insight,
            language,
        };
        self.cache.set(&key, record.clone()).await.map_err(|e| {
            tracing::error!(error = %e, "failed to persist prediction");
            AstroError::Internal("failed to persist prediction".to_string())
        })?;

        Ok(Prediction {
            record,
            cached: false,
        })
    }

    /// Absent language → default; unsupported language → default with a
    /// warning, never a request failure.
    fn normalize_language(&self, requested: Option<&str>) -> String {
        match requested {
            None => self.default_language.clone(),
            Some(lang) if language::is_supported(lang) => lang.to_string(),
            Some(lang) => {
                tracing::warn!(
                    requested = lang,
                    default = %self.default_language,
                    "unsupported language, falling back to default"
                );
                self.default_language.clone()
            }
        }
    }
}

fn required_field<'a>(value: Option<&'a str>, field: &'static str) -> Result<&'a str, AstroError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(AstroError::MissingField(field)),
    }
}

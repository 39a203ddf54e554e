//! Prediction pipeline tests
//!
//! The service is exercised with in-test fakes so backend behavior
//! (including failure) is deterministic.

use astro_insight::application::predict::PredictionService;
use astro_insight::domain::error::AstroError;
use astro_insight::domain::model::{record_key, PredictionRequest};
use astro_insight::domain::traits::{InsightGenerator, Translator};
use astro_insight::domain::zodiac::ZodiacSign;
use astro_insight::infrastructure::generator::gemini::fallback_insight;
use astro_insight::infrastructure::storage::cache::RecordCache;
use astro_insight::infrastructure::translator::dummy::{DummyTranslator, TRANSLATION_MARKER};
use async_trait::async_trait;
use std::sync::Arc;

/// Deterministic generator that does not localize (rule-based shape).
struct FixedGenerator;

#[async_trait]
impl InsightGenerator for FixedGenerator {
    fn name(&self) -> &str {
        "fixed"
    }

    fn localizes(&self) -> bool {
        false
    }

    async fn generate(&self, zodiac: ZodiacSign, name: &str, _language: &str) -> String {
        format!("{}, the stars favor {} today.", name, zodiac)
    }
}

/// Deterministic generator that claims to answer in the requested
/// language (model-backed shape).
struct LocalizingGenerator;

#[async_trait]
impl InsightGenerator for LocalizingGenerator {
    fn name(&self) -> &str {
        "localizing"
    }

    fn localizes(&self) -> bool {
        true
    }

    async fn generate(&self, _zodiac: ZodiacSign, name: &str, language: &str) -> String {
        format!("{}, a bright day awaits. ({})", name, language)
    }
}

/// Generator whose backend always fails, so every call degrades to the
/// deterministic fallback sentence (the Gemini failure shape).
struct DegradedGenerator;

#[async_trait]
impl InsightGenerator for DegradedGenerator {
    fn name(&self) -> &str {
        "degraded"
    }

    fn localizes(&self) -> bool {
        true
    }

    async fn generate(&self, zodiac: ZodiacSign, name: &str, _language: &str) -> String {
        fallback_insight(zodiac, name)
    }
}

struct FailingTranslator;

#[async_trait]
impl Translator for FailingTranslator {
    fn name(&self) -> &str {
        "failing"
    }

    async fn translate(&self, _text: &str, _lang_code: &str) -> Result<String, AstroError> {
        Err(AstroError::Api("backend unavailable".to_string()))
    }
}

fn request(name: &str, date: &str, language: Option<&str>) -> PredictionRequest {
    PredictionRequest {
        name: Some(name.to_string()),
        birth_date: Some(date.to_string()),
        birth_time: Some("14:30".to_string()),
        birth_place: Some("Jaipur, India".to_string()),
        language: language.map(|l| l.to_string()),
    }
}

async fn service_with(
    dir: &tempfile::TempDir,
    generator: Arc<dyn InsightGenerator>,
    translator: Arc<dyn Translator>,
) -> (PredictionService, Arc<RecordCache>) {
    let cache = Arc::new(
        RecordCache::open(dir.path().join("cache.json"))
            .await
            .unwrap(),
    );
    let service = PredictionService::new(cache.clone(), generator, translator, "English");
    (service, cache)
}

#[test]
fn test_record_key_shape() {
    assert_eq!(record_key("Ritika", "1995-08-20"), "Ritika_1995-08-20");
}

#[tokio::test]
async fn test_miss_then_hit_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let (service, cache) =
        service_with(&dir, Arc::new(FixedGenerator), Arc::new(DummyTranslator)).await;
    let req = request("Ritika", "1995-08-20", Some("English"));

    let first = service.predict(&req).await.unwrap();
    assert!(!first.cached);
    assert_eq!(first.record.zodiac, ZodiacSign::Leo);
    assert_eq!(cache.len(), 1);

    let second = service.predict(&req).await.unwrap();
    assert!(second.cached);
    assert_eq!(second.record, first.record);
    assert_eq!(cache.len(), 1);
}

#[tokio::test]
async fn test_cache_hit_keeps_original_language() {
    // Language is not part of the cache identity: a later request in
    // another language gets the record as originally stored.
    let dir = tempfile::tempdir().unwrap();
    let (service, _cache) =
        service_with(&dir, Arc::new(FixedGenerator), Arc::new(DummyTranslator)).await;

    let first = service
        .predict(&request("A", "1995-08-20", Some("English")))
        .await
        .unwrap();
    assert_eq!(first.record.language, "English");

    let second = service
        .predict(&request("A", "1995-08-20", Some("Hindi")))
        .await
        .unwrap();
    assert!(second.cached);
    assert_eq!(second.record.language, "English");
    assert_eq!(second.record.insight, first.record.insight);
}

#[tokio::test]
async fn test_non_default_language_is_translated() {
    let dir = tempfile::tempdir().unwrap();
    let (service, _cache) =
        service_with(&dir, Arc::new(FixedGenerator), Arc::new(DummyTranslator)).await;

    let prediction = service
        .predict(&request("Geeta", "1995-08-20", Some("Hindi")))
        .await
        .unwrap();
    assert!(prediction.record.insight.starts_with(TRANSLATION_MARKER));
    assert_eq!(prediction.record.language, "Hindi");
}

#[tokio::test]
async fn test_default_language_skips_translation() {
    let dir = tempfile::tempdir().unwrap();
    let (service, _cache) =
        service_with(&dir, Arc::new(FixedGenerator), Arc::new(DummyTranslator)).await;

    let prediction = service
        .predict(&request("Geeta", "1995-08-20", None))
        .await
        .unwrap();
    assert!(!prediction.record.insight.starts_with(TRANSLATION_MARKER));
    assert_eq!(prediction.record.language, "English");
}

#[tokio::test]
async fn test_localizing_generator_skips_translation() {
    // The model-backed path generates directly in the requested
    // language; no separate translation runs.
    let dir = tempfile::tempdir().unwrap();
    let (service, _cache) =
        service_with(&dir, Arc::new(LocalizingGenerator), Arc::new(DummyTranslator)).await;

    let prediction = service
        .predict(&request("Geeta", "1995-08-20", Some("Hindi")))
        .await
        .unwrap();
    assert!(!prediction.record.insight.starts_with(TRANSLATION_MARKER));
    assert!(prediction.record.insight.contains("(Hindi)"));
    assert_eq!(prediction.record.language, "Hindi");
}

#[tokio::test]
async fn test_missing_fields_leave_cache_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let (service, cache) =
        service_with(&dir, Arc::new(FixedGenerator), Arc::new(DummyTranslator)).await;

    let cases: [(&str, PredictionRequest); 5] = [
        ("name", PredictionRequest {
            name: None,
            ..request("x", "1995-08-20", None)
        }),
        ("name", PredictionRequest {
            name: Some(String::new()),
            ..request("x", "1995-08-20", None)
        }),
        ("birth_date", PredictionRequest {
            birth_date: None,
            ..request("Ritika", "1995-08-20", None)
        }),
        ("birth_time", PredictionRequest {
            birth_time: None,
            ..request("Ritika", "1995-08-20", None)
        }),
        ("birth_place", PredictionRequest {
            birth_place: None,
            ..request("Ritika", "1995-08-20", None)
        }),
    ];

    for (field, req) in cases {
        match service.predict(&req).await {
            Err(AstroError::MissingField(missing)) => assert_eq!(missing, field),
            Ok(_) => panic!("expected MissingField({}), got success", field),
            Err(other) => panic!("expected MissingField({}), got {}", field, other),
        }
    }
    assert!(cache.is_empty());
}

#[tokio::test]
async fn test_invalid_date_leaves_cache_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let (service, cache) =
        service_with(&dir, Arc::new(FixedGenerator), Arc::new(DummyTranslator)).await;

    let result = service.predict(&request("Ritika", "20-08-1995", None)).await;
    assert!(matches!(result, Err(AstroError::InvalidDate(_))));
    assert!(cache.is_empty());
}

#[tokio::test]
async fn test_unsupported_language_coerces_to_default() {
    let dir = tempfile::tempdir().unwrap();
    let (service, _cache) =
        service_with(&dir, Arc::new(FixedGenerator), Arc::new(DummyTranslator)).await;

    // Distinct names so every request is a cache miss.
    for (name, lang) in [("Kirk", "Klingon"), ("Priya", "hindi"), ("Maya", "")] {
        let prediction = service
            .predict(&request(name, "1995-08-20", Some(lang)))
            .await
            .unwrap();
        assert_eq!(prediction.record.language, "English", "language {:?}", lang);
        assert!(!prediction.record.insight.starts_with(TRANSLATION_MARKER));
    }
}

#[tokio::test]
async fn test_generator_backend_failure_still_yields_insight() {
    let dir = tempfile::tempdir().unwrap();
    let (service, _cache) =
        service_with(&dir, Arc::new(DegradedGenerator), Arc::new(DummyTranslator)).await;

    let prediction = service
        .predict(&request("Ritika", "1995-08-20", Some("English")))
        .await
        .unwrap();
    assert!(!prediction.record.insight.is_empty());
    assert_eq!(
        prediction.record.insight,
        "Ritika, as a Leo, your grounded nature will guide you today."
    );
}

#[tokio::test]
async fn test_translator_failure_degrades_to_untranslated_text() {
    let dir = tempfile::tempdir().unwrap();
    let (service, _cache) =
        service_with(&dir, Arc::new(FixedGenerator), Arc::new(FailingTranslator)).await;

    let prediction = service
        .predict(&request("Geeta", "1995-08-20", Some("Hindi")))
        .await
        .unwrap();
    assert!(!prediction.record.insight.is_empty());
    assert_eq!(
        prediction.record.insight,
        "Geeta, the stars favor Leo today."
    );
    assert_eq!(prediction.record.language, "Hindi");
}

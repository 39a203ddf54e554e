//! File-backed record cache tests

use astro_insight::domain::model::InsightRecord;
use astro_insight::domain::zodiac::ZodiacSign;
use astro_insight::infrastructure::storage::cache::RecordCache;

fn sample_record() -> InsightRecord {
    InsightRecord {
        zodiac: ZodiacSign::Leo,
        insight: "Ritika, your charisma draws people closer today.".to_string(),
        language: "English".to_string(),
    }
}

#[tokio::test]
async fn test_open_creates_empty_store_and_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cache.json");

    let cache = RecordCache::open(&path).await.unwrap();
    assert!(cache.is_empty());
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "{}");
}

#[tokio::test]
async fn test_get_missing_key_is_none() {
    let dir = tempfile::tempdir().unwrap();
    let cache = RecordCache::open(dir.path().join("cache.json")).await.unwrap();
    assert!(cache.get("Nobody_1990-01-01").is_none());
}

#[tokio::test]
async fn test_set_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cache.json");

    {
        let cache = RecordCache::open(&path).await.unwrap();
        cache.set("Ritika_1995-08-20", sample_record()).await.unwrap();
        assert_eq!(cache.len(), 1);
    }

    let reopened = RecordCache::open(&path).await.unwrap();
    assert_eq!(reopened.len(), 1);
    assert_eq!(reopened.get("Ritika_1995-08-20"), Some(sample_record()));
}

#[tokio::test]
async fn test_last_write_wins() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cache.json");

    let cache = RecordCache::open(&path).await.unwrap();
    cache.set("Ritika_1995-08-20", sample_record()).await.unwrap();

    let replacement = InsightRecord {
        zodiac: ZodiacSign::Leo,
        insight: "Ritika, take the spotlight today.".to_string(),
        language: "Hindi".to_string(),
    };
    cache.set("Ritika_1995-08-20", replacement.clone()).await.unwrap();
    assert_eq!(cache.len(), 1);

    let reopened = RecordCache::open(&path).await.unwrap();
    assert_eq!(reopened.get("Ritika_1995-08-20"), Some(replacement));
}

#[tokio::test]
async fn test_corrupt_file_resets_to_empty_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cache.json");
    std::fs::write(&path, "{not valid json").unwrap();

    let cache = RecordCache::open(&path).await.unwrap();
    assert!(cache.is_empty());

    // The store remains usable after the reset.
    cache.set("Aman_1998-09-01", sample_record()).await.unwrap();
    let reopened = RecordCache::open(&path).await.unwrap();
    assert_eq!(reopened.len(), 1);
}

#[tokio::test]
async fn test_file_is_human_readable_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cache.json");

    let cache = RecordCache::open(&path).await.unwrap();
    cache.set("Ritika_1995-08-20", sample_record()).await.unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    // Pretty-printed, keyed by the composite key, fields spelled out.
    assert!(content.contains('\n'));
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(value["Ritika_1995-08-20"]["zodiac"], "Leo");
    assert_eq!(value["Ritika_1995-08-20"]["language"], "English");
}

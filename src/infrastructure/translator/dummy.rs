use crate::domain::error::AstroError;
use crate::domain::traits::Translator;
use async_trait::async_trait;

/// Dummy translator for offline and test paths
///
/// Deterministic: marks the text instead of translating it.
pub struct DummyTranslator;

pub const TRANSLATION_MARKER: &str = "[Translation] ";

#[async_trait]
impl Translator for DummyTranslator {
    fn name(&self) -> &str {
        "dummy"
    }

    async fn translate(&self, text: &str, _lang_code: &str) -> Result<String, AstroError> {
        Ok(format!("{}{}", TRANSLATION_MARKER, text))
    }
}

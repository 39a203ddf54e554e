use crate::domain::error::AstroError;
use crate::domain::zodiac::ZodiacSign;
use async_trait::async_trait;

/// Trait for insight generation backends
///
/// This trait provides an abstraction over how the personalized message
/// is produced (rule-based phrases, a hosted model, ...). The variant is
/// chosen once at service construction; implementations can be swapped
/// without changing the orchestrator.
#[async_trait]
pub trait InsightGenerator: Send + Sync {
    /// Backend name for logging and status output
    fn name(&self) -> &str;

    /// Whether generated text already comes out in the requested
    /// language. When false, the orchestrator translates the output
    /// itself for non-default languages.
    fn localizes(&self) -> bool;

    /// Generate a short personalized insight.
    ///
    /// Must not fail: backends degrade to a deterministic fallback
    /// sentence when the underlying call errors or times out.
    async fn generate(&self, zodiac: ZodiacSign, name: &str, language: &str) -> String;
}

/// Trait for translation services
///
/// Implementations can be swapped without changing the calling code.
/// The target is a translation code (`"hi"`, `"ta"`, ...); mapping from
/// language names and rejecting unsupported ones happens upstream.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Backend name for logging and status output
    fn name(&self) -> &str;

    /// Translate text into the target language code
    async fn translate(&self, text: &str, lang_code: &str) -> Result<String, AstroError>;
}

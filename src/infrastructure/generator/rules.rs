use crate::domain::traits::InsightGenerator;
use crate::domain::zodiac::ZodiacSign;
use async_trait::async_trait;
use rand::seq::SliceRandom;

/// Rule-based insight generator
///
/// Serves a fixed phrase per sign, picked uniformly at random per call,
/// prefixed with the user's name. No API keys required, so it doubles
/// as the offline/development path. Output is non-deterministic: tests
/// assert membership in the phrase set, not exact strings.
pub struct RuleBasedGenerator;

const PHRASES: [(ZodiacSign, [&str; 3]); 12] = [
    (
        ZodiacSign::Aries,
        [
            "Your fiery spirit will open new doors today.",
            "Stay bold, Aries, but listen before you act.",
            "A spark of inspiration guides you forward.",
        ],
    ),
    (
        ZodiacSign::Taurus,
        [
            "Stability brings you peace today.",
            "Focus on small joys; they bring great comfort.",
            "Patience will reward your persistence.",
        ],
    ),
    (
        ZodiacSign::Gemini,
        [
            "Conversations bring clarity today.",
            "Your curiosity leads to a surprising discovery.",
            "Stay flexible, new opportunities may come suddenly.",
        ],
    ),
    (
        ZodiacSign::Cancer,
        [
            "Nurturing connections will warm your heart today.",
            "Trust your intuition—it’s stronger than logic.",
            "Emotional balance helps you thrive today.",
        ],
    ),
    (
        ZodiacSign::Leo,
        [
            "Your charisma draws people closer today.",
            "Take the spotlight—your voice matters.",
            "Confidence attracts the right kind of attention.",
        ],
    ),
    (
        ZodiacSign::Virgo,
        [
            "Organizing your thoughts clears your path.",
            "Attention to detail brings success today.",
            "Your practicality grounds those around you.",
        ],
    ),
    (
        ZodiacSign::Libra,
        [
            "Seek harmony in partnerships today.",
            "Balance leads to unexpected opportunities.",
            "Fairness will bring inner peace.",
        ],
    ),
    (
        ZodiacSign::Scorpio,
        [
            "Transformation begins within today.",
            "Your passion fuels breakthroughs.",
            "Embrace change—it’s on your side.",
        ],
    ),
    (
        ZodiacSign::Sagittarius,
        [
            "Adventure calls—step into the unknown.",
            "Optimism attracts opportunities today.",
            "Keep learning; wisdom guides your journey.",
        ],
    ),
    (
        ZodiacSign::Capricorn,
        [
            "Hard work brings steady progress.",
            "Discipline is your strength today.",
            "Focus on long-term goals, not quick wins.",
        ],
    ),
    (
        ZodiacSign::Aquarius,
        [
            "Innovation sparks fresh ideas today.",
            "Your unique perspective inspires others.",
            "Collaboration brings surprising results.",
        ],
    ),
    (
        ZodiacSign::Pisces,
        [
            "Creativity flows effortlessly today.",
            "Dreams reveal hidden guidance.",
            "Compassion strengthens your connections.",
        ],
    ),
];

/// Phrase set for a sign; `None` for signs outside the known twelve.
pub fn phrases(zodiac: ZodiacSign) -> Option<&'static [&'static str; 3]> {
    PHRASES
        .iter()
        .find(|(sign, _)| *sign == zodiac)
        .map(|(_, set)| set)
}

#[async_trait]
impl InsightGenerator for RuleBasedGenerator {
    fn name(&self) -> &str {
        "rules"
    }

    fn localizes(&self) -> bool {
        false
    }

    async fn generate(&self, zodiac: ZodiacSign, name: &str, _language: &str) -> String {
        match phrases(zodiac) {
            Some(set) => {
                let phrase = set
                    .choose(&mut rand::thread_rng())
                    .copied()
                    .unwrap_or(set[0]);
                format!("{}, {}", name, phrase)
            }
            None => format!("{}, today is a day of mystery and self-discovery.", name),
        }
    }
}

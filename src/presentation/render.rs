use crate::domain::model::Prediction;
use crate::presentation::theme::Theme;
use colored::Colorize;
use std::fmt::Write;

/// Format a prediction as a string (for terminal output)
pub fn format_prediction(prediction: &Prediction, theme: &Theme, enable_emoji: bool) -> String {
    let mut output = String::new();

    let source_indicator = if prediction.cached {
        if enable_emoji {
            "💾 [cached]"
        } else {
            "[cached]"
        }
    } else if enable_emoji {
        "🌐 [fresh]"
    } else {
        "[fresh]"
    };

    writeln!(
        output,
        "{} {}",
        (theme.sign)(prediction.record.zodiac.as_str()),
        source_indicator.cyan()
    )
    .ok();

    let cutoff = "⸺".repeat(40);
    writeln!(output, "  {}", (theme.line)(&cutoff)).ok();
    writeln!(output, "  {}", (theme.insight)(&prediction.record.insight)).ok();
    writeln!(output).ok();
    writeln!(
        output,
        "  {} {}",
        (theme.label)("language:"),
        (theme.value)(&prediction.record.language)
    )
    .ok();

    output
}

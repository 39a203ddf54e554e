use colored::Colorize;

pub struct Theme {
    pub sign: fn(&str) -> String,
    pub insight: fn(&str) -> String,
    pub label: fn(&str) -> String,
    pub value: fn(&str) -> String,
    pub line: fn(&str) -> String,
}

impl Theme {
    pub fn from_name(name: &str) -> Self {
        match name {
            "dusk" | "" => Self::dusk(),
            "nebula" => Self::nebula(),
            "canvas" => Self::canvas(),
            _ => {
                eprintln!("{}", format!("✘ Unknown theme: {}", name).red());
                Self::dusk() // Fallback to default
            }
        }
    }

    fn dusk() -> Self {
        Self {
            sign: |s| s.bright_magenta().italic().bold().underline().to_string(),
            insight: |s| s.white().to_string(),
            label: |s| s.cyan().to_string(),
            value: |s| s.bright_white().to_string(),
            line: |s| s.bright_black().dimmed().to_string(),
        }
    }

    fn nebula() -> Self {
        Self {
            sign: |s| s.red().italic().bold().underline().to_string(),
            insight: |s| s.bright_white().to_string(),
            label: |s| s.green().italic().to_string(),
            value: |s| s.white().to_string(),
            line: |s| s.bright_black().dimmed().to_string(),
        }
    }

    fn canvas() -> Self {
        Self {
            sign: |s| s.blue().bold().underline().to_string(),
            insight: |s| s.black().to_string(),
            label: |s| s.bright_cyan().bold().to_string(),
            value: |s| s.cyan().to_string(),
            line: |s| s.bright_black().dimmed().to_string(),
        }
    }
}

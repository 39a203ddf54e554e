use clap::Parser;

#[derive(Parser)]
#[command(name = "astro")]
#[command(about = "Personalized zodiac insights from your birth details.")]
#[command(version)]
pub struct Cli {
    /// Name to personalize the insight with
    #[arg(short = 'n', long)]
    pub name: Option<String>,

    /// Birth date, YYYY-MM-DD
    #[arg(short = 'd', long)]
    pub birth_date: Option<String>,

    /// Birth time, e.g. 14:30
    #[arg(short = 't', long)]
    pub birth_time: Option<String>,

    /// Birth place, e.g. "Jaipur, India"
    #[arg(short = 'p', long)]
    pub birth_place: Option<String>,

    /// Insight language (see --languages for the supported set)
    #[arg(short = 'l', long)]
    pub language: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Choose color theme
    #[arg(short = 'T', long)]
    pub theme: Option<String>,

    /// List supported languages
    #[arg(long)]
    pub languages: bool,

    /// Generate config sample
    #[arg(long)]
    pub generate_config: bool,

    /// Edit configuration file
    #[arg(long)]
    pub edit_config: bool,

    /// Show status
    #[arg(long)]
    pub status: bool,
}

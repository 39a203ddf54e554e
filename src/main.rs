// Main entry point
use astro_insight::application::predict::PredictionService;
use astro_insight::domain::language;
use astro_insight::domain::model::PredictionRequest;
use astro_insight::domain::traits::{InsightGenerator, Translator};
use astro_insight::infrastructure::config;
use astro_insight::infrastructure::generator::gemini::GeminiGenerator;
use astro_insight::infrastructure::generator::rules::RuleBasedGenerator;
use astro_insight::infrastructure::storage::cache::RecordCache;
use astro_insight::infrastructure::translator::dummy::DummyTranslator;
use astro_insight::infrastructure::translator::google::GoogleTranslator;
use astro_insight::interfaces::cli::Cli;
use astro_insight::presentation::render::format_prediction;
use astro_insight::presentation::theme::Theme;
use astro_insight::state::AppState;
use clap::Parser;
use colored::Colorize;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Setup graceful shutdown handler
    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();

    // Spawn signal handler task
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            eprintln!("Failed to listen for shutdown signal: {}", e);
        } else {
            let _ = shutdown_tx.send(());
        }
    });

    let cli = Cli::parse();
    let config = config::load_config()?;

    // Initialize logging
    if config.logging.enable {
        init_logging(&config.logging)?;
    }

    // Handle commands (flags)
    if cli.generate_config {
        config::generate_config_sample()?;
        return Ok(());
    }
    if cli.edit_config {
        if let Some(config_path) = config::get_config_path() {
            let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());
            let config_path_clone = config_path.clone();
            // Run editor in blocking task
            tokio::task::spawn_blocking(move || {
                std::process::Command::new(editor)
                    .arg(&config_path_clone)
                    .status()
            })
            .await??;
        } else {
            eprintln!("{}", "Config file not found".red());
        }
        return Ok(());
    }
    if cli.languages {
        print_languages();
        return Ok(());
    }

    // Initialize AppState
    let cache_path = config::get_cache_path(&config);
    let cache = RecordCache::open(cache_path).await?;
    let state = AppState::new(cache, config.clone())?;

    if cli.status {
        print_status(&state).await;
        return Ok(());
    }

    // Build the prediction pipeline from configuration
    let generator: Arc<dyn InsightGenerator> = if config.use_dummy_generator {
        Arc::new(RuleBasedGenerator)
    } else {
        match config.gemini.resolve_api_key() {
            Some(api_key) => Arc::new(GeminiGenerator::new(
                state.http_client.clone(),
                api_key,
                config.gemini.model.clone(),
                config.http.max_retries,
            )),
            None => {
                eprintln!(
                    "{}",
                    "Gemini API key not configured, using the rule-based generator".yellow()
                );
                Arc::new(RuleBasedGenerator)
            }
        }
    };
    let translator: Arc<dyn Translator> = if config.use_dummy_translator {
        Arc::new(DummyTranslator)
    } else {
        Arc::new(GoogleTranslator::new(state.http_client.clone()))
    };
    let service = PredictionService::new(
        state.cache.clone(),
        generator,
        translator,
        config.default_language.clone(),
    );

    let request = PredictionRequest {
        name: cli.name.clone(),
        birth_date: cli.birth_date.clone(),
        birth_time: cli.birth_time.clone(),
        birth_place: cli.birth_place.clone(),
        language: cli.language.clone(),
    };

    // Use select! to handle shutdown while a backend call is in flight
    let result = tokio::select! {
        result = service.predict(&request) => result,
        _ = shutdown_rx => {
            eprintln!("{}", "Interrupted".yellow());
            return Ok(());
        }
    };

    let prediction = match result {
        Ok(prediction) => prediction,
        Err(e) if e.is_caller_error() => {
            eprintln!("{}", e.to_string().red());
            std::process::exit(1);
        }
        Err(e) => {
            tracing::error!(error = %e, "prediction failed");
            eprintln!(
                "{}",
                "Something went wrong while generating your insight. Please try again.".red()
            );
            std::process::exit(1);
        }
    };

    // Output result
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&prediction)?);
    } else {
        let theme_name = cli.theme.as_deref().unwrap_or(config.theme.as_str());
        let theme = Theme::from_name(theme_name);
        print!(
            "{}",
            format_prediction(&prediction, &theme, config.enable_emoji)
        );
    }

    Ok(())
}

/// Initialize logging with path and level configuration
fn init_logging(logging: &config::Logging) -> anyhow::Result<()> {
    use tracing_subscriber::EnvFilter;

    let level = match logging.level.as_str() {
        "DEBUG" => "debug",
        "INFO" => "info",
        "WARN" => "warn",
        "ERROR" => "error",
        _ => "warn",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    if let Some(path) = &logging.path {
        if !path.is_empty() {
            // Log to file
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(file)
                .init();
            return Ok(());
        }
    }

    // Log to stderr (default)
    tracing_subscriber::fmt().with_env_filter(filter).init();

    Ok(())
}

fn print_languages() {
    println!("{}", "Supported languages".green().bold());
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    for (name, code) in language::SUPPORTED_LANGUAGES {
        println!("  {:<12} {}", name, code.bright_black());
    }
}

async fn print_status(state: &AppState) {
    println!("{}", "astro Status".green().bold());
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let config = state.config.read().await;

    println!(
        "Cache: {} ({} records)",
        state.cache.path().display(),
        state.cache.len()
    );
    println!(
        "Config: {}",
        config::get_config_path()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "Not found".to_string())
    );
    println!("Default language: {}", config.default_language);

    if config.use_dummy_generator {
        println!("Generator: rule-based");
    } else if config.gemini.resolve_api_key().is_some() {
        println!("Generator: Gemini ({})", config.gemini.model);
    } else {
        println!("Generator: Gemini (API key not configured)");
    }

    if config.use_dummy_translator {
        println!("Translator: dummy");
    } else {
        println!("Translator: Google");
    }
}

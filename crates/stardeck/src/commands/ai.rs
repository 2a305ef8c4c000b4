use anyhow::Result;
use colored::Colorize;
use inquire::{Password, PasswordDisplayMode, Text};

use crate::ai::DEFAULT_MODEL;
use crate::cli::AiCommands;
use crate::config::{AiConfig, Config, API_KEY_ENV};

pub fn run(command: AiCommands) -> Result<()> {
    match command {
        AiCommands::Init => init(),
        AiCommands::Status => status(),
        AiCommands::Remove => remove(),
    }
}

fn init() -> Result<()> {
    println!(
        "Configure the hook generator. The key is stored in your config file;\n\
         leave it empty to keep using the {API_KEY_ENV} environment variable."
    );

    let api_key = Password::new("API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()?;

    let model = Text::new("Model:").with_default(DEFAULT_MODEL).prompt()?;

    let mut config = Config::load_or_default();
    config.ai = Some(AiConfig {
        api_key: (!api_key.is_empty()).then_some(api_key),
        model: (model != DEFAULT_MODEL).then_some(model),
    });
    let path = config.save()?;

    println!(
        "{} Saved to {}",
        "AI configuration updated.".green().bold(),
        path.display()
    );
    Ok(())
}

fn status() -> Result<()> {
    let config = Config::load_or_default();

    let source = if config
        .ai
        .as_ref()
        .and_then(|ai| ai.api_key.as_ref())
        .is_some_and(|k| !k.is_empty())
    {
        Some("config file")
    } else if std::env::var(API_KEY_ENV).is_ok_and(|k| !k.is_empty()) {
        Some("environment")
    } else {
        None
    };

    match source {
        Some(source) => println!("API key: {} ({source})", "configured".green()),
        None => println!(
            "API key: {} \u{2014} run `stardeck ai init` or set {API_KEY_ENV}",
            "not configured".yellow()
        ),
    }
    println!("Model:   {}", config.model());
    Ok(())
}

fn remove() -> Result<()> {
    let mut config = Config::load_or_default();
    if config.ai.take().is_none() {
        println!("{}", "No AI configuration to remove.".yellow());
        return Ok(());
    }
    config.save()?;
    println!("{}", "AI configuration removed.".green());
    Ok(())
}

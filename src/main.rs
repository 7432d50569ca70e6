use clap::Parser;
use clubhouse_story::utils::{logger, validation::Validate};
use clubhouse_story::{CliConfig, ClubhouseClient, StoryCreator, StoryError};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting clubhouse-story CLI");

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(
                "❌ Story creation failed: {} (Severity: {:?})",
                e,
                e.severity()
            );
            eprintln!("❌ {}: {}", e.user_friendly_message(), e);
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            ExitCode::from(e.exit_code())
        }
    }
}

async fn run(config: CliConfig) -> Result<(), StoryError> {
    let config = config.load_config_file()?;
    config.validate()?;
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    println!("{}", config.token);

    let client = ClubhouseClient::from_config(&config);
    let creator = StoryCreator::new(client, config);
    let response = creator.run().await?;

    println!("{}", response);
    Ok(())
}

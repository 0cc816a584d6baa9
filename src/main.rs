//! gtx-translate - translate text from the command line

use std::process::ExitCode;

use clap::Parser;
use gtx_translate::{supported_languages, Config, Translator};

#[derive(Parser, Debug)]
#[command(
    name = "gtx-translate",
    version,
    about = "Translate text via the public Google Translate endpoint",
    after_help = "Environment:\n  GTX_ENDPOINT      override the translation endpoint\n  GTX_TIMEOUT_SECS  override the 30 second request timeout\n  RUST_LOG          log filter (default: warn)"
)]
struct Cli {
    /// Source language code
    #[arg(short, long, default_value = "en")]
    from: String,

    /// Target language code
    #[arg(short, long, required_unless_present = "list_languages")]
    to: Option<String>,

    /// Print every supported language code and exit
    #[arg(long)]
    list_languages: bool,

    /// Text to translate; multiple words are joined with spaces
    #[arg(required_unless_present = "list_languages")]
    text: Vec<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    pretty_env_logger::formatted_builder()
        .filter_level(log::LevelFilter::Warn)
        .parse_env("RUST_LOG")
        .init();

    let cli = Cli::parse();

    if cli.list_languages {
        for code in supported_languages() {
            println!("{code}");
        }
        return ExitCode::SUCCESS;
    }

    let Some(target) = cli.to.as_deref() else {
        eprintln!("error: --to is required");
        return ExitCode::FAILURE;
    };

    let config = Config::from_env();
    log::debug!("Using endpoint {} with {}s timeout", config.endpoint, config.timeout_secs);

    let translator = match Translator::from_config(&config) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let text = cli.text.join(" ");
    match translator.translate(&text, &cli.from, target).await {
        Ok(translated) => {
            println!("{translated}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Translation failed: {:?}", e);
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Cli;
    use clap::{CommandFactory, Parser};

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn words_are_collected_in_order() {
        let cli = Cli::try_parse_from(["gtx-translate", "--to", "es", "Good", "morning"]).unwrap();
        assert_eq!(cli.from, "en");
        assert_eq!(cli.to.as_deref(), Some("es"));
        assert_eq!(cli.text.join(" "), "Good morning");
    }

    #[test]
    fn help_mentions_environment_overrides() {
        let help = Cli::command().render_long_help().to_string();
        assert!(help.contains("GTX_ENDPOINT"));
        assert!(help.contains("GTX_TIMEOUT_SECS"));
    }

    #[test]
    fn listing_needs_no_text() {
        let cli = Cli::try_parse_from(["gtx-translate", "--list-languages"]).unwrap();
        assert!(cli.list_languages);
    }
}

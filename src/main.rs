use clap::Parser;
use message_relay::config::cli::LogFormat;
use message_relay::domain::ports::ConfigProvider;
use message_relay::utils::logger;
use message_relay::{
    CliConfig, FormBinding, HttpExchange, LineInput, SubmissionHandler, TerminalView,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::task::{JoinError, JoinSet};

const QUIT_COMMAND: &str = ".quit";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    match cli.log_format {
        LogFormat::Compact => logger::init_cli_logger(cli.verbose),
        LogFormat::Json => logger::init_json_logger(),
    }

    tracing::info!("Starting message-relay");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    let exchange = match HttpExchange::from_config(&config) {
        Ok(exchange) => exchange,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };
    tracing::info!("Sending messages to {}", config.endpoint_url());

    let input = LineInput::new();
    let handler = SubmissionHandler::new(input.clone(), TerminalView::new(), exchange)
        .with_discard_stale(config.discard_stale());
    let form = FormBinding::bind(handler);

    eprintln!("Enter a message (or type '{}' to exit):", QUIT_COMMAND);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut in_flight = JoinSet::new();

    while let Some(line) = lines.next_line().await? {
        if line.trim() == QUIT_COMMAND {
            break;
        }

        input.set(&line);
        form.submit_into(&mut in_flight);

        while let Some(joined) = in_flight.try_join_next() {
            report_join_failure(joined);
        }
    }

    tracing::debug!("Waiting for {} submission(s) to settle", in_flight.len());
    while let Some(joined) = in_flight.join_next().await {
        report_join_failure(joined);
    }

    tracing::info!("message-relay finished after {} submission(s)", form.submissions());
    Ok(())
}

fn report_join_failure<T>(joined: Result<T, JoinError>) {
    if let Err(e) = joined {
        tracing::error!("Submission task failed: {}", e);
    }
}

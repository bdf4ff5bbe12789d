use discord_quotes::utils::logger;
use discord_quotes::{app, CliArgs};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = CliArgs::parse_args();

    logger::init_cli_logger(args.verbose);
    tracing::info!("Starting discord-quotes");

    match app::run(&args).await {
        Ok(delivery) => {
            tracing::info!(
                "Sent {} characters to channel {}",
                delivery.content.chars().count(),
                delivery.channel
            );
            println!("Message sent successfully");
        }
        Err(e) => {
            tracing::debug!("Suggestion: {}", e.recovery_suggestion());
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

use clap::Parser;
use mpi_bcast::utils::logger;
use mpi_bcast::{
    BcastError, BroadcastEngine, CliConfig, PromptConfirmer, RunOutcome, Settings, SystemRunner,
};

#[tokio::main]
async fn main() {
    let cli = match CliConfig::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version are not failures
            let _ = e.print();
            std::process::exit(if e.use_stderr() { 1 } else { 0 });
        }
    };

    logger::init_cli_logger(cli.verbose);
    tracing::debug!("CLI config: {:?}", cli);

    let settings = match Settings::load(&cli) {
        Ok(settings) => settings,
        Err(e) => exit_with(e),
    };

    let engine = BroadcastEngine::new(settings, PromptConfirmer::stdio(), SystemRunner::new());

    match engine.run().await {
        Ok(RunOutcome::Completed) => tracing::info!("Broadcast finished"),
        Ok(RunOutcome::Cancelled) => tracing::info!("Cancelled by user"),
        Ok(RunOutcome::DryRun(command)) => tracing::info!("Dry run: {}", command),
        Err(e) => exit_with(e),
    }
}

fn exit_with(e: BcastError) -> ! {
    tracing::debug!("{} (Category: {:?})", e, e.category());
    tracing::debug!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    std::process::exit(e.exit_code());
}

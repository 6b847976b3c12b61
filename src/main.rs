use clap::Parser;
use form_autofill::cli::commands::{cmd_classify, cmd_detect, cmd_fill};
use form_autofill::cli::config::{Cli, Commands, load_config};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref());

    match cli.command {
        Commands::Detect { page, json } => {
            cmd_detect(&page, json, &config, cli.verbose)?;
        }
        Commands::Classify { page, json } => {
            cmd_classify(&page, json, cli.verbose)?;
        }
        Commands::Fill {
            page,
            profile,
            undo,
            plan,
            json,
            trace,
        } => {
            let all_ok = cmd_fill(
                &page,
                &profile,
                undo,
                plan,
                json,
                trace.as_deref(),
                &config,
                cli.verbose,
            )?;
            if !all_ok {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

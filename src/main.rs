use anyhow::Result;
use uniqmap::cli::{Cli, Commands};
use uniqmap::commands::{self, DedupeConfig, DemoConfig, OutputSettings};
use uniqmap::config;
use uniqmap::observability;

// Main orchestrator function
fn main() -> Result<()> {
    let cli = uniqmap::cli::parse_args();

    observability::install_panic_hook();
    observability::init_logging(cli.verbosity);

    run(cli)
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Dedupe { values, output } => {
            let file_config = config::load_config();
            commands::handle_dedupe(DedupeConfig {
                values,
                output: OutputSettings::resolve(output, &file_config),
            })
        }
        Commands::Demo {
            values,
            title,
            interactive,
            output,
        } => {
            let file_config = config::load_config();
            let demo_config = DemoConfig {
                values,
                title,
                interactive,
                output: OutputSettings::resolve(output, &file_config),
            };
            commands::handle_demo(demo_config, &file_config)
        }
        Commands::Init { force } => commands::init_config(force),
    }
}

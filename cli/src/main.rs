mod commands;
mod terminal;

use commands::{CommandLine, Commands, info, scan};
use sonar_common::config::Config;
use terminal::{banner, logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands: CommandLine = CommandLine::parse_args();

    logging::init_logging(commands.verbose);

    let cfg: Config = commands.base_config();
    banner::print(cfg.no_banner, cfg.quiet);

    match &commands.command {
        Commands::Info => {
            print::header("about the tool", cfg.quiet);
            info::info(&cfg)
        }
        Commands::Scan(args) => {
            let cfg: Config = args.apply(cfg);
            print::header("starting scanner", cfg.quiet);
            scan::scan(args, &cfg).await
        }
    }
}

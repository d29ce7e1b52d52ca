mod commands;
mod terminal;

use std::process::ExitCode;

use commands::{CommandLine, Commands, info, random, sort};
use selsort_common::config::Config;
use selsort_common::error;
use selsort_common::input::RandomSpec;
use terminal::{logging, print};

fn main() -> ExitCode {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose);

    let cfg = Config {
        no_banner: commands.no_banner,
        quiet: commands.quiet,
        steps: commands.command.steps(),
    };

    print::banner(cfg.no_banner, cfg.quiet);

    let result = match commands.command {
        Commands::Info => {
            print::header("about the tool", cfg.quiet);
            info::info(&cfg)
        }
        Commands::Sort { values, .. } => {
            print::header("getting ready to sort", cfg.quiet);
            sort::sort(values, &cfg)
        }
        Commands::Random {
            count,
            min,
            max,
            seed,
            ..
        } => {
            print::header("generating values", cfg.quiet);
            let spec = RandomSpec {
                count,
                min,
                max,
                seed,
            };
            random::random(spec, &cfg)
        }
    };

    match result {
        Ok(()) => {
            if cfg.quiet == 0 {
                print::separator();
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

mod commands;
mod terminal;

use commands::{CommandLine, Commands, demo, find, list};
use registrar_common::config::Config;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    let cfg = Config {
        data_dir: commands.data_dir,
        quiet: commands.quiet,
        no_color: commands.no_color,
    };

    logging::init_logging(&cfg);
    print::banner(cfg.quiet);

    match commands.command.unwrap_or(Commands::Demo) {
        Commands::Demo => {
            print::header("university records", cfg.quiet);
            demo::demo(&cfg)?;
        }
        Commands::List => {
            print::header("stored records", cfg.quiet);
            list::list(&cfg)?;
        }
        Commands::Find { id } => {
            print::header("record lookup", cfg.quiet);
            find::find(id, &cfg)?;
        }
    }

    print::end_of_program();
    Ok(())
}

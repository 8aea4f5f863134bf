// Entrypoint for the `traders` CLI.
// - Keeps `main` small: parse arguments, set up logging, dispatch.
// - Errors are returned to the runtime, which prints them to stderr and
//   exits non-zero regardless of the log filter.

mod cli;

use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    cli::init_logging(cli.log_level);

    cli.execute()
}

use clap::Parser;

use hashroute_sim::cli::Cli;

fn main() -> anyhow::Result<()> {
    hashroute_core::init_logging();

    let cli = Cli::parse();
    hashroute_sim::run(cli)
}

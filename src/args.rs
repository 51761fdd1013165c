use clap::Parser;

/// Personal account ledger with an interactive terminal menu.
///
/// All interaction happens through the menu; there are no subcommands
/// or flags.
#[derive(Parser, Debug)]
#[clap(version)]
pub struct Args {}

pub fn parse() -> Args {
    Args::parse()
}

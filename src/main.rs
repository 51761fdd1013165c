use anyhow::Result;

fn main() -> Result<()> {
    env_logger::init();
    let args = carnet::args::parse();
    carnet::cli::main(args)
}

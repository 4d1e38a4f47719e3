use clap::Parser;
use tasty_new::{cli::Cli, config::Config, logging::init_logging, scaffold::Scaffolder};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.no_color);

    let config = Config::from_cli(cli)?;

    log::debug!("Configuration: {:?}", config);

    let scaffolder = Scaffolder::new(config.layout, config.no_color);
    let written = scaffolder.run(
        &config.name,
        config.generate_source,
        config.generate_benchmark,
    )?;

    log::debug!("Generated {} files for '{}'", written.len(), config.name);

    Ok(())
}

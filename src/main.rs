use clap::Parser;
use greeter::utils::logger;
use greeter::{CliConfig, Greeter};

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting greeter CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let greeter = Greeter::new();
    println!("{}", greeter.say_hello());
}

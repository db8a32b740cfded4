
mod ai;
mod config;
mod interfaces;
mod memory;

use std::fs::OpenOptions;
use std::io::Read;

use clap::Parser;

use interfaces::*;

use utils::*;

///
/// A structure representing command line arguments.
///
#[derive(Parser)]
struct CLIArgs
{
    #[clap(short, long, default_value = "config/config.toml")]
    config: String
}

fn main () -> Result<()>
{
    let args = CLIArgs::parse();

    // A missing configuration file is fine: the defaults describe the
    // classic 3x3 game.

    let config : config::Config = match OpenOptions::new().read(true).open(& args.config)
    {
        Ok(mut file) =>
        {
            let mut config_str = String::new();
            file.read_to_string(& mut config_str)?;
            toml::from_str(& config_str)?
        },
        Err(_) => config::Config::default()
    };

    let _logger = log::initialize(& config.log_path, "engine")?;

    let mut console = console::Console::new(& config);
    console.run()
}

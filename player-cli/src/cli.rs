use clap::Parser;
use std::path::PathBuf;

/// Define CLI arguments
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Modular media streaming suite demo",
    long_about = "Plays a small playlist built from a local file, a list of pre-split\n\
                  segments and a simulated remote source. The playlist is rendered once\n\
                  through a watermark and subtitle plugin chain on the software renderer,\n\
                  then again on the hardware renderer without plugins.\n\
                  \n\
                  Every flag is optional; without flags the built-in demo is played."
)]
pub struct CliArgs {
    /// JSON file overriding the demo configuration
    #[arg(
        short,
        long,
        help = "Path to a JSON file overriding the built-in demo configuration"
    )]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, help = "Enable detailed debug logging")]
    pub verbose: bool,
}

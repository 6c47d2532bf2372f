//! Vitrine CLI application entry point
//!
//! # Usage
//!
//! ```bash
//! # List every product (default command)
//! vitrine --catalog products.json
//!
//! # Red or blue, size M, under ₹2000, cheapest first
//! vitrine products -c Red -c Blue -s M --max 2000 --sort price-low-high
//!
//! # Pick price brackets by label
//! vitrine products -b "₹500 - ₹999" -b "₹1000 - ₹1999"
//!
//! # See what can be filtered on
//! vitrine options
//!
//! # Brackets and price range of one collection
//! vitrine options --category bottoms
//! vitrine products --new-arrivals --sort newest
//!
//! # Drag the max handle on a 300px track and release at x=120
//! vitrine slide --handle max --width 300 250 180 120
//!
//! # Save and reuse a selection
//! vitrine preset save budget --max 999
//! vitrine products --preset budget
//!
//! # Remember the catalog location
//! vitrine config set catalog=/srv/shop/products.json
//! ```
//!
//! Set `RUST_LOG=debug` to see engine and storage diagnostics.

use std::process::ExitCode;
use vitrine::{
    VitrineError,
    cli::{Cli, Commands},
    commands::{self, Context},
    config::VitrineConfig,
    output::{OutputWriter, StdoutWriter},
};

fn run(cli: Cli, output: &dyn OutputWriter) -> Result<(), VitrineError> {
    let config = VitrineConfig::load()?;
    let command = cli.get_command();
    let ctx = Context::new(config, cli.quiet, cli.catalog);

    match &command {
        Commands::Products(args) => commands::products(args, &ctx, output),
        Commands::Options(args) => commands::options(args, &ctx, output),
        Commands::Slide(args) => commands::slide(args, &ctx, output),
        Commands::Preset { command } => commands::preset(command, &ctx, output),
        Commands::Config { command } => {
            commands::config::execute(command, ctx.config.clone(), ctx.quiet, output)
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse_args();
    let output = StdoutWriter::new();

    match run(cli, &output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("command failed: {e:?}");
            output.error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

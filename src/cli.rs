// src/cli.rs
mod args;
mod parsers;
mod value_enum;

use clap::Parser;
use user_stats_usecase::RowPolicy;

use crate::{config::Config, logging};

pub use args::Args;
pub use value_enum::OutputFormat;

/// Parse CLI arguments and materialise a [`Config`].
pub fn load_config() -> anyhow::Result<Config> {
    let args = Args::parse();
    build_config(args)
}

/// Convert parsed CLI arguments into a configuration.
pub fn build_config(args: Args) -> anyhow::Result<Config> {
    if let Some(output) = &args.output
        && output == &args.path
    {
        anyhow::bail!("--output must not overwrite the input file {}", args.path.display());
    }

    let policy = if args.skip_invalid { RowPolicy::Skip } else { RowPolicy::Strict };

    Ok(Config {
        input: args.path,
        format: args.format.into(),
        delimiter: args.delimiter,
        policy,
        output: args.output,
        log_level: logging::level_from_verbosity(args.verbose, args.quiet),
    })
}

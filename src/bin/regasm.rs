use anyhow::Context;
use log::LevelFilter;
use regasm::{config::EngineConfig, interpreter::interpret_file};
use std::{env, path::PathBuf};
use structopt::StructOpt;

#[derive(StructOpt, Debug)]
#[structopt(name = "regasm")]
struct Opts {
    #[structopt(name = "program.asm", parse(from_os_str))]
    program: PathBuf,

    /// Abort after executing this many instructions
    #[structopt(short, long)]
    step_limit: Option<u64>,

    /// Never abort, even if the program does not halt
    #[structopt(long, conflicts_with = "step-limit")]
    unlimited: bool,

    #[structopt(short, long)]
    verbose: bool,
}

impl Opts {
    fn engine_config(&self) -> EngineConfig {
        if self.unlimited {
            EngineConfig::unlimited()
        } else {
            self.step_limit
                .map(EngineConfig::with_step_limit)
                .unwrap_or_default()
        }
    }
}

fn main() -> anyhow::Result<()> {
    let opts = Opts::from_args();

    let default_level = if opts.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    let mut logger = env_logger::Builder::new();
    logger.filter_level(default_level);
    if let Ok(filters) = env::var("RUST_LOG") {
        logger.parse_filters(&filters);
    }
    logger.init();

    let registers = interpret_file(&opts.program, opts.engine_config())
        .with_context(|| format!("failed to run {}", opts.program.display()))?;

    println!("{}", registers);
    Ok(())
}

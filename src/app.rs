// src/app.rs
use anyhow::Context as _;
use line_tally_domain::{ConfigDraft, CountingConfig};
use line_tally_infra::{BufferedLineSource, ExtensionFileEnumerator, LogProgress, load_config};
use line_tally_ports::filesystem::FileEnumerationPlan;
use line_tally_shared_kernel::Result;
use line_tally_usecase::CountLines;
use log::LevelFilter;

use crate::{cli::Args, presentation};

const LOG_ENV: &str = "LINE_TALLY_LOG";

pub fn run(args: &Args) -> anyhow::Result<()> {
    init_logging(args.verbose, args.quiet);

    let config = build_config(args)?;
    log::debug!(
        "directories={:?} extensions={:?} recursive={}",
        config.directories,
        config.extensions,
        config.recursive
    );
    if config.recursive {
        log::info!("Sub-directories will automatically be added to the search");
    }

    let plan = FileEnumerationPlan {
        roots: config.directories.clone(),
        extensions: config.extensions.clone(),
        recursive: config.recursive,
        include_hidden: args.hidden,
        follow_links: args.follow,
        respect_ignore_files: args.gitignore,
    };

    let enumerator = ExtensionFileEnumerator::new();
    let source = BufferedLineSource::new();
    let progress = LogProgress;
    let use_case = CountLines::new(&enumerator, &source).with_progress(&progress);

    let output = run_on_pool(args.jobs(), || use_case.run(&plan, &config.markers))?;
    presentation::print_report(&output, args.format)?;
    Ok(())
}

/// Loads the configuration file and applies command-line overrides.
///
/// A missing configuration file is tolerated when `--dir` and `--ext` supply
/// everything a run needs; markers then default to none.
pub fn build_config(args: &Args) -> anyhow::Result<CountingConfig> {
    let mut draft = if !args.config.exists() && !args.dirs.is_empty() && !args.ext.is_empty() {
        log::debug!("{} not found, using command-line settings only", args.config.display());
        ConfigDraft::default()
    } else {
        load_config(&args.config)?
    };

    if !args.dirs.is_empty() {
        draft.directories = args.dirs.clone();
    }
    if !args.ext.is_empty() {
        draft.extensions = args.ext.clone();
    }
    draft.recursive |= args.recursive;

    draft.validate().with_context(|| format!("invalid configuration in {}", args.config.display()))
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        }
    };

    // A logger may already be installed when running inside tests.
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_env(env_logger::Env::new().filter(LOG_ENV))
        .format_timestamp(None)
        .try_init();
}

#[cfg(feature = "parallel")]
fn run_on_pool<T, F>(jobs: usize, f: F) -> Result<T>
where
    T: Send,
    F: FnOnce() -> Result<T> + Send,
{
    use line_tally_shared_kernel::ApplicationError;

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(jobs)
        .build()
        .map_err(|e| ApplicationError::ThreadPoolCreation { details: e.to_string() })?;
    pool.install(f)
}

#[cfg(not(feature = "parallel"))]
fn run_on_pool<T, F>(_jobs: usize, f: F) -> Result<T>
where
    F: FnOnce() -> Result<T>,
{
    f()
}

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use sortlab::benchmark::{run_session, RatingColumn, TrackingAllocator};
use sortlab::config::{BenchmarkConfig, Config};
use sortlab::{ContainerKind, SortAlgorithm, ValueRange};
use std::path::PathBuf;

#[global_allocator]
static GLOBAL: TrackingAllocator = TrackingAllocator::new();

/// sortlab: counting sort and radix sort across array-backed and linked containers.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Log at debug level (RUST_LOG takes precedence)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the benchmark and write its reports
    Run(RunArgs),
    /// Sort a list of integers
    Sort(SortArgs),
    /// Write a configuration file
    Config(ConfigArgs),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Preset {
    Balanced,
    Performance,
    Memory,
    Realtime,
}

impl Preset {
    fn config(self) -> BenchmarkConfig {
        match self {
            Self::Balanced => BenchmarkConfig::balanced_preset(),
            Self::Performance => BenchmarkConfig::performance_preset(),
            Self::Memory => BenchmarkConfig::memory_preset(),
            Self::Realtime => BenchmarkConfig::realtime_preset(),
        }
    }
}

#[derive(Args, Debug)]
struct RunArgs {
    /// JSON configuration file; SORTLAB_* environment variables otherwise
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Start from a preset instead of the environment
    #[arg(long, value_enum, conflicts_with = "config")]
    preset: Option<Preset>,

    /// Ratings CSV
    #[arg(long, short)]
    dataset: Option<PathBuf>,

    /// Column to sort
    #[arg(long)]
    column: Option<RatingColumn>,

    /// Dataset sizes
    #[arg(long, value_delimiter = ',')]
    sizes: Option<Vec<usize>>,

    /// Executions per test
    #[arg(long, short = 'n')]
    executions: Option<usize>,

    /// Algorithms to run
    #[arg(long, value_delimiter = ',')]
    algorithms: Option<Vec<SortAlgorithm>>,

    /// Containers to run
    #[arg(long, value_delimiter = ',')]
    containers: Option<Vec<ContainerKind>>,

    /// Directory for the reports
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Skip the JSON export
    #[arg(long)]
    no_json: bool,
}

impl RunArgs {
    fn resolve(&self) -> Result<BenchmarkConfig> {
        let mut config = match (&self.config, self.preset) {
            (Some(path), _) => BenchmarkConfig::load_from_file(path)
                .with_context(|| format!("failed to load {}", path.display()))?,
            (None, Some(preset)) => preset.config(),
            (None, None) => BenchmarkConfig::from_env().context("invalid SORTLAB_* environment")?,
        };

        if let Some(dataset) = &self.dataset {
            config.dataset_path = Some(dataset.clone());
        }
        if let Some(column) = self.column {
            config.column = column;
        }
        if let Some(sizes) = &self.sizes {
            config.sizes = sizes.clone();
        }
        if let Some(executions) = self.executions {
            config.executions = executions;
        }
        if let Some(algorithms) = &self.algorithms {
            config.algorithms = algorithms.clone();
        }
        if let Some(containers) = &self.containers {
            config.containers = containers.clone();
        }
        if let Some(log_dir) = &self.log_dir {
            config.log_dir = log_dir.clone();
        }
        if self.no_json {
            config.write_json = false;
        }

        config.validate()?;
        Ok(config)
    }
}

#[derive(Args, Debug)]
struct SortArgs {
    /// Values to sort, comma or space separated
    #[arg(required = true, value_delimiter = ',', allow_negative_numbers = true)]
    values: Vec<i64>,

    /// Algorithm to use
    #[arg(long, short, default_value = "radix")]
    algorithm: SortAlgorithm,

    /// Keep only values in MIN..=MAX (counting sort)
    #[arg(long, num_args = 2, value_names = ["MIN", "MAX"], allow_negative_numbers = true)]
    range: Option<Vec<i64>>,
}

impl SortArgs {
    fn range(&self) -> Result<Option<ValueRange>> {
        match self.range.as_deref() {
            Some([min, max]) => Ok(Some(ValueRange::new(*min, *max)?)),
            _ => Ok(None),
        }
    }
}

#[derive(Args, Debug)]
struct ConfigArgs {
    /// Where to write the file
    #[arg(default_value = "sortlab.json")]
    output: PathBuf,

    /// Preset to write
    #[arg(long, value_enum, default_value = "balanced")]
    preset: Preset,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp_millis()
        .init();
}

fn run(args: &RunArgs) -> Result<()> {
    let config = args.resolve()?;
    let report = run_session(&config).context("benchmark failed")?;
    let paths = report
        .save(&config.log_dir, config.write_json)
        .with_context(|| format!("failed to write reports to {}", config.log_dir.display()))?;

    println!("Results saved to {}", paths.log.display());
    if let Some(json) = paths.json {
        println!("JSON export saved to {}", json.display());
    }
    Ok(())
}

fn sort(args: &SortArgs) -> Result<()> {
    let range = args.range()?;
    let mut sorter = args.algorithm.build(range, sortlab::algorithms::DEFAULT_MAX_TABLE_LEN);
    let sorted = sorter.sort(&args.values)?;

    let rendered: Vec<String> = sorted.iter().map(i64::to_string).collect();
    println!("{}", rendered.join(","));

    let stats = sorter.stats();
    log::debug!(
        "{}: {} items, {} passes, {} us ({:.0} items/s)",
        sorter.name(),
        stats.items_processed,
        stats.passes,
        stats.processing_time_us,
        stats.items_per_second()
    );
    Ok(())
}

fn write_config(args: &ConfigArgs) -> Result<()> {
    args.preset
        .config()
        .save_to_file(&args.output)
        .with_context(|| format!("failed to write {}", args.output.display()))?;
    println!("Wrote {}", args.output.display());
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    sortlab::init();

    match &cli.command {
        Command::Run(args) => run(args),
        Command::Sort(args) => sort(args),
        Command::Config(args) => write_config(args),
    }
}

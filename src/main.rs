use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{ErrorLevel, Verbosity};
use miette::{IntoDiagnostic, Result};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use stream_pulse::{
    json_to_text, json_to_yaml, yaml, DataProcessor, DecodeError, PulseError, WordFrequencyCounter,
};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about,
    long_about = None,
    propagate_version = true,
    disable_help_subcommand = true,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    verbose: Verbosity<ErrorLevel>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Flatten a JSON file into `path: value` lines
    Text { file: PathBuf },

    /// Convert a JSON file to YAML
    Yaml { file: PathBuf },

    /// Count word frequencies in text files, or stdin when no file is given
    Count(CountOptions),

    /// Time both JSON conversions on a file
    Bench { file: PathBuf },
}

#[derive(Args, Debug)]
struct CountOptions {
    /// Input files; each line is fed to the counter as one chunk
    files: Vec<PathBuf>,

    /// Worker threads (defaults to the number of CPUs)
    #[arg(short, long)]
    jobs: Option<usize>,

    /// Only report the N most frequent words
    #[arg(short, long)]
    top: Option<usize>,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
    Yaml,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.verbose.log_level_filter())
        .format_timestamp(None)
        .init();

    let stdout = std::io::stdout();
    run(&cli, &mut stdout.lock())
}

fn run(cli: &Cli, out: &mut dyn Write) -> Result<()> {
    match &cli.command {
        Commands::Text { file } => {
            let text = json_to_text(&read_input(file)?)?;
            out.write_all(text.as_bytes()).into_diagnostic()
        }
        Commands::Yaml { file } => {
            let yaml = json_to_yaml(&read_input(file)?)?;
            out.write_all(yaml.as_bytes()).into_diagnostic()
        }
        Commands::Count(options) => count(options, out),
        Commands::Bench { file } => bench(file, out),
    }
}

fn read_input(path: &Path) -> Result<Vec<u8>, PulseError> {
    std::fs::read(path).map_err(|source| PulseError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn read_stdin() -> Result<Vec<u8>, PulseError> {
    let mut buffer = Vec::new();
    std::io::stdin()
        .read_to_end(&mut buffer)
        .map_err(|source| PulseError::Io {
            path: PathBuf::from("<stdin>"),
            source,
        })?;
    Ok(buffer)
}

fn count(options: &CountOptions, out: &mut dyn Write) -> Result<()> {
    let inputs = if options.files.is_empty() {
        vec![read_stdin()?]
    } else {
        options
            .files
            .iter()
            .map(|file| read_input(file))
            .collect::<Result<Vec<_>, _>>()?
    };

    // Decode everything before counting so a bad file leaves no partial counts.
    let texts = inputs
        .iter()
        .map(|bytes| std::str::from_utf8(bytes).map_err(DecodeError::from))
        .collect::<Result<Vec<_>, _>>()
        .map_err(PulseError::from)?;

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(options.jobs.unwrap_or(0))
        .build()
        .into_diagnostic()?;

    let counter = WordFrequencyCounter::new();
    pool.install(|| {
        texts
            .par_iter()
            .flat_map(|&text| text.par_lines())
            .for_each(|line| counter.process(line));
    });
    log::info!(
        "counted {} words ({} distinct) with {} workers",
        counter.total_words(),
        counter.unique_words(),
        pool.current_num_threads()
    );

    let entries = counter.top(options.top.unwrap_or(usize::MAX));
    match options.format {
        OutputFormat::Text => {
            for (word, n) in &entries {
                writeln!(out, "{word}: {n}").into_diagnostic()?;
            }
        }
        OutputFormat::Json => {
            let map: BTreeMap<String, u64> = entries.into_iter().collect();
            let json = serde_json::to_string_pretty(&map).into_diagnostic()?;
            writeln!(out, "{json}").into_diagnostic()?;
        }
        OutputFormat::Yaml => {
            let map: serde_json::Map<String, serde_json::Value> = entries
                .into_iter()
                .map(|(word, n)| (word, n.into()))
                .collect();
            let text = yaml::to_string(&serde_json::Value::Object(map)).map_err(PulseError::from)?;
            out.write_all(text.as_bytes()).into_diagnostic()?;
        }
    }
    Ok(())
}

fn bench(file: &Path, out: &mut dyn Write) -> Result<()> {
    let data = read_input(file)?;

    let start = Instant::now();
    json_to_text(&data)?;
    writeln!(out, "JSONToText runtime: {}", format_duration(start.elapsed())).into_diagnostic()?;

    let start = Instant::now();
    json_to_yaml(&data)?;
    writeln!(out, "JSONToYAML runtime: {}", format_duration(start.elapsed())).into_diagnostic()?;

    Ok(())
}

/// Sub-millisecond durations are shown as whole microseconds.
fn format_duration(d: Duration) -> String {
    if d < Duration::from_millis(1) {
        format!("{}µs", d.as_micros())
    } else {
        format!("{d:?}")
    }
}

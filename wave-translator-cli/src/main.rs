//! Wave Translator CLI Application
//!
//! Command-line front end for the wave-translator library. It adds:
//! - One-shot translation of values given as arguments
//! - Batch translation jobs described in a TOML file
//! - Text and JSON reports

use anyhow::{bail, Result};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};
use wave_translator::{DispatchConfig, Dispatcher, TranslatorRegistry};

mod batch;
mod config;
mod report;

use config::OutputFormat;

/// Wave Translator - Turn raw signal values into display strings
#[derive(Parser, Debug)]
#[command(name = "wave-translator")]
#[command(about = "Translate raw waveform signal values for display", long_about = None)]
#[command(version)]
struct Args {
    /// Raw values to translate (decimal integers or four-state strings)
    #[arg(value_name = "VALUE")]
    values: Vec<String>,

    /// Translator to use (default: preferred for the bit width)
    #[arg(short, long, value_name = "NAME")]
    translator: Option<String>,

    /// Bit width of the values
    #[arg(short, long, default_value_t = 32, value_parser = clap::value_parser!(u32).range(1..))]
    bits: u32,

    /// List available translators and exit
    #[arg(short, long)]
    list: bool,

    /// Directory of value-table files (can be repeated)
    #[arg(long, value_name = "DIR")]
    tables: Vec<PathBuf>,

    /// Register fixed-point translators with N fraction bits (can be repeated)
    #[arg(long, value_name = "N")]
    fixed_point: Vec<u32>,

    /// Path to a translation job file (job.toml)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Report format (default: text)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Output file for the report (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(args.verbose, args.quiet);

    log::info!("Wave Translator CLI v{}", env!("CARGO_PKG_VERSION"));
    log::debug!("Using translator library v{}", wave_translator::VERSION);

    if args.list {
        list_mode(&args)?;
    } else if let Some(config_path) = &args.config {
        job_mode(config_path, &args)?;
    } else if !args.values.is_empty() {
        values_mode(&args)?;
    } else {
        println!("Wave Translator - No input specified");
        println!("\nQuick Start:");
        println!("  wave-translator --bits 16 255 4096");
        println!("  wave-translator --bits 8 --translator Signed 200");
        println!("\nFor batch jobs:");
        println!("  wave-translator --config job.toml");
        println!("\nUse --list to see translators, --help for more options");
    }

    Ok(())
}

/// Dispatcher for argument-driven modes
fn dispatcher_from_args(args: &Args) -> Result<Dispatcher> {
    let config = with_arg_translators(DispatchConfig::new(), args);
    Ok(Dispatcher::new(TranslatorRegistry::with_builtins(), &config)?)
}

/// Add the `--tables` and `--fixed-point` translators to `config`
fn with_arg_translators(mut config: DispatchConfig, args: &Args) -> DispatchConfig {
    for dir in &args.tables {
        config = config.add_value_table_dir(dir.clone());
    }
    for &fraction_bits in &args.fixed_point {
        config = config.add_fixed_point(fraction_bits);
    }
    config
}

/// List mode - show translators and how they treat `--bits`
fn list_mode(args: &Args) -> Result<()> {
    let dispatcher = dispatcher_from_args(args)?;
    let registry = dispatcher.registry();
    let preferred = registry.preferred(args.bits);

    println!("Translators for {}-bit signals:", args.bits);
    for name in registry.names() {
        let mut notes = Vec::new();
        if name == registry.default_name() {
            notes.push("default");
        }
        if name == preferred {
            notes.push("preferred");
        }
        if !registry.is_valid_translator(name, args.bits) {
            notes.push("not applicable");
        }

        if notes.is_empty() {
            println!("  {}", name);
        } else {
            println!("  {} ({})", name, notes.join(", "));
        }
    }

    let stats = registry.stats();
    println!(
        "\n{} translators ({} built-in, {} user)",
        stats.num_translators, stats.num_builtin, stats.num_user
    );
    Ok(())
}

/// Values mode - translate the positional values with one translator
fn values_mode(args: &Args) -> Result<()> {
    let dispatcher = dispatcher_from_args(args)?;
    let registry = dispatcher.registry();

    let translator = match &args.translator {
        Some(name) if registry.contains(name) => name.as_str(),
        Some(name) => bail!(
            "Unknown translator '{}' (available: {})",
            name,
            registry.names().join(", ")
        ),
        None => registry.preferred(args.bits),
    };
    log::info!(
        "Translating {} values with {} ({} bits)",
        args.values.len(),
        translator,
        args.bits
    );

    let rows = batch::translate_values(&dispatcher, translator, args.bits, &args.values);
    let format = args.format.unwrap_or(OutputFormat::Text);
    emit(&rows, format, args.output.as_deref())
}

/// Job mode - translate every signal listed in a job file
fn job_mode(config_path: &Path, args: &Args) -> Result<()> {
    log::info!("Loading job from: {:?}", config_path);
    let job = config::load_config(config_path)?;
    log::debug!("Job loaded: {} signals", job.signals.len());

    let base_dir = config_path.parent().unwrap_or_else(|| Path::new("."));
    let dispatch = with_arg_translators(job.dispatch_config(base_dir), args);

    let dispatcher = Dispatcher::new(TranslatorRegistry::with_builtins(), &dispatch)?;
    let stats = dispatcher.registry().stats();
    log::info!(
        "{} translators available ({} from value tables or plugins)",
        stats.num_translators,
        stats.num_user
    );

    let rows = batch::translate_signals(&dispatcher, &job.signals);

    // Command-line settings override the job file
    let format = args
        .format
        .or(job.output.format)
        .unwrap_or(OutputFormat::Text);
    let output = args
        .output
        .clone()
        .or_else(|| job.output.file.as_ref().map(|file| base_dir.join(file)));

    emit(&rows, format, output.as_deref())
}

/// Write the report to `output`, or stdout when none is given
fn emit(rows: &[report::ReportRow], format: OutputFormat, output: Option<&Path>) -> Result<()> {
    use anyhow::Context;
    use std::io::Write;

    let mut out: Box<dyn Write> = match output {
        Some(path) => {
            log::info!("Writing report to: {:?}", path);
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {:?}", path))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(io::stdout().lock()),
    };

    report::write_report(rows, format, &mut *out)?;
    out.flush()?;
    Ok(())
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, quiet: bool) {
    use env_logger::Builder;
    use log::LevelFilter;
    use std::io::Write;

    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    Builder::new()
        .filter_level(level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

//! logical-polyfill - Rewrite logical CSS properties into physical fallbacks

use std::io::{Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use logical_polyfill::{Options, polyfill_bytes};

#[derive(Parser)]
#[command(name = "logical-polyfill")]
#[command(version, about = "Polyfill logical CSS properties", long_about = None)]
#[command(after_help = "EXAMPLES:
    logical-polyfill style.css -o out.css        Polyfill a file
    cat style.css | logical-polyfill > out.css   Polyfill stdin
    logical-polyfill --config polyfill.json a.css  Use custom options")]
struct Cli {
    /// Input stylesheet, or `-` for stdin
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Output file (defaults to stdout)
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// JSON options file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Input encoding label, overriding `@charset`
    #[arg(short, long, value_name = "LABEL")]
    encoding: Option<String>,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(cli: &Cli) {
    let level = if cli.quiet {
        log::LevelFilter::Error
    } else {
        match cli.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    };

    // RUST_LOG still wins when set.
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn run(cli: &Cli) -> logical_polyfill::Result<()> {
    let options = match &cli.config {
        Some(path) => Options::from_json_file(path)?,
        None => Options::default(),
    };

    let bytes = read_input(cli.input.as_deref())?;
    log::info!("read {} bytes", bytes.len());
    let css = polyfill_bytes(&bytes, cli.encoding.as_deref(), &options)?;

    match &cli.output {
        Some(path) => {
            std::fs::write(path, css)?;
            log::info!("wrote {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(css.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

fn read_input(path: Option<&std::path::Path>) -> std::io::Result<Vec<u8>> {
    match path {
        Some(path) if path.as_os_str() != "-" => std::fs::read(path),
        _ => {
            let mut bytes = Vec::new();
            std::io::stdin().lock().read_to_end(&mut bytes)?;
            Ok(bytes)
        }
    }
}

//! Keysig CLI
//!
//! Usage:
//!   keysig [OPTIONS] [TEXT]
//!
//! Options:
//!   -f, --format <FORMAT>  Output format: svg, png, path, keys
//!   -o, --output <FILE>    Output file
//!   -c, --config <FILE>    Render configuration (TOML format)
//!   -l, --layout <NAME>    Keyboard layout
//!   --preview              Draw the whole keyboard under the signature
//!   -h, --help             Print help

use std::fs;
use std::io::{self, IsTerminal, Read, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use thiserror::Error;
use tracing::debug;

use keysig::renderer::{self, key_center};
use keysig::{keyboard, logging, ConfigError, RenderConfig, Signature};

#[derive(Parser)]
#[command(name = "keysig")]
#[command(about = "Draw a signature by connecting the keys you type")]
struct Cli {
    /// Text to sign (reads stdin if not provided)
    text: Option<String>,

    /// Output format (svg/png use a 650x200 canvas that clips the bottom
    /// letter row and keypad; resize it with [export] in --config)
    #[arg(short, long, value_enum, default_value_t = Format::Svg)]
    format: Format,

    /// Output file (stdout for text formats; PNG defaults to <TEXT>-signature.png)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Render configuration file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Keyboard layout name
    #[arg(short, long)]
    layout: Option<String>,

    /// List available keyboard layouts
    #[arg(long)]
    list_layouts: bool,

    /// Draw the whole keyboard with highlighted keys under the signature (SVG only)
    #[arg(long)]
    preview: bool,

    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Standalone SVG document
    Svg,
    /// Supersampled PNG image
    Png,
    /// SVG path data only
    Path,
    /// Matched keys with their pixel centers
    Keys,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("{0}")]
    Config(String),

    #[error("error reading from stdin: {0}")]
    Stdin(#[source] io::Error),

    #[error("error writing '{}': {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("error writing to stdout: {0}")]
    Stdout(#[source] io::Error),
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if cli.list_layouts {
        for name in keyboard::layout_names() {
            println!("{}", name);
        }
        return;
    }

    // If no text and stdin is a terminal (interactive), show intro help
    if cli.text.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => RenderConfig::default(),
    };
    if let Some(layout) = &cli.layout {
        config.layout = layout.clone();
    }

    let text = match &cli.text {
        Some(text) => text.clone(),
        None => read_stdin()?,
    };

    let sig = keysig::signature(&text, &config).map_err(|e| CliError::Config(e.to_string()))?;
    debug!(input = %text, points = sig.path().len(), "signature ready");

    match cli.format {
        Format::Svg if cli.preview => {
            let svg = renderer::render_preview_svg(&sig, &config.grid, &config.export);
            write_text(cli.output.as_deref(), &svg)
        }
        Format::Svg => match renderer::export_svg(&sig, &config.export) {
            Some(file) => write_bytes(cli.output.as_deref(), &file.bytes),
            None => nothing_to_draw(),
        },
        Format::Png => match renderer::export_png(&sig, &config.export) {
            Some(file) => {
                let path = match &cli.output {
                    Some(path) => write_bytes(Some(path.as_path()), &file.bytes).map(|_| path.clone()),
                    None => file.save_in(Path::new(".")).map_err(|source| CliError::Write {
                        path: PathBuf::from(&file.file_name),
                        source,
                    }),
                }?;
                eprintln!("Wrote {}", path.display());
                Ok(())
            }
            None => nothing_to_draw(),
        },
        Format::Path if sig.is_empty() => nothing_to_draw(),
        Format::Path => write_text(cli.output.as_deref(), &sig.path_d()),
        Format::Keys => write_text(cli.output.as_deref(), &format_keys(&sig, &config)),
    }
}

fn load_config(path: &Path) -> Result<RenderConfig, CliError> {
    let content = fs::read_to_string(path).map_err(|e| {
        CliError::Config(format!("error reading config '{}': {}", path.display(), e))
    })?;
    let filename = path.display().to_string();
    content
        .parse()
        .map_err(|e: ConfigError| CliError::Config(e.format(&content, &filename)))
}

fn read_stdin() -> Result<String, CliError> {
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .map_err(CliError::Stdin)?;
    let trimmed = buffer.strip_suffix('\n').unwrap_or(&buffer);
    let trimmed = trimmed.strip_suffix('\r').unwrap_or(trimmed);
    Ok(trimmed.to_string())
}

/// One line per matched key: identifier, label and pixel center
fn format_keys(sig: &Signature, config: &RenderConfig) -> String {
    sig.matches()
        .iter()
        .map(|m| {
            let center = key_center(m.key, &config.grid);
            format!("{}\t{}\t{}\t{}", m.key.id, m.key.label, center.x, center.y)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn nothing_to_draw() -> Result<(), CliError> {
    eprintln!("Nothing to draw: no typed character matches a key");
    Ok(())
}

fn write_text(output: Option<&Path>, text: &str) -> Result<(), CliError> {
    match output {
        Some(_) => write_bytes(output, text.as_bytes()),
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", text).map_err(CliError::Stdout)
        }
    }
}

fn write_bytes(output: Option<&Path>, bytes: &[u8]) -> Result<(), CliError> {
    match output {
        Some(path) => fs::write(path, bytes).map_err(|source| CliError::Write {
            path: path.to_path_buf(),
            source,
        }),
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(bytes)
                .and_then(|_| stdout.write_all(b"\n"))
                .map_err(CliError::Stdout)
        }
    }
}

fn print_intro() {
    println!(
        r#"Keysig - draw a signature by connecting the keys you type

USAGE:
    keysig [OPTIONS] [TEXT]
    echo 'Ada Lovelace' | keysig

OPTIONS:
    -f, --format       svg (default), png, path or keys
    -o, --output       Output file
    -c, --config       Render configuration (TOML file)
    -l, --layout       Keyboard layout (see --list-layouts)
    --preview          Draw the keyboard under the signature
    -v, --verbose      Debug logging
    -h, --help         Print help

CANVAS:
    Exports use a 650x200 canvas (PNG at 2x). It holds the main block down
    to the home row; the bottom letter row and space bar fall below it and
    the navigation keys and keypad lie to its right. Set [export] width and
    height in a --config file, or use --preview to see the whole keyboard.

INPUT:
    Each character is matched to the first unused key with that legend,
    ignoring case. Keys without a typeable legend are written by identifier
    in brackets, e.g. [Numpad9] or [Home]. A key is used at most once, so a
    repeated letter only counts the first time.

QUICK START:
    keysig 'Ada' > ada.svg
    keysig -f png 'Ada'          writes Ada-signature.png"#
    );
}

//! graph-raster CLI entry point.

use std::fs;
use std::io::{self, Read, Write};
use std::process;

use clap::Parser;
use log::{LevelFilter, Metadata, Record, info};

use graph_raster::config::{DEFAULT_COOLING_FACTOR, DEFAULT_ITERATIONS};
use graph_raster::renderers::TextPreview;
use graph_raster::{
    Encoder, Error, RenderConfig, RowPadding, encode, parser, render_graph, seeded_rng,
};

/// Render a graph description to a black/white BMP using a force-directed layout.
#[derive(Parser, Debug)]
#[command(
    name = "graph-raster",
    version = env!("GRAPH_RASTER_VERSION"),
    about = "Render a graph description to a black/white BMP image"
)]
struct Cli {
    /// Input file (reads from stdin if not provided)
    input: Option<String>,

    /// Write the image to this file
    #[arg(short = 'o', long = "output", default_value = "graph.bmp")]
    output: String,

    /// Seed for the initial vertex placement (random if omitted)
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// Number of layout iterations
    #[arg(short = 'i', long = "iterations", default_value_t = DEFAULT_ITERATIONS)]
    iterations: usize,

    /// Temperature cooling factor applied after every iteration
    #[arg(long = "cooling", default_value_t = DEFAULT_COOLING_FACTOR)]
    cooling: f64,

    /// Pad image rows to 4 bytes so any canvas width can be encoded
    #[arg(long = "pad-rows")]
    pad_rows: bool,

    /// Print a text preview to stdout instead of writing an image
    #[arg(long = "preview")]
    preview: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Writes log records to stderr; filtering is left to `log::max_level`.
struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

fn read_input(path: Option<&str>) -> Result<String, String> {
    match path {
        Some(path) => {
            fs::read_to_string(path).map_err(|e| format!("cannot read '{}': {}", path, e))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| format!("cannot read stdin: {}", e))?;
            Ok(buf)
        }
    }
}

fn run(cli: &Cli, text: &str) -> graph_raster::Result<()> {
    let source = parser::parse(text)?;
    let mut graph = source.to_graph()?;

    let mut config = RenderConfig::new();
    config.layout.iterations = cli.iterations;
    config.layout.cooling_factor = cli.cooling;
    if cli.pad_rows {
        config.row_padding = RowPadding::Aligned;
    }

    let seed = cli.seed.unwrap_or_else(rand::random);
    info!(
        "{} vertices, {} edges, {}x{} canvas, seed {}",
        graph.vertex_count(),
        graph.edge_count(),
        source.width,
        source.height,
        seed
    );
    let mut rng = seeded_rng(seed);
    let canvas = render_graph(&mut graph, source.width, source.height, &config, &mut rng)?;

    if cli.preview {
        let mut stdout = io::stdout();
        stdout.write_all(&TextPreview.encode(&canvas))?;
        stdout.flush()?;
        return Ok(());
    }

    let bytes = encode(&canvas, &config);
    fs::write(&cli.output, &bytes).map_err(Error::SinkFailure)?;
    info!("wrote {} bytes to {}", bytes.len(), cli.output);
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let text = match read_input(cli.input.as_deref()) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run(&cli, &text) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

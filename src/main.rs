//! Frame Layout CLI
//!
//! Usage:
//!   frame-layout [OPTIONS] [FILE]
//!
//! Options:
//!   -f, --format <FORMAT>  Output format: svg, extents, placements [default: svg]
//!   -s, --scale <SCALE>    Pixels per layout unit in SVG output
//!       --no-labels        Do not draw frame names in SVG output
//!   -v, --verbose          Log solver progress to stderr
//!   -h, --help             Print help

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use frame_layout::layout::Layout;
use frame_layout::{render_svg, DocumentError, FigureLayout, LayoutDocument, SvgConfig};

#[derive(Parser)]
#[command(name = "frame-layout")]
#[command(about = "Solve relative frame placements described in a TOML layout")]
struct Cli {
    /// Input file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Svg)]
    format: Format,

    /// Pixels per layout unit in SVG output
    #[arg(short, long)]
    scale: Option<f64>,

    /// Do not draw frame names in SVG output
    #[arg(long)]
    no_labels: bool,

    /// Log solver progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// SVG preview of the figure
    Svg,
    /// Frame extents in layout units
    Extents,
    /// Figure size and normalized [left, bottom, width, height] rectangles
    Placements,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let (source, filename) = match read_input(&cli) {
        Ok(input) => input,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut layout = match LayoutDocument::from_str(&source).and_then(|doc| doc.build()) {
        Ok(layout) => layout,
        Err(e) => {
            eprint!("{}", e.format(&source, &filename));
            return ExitCode::FAILURE;
        }
    };

    let report = match layout.place_all_frames() {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    for warning in &report.warnings {
        tracing::warn!("{}", warning);
    }

    match write_output(&cli, &layout) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn read_input(cli: &Cli) -> Result<(String, String), DocumentError> {
    match &cli.input {
        Some(path) => {
            let source = fs::read_to_string(path).map_err(|source| DocumentError::Io {
                path: path.clone(),
                source,
            })?;
            Ok((source, path.display().to_string()))
        }
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|source| DocumentError::Io {
                    path: PathBuf::from("<stdin>"),
                    source,
                })?;
            Ok((buffer, "<stdin>".to_string()))
        }
    }
}

fn write_output(cli: &Cli, layout: &Layout) -> Result<String, frame_layout::PlacementError> {
    match cli.format {
        Format::Svg => {
            let mut config = SvgConfig::new().with_labels(!cli.no_labels);
            if let Some(scale) = cli.scale {
                config = config.with_scale(scale);
            }
            render_svg(layout, &config)
        }
        Format::Extents => {
            let canvas = layout.extent(layout.canvas())?;
            let mut lines = vec![format_extent("canvas", &canvas)];
            for (name, id) in layout.frames() {
                lines.push(format_extent(name, &layout.extent(id)?));
            }
            Ok(lines.join("\n"))
        }
        Format::Placements => {
            let figure = FigureLayout::from_layout(layout)?;
            let mut lines = vec![format!("figure: {} x {}", num(figure.width), num(figure.height))];
            for frame in &figure.frames {
                let [l, b, w, h] = frame.rect.to_array();
                lines.push(format!(
                    "{}: [{}, {}, {}, {}]",
                    frame.name,
                    num(l),
                    num(b),
                    num(w),
                    num(h)
                ));
            }
            Ok(lines.join("\n"))
        }
    }
}

fn format_extent(name: &str, extent: &frame_layout::layout::Extent) -> String {
    format!(
        "{}: left={} right={} bottom={} top={}",
        name,
        num(extent.left),
        num(extent.right),
        num(extent.bottom),
        num(extent.top)
    )
}

/// Six decimals, trailing zeros dropped
fn num(v: f64) -> String {
    let s = format!("{:.6}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

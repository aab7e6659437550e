mod chart;
mod classify;
mod dataset;
mod mode;
mod output;
mod view;

use std::path::Path;

use clap::Parser;

use classify::{DEFAULT_BUCKETS, DEFAULT_MIN_GAP, MAX_BUCKETS, MAX_CLASSES, MIN_CLASSES};
use mode::{RunOptions, run_classify, run_script};
use output::print_error;
use view::{DEFAULT_CHART_WIDTH, ViewSettings, parse_drag_flag};

#[derive(Parser)]
#[command(
    name = "classmap",
    version,
    about = "Choropleth classifier with histogram binning and draggable class breaks",
    after_help = "Examples:
  classmap regions.csv                                   Median age, 5 classes
  classmap regions.csv --variable deaths_per_mil -c 7    Deaths per million, 7 classes
  classmap regions.csv --drag 1:120 --drag 0:40          Drag breaks (index:position)
  classmap regions.csv --events session.txt --live       Replay an event script
  classmap regions.csv --image hist.png --map-image map.png
  classmap --no-color regions.csv                        Disable colored output"
)]
struct Args {
    /// Region dataset (CSV with id, median_age, deaths_per_mil columns)
    dataset: String,

    /// Variable to classify (median_age, deaths_per_mil)
    #[arg(short, long, default_value = "median_age", value_name = "NAME")]
    variable: String,

    /// Number of classes (4-7)
    #[arg(short, long, default_value_t = 5, value_name = "N")]
    classes: usize,

    /// Number of histogram buckets (1-1000)
    #[arg(short, long, default_value_t = DEFAULT_BUCKETS, value_name = "N")]
    buckets: usize,

    /// Histogram plotting width in screen units
    #[arg(long, default_value_t = DEFAULT_CHART_WIDTH, value_name = "W")]
    width: f64,

    /// Minimum distance between neighbouring breaks in screen units
    #[arg(long, default_value_t = DEFAULT_MIN_GAP, value_name = "G")]
    gap: f64,

    /// Drag break INDEX to screen POSITION (repeatable, applied in order)
    #[arg(long, value_name = "INDEX:POSITION", value_parser = parse_drag_flag)]
    drag: Vec<(usize, f64)>,

    /// Replay selection and drag events from a script file
    #[arg(short, long, value_name = "PATH")]
    events: Option<String>,

    /// Reclassify regions on every drag move, not only when a drag ends
    #[arg(long)]
    live: bool,

    /// Output histogram chart as PNG image
    #[arg(long, value_name = "PATH")]
    image: Option<String>,

    /// Output region class chart as PNG image
    #[arg(long, value_name = "PATH")]
    map_image: Option<String>,

    /// Suppress explanations (show data only)
    #[arg(short, long)]
    quiet: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

/// Exit with an error if `path` points into a missing directory
fn validate_output_path(path: &str) {
    if let Some(parent) = Path::new(path).parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        print_error(&format!("Directory does not exist: {}", parent.display()));
        std::process::exit(1);
    }
}

fn main() {
    let args = Args::parse();

    // Handle --no-color
    if args.no_color {
        colored::control::set_override(false);
    }

    // Validate class count
    if !(MIN_CLASSES..=MAX_CLASSES).contains(&args.classes) {
        print_error(&format!(
            "Class count must be between {} and {}",
            MIN_CLASSES, MAX_CLASSES
        ));
        std::process::exit(1);
    }

    if !(1..=MAX_BUCKETS).contains(&args.buckets) {
        print_error(&format!("Bucket count must be between 1 and {}", MAX_BUCKETS));
        std::process::exit(1);
    }

    if !(args.width.is_finite() && args.width > 0.0) {
        print_error("Chart width must be positive");
        std::process::exit(1);
    }

    if !(args.gap.is_finite() && args.gap > 0.0) {
        print_error("Gap must be positive");
        std::process::exit(1);
    }

    // Validate option combinations
    if args.events.is_some() && !args.drag.is_empty() {
        print_error("--drag cannot be used with --events");
        std::process::exit(1);
    }

    if !Path::new(&args.dataset).is_file() {
        print_error(&format!("File not found: {}", args.dataset));
        std::process::exit(1);
    }

    // Validate image output paths
    for path in [&args.image, &args.map_image].into_iter().flatten() {
        validate_output_path(path);
    }

    let options = RunOptions {
        dataset: &args.dataset,
        variable: &args.variable,
        class_count: args.classes,
        settings: ViewSettings {
            chart_width: args.width,
            min_gap: args.gap,
            bucket_count: args.buckets,
            live_reclassify: args.live,
        },
        quiet: args.quiet,
        image_path: args.image.as_deref(),
        map_image_path: args.map_image.as_deref(),
    };

    // Dispatch to appropriate mode
    if let Some(ref script) = args.events {
        run_script(&options, script);
    } else {
        run_classify(&options, &args.drag);
    }
}

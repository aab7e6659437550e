//! CLI mode implementations

mod classify;
mod script;

pub(crate) use classify::run_classify;
pub(crate) use script::run_script;

use std::path::Path;

use crate::chart;
use crate::dataset::{Observation, load_dataset};
use crate::output::{
    get_display_name, print_axis, print_breaks, print_classes, print_dataset_info, print_error,
    print_histogram, print_legend, print_regions, print_view_settings, print_warning,
};
use crate::view::{Session, Snapshot, ViewEvent, ViewSettings};

/// Options shared by every mode
pub(crate) struct RunOptions<'a> {
    pub(crate) dataset: &'a str,
    pub(crate) variable: &'a str,
    pub(crate) class_count: usize,
    pub(crate) settings: ViewSettings,
    pub(crate) quiet: bool,
    pub(crate) image_path: Option<&'a str>,
    pub(crate) map_image_path: Option<&'a str>,
}

/// Load the dataset and open a session on it, exiting on failure
fn open_session(options: &RunOptions) -> (Session, Snapshot) {
    let display_name = get_display_name(options.dataset);
    if !options.quiet {
        eprint!("Loading {}...", display_name);
    }

    let regions: Vec<Observation> =
        load_dataset(Path::new(options.dataset)).unwrap_or_else(|e| {
            if !options.quiet {
                eprintln!();
            }
            print_error(&e);
            std::process::exit(1);
        });

    if !options.quiet {
        eprintln!(" {} regions", regions.len());
    }

    let mut snapshot = Snapshot::default();
    let session = Session::new(
        regions,
        options.settings,
        options.variable,
        options.class_count,
        &mut snapshot,
    )
    .unwrap_or_else(|e| {
        print_error(&e.to_string());
        std::process::exit(1);
    });

    (session, snapshot)
}

/// Apply events in order. Rejected events are reported and skipped.
/// Returns the number of rejected events.
fn replay(session: &mut Session, snapshot: &mut Snapshot, events: &[ViewEvent]) -> usize {
    let mut rejected = 0;
    for event in events {
        if let Err(e) = session.apply(event, snapshot) {
            print_warning(&format!("'{}' ignored: {}", event, e));
            rejected += 1;
        }
    }
    rejected
}

/// Print the report for the final view and write requested charts
fn finish(session: &Session, snapshot: &Snapshot, options: &RunOptions) {
    let display_name = get_display_name(options.dataset);

    if let Some(outcome) = session.degenerate() {
        print_warning(&format!(
            "{} has no spread: {} breaks requested, {} kept",
            session.variable(),
            outcome.requested,
            outcome.kept
        ));
    }

    if !options.quiet {
        println!();
        println!("Choropleth Classification");
        print_dataset_info(
            display_name,
            session.regions(),
            session.variable(),
            session.class_count(),
        );
        print_view_settings(session.settings());
    }

    print_histogram(snapshot);
    print_axis(snapshot);
    print_breaks(snapshot);
    print_regions(snapshot, session.regions());
    print_classes(snapshot);

    if !options.quiet {
        print_legend();
    }

    // Output charts if requested
    if let Some(path) = options.image_path {
        if let Err(e) = chart::render_histogram_chart(snapshot, display_name, path) {
            print_error(&e);
        } else {
            eprintln!("Chart saved to: {}", path);
        }
    }

    if let Some(path) = options.map_image_path {
        if let Err(e) = chart::render_region_chart(snapshot, session.regions(), display_name, path)
        {
            print_error(&e);
        } else {
            eprintln!("Chart saved to: {}", path);
        }
    }
}

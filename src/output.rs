use colored::*;

use crate::classify::{format_trimmed_decimal, hex_to_rgb};
use crate::dataset::{Observation, Variable};
use crate::view::{Snapshot, ViewSettings};

/// Widest histogram bar in characters
const HISTOGRAM_BAR_WIDTH: usize = 40;

fn style_label(label: &str) -> ColoredString {
    label.bold()
}

pub(crate) fn print_error(msg: &str) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

pub(crate) fn print_warning(msg: &str) {
    eprintln!("{}: {}", "warning".yellow().bold(), msg);
}

pub(crate) fn get_display_name(path: &str) -> &str {
    std::path::Path::new(path)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(path)
}

/// Two-space block filled with `hex`
fn swatch(hex: &str) -> ColoredString {
    match hex_to_rgb(hex) {
        Some((r, g, b)) => "  ".on_truecolor(r, g, b),
        None => "??".normal(),
    }
}

pub(crate) fn print_dataset_info(
    display_name: &str,
    regions: &[Observation],
    variable: Variable,
    class_count: usize,
) {
    let valid = regions.iter().filter(|r| r.value(variable).is_some()).count();
    println!("Dataset: {}", display_name);
    println!(
        "Regions: {} ({} with {})",
        regions.len(),
        valid,
        variable.name()
    );
    println!("Variable: {}, Classes: {}", variable.label(), class_count);
}

pub(crate) fn print_view_settings(settings: &ViewSettings) {
    println!(
        "Buckets: {}, Chart width: {}, Min gap: {}, Live: {}",
        settings.bucket_count,
        format_trimmed_decimal(settings.chart_width, 1),
        format_trimmed_decimal(settings.min_gap, 1),
        if settings.live_reclassify { "on" } else { "off" }
    );
    println!();
}

pub(crate) fn print_histogram(snapshot: &Snapshot) {
    println!("[Histogram]");
    let max_len = snapshot.buckets.iter().map(|b| b.len()).max().unwrap_or(0);
    for bucket in &snapshot.buckets {
        let range = format!(
            "{:>8} - {:<8}",
            format_trimmed_decimal(bucket.x0, 1),
            format_trimmed_decimal(bucket.x1, 1)
        );
        let width = if max_len > 0 {
            (bucket.len() * HISTOGRAM_BAR_WIDTH).div_ceil(max_len)
        } else {
            0
        };
        println!(
            "{} {:<bar$} {:>4}",
            range,
            "#".repeat(width),
            bucket.len(),
            bar = HISTOGRAM_BAR_WIDTH
        );
    }
    println!();
}

pub(crate) fn print_axis(snapshot: &Snapshot) {
    println!("[Axis]");
    let labels: Vec<&str> = snapshot.ticks.iter().map(|t| t.label.as_str()).collect();
    println!("{}", labels.join("  "));
    println!();
}

pub(crate) fn print_breaks(snapshot: &Snapshot) {
    println!("[Breaks]");
    println!("{:>3} {:>10} {:>10}", "#", "value", "position");
    for (i, bp) in snapshot.breaks.iter().enumerate() {
        println!(
            "{:>3} {:>10} {:>10.1}",
            i,
            format_trimmed_decimal(bp.value, 1),
            bp.position
        );
    }
    println!();
}

pub(crate) fn print_regions(snapshot: &Snapshot, regions: &[Observation]) {
    let Some(variable) = snapshot.variable else {
        return;
    };
    println!("[Regions]");
    let id_width = regions.iter().map(|r| r.id.len()).max().unwrap_or(0).max(6);
    for (idx, region) in regions.iter().enumerate() {
        match (region.value(variable), snapshot.colors.get(idx)) {
            (Some(value), Some(class)) => println!(
                "{:<id_width$} {:>10} {:>3} {} {}",
                region.id,
                format_trimmed_decimal(value, 1),
                class.class_index + 1,
                swatch(class.color),
                class.color,
            ),
            _ => println!("{:<id_width$} {:>10} {:>3}", region.id, "-", "-"),
        }
    }
    println!();
}

pub(crate) fn print_classes(snapshot: &Snapshot) {
    println!("[Classes]");
    let labels = snapshot.class_labels();
    let sizes = snapshot.colors.class_sizes(labels.len());
    for (i, ((label, color), size)) in labels
        .iter()
        .zip(snapshot.colors.palette())
        .zip(sizes)
        .enumerate()
    {
        println!(
            "{} {} {:<20} {:>4}",
            style_label(&format!("{:>3}", i + 1)),
            swatch(color),
            label,
            size
        );
    }
    println!();
}

pub(crate) fn print_legend() {
    println!("Histogram: region count per equal-width bucket of the rounded value range");
    println!("Breaks: class boundaries (data value and chart position, 0 = left edge)");
    println!("Regions: class number (1 = lowest) and fill color for each region");
    println!("Classes: value range and region count per class");
}

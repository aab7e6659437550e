//! Horizontal bar chart of region values colored by class

use charming::{
    Chart, ImageRenderer,
    component::{Axis, Grid, Legend, Title},
    element::{AxisLabel, AxisType, Color, ItemStyle, LineStyle, SplitLine, TextStyle},
    renderer::ImageFormat,
    series::Bar,
};

use super::colors::{COLOR_BACKGROUND, COLOR_GRID, COLOR_TEXT};
use super::{CHART_WIDTH, build_title, round1};
use crate::dataset::Observation;
use crate::view::Snapshot;

/// Pixel height per region row
const ROW_HEIGHT: u32 = 48;
/// Minimum chart height
const MIN_REGION_CHART_HEIGHT: u32 = 800;

/// Render one bar per classified region, filled with its class color.
/// Regions without a value are listed with an empty bar.
pub(crate) fn render_region_chart(
    snapshot: &Snapshot,
    regions: &[Observation],
    subtitle: &str,
    output_path: &str,
) -> Result<(), String> {
    let Some(variable) = snapshot.variable else {
        return Err("No data to render".to_string());
    };
    if regions.is_empty() {
        return Err("No data to render".to_string());
    }

    let labels = snapshot.class_labels();
    let palette = snapshot.colors.palette();
    let title = build_title(variable.label(), palette.len());

    // Category axes list from the bottom up, so reverse to read top-down
    let region_ids: Vec<String> = regions.iter().rev().map(|r| r.id.clone()).collect();

    let mut chart = Chart::new()
        .background_color(Color::Value(COLOR_BACKGROUND.to_string()))
        .title(
            Title::new()
                .text(title)
                .subtext(subtitle)
                .left("center")
                .top("2%")
                .text_style(TextStyle::new().color(COLOR_TEXT).font_size(36))
                .subtext_style(TextStyle::new().color(COLOR_TEXT).font_size(24)),
        )
        .legend(
            Legend::new()
                .data(labels.clone())
                .bottom("2%")
                .item_gap(32)
                .text_style(TextStyle::new().color(COLOR_TEXT).font_size(20)),
        )
        .grid(
            Grid::new()
                .left("3%")
                .right("5%")
                .bottom("8%")
                .top("10%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Value)
                .name(variable.label())
                .name_text_style(TextStyle::new().color(COLOR_TEXT).font_size(24))
                .axis_label(AxisLabel::new().color(COLOR_TEXT).font_size(20))
                .split_line(
                    SplitLine::new().line_style(LineStyle::new().width(0.5).color(COLOR_GRID)),
                ),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Category)
                .data(region_ids)
                .axis_label(AxisLabel::new().color(COLOR_TEXT).font_size(20)),
        );

    // Each region has a non-zero value in exactly one class series, so
    // stacking leaves one bar per row in its class color
    for (class_index, (label, color)) in labels.iter().zip(palette).enumerate() {
        let bar_data: Vec<f64> = regions
            .iter()
            .enumerate()
            .rev()
            .map(|(idx, region)| {
                match (region.value(variable), snapshot.colors.get(idx)) {
                    (Some(value), Some(class)) if class.class_index == class_index => {
                        round1(value)
                    }
                    _ => 0.0,
                }
            })
            .collect();

        chart = chart.series(
            Bar::new()
                .name(label)
                .data(bar_data)
                .stack("total")
                .item_style(ItemStyle::new().color(*color)),
        );
    }

    let height = (ROW_HEIGHT * regions.len() as u32).max(MIN_REGION_CHART_HEIGHT);

    // Render to PNG
    let mut renderer = ImageRenderer::new(CHART_WIDTH, height);
    renderer
        .save_format(ImageFormat::Png, &chart, output_path)
        .map_err(|e| format!("Failed to save chart: {}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unrendered_snapshot_is_rejected() {
        let regions = vec![Observation::new("a", Some(1.0), Some(2.0))];
        let err = render_region_chart(&Snapshot::default(), &regions, "", "unused.png");
        assert!(err.is_err());
    }
}

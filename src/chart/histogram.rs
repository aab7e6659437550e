//! Histogram chart with class break lines

use charming::{
    Chart, ImageRenderer,
    component::{Axis, Grid, Legend, Title},
    element::{
        AxisLabel, AxisType, Color, ItemStyle, Label, LabelPosition, LineStyle, SplitLine,
        Symbol, TextStyle,
    },
    renderer::ImageFormat,
    series::{Bar, Line},
};

use super::colors::{COLOR_BACKGROUND, COLOR_BREAK, COLOR_GRID, COLOR_TEXT};
use super::{CHART_HEIGHT, CHART_WIDTH, build_title, round1};
use crate::classify::bar_color;
use crate::view::Snapshot;

/// Render the latest histogram and break lines to a PNG file
pub(crate) fn render_histogram_chart(
    snapshot: &Snapshot,
    subtitle: &str,
    output_path: &str,
) -> Result<(), String> {
    let (Some(variable), Some(first), Some(last)) = (
        snapshot.variable,
        snapshot.buckets.first(),
        snapshot.buckets.last(),
    ) else {
        return Err("No data to render".to_string());
    };

    let max_count = snapshot.buckets.iter().map(|b| b.len()).max().unwrap_or(0);
    // Break lines span the full y range, with headroom for bar labels
    let y_max = (max_count as f64 * 1.15).ceil().max(1.0);

    let title = build_title(variable.label(), snapshot.colors.palette().len());

    let mut chart = Chart::new()
        .background_color(Color::Value(COLOR_BACKGROUND.to_string()))
        .title(
            Title::new()
                .text(title)
                .subtext(subtitle)
                .left("center")
                .top("3%")
                .text_style(TextStyle::new().color(COLOR_TEXT).font_size(36))
                .subtext_style(TextStyle::new().color(COLOR_TEXT).font_size(24)),
        )
        .legend(
            Legend::new()
                .data(vec!["Regions".to_string(), "Breaks".to_string()])
                .bottom("3%")
                .item_gap(40)
                .text_style(TextStyle::new().color(COLOR_TEXT).font_size(24)),
        )
        .grid(
            Grid::new()
                .left("3%")
                .right("3%")
                .bottom("10%")
                .top("15%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Value)
                .name(variable.label())
                .min(first.x0)
                .max(last.x1)
                .name_text_style(TextStyle::new().color(COLOR_TEXT).font_size(24))
                .axis_label(AxisLabel::new().color(COLOR_TEXT).font_size(24))
                .split_line(SplitLine::new().show(false)),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .name("regions")
                .max(y_max)
                .name_text_style(TextStyle::new().color(COLOR_TEXT).font_size(24))
                .axis_label(AxisLabel::new().color(COLOR_TEXT).font_size(24))
                .split_line(
                    SplitLine::new().line_style(LineStyle::new().width(0.5).color(COLOR_GRID)),
                ),
        );

    // Bars sit at bucket midpoints on the value axis
    let grid_width = (CHART_WIDTH as f64) * 0.94;
    let bar_width = grid_width / snapshot.buckets.len() as f64 * 0.9;
    let bar_data: Vec<Vec<f64>> = snapshot
        .buckets
        .iter()
        .map(|b| vec![round1((b.x0 + b.x1) / 2.0), b.len() as f64])
        .collect();

    chart = chart.series(
        Bar::new()
            .name("Regions")
            .data(bar_data)
            .bar_width(bar_width)
            .item_style(ItemStyle::new().color(bar_color(variable)))
            .label(
                Label::new()
                    .show(true)
                    .position(LabelPosition::Top)
                    .color(COLOR_TEXT)
                    .font_size(20)
                    .formatter("{@[1]}"),
            ),
    );

    // One line per break, all sharing the legend entry
    for bp in &snapshot.breaks {
        let value = round1(bp.value);
        chart = chart.series(
            Line::new()
                .name("Breaks")
                .data(vec![vec![value, 0.0], vec![value, y_max]])
                .symbol(Symbol::None)
                .line_style(LineStyle::new().width(3).color(COLOR_BREAK))
                .item_style(ItemStyle::new().color(COLOR_BREAK)),
        );
    }

    // Render to PNG
    let mut renderer = ImageRenderer::new(CHART_WIDTH, CHART_HEIGHT);
    renderer
        .save_format(ImageFormat::Png, &chart, output_path)
        .map_err(|e| format!("Failed to save chart: {}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_snapshot_is_rejected() {
        let err = render_histogram_chart(&Snapshot::default(), "", "unused.png").unwrap_err();
        assert_eq!(err, "No data to render");
    }
}

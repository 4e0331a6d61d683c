use eframe::egui::Ui;
use egui_plot::{
    AxisHints, Bar, BarChart, BoxElem, BoxPlot, BoxSpread, Corner, HPlacement, Legend, Line, Plot,
    PlotPoints,
};

use crate::config::plot::{PLOT_CONFIG, grade_color};
use crate::models::charts::{DistributionChart, MonthlyCountChart, PriceSeriesChart};
use crate::ui::styles::UiStyleExt;
use crate::ui::ui_text::UI_TEXT;
use crate::ui::utils::format_price;
use crate::utils::time_utils::{date_to_plot_x, format_date, format_month, plot_x_to_date};

/// Days added to a month start so its bar is centred in the month
const MID_MONTH_OFFSET_DAYS: f64 = 15.0;

/// Weekly mean price, one line per condition grade.
pub fn show_price_series(ui: &mut Ui, chart: &PriceSeriesChart) {
    if chart.is_empty() {
        ui.label_warning(UI_TEXT.empty_selection);
        return;
    }

    Plot::new("price_series_plot")
        .height(PLOT_CONFIG.wide_plot_height)
        .legend(Legend::default().position(Corner::LeftTop))
        .custom_x_axes(vec![date_x_axis(UI_TEXT.plot_date_axis)])
        .custom_y_axes(vec![price_y_axis()])
        .label_formatter(|name, point| {
            let date = plot_x_to_date(point.x).map(format_date).unwrap_or_default();
            format!("{}\n{}\n{}", name, date, format_price(point.y))
        })
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            for series in &chart.series {
                let points: PlotPoints = series
                    .points
                    .iter()
                    .map(|p| [date_to_plot_x(p.week_ending), p.mean_price])
                    .collect();
                plot_ui.line(
                    Line::new(series.label.clone(), points)
                        .color(grade_color(series.grade))
                        .width(PLOT_CONFIG.line_width),
                );
            }
        });
}

/// Listings per month, stacked by condition grade using the precomputed bottoms.
pub fn show_monthly_counts(ui: &mut Ui, chart: &MonthlyCountChart) {
    if chart.is_empty() {
        ui.label_warning(UI_TEXT.empty_selection);
        return;
    }

    Plot::new("monthly_count_plot")
        .height(PLOT_CONFIG.wide_plot_height)
        .legend(Legend::default().position(Corner::LeftTop))
        .custom_x_axes(vec![month_x_axis()])
        .custom_y_axes(vec![count_y_axis()])
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            for layer in &chart.layers {
                let bars: Vec<Bar> = chart
                    .months
                    .iter()
                    .zip(layer.counts.iter().zip(&layer.bottoms))
                    .filter(|(_, (count, _))| **count > 0)
                    .map(|(month, (count, bottom))| {
                        Bar::new(
                            date_to_plot_x(*month) + MID_MONTH_OFFSET_DAYS,
                            f64::from(*count),
                        )
                        .base_offset(f64::from(*bottom))
                        .width(PLOT_CONFIG.monthly_bar_width_days)
                        .name(format_month(*month))
                    })
                    .collect();
                plot_ui.bar_chart(
                    BarChart::new(layer.label.clone(), bars).color(grade_color(layer.grade)),
                );
            }
        });
}

/// One box per category of the chart's column. Outliers are never drawn.
pub fn show_distribution(ui: &mut Ui, chart: &DistributionChart) {
    if chart.is_empty() {
        ui.label_warning(UI_TEXT.empty_selection);
        return;
    }

    let categories: Vec<String> = chart.boxes.iter().map(|b| b.category.clone()).collect();
    let boxes: Vec<BoxElem> = chart
        .boxes
        .iter()
        .enumerate()
        .map(|(i, category_box)| {
            let stats = &category_box.stats;
            BoxElem::new(
                i as f64,
                BoxSpread::new(
                    stats.lower_whisker,
                    stats.lower_quartile,
                    stats.median,
                    stats.upper_quartile,
                    stats.upper_whisker,
                ),
            )
            .name(&category_box.category)
            .box_width(PLOT_CONFIG.box_width)
        })
        .collect();

    let plot_id = format!("distribution_plot_{:?}", chart.column);
    Plot::new(plot_id)
        .height(PLOT_CONFIG.box_plot_height)
        .custom_x_axes(vec![category_x_axis(chart.column.to_string(), categories)])
        .custom_y_axes(vec![price_y_axis()])
        .allow_scroll(false)
        .allow_drag(false)
        .show(ui, |plot_ui| {
            plot_ui.box_plot(BoxPlot::new(chart.column.to_string(), boxes));
        });

    let hidden: usize = chart.boxes.iter().map(|b| b.stats.suppressed_outliers).sum();
    if hidden > 0 {
        ui.label_subdued(format!("{} outliers not shown", hidden));
    }
}

fn date_x_axis(label: &str) -> AxisHints<'static> {
    AxisHints::new_x()
        .label(label.to_string())
        .formatter(|grid_mark, _range| {
            plot_x_to_date(grid_mark.value)
                .map(format_date)
                .unwrap_or_default()
        })
}

fn month_x_axis() -> AxisHints<'static> {
    AxisHints::new_x()
        .label(UI_TEXT.plot_month_axis)
        .formatter(|grid_mark, _range| {
            plot_x_to_date(grid_mark.value)
                .map(format_month)
                .unwrap_or_default()
        })
}

fn category_x_axis(label: String, categories: Vec<String>) -> AxisHints<'static> {
    AxisHints::new_x()
        .label(label)
        .formatter(move |grid_mark, _range| {
            let slot = grid_mark.value.round();
            if (grid_mark.value - slot).abs() > f64::EPSILON || slot < 0.0 {
                return String::new();
            }
            categories.get(slot as usize).cloned().unwrap_or_default()
        })
}

fn price_y_axis() -> AxisHints<'static> {
    AxisHints::new_y()
        .label(UI_TEXT.plot_price_axis)
        .formatter(|grid_mark, _range| format_price(grid_mark.value))
        .placement(HPlacement::Left)
}

fn count_y_axis() -> AxisHints<'static> {
    AxisHints::new_y()
        .label(UI_TEXT.plot_count_axis)
        .formatter(|grid_mark, _range| format!("{:.0}", grid_mark.value))
        .placement(HPlacement::Left)
}

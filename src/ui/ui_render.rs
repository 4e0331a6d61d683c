use eframe::egui::{CentralPanel, Color32, Context, Frame, Grid, ScrollArea, SidePanel, Ui};

use crate::config::ANALYSIS;
use crate::models::charts::{BrandSummary, VariantDashboard};
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;
use crate::ui::ui_panels::{Panel, SelectionEvent, SelectionPanel};
use crate::ui::ui_plot_view::{show_distribution, show_monthly_counts, show_price_series};
use crate::ui::utils::{format_price, section_heading, spaced_separator};

use super::app::{DashboardApp, PageView};

impl DashboardApp {
    pub(super) fn render_side_panel(&mut self, ctx: &Context) {
        let side_panel_frame = Frame::new().fill(UI_CONFIG.colors.side_panel);
        SidePanel::left("left_panel")
            .min_width(UI_CONFIG.side_panel_min_width)
            .frame(side_panel_frame)
            .show(ctx, |ui| {
                let events = SelectionPanel::new(
                    &self.brand_options,
                    &self.volume_options,
                    &self.selection.brand,
                    self.selection.volume.as_deref(),
                )
                .render(ui);

                for event in events {
                    match event {
                        SelectionEvent::Brand(brand) => self.select_brand(brand),
                        SelectionEvent::Volume(volume) => self.select_volume(volume),
                    }
                }
            });
    }

    pub(super) fn render_central_panel(&self, ctx: &Context) {
        let central_panel_frame = Frame::new().fill(UI_CONFIG.colors.central_panel);
        let page = self.page.as_ref();
        CentralPanel::default()
            .frame(central_panel_frame)
            .show(ctx, |ui| {
                ScrollArea::vertical().id_salt("central_scroll").show(ui, |ui| match page {
                    Some(PageView::Overview(summary)) => render_overview(ui, summary),
                    Some(PageView::Variant(dashboard)) => render_variant(ui, dashboard),
                    Some(PageView::NoVariant(brand)) => {
                        section_heading(ui, brand);
                        ui.label_warning(UI_TEXT.empty_selection);
                    }
                    None => {}
                });
            });
    }
}

fn render_overview(ui: &mut Ui, summary: &[BrandSummary]) {
    section_heading(ui, UI_TEXT.overview_heading);
    ui.label_subdued(UI_TEXT.overview_blurb);
    ui.add_space(10.0);

    if summary.is_empty() {
        ui.label_warning(UI_TEXT.empty_table);
        return;
    }

    Grid::new("market_summary_grid")
        .num_columns(3)
        .spacing([40.0, 6.0])
        .striped(true)
        .show(ui, |ui| {
            ui.label_subheader(UI_TEXT.overview_brand_column);
            ui.label_subheader(UI_TEXT.overview_listings_column);
            ui.label_subheader(UI_TEXT.overview_median_column);
            ui.end_row();

            for row in summary {
                ui.label(&row.brand);
                ui.label(row.listings.to_string());
                ui.label(format_price(row.median_price));
                ui.end_row();
            }
        });
}

fn render_variant(ui: &mut Ui, dashboard: &VariantDashboard) {
    section_heading(ui, format!("{} {}", dashboard.brand, dashboard.volume));
    ui.horizontal(|ui| {
        ui.metric(
            UI_TEXT.listings_label,
            &dashboard.listings.to_string(),
            Color32::LIGHT_BLUE,
        );
        ui.separator();
        ui.metric(
            UI_TEXT.window_label,
            &format!("{} days", ANALYSIS.window.trailing_days),
            Color32::LIGHT_BLUE,
        );
    });

    if dashboard.is_empty() {
        ui.add_space(10.0);
        ui.label_warning(UI_TEXT.empty_selection);
        return;
    }

    spaced_separator(ui);
    ui.label_subheader(UI_TEXT.price_heading);
    show_price_series(ui, &dashboard.price_series);

    spaced_separator(ui);
    ui.label_subheader(UI_TEXT.count_heading);
    show_monthly_counts(ui, &dashboard.monthly_counts);

    spaced_separator(ui);
    ui.label_subheader(UI_TEXT.distribution_heading);
    ui.columns(2, |columns| {
        columns[0].label_subdued(UI_TEXT.sim_lock_heading);
        show_distribution(&mut columns[0], &dashboard.sim_lock);
        columns[1].label_subdued(UI_TEXT.restriction_heading);
        show_distribution(&mut columns[1], &dashboard.network_restriction);
    });
}

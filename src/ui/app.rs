use eframe::{Frame, egui};
use serde::{Deserialize, Serialize};

use crate::analysis::BrandChoice;
use crate::domain::ListingTable;
use crate::engine::DashboardEngine;
use crate::models::charts::{BrandSummary, VariantDashboard};
use crate::ui::utils::setup_custom_visuals;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// The part of the app that survives a restart.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    #[serde(default)]
    pub brand: BrandChoice,
    #[serde(default)]
    pub volume: Option<String>,
}

/// What the central panel currently shows.
#[derive(Debug, Clone, PartialEq)]
pub(super) enum PageView {
    Overview(Vec<BrandSummary>),
    Variant(VariantDashboard),
    /// A brand is picked but it has no volume to show
    NoVariant(String),
}

pub struct DashboardApp {
    pub(super) engine: DashboardEngine<'static>,
    pub(super) selection: SelectionState,
    pub(super) brand_options: Vec<BrandChoice>,
    pub(super) volume_options: Vec<String>,
    // None until the current selection has been computed
    pub(super) page: Option<PageView>,
}

impl DashboardApp {
    pub fn new(cc: &eframe::CreationContext<'_>, table: &'static ListingTable) -> Self {
        let selection = cc
            .storage
            .and_then(|storage| eframe::get_value::<SelectionState>(storage, eframe::APP_KEY))
            .unwrap_or_default();

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_state_serde {
            log::info!("Restored selection: {:?}", selection);
        }

        Self::with_selection(DashboardEngine::new(table), selection)
    }

    /// Builds the app around an engine, repairing a selection that no longer
    /// matches the data (e.g. a brand that dropped out of the top list).
    pub fn with_selection(engine: DashboardEngine<'static>, selection: SelectionState) -> Self {
        let brand_options = engine.brand_options();
        let mut app = Self {
            engine,
            selection,
            brand_options,
            volume_options: Vec::new(),
            page: None,
        };

        if !app.brand_options.contains(&app.selection.brand) {
            log::warn!(
                "Saved brand '{}' is no longer offered, showing {}",
                app.selection.brand,
                BrandChoice::All
            );
            app.selection.brand = BrandChoice::All;
        }
        let saved_volume = app.selection.volume.take();
        app.refresh_volume_options(saved_volume);
        app
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    fn refresh_volume_options(&mut self, preferred: Option<String>) {
        self.volume_options = match self.selection.brand.brand() {
            Some(brand) => self.engine.volume_options(brand),
            None => Vec::new(),
        };
        self.selection.volume = match preferred {
            Some(volume) if self.volume_options.contains(&volume) => Some(volume),
            _ => self.volume_options.first().cloned(),
        };
        self.page = None;
    }

    pub(super) fn select_brand(&mut self, brand: BrandChoice) {
        if brand == self.selection.brand {
            return;
        }
        self.selection.brand = brand;
        self.refresh_volume_options(None);
    }

    pub(super) fn select_volume(&mut self, volume: String) {
        if self.volume_options.contains(&volume)
            && self.selection.volume.as_ref() != Some(&volume)
        {
            self.selection.volume = Some(volume);
            self.page = None;
        }
    }

    /// Recomputes the page for the current selection if it is stale.
    pub(super) fn ensure_page(&mut self) {
        if self.page.is_some() {
            return;
        }
        let page = match (self.selection.brand.brand(), self.selection.volume.as_deref()) {
            (None, _) => PageView::Overview(self.engine.market_summary()),
            (Some(brand), Some(volume)) => PageView::Variant(self.engine.dashboard(brand, volume)),
            (Some(brand), None) => PageView::NoVariant(brand.to_string()),
        };
        self.page = Some(page);
    }
}

impl eframe::App for DashboardApp {
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_state_serde {
            log::info!("Saving selection: {:?}", self.selection);
        }
        eframe::set_value(storage, eframe::APP_KEY, &self.selection);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);
        self.render_side_panel(ctx);
        self.ensure_page();
        self.render_central_panel(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ConditionGrade;
    use crate::test_support::listing;
    use crate::utils::time_utils::utc_now;

    fn recent(days_ago: i64) -> String {
        (utc_now() - chrono::Duration::days(days_ago))
            .format("%Y-%m-%d")
            .to_string()
    }

    fn engine() -> DashboardEngine<'static> {
        let table = ListingTable::new(
            "app",
            vec![
                listing(&recent(10), "iPhone 12", "64GB", ConditionGrade::A, 40_000.0),
                listing(&recent(12), "iPhone 12", "128GB", ConditionGrade::S, 52_000.0),
                listing(&recent(20), "Pixel 7", "128GB", ConditionGrade::B, 30_000.0),
            ],
        );
        DashboardEngine::new(Box::leak(Box::new(table)))
    }

    #[test]
    fn test_default_selection_shows_overview() {
        let mut app = DashboardApp::with_selection(engine(), SelectionState::default());
        assert!(app.volume_options.is_empty());
        app.ensure_page();
        match &app.page {
            Some(PageView::Overview(summary)) => assert_eq!(summary.len(), 2),
            other => panic!("expected overview, got {:?}", other),
        }
    }

    #[test]
    fn test_selecting_brand_picks_first_volume() {
        let mut app = DashboardApp::with_selection(engine(), SelectionState::default());
        app.select_brand(BrandChoice::Brand("iPhone 12".to_string()));
        assert_eq!(app.volume_options, vec!["64GB", "128GB"]);
        assert_eq!(app.selection.volume.as_deref(), Some("64GB"));

        app.select_volume("128GB".to_string());
        app.ensure_page();
        match &app.page {
            Some(PageView::Variant(dashboard)) => {
                assert_eq!(dashboard.volume, "128GB");
                assert_eq!(dashboard.listings, 1);
            }
            other => panic!("expected variant dashboard, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_volume_is_ignored() {
        let mut app = DashboardApp::with_selection(engine(), SelectionState::default());
        app.select_brand(BrandChoice::Brand("Pixel 7".to_string()));
        app.ensure_page();
        app.select_volume("1TB".to_string());
        assert_eq!(app.selection.volume.as_deref(), Some("128GB"));
        assert!(app.page.is_some(), "page should not be invalidated");
    }

    #[test]
    fn test_restored_selection_is_repaired() {
        let stale = SelectionState {
            brand: BrandChoice::Brand("Nokia 3310".to_string()),
            volume: Some("16MB".to_string()),
        };
        let app = DashboardApp::with_selection(engine(), stale);
        assert_eq!(app.selection().brand, BrandChoice::All);
        assert_eq!(app.selection().volume, None);

        let saved = SelectionState {
            brand: BrandChoice::Brand("iPhone 12".to_string()),
            volume: Some("128GB".to_string()),
        };
        let app = DashboardApp::with_selection(engine(), saved.clone());
        assert_eq!(app.selection(), &saved);
    }

    #[test]
    fn test_selection_state_serde() {
        let state = SelectionState {
            brand: BrandChoice::Brand("Pixel 7".to_string()),
            volume: Some("128GB".to_string()),
        };
        let json = serde_json::to_string(&state).unwrap();
        let back: SelectionState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);

        // Older saves without fields fall back to defaults
        let empty: SelectionState = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, SelectionState::default());
    }
}

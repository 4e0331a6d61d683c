use eframe::egui::{ComboBox, ScrollArea, Ui};

use crate::analysis::BrandChoice;
use crate::ui::config::UI_TEXT;
use crate::ui::styles::UiStyleExt;
use crate::ui::utils::{colored_subsection_heading, section_heading, spaced_separator};

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// Trait for UI panels that can be rendered
pub trait Panel {
    type Event;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event>;
}

#[derive(Debug, Clone, PartialEq)]
pub enum SelectionEvent {
    Brand(BrandChoice),
    Volume(String),
}

/// Brand radio list followed by the volume picker for the chosen brand
pub struct SelectionPanel<'a> {
    brand_options: &'a [BrandChoice],
    volume_options: &'a [String],
    selected_brand: &'a BrandChoice,
    selected_volume: Option<&'a str>,
}

impl<'a> SelectionPanel<'a> {
    pub fn new(
        brand_options: &'a [BrandChoice],
        volume_options: &'a [String],
        selected_brand: &'a BrandChoice,
        selected_volume: Option<&'a str>,
    ) -> Self {
        Self {
            brand_options,
            volume_options,
            selected_brand,
            selected_volume,
        }
    }

    fn render_brands(&self, ui: &mut Ui, events: &mut Vec<SelectionEvent>) {
        section_heading(ui, UI_TEXT.brand_heading);
        ScrollArea::vertical()
            .max_height(360.0)
            .id_salt("brand_list")
            .show(ui, |ui| {
                for option in self.brand_options {
                    let checked = option == self.selected_brand;
                    if ui.radio(checked, option.to_string()).clicked() && !checked {
                        #[cfg(debug_assertions)]
                        if DEBUG_FLAGS.print_ui_interactions {
                            log::info!("Brand selected: {}", option);
                        }
                        events.push(SelectionEvent::Brand(option.clone()));
                    }
                }
            });
    }

    fn render_volumes(&self, ui: &mut Ui, events: &mut Vec<SelectionEvent>) {
        ui.label(colored_subsection_heading(UI_TEXT.volume_heading));

        if self.volume_options.is_empty() {
            ui.label_subdued(UI_TEXT.empty_selection);
            return;
        }

        let selected_text = self.selected_volume.unwrap_or(UI_TEXT.volume_prompt);
        ComboBox::from_id_salt("volume_selector")
            .selected_text(selected_text)
            .show_ui(ui, |ui| {
                for volume in self.volume_options {
                    let checked = self.selected_volume == Some(volume.as_str());
                    if ui.selectable_label(checked, volume).clicked() && !checked {
                        #[cfg(debug_assertions)]
                        if DEBUG_FLAGS.print_ui_interactions {
                            log::info!("Volume selected: {}", volume);
                        }
                        events.push(SelectionEvent::Volume(volume.clone()));
                    }
                }
            });
    }
}

impl<'a> Panel for SelectionPanel<'a> {
    type Event = SelectionEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();
        self.render_brands(ui, &mut events);

        // Volumes only mean something once a single brand is picked
        if self.selected_brand.brand().is_some() {
            spaced_separator(ui);
            self.render_volumes(ui, &mut events);
        }
        events
    }
}

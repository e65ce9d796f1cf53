use std::ops::RangeInclusive;

use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::filter::{TOP_K_MAX, TOP_K_MIN};
use crate::data::model::Attribute;
use crate::state::AppState;
use crate::ui::markdown;

// ---------------------------------------------------------------------------
// Left side panel – filter form
// ---------------------------------------------------------------------------

/// Render the keyword box, range sliders and action buttons.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.strong("Series / model keyword");
            let keyword = ui.add(
                egui::TextEdit::singleline(&mut state.query.keyword)
                    .hint_text("e.g. Track, Panel, Downlight (substring match)"),
            );
            let submitted =
                keyword.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            ui.add_space(6.0);

            for attr in Attribute::ALL {
                let range = attr.range();
                let slider_range: RangeInclusive<f64> = range.lo..=range.hi;
                let bounds = state.query.bounds.entry(attr).or_insert(range);

                ui.strong(format!("{} ({})", attr.label(), attr.unit().trim()));
                ui.add(
                    egui::Slider::new(&mut bounds.lo, slider_range.clone())
                        .step_by(attr.step())
                        .text("min"),
                );
                ui.add(
                    egui::Slider::new(&mut bounds.hi, slider_range)
                        .step_by(attr.step())
                        .text("max"),
                );
                ui.add_space(4.0);
            }

            ui.separator();
            ui.add(
                egui::Slider::new(&mut state.query.top_k, TOP_K_MIN..=TOP_K_MAX)
                    .text("max rows"),
            );
            ui.add_space(6.0);

            ui.horizontal(|ui: &mut Ui| {
                if ui.button(RichText::new("Filter").strong()).clicked() || submitted {
                    state.apply_filter();
                }
                if ui.button("Reset").clicked() {
                    state.reset_query();
                }
            });
        });
}

// ---------------------------------------------------------------------------
// Central panel – report
// ---------------------------------------------------------------------------

/// Render the last report, or a hint before the first run.
pub fn results_panel(ui: &mut Ui, state: &AppState) {
    match &state.output {
        Some(text) => {
            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui: &mut Ui| {
                    markdown::show(ui, text);
                });
        }
        None => {
            let hint = format!(
                "{} products available. Enter a keyword and ranges, then press Filter.",
                state.record_count()
            );
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.label(hint);
            });
        }
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the title line with the startup load status.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.strong("💡 Lumen Finder");
        ui.separator();

        let status = state.load_status.to_string();
        if state.load_status.is_ok() {
            ui.label(status);
        } else {
            ui.label(RichText::new(status).color(Color32::RED));
        }
    });
}

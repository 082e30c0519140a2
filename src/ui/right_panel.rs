use eframe::egui;

use crate::model::element::ElementCategory;
use crate::ui::app::StrategyApp;

/// Extracted elements from the last run, grouped by category.
pub fn draw_right_panel(ctx: &egui::Context, app: &StrategyApp) {
    egui::SidePanel::right("right")
        .resizable(true)
        .default_width(280.0)
        .min_width(200.0)
        .show(ctx, |ui| {
            ui.heading("Extracted Elements");
            ui.separator();

            let Some(report) = app.report() else {
                ui.label("Run an analysis to see elements.");
                return;
            };

            egui::ScrollArea::vertical().show(ui, |ui| {
                for category in ElementCategory::ALL {
                    let items: Vec<_> = report.elements.iter().filter(|e| e.is(category)).collect();
                    let color = app.settings.color(category);

                    ui.collapsing(format!("{} ({})", category, items.len()), |ui| {
                        if items.is_empty() {
                            ui.label("None");
                        }
                        for el in items {
                            let text = format!("• {}", el.name());
                            ui.label(egui::RichText::new(text).color(color));
                        }
                    });
                }
            });
        });
}

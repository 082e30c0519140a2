use eframe::egui;

use crate::model::element::ElementCategory;
use crate::ui::app::StrategyApp;

pub fn draw_left_panel(ctx: &egui::Context, app: &mut StrategyApp) {
    egui::SidePanel::left("left")
        .resizable(false)
        .default_width(180.0)
        .show(ctx, |ui| {
            ui.heading("Settings");
            ui.separator();

            ui.label("UI Scale");
            ui.add(egui::Slider::new(&mut app.settings.ui_scale, 0.75..=2.0));

            ui.separator();
            ui.collapsing("Category colours", |ui| {
                for category in ElementCategory::ALL {
                    let mut color = app.settings.color(category);
                    ui.horizontal(|ui| {
                        if ui.color_edit_button_srgba(&mut color).changed() {
                            app.settings.set_color(category, color);
                        }
                        ui.label(category.as_str());
                    });
                }
            });
        });
}

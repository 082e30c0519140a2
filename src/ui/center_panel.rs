use eframe::egui;
use std::fs;

use crate::engine::protocol::EngineCommand;
use crate::model::headline::headlines_text;
use crate::model::report::{AnalysisOutcome, AnalysisReport};
use crate::ui::app::{RunView, StrategyApp};
use crate::ui::INSUFFICIENT_MESSAGE;

const WARNING_COLOR: egui::Color32 = egui::Color32::from_rgb(220, 160, 40);
const ERROR_COLOR: egui::Color32 = egui::Color32::from_rgb(220, 80, 60);

pub fn draw_center_panel(ctx: &egui::Context, app: &mut StrategyApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading("🧠 Strategic Intelligence Assistant");
        ui.add_space(6.0);

        // ---------- Input form ----------
        ui.label("Enter strategy-related input or policy goal:");
        ui.add(
            egui::TextEdit::multiline(&mut app.ui.input_text)
                .desired_rows(5)
                .desired_width(f32::INFINITY)
                .hint_text("Describe goals, resources, constraints…"),
        );

        let mut analyze_now = false;
        let mut load_file = false;

        ui.horizontal(|ui| {
            if ui
                .add_enabled(!app.ui.running, egui::Button::new("Analyze Strategy"))
                .clicked()
            {
                analyze_now = true;
            }

            if ui
                .add_enabled(!app.ui.running, egui::Button::new("Load text…"))
                .clicked()
            {
                load_file = true;
            }

            if app.ui.running {
                ui.spinner();
                ui.label("Extracting strategic elements…");
            }
        });

        if let Some(notice) = &app.ui.notice {
            ui.colored_label(WARNING_COLOR, notice.as_str());
        }

        if load_file {
            load_input_from_file(app);
        }

        if analyze_now {
            app.ui.running = true;
            app.ui.notice = None;
            let text = app.ui.input_text.clone();
            app.send_command(EngineCommand::Analyze(text));
        }

        ui.separator();

        // ---------- Results ----------
        egui::ScrollArea::vertical().show(ui, |ui| match &app.ui.last_run {
            None => {}
            Some(RunView::Failed(message)) => {
                ui.colored_label(ERROR_COLOR, message.as_str());
            }
            Some(RunView::Report(report)) => draw_report(ui, report),
        });
    });
}

fn draw_report(ui: &mut egui::Ui, report: &AnalysisReport) {
    let recs = match &report.outcome {
        AnalysisOutcome::InsufficientElements { .. } => {
            ui.colored_label(WARNING_COLOR, INSUFFICIENT_MESSAGE);
            return;
        }
        AnalysisOutcome::Ranked(recs) => recs,
    };

    ui.heading("Top Strategic Recommendations");
    for rec in recs {
        ui.add_space(4.0);
        let title = format!("{}. {}", rec.rank, rec.way);
        ui.label(egui::RichText::new(title).strong());
        ui.label(format!("- Utility Score: {:.2}", rec.utility_score));
        ui.label(format!("- Risk Score: {:.2}", rec.risk_score));
    }

    ui.add_space(8.0);
    ui.heading("📰 Related Real-Time News");
    ui.label("Relevant Headlines:");

    let news = headlines_text(&report.headlines);
    let mut view: &str = &news;
    ui.add(
        egui::TextEdit::multiline(&mut view)
            .desired_rows(8)
            .desired_width(f32::INFINITY),
    );
}

fn load_input_from_file(app: &mut StrategyApp) {
    let Some(path) = rfd::FileDialog::new()
        .add_filter("Text", &["txt", "md"])
        .pick_file()
    else {
        return;
    };

    match fs::read_to_string(&path) {
        Ok(text) => {
            app.ui.input_text = text;
            app.ui.notice = None;
        }
        Err(e) => {
            log::warn!("Could not read {}: {}", path.display(), e);
            app.ui.notice = Some(format!("Could not read {}: {}", path.display(), e));
        }
    }
}

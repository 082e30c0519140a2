use eframe::egui;
use std::io;
use std::sync::mpsc;
use std::time::Duration;

use crate::config::Config;
use crate::engine::engine::Engine;
use crate::engine::pipeline::{Pipeline, RunResult};
use crate::engine::protocol::{EngineCommand, EngineResponse};
use crate::model::report::AnalysisReport;
use crate::ui::center_panel::draw_center_panel;
use crate::ui::left_panel::draw_left_panel;
use crate::ui::right_panel::draw_right_panel;
use crate::ui::settings::UiSettings;
use crate::ui::Presenter;

/* =========================
   UI State
   ========================= */

/// What the window shows for the last finished run.
pub enum RunView {
    Report(AnalysisReport),
    Failed(String),
}

#[derive(Default)]
pub struct UiState {
    pub input_text: String,
    pub running: bool,
    pub last_run: Option<RunView>,

    /// Non-analysis problems, e.g. a file that could not be read
    pub notice: Option<String>,
}

/* =========================
   App
   ========================= */

pub struct StrategyApp {
    pub ui: UiState,
    pub settings: UiSettings,

    cmd_tx: mpsc::Sender<EngineCommand>,
    resp_rx: mpsc::Receiver<EngineResponse>,
}

impl StrategyApp {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let pipeline = Pipeline::from_config(config)?;

        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (resp_tx, resp_rx) = mpsc::channel();

        std::thread::Builder::new()
            .name("engine".into())
            .spawn(move || {
                let mut engine = Engine::new(cmd_rx, resp_tx, pipeline);
                engine.run();
            })?;

        Ok(Self {
            ui: UiState {
                input_text: config.input.clone(),
                ..Default::default()
            },
            settings: UiSettings::with_scale(config.ui.scale),
            cmd_tx,
            resp_rx,
        })
    }

    pub fn send_command(&mut self, cmd: EngineCommand) {
        if self.cmd_tx.send(cmd).is_err() {
            self.ui.running = false;
            self.ui.last_run = Some(RunView::Failed("Analysis engine stopped".into()));
        }
    }

    pub fn report(&self) -> Option<&AnalysisReport> {
        match &self.ui.last_run {
            Some(RunView::Report(report)) => Some(report),
            _ => None,
        }
    }

    fn show_run(&mut self, run: &RunResult) {
        self.ui.last_run = Some(match run {
            Ok(report) => RunView::Report(report.clone()),
            Err(e) => RunView::Failed(e.to_string()),
        });
    }

    fn drain_responses(&mut self) {
        while let Ok(resp) = self.resp_rx.try_recv() {
            match resp {
                EngineResponse::Started => {
                    self.ui.running = true;
                }
                EngineResponse::Finished(run) => {
                    self.ui.running = false;
                    self.show_run(&run);
                }
            }
        }
    }
}

impl Presenter for StrategyApp {
    fn present(&mut self, run: &RunResult) -> io::Result<()> {
        self.show_run(run);
        Ok(())
    }
}

/* =========================
   egui App
   ========================= */

impl eframe::App for StrategyApp {
    fn update(&mut self, ctx: &egui::Context, _: &mut eframe::Frame) {
        ctx.set_pixels_per_point(self.settings.ui_scale);

        self.drain_responses();

        draw_left_panel(ctx, self);
        draw_right_panel(ctx, self);
        draw_center_panel(ctx, self);

        if self.ui.running {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}

use anyhow::{anyhow, Context, Result};
use log::info;
use std::io::{self, IsTerminal, Read};
use std::process::ExitCode;

use strategy_assistant::config::{Config, Mode};
use strategy_assistant::engine::pipeline::Pipeline;
use strategy_assistant::ui::app::StrategyApp;
use strategy_assistant::ui::console::{exit_code, ConsolePresenter, EXIT_CONFIG, EXIT_OK};
use strategy_assistant::ui::Presenter;

fn setup_logging() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();
}

fn main() -> ExitCode {
    setup_logging();

    match try_main() {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(EXIT_CONFIG)
        }
    }
}

fn try_main() -> Result<u8> {
    let config = Config::load().context("Failed to load configuration")?;

    match config.mode {
        Mode::Console => run_console(&config),
        Mode::Interactive => run_interactive(&config),
    }
}

fn run_console(config: &Config) -> Result<u8> {
    info!("Running console version");

    let text = console_input(config).context("Failed to read input from stdin")?;
    let mut pipeline = Pipeline::from_config(config).context("Failed to set up pipeline")?;

    let run = pipeline.analyze(&text);
    ConsolePresenter::stdio()
        .present(&run)
        .context("Failed to write results")?;

    Ok(exit_code(&run))
}

/// Piped stdin wins over the configured default text.
fn console_input(config: &Config) -> Result<String> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Ok(config.input.clone());
    }

    let mut piped = String::new();
    stdin.lock().read_to_string(&mut piped)?;

    if piped.trim().is_empty() {
        Ok(config.input.clone())
    } else {
        Ok(piped)
    }
}

fn run_interactive(config: &Config) -> Result<u8> {
    info!("Running interactive version");

    let app = StrategyApp::new(config).context("Failed to start analysis engine")?;
    let options = eframe::NativeOptions::default();

    eframe::run_native(
        "Strategic Intelligence Assistant",
        options,
        Box::new(move |_cc| Ok(Box::new(app))),
    )
    .map_err(|e| anyhow!("UI error: {e}"))?;

    Ok(EXIT_OK)
}

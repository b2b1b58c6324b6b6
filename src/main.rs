//! Tic-Tac-Toe GUI
//!
//! Runs natively through eframe, or in the browser when built for wasm32.

use tictactoe::config::Cli;
use tictactoe::ui::TicTacToeApp;

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), eframe::Error> {
    use clap::Parser;
    use tictactoe::config::DEFAULT_LOG_FILTER;
    use tracing_subscriber::EnvFilter;

    let cli = Cli::parse();

    let filter = cli
        .log_filter
        .as_deref()
        .map(EnvFilter::new)
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([cli.width, cli.height])
            .with_min_inner_size([480.0, 360.0])
            .with_title("Tic-Tac-Toe"),
        ..Default::default()
    };

    eframe::run_native(
        "Tic-Tac-Toe",
        options,
        Box::new(move |cc| Ok(Box::new(TicTacToeApp::new(cc, &cli)))),
    )
}

/// Id of the canvas element the web build renders into
#[cfg(target_arch = "wasm32")]
const CANVAS_ID: &str = "the_canvas_id";

#[cfg(target_arch = "wasm32")]
fn main() {
    use wasm_bindgen::JsCast;

    console_error_panic_hook::set_once();

    let cli = Cli::default();

    wasm_bindgen_futures::spawn_local(async move {
        let canvas = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CANVAS_ID))
            .and_then(|e| e.dyn_into::<web_sys::HtmlCanvasElement>().ok());

        let Some(canvas) = canvas else {
            let msg = format!("canvas element #{CANVAS_ID} not found");
            web_sys::console::error_1(&msg.into());
            return;
        };

        let started = eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(move |cc| Ok(Box::new(TicTacToeApp::new(cc, &cli)))),
            )
            .await;

        if let Err(err) = started {
            web_sys::console::error_2(&"failed to start eframe:".into(), &err);
        }
    });
}

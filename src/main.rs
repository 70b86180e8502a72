mod app;
mod events;
mod ui;

use eframe::NativeOptions;
use tokio::runtime::Runtime;
use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result<()> {
    // Setup file-based logging
    let file_appender = tracing_appender::rolling::never(".", "egui-emoji-picker.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(non_blocking)
        .init();

    // Lives until the window closes; the app only holds a handle.
    let runtime = Runtime::new().expect("Failed to create Tokio runtime");
    let handle = runtime.handle().clone();

    let native_options = NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([560.0, 720.0])
            .with_title("Emoji Picker"),
        ..Default::default()
    };
    eframe::run_native(
        "egui-emoji-picker",
        native_options,
        Box::new(move |cc| Ok(Box::new(ui::app_layout::App::new(cc, handle)))),
    )
}

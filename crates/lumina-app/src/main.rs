//! Entry point for the Lumina waitlist landing page.

use dioxus::desktop::{Config, LogicalPosition, LogicalSize, WindowBuilder};

use lumina_app::components::app::App;
use lumina_app::APP_CSS;

const SHARED_CSS: &str = lumina_ui::SHARED_CSS;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("lumina_app=info,lumina_core=info,lumina_ui=info")
        .init();

    tracing::info!("Starting Lumina waitlist page");

    // Read optional window geometry from env (for tiling during demos)
    let win_x = std::env::var("LUMINA_WIN_X").ok().and_then(|v| v.parse::<f64>().ok());
    let win_y = std::env::var("LUMINA_WIN_Y").ok().and_then(|v| v.parse::<f64>().ok());
    let win_w = std::env::var("LUMINA_WIN_W").ok().and_then(|v| v.parse::<f64>().ok());
    let win_h = std::env::var("LUMINA_WIN_H").ok().and_then(|v| v.parse::<f64>().ok());

    let mut wb = WindowBuilder::new()
        .with_title("Lumina Waitlist")
        .with_maximized(false);

    if let (Some(w), Some(h)) = (win_w, win_h) {
        wb = wb.with_inner_size(LogicalSize::new(w, h));
    } else {
        wb = wb.with_inner_size(LogicalSize::new(1100.0, 800.0));
    }

    if let (Some(x), Some(y)) = (win_x, win_y) {
        wb = wb.with_position(LogicalPosition::new(x, y));
    }

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(wb)
                .with_custom_head(format!(
                    r#"
                    <link rel="preconnect" href="https://fonts.googleapis.com">
                    <link rel="preconnect" href="https://fonts.gstatic.com" crossorigin>
                    <link href="https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600;700&display=swap" rel="stylesheet">
                    <style>{}</style>
                    <style>{}</style>
                    "#,
                    SHARED_CSS, APP_CSS
                )),
        )
        .launch(App);
}

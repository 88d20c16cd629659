mod app;
mod buffer;
mod event;
mod terminal;
mod text;
mod theme;
mod toast;
mod views;

use std::fs::File;

use simplelog::{Config, LevelFilter, WriteLogger};

use app::App;

#[tokio::main]
async fn main() {
    let log_file = File::create("waitlist-tui.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    if let Err(e) = App::new().run().await {
        eprintln!("Error: {}", e);
    }
}

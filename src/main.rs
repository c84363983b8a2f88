use std::thread;
use std::time::Duration;

use dotenvy::dotenv;
use tracing::info;
use tracing_appender::rolling;

use empdash::config::Config;
use empdash::data;
use empdash::view::dashboard;
use empdash::view::state::UiState;
use empdash::view::table::AttendanceQuery;

fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let config = Config::from_env();

    // Rolling daily log
    let file_appender = rolling::daily("logs", "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_target(false)
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .pretty()
        .init();

    info!("Dashboard starting...");

    let dataset = data::load_dataset()?;

    let mut ui = UiState::new(config.theme, Duration::from_millis(config.splash_delay_ms));
    println!("Loading Dashboard...");
    thread::sleep(ui.splash_delay);
    ui.finish_loading();

    let query = AttendanceQuery {
        per_page: Some(config.items_per_page),
        ..Default::default()
    };
    print!("{}", dashboard::render(&dataset, &ui, &query, config.trend_window));

    info!(
        employee = %dataset.employee.id,
        records = dataset.attendance.len(),
        "Dashboard rendered"
    );
    Ok(())
}

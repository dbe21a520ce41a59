mod app;
mod effects;
mod logging;
mod particles;
mod persistence;
mod tickers;
mod ui;

pub use app::run_app;

//! src/main.rs
//!
//! Entrypoint delegating to `app::run()`.

mod app;
mod form;
mod motif;
mod panels;
mod ui;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    app::run()
}

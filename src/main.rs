mod app;
mod command;
mod config;
mod consts;
mod game;
mod highscores;
mod menu;
mod options;
mod resize;
mod util;
mod warning;
use crate::app::App;
use std::io::ErrorKind;
use std::process::ExitCode;

fn main() -> ExitCode {
    let terminal = ratatui::init();
    let outcome = App::new().run(terminal);
    ratatui::restore();
    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        // Losing the output pipe on the way out is not worth reporting
        Err(e) if e.kind() == ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("viper: {e}");
            ExitCode::from(2)
        }
    }
}

use crate::command::Command;
use crate::config::Config;
use crate::game::Game;
use crate::highscores::HighScores;
use crate::menu::MainMenu;
use crate::resize::ResizeNotice;
use crate::util::Globals;
use crate::warning::{Warning, WarningOutcome};
use crossterm::event::read;
use ratatui::{backend::Backend, Terminal};
use std::io;

#[derive(Clone, Debug)]
pub(crate) struct App {
    screen: Screen,
    /// Startup problems to show the user, oldest first.  While any are
    /// pending, input goes to the warning popup instead of the screen.
    warnings: Vec<Warning>,
}

impl App {
    pub(crate) fn new() -> App {
        let mut warnings = Vec::new();
        let config = Config::default_path()
            .and_then(|p| Config::load(&p, true))
            .unwrap_or_else(|e| {
                warnings.push(Warning::from(e));
                Config::default()
            });
        let options = config.load_options().unwrap_or_else(|e| {
            warnings.push(Warning::from(e));
            config.options
        });
        let scores = config.load_scores().unwrap_or_else(|e| {
            warnings.push(Warning::from(e));
            HighScores::default()
        });
        let globals = Globals {
            config,
            options,
            scores,
        };
        App {
            screen: Screen::Main(MainMenu::new(globals)),
            warnings,
        }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        loop {
            if matches!(self.screen, Screen::Quit) {
                return Ok(());
            }
            self.draw(&mut terminal)?;
            self.process_input()?;
        }
    }

    fn draw<B: Backend>(&self, terminal: &mut Terminal<B>) -> io::Result<()> {
        terminal.draw(|frame| {
            match self.screen {
                Screen::Main(ref menu) => menu.draw(frame),
                Screen::Game(ref game) => game.draw(frame),
                Screen::Resize(ref notice) => notice.draw(frame),
                Screen::Quit => (),
            }
            if let Some(warning) = self.warnings.first() {
                frame.render_widget(warning, frame.area());
            }
        })?;
        Ok(())
    }

    fn process_input(&mut self) -> io::Result<()> {
        if !self.warnings.is_empty() {
            return self.process_warning_input();
        }
        let next = match self.screen {
            Screen::Main(ref mut menu) => menu.process_input()?,
            Screen::Game(ref mut game) => game.process_input()?,
            Screen::Resize(ref notice) => notice.process_input()?,
            Screen::Quit => None,
        };
        if let Some(screen) = next {
            self.screen = screen;
        }
        Ok(())
    }

    /// Blocking input handling while a warning popup has the screen
    fn process_warning_input(&mut self) -> io::Result<()> {
        let Some(cmd) = read()?
            .as_key_press_event()
            .and_then(Command::from_key_event)
        else {
            return Ok(());
        };
        match self.warnings.first().and_then(|w| w.handle_command(cmd)) {
            Some(WarningOutcome::Dismissed) => {
                let _ = self.warnings.remove(0);
            }
            Some(WarningOutcome::Quit) => self.screen = Screen::Quit,
            None => (),
        }
        Ok(())
    }
}

#[derive(Clone, Debug)]
pub(crate) enum Screen {
    Main(MainMenu),
    Game(Game),
    Resize(ResizeNotice),
    Quit,
}

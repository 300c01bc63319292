mod nav;
mod view;

use std::fs::File;
use std::io;

use navdom::{map_event, Dom, DomError, Event, Key, Terminal};
use simplelog::{Config, LevelFilter, WriteLogger};
use thiserror::Error;

use crate::nav::NavToggle;

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Dom(#[from] DomError),
}

fn main() {
    let log_file = File::create("sidenav.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    if let Err(e) = run() {
        eprintln!("Error: {e}");
    }
}

fn run() -> Result<(), AppError> {
    let mut dom = Dom::new(view::page());
    // Bind before touching the terminal so a bad tree fails fast
    let mut nav = NavToggle::bind(&dom)?;

    let mut term = Terminal::new()?;

    loop {
        term.render(dom.root())?;

        for raw in term.poll(None)? {
            let Some(event) = map_event(&raw, term.layout(), dom.root()) else {
                continue;
            };

            match event {
                Event::Key {
                    key: Key::Char('q') | Key::Escape,
                    ..
                } => return Ok(()),
                Event::Key {
                    key: Key::Char('m'),
                    ..
                } => nav.toggle(&mut dom)?,
                Event::Click {
                    target: Some(target),
                    ..
                } if target == view::MENU_BUTTON_ID || target == view::NAV_CLOSE_ID => {
                    nav.toggle(&mut dom)?
                }
                _ => {}
            }
        }
    }
}

use std::{io::Result, time::Duration};

use crossterm::event::{self, Event};
use ratatui::{Frame, Terminal, prelude::Backend};

use crate::error::GridError;

use super::{config::Config, data::DataManager};

pub mod gameplay;

pub trait Activity {
    fn draw(&mut self, frame: &mut Frame<'_>);

    fn update(&mut self, event: Option<Event>);
}

pub struct App {
    gameplay: gameplay::GameplayActivity<Box<dyn DataManager>>,
}

impl App {
    pub fn new(
        config: &Config,
        data: Box<dyn DataManager>,
    ) -> std::result::Result<Self, GridError> {
        Ok(Self {
            gameplay: gameplay::GameplayActivity::new(config, data)?,
        })
    }

    /// Runs one frame. Returns `true` once the player asked to quit.
    pub fn update<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<bool> {
        let event = if event::poll(Duration::from_millis(20))? {
            Some(event::read()?)
        } else {
            None
        };

        self.gameplay.update(event);
        terminal.draw(|frame| self.gameplay.draw(frame))?;

        Ok(self.gameplay.exit)
    }
}

use std::time::{Duration, Instant};

use crossterm::event::{Event, KeyCode, KeyEventKind};
use log::{debug, info, warn};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Style, palette::tailwind},
    widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph},
};

use crate::{
    app::{
        anim::{Popup, lerpf, rect_scale},
        colors,
        config::{BOARD_SIZE, Config},
        data::DataManager,
    },
    engine::{
        Direction, GameSession, GameStatus, RandomTiles, Vec2, apply_move, is_move_available,
        new_game,
    },
    error::GridError,
};

use super::Activity;

pub fn key_direction(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('k') => Some(Direction::Up),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('j') => Some(Direction::Down),
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('h') => Some(Direction::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('l') => Some(Direction::Right),
        _ => None,
    }
}

pub struct GameplayActivity<D: DataManager> {
    session: GameSession,
    source: RandomTiles<ChaCha8Rng>,
    data: D,
    /// Best score last written to `data`.
    stored_best: u64,
    show_score: f32,
    popup: Option<Popup>,
    itoa_buffer: itoa::Buffer,
    last_update: Option<Instant>,

    pub exit: bool,
}

impl<D: DataManager> GameplayActivity<D> {
    pub fn new(config: &Config, mut data: D) -> Result<Self, GridError> {
        let stored_best = data.load_best_score().unwrap_or_else(|e| {
            warn!("could not read best score: {e}");
            0
        });
        let seed = config.seed.unwrap_or_else(|| rand::rng().random());
        info!("tile seed {seed}, best score {stored_best}");

        let mut source = RandomTiles::new(ChaCha8Rng::seed_from_u64(seed));
        let session = new_game(BOARD_SIZE, config.win_threshold, stored_best, &mut source)?;
        Ok(Self {
            session,
            source,
            data,
            stored_best,
            show_score: 0.0,
            popup: None,
            itoa_buffer: itoa::Buffer::new(),
            last_update: None,
            exit: false,
        })
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn data(&self) -> &D {
        &self.data
    }

    pub fn popup(&self) -> Option<&Popup> {
        self.popup.as_ref()
    }

    pub fn restart(&mut self) -> Result<(), GridError> {
        self.session = new_game(
            self.session.grid().size(),
            self.session.win_threshold(),
            self.session.best_score(),
            &mut self.source,
        )?;
        self.show_score = 0.0;
        self.popup = None;
        info!("new game");
        Ok(())
    }

    pub fn play(&mut self, direction: Direction) {
        if self.session.status() == GameStatus::Lost {
            return;
        }

        let before = self.session.status();
        let (next, result) = apply_move(&self.session, direction, &mut self.source);
        self.session = next;
        if !result.changed {
            return;
        }
        debug!(
            "{direction:?}: +{} -> {}",
            result.score_gained,
            self.session.score()
        );

        self.popup = result.spawned_tile.map(Popup::new);
        self.persist_best();

        if before != self.session.status() && self.session.status() == GameStatus::Won {
            info!(
                "reached {} with score {}",
                self.session.win_threshold(),
                self.session.score()
            );
        }
        if self.game_over() {
            info!("game over with score {}", self.session.score());
        }
    }

    /// No move is left. A won board can end up here too, its status stays `Won`.
    pub fn game_over(&self) -> bool {
        !is_move_available(self.session.grid())
    }

    fn persist_best(&mut self) {
        let score = self.session.score();
        if score <= self.stored_best {
            return;
        }
        match self.data.save_best_score(score) {
            Ok(()) => self.stored_best = score,
            Err(e) => warn!("could not save best score: {e}"),
        }
    }

    /// Advances animations by `delta`.
    pub fn tick(&mut self, delta: Duration) {
        if let Some(popup) = &mut self.popup {
            popup.elapsed += delta;
            if popup.finished() {
                self.popup = None;
            }
        }

        let target = self.session.score() as f32;
        let next = lerpf(self.show_score..=target, 0.2).round();
        self.show_score = if next == self.show_score { target } else { next };
    }

    fn gameplay_update_input(&mut self, event: Event) {
        let Event::Key(key) = event else {
            return;
        };
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.exit = true,
            KeyCode::Char('n') | KeyCode::Char('r') => {
                if let Err(e) = self.restart() {
                    warn!("could not start a new game: {e}");
                }
            }
            code => {
                if let Some(direction) = key_direction(code) {
                    self.play(direction);
                }
            }
        }
    }

    fn gen_block(itoa_buffer: &mut itoa::Buffer, value: u32, rect: Rect) -> Paragraph<'_> {
        let block_text = if value == 0 {
            " "
        } else {
            itoa_buffer.format(value)
        };
        Paragraph::new(block_text)
            .style(Style::default().fg(colors::color_setter(value)))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .padding(Padding::new(0, 0, rect.height.saturating_sub(2) / 2, 0)),
            )
            .alignment(Alignment::Center)
    }

    fn board_cells(area: Rect, size: usize) -> Vec<Vec<Rect>> {
        let constraints = vec![Constraint::Ratio(1, size as u32); size];
        Layout::vertical(constraints.clone())
            .split(area)
            .iter()
            .map(|row| Layout::horizontal(constraints.clone()).split(*row).to_vec())
            .collect()
    }

    fn gameplay_draw(&mut self, frame: &mut Frame<'_>) {
        let area = frame.area();
        let [title, div] = Layout::vertical([Constraint::Max(3), Constraint::Min(0)]).areas(area);
        let [board_area, stats_area] = Layout::horizontal([
            Constraint::Max(div.height.saturating_mul(2)),
            Constraint::Length(28),
        ])
        .flex(Flex::Center)
        .areas(div);

        let game_over = self.game_over();
        let text = match self.session.status() {
            _ if game_over => String::from("Game Over! Press N to try again"),
            GameStatus::Won => String::from("You Win! Keep going or press N"),
            _ => format!("Reach {}", self.session.win_threshold()),
        };
        let header = Paragraph::new(text)
            .style(Style::default().fg(tailwind::GREEN.c50))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded),
            )
            .alignment(Alignment::Center);
        frame.render_widget(header, title);

        let grid = self.session.grid();
        let cells = Self::board_cells(board_area, grid.size());
        for (row, rects) in cells.iter().enumerate() {
            for (col, rect) in rects.iter().enumerate() {
                let pos = Vec2 { row, col };
                let popping = self.popup.as_ref().filter(|p| p.tile.pos == pos);
                let value = match popping {
                    // drawn below, scaled
                    Some(_) => 0,
                    None => grid.get(pos).get(),
                };
                frame.render_widget(Self::gen_block(&mut self.itoa_buffer, value, *rect), *rect);
            }
        }
        if let Some(popup) = &self.popup {
            let cell = cells[popup.tile.pos.row][popup.tile.pos.col];
            let rect = rect_scale(cell, popup.scale());
            frame.render_widget(Clear, rect);
            frame.render_widget(
                Self::gen_block(&mut self.itoa_buffer, popup.tile.value, rect),
                rect,
            );
        }

        let status = match self.session.status() {
            GameStatus::Won if game_over => "won, no moves",
            GameStatus::Won => "won",
            GameStatus::Lost => "lost",
            GameStatus::Playing => "playing",
        };
        let stats_detail = Paragraph::new(format!(
            indoc::indoc! {"
                Score: {:06}
                Best:  {:06}
                Goal:  {}
                State: {}

                Controls:
                ← ↑ ↓ →  / WASD
                N  new game
                Q  quit
            "},
            self.show_score as u64,
            self.session.best_score(),
            self.session.win_threshold(),
            status,
        ))
        .style(Style::default().fg(tailwind::INDIGO.c300))
        .block(
            Block::default()
                .title("Stats")
                .title_alignment(Alignment::Left)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .padding(Padding::new(1, 1, 1, 1)),
        )
        .alignment(Alignment::Left);
        frame.render_widget(stats_detail, stats_area);
    }
}

impl<D: DataManager> Activity for GameplayActivity<D> {
    fn draw(&mut self, frame: &mut Frame<'_>) {
        self.gameplay_draw(frame);
    }

    fn update(&mut self, event: Option<Event>) {
        let now = Instant::now();
        if let Some(last_update) = self.last_update {
            self.tick(now - last_update);
        }
        self.last_update = Some(now);

        if let Some(event) = event {
            self.gameplay_update_input(event);
        }
    }
}

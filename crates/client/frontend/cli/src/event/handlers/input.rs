//! Input handling (keyboard and mouse).

use anyhow::Result;
use client_frontend_core::EventConsumer;
use crossterm::event::{self as term_event, Event as TermEvent, KeyEvent, KeyEventKind, MouseEvent};
use game_core::Point;
use tokio::time::Duration;

use super::super::EventLoop;
use crate::{
    input::{KeyAction, MouseAction, UserCommand},
    presentation::{terminal::Tui, viewport::Viewport},
    state::{AppMode, MenuChoice},
};

impl<C> EventLoop<C>
where
    C: EventConsumer,
{
    /// Drain pending terminal input. Returns true when the user quits.
    pub(in crate::event) async fn handle_input_tick(&mut self, terminal: &mut Tui) -> Result<bool> {
        while term_event::poll(Duration::from_millis(0))? {
            let quit = match term_event::read()? {
                TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                    self.handle_key_press(key, terminal).await?
                }
                TermEvent::Mouse(mouse) => self.handle_mouse(mouse, terminal).await?,
                TermEvent::Resize(_, _) => {
                    self.render(terminal)?;
                    false
                }
                _ => false,
            };
            if quit {
                return Ok(true);
            }
        }
        Ok(false)
    }

    async fn handle_key_press(&mut self, key: KeyEvent, terminal: &mut Tui) -> Result<bool> {
        match self.input.handle_key(key, &self.app_state.mode) {
            KeyAction::Quit => self.quit(terminal),
            KeyAction::ToggleSelection => {
                self.app_state.toggle_selection();
                self.render(terminal)?;
                Ok(false)
            }
            KeyAction::Confirm => match self.app_state.mode.selected() {
                Some(choice) => self.activate(choice, terminal).await,
                None => Ok(false),
            },
            KeyAction::Start => self.submit(UserCommand::Start).await,
            KeyAction::Reload => self.submit(UserCommand::Reload).await,
            KeyAction::Aim { dx, dy } => {
                let viewport = self.viewport();
                let view = self.consumer.view_model();
                let current = self
                    .app_state
                    .crosshair
                    .unwrap_or(Point::new(view.arena_width / 2.0, view.arena_height / 2.0));
                if let Some(point) = step_crosshair(&viewport, current, dx, dy) {
                    let (width, height) = (view.arena_width, view.arena_height);
                    self.app_state.aim_at(point, width, height);
                    self.render(terminal)?;
                }
                Ok(false)
            }
            KeyAction::Fire => match self.app_state.crosshair {
                Some(point) => self.submit(UserCommand::Fire(point)).await,
                None => Ok(false),
            },
            KeyAction::None => Ok(false),
        }
    }

    async fn handle_mouse(&mut self, mouse: MouseEvent, terminal: &mut Tui) -> Result<bool> {
        match self.input.handle_mouse(mouse) {
            MouseAction::Click { column, row } => {
                if self.app_state.mode.has_menu() {
                    return match self.layout.menu().hit(column, row) {
                        Some(choice) => {
                            self.app_state.select(choice);
                            self.activate(choice, terminal).await
                        }
                        None => Ok(false),
                    };
                }

                // Clicks outside the arena are not shots.
                match self.aim_at_cell(column, row) {
                    Some(point) => {
                        self.render(terminal)?;
                        self.submit(UserCommand::Fire(point)).await
                    }
                    None => Ok(false),
                }
            }
            MouseAction::Hover { column, row } => {
                if self.app_state.mode.has_menu() {
                    if let Some(choice) = self.layout.menu().hit(column, row)
                        && self.app_state.mode.selected() != Some(choice)
                    {
                        self.app_state.select(choice);
                        self.render(terminal)?;
                    }
                } else if self.aim_at_cell(column, row).is_some() {
                    self.render(terminal)?;
                }
                Ok(false)
            }
            MouseAction::None => Ok(false),
        }
    }

    async fn activate(&mut self, choice: MenuChoice, terminal: &mut Tui) -> Result<bool> {
        match choice {
            MenuChoice::Play => self.submit(UserCommand::Start).await,
            MenuChoice::Quit => self.quit(terminal),
        }
    }

    fn quit(&mut self, terminal: &mut Tui) -> Result<bool> {
        self.consumer.message_log_mut().push_text("Quitting...");
        self.render(terminal)?;
        Ok(true)
    }

    /// Queue a command for the runtime. Returns true if the runtime is gone.
    async fn submit(&mut self, command: UserCommand) -> Result<bool> {
        if self.tx_input.send(command).await.is_err() {
            tracing::error!("Input channel closed");
            return Ok(true);
        }
        Ok(false)
    }

    fn viewport(&self) -> Viewport {
        self.layout.viewport(self.consumer.view_model())
    }

    /// Moves the crosshair to a cell while playing. `None` off the arena.
    fn aim_at_cell(&mut self, column: u16, row: u16) -> Option<Point> {
        if self.app_state.mode != AppMode::Playing {
            return None;
        }
        let point = self.viewport().to_arena(column, row)?;
        let view = self.consumer.view_model();
        let (width, height) = (view.arena_width, view.arena_height);
        self.app_state.aim_at(point, width, height);
        Some(point)
    }
}

/// Point under the cell `dx`/`dy` cells away from `current`, kept inside the arena.
fn step_crosshair(viewport: &Viewport, current: Point, dx: i16, dy: i16) -> Option<Point> {
    let (col, row) = viewport.cell_of(current)?;
    let area = viewport.area;
    let col = (i32::from(col) + i32::from(dx)).clamp(i32::from(area.left()), i32::from(area.right()) - 1);
    let row = (i32::from(row) + i32::from(dy)).clamp(i32::from(area.top()), i32::from(area.bottom()) - 1);
    viewport.to_arena(u16::try_from(col).ok()?, u16::try_from(row).ok()?)
}

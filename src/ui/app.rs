//! Main application for the Tic-Tac-Toe GUI

use eframe::egui;
use egui::{
    CentralPanel, Context, CornerRadius, Frame, RichText, ScrollArea, SidePanel, TopBottomPanel,
};
use tracing::{debug, info};

use crate::config::Cli;
use crate::game::{GameError, GameState, GameStatus};

use super::board_view::BoardView;
use super::theme::*;

/// Main Tic-Tac-Toe application
pub struct TicTacToeApp {
    state: GameState,
    board_view: BoardView,
}

impl TicTacToeApp {
    /// Create the app from startup configuration
    pub fn new(_cc: &eframe::CreationContext<'_>, cli: &Cli) -> Self {
        info!(sort_order = ?cli.sort_order(), "starting tic-tac-toe");
        Self::with_state(GameState::with_sort_order(cli.sort_order()))
    }

    pub fn with_state(state: GameState) -> Self {
        Self {
            state,
            board_view: BoardView::default(),
        }
    }

    /// Rejected operations leave the game untouched and are not shown to the player
    fn ignore_rejected(result: Result<impl Sized, GameError>) {
        if let Err(err) = result {
            debug!(%err, "operation ignored");
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (N)").clicked() {
                        self.state.reset();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Previous move (←)").clicked() {
                        Self::ignore_rejected(self.state.step_back());
                        ui.close_menu();
                    }
                    if ui.button("Next move (→)").clicked() {
                        Self::ignore_rejected(self.state.step_forward());
                        ui.close_menu();
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let last = self.state.history().len() - 1;
                    ui.label(format!("Move {}/{}", self.state.current_move(), last));
                });
            });
        });
    }

    /// Render the side panel with the move list
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(220.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG).inner_margin(12.0))
            .show(ctx, |ui| {
                ui.label(RichText::new("TIC-TAC-TOE").size(20.0).strong().color(TEXT_PRIMARY));
                ui.add_space(12.0);

                self.render_status_card(ui);
                ui.add_space(10.0);

                self.render_history_card(ui);
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_status_card(&self, ui: &mut egui::Ui) {
        let status = self.state.status();
        let color = match status {
            GameStatus::Winner(_) => WIN_HIGHLIGHT,
            GameStatus::Draw => STATUS_DRAW,
            GameStatus::NextPlayer(_) => STATUS_PLAYING,
        };

        Self::card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new("STATUS").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);
            ui.label(RichText::new(status.to_string()).size(18.0).strong().color(color));
        });
    }

    /// Sort toggle and the list of history entries
    fn render_history_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(RichText::new("MOVES").size(10.0).color(TEXT_MUTED));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button(self.state.sort_order().toggle_label()).clicked() {
                        self.state.toggle_sort();
                    }
                });
            });
            ui.add_space(6.0);

            let mut jump = None;
            ScrollArea::vertical().show(ui, |ui| {
                for entry in self.state.move_list() {
                    if entry.is_current {
                        ui.label(RichText::new(entry.label).color(TEXT_PRIMARY).strong());
                    } else if ui
                        .button(RichText::new(entry.label).color(TEXT_SECONDARY))
                        .clicked()
                    {
                        jump = Some(entry.index);
                    }
                }
            });

            if let Some(index) = jump {
                Self::ignore_rejected(self.state.jump_to(index));
            }
        });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(Frame::new().fill(BOARD_BG).inner_margin(20.0))
            .show(ctx, |ui| {
                let clicked = self.board_view.show(
                    ui,
                    self.state.current_board(),
                    self.state.winning_line(),
                    self.state.next_mark(),
                    self.state.is_over(),
                );

                if let Some(pos) = clicked {
                    Self::ignore_rejected(self.state.play(pos));
                }
            });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let (back, forward, sort, new_game) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::ArrowLeft),
                i.key_pressed(egui::Key::ArrowRight),
                i.key_pressed(egui::Key::S),
                i.key_pressed(egui::Key::N),
            )
        });

        if back {
            Self::ignore_rejected(self.state.step_back());
        }
        if forward {
            Self::ignore_rejected(self.state.step_forward());
        }
        if sort {
            self.state.toggle_sort();
        }
        if new_game {
            self.state.reset();
        }
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);
    }
}

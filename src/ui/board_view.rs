//! Board rendering for the Tic-Tac-Toe GUI

use crate::rules::WinningLine;
use crate::{Board, Mark, Pos, BOARD_SIZE};
use egui::{Color32, CornerRadius, FontId, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached square size for coordinate calculations
    cell_size: f32,
    /// Area covered by the 3x3 squares (headings excluded)
    grid_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: SQUARE_MAX,
            grid_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked square if any
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        winning_line: Option<WinningLine>,
        next_mark: Mark,
        game_over: bool,
    ) -> Option<Pos> {
        let available = ui.available_size();
        let fit = (available.x.min(available.y) - HEADING_SIZE) / BOARD_SIZE as f32;
        self.cell_size = fit.clamp(24.0, SQUARE_MAX);

        let side = HEADING_SIZE + self.cell_size * BOARD_SIZE as f32;
        let (response, painter) = ui.allocate_painter(Vec2::splat(side), Sense::click());

        self.grid_rect = Rect::from_min_size(
            response.rect.min + Vec2::splat(HEADING_SIZE),
            Vec2::splat(self.cell_size * BOARD_SIZE as f32),
        );

        painter.rect_filled(response.rect, CornerRadius::same(4), BOARD_BG);

        self.draw_headings(&painter);
        self.draw_squares(&painter, board, winning_line);

        let hovered = response.hover_pos().and_then(|p| self.screen_to_board(p));

        if let Some(pos) = hovered {
            if !game_over && board.is_empty(pos) {
                self.draw_hover_preview(&painter, pos, next_mark);
            }
        }

        if response.clicked() {
            response
                .interact_pointer_pos()
                .and_then(|p| self.screen_to_board(p))
        } else {
            None
        }
    }

    /// Draw row and column numbers (1-3)
    fn draw_headings(&self, painter: &Painter) {
        let font = FontId::proportional(14.0);

        for i in 0..BOARD_SIZE {
            let label = format!("{}", i + 1);
            let offset = (i as f32 + 0.5) * self.cell_size;

            // Column heading
            let top = Pos2::new(
                self.grid_rect.min.x + offset,
                self.grid_rect.min.y - HEADING_SIZE * 0.5,
            );
            painter.text(top, egui::Align2::CENTER_CENTER, &label, font.clone(), HEADING_TEXT);

            // Row heading
            let left = Pos2::new(
                self.grid_rect.min.x - HEADING_SIZE * 0.5,
                self.grid_rect.min.y + offset,
            );
            painter.text(left, egui::Align2::CENTER_CENTER, &label, font.clone(), HEADING_TEXT);
        }
    }

    /// Draw the nine squares with their marks
    fn draw_squares(&self, painter: &Painter, board: &Board, winning_line: Option<WinningLine>) {
        for pos in Pos::all() {
            let rect = self.square_rect(pos);
            let highlight = winning_line.is_some_and(|w| w.contains(pos));
            let fill = if highlight { WIN_HIGHLIGHT } else { SQUARE_BG };

            painter.rect_filled(rect, CornerRadius::ZERO, SQUARE_BORDER);
            painter.rect_filled(rect.shrink(SQUARE_GAP), CornerRadius::ZERO, fill);

            self.draw_mark(painter, rect.center(), board.get(pos), None);
        }
    }

    fn draw_mark(&self, painter: &Painter, center: Pos2, mark: Mark, color: Option<Color32>) {
        let color = match (mark, color) {
            (Mark::Empty, _) => return,
            (_, Some(color)) => color,
            (Mark::X, None) => MARK_X,
            (Mark::O, None) => MARK_O,
        };
        painter.text(
            center,
            egui::Align2::CENTER_CENTER,
            mark.to_string(),
            FontId::proportional(self.cell_size * MARK_FONT_RATIO),
            color,
        );
    }

    /// Faded preview of the next mark under the pointer
    fn draw_hover_preview(&self, painter: &Painter, pos: Pos, next_mark: Mark) {
        let rect = self.square_rect(pos);
        painter.rect_stroke(
            rect.shrink(SQUARE_GAP),
            CornerRadius::ZERO,
            Stroke::new(2.0, hover_preview()),
            egui::StrokeKind::Inside,
        );
        self.draw_mark(painter, rect.center(), next_mark, Some(hover_preview()));
    }

    fn square_rect(&self, pos: Pos) -> Rect {
        let min = self.grid_rect.min
            + Vec2::new(pos.col as f32 * self.cell_size, pos.row as f32 * self.cell_size);
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        if !self.grid_rect.contains(screen_pos) {
            return None;
        }
        let relative = screen_pos - self.grid_rect.min;
        let col = (relative.x / self.cell_size).floor() as i32;
        let row = (relative.y / self.cell_size).floor() as i32;

        if Pos::is_valid(row, col) {
            Some(Pos::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Convert board position to the screen center of its square
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        self.square_rect(pos).center()
    }
}

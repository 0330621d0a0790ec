use common::games::snake::{Difficulty, Direction, GameOverSummary, GameSnapshot, Point};
use eframe::egui;

use super::colors::{
    food_color, snake_body_color, snake_head_color, BOARD_BACKGROUND, PLAYFIELD_BACKGROUND, SEGMENT_OUTLINE,
};
use crate::config::SnakeColor;
use crate::state::ClientCommand;
use crate::CommandSender;

/// Space kept below the board for the score bar and event log.
const HUD_HEIGHT: f32 = 150.0;

pub struct GameUi {
    snake_color: SnakeColor,
}

impl GameUi {
    pub fn new(snake_color: SnakeColor) -> Self {
        Self { snake_color }
    }

    pub fn set_snake_color(&mut self, snake_color: SnakeColor) {
        self.snake_color = snake_color;
    }

    pub fn render_game(
        &self,
        ui: &mut egui::Ui,
        ctx: &egui::Context,
        difficulty: Difficulty,
        snapshot: &GameSnapshot,
        events: &[String],
        command_sender: &CommandSender,
    ) {
        self.handle_input(ctx, command_sender);

        ui.vertical_centered(|ui| {
            self.render_score_bar(ui, difficulty, snapshot);
            self.render_board(ui, snapshot);
        });
        render_event_log(ui, events);

        if ui.button("Leave (Escape)").clicked() || ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            command_sender.send(ClientCommand::LeaveGame);
        }
    }

    fn handle_input(&self, ctx: &egui::Context, command_sender: &CommandSender) {
        let direction = ctx.input(|i| {
            if i.key_pressed(egui::Key::ArrowUp) || i.key_pressed(egui::Key::W) {
                Some(Direction::Up)
            } else if i.key_pressed(egui::Key::ArrowDown) || i.key_pressed(egui::Key::S) {
                Some(Direction::Down)
            } else if i.key_pressed(egui::Key::ArrowLeft) || i.key_pressed(egui::Key::A) {
                Some(Direction::Left)
            } else if i.key_pressed(egui::Key::ArrowRight) || i.key_pressed(egui::Key::D) {
                Some(Direction::Right)
            } else {
                None
            }
        });

        if let Some(direction) = direction {
            command_sender.send(ClientCommand::Turn { direction });
        }
    }

    fn render_score_bar(&self, ui: &mut egui::Ui, difficulty: Difficulty, snapshot: &GameSnapshot) {
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(format!("Score: {}", snapshot.score)).size(20.0).strong());
            ui.separator();
            ui.label(format!("Best: {}", snapshot.best_score));
            ui.separator();
            ui.label(format!("Tick: {}ms", snapshot.delay_ms));
            ui.separator();
            ui.label(format!("Length: {}", snapshot.body.len()));
            ui.separator();
            ui.label(difficulty.label());
        });
        ui.add_space(6.0);
    }

    fn render_board(&self, ui: &mut egui::Ui, snapshot: &GameSnapshot) {
        let available = ui.available_size();
        let board = egui::vec2(snapshot.width as f32, snapshot.height as f32);
        let scale = (available.x / board.x)
            .min((available.y - HUD_HEIGHT) / board.y)
            .clamp(0.25, 1.0);

        let (response, painter) = ui.allocate_painter(board * scale, egui::Sense::hover());
        let origin = response.rect.min;
        let to_rect = |point: Point, size: i32| {
            egui::Rect::from_min_size(
                origin + egui::vec2(point.x as f32, point.y as f32) * scale,
                egui::vec2(size as f32, size as f32) * scale,
            )
        };

        painter.rect_filled(response.rect, 0.0, BOARD_BACKGROUND);

        let bounds = &snapshot.bounds;
        let playfield = egui::Rect::from_min_max(
            to_rect(Point::new(bounds.min_x, bounds.min_y), bounds.cell).min,
            to_rect(Point::new(bounds.max_x, bounds.max_y), bounds.cell).max,
        );
        painter.rect_filled(playfield, 2.0, PLAYFIELD_BACKGROUND);

        let cell = snapshot.cell_size;
        painter.rect_filled(to_rect(snapshot.food.position, cell).shrink(1.0), cell as f32 * scale / 2.0, food_color(snapshot.food.kind));
        for poison in &snapshot.poison {
            painter.rect_filled(to_rect(poison.position, cell).shrink(1.0), cell as f32 * scale / 2.0, food_color(poison.kind));
        }

        let body_color = snake_body_color(self.snake_color);
        let outline = egui::Stroke::new(1.0, SEGMENT_OUTLINE);
        for segment in snapshot.body.iter().skip(1) {
            let rect = to_rect(*segment, cell).shrink(1.0);
            painter.rect_filled(rect, 3.0, body_color);
            painter.rect_stroke(rect, 3.0, outline, egui::StrokeKind::Inside);
        }
        if let Some(head) = snapshot.body.first() {
            let rect = to_rect(*head, cell);
            painter.rect_filled(rect, 4.0, snake_head_color(self.snake_color));
            painter.rect_stroke(rect, 4.0, outline, egui::StrokeKind::Inside);
        }
    }

    pub fn render_game_over(
        &self,
        ui: &mut egui::Ui,
        ctx: &egui::Context,
        difficulty: Difficulty,
        snapshot: &GameSnapshot,
        summary: &GameOverSummary,
        events: &[String],
        command_sender: &CommandSender,
    ) {
        ui.vertical_centered(|ui| {
            self.render_score_bar(ui, difficulty, snapshot);
            self.render_board(ui, snapshot);

            ui.add_space(10.0);
            ui.heading(egui::RichText::new("Game Over").color(egui::Color32::RED).size(32.0));
            ui.label(summary.reason.description());
            ui.label(egui::RichText::new(summary.message()).size(18.0));
            ui.label(format!("Final Score: {}", summary.score));

            if summary.is_new_high_score {
                ui.label(
                    egui::RichText::new("New high score!")
                        .color(egui::Color32::GOLD)
                        .size(20.0),
                );
            } else {
                ui.label(format!("High score: {}", summary.best_score));
            }

            ui.add_space(10.0);
            if ui.button("Play Again (Enter)").clicked() || ctx.input(|i| i.key_pressed(egui::Key::Enter)) {
                command_sender.send(ClientCommand::Restart);
            }
            if ui.button("Menu (Escape)").clicked() || ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
                command_sender.send(ClientCommand::LeaveGame);
            }
        });
        render_event_log(ui, events);
    }
}

fn render_event_log(ui: &mut egui::Ui, events: &[String]) {
    ui.separator();
    egui::ScrollArea::vertical()
        .max_height(80.0)
        .stick_to_bottom(true)
        .show(ui, |ui| {
            for event in events {
                ui.label(egui::RichText::new(event).small().color(egui::Color32::GRAY));
            }
        });
}

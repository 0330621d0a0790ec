use common::games::snake::Difficulty;
use common::log_warn;
use eframe::egui;

use super::game::GameUi;
use crate::config::{ClientConfigManager, Config, SnakeColor};
use crate::state::{AppState, ClientCommand, SharedState};
use crate::CommandSender;

pub struct MenuApp {
    shared_state: SharedState,
    command_sender: CommandSender,
    config_manager: ClientConfigManager,
    config: Config,
    selected_difficulty: Difficulty,
    selected_color: SnakeColor,
    game_ui: GameUi,
}

impl MenuApp {
    pub fn new(
        shared_state: SharedState,
        command_sender: CommandSender,
        config_manager: ClientConfigManager,
        config: Config,
        difficulty: Difficulty,
    ) -> Self {
        let selected_color = config.snake_color;
        Self {
            shared_state,
            command_sender,
            config_manager,
            config,
            selected_difficulty: difficulty,
            selected_color,
            game_ui: GameUi::new(selected_color),
        }
    }

    fn save_selection(&mut self) {
        if self.config.difficulty == self.selected_difficulty
            && self.config.snake_color == self.selected_color
        {
            return;
        }

        self.config.difficulty = self.selected_difficulty;
        self.config.snake_color = self.selected_color;
        if let Err(e) = self.config_manager.set_config(&self.config) {
            log_warn!("Failed to save config: {}", e);
        }
    }

    fn start_game(&mut self) {
        self.save_selection();
        self.game_ui.set_snake_color(self.selected_color);
        self.command_sender.send(ClientCommand::StartGame {
            difficulty: self.selected_difficulty,
        });
    }

    fn render_menu(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.heading(egui::RichText::new("Extreme Snake").size(36.0).strong());
            ui.add_space(30.0);

            ui.label(egui::RichText::new("Difficulty").size(18.0));
            ui.horizontal(|ui| {
                for difficulty in Difficulty::ALL {
                    ui.radio_value(&mut self.selected_difficulty, difficulty, difficulty.label());
                }
            });
            if self.config.custom_settings.is_some() {
                ui.label(
                    egui::RichText::new("Custom game settings from the config file override difficulty")
                        .small()
                        .color(egui::Color32::GRAY),
                );
            }

            ui.add_space(20.0);
            ui.label(egui::RichText::new("Snake Color").size(18.0));
            egui::ComboBox::from_id_salt("snake_color")
                .selected_text(self.selected_color.label())
                .show_ui(ui, |ui| {
                    for color in SnakeColor::ALL {
                        ui.selectable_value(&mut self.selected_color, color, color.label());
                    }
                });

            ui.add_space(30.0);
            if ui.button(egui::RichText::new("Play (Enter)").size(20.0)).clicked()
                || ctx.input(|i| i.key_pressed(egui::Key::Enter))
            {
                self.start_game();
            }

            ui.add_space(10.0);
            if ui.button("Quit").clicked() {
                self.command_sender.send(ClientCommand::Shutdown);
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }

            ui.add_space(30.0);
            ui.label("Arrow Keys or WASD to steer");
            ui.label("White +1, Red +5, Gold +20 and clears poison. Avoid purple poison.");
        });
    }
}

impl eframe::App for MenuApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.shared_state.has_context() {
            self.shared_state.set_context(ctx.clone());
        }

        let state = self.shared_state.get_state();
        let events = self.shared_state.events();

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(error) = self.shared_state.get_error() {
                ui.horizontal(|ui| {
                    ui.colored_label(egui::Color32::RED, &error);
                    if ui.small_button("x").clicked() {
                        self.shared_state.clear_error();
                    }
                });
            }

            match &state {
                AppState::Menu => self.render_menu(ui, ctx),
                AppState::InGame { difficulty, snapshot } => {
                    self.game_ui.render_game(ui, ctx, *difficulty, snapshot, &events, &self.command_sender);
                }
                AppState::GameOver {
                    difficulty,
                    snapshot,
                    summary,
                } => {
                    self.game_ui.render_game_over(
                        ui,
                        ctx,
                        *difficulty,
                        snapshot,
                        summary,
                        &events,
                        &self.command_sender,
                    );
                }
            }
        });
    }
}

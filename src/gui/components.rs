use super::models::{IconForgeGui, PreviewCell, Stage};
use crate::gui::logging::LogEntry;
use eframe::egui::{self, Align, Color32, Layout, RichText, Ui};
use tracing::Level;

const CONTINUE_WIDTH: f32 = 120.0;

fn continue_button(ui: &mut Ui) -> bool {
    ui.add_space(10.0);
    ui.vertical_centered(|ui| {
        ui.add_sized(
            [CONTINUE_WIDTH, 28.0],
            egui::Button::new(RichText::new("Continue").size(15.0)),
        )
        .clicked()
    })
    .inner
}

fn cell(ui: &mut Ui, cell: &PreviewCell) {
    ui.vertical(|ui| {
        ui.image((cell.texture.id(), cell.texture.size_vec2()));
        ui.label(RichText::new(&cell.label).color(Color32::from_gray(200)));
    });
}

pub struct PreviewComponent;

impl PreviewComponent {
    pub fn render(ui: &mut Ui, app: &mut IconForgeGui) {
        let mut acknowledged = false;
        match &app.stage {
            Stage::Preview { cell: preview, .. } => {
                ui.heading("Image Preview");
                ui.add_space(10.0);
                ui.vertical_centered(|ui| {
                    ui.image((preview.texture.id(), preview.texture.size_vec2()));
                });
                acknowledged = continue_button(ui);
            }
            Stage::MultiPreview { cells, .. } => {
                ui.heading("Multi-Size Icon Preview");
                ui.add_space(10.0);
                egui::ScrollArea::horizontal().show(ui, |ui| {
                    ui.with_layout(Layout::left_to_right(Align::Max), |ui| {
                        for c in cells {
                            cell(ui, c);
                            ui.add_space(10.0);
                        }
                    });
                });
                acknowledged = continue_button(ui);
            }
            Stage::Waiting => {
                ui.centered_and_justified(|ui| {
                    ui.label(RichText::new("Working…").color(Color32::from_gray(150)));
                });
            }
            Stage::Finished => {
                ui.centered_and_justified(|ui| {
                    ui.label(format!("Icons are written to {}", app.output_dir.display()));
                });
            }
        }
        if acknowledged {
            app.acknowledge();
        }
    }
}

pub fn format_log_entry(entry: &LogEntry) -> RichText {
    let color = match entry.level {
        Level::ERROR => Color32::from_rgb(255, 100, 100),
        Level::WARN => Color32::from_rgb(255, 200, 100),
        Level::INFO => Color32::from_rgb(100, 200, 255),
        Level::DEBUG => Color32::from_rgb(150, 150, 150),
        Level::TRACE => Color32::from_rgb(100, 100, 100),
    };
    RichText::new(format!(
        "[{}] {}: {}",
        entry.timestamp, entry.level, entry.message
    ))
    .color(color)
    .monospace()
}

pub struct LogPanelComponent;

impl LogPanelComponent {
    pub fn render(ui: &mut Ui, app: &mut IconForgeGui) {
        ui.horizontal(|ui| {
            ui.checkbox(&mut app.show_logs, "Show log");
            if app.show_logs {
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    ui.selectable_value(&mut app.min_log_level, Level::ERROR, "ERROR");
                    ui.selectable_value(&mut app.min_log_level, Level::WARN, "WARN");
                    ui.selectable_value(&mut app.min_log_level, Level::INFO, "INFO");
                    ui.selectable_value(&mut app.min_log_level, Level::DEBUG, "DEBUG");
                });
            }
        });
        if !app.show_logs {
            return;
        }

        egui::ScrollArea::vertical()
            .max_height(160.0)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if let Ok(logs) = app.log_messages.lock() {
                    // Level ordering: ERROR < WARN < INFO < DEBUG
                    for entry in logs.iter().filter(|e| e.level <= app.min_log_level) {
                        ui.label(format_log_entry(entry));
                    }
                }
            });
    }
}

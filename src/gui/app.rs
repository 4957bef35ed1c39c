use super::components::{LogPanelComponent, PreviewComponent};
use super::models::{IconForgeGui, NoticeLevel, PreviewCell, Stage, UiRequest};
use crate::gui::logging::{get_log_buffer, push_bounded};
use crate::io::SUPPORTED_EXTENSIONS;
use eframe::egui;
use rfd::{MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};
use std::sync::mpsc::TryRecvError;
use std::time::Duration;
use tracing::{debug, info};

fn rgba_texture(ctx: &egui::Context, name: &str, image: &image::RgbaImage) -> egui::TextureHandle {
    let size = [image.width() as usize, image.height() as usize];
    let color = egui::ColorImage::from_rgba_unmultiplied(size, image.as_raw());
    ctx.load_texture(name, color, egui::TextureOptions::NEAREST)
}

fn rgb_texture(ctx: &egui::Context, name: &str, image: &image::RgbImage) -> egui::TextureHandle {
    let size = [image.width() as usize, image.height() as usize];
    let color = egui::ColorImage::from_rgb(size, image.as_raw());
    ctx.load_texture(name, color, egui::TextureOptions::NEAREST)
}

impl IconForgeGui {
    /// Serves one pending worker request. Native dialogs run here, on the UI
    /// thread; previews become the current stage until acknowledged.
    fn handle_requests(&mut self, ctx: &egui::Context) {
        if !matches!(self.stage, Stage::Waiting) {
            return;
        }

        let request = match self.requests.try_recv() {
            Ok(request) => request,
            Err(TryRecvError::Empty) => return,
            Err(TryRecvError::Disconnected) => {
                info!("Session finished, closing window");
                self.stage = Stage::Finished;
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                return;
            }
        };

        match request {
            UiRequest::PickSource(reply) => {
                let path = rfd::FileDialog::new()
                    .set_title("Select an image file to convert to ICO")
                    .add_filter("Image Files", &SUPPORTED_EXTENSIONS)
                    .add_filter("PNG files", &["png"])
                    .add_filter("JPEG files", &["jpg", "jpeg"])
                    .add_filter("All files", &["*"])
                    .pick_file();
                debug!("File dialog returned {:?}", path);
                let _ = reply.send(path);
            }
            UiRequest::ShowPreview { image, ack } => {
                let cell = PreviewCell {
                    texture: rgba_texture(ctx, "preview", &image),
                    label: format!("{}×{}", image.width(), image.height()),
                };
                self.stage = Stage::Preview { cell, ack };
            }
            UiRequest::ShowMultiPreview { tiles, ack } => {
                let cells = tiles
                    .iter()
                    .map(|tile| PreviewCell {
                        texture: rgb_texture(ctx, &format!("tile-{}", tile.size), &tile.image),
                        label: tile.label.clone(),
                    })
                    .collect();
                self.stage = Stage::MultiPreview { cells, ack };
            }
            UiRequest::ConfirmWhiteRemoval(reply) => {
                let answer = MessageDialog::new()
                    .set_level(MessageLevel::Info)
                    .set_title("White Background Removal")
                    .set_description(
                        "Do you want to convert white (or near-white) pixels to transparent?",
                    )
                    .set_buttons(MessageButtons::YesNo)
                    .show();
                let _ = reply.send(answer == MessageDialogResult::Yes);
            }
            UiRequest::Notify {
                level,
                title,
                message,
                ack,
            } => {
                MessageDialog::new()
                    .set_level(match level {
                        NoticeLevel::Info => MessageLevel::Info,
                        NoticeLevel::Error => MessageLevel::Error,
                    })
                    .set_title(title)
                    .set_description(message)
                    .set_buttons(MessageButtons::Ok)
                    .show();
                let _ = ack.send(());
            }
        }
    }

    fn drain_logs(&mut self) {
        let new_messages: Vec<_> = match get_log_buffer().lock() {
            Ok(mut buf) => buf.drain(..).collect(),
            Err(_) => return,
        };
        if let Ok(mut logs) = self.log_messages.lock() {
            for entry in new_messages {
                push_bounded(&mut logs, entry);
            }
        }
    }
}

impl eframe::App for IconForgeGui {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_logs();
        self.handle_requests(ctx);

        egui::TopBottomPanel::bottom("log_panel").show(ctx, |ui| {
            LogPanelComponent::render(ui, self);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            PreviewComponent::render(ui, self);
        });

        // The worker only wakes us when it sends; poll for disconnects too.
        ctx.request_repaint_after(Duration::from_millis(100));
    }
}

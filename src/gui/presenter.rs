use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Sender};

use eframe::egui;
use image::RgbaImage;
use tracing::{trace, warn};

use super::models::{NoticeLevel, UiRequest};
use crate::api::{ConversionReport, PreviewTile};
use crate::error::Error;
use crate::session::{Presenter, success_message};

/// Worker-side [`Presenter`]: forwards every step to the UI thread and blocks
/// until the UI replies. If the window is gone, steps resolve to "cancel"/"no".
pub struct ChannelPresenter {
    requests: Sender<UiRequest>,
    ctx: egui::Context,
}

impl ChannelPresenter {
    pub fn new(requests: Sender<UiRequest>, ctx: egui::Context) -> Self {
        Self { requests, ctx }
    }

    fn ask<T>(&self, make: impl FnOnce(Sender<T>) -> UiRequest) -> Option<T> {
        let (tx, rx) = mpsc::channel();
        if self.requests.send(make(tx)).is_err() {
            warn!("UI is gone, dropping request");
            return None;
        }
        self.ctx.request_repaint();
        rx.recv().ok()
    }

    fn notify(&self, level: NoticeLevel, title: &str, message: String) {
        self.ask(|ack| UiRequest::Notify {
            level,
            title: title.to_string(),
            message,
            ack,
        });
    }
}

impl Presenter for ChannelPresenter {
    fn pick_source(&mut self) -> Option<PathBuf> {
        trace!("Requesting source selection");
        self.ask(UiRequest::PickSource).flatten()
    }

    fn show_preview(&mut self, preview: &RgbaImage) {
        let image = preview.clone();
        self.ask(|ack| UiRequest::ShowPreview { image, ack });
    }

    fn show_multi_preview(&mut self, tiles: &[PreviewTile]) {
        let tiles = tiles.to_vec();
        self.ask(|ack| UiRequest::ShowMultiPreview { tiles, ack });
    }

    fn confirm_white_removal(&mut self) -> bool {
        self.ask(UiRequest::ConfirmWhiteRemoval).unwrap_or(false)
    }

    fn report_success(&mut self, report: &ConversionReport, output_dir: &Path) {
        self.notify(
            NoticeLevel::Info,
            "Conversion Complete",
            success_message(report, output_dir),
        );
    }

    fn report_failure(&mut self, error: &Error) {
        self.notify(
            NoticeLevel::Error,
            "Conversion Error",
            format!("Failed to convert image:\n{}", error),
        );
    }

    fn report_no_selection(&mut self) {
        self.notify(
            NoticeLevel::Info,
            "No Selection",
            "No file was selected. Exiting.".to_string(),
        );
    }
}

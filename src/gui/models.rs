use crate::api::PreviewTile;
use crate::gui::logging::{GuiLogLayer, LogEntry};
use eframe::egui;
use image::RgbaImage;
use once_cell::sync::OnceCell;
use std::path::PathBuf;
use std::sync::mpsc::{Receiver, Sender};
use std::sync::{Arc, Mutex};
use tracing::Level;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry};

static LOGGING_INIT: OnceCell<()> = OnceCell::new();

pub fn init_gui_logging() {
    LOGGING_INIT.get_or_init(|| {
        let gui_layer = GuiLogLayer::new();

        // Keep our own debug output, quiet the windowing stack.
        let mut filter = EnvFilter::new("debug");
        for directive in ["eframe=info", "egui_glow=info", "winit=info", "wgpu=warn"] {
            if let Ok(directive) = directive.parse() {
                filter = filter.add_directive(directive);
            }
        }

        let subscriber = Registry::default().with(gui_layer).with(filter);
        let _ = tracing::subscriber::set_global_default(subscriber);
    });
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// A step the conversion worker needs the UI thread to perform. Each request
/// carries the sender the worker is blocked on.
pub enum UiRequest {
    PickSource(Sender<Option<PathBuf>>),
    ShowPreview {
        image: RgbaImage,
        ack: Sender<()>,
    },
    ShowMultiPreview {
        tiles: Vec<PreviewTile>,
        ack: Sender<()>,
    },
    ConfirmWhiteRemoval(Sender<bool>),
    Notify {
        level: NoticeLevel,
        title: String,
        message: String,
        ack: Sender<()>,
    },
}

pub struct PreviewCell {
    pub texture: egui::TextureHandle,
    pub label: String,
}

/// What the central panel is showing.
pub enum Stage {
    Waiting,
    Preview {
        cell: PreviewCell,
        ack: Sender<()>,
    },
    MultiPreview {
        cells: Vec<PreviewCell>,
        ack: Sender<()>,
    },
    Finished,
}

pub struct IconForgeGui {
    pub output_dir: PathBuf,
    pub requests: Receiver<UiRequest>,
    pub stage: Stage,
    pub min_log_level: Level,
    pub show_logs: bool,

    // Log messages for the bottom panel
    pub log_messages: Arc<Mutex<Vec<LogEntry>>>,
}

impl IconForgeGui {
    pub fn new(output_dir: PathBuf, requests: Receiver<UiRequest>) -> Self {
        Self {
            output_dir,
            requests,
            stage: Stage::Waiting,
            min_log_level: Level::INFO,
            show_logs: false,
            log_messages: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Releases the worker blocked on the current preview.
    pub fn acknowledge(&mut self) {
        match std::mem::replace(&mut self.stage, Stage::Waiting) {
            Stage::Preview { ack, .. } | Stage::MultiPreview { ack, .. } => {
                let _ = ack.send(());
            }
            other => self.stage = other,
        }
    }
}

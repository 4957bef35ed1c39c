#[cfg(feature = "gui")]
use eframe::{NativeOptions, egui::ViewportBuilder};
#[cfg(feature = "gui")]
use iconforge::{
    ConversionParams, default_output_dir,
    gui::{ChannelPresenter, IconForgeGui, models::init_gui_logging},
    run_session,
};

#[cfg(feature = "gui")]
fn main() -> Result<(), eframe::Error> {
    init_gui_logging();

    let output_dir = match default_output_dir() {
        Ok(dir) => dir,
        Err(e) => {
            tracing::error!("Cannot resolve output directory: {}", e);
            eprintln!("Cannot resolve output directory: {}", e);
            std::process::exit(1);
        }
    };

    let options = NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size([900.0, 520.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    let (tx, rx) = std::sync::mpsc::channel();
    eframe::run_native(
        "ICONFORGE",
        options,
        Box::new(move |cc| {
            let ctx = cc.egui_ctx.clone();
            let worker_dir = output_dir.clone();
            std::thread::spawn(move || {
                let mut presenter = ChannelPresenter::new(tx, ctx);
                let outcome =
                    run_session(&mut presenter, &worker_dir, ConversionParams::default());
                tracing::info!("Session ended: {:?}", outcome);
            });
            Ok(Box::new(IconForgeGui::new(output_dir, rx)))
        }),
    )
}

#[cfg(not(feature = "gui"))]
fn main() {
    eprintln!("GUI feature is not enabled. Please build with --features gui");
    std::process::exit(1);
}

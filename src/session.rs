//! Interactive conversion flow, independent of any windowing toolkit.
//!
//! A [`Presenter`] supplies the user-facing steps (file picking, previews,
//! prompts, result messages). Every call is synchronous and returns only once
//! the user has acknowledged it, so previews are modal by construction.
//! [`run_session`] drives the steps in order:
//!
//! pick source → single preview → multi-size preview → ask about white removal
//! → convert → report.
use std::path::{Path, PathBuf};

use image::RgbaImage;
use tracing::{error, info, trace};

use crate::api::{
    ConversionReport, PreviewTile, convert_to_ico, ensure_output_dir, fit_preview, load_padded,
    render_multi_preview,
};
use crate::core::params::ConversionParams;
use crate::error::Error;

pub trait Presenter {
    /// Ask the user for a source image. `None` means the user cancelled.
    fn pick_source(&mut self) -> Option<PathBuf>;

    /// Show the padded, downscaled source until dismissed.
    fn show_preview(&mut self, preview: &RgbaImage);

    /// Show every icon size side by side until dismissed.
    fn show_multi_preview(&mut self, tiles: &[PreviewTile]);

    /// Yes/no: should near-white pixels become transparent?
    fn confirm_white_removal(&mut self) -> bool;

    fn report_success(&mut self, report: &ConversionReport, output_dir: &Path);

    fn report_failure(&mut self, error: &Error);

    fn report_no_selection(&mut self);
}

#[derive(Debug)]
pub enum SessionOutcome {
    Cancelled,
    Converted(ConversionReport),
    Failed(Error),
}

/// Text shown after a successful conversion.
pub fn success_message(report: &ConversionReport, output_dir: &Path) -> String {
    let mut msg = String::from("Icon file successfully created!\n\n");
    msg.push_str(&format!("Location:\n{}\n\n", output_dir.display()));
    msg.push_str("Included sizes:\n");
    for size in &report.sizes {
        msg.push_str(&format!("• {}\n", size.label()));
    }
    msg.push_str(&format!(
        "\nWhite→Transparent: {}",
        if report.white_removed {
            "Enabled"
        } else {
            "Disabled"
        }
    ));
    msg
}

/// Runs one interactive conversion. `params.remove_white` is replaced by the
/// user's answer; the tolerance is kept.
pub fn run_session<P: Presenter>(
    presenter: &mut P,
    output_dir: &Path,
    params: ConversionParams,
) -> SessionOutcome {
    let Some(source) = presenter.pick_source() else {
        info!("No file selected");
        presenter.report_no_selection();
        return SessionOutcome::Cancelled;
    };
    info!("Selected source: {:?}", source);

    let previews = load_padded(&source)
        .and_then(|padded| Ok((fit_preview(&padded)?, render_multi_preview(&padded)?)));
    let (preview, tiles) = match previews {
        Ok(p) => p,
        Err(e) => return fail(presenter, e),
    };

    trace!("Showing single preview");
    presenter.show_preview(&preview);
    trace!("Showing multi-size preview");
    presenter.show_multi_preview(&tiles);

    let params = params.with_remove_white(presenter.confirm_white_removal());
    info!("White→Transparent: {}", params.remove_white);

    let converted =
        ensure_output_dir(output_dir).and_then(|_| convert_to_ico(&source, output_dir, &params));
    match converted {
        Ok(report) => {
            info!("Created {:?}", report.output_path);
            presenter.report_success(&report, output_dir);
            SessionOutcome::Converted(report)
        }
        Err(e) => fail(presenter, e),
    }
}

fn fail<P: Presenter>(presenter: &mut P, e: Error) -> SessionOutcome {
    error!("Conversion failed ({}): {}", e.kind(), e);
    presenter.report_failure(&e);
    SessionOutcome::Failed(e)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ICON_SIZES;
    use image::Rgba;

    #[derive(Default)]
    struct Scripted {
        source: Option<PathBuf>,
        remove_white: bool,
        steps: Vec<String>,
    }

    impl Presenter for Scripted {
        fn pick_source(&mut self) -> Option<PathBuf> {
            self.steps.push("pick".into());
            self.source.clone()
        }
        fn show_preview(&mut self, preview: &RgbaImage) {
            self.steps
                .push(format!("preview {}x{}", preview.width(), preview.height()));
        }
        fn show_multi_preview(&mut self, tiles: &[PreviewTile]) {
            self.steps.push(format!("multi {}", tiles.len()));
        }
        fn confirm_white_removal(&mut self) -> bool {
            self.steps.push("confirm".into());
            self.remove_white
        }
        fn report_success(&mut self, report: &ConversionReport, output_dir: &Path) {
            assert!(success_message(report, output_dir).contains("• 256×256"));
            self.steps.push("success".into());
        }
        fn report_failure(&mut self, error: &Error) {
            self.steps.push(format!("failure {}", error.kind()));
        }
        fn report_no_selection(&mut self) {
            self.steps.push("no-selection".into());
        }
    }

    #[test]
    fn cancelled_pick_only_reports_no_selection() {
        let dir = tempfile::tempdir().unwrap();
        let mut presenter = Scripted::default();
        let outcome = run_session(&mut presenter, dir.path(), ConversionParams::default());
        assert!(matches!(outcome, SessionOutcome::Cancelled));
        assert_eq!(presenter.steps, vec!["pick", "no-selection"]);
    }

    #[test]
    fn full_flow_runs_steps_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("badge.png");
        RgbaImage::from_pixel(600, 400, Rgba([255, 255, 255, 255]))
            .save(&source)
            .unwrap();
        let output_dir = dir.path().join("output");

        let mut presenter = Scripted {
            source: Some(source),
            remove_white: true,
            ..Default::default()
        };
        let outcome = run_session(&mut presenter, &output_dir, ConversionParams::default());

        assert_eq!(
            presenter.steps,
            vec!["pick", "preview 300x300", "multi 6", "confirm", "success"]
        );
        let SessionOutcome::Converted(report) = outcome else {
            panic!("expected conversion");
        };
        assert_eq!(report.output_path, output_dir.join("badge.ico"));
        assert!(report.output_path.exists());
        assert!(report.white_removed);
        assert_eq!(report.keyed_pixels, 600 * 400);
        assert_eq!(report.sizes, ICON_SIZES.to_vec());
    }

    #[test]
    fn unreadable_source_is_reported_as_failure() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("broken.png");
        std::fs::write(&source, b"this is not a png file").unwrap();

        let mut presenter = Scripted {
            source: Some(source),
            ..Default::default()
        };
        let outcome = run_session(&mut presenter, dir.path(), ConversionParams::default());
        assert!(matches!(outcome, SessionOutcome::Failed(_)));
        assert_eq!(presenter.steps, vec!["pick", "failure decode"]);
    }

    #[test]
    fn success_message_mentions_keying_state() {
        let report = ConversionReport {
            source: PathBuf::from("a.png"),
            output_path: PathBuf::from("out/a.ico"),
            sizes: ICON_SIZES.to_vec(),
            white_removed: false,
            tolerance: 10,
            keyed_pixels: 0,
            source_dimensions: crate::types::Dimensions::square(4),
        };
        let msg = success_message(&report, Path::new("out"));
        assert!(msg.contains("Location:\nout"));
        assert!(msg.contains("• 16×16\n• 32×32"));
        assert!(msg.ends_with("White→Transparent: Disabled"));
    }
}

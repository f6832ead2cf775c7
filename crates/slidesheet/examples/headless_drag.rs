//! Drives a simulated drag against a surface that logs what it is asked to do.
//!
//! Run with `RUST_LOG=slidesheet=trace` to see every tracking update.

use slidesheet::{
    BottomSheet, GestureSample, Progress, SheetConfig, SheetContent, SheetDelegate, SheetGeometry,
    SheetStyle, Surface, Transition, TweenSurface,
};
use slidesheet_core::geometry::Size;

const CONTAINER: Size<f32> = Size {
    width: 390.0,
    height: 844.0,
};

struct LogSurface;

impl Surface for LogSurface {
    type Container = str;
    type View = &'static str;

    fn attach(&mut self, container: &str, content: &SheetContent<&'static str>) {
        tracing::info!(
            container,
            collapsed = content.collapsed(),
            expanded = ?content.expanded(),
            "attach"
        );
    }

    fn detach(&mut self) {
        tracing::info!("detach");
    }

    fn apply_geometry(&mut self, geometry: &SheetGeometry, _transition: Transition) {
        let frame = geometry.frame(CONTAINER);
        tracing::info!(
            y = frame.y,
            height = frame.height,
            width = frame.width,
            overlay = geometry.overlay_alpha,
            collapsed_alpha = geometry.collapsed_alpha(),
            "geometry"
        );
    }

    fn apply_style(&mut self, style: &SheetStyle) {
        tracing::info!(corner_radius = style.corner_radius, "style");
    }
}

struct LogDelegate;

impl SheetDelegate for LogDelegate {
    fn on_collapsed(&mut self) {
        tracing::info!("delegate: collapsed");
    }

    fn on_expanded(&mut self) {
        tracing::info!("delegate: expanded");
    }

    fn on_progress_changed(&mut self, progress: Progress) {
        tracing::debug!(progress = progress.value(), "delegate: progress");
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    slidesheet_core::logging::init();

    let mut sheet = BottomSheet::new(SheetConfig::default(), TweenSurface::new(LogSurface))
        .with_content(SheetContent::Dual {
            collapsed: "mini player",
            expanded: "full player",
        })
        .with_delegate(LogDelegate);
    sheet.attach("window")?;

    // Finger moves up 120 points over a few frames, then lifts.
    sheet.handle_gesture(GestureSample::began());
    for step in 1..=6 {
        sheet.handle_gesture(GestureSample::changed(-20.0 * step as f32));
        sheet.run_pending();
    }
    sheet.handle_gesture(GestureSample::ended(-120.0));

    let frame_time = 1.0 / 60.0;
    while sheet.surface_mut().tick(frame_time) {}

    tracing::info!(state = ?sheet.state(), height = sheet.current_height(), "settled");

    sheet.collapse();
    while sheet.surface_mut().tick(frame_time) {}
    sheet.detach();
    Ok(())
}

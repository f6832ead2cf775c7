//! The bottom sheet component.
//!
//! [`BottomSheet`] wires the model, the drag controller, the layout applier
//! and the deferred update queue to a host [`Surface`] and an optional
//! [`SheetDelegate`].
//!
//! # Example
//!
//! ```ignore
//! let mut sheet = BottomSheet::new(SheetConfig::default(), surface);
//! sheet.set_content(SheetContent::Single(peek_view));
//! sheet.attach(&window_root)?;
//!
//! // Gesture callback:
//! sheet.handle_gesture(GestureSample::changed(translation_y));
//!
//! // Next turn of the UI loop:
//! sheet.run_pending();
//! ```

use slidesheet_core::geometry::{Rect, Size};
use slidesheet_core::profiling::profile_function;

use crate::config::{SheetConfig, SheetStyle};
use crate::delegate::{SheetDelegate, SheetEvent};
use crate::dispatch::MainQueue;
use crate::drag::{DragController, DragEvent, GestureSample};
use crate::error::{SheetError, SheetResult};
use crate::layout::{LayoutApplier, geometry_for_progress, geometry_for_state};
use crate::state::{Progress, SettledState, SheetModel, SheetState};
use crate::surface::{ContentLayout, SheetContent, SheetGeometry, Surface};

/// A draggable panel anchored to the bottom of a host container.
///
/// Single-threaded by contract: the sheet, its surface and its delegate all
/// live on the host's UI context.
pub struct BottomSheet<S: Surface> {
    model: SheetModel,
    drag: DragController,
    applier: LayoutApplier,
    queue: MainQueue,
    surface: S,
    content: Option<SheetContent<S::View>>,
    delegate: Option<Box<dyn SheetDelegate>>,
    attached: bool,
}

impl<S: Surface> BottomSheet<S> {
    /// Create a collapsed, detached sheet.
    pub fn new(config: SheetConfig, surface: S) -> Self {
        Self {
            model: SheetModel::new(config),
            drag: DragController::new(),
            applier: LayoutApplier::new(),
            queue: MainQueue::new(),
            surface,
            content: None,
            delegate: None,
            attached: false,
        }
    }

    pub fn with_content(mut self, content: SheetContent<S::View>) -> Self {
        self.content = Some(content);
        self
    }

    pub fn with_delegate(mut self, delegate: impl SheetDelegate + 'static) -> Self {
        self.delegate = Some(Box::new(delegate));
        self
    }

    pub fn with_layout_applier(mut self, applier: LayoutApplier) -> Self {
        self.applier = applier;
        self
    }

    pub fn set_delegate(&mut self, delegate: impl SheetDelegate + 'static) {
        self.delegate = Some(Box::new(delegate));
    }

    pub fn clear_delegate(&mut self) {
        self.delegate = None;
    }

    /// Replace the content views.
    ///
    /// An attached sheet is detached from its surface; the host attaches it
    /// again to show the new views.
    pub fn set_content(&mut self, content: SheetContent<S::View>) {
        tracing::debug!(layout = ?content.layout(), "sheet content replaced");
        self.content = Some(content);
        self.detach();
    }

    pub fn model(&self) -> &SheetModel {
        &self.model
    }

    pub fn config(&self) -> &SheetConfig {
        self.model.config()
    }

    pub fn state(&self) -> SheetState {
        self.model.state()
    }

    pub fn progress(&self) -> Progress {
        self.model.progress()
    }

    pub fn current_height(&self) -> f32 {
        self.model.current_height()
    }

    pub fn style(&self) -> SheetStyle {
        self.model.config().style()
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Whether the content cross-fades between two views.
    pub fn content_layout(&self) -> ContentLayout {
        self.content
            .as_ref()
            .map_or(ContentLayout::Single, SheetContent::layout)
    }

    /// Geometry for the current model state.
    pub fn geometry(&self) -> SheetGeometry {
        let config = self.model.config();
        match self.model.state().settled() {
            Some(target) => geometry_for_state(config, target, self.content_layout()),
            None => geometry_for_progress(config, self.model.progress(), self.content_layout()),
        }
    }

    /// Sheet rectangle inside a container of `container` size.
    pub fn frame(&self, container: Size<f32>) -> Rect<f32> {
        self.geometry().frame(container)
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Number of tracking updates waiting for [`run_pending`](Self::run_pending).
    pub fn pending_updates(&self) -> usize {
        self.queue.len()
    }

    /// Insert the sheet into `container` and lay it out for the current state.
    ///
    /// Fails with [`SheetError::MissingContent`] if no content was supplied.
    pub fn attach(&mut self, container: &S::Container) -> SheetResult<()> {
        if self.attached {
            return Err(SheetError::AlreadyAttached);
        }
        let Some(content) = self.content.as_ref() else {
            tracing::error!("attempted to attach a bottom sheet without content");
            return Err(SheetError::MissingContent);
        };

        self.surface.attach(container, content);
        self.attached = true;

        // Everything is pushed fresh on attach.
        self.model.take_dirty();
        self.surface.apply_style(&self.model.config().style());
        self.push_geometry();

        tracing::debug!(
            state = ?self.model.state(),
            layout = ?self.content_layout(),
            "sheet attached"
        );
        Ok(())
    }

    /// Remove the sheet from its container.
    ///
    /// Queued tracking updates never reach the surface, but the delegate
    /// still hears their progress.
    pub fn detach(&mut self) {
        if !self.attached {
            return;
        }
        self.discard_pending();
        self.surface.detach();
        self.attached = false;
        tracing::debug!("sheet detached");
    }

    /// Mutate the configuration, re-snap the model, and push what changed.
    pub fn update_config(&mut self, f: impl FnOnce(&mut SheetConfig)) {
        self.model.update_config(f);
        self.sync();
    }

    pub fn set_minimum_height(&mut self, value: f32) {
        self.update_config(|c| c.set_minimum_height(value));
    }

    pub fn set_maximum_height(&mut self, value: f32) {
        self.update_config(|c| c.set_maximum_height(value));
    }

    pub fn set_minimum_inset(&mut self, value: f32) {
        self.update_config(|c| c.set_minimum_inset(value));
    }

    pub fn set_maximum_inset(&mut self, value: f32) {
        self.update_config(|c| c.set_maximum_inset(value));
    }

    pub fn set_horizontal_margin(&mut self, value: f32) {
        self.update_config(|c| c.set_horizontal_margin(value));
    }

    pub fn set_bottom_margin(&mut self, value: f32) {
        self.update_config(|c| c.set_bottom_margin(value));
    }

    pub fn set_corner_radius(&mut self, value: f32) {
        self.update_config(|c| c.set_corner_radius(value));
    }

    pub fn set_show_overlay(&mut self, show: bool) {
        self.update_config(|c| c.set_show_overlay(show));
    }

    pub fn set_dims_background(&mut self, dims: bool) {
        self.update_config(|c| c.set_dims_background(dims));
    }

    pub fn set_background_color(&mut self, color: crate::Color) {
        self.update_config(|c| c.set_background_color(color));
    }

    fn sync(&mut self) {
        let dirty = self.model.take_dirty();
        if !self.attached || dirty.is_empty() {
            return;
        }
        if dirty.needs_style() {
            self.surface.apply_style(&self.model.config().style());
        }
        if dirty.needs_geometry() {
            self.push_geometry();
        }
    }

    fn push_geometry(&mut self) {
        let layout = self.content_layout();
        let config = self.model.config();
        match self.model.state().settled() {
            Some(target) => {
                self.applier.snap(&mut self.surface, config, target, layout);
            }
            None => {
                self.applier
                    .track(&mut self.surface, config, self.model.progress(), layout);
            }
        }
    }

    fn notify(&mut self, event: SheetEvent) {
        if let Some(delegate) = self.delegate.as_deref_mut() {
            event.dispatch(delegate);
        }
    }

    /// Route a host gesture sample. Phases other than began, changed and
    /// ended are ignored.
    pub fn handle_gesture(&mut self, sample: GestureSample) {
        match self.drag.handle(&mut self.model, sample) {
            Some(DragEvent::Moved { progress }) => {
                self.queue.push(progress);
            }
            Some(DragEvent::Settled { target, .. }) => self.finish_settle(target),
            Some(DragEvent::Started { .. }) | None => {}
        }
    }

    pub fn on_drag_start(&mut self) {
        self.drag.on_drag_start(&mut self.model);
    }

    /// Track the cumulative translation since the drag began.
    ///
    /// The surface update is deferred until [`run_pending`](Self::run_pending).
    pub fn on_drag_changed(&mut self, delta_y: f32) {
        profile_function!();
        if let DragEvent::Moved { progress } = self.drag.on_drag_changed(&mut self.model, delta_y) {
            self.queue.push(progress);
        }
    }

    /// Release the drag and animate to the chosen state.
    pub fn on_drag_end(&mut self) {
        if let DragEvent::Settled { target, .. } = self.drag.on_drag_end(&mut self.model) {
            self.finish_settle(target);
        }
    }

    /// Apply queued tracking updates in order, notifying the delegate of each.
    ///
    /// Hosts call this on the turn of the UI loop after a gesture callback.
    /// Returns the number of updates applied.
    pub fn run_pending(&mut self) -> usize {
        profile_function!();
        let layout = self.content_layout();
        let mut applied = 0;
        while let Some(update) = self.queue.pop() {
            if self.attached {
                self.applier
                    .track(&mut self.surface, self.model.config(), update.progress, layout);
            }
            self.notify(SheetEvent::ProgressChanged(update.progress));
            applied += 1;
        }
        applied
    }

    /// Drain the queue without touching the surface, notifying the delegate
    /// of each dropped update.
    fn discard_pending(&mut self) {
        while let Some(update) = self.queue.pop() {
            self.notify(SheetEvent::ProgressChanged(update.progress));
        }
    }

    fn finish_settle(&mut self, target: SettledState) {
        // Tracking frames still queued would land on top of the settle animation.
        let flushed = self.run_pending();
        if flushed > 0 {
            tracing::trace!(flushed, "flushed tracking updates before settle");
        }
        self.request_settle(target);
    }

    fn request_settle(&mut self, target: SettledState) {
        if self.attached {
            let layout = self.content_layout();
            self.applier
                .settle(&mut self.surface, self.model.config(), target, layout);
        }
        tracing::debug!(target = ?target, "sheet settling");
        match target {
            SettledState::Collapsed => self.notify(SheetEvent::Collapsed),
            SettledState::Expanded => self.notify(SheetEvent::Expanded),
        }
    }

    fn transition_to(&mut self, target: SettledState) -> bool {
        if self.model.is_at(target) {
            return false;
        }
        if self.drag.is_active() {
            tracing::debug!("programmatic transition interrupts drag");
            self.drag = DragController::new();
            self.discard_pending();
        }
        self.model.settle(target);
        self.request_settle(target);
        true
    }

    /// Animate to the collapsed state.
    ///
    /// Returns false (and does nothing) if the sheet already sits at the
    /// collapsed height.
    pub fn collapse(&mut self) -> bool {
        self.transition_to(SettledState::Collapsed)
    }

    /// Animate to the expanded state.
    ///
    /// Returns false (and does nothing) if the sheet already sits at the
    /// expanded height.
    pub fn expand(&mut self) -> bool {
        self.transition_to(SettledState::Expanded)
    }

    /// Expand a collapsed sheet or collapse an expanded one.
    ///
    /// Does nothing mid-drag.
    pub fn toggle(&mut self) -> bool {
        match self.model.state() {
            SheetState::Collapsed => self.expand(),
            SheetState::Expanded => self.collapse(),
            SheetState::Dragging { .. } => false,
        }
    }
}

impl<S: Surface + std::fmt::Debug> std::fmt::Debug for BottomSheet<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BottomSheet")
            .field("model", &self.model)
            .field("drag", &self.drag)
            .field("pending", &self.queue.len())
            .field("surface", &self.surface)
            .field("attached", &self.attached)
            .finish_non_exhaustive()
    }
}

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use thiserror::Error;
use tracing::{debug, warn};

use crate::anchor::{AnchorEdge, anchored_rect};
use crate::host::{DockContent, DockId, HostWindow};
use crate::theme;
use crate::ui::{fill_region, safe_set_string};

/// Fixed width (or height, for top/bottom anchors) of a pad, matching the
/// footprint of the docked panel it replaces.
pub const DEFAULT_PAD_THICKNESS: u16 = 300;

#[derive(Debug, Error)]
pub enum PadError {
    /// The host container had no measurable viewport at bind time. Transient:
    /// callers fall back to [`WidgetPad::deferred`] and the geometry heals on
    /// the next `adjust_to_view`.
    #[error("host container has no measurable viewport yet")]
    Binding,
}

/// A floating panel that borrows the content of a native dock widget and
/// stays anchored to one edge of the host viewport.
///
/// The pad does not own the content it displays; `close` returns it to the
/// dock widget it came from.
#[derive(Debug)]
pub struct WidgetPad {
    anchor: AnchorEdge,
    thickness: u16,
    visible: bool,
    geometry: Rect,
    borrowed: Option<(DockContent, DockId)>,
    style_text: String,
    closed: bool,
    repaints: u64,
}

impl WidgetPad {
    /// Bind a pad to a container edge. Fails when the container has no
    /// measurable viewport yet.
    pub fn bind(viewport: Rect, anchor: AnchorEdge) -> Result<Self, PadError> {
        if viewport.width == 0 || viewport.height == 0 {
            return Err(PadError::Binding);
        }
        let mut pad = Self::deferred(anchor);
        pad.geometry = anchored_rect(viewport, anchor, pad.thickness);
        Ok(pad)
    }

    /// Construct a pad whose geometry stays empty until the first
    /// `adjust_to_view`. The recovery path for [`PadError::Binding`].
    pub fn deferred(anchor: AnchorEdge) -> Self {
        Self {
            anchor,
            thickness: DEFAULT_PAD_THICKNESS,
            visible: false,
            geometry: Rect::default(),
            borrowed: None,
            style_text: String::new(),
            closed: false,
            repaints: 0,
        }
    }

    pub fn anchor(&self) -> AnchorEdge {
        self.anchor
    }

    pub fn thickness(&self) -> u16 {
        self.thickness
    }

    pub fn set_thickness(&mut self, thickness: u16) {
        self.thickness = thickness;
    }

    pub fn geometry(&self) -> Rect {
        self.geometry
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Number of observable repaints so far. Invisible pads never repaint.
    pub fn repaints(&self) -> u64 {
        self.repaints
    }

    pub fn style_text(&self) -> &str {
        &self.style_text
    }

    pub fn set_style_text(&mut self, text: String) {
        self.style_text = text;
    }

    /// Title of the currently borrowed content, if any.
    pub fn content_title(&self) -> Option<&str> {
        self.borrowed.as_ref().map(|(c, _)| c.title.as_str())
    }

    /// Detach `dock`'s content and re-parent it into this pad.
    ///
    /// Borrowing the same dock again is a no-op. Borrowing a different dock
    /// first releases the previous content back to its origin without
    /// destroying it.
    pub fn borrow_content(&mut self, host: &mut HostWindow, dock: DockId) {
        if let Some((content, origin)) = self.borrowed.take() {
            if origin == dock {
                self.borrowed = Some((content, origin));
                return;
            }
            debug!(dock = origin, "releasing previously borrowed content");
            host.restore_dock_content(origin, content);
        }
        match host.take_dock_content(dock) {
            Some(content) => {
                debug!(dock, title = %content.title, "borrowed dock content");
                self.borrowed = Some((content, dock));
            }
            None => {
                warn!(dock, "dock widget has no content to borrow");
            }
        }
    }

    /// Toggle rendering. Layout state survives; callable before the first
    /// `adjust_to_view`.
    pub fn set_visible(&mut self, visible: bool) {
        if self.visible != visible {
            self.visible = visible;
            self.repaints += 1;
        }
    }

    /// Recompute geometry from the host's current view bounds and apply it.
    /// A zero-sized host yields a zero-sized pad, never an error.
    pub fn adjust_to_view(&mut self, host: &HostWindow) {
        let bounds = host.active_view_bounds();
        self.geometry = anchored_rect(bounds, self.anchor, self.thickness);
        if self.visible {
            self.repaints += 1;
        }
    }

    /// Return borrowed content to its original dock and release everything.
    /// A second call is a no-op to tolerate redundant teardown paths.
    pub fn close(&mut self, host: &mut HostWindow) {
        if self.closed {
            return;
        }
        if let Some((content, origin)) = self.borrowed.take() {
            debug!(dock = origin, "restoring borrowed content to its dock");
            host.restore_dock_content(origin, content);
        }
        self.set_visible(false);
        self.closed = true;
    }

    /// Paint the pad into `buf`: filled body, highlighted title row, then
    /// the borrowed content's children one per row.
    pub fn render(&self, buf: &mut Buffer) {
        if !self.visible || self.closed {
            return;
        }
        let bounds = self.geometry.intersection(buf.area);
        if bounds.width == 0 || bounds.height == 0 {
            return;
        }
        fill_region(
            buf,
            bounds,
            Style::default().bg(theme::pad_bg()).fg(theme::pad_fg()),
        );
        let Some((content, _)) = &self.borrowed else {
            return;
        };
        let title_style = Style::default()
            .bg(theme::pad_title_bg())
            .fg(theme::pad_title_fg())
            .add_modifier(Modifier::BOLD);
        safe_set_string(buf, bounds, bounds.x, bounds.y, &content.title, title_style);
        let item_style = Style::default()
            .bg(theme::pad_bg())
            .fg(theme::pad_item_fg());
        for (row, child) in content.children.iter().enumerate() {
            let y = bounds.y.saturating_add(1).saturating_add(row as u16);
            if y >= bounds.y.saturating_add(bounds.height) {
                break;
            }
            safe_set_string(buf, bounds, bounds.x, y, child, item_style);
        }
    }
}

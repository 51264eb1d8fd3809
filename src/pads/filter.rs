use std::collections::BTreeSet;

use tracing::debug;

use crate::host::{HostEvent, HostWindow, SubwindowEvent, SubwindowId};
use crate::pads::pad::WidgetPad;

/// Event interceptor that keeps a target pad synchronized with the host
/// window and the active sub-document view.
///
/// One filter instance is shared across all sub-documents: views are created
/// and destroyed dynamically, so registration happens lazily from the
/// activation handler instead of at view-creation time. Stale registrations
/// for inactive or closed views are harmless; events from a registered view
/// are only acted upon while that view is the active one.
///
/// The filter never consumes an event. Every `on_*_event` method returns
/// `false` so standard window behavior is augmented, not blocked.
#[derive(Debug, Default)]
pub struct SubwindowAdjustFilter {
    bound: bool,
    registered: BTreeSet<SubwindowId>,
}

impl SubwindowAdjustFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the target pad as live. The filter holds no owning reference to
    /// the pad; callers pass it in per event and unbind before releasing it.
    pub fn bind_target(&mut self) {
        self.bound = true;
    }

    /// Detach from the target pad. Part of the teardown order: unbind before
    /// the pad is closed so a lingering filter can never act on a dead pad.
    pub fn unbind_target(&mut self) {
        self.bound = false;
    }

    pub fn is_bound(&self) -> bool {
        self.bound
    }

    /// Forget all sub-document registrations.
    pub fn clear_registrations(&mut self) {
        self.registered.clear();
    }

    pub fn is_registered(&self, id: SubwindowId) -> bool {
        self.registered.contains(&id)
    }

    /// Host-window-level interception: resize and move events reposition the
    /// pad while it is bound and visible.
    pub fn on_host_event(
        &self,
        event: &HostEvent,
        host: &HostWindow,
        pad: &mut WidgetPad,
    ) -> bool {
        if self.bound
            && matches!(event, HostEvent::Resized(_) | HostEvent::Moved)
            && pad.visible()
        {
            pad.adjust_to_view(host);
        }
        false
    }

    /// Sub-document-level interception. Only the currently active, registered
    /// view drives the pad; a stale registration is ignored until that view
    /// is reactivated.
    pub fn on_subwindow_event(
        &self,
        id: SubwindowId,
        event: &SubwindowEvent,
        host: &HostWindow,
        pad: &mut WidgetPad,
    ) -> bool {
        if self.bound
            && self.registered.contains(&id)
            && host.active_subwindow() == Some(id)
            && matches!(
                event,
                SubwindowEvent::Resized(_) | SubwindowEvent::Moved(_)
            )
            && pad.visible()
        {
            pad.adjust_to_view(host);
        }
        false
    }

    /// Active-sub-document change handler.
    ///
    /// Registers the filter on the newly active view (idempotent) and snaps
    /// the pad to it in the same dispatch, so a document switch never shows a
    /// frame with the previous document's geometry. With no active view the
    /// pad keeps its last geometry.
    pub fn on_subwindow_activated(
        &mut self,
        subwindow: Option<SubwindowId>,
        host: &HostWindow,
        pad: &mut WidgetPad,
    ) {
        let Some(id) = subwindow else {
            return;
        };
        if self.registered.insert(id) {
            debug!(subwindow = id, "installed adjust filter on view");
        }
        if self.bound {
            pad.adjust_to_view(host);
        }
    }
}

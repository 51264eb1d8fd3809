use thiserror::Error;
use tracing::debug;

use crate::anchor::AnchorEdge;
use crate::coordinator::RedesignFlags;
use crate::host::{ActionId, DockId, HostEvent, HostWindow, SubwindowEvent, SubwindowId};
use crate::pads::filter::SubwindowAdjustFilter;
use crate::pads::pad::{PadError, WidgetPad};
use crate::styles;

#[derive(Debug, Error)]
pub enum PanelError {
    #[error("dock widget {0:?} not found in host window")]
    DockWidgetNotFound(String),
    #[error("dockers menu has no action titled {0:?}")]
    DockerActionNotFound(String),
    #[error(
        "the tool options pad requires the host's tool options to live in a docker; \
         change the tool options location setting and restart the host"
    )]
    ToolOptionsOutsideDocker,
    #[error(transparent)]
    Pad(#[from] PadError),
}

/// Orchestrates one overlay pad and one adjustment filter for a single named
/// dock widget, and keeps the native docker action disabled while the
/// synthetic replacement is interactive.
///
/// Activation is construction: a `PanelController` in hand is always in its
/// active state, so re-activating an active controller is unrepresentable.
/// `deactivate` fully unwinds activation and is idempotent.
#[derive(Debug)]
pub struct PanelController {
    pad: WidgetPad,
    filter: SubwindowAdjustFilter,
    toggle_action: ActionId,
    docker_action: ActionId,
    dock: DockId,
    active: bool,
}

impl PanelController {
    /// Locate the named dock widget, build a pad over the host viewport,
    /// borrow the dock's content into it, wire the adjustment filter, create
    /// the checkable visibility toggle, and disable the native docker action.
    ///
    /// Lookup failures are fatal to this activation attempt and surfaced to
    /// the caller; an unmeasurable viewport is not, the pad simply defers its
    /// geometry to the first adjust.
    pub fn activate(
        host: &mut HostWindow,
        dock_name: &str,
        docker_title: &str,
        toggle_name: &str,
        anchor: AnchorEdge,
    ) -> Result<Self, PanelError> {
        let dock = host
            .find_dock(dock_name)
            .ok_or_else(|| PanelError::DockWidgetNotFound(dock_name.to_string()))?;
        let docker_action = host
            .find_docker_action(docker_title)
            .ok_or_else(|| PanelError::DockerActionNotFound(docker_title.to_string()))?;

        let mut pad = match WidgetPad::bind(host.viewport(), anchor) {
            Ok(pad) => pad,
            Err(PadError::Binding) => {
                debug!(dock = dock_name, "viewport not measurable yet, deferring pad geometry");
                WidgetPad::deferred(anchor)
            }
        };
        pad.borrow_content(host, dock);

        let mut filter = SubwindowAdjustFilter::new();
        filter.bind_target();

        let toggle_action = host.create_action(toggle_name, &format!("Show {docker_title}"));
        host.set_action_checkable(toggle_action, true);
        host.set_action_checked(toggle_action, true);
        host.set_action_enabled(docker_action, false);

        debug!(dock = dock_name, "panel activated");
        Ok(Self {
            pad,
            filter,
            toggle_action,
            docker_action,
            dock,
            active: true,
        })
    }

    /// Unwind everything `activate` did: unbind the filter before the pad is
    /// released, restore borrowed content, re-enable the native docker
    /// action. Safe to call on an already-deactivated controller.
    pub fn deactivate(&mut self, host: &mut HostWindow) {
        if !self.active {
            return;
        }
        self.filter.unbind_target();
        self.filter.clear_registrations();
        self.pad.close(host);
        host.set_action_enabled(self.docker_action, true);
        self.active = false;
        debug!(dock = self.dock, "panel deactivated");
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// The toggle action's checked state, exposed to the coordinator as the
    /// feature-enabled flag.
    pub fn enabled(&self, host: &HostWindow) -> bool {
        host.action_checked(self.toggle_action)
    }

    pub fn toggle_action(&self) -> ActionId {
        self.toggle_action
    }

    pub fn pad(&self) -> &WidgetPad {
        &self.pad
    }

    pub fn pad_mut(&mut self) -> &mut WidgetPad {
        &mut self.pad
    }

    /// Visibility toggle, as wired to the checkable menu action.
    pub fn handle_toggle(&mut self, host: &mut HostWindow, checked: bool) {
        if !self.active {
            return;
        }
        host.set_action_checked(self.toggle_action, checked);
        self.pad.set_visible(checked);
    }

    /// Recompute and reapply the pad's style text from the current flag
    /// state. No structural side effects.
    pub fn refresh_theme(&mut self, flags: &RedesignFlags) {
        self.pad.set_style_text(styles::pad_style_sheet(flags));
    }

    pub fn on_host_event(&mut self, host: &HostWindow, event: &HostEvent) -> bool {
        if !self.active {
            return false;
        }
        self.filter.on_host_event(event, host, &mut self.pad)
    }

    pub fn on_subwindow_event(
        &mut self,
        host: &HostWindow,
        id: SubwindowId,
        event: &SubwindowEvent,
    ) -> bool {
        if !self.active {
            return false;
        }
        self.filter.on_subwindow_event(id, event, host, &mut self.pad)
    }

    /// Route an activation change to the filter, then re-assert that the
    /// native docker action stays disabled. A saved window layout or other
    /// host path may have re-enabled it behind our back; mutual exclusion is
    /// enforced on every activation event rather than assumed.
    pub fn on_subwindow_activated(&mut self, host: &mut HostWindow, sub: Option<SubwindowId>) {
        if !self.active {
            return;
        }
        self.filter.on_subwindow_activated(sub, host, &mut self.pad);
        if host.action_enabled(self.docker_action) {
            debug!(dock = self.dock, "re-disabling native docker action");
            host.set_action_enabled(self.docker_action, false);
        }
    }
}

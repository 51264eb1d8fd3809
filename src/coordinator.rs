//! Top-level orchestration: feature flags, panel lifecycle, stylesheet
//! rebuilds, and event routing.

use tracing::{debug, info};

use crate::anchor::AnchorEdge;
use crate::host::{HostEvent, HostWindow, SubwindowEvent, SubwindowId};
use crate::pads::{PanelController, PanelError};
use crate::settings::SettingsStore;
use crate::styles;

pub const SETTINGS_NAMESPACE: &str = "Redesign";

const TOOLBOX_DOCK: &str = "ToolBox";
const TOOLBOX_TITLE: &str = "Toolbox";
const TOOL_OPTIONS_DOCK: &str = "sharedtooldocker";
const TOOL_OPTIONS_TITLE: &str = "Tool Options";

/// Process-wide feature flags, owned here and passed by reference to
/// whoever needs to read them. Never ambient global state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RedesignFlags {
    pub flat_theme: bool,
    pub thin_document_tabs: bool,
    pub toolbox: bool,
    pub tool_options: bool,
}

/// Creates and destroys panel controllers on flag toggles, persists the
/// flags, and triggers full stylesheet rebuilds.
#[derive(Debug)]
pub struct RedesignCoordinator {
    settings: SettingsStore,
    flags: RedesignFlags,
    toolbox: Option<PanelController>,
    tool_options: Option<PanelController>,
}

impl RedesignCoordinator {
    /// Read the persisted flags. All four default to on, matching the
    /// behavior users opted into by installing the redesign.
    pub fn new(settings: SettingsStore) -> Self {
        let read =
            |key: &str| settings.read_setting(SETTINGS_NAMESPACE, key, "true") == "true";
        let flags = RedesignFlags {
            flat_theme: read("usesFlatTheme"),
            thin_document_tabs: read("usesThinDocumentTabs"),
            toolbox: read("usesNuToolbox"),
            tool_options: read("usesNuToolOptions"),
        };
        debug!(?flags, "loaded redesign flags");
        Self {
            settings,
            flags,
            toolbox: None,
            tool_options: None,
        }
    }

    pub fn flags(&self) -> &RedesignFlags {
        &self.flags
    }

    pub fn settings(&self) -> &SettingsStore {
        &self.settings
    }

    pub fn toolbox(&self) -> Option<&PanelController> {
        self.toolbox.as_ref()
    }

    pub fn tool_options(&self) -> Option<&PanelController> {
        self.tool_options.as_ref()
    }

    fn tool_options_in_docker(&self) -> bool {
        self.settings.read_setting("", "ToolOptionsInDocker", "false") == "true"
    }

    /// Wire the coordinator into a host window: create the four checkable
    /// menu actions, bring up the panels that are flagged on, and apply the
    /// stylesheets.
    pub fn install(&mut self, host: &mut HostWindow) -> Result<(), PanelError> {
        let tab_action = host.create_action("tabHeight", "Thin Document Tabs");
        host.set_action_checkable(tab_action, true);
        host.set_action_checked(tab_action, self.flags.thin_document_tabs);

        let flat_action = host.create_action("flatTheme", "Use flat theme");
        host.set_action_checkable(flat_action, true);
        host.set_action_checked(flat_action, self.flags.flat_theme);

        let toolbox_action = host.create_action("nuToolbox", "NuToolbox");
        host.set_action_checkable(toolbox_action, true);
        host.set_action_checked(toolbox_action, self.flags.toolbox);

        let tool_options_action = host.create_action("nuToolOptions", "NuToolOptions");
        host.set_action_checkable(tool_options_action, true);
        if self.tool_options_in_docker() {
            host.set_action_checked(tool_options_action, self.flags.tool_options);
        }

        if self.flags.tool_options && self.tool_options_in_docker() {
            self.bring_up_tool_options(host)?;
        }
        if self.flags.toolbox {
            self.bring_up_toolbox(host)?;
        }
        self.rebuild_style_sheet(host);
        info!("redesign installed");
        Ok(())
    }

    fn bring_up_toolbox(&mut self, host: &mut HostWindow) -> Result<(), PanelError> {
        let mut controller = PanelController::activate(
            host,
            TOOLBOX_DOCK,
            TOOLBOX_TITLE,
            "showToolbox",
            AnchorEdge::Left,
        )?;
        controller.handle_toggle(host, true);
        controller.refresh_theme(&self.flags);
        self.toolbox = Some(controller);
        Ok(())
    }

    fn bring_up_tool_options(&mut self, host: &mut HostWindow) -> Result<(), PanelError> {
        let mut controller = PanelController::activate(
            host,
            TOOL_OPTIONS_DOCK,
            TOOL_OPTIONS_TITLE,
            "showToolOptions",
            AnchorEdge::Right,
        )?;
        controller.handle_toggle(host, true);
        controller.refresh_theme(&self.flags);
        self.tool_options = Some(controller);
        Ok(())
    }

    pub fn set_flat_theme(&mut self, host: &mut HostWindow, on: bool) {
        self.settings
            .write_setting(SETTINGS_NAMESPACE, "usesFlatTheme", bool_str(on));
        self.flags.flat_theme = on;
        self.rebuild_style_sheet(host);
    }

    pub fn set_thin_document_tabs(&mut self, host: &mut HostWindow, on: bool) {
        self.settings
            .write_setting(SETTINGS_NAMESPACE, "usesThinDocumentTabs", bool_str(on));
        self.flags.thin_document_tabs = on;
        self.rebuild_style_sheet(host);
    }

    /// Toggle the synthetic toolbox. The controller is constructed exactly
    /// once per enable edge and fully torn down on the disable edge.
    pub fn set_toolbox(&mut self, host: &mut HostWindow, on: bool) -> Result<(), PanelError> {
        self.settings
            .write_setting(SETTINGS_NAMESPACE, "usesNuToolbox", bool_str(on));
        self.flags.toolbox = on;
        if on {
            if self.toolbox.is_none() {
                self.bring_up_toolbox(host)?;
            }
        } else if let Some(mut controller) = self.toolbox.take() {
            controller.deactivate(host);
        }
        Ok(())
    }

    /// Toggle the synthetic tool options pad. Refused when the host keeps
    /// its tool options outside a docker; the error carries the user-facing
    /// explanation and must be surfaced, not swallowed.
    pub fn set_tool_options(
        &mut self,
        host: &mut HostWindow,
        on: bool,
    ) -> Result<(), PanelError> {
        if !self.tool_options_in_docker() {
            return Err(PanelError::ToolOptionsOutsideDocker);
        }
        self.settings
            .write_setting(SETTINGS_NAMESPACE, "usesNuToolOptions", bool_str(on));
        self.flags.tool_options = on;
        if on {
            if self.tool_options.is_none() {
                self.bring_up_tool_options(host)?;
            }
        } else if let Some(mut controller) = self.tool_options.take() {
            controller.deactivate(host);
        }
        Ok(())
    }

    /// Route a toggle by the menu action's object name. The signal-wiring
    /// surface for embedding hosts.
    pub fn handle_action_toggled(
        &mut self,
        host: &mut HostWindow,
        object_name: &str,
        checked: bool,
    ) -> Result<(), PanelError> {
        match object_name {
            "flatTheme" => self.set_flat_theme(host, checked),
            "tabHeight" => self.set_thin_document_tabs(host, checked),
            "nuToolbox" => self.set_toolbox(host, checked)?,
            "nuToolOptions" => self.set_tool_options(host, checked)?,
            "showToolbox" => {
                if let Some(controller) = self.toolbox.as_mut() {
                    controller.handle_toggle(host, checked);
                }
            }
            "showToolOptions" => {
                if let Some(controller) = self.tool_options.as_mut() {
                    controller.handle_toggle(host, checked);
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Recompute every injected stylesheet from the current flags and apply
    /// them to the host, the canvas, the auxiliary widgets, and the live
    /// pads.
    pub fn rebuild_style_sheet(&mut self, host: &mut HostWindow) {
        debug!(flags = ?self.flags, "rebuilding stylesheets");
        host.set_style_sheet(styles::full_style_sheet(&self.flags));
        host.set_canvas_style_sheet(styles::canvas_style_sheet(&self.flags));
        host.set_overview_style_sheet(styles::overview_style_sheet(&self.flags));
        host.set_welcome_style_sheet(styles::welcome_style_sheet(&self.flags));
        let flags = self.flags;
        for controller in self.controllers_mut() {
            controller.refresh_theme(&flags);
        }
    }

    /// Host-window-level event routing. Applies viewport changes to the
    /// model first, then lets every live filter observe the event. Never
    /// consumes the event.
    pub fn handle_host_event(&mut self, host: &mut HostWindow, event: &HostEvent) -> bool {
        if let HostEvent::Resized(viewport) = event {
            host.set_viewport(*viewport);
        }
        for controller in self.controllers_mut() {
            controller.on_host_event(host, event);
        }
        false
    }

    /// Sub-document-level event routing, same shape as the host path.
    pub fn handle_subwindow_event(
        &mut self,
        host: &mut HostWindow,
        id: SubwindowId,
        event: &SubwindowEvent,
    ) -> bool {
        match event {
            SubwindowEvent::Resized(bounds) | SubwindowEvent::Moved(bounds) => {
                host.set_subwindow_bounds(id, *bounds);
            }
            SubwindowEvent::Other => {}
        }
        for controller in self.controllers_mut() {
            controller.on_subwindow_event(host, id, event);
        }
        false
    }

    /// The host's sub-document-activation signal.
    pub fn subwindow_activated(&mut self, host: &mut HostWindow, sub: Option<SubwindowId>) {
        host.activate_subwindow(sub);
        if let Some(controller) = self.toolbox.as_mut() {
            controller.on_subwindow_activated(host, sub);
        }
        if let Some(controller) = self.tool_options.as_mut() {
            controller.on_subwindow_activated(host, sub);
        }
    }

    /// Tear down every live panel, restoring the host to its native state.
    pub fn shutdown(&mut self, host: &mut HostWindow) {
        if let Some(mut controller) = self.toolbox.take() {
            controller.deactivate(host);
        }
        if let Some(mut controller) = self.tool_options.take() {
            controller.deactivate(host);
        }
        info!("redesign shut down");
    }

    fn controllers_mut(&mut self) -> impl Iterator<Item = &mut PanelController> {
        self.toolbox.iter_mut().chain(self.tool_options.iter_mut())
    }
}

fn bool_str(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::DockContent;
    use ratatui::layout::Rect;

    fn host() -> HostWindow {
        let mut host = HostWindow::new(Rect {
            x: 0,
            y: 0,
            width: 1000,
            height: 800,
        });
        host.add_dock(
            TOOLBOX_DOCK,
            TOOLBOX_TITLE,
            DockContent::new("Toolbox", vec!["brush".into(), "fill".into()]),
        );
        host.add_dock(
            TOOL_OPTIONS_DOCK,
            TOOL_OPTIONS_TITLE,
            DockContent::new("Tool Options", vec!["opacity".into()]),
        );
        host
    }

    fn settings_with_docker_tool_options() -> SettingsStore {
        let mut settings = SettingsStore::in_memory();
        settings.write_setting("", "ToolOptionsInDocker", "true");
        settings
    }

    #[test]
    fn flags_default_to_enabled() {
        let coordinator = RedesignCoordinator::new(SettingsStore::in_memory());
        assert_eq!(
            *coordinator.flags(),
            RedesignFlags {
                flat_theme: true,
                thin_document_tabs: true,
                toolbox: true,
                tool_options: true,
            }
        );
    }

    #[test]
    fn persisted_false_flags_are_honored() {
        let mut settings = SettingsStore::in_memory();
        settings.write_setting(SETTINGS_NAMESPACE, "usesFlatTheme", "false");
        settings.write_setting(SETTINGS_NAMESPACE, "usesNuToolbox", "false");
        let coordinator = RedesignCoordinator::new(settings);
        assert!(!coordinator.flags().flat_theme);
        assert!(!coordinator.flags().toolbox);
        assert!(coordinator.flags().thin_document_tabs);
    }

    #[test]
    fn install_brings_up_flagged_panels_and_sheets() {
        let mut host = host();
        let mut coordinator = RedesignCoordinator::new(settings_with_docker_tool_options());
        coordinator.install(&mut host).expect("install");

        assert!(coordinator.toolbox().is_some());
        assert!(coordinator.tool_options().is_some());
        assert!(host.style_sheet().contains("QDockWidget"));
        assert!(host.canvas_style_sheet().contains("height: 16px"));
        // both pads shown and themed
        assert!(coordinator.toolbox().unwrap().pad().visible());
        assert!(!coordinator.tool_options().unwrap().pad().style_text().is_empty());
    }

    #[test]
    fn tool_options_skipped_when_not_in_docker() {
        let mut host = host();
        let mut coordinator = RedesignCoordinator::new(SettingsStore::in_memory());
        coordinator.install(&mut host).expect("install");
        assert!(coordinator.tool_options().is_none());
        assert!(coordinator.toolbox().is_some());
    }

    #[test]
    fn tool_options_toggle_outside_docker_is_refused() {
        let mut host = host();
        let mut coordinator = RedesignCoordinator::new(SettingsStore::in_memory());
        coordinator.install(&mut host).expect("install");
        let err = coordinator.set_tool_options(&mut host, true).unwrap_err();
        assert!(matches!(err, PanelError::ToolOptionsOutsideDocker));
        // the flag was not persisted by the refused toggle
        assert_eq!(
            coordinator
                .settings()
                .read_setting(SETTINGS_NAMESPACE, "usesNuToolOptions", "true"),
            "true"
        );
    }

    #[test]
    fn toolbox_toggle_persists_and_tears_down() {
        let mut host = host();
        let dock = host.find_dock(TOOLBOX_DOCK).unwrap();
        let mut coordinator = RedesignCoordinator::new(settings_with_docker_tool_options());
        coordinator.install(&mut host).expect("install");
        assert!(host.dock_content(dock).is_none());

        coordinator.set_toolbox(&mut host, false).expect("toggle off");
        assert!(coordinator.toolbox().is_none());
        assert!(host.dock_content(dock).is_some());
        assert_eq!(
            coordinator
                .settings()
                .read_setting(SETTINGS_NAMESPACE, "usesNuToolbox", "true"),
            "false"
        );
    }

    #[test]
    fn flat_theme_toggle_rebuilds_sheets() {
        let mut host = host();
        let mut coordinator = RedesignCoordinator::new(settings_with_docker_tool_options());
        coordinator.install(&mut host).expect("install");
        coordinator.set_flat_theme(&mut host, false);
        assert!(host.style_sheet().is_empty());
        assert!(host.overview_style_sheet().is_empty());
        coordinator.set_flat_theme(&mut host, true);
        assert!(host.style_sheet().contains("QMenuBar"));
    }

    #[test]
    fn action_toggle_routing_by_object_name() {
        let mut host = host();
        let mut coordinator = RedesignCoordinator::new(settings_with_docker_tool_options());
        coordinator.install(&mut host).expect("install");

        coordinator
            .handle_action_toggled(&mut host, "tabHeight", false)
            .expect("toggle");
        assert!(host.canvas_style_sheet().contains("height: 28px"));

        coordinator
            .handle_action_toggled(&mut host, "showToolbox", false)
            .expect("toggle");
        assert!(!coordinator.toolbox().unwrap().pad().visible());
    }

    #[test]
    fn shutdown_restores_native_state() {
        let mut host = host();
        let toolbox_dock = host.find_dock(TOOLBOX_DOCK).unwrap();
        let docker = host.find_docker_action(TOOLBOX_TITLE).unwrap();
        let mut coordinator = RedesignCoordinator::new(settings_with_docker_tool_options());
        coordinator.install(&mut host).expect("install");
        assert!(!host.action_enabled(docker));

        coordinator.shutdown(&mut host);
        assert!(host.action_enabled(docker));
        assert!(host.dock_content(toolbox_dock).is_some());
        assert!(coordinator.toolbox().is_none());
    }
}

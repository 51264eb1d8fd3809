//! Model of the host window collaborators consumed by the pad subsystem.
//!
//! The real host owns an MDI viewport, dock widgets whose content a pad can
//! borrow, a menu bar with checkable actions, and dynamically created
//! sub-document views. `HostWindow` captures exactly that surface so the
//! overlay machinery can be driven and observed without a live toolkit.

use std::collections::BTreeMap;

use ratatui::layout::Rect;

pub type SubwindowId = usize;
pub type DockId = usize;
pub type ActionId = usize;

/// Events originating from the top-level host window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    /// The MDI viewport was resized; carries the new viewport bounds.
    Resized(Rect),
    /// The host window moved without a size change.
    Moved,
    /// Anything the pad subsystem does not react to.
    Other,
}

/// Events originating from an individual sub-document view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubwindowEvent {
    Resized(Rect),
    Moved(Rect),
    Other,
}

/// The visual content of a dock widget: an owned subtree the pad relocates
/// wholesale and returns untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DockContent {
    pub title: String,
    pub children: Vec<String>,
}

impl DockContent {
    pub fn new(title: impl Into<String>, children: Vec<String>) -> Self {
        Self {
            title: title.into(),
            children,
        }
    }
}

#[derive(Debug)]
struct DockWidget {
    name: String,
    content: Option<DockContent>,
}

/// A menu action. Checkable actions double as feature-enabled flags.
#[derive(Debug, Clone)]
struct MenuAction {
    object_name: String,
    text: String,
    checkable: bool,
    checked: bool,
    enabled: bool,
}

#[derive(Debug, Clone, Copy)]
struct Subwindow {
    bounds: Rect,
}

/// The host window surface the pad subsystem reads and mutates.
#[derive(Debug, Default)]
pub struct HostWindow {
    viewport: Rect,
    docks: Vec<DockWidget>,
    actions: Vec<MenuAction>,
    docker_actions: Vec<ActionId>,
    subwindows: BTreeMap<SubwindowId, Subwindow>,
    next_subwindow: SubwindowId,
    active: Option<SubwindowId>,
    style_sheet: String,
    canvas_style_sheet: String,
    overview_style_sheet: String,
    welcome_style_sheet: String,
}

impl HostWindow {
    pub fn new(viewport: Rect) -> Self {
        Self {
            viewport,
            ..Self::default()
        }
    }

    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Rect) {
        self.viewport = viewport;
    }

    /// Bounds a pad should track: the active sub-document's view clipped to
    /// the viewport, or the bare viewport when no document is open.
    pub fn active_view_bounds(&self) -> Rect {
        match self.active.and_then(|id| self.subwindows.get(&id)) {
            Some(sub) => sub.bounds.intersection(self.viewport),
            None => self.viewport,
        }
    }

    // --- dock widgets ---

    /// Register a native dock widget. Its docker-menu toggle action is
    /// created alongside, mirroring how hosts expose dockers in a menu.
    pub fn add_dock(
        &mut self,
        name: impl Into<String>,
        title: impl Into<String>,
        content: DockContent,
    ) -> DockId {
        let name = name.into();
        let title = title.into();
        let action = self.push_action(MenuAction {
            object_name: format!("docker_{name}"),
            text: title,
            checkable: true,
            checked: true,
            enabled: true,
        });
        self.docker_actions.push(action);
        self.docks.push(DockWidget {
            name,
            content: Some(content),
        });
        self.docks.len() - 1
    }

    pub fn find_dock(&self, name: &str) -> Option<DockId> {
        self.docks.iter().position(|dock| dock.name == name)
    }

    pub fn dock_content(&self, dock: DockId) -> Option<&DockContent> {
        self.docks.get(dock).and_then(|d| d.content.as_ref())
    }

    pub(crate) fn take_dock_content(&mut self, dock: DockId) -> Option<DockContent> {
        self.docks.get_mut(dock).and_then(|d| d.content.take())
    }

    pub(crate) fn restore_dock_content(&mut self, dock: DockId, content: DockContent) {
        if let Some(d) = self.docks.get_mut(dock) {
            d.content = Some(content);
        }
    }

    // --- menu actions ---

    /// Create a menu action, reusing any existing action with the same
    /// object name so repeated feature activations do not pile up duplicates.
    pub fn create_action(&mut self, object_name: &str, text: &str) -> ActionId {
        if let Some(id) = self.find_action(object_name) {
            return id;
        }
        self.push_action(MenuAction {
            object_name: object_name.to_string(),
            text: text.to_string(),
            checkable: false,
            checked: false,
            enabled: true,
        })
    }

    pub fn find_action(&self, object_name: &str) -> Option<ActionId> {
        self.actions
            .iter()
            .position(|a| a.object_name == object_name)
    }

    /// Locate a docker-menu action by its display text. Accelerator
    /// ampersands in the stored text are ignored, as menu text carries them.
    pub fn find_docker_action(&self, title: &str) -> Option<ActionId> {
        self.docker_actions
            .iter()
            .copied()
            .find(|&id| self.actions[id].text.replace('&', "") == title)
    }

    pub fn action_text(&self, id: ActionId) -> &str {
        self.actions
            .get(id)
            .map(|a| a.text.as_str())
            .unwrap_or_default()
    }

    pub fn set_action_checkable(&mut self, id: ActionId, checkable: bool) {
        if let Some(a) = self.actions.get_mut(id) {
            a.checkable = checkable;
        }
    }

    pub fn set_action_checked(&mut self, id: ActionId, checked: bool) {
        if let Some(a) = self.actions.get_mut(id) {
            if a.checkable {
                a.checked = checked;
            }
        }
    }

    pub fn action_checked(&self, id: ActionId) -> bool {
        self.actions.get(id).map(|a| a.checked).unwrap_or(false)
    }

    pub fn set_action_enabled(&mut self, id: ActionId, enabled: bool) {
        if let Some(a) = self.actions.get_mut(id) {
            a.enabled = enabled;
        }
    }

    pub fn action_enabled(&self, id: ActionId) -> bool {
        self.actions.get(id).map(|a| a.enabled).unwrap_or(false)
    }

    fn push_action(&mut self, action: MenuAction) -> ActionId {
        self.actions.push(action);
        self.actions.len() - 1
    }

    // --- sub-document views ---

    pub fn open_subwindow(&mut self, bounds: Rect) -> SubwindowId {
        let id = self.next_subwindow;
        self.next_subwindow += 1;
        self.subwindows.insert(id, Subwindow { bounds });
        id
    }

    pub fn close_subwindow(&mut self, id: SubwindowId) {
        self.subwindows.remove(&id);
        if self.active == Some(id) {
            self.active = None;
        }
    }

    pub fn set_subwindow_bounds(&mut self, id: SubwindowId, bounds: Rect) {
        if let Some(sub) = self.subwindows.get_mut(&id) {
            sub.bounds = bounds;
        }
    }

    pub fn subwindow_bounds(&self, id: SubwindowId) -> Option<Rect> {
        self.subwindows.get(&id).map(|sub| sub.bounds)
    }

    /// Change the active sub-document. `None` means no document is active.
    /// Activating an unknown id is ignored.
    pub fn activate_subwindow(&mut self, id: Option<SubwindowId>) {
        match id {
            Some(id) if self.subwindows.contains_key(&id) => self.active = Some(id),
            Some(_) => {}
            None => self.active = None,
        }
    }

    pub fn active_subwindow(&self) -> Option<SubwindowId> {
        self.active
    }

    // --- injected stylesheets ---

    pub fn set_style_sheet(&mut self, text: String) {
        self.style_sheet = text;
    }

    pub fn style_sheet(&self) -> &str {
        &self.style_sheet
    }

    pub fn set_canvas_style_sheet(&mut self, text: String) {
        self.canvas_style_sheet = text;
    }

    pub fn canvas_style_sheet(&self) -> &str {
        &self.canvas_style_sheet
    }

    pub fn set_overview_style_sheet(&mut self, text: String) {
        self.overview_style_sheet = text;
    }

    pub fn overview_style_sheet(&self) -> &str {
        &self.overview_style_sheet
    }

    pub fn set_welcome_style_sheet(&mut self, text: String) {
        self.welcome_style_sheet = text;
    }

    pub fn welcome_style_sheet(&self) -> &str {
        &self.welcome_style_sheet
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Rect {
        Rect {
            x: 0,
            y: 0,
            width: 100,
            height: 50,
        }
    }

    #[test]
    fn dock_lookup_and_content_round_trip() {
        let mut host = HostWindow::new(viewport());
        let content = DockContent::new("Tool Options", vec!["opacity".into()]);
        let dock = host.add_dock("sharedtooldocker", "Tool Options", content.clone());
        assert_eq!(host.find_dock("sharedtooldocker"), Some(dock));
        assert_eq!(host.find_dock("missing"), None);

        let taken = host.take_dock_content(dock).expect("content present");
        assert!(host.dock_content(dock).is_none());
        host.restore_dock_content(dock, taken);
        assert_eq!(host.dock_content(dock), Some(&content));
    }

    #[test]
    fn docker_action_found_by_title_ignoring_accelerator() {
        let mut host = HostWindow::new(viewport());
        host.add_dock("ToolBox", "Tool&box", DockContent::new("Toolbox", vec![]));
        let id = host.find_docker_action("Toolbox").expect("docker action");
        assert!(host.action_enabled(id));
        assert!(host.find_docker_action("Overview").is_none());
    }

    #[test]
    fn create_action_is_idempotent_per_object_name() {
        let mut host = HostWindow::new(viewport());
        let a = host.create_action("showToolOptions", "Show Tool Options");
        let b = host.create_action("showToolOptions", "Show Tool Options");
        assert_eq!(a, b);
        assert_eq!(host.action_text(a), "Show Tool Options");
    }

    #[test]
    fn checked_ignored_for_non_checkable_actions() {
        let mut host = HostWindow::new(viewport());
        let id = host.create_action("plain", "Plain");
        host.set_action_checked(id, true);
        assert!(!host.action_checked(id));
        host.set_action_checkable(id, true);
        host.set_action_checked(id, true);
        assert!(host.action_checked(id));
    }

    #[test]
    fn active_view_bounds_follow_active_subwindow() {
        let mut host = HostWindow::new(viewport());
        assert_eq!(host.active_view_bounds(), viewport());

        let sub = host.open_subwindow(Rect {
            x: 10,
            y: 10,
            width: 40,
            height: 20,
        });
        host.activate_subwindow(Some(sub));
        assert_eq!(
            host.active_view_bounds(),
            Rect {
                x: 10,
                y: 10,
                width: 40,
                height: 20
            }
        );

        // Bounds larger than the viewport are clipped to it.
        host.set_subwindow_bounds(
            sub,
            Rect {
                x: 0,
                y: 0,
                width: 500,
                height: 500,
            },
        );
        assert_eq!(host.active_view_bounds(), viewport());
    }

    #[test]
    fn closing_active_subwindow_clears_activation() {
        let mut host = HostWindow::new(viewport());
        let sub = host.open_subwindow(viewport());
        host.activate_subwindow(Some(sub));
        assert_eq!(host.active_subwindow(), Some(sub));
        host.close_subwindow(sub);
        assert_eq!(host.active_subwindow(), None);
        // a stale id cannot be re-activated
        host.activate_subwindow(Some(sub));
        assert_eq!(host.active_subwindow(), None);
    }
}

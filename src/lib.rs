//! Synthetic dockable panel overlays ("pads") for multi-document-interface
//! hosts.
//!
//! A pad is a floating panel that visually borrows the content of a native
//! dock widget and stays glued to one edge of the host's MDI viewport. The
//! crate keeps that overlay synchronized as the host resizes, as the active
//! sub-document changes, and as the user toggles feature flags, without
//! touching the host's real docking machinery.
//!
//! The moving parts, leaf first:
//!
//! - [`host::HostWindow`] models the host collaborators: the MDI viewport,
//!   named dock widgets with detachable content, menu actions, and
//!   sub-document views.
//! - [`pads::WidgetPad`] is the overlay itself: anchored geometry, borrowed
//!   content, visibility, and buffer rendering.
//! - [`pads::SubwindowAdjustFilter`] intercepts host and sub-document events
//!   and repositions the pad, never consuming the event.
//! - [`pads::PanelController`] wires one pad and one filter to a named dock
//!   widget and keeps the native docker action disabled while active.
//! - [`coordinator::RedesignCoordinator`] owns the feature flags, creates and
//!   destroys controllers on toggle, and rebuilds the injected stylesheets.

pub mod anchor;
pub mod coordinator;
pub mod host;
pub mod pads;
pub mod settings;
pub mod styles;
pub mod theme;
pub mod tracing_sub;

mod ui;

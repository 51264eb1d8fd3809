//! The floating overlay synchronization subsystem: overlay pads, the event
//! filter that keeps them glued to the active sub-document view, and the
//! per-panel controller that wires both to a named native dock widget.

pub mod controller;
pub mod filter;
pub mod pad;

pub use controller::{PanelController, PanelError};
pub use filter::SubwindowAdjustFilter;
pub use pad::{DEFAULT_PAD_THICKNESS, PadError, WidgetPad};

//! Host - Document Runtime
//!
//! Stands in for the browser side of the custom element contract: mounting,
//! attribute changes, intersection reports and animation frames. Observer and
//! frame callbacks are queued on a channel and delivered by
//! [`Document::flush`], so a component never sees a callback re-entrantly.
//!
//! ```text
//! attribute/setter → re-render
//! observer/frame → HostEvent → channel → flush → handle_event → re-render
//! ```

mod document;
mod event;
mod frame;
mod lifecycle;
mod observer;

pub use document::*;
pub use event::*;
pub use frame::*;
pub use lifecycle::*;
pub use observer::*;

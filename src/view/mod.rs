//! Search, pagination and the event-driven browsing session.
//!
//! [`Session`] ties the pipeline together: every [`Event`] yields a new
//! session record plus a [`RenderPayload`] (visible rows, columns, page
//! descriptor) or an [`ExportPayload`] (serialized text, filename).
//!
//! # Example
//!
//! ```rust
//! use tablescope::view::{Event, Output, Session};
//!
//! let session = Session::default();
//! let (session, _) = session.apply(Event::FileLoaded("name\nAna\nBanana\nCy".into()))?;
//! let (session, output) = session.apply(Event::SearchChanged("ana".into()))?;
//!
//! let Output::Render(payload) = output else { unreachable!() };
//! assert_eq!(payload.rows.len(), 2);
//!
//! let (_, output) = session.apply(Event::ExportRequested)?;
//! let Output::Export(export) = output else { unreachable!() };
//! assert_eq!(export.text, "name\nAna\nBanana");
//! assert_eq!(export.filename, "filtered_data.csv");
//! # Ok::<(), tablescope::Error>(())
//! ```

// Submodule declarations
pub mod pagination;
pub mod render;
pub mod session;

// Re-exports
pub use pagination::{NavIntent, NavLink, PageDescriptor, paginate};
pub use render::{Renderer, TextRenderer};
pub use session::{Event, ExportPayload, Output, RenderPayload, Session};

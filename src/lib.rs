//! Adaptive column layout engine for large tabular views.
//!
//! Given per-column configuration (floor, preferred width, share), user
//! overrides, the live container width, and measured content widths, the
//! engine decides how many pixels each visible column occupies: stably,
//! deterministically, and without ever clobbering an in-progress drag.
//!
//! The pure calculator can be used on its own:
//!
//! ```
//! use gridfit::domain::layout::{ColumnInput, calculate};
//!
//! let columns = vec![ColumnInput {
//!     id: "name".into(),
//!     floor: 80.0,
//!     target: 150.0,
//!     share: 1.0,
//! }];
//! let layout = calculate(&columns, 600.0);
//! assert_eq!(layout.width("name"), Some(600));
//! ```
//!
//! Interactive hosts drive [`app::LayoutEngine`] instead: it owns the resize
//! state machine, content measurement, and the persistence bridge.

pub use gridfit_app as app;
pub use gridfit_domain as domain;
pub use gridfit_infra as infra;

pub use gridfit_app::{Action, Effect, LayoutEngine};
pub use gridfit_domain::{ColumnSpec, Rem, SizingMode};

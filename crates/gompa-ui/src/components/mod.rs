//! Reusable UI components shared by the pages.

mod badge;
mod button;
mod form;
mod modal;
mod section_tabs;

pub use badge::*;
pub use button::*;
pub use form::*;
pub use modal::*;
pub use section_tabs::*;

//! HTML front end of the admin console.
//!
//! [`HtmlDocument`] implements the core `ScreenRenderer` contract by
//! composing localized HTML fragments per region. [`Session`] wires it to a
//! `ScreenController`; the `admin-console` binary uses that to print the
//! page for a given screen.

pub mod components;
pub mod document;
pub mod form;
pub mod i18n;
pub mod session;
pub mod settings;

pub use document::HtmlDocument;
pub use i18n::Language;
pub use session::{Session, Target};
pub use settings::{AppSettings, SettingsError};

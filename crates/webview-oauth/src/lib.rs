//! # webview-oauth
//!
//! The page an external browser shows once it has been redirected back to
//! the application's localhost listener at the end of an OAuth flow.

pub mod redirect_page;

pub use redirect_page::{build_redirect_page, RedirectPage, CLOSE_BROWSER_KEY};

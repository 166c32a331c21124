use std::fmt;

use tracing::debug;
use webview_core::traits::Catalog;

/// Translation key of the message shown on the redirect page.
pub const CLOSE_BROWSER_KEY: &str = "sailfish_components_oauth-la-close_external_browser";

/// Engineering English for [`CLOSE_BROWSER_KEY`].
pub const CLOSE_BROWSER_DEFAULT: &str = "Please close this browser window.";

const HEAD: &str = "HTTP/1.1 200 OK\r\n\
                    Content-Type: text/html\r\n\
                    Connection: close\r\n\r\n\
                    <!DOCTYPE html>\r\n\
                    <html>\n\
                    <head>\n\
                    <style type=text/css>\n\
                    h1 { text-align: center; font-size: 10.0vw; font-family: 'Arial', Helvetica, sans-serif }\n\
                    </style>\n\
                    <body>\n\
                    <h1>\n";

const TAIL: &str = "\n\
                    </h1>\n\
                    </body>\n\
                    </html>\r\n\r\n";

/// Complete HTTP response for the redirect listener to write back.
///
/// Immutable once built; hand the bytes to the socket as they are.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectPage(String);

impl RedirectPage {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for RedirectPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<[u8]> for RedirectPage {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

/// Build the "please close this window" response.
///
/// The localized message is inserted into the HTML without escaping. It must
/// come from the application's own catalog, never from redirect parameters
/// or other outside input.
pub fn build_redirect_page<C>(catalog: &C) -> RedirectPage
where
    C: Catalog + ?Sized,
{
    let message = catalog.translation(CLOSE_BROWSER_KEY).unwrap_or_else(|| {
        debug!("no translation for {CLOSE_BROWSER_KEY}, using engineering English");
        CLOSE_BROWSER_DEFAULT.to_string()
    });

    let mut page = String::with_capacity(HEAD.len() + message.len() + TAIL.len());
    page.push_str(HEAD);
    page.push_str(&message);
    page.push_str(TAIL);
    RedirectPage(page)
}

//! License form rendering and the submission request/response types.

use crate::notices::esc_html;

/// Name of the posted license key field.
pub const LICENSE_KEY_FIELD: &str = "license_key";

/// A submitted license form, with the request context made explicit.
#[derive(Debug, Clone)]
pub struct SubmitRequest {
    /// Posted license key.
    pub license_key: String,
    /// Anti-forgery token posted with the form.
    pub nonce: String,
    /// Referring admin page to return to.
    pub referer: String,
    /// Whether the submitting user may manage add-on settings.
    pub can_manage_options: bool,
}

/// The only response a form submission produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    /// Absolute or admin-relative location to send the browser to.
    pub location: String,
}

impl Redirect {
    /// Redirects back to `location`.
    #[must_use]
    pub fn to(location: &str) -> Self {
        Self {
            location: location.to_string(),
        }
    }
}

/// Renders the license key form for the admin dashboard.
///
/// `post_url` is the admin endpoint the form posts to, `action` the
/// dispatch value the host routes on, and `nonce` a freshly issued token.
#[must_use]
pub fn render_license_form(download_name: &str, post_url: &str, action: &str, nonce: &str) -> String {
    format!(
        concat!(
            "<div class=\"updated\">\n",
            "<form method=\"post\" action=\"{post_url}\">\n",
            "<p>\n",
            "<label style=\"vertical-align: baseline;\" for=\"license_key\">",
            "<strong>{name}</strong> is almost ready. ",
            "Enter your license key to get updates and support.</label>\n",
            "<input id=\"license_key\" class=\"code regular-text\" ",
            "name=\"license_key\" type=\"text\" value=\"\"/>\n",
            "</p>\n",
            "<input type=\"hidden\" name=\"action\" value=\"{action}\"/>\n",
            "<input type=\"hidden\" name=\"nonce\" value=\"{nonce}\"/>\n",
            "<p class=\"submit\">",
            "<input type=\"submit\" class=\"button button-primary\" value=\"Save license key\"/>",
            "</p>\n",
            "</form>\n",
            "</div>\n",
        ),
        post_url = esc_html(post_url),
        name = esc_html(download_name),
        action = esc_html(action),
        nonce = esc_html(nonce),
    )
}

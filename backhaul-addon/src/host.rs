//! The host application seam.
//!
//! The add-on never reaches into host globals; everything it needs from
//! the host backup application comes through this trait.

/// The host backup application this add-on extends.
pub trait Host: Send + Sync {
    /// Version of the installed host application, or `None` when absent.
    fn version(&self) -> Option<String>;

    /// Asks the host to deactivate the named add-on.
    fn deactivate_addon(&self, slug: &str);

    /// Public URL of the site the host runs on.
    fn site_url(&self) -> String;
}

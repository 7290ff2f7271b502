//! License check orchestration.
//!
//! Mirrors the host's admin lifecycle: [`CheckLicense::init`] on page load
//! decides whether the license form must be shown,
//! [`CheckLicense::handle_submit`] consumes the posted form, and the daily
//! gate decides when the store is actually consulted.

use crate::error::AddonError;
use crate::form::{render_license_form, Redirect, SubmitRequest};
use crate::host::Host;
use crate::nonce::NonceFactory;
use crate::notices::Notices;
use backhaul_license::{
    is_expired, CheckGate, Clock, EddClient, LicenseResult, LicenseSettings, LicenseStatus,
    SettingsStore, SystemClock,
};
use std::sync::Arc;
use tracing::{debug, warn};

/// Notice category for daily-check failures.
pub const LICENSE_CHECK_NOTICES: &str = "license_check";

/// Notice category for activation failures.
pub const LICENSE_ACTIVATION_NOTICES: &str = "license_activation";

/// Orchestrates license checks, activation, and the license form.
pub struct CheckLicense {
    edd: EddClient,
    store: Arc<dyn SettingsStore>,
    host: Arc<dyn Host>,
    clock: Arc<dyn Clock>,
    nonces: NonceFactory,
    action: String,
}

impl CheckLicense {
    /// Creates the orchestrator. `prefix` namespaces the form action so
    /// several add-ons can coexist on one host.
    #[must_use]
    pub fn new(
        prefix: &str,
        edd: EddClient,
        store: Arc<dyn SettingsStore>,
        host: Arc<dyn Host>,
    ) -> Self {
        Self {
            edd,
            store,
            host,
            clock: Arc::new(SystemClock),
            nonces: NonceFactory::new(),
            action: format!("backhaul_{prefix}_license_key_submit"),
        }
    }

    /// Replaces the clock. Tests pin expiry classification with this.
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Replaces the nonce factory.
    #[must_use]
    pub fn with_nonces(mut self, nonces: NonceFactory) -> Self {
        self.nonces = nonces;
        self
    }

    /// The dispatch action the license form posts under.
    #[must_use]
    pub fn action(&self) -> &str {
        &self.action
    }

    /// Issues a fresh anti-forgery token for the license form.
    #[must_use]
    pub fn issue_nonce(&self) -> String {
        self.nonces.issue(&self.action)
    }

    /// Admin page load. Returns the rendered license form when no key is
    /// stored or the stored key fails validation.
    pub async fn init(&self, notices: &mut Notices, post_url: &str) -> Option<String> {
        let settings = match self.store.fetch() {
            Ok(settings) => settings,
            Err(err) => {
                warn!(%err, "could not read license settings");
                LicenseSettings::default()
            }
        };

        if settings.is_first_activation()
            || !self.validate_key(&settings.license_key, notices).await
        {
            return Some(self.render_form(post_url));
        }
        None
    }

    /// Renders the license form with a fresh nonce.
    #[must_use]
    pub fn render_form(&self, post_url: &str) -> String {
        render_license_form(
            self.edd.item_name(),
            post_url,
            &self.action,
            &self.issue_nonce(),
        )
    }

    /// Fetches license data from the cache or the store API.
    ///
    /// The API is consulted on first activation and at most once per day
    /// after that; every other call answers from the persisted record.
    pub async fn fetch_license_data(&self, key: &str) -> LicenseResult<LicenseSettings> {
        let stored = self.store.fetch()?;
        let gate = CheckGate::new(self.store.as_ref());

        if stored.is_first_activation() || gate.should_check() {
            debug!("consulting licensing API");
            let response = self.edd.check(key).await?;
            let expired = response
                .expires
                .as_deref()
                .is_some_and(|e| is_expired(e, self.clock.now()));

            self.store.store(&LicenseSettings {
                license_key: key.to_string(),
                license_status: Some(response.license),
                license_expired: expired,
                expiry_date: response.expires,
            })?;
            gate.mark_checked()?;
        }

        self.store.fetch()
    }

    /// Classifies the fetched record, queueing a notice for anything that
    /// keeps the key from counting as valid.
    pub async fn validate_key(&self, key: &str, notices: &mut Notices) -> bool {
        let name = self.edd.item_name().to_string();

        let data = match self.fetch_license_data(key).await {
            Ok(data) => data,
            Err(err) => {
                notices.set_notices(
                    LICENSE_CHECK_NOTICES,
                    vec![format!(
                        "{name} was unable to validate your license key. ({err})"
                    )],
                );
                return false;
            }
        };

        if data
            .license_status
            .is_some_and(LicenseStatus::is_invalid)
        {
            notices.set_notices(
                LICENSE_CHECK_NOTICES,
                vec![format!(
                    "Your {name} license is invalid, please double check it now \
                     to continue to receive updates and support. Thanks!"
                )],
            );
            return false;
        }

        if let Some(expiry) = data.expiry_date.as_deref() {
            if is_expired(expiry, self.clock.now()) {
                notices.set_notices(
                    LICENSE_CHECK_NOTICES,
                    vec![format!(
                        "Your {name} license expired on {expiry}, renew it now \
                         to continue to receive updates and support. Thanks!"
                    )],
                );
                return false;
            }
        }

        true
    }

    /// Activates the stored key for this site.
    ///
    /// A record that is already valid and unexpired never triggers the
    /// outbound call.
    pub async fn activate_license(&self) -> LicenseResult<()> {
        let mut settings = self.store.fetch()?;

        let already_valid = settings
            .license_status
            .is_some_and(LicenseStatus::is_valid)
            && !settings.license_expired;
        if already_valid {
            debug!("license already valid and unexpired, skipping activation");
            return Ok(());
        }

        let response = self
            .edd
            .activate(&settings.license_key, &self.host.site_url())
            .await?;

        settings.license_status = Some(response.license);
        if let Some(expires) = response.expires.as_deref() {
            if !is_expired(expires, self.clock.now()) {
                settings.license_expired = false;
            }
        }
        self.store.store(&settings)
    }

    /// Handles the posted license form. Always ends in a redirect.
    ///
    /// An unauthorized request (bad nonce or missing capability) redirects
    /// without touching any state.
    pub async fn handle_submit(&self, req: SubmitRequest, notices: &mut Notices) -> Redirect {
        let redirect = Redirect::to(&req.referer);

        if let Err(err) = self.authorize(&req) {
            warn!(%err, "license form submission rejected");
            return redirect;
        }

        let key = req.license_key.trim().to_string();
        if key.is_empty() {
            return redirect;
        }

        if let Err(err) = self.store.clear_license() {
            warn!(%err, "could not clear license settings");
            return redirect;
        }
        notices.clear_all();

        if self.validate_key(&key, notices).await {
            if let Err(err) = self.activate_license().await {
                notices.set_notices(
                    LICENSE_ACTIVATION_NOTICES,
                    vec![format!("Unable to activate license: ({err})")],
                );
            }
        } else if let Err(err) = self.store.clear_license() {
            warn!(%err, "could not clear license settings");
        }

        redirect
    }

    fn authorize(&self, req: &SubmitRequest) -> Result<(), AddonError> {
        if !self.nonces.verify(&self.action, &req.nonce) {
            return Err(AddonError::Unauthorized("invalid nonce"));
        }
        if !req.can_manage_options {
            return Err(AddonError::Unauthorized("insufficient capability"));
        }
        Ok(())
    }
}

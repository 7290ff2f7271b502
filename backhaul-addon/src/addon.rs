//! The add-on facade: caller-owned lifecycle over the gate, the license
//! check, and the notice registry.
//!
//! Host frameworks fire callbacks at fixed points; here those points are
//! explicit methods the embedding calls: [`Addon::init`] at host init,
//! [`Addon::on_request`] for each admin render pass, and
//! [`Addon::on_submit`] for a posted license form.

use crate::check::CheckLicense;
use crate::error::AddonResult;
use crate::form::{Redirect, SubmitRequest};
use crate::gate::{AddonConfig, AddonState, CompatibilityGate};
use crate::host::Host;
use crate::notices::Notices;
use crate::updater::PluginUpdater;
use backhaul_license::{EddClient, EddConfig, SettingsStore};
use std::sync::Arc;

/// One licensed add-on wired to its host.
pub struct Addon {
    config: AddonConfig,
    edd: EddClient,
    gate: CompatibilityGate,
    check: CheckLicense,
    notices: Notices,
    store: Arc<dyn SettingsStore>,
}

impl Addon {
    /// Wires the add-on to its host and settings slot.
    #[must_use]
    pub fn new(
        config: AddonConfig,
        edd_config: EddConfig,
        store: Arc<dyn SettingsStore>,
        host: Arc<dyn Host>,
    ) -> Self {
        let edd = EddClient::new(edd_config);
        let gate = CompatibilityGate::new(config.clone(), Arc::clone(&host));
        let check = CheckLicense::new(
            &config.prefix,
            edd.clone(),
            Arc::clone(&store),
            Arc::clone(&host),
        );

        Self {
            config,
            edd,
            gate,
            check,
            notices: Notices::new(),
            store,
        }
    }

    /// Host-init lifecycle point: runs the compatibility gate.
    pub fn init(&mut self) -> AddonState {
        self.gate.maybe_self_deactivate(&mut self.notices)
    }

    /// Admin render pass: pending notices, plus the license form when the
    /// stored key is missing or does not validate.
    pub async fn on_request(&mut self, post_url: &str) -> String {
        if self.gate.state() == AddonState::Deactivated {
            return self.notices.render();
        }

        let form = self.check.init(&mut self.notices, post_url).await;
        let mut html = self.notices.render();
        if let Some(form) = form {
            html.push_str(&form);
        }
        html
    }

    /// Form submission lifecycle point. Always answers with a redirect.
    pub async fn on_submit(&mut self, req: SubmitRequest) -> Redirect {
        self.check.handle_submit(req, &mut self.notices).await
    }

    /// Builds the update lookup for this add-on.
    #[must_use]
    pub fn updater(&self) -> PluginUpdater {
        PluginUpdater::new(self.edd.clone(), &self.config.plugin_version)
    }

    /// Deactivation cleanup: removes the settings slot and the daily flag.
    pub fn deactivate(&self) -> AddonResult<()> {
        self.gate.deactivate(self.store.as_ref())
    }

    /// Pending notices.
    #[must_use]
    pub fn notices(&self) -> &Notices {
        &self.notices
    }

    /// The license-check orchestrator.
    #[must_use]
    pub fn check(&self) -> &CheckLicense {
        &self.check
    }

    /// The compatibility gate.
    #[must_use]
    pub fn gate(&self) -> &CompatibilityGate {
        &self.gate
    }
}

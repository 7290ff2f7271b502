mod common;

use backhaul_addon::{AddonState, CompatibilityGate, Notices};
use backhaul_license::{MemoryStore, SettingsStore, DAILY_CHECK_FLAG};
use common::{addon_config, valid_settings, FakeHost};
use std::sync::Arc;
use std::time::Duration;

#[test]
fn compatible_host_stays_active() {
    let host = Arc::new(FakeHost::compatible());
    let mut gate = CompatibilityGate::new(addon_config(), host.clone());
    let mut notices = Notices::new();

    assert_eq!(gate.maybe_self_deactivate(&mut notices), AddonState::Active);
    assert!(host.deactivations().is_empty());
    assert!(notices.is_empty());
}

#[test]
fn exact_minimum_version_is_compatible() {
    let host = Arc::new(FakeHost::with_version(Some("3.1.4")));
    let gate = CompatibilityGate::new(addon_config(), host);
    assert!(gate.meets_requirements());
}

#[test]
fn missing_host_deactivates() {
    let host = Arc::new(FakeHost::with_version(None));
    let mut gate = CompatibilityGate::new(addon_config(), host.clone());
    let mut notices = Notices::new();

    assert_eq!(
        gate.maybe_self_deactivate(&mut notices),
        AddonState::Deactivated
    );
    assert_eq!(gate.state(), AddonState::Deactivated);
    assert_eq!(host.deactivations(), vec!["backhaul-s3".to_string()]);
}

#[test]
fn outdated_host_deactivates_with_a_notice() {
    let host = Arc::new(FakeHost::with_version(Some("3.1.3")));
    let mut gate = CompatibilityGate::new(addon_config(), host.clone());
    let mut notices = Notices::new();

    gate.maybe_self_deactivate(&mut notices);

    let pending = notices.all();
    assert_eq!(pending.len(), 1);
    assert!(pending[0].contains("Backhaul S3 Add-on"));
    assert!(pending[0].contains("3.1.4"));
}

#[test]
fn deactivation_is_one_way() {
    let host = Arc::new(FakeHost::with_version(None));
    let mut gate = CompatibilityGate::new(addon_config(), host.clone());
    let mut notices = Notices::new();

    gate.maybe_self_deactivate(&mut notices);
    gate.maybe_self_deactivate(&mut notices);

    // The host was only asked once.
    assert_eq!(host.deactivations().len(), 1);
    assert_eq!(gate.state(), AddonState::Deactivated);
}

#[test]
fn deactivate_cleans_the_settings_slot() {
    let store = MemoryStore::new();
    store.store(&valid_settings()).unwrap();
    store
        .set_flag(DAILY_CHECK_FLAG, Duration::from_secs(60))
        .unwrap();

    let gate = CompatibilityGate::new(addon_config(), Arc::new(FakeHost::compatible()));
    gate.deactivate(&store).unwrap();

    assert!(store.fetch().unwrap().is_first_activation());
    assert!(!store.flag(DAILY_CHECK_FLAG));
}

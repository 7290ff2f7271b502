mod common;

use backhaul_addon::NonceFactory;
use common::{epoch, StepClock};
use std::sync::Arc;
use std::time::Duration;

const ACTION: &str = "backhaul_s3_license_key_submit";

fn factory(clock: StepClock) -> NonceFactory {
    NonceFactory::with_parts([7u8; 32], Arc::new(clock))
}

#[test]
fn issued_token_verifies() {
    let factory = NonceFactory::new();
    let token = factory.issue(ACTION);
    assert!(factory.verify(ACTION, &token));
}

#[test]
fn token_is_short_hex() {
    let token = NonceFactory::new().issue(ACTION);
    assert_eq!(token.len(), 10);
    assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn token_is_bound_to_the_action() {
    let factory = NonceFactory::new();
    let token = factory.issue(ACTION);
    assert!(!factory.verify("backhaul_other_license_key_submit", &token));
}

#[test]
fn tampered_token_fails() {
    let factory = NonceFactory::new();
    let mut token = factory.issue(ACTION);
    token.replace_range(0..1, "x");
    assert!(!factory.verify(ACTION, &token));
}

#[test]
fn different_secrets_issue_different_tokens() {
    let clock = StepClock::at(epoch());
    let a = NonceFactory::with_parts([1u8; 32], Arc::new(clock.clone()));
    let b = NonceFactory::with_parts([2u8; 32], Arc::new(clock));
    assert_ne!(a.issue(ACTION), b.issue(ACTION));
}

#[test]
fn previous_window_is_still_accepted() {
    let clock = StepClock::at(epoch());
    let factory = factory(clock.clone());

    let token = factory.issue(ACTION);
    clock.advance(Duration::from_secs(13 * 60 * 60));
    assert!(factory.verify(ACTION, &token));
}

#[test]
fn token_expires_after_two_windows() {
    let clock = StepClock::at(epoch());
    let factory = factory(clock.clone());

    let token = factory.issue(ACTION);
    clock.advance(Duration::from_secs(25 * 60 * 60));
    assert!(!factory.verify(ACTION, &token));
}

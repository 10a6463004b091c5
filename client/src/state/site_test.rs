use super::*;

fn public() -> PublicEmailConfig {
    PublicEmailConfig { service_id: "s".into(), template_id: "t".into(), public_key: "p".into() }
}

#[test]
fn site_state_default_is_loading() {
    assert_eq!(SiteState::default(), SiteState::Loading);
    assert!(SiteState::default().email_config().is_none());
}

#[test]
fn site_state_ready_exposes_config() {
    let state = SiteState::Ready(public());
    assert_eq!(state.email_config(), Some(&public()));
    assert_eq!(state.status_text(), "");
}

#[test]
fn site_state_unavailable_hides_reason_from_status_text() {
    let state = SiteState::Unavailable("site config request failed: 500".into());
    assert!(state.email_config().is_none());
    assert!(!state.status_text().contains("500"));
}

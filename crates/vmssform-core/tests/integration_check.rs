//! Integration test: controller plus the real HTTP check against a local server.
//!
//! Starts a minimal check server, drives the controller through the form
//! operations and asserts the radio outcome and the query that reached the
//! wire.

mod common;

use std::sync::Arc;
use url::Url;
use vmssform_core::check::HttpCheck;
use vmssform_core::config::VmssformConfig;
use vmssform_core::form::{FormPanel, ImageType};
use vmssform_core::selector::ImageTypeSelector;

fn selector_for(url: &str) -> ImageTypeSelector {
    let cfg = VmssformConfig {
        connect_timeout_secs: 2,
        request_timeout_secs: 4,
        ..VmssformConfig::default()
    };
    let endpoint = Url::parse(url).expect("server url");
    ImageTypeSelector::new(FormPanel::new(), Some(endpoint), Arc::new(HttpCheck::new(&cfg)))
}

async fn fill_and_check(selector: &ImageTypeSelector) -> anyhow::Result<()> {
    selector.on_credentials_changed("cred-1");
    selector.on_resource_group_changed("rg-1");
    selector.on_name_changed("vmss-1").await
}

#[tokio::test]
async fn true_body_selects_custom_over_http() {
    let server = common::check_server::start("true");
    let selector = selector_for(&server.url);

    fill_and_check(&selector).await.expect("check should succeed");

    {
        let panel = selector.panel();
        let panel = panel.lock().unwrap();
        assert_eq!(panel.image_type.snapshot().selected(), Some(ImageType::Custom));
        assert!(!panel.spinner.is_visible());
    }

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].contains("azureCredentialsId=cred-1"));
    assert!(requests[0].contains("resourceGroup=rg-1"));
    assert!(requests[0].contains("name=vmss-1"));
}

#[tokio::test]
async fn false_body_selects_official_over_http() {
    let server = common::check_server::start("false");
    let selector = selector_for(&server.url);

    fill_and_check(&selector).await.expect("check should succeed");

    let panel = selector.panel();
    let panel = panel.lock().unwrap();
    let snap = panel.image_type.snapshot();
    assert_eq!(snap.selected(), Some(ImageType::Official));
    assert!(snap.custom.disabled);
    assert!(!panel.spinner.is_visible());
}

#[tokio::test]
async fn server_error_leaves_spinner_visible() {
    let server = common::check_server::start_with_status(500, "boom");
    let selector = selector_for(&server.url);

    let result = fill_and_check(&selector).await;

    assert!(result.is_err());
    let panel = selector.panel();
    let panel = panel.lock().unwrap();
    assert!(panel.spinner.is_visible());
    let snap = panel.image_type.snapshot();
    assert_eq!(snap.selected(), Some(ImageType::Official));
    assert!(!snap.custom.disabled);
}

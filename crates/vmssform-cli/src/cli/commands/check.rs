//! `vmssform check` – one-shot image-type check.

use anyhow::{bail, Context, Result};
use std::sync::Arc;
use url::Url;
use vmssform_core::check::HttpCheck;
use vmssform_core::config::VmssformConfig;
use vmssform_core::form::FormPanel;
use vmssform_core::selector::ImageTypeSelector;

pub async fn run_check(
    cfg: &VmssformConfig,
    credentials_id: &str,
    resource_group: &str,
    name: &str,
    check_url: Option<&str>,
) -> Result<()> {
    if credentials_id.is_empty() || resource_group.is_empty() || name.is_empty() {
        bail!("credentials id, resource group and name must not be empty");
    }
    let endpoint = resolve_check_url(cfg, check_url)?;

    let check = Arc::new(HttpCheck::new(cfg));
    let selector = ImageTypeSelector::new(FormPanel::new(), Some(endpoint), check);

    selector.on_credentials_changed(credentials_id);
    selector.on_resource_group_changed(resource_group);
    selector.on_name_changed(name).await?;

    let panel = selector.panel();
    let panel = panel.lock().unwrap();
    match panel.image_type.snapshot().selected() {
        Some(image_type) => println!("{}", image_type),
        None => bail!("check completed without an image-type selection"),
    }

    Ok(())
}

/// The endpoint for this invocation: the override wins, then the configured
/// default; having neither is an error for a one-shot check.
fn resolve_check_url(cfg: &VmssformConfig, check_url: Option<&str>) -> Result<Url> {
    let raw = check_url
        .map(str::to_string)
        .or_else(|| cfg.check_url.clone())
        .context("no check endpoint: pass --check-url or set check_url in the config")?;
    Url::parse(&raw).with_context(|| format!("invalid check endpoint '{raw}'"))
}

//! Image-type selection controller for the configuration panel.
//!
//! Wires field edits to the async check: a credentials edit resets the
//! resource group and name, a resource-group edit resets the name, and a
//! name edit (or panel load) triggers a check that toggles the image-type
//! radios. Each issued check carries a generation number; a response that is
//! no longer the latest issued is discarded on arrival.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use anyhow::Result;
use url::Url;

use crate::check::{CheckQuery, ImageTypeCheck};
use crate::form::{FormPanel, ImageType};

/// Keeps the image-type radio selection consistent with the current
/// (credentials, resource group, name) triple by querying the injected
/// check capability.
#[derive(Clone)]
pub struct ImageTypeSelector {
    panel: Arc<Mutex<FormPanel>>,
    check_url: Option<Url>,
    check: Arc<dyn ImageTypeCheck>,
    generation: Arc<AtomicU64>,
}

impl ImageTypeSelector {
    /// Builds the controller from explicit handles: the widget panel, the
    /// check endpoint (absent means checks are skipped), and the check
    /// capability.
    pub fn new(panel: FormPanel, check_url: Option<Url>, check: Arc<dyn ImageTypeCheck>) -> Self {
        Self {
            panel: Arc::new(Mutex::new(panel)),
            check_url,
            check,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Shared handle to the panel, for hosts that render it.
    pub fn panel(&self) -> Arc<Mutex<FormPanel>> {
        Arc::clone(&self.panel)
    }

    /// Credentials edit: store the value, reset resource group and name.
    /// No check is issued.
    pub fn on_credentials_changed(&self, value: &str) {
        let mut panel = self.panel.lock().unwrap();
        if let Some(credentials) = panel.credentials.as_mut() {
            credentials.set(value);
        }
        if let Some(resource_group) = panel.resource_group.as_mut() {
            resource_group.clear();
        }
        panel.name.clear();
    }

    /// Resource-group edit: store the value, reset the name only.
    /// No check is issued.
    pub fn on_resource_group_changed(&self, value: &str) {
        let mut panel = self.panel.lock().unwrap();
        if let Some(resource_group) = panel.resource_group.as_mut() {
            resource_group.set(value);
        }
        panel.name.clear();
    }

    /// Name edit: store the value and run a check.
    pub async fn on_name_changed(&self, value: &str) -> Result<()> {
        self.panel.lock().unwrap().name.set(value);
        self.select_image_type().await
    }

    /// The eager check a host runs once when it attaches the controller to a
    /// freshly loaded panel.
    pub async fn initial_check(&self) -> Result<()> {
        self.select_image_type().await
    }

    /// Fire-and-forget check for hosts driving real event loops; failures
    /// are already logged by the check path.
    pub fn spawn_check(&self) -> tokio::task::JoinHandle<()> {
        let this = self.clone();
        tokio::spawn(async move {
            let _ = this.select_image_type().await;
        })
    }

    async fn select_image_type(&self) -> Result<()> {
        let query = {
            let panel = self.panel.lock().unwrap();
            current_query(&panel)
        };
        let (Some(query), Some(endpoint)) = (query, self.check_url.clone()) else {
            return Ok(());
        };

        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.panel.lock().unwrap().spinner.show();

        match self.check.is_custom_image(&endpoint, &query).await {
            Ok(body) => {
                if self.generation.load(Ordering::SeqCst) != generation {
                    tracing::debug!(generation, "discarding stale image-type response");
                    return Ok(());
                }
                let image_type = ImageType::from_check_body(&body);
                tracing::info!("scale set {} uses {} image", query.name, image_type);

                let mut panel = self.panel.lock().unwrap();
                panel.spinner.hide();
                panel.image_type.select(image_type);
                panel.image_type.refresh();
                Ok(())
            }
            Err(err) => {
                // Spinner stays visible; no radio changes.
                tracing::warn!("image-type check for {} failed: {:#}", query.name, err);
                Err(err)
            }
        }
    }
}

/// Builds the query triple if every precondition holds: a non-empty name and
/// non-empty credentials and resource-group values. An absent field never
/// satisfies its precondition, so panels without one never issue checks.
fn current_query(panel: &FormPanel) -> Option<CheckQuery> {
    let credentials = panel.credentials.as_ref().filter(|f| !f.is_empty())?;
    let resource_group = panel.resource_group.as_ref().filter(|f| !f.is_empty())?;
    if panel.name.is_empty() {
        return None;
    }
    Some(CheckQuery {
        credentials_id: credentials.value().to_string(),
        resource_group: resource_group.value().to_string(),
        name: panel.name.value().to_string(),
    })
}

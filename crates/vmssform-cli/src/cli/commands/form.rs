//! `vmssform form` – interactive form session on stdin.
//!
//! Line protocol mirroring the panel's event wiring: editing credentials
//! resets group and name, editing the group resets the name, editing the
//! name runs the check. The refresh hook prints the radio row whenever a
//! completed check changes it.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::io::{self, BufRead};
use std::sync::Arc;
use url::Url;
use vmssform_core::check::HttpCheck;
use vmssform_core::config::VmssformConfig;
use vmssform_core::form::{FormPanel, RadioFlags, RadioSnapshot};
use vmssform_core::selector::ImageTypeSelector;

pub async fn run_form(cfg: &VmssformConfig, check_url: Option<&str>) -> Result<()> {
    let endpoint = optional_check_url(cfg, check_url)?;
    if endpoint.is_none() {
        println!("no check endpoint configured; image-type checks are skipped");
    }

    let check = Arc::new(HttpCheck::new(cfg));
    let selector = ImageTypeSelector::new(FormPanel::new(), endpoint, check);
    {
        let panel = selector.panel();
        panel.lock().unwrap().image_type.set_refresh_hook(|snap| {
            println!("image type: {}", render_radios(snap));
        });
    }

    if let Err(err) = selector.initial_check().await {
        eprintln!("check failed: {err:#}");
    }

    print_help();
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("reading stdin")?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let (command, arg) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        match command {
            "credentials" => selector.on_credentials_changed(arg),
            "group" => selector.on_resource_group_changed(arg),
            "name" => {
                if let Err(err) = selector.on_name_changed(arg).await {
                    eprintln!("check failed: {err:#}");
                }
            }
            "image" => set_reference_field(&selector, arg),
            "show" => render_panel(&selector),
            "done" => {
                print_reference(&selector);
                break;
            }
            "quit" | "exit" => break,
            "help" => print_help(),
            _ => println!("unknown command '{}'; try 'help'", command),
        }
    }

    Ok(())
}

/// The endpoint for this session, if any; the form works without one, it
/// just never checks.
fn optional_check_url(cfg: &VmssformConfig, check_url: Option<&str>) -> Result<Option<Url>> {
    match check_url.map(str::to_string).or_else(|| cfg.check_url.clone()) {
        Some(raw) => {
            let url = Url::parse(&raw).with_context(|| format!("invalid check endpoint '{raw}'"))?;
            Ok(Some(url))
        }
        None => Ok(None),
    }
}

fn set_reference_field(selector: &ImageTypeSelector, arg: &str) {
    let (field, value) = match arg.split_once(char::is_whitespace) {
        Some((field, value)) => (field, value.trim()),
        None => (arg, ""),
    };
    let panel = selector.panel();
    let mut panel = panel.lock().unwrap();
    let target = match field {
        "id" => &mut panel.reference.id,
        "publisher" => &mut panel.reference.publisher,
        "offer" => &mut panel.reference.offer,
        "sku" => &mut panel.reference.sku,
        "version" => &mut panel.reference.version,
        _ => {
            println!("unknown image field '{}'", field);
            return;
        }
    };
    target.set(value);
}

fn render_panel(selector: &ImageTypeSelector) {
    let panel = selector.panel();
    let panel = panel.lock().unwrap();
    let credentials = panel.credentials.as_ref().map(|f| f.value());
    let resource_group = panel.resource_group.as_ref().map(|f| f.value());
    println!("credentials:    {}", value_or_dash(credentials));
    println!("resource group: {}", value_or_dash(resource_group));
    println!("name:           {}", value_or_dash(Some(panel.name.value())));
    println!(
        "spinner:        {}",
        if panel.spinner.is_visible() { "busy" } else { "idle" }
    );
    println!("image type:     {}", render_radios(panel.image_type.snapshot()));
}

/// Prints the effective image reference: the sub-fields the active radio
/// enables, `${VAR}` placeholders expanded from the process environment.
fn print_reference(selector: &ImageTypeSelector) {
    let env: HashMap<String, String> = std::env::vars().collect();
    let panel = selector.panel();
    let panel = panel.lock().unwrap();
    match panel.effective_reference() {
        Some(reference) => {
            let resolved = reference.resolved(&env);
            println!("image reference:");
            print_field("id", &resolved.id);
            print_field("publisher", &resolved.publisher);
            print_field("offer", &resolved.offer);
            print_field("sku", &resolved.sku);
            print_field("version", &resolved.version);
        }
        None => println!("no image type selected"),
    }
}

fn print_field(label: &str, value: &Option<String>) {
    println!("  {:<10} {}", label, value.as_deref().unwrap_or("-"));
}

fn value_or_dash(value: Option<&str>) -> &str {
    match value {
        Some("") | None => "-",
        Some(value) => value,
    }
}

fn render_radios(snap: RadioSnapshot) -> String {
    format!(
        "{}  {}",
        render_radio(snap.official, "official"),
        render_radio(snap.custom, "custom")
    )
}

fn render_radio(flags: RadioFlags, value: &str) -> String {
    let mark = if flags.checked { "*" } else { " " };
    let state = if flags.disabled { " (disabled)" } else { "" };
    format!("({}) {}{}", mark, value, state)
}

fn print_help() {
    println!("commands:");
    println!("  credentials <id>   set credentials (resets group and name)");
    println!("  group <name>       set resource group (resets name)");
    println!("  name <name>        set scale set name (runs the check)");
    println!("  image <field> <v>  set an image reference field (id, publisher, offer, sku, version)");
    println!("  show               render the panel");
    println!("  done               print the effective image reference and exit");
    println!("  quit               exit without printing");
}

//! Fetches one record from a YaaS service.
//!
//! Configure the project through `YAAS_CLIENT_ID`, `YAAS_CLIENT_SECRET`,
//! `YAAS_ORGANIZATION`, `YAAS_SERVICE`, `YAAS_VERSION` and `YAAS_ZONE` (`eu` or `us`),
//! then run `cargo run --example get_data [path]`.
use anyhow::{Context, Result};
use log::info;
use std::env;
use yaas_sdk::{Client, ProjectConfig, Yaas, Zone};

fn var(name: &str) -> Result<String> {
    env::var(name).with_context(|| format!("{} is not set", name))
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let zone: Zone = env::var("YAAS_ZONE")
        .unwrap_or_else(|_| "eu".to_string())
        .parse()?;
    let project = ProjectConfig::builder()
        .with_client_id(var("YAAS_CLIENT_ID")?)
        .with_client_secret(var("YAAS_CLIENT_SECRET")?)
        .with_organization(var("YAAS_ORGANIZATION")?)
        .with_service(var("YAAS_SERVICE")?)
        .with_version(env::var("YAAS_VERSION").unwrap_or_else(|_| "v1".to_string()))
        .with_zone(zone)
        .build();

    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| "data/getData/5313".to_string());

    let client = Yaas::new(project)?;
    info!("Requesting '{}' in zone {}", path, zone);

    let response = client.get(&path).await?;
    println!("{}", response.status());
    println!("{}", response.text().await?);

    Ok(())
}

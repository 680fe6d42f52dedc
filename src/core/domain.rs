use std::env;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use tracing::warn;

// Identifiable defines common traits that can be shared by catalog records
pub trait Identifiable: Sync + Send {
    fn id(&self) -> String;
}

// Runtime selects how the catalog binary serves its router
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub enum Runtime {
    Http,
    Lambda,
}

impl From<String> for Runtime {
    fn from(s: String) -> Self {
        match s.to_lowercase().as_str() {
            "lambda" => Runtime::Lambda,
            _ => Runtime::Http,
        }
    }
}

// Configuration abstracts config options for the catalog service
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub branch_id: String,
    pub cache_enabled: bool,
    // entries older than this are reloaded from the store; None keeps them until evicted
    pub cache_ttl_secs: Option<i64>,
    pub bind_addr: String,
    pub runtime: Runtime,
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            cache_enabled: true,
            cache_ttl_secs: None,
            bind_addr: "0.0.0.0:8080".to_string(),
            runtime: Runtime::Http,
        }
    }

    pub fn from_env() -> Self {
        let branch = env::var("CATALOG_BRANCH").unwrap_or_else(|_| "dev".to_string());
        let mut config = Configuration::new(branch.as_str());
        if let Some(enabled) = parse_env::<bool>("CATALOG_CACHE_ENABLED") {
            config.cache_enabled = enabled;
        }
        config.cache_ttl_secs = parse_env::<i64>("CATALOG_CACHE_TTL_SECS").filter(|ttl| *ttl > 0);
        if let Ok(addr) = env::var("CATALOG_BIND_ADDR") {
            config.bind_addr = addr;
        }
        if let Ok(runtime) = env::var("CATALOG_RUNTIME") {
            config.runtime = Runtime::from(runtime);
        }
        config
    }
}

fn parse_env<T: FromStr>(name: &str) -> Option<T> {
    let raw = env::var(name).ok()?;
    match raw.trim().parse::<T>() {
        Ok(val) => Some(val),
        Err(_) => {
            warn!("ignoring invalid value {:?} for {}", raw, name);
            None
        }
    }
}

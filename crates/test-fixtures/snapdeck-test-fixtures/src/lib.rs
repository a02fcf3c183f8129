use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::Deserialize;

static MANIFEST: Lazy<Manifest> = Lazy::new(|| {
    let raw = include_str!("../../../../fixtures/manifest.json");
    serde_json::from_str(raw).expect("fixtures manifest should parse")
});

#[derive(Debug, Deserialize)]
struct Manifest {
    cards: HashMap<String, String>,
    carousels: HashMap<String, String>,
}

fn fixtures_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../../fixtures")
}

fn resolve_path(rel: &str) -> PathBuf {
    fixtures_root().join(rel)
}

fn read_to_string(rel: &str) -> Result<String> {
    let path = resolve_path(rel);
    fs::read_to_string(&path)
        .with_context(|| format!("failed to read fixture at {}", path.display()))
}

fn load_json<T: DeserializeOwned>(rel: &str) -> Result<T> {
    let text = read_to_string(rel)?;
    serde_json::from_str(&text).with_context(|| format!("failed to parse JSON fixture {rel}"))
}

fn lookup<'a>(map: &'a HashMap<String, String>, kind: &str, name: &str) -> Result<&'a str> {
    map.get(name)
        .map(String::as_str)
        .ok_or_else(|| anyhow!("unknown {kind} fixture '{name}'"))
}

/// Card payloads shaped like the mock `/cards` endpoint.
pub mod cards {
    use super::*;

    pub fn keys() -> Vec<String> {
        MANIFEST.cards.keys().cloned().collect()
    }

    pub fn json(name: &str) -> Result<String> {
        read_to_string(lookup(&MANIFEST.cards, "cards", name)?)
    }

    pub fn load<T: DeserializeOwned>(name: &str) -> Result<T> {
        super::load_json(lookup(&MANIFEST.cards, "cards", name)?)
    }

    pub fn path(name: &str) -> Result<PathBuf> {
        Ok(resolve_path(lookup(&MANIFEST.cards, "cards", name)?))
    }
}

/// Carousel setups: `{ "data_len": n, "config": { .. } }`.
pub mod carousels {
    use super::*;

    /// A carousel fixture with its config left as raw JSON so callers parse
    /// it with their own config type.
    #[derive(Debug, Clone, Deserialize)]
    pub struct CarouselFixture {
        pub data_len: usize,
        pub config: serde_json::Value,
    }

    impl CarouselFixture {
        pub fn config_json(&self) -> String {
            self.config.to_string()
        }
    }

    pub fn keys() -> Vec<String> {
        MANIFEST.carousels.keys().cloned().collect()
    }

    pub fn json(name: &str) -> Result<String> {
        read_to_string(lookup(&MANIFEST.carousels, "carousel", name)?)
    }

    pub fn load(name: &str) -> Result<CarouselFixture> {
        super::load_json(lookup(&MANIFEST.carousels, "carousel", name)?)
    }

    pub fn path(name: &str) -> Result<PathBuf> {
        Ok(resolve_path(lookup(&MANIFEST.carousels, "carousel", name)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_manifest_entry_resolves() {
        for key in cards::keys() {
            assert!(cards::path(&key).unwrap().exists(), "missing cards fixture {key}");
        }
        for key in carousels::keys() {
            let fixture = carousels::load(&key).unwrap();
            assert!(fixture.config.is_object(), "{key} config should be an object");
        }
    }

    #[test]
    fn unknown_fixture_is_an_error() {
        let err = carousels::load("does-not-exist").unwrap_err();
        assert!(err.to_string().contains("does-not-exist"));
    }
}

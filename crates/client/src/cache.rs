//! Local snapshot of the location → spaces layout.
//!
//! The snapshot holds static layout only (never live availability) and is replaced wholesale on
//! every refresh. Reads are best effort: anything unreadable is treated as "no cache".

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use crate::client::SeatsurfingClient;
use crate::error::Result;
use crate::models::{Location, Space};

/// Source of the layout hierarchy that a refresh walks.
#[async_trait]
pub trait SpaceDirectory: Send {
    async fn locations(&mut self) -> Result<Vec<Location>>;
    async fn spaces(&mut self, location_id: &str) -> Result<Vec<Space>>;
}

#[async_trait]
impl SpaceDirectory for SeatsurfingClient {
    async fn locations(&mut self) -> Result<Vec<Location>> {
        self.get_locations().await
    }

    async fn spaces(&mut self, location_id: &str) -> Result<Vec<Space>> {
        self.get_spaces(location_id).await
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CachedLocation {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub updated_at: DateTime<Utc>,
    pub locations: Vec<CachedLocation>,
    pub spaces: BTreeMap<String, Vec<Space>>,
}

impl Snapshot {
    pub fn total_spaces(&self) -> usize {
        self.spaces.values().map(Vec::len).sum()
    }

    pub fn spaces_for(&self, location_id: &str) -> &[Space] {
        self.spaces
            .get(location_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn location_name(&self, location_id: &str) -> Option<&str> {
        self.locations
            .iter()
            .find(|location| location.id == location_id)
            .map(|location| location.name.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct SpaceCache {
    path: PathBuf,
}

impl SpaceCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn refresh<D: SpaceDirectory + ?Sized>(&self, directory: &mut D) -> Result<Snapshot> {
        let locations = directory.locations().await?;

        let mut spaces = BTreeMap::new();
        for location in &locations {
            let location_spaces = directory.spaces(&location.id).await?;
            log::debug!(
                "Location {} has {} space(s)",
                location.id,
                location_spaces.len()
            );
            spaces.insert(location.id.clone(), location_spaces);
        }

        let snapshot = Snapshot {
            updated_at: Utc::now(),
            locations: locations
                .into_iter()
                .map(|location| CachedLocation {
                    id: location.id,
                    name: location.name,
                })
                .collect(),
            spaces,
        };
        self.save(&snapshot)?;
        log::info!(
            "Cached {} location(s) and {} space(s) at {}",
            snapshot.locations.len(),
            snapshot.total_spaces(),
            self.path.display()
        );
        Ok(snapshot)
    }

    pub fn load(&self) -> Option<Snapshot> {
        let bytes = std::fs::read(&self.path).ok()?;
        match serde_json::from_slice(&bytes) {
            Ok(snapshot) => Some(snapshot),
            Err(err) => {
                log::warn!("Ignoring unreadable spaces cache {}: {err}", self.path.display());
                None
            }
        }
    }

    fn save(&self, snapshot: &Snapshot) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(snapshot)?;
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, data)?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

/// Two-section listing, available first. Spaces missing from `availability` count as available.
pub fn render_spaces_list(spaces: &[Space], availability: &HashMap<String, bool>) -> String {
    if spaces.is_empty() {
        return "No spaces found.".to_string();
    }

    let mut sorted: Vec<&Space> = spaces.iter().collect();
    sorted.sort_by(|a, b| {
        a.name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            .then_with(|| a.name.cmp(&b.name))
            .then_with(|| a.id.cmp(&b.id))
    });

    let (available, occupied): (Vec<&Space>, Vec<&Space>) = sorted
        .into_iter()
        .partition(|space| availability.get(&space.id).copied().unwrap_or(true));

    let mut lines = Vec::with_capacity(spaces.len() + 3);
    lines.push(format!("AVAILABLE ({}):", available.len()));
    lines.extend(available.iter().map(|space| format!("\t- {}", space.name)));
    lines.push(String::new());
    lines.push(format!("OCCUPIED ({}):", occupied.len()));
    lines.extend(occupied.iter().map(|space| format!("\t- {}", space.name)));
    lines.join("\n")
}

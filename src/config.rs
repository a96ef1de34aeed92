use crate::error::{ConfigErrorKind, InfraError};
use crate::models::Room;
use crate::models::types::RoomNumber;
use serde::Deserialize;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub color: bool,            // ANSI colours on the console
    pub prompt: String,         // e.g. "Enter your choice: "
    pub log_level: String,      // e.g. "warn" or "frontdesk=debug"
    pub inventory: Option<PathBuf>, // TOML room list replacing the default inventory
}

impl Default for Config {
    fn default() -> Self {
        Self {
            color: true,
            prompt: "Enter your choice: ".to_string(),
            log_level: "warn".to_string(),
            inventory: None,
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, InfraError> {
        let path = path.as_ref();
        let wrap = |source| InfraError::Config {
            path: path.to_path_buf(),
            source,
        };
        let data = std::fs::read_to_string(path).map_err(|e| wrap(ConfigErrorKind::Read(e)))?;
        let cfg: Self = toml::from_str(&data).map_err(|e| wrap(ConfigErrorKind::Parse(e)))?;
        Ok(cfg)
    }

    /// Overlay `FRONTDESK_*` variables (and a `.env` file, if present) on top of this config.
    pub fn with_env(self) -> Result<Self, InfraError> {
        let _ = dotenvy::from_filename(".env");
        self.with_vars(|key| std::env::var(key).ok())
    }

    pub(crate) fn with_vars(mut self, var: impl Fn(&str) -> Option<String>) -> Result<Self, InfraError> {
        if let Some(v) = var("FRONTDESK_COLOR") {
            self.color = parse_bool(&v).ok_or_else(|| InfraError::Env(ConfigErrorKind::InvalidEnv("FRONTDESK_COLOR".to_string(), v)))?;
        }
        if let Some(v) = var("FRONTDESK_PROMPT") {
            self.prompt = v;
        }
        if let Some(v) = var("FRONTDESK_LOG") {
            self.log_level = v;
        }
        if let Some(v) = var("FRONTDESK_INVENTORY") {
            self.inventory = Some(PathBuf::from(v));
        }
        Ok(self)
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[derive(Debug, Deserialize)]
struct InventoryFile {
    rooms: Vec<RoomSpec>,
}

#[derive(Debug, Deserialize)]
struct RoomSpec {
    number: RoomNumber,
    #[serde(rename = "type")]
    room_type: String,
    price: f64,
}

/// Read a room list from a TOML file:
///
/// ```toml
/// [[rooms]]
/// number = 201
/// type = "Double"
/// price = 95.0
/// ```
pub fn load_inventory<P: AsRef<Path>>(path: P) -> Result<Vec<Room>, InfraError> {
    let path = path.as_ref();
    let wrap = |source| InfraError::Config {
        path: path.to_path_buf(),
        source,
    };
    let data = std::fs::read_to_string(path).map_err(|e| wrap(ConfigErrorKind::Read(e)))?;
    let rooms = parse_inventory(&data).map_err(wrap)?;
    tracing::info!(path = %path.display(), rooms = rooms.len(), "inventory loaded");
    Ok(rooms)
}

pub fn parse_inventory(data: &str) -> Result<Vec<Room>, ConfigErrorKind> {
    let file: InventoryFile = toml::from_str(data).map_err(ConfigErrorKind::Parse)?;

    let mut seen = BTreeSet::new();
    let mut rooms = Vec::with_capacity(file.rooms.len());
    for spec in file.rooms {
        if !seen.insert(spec.number) {
            return Err(ConfigErrorKind::Inventory(format!("duplicate room number {}", spec.number)));
        }
        if !spec.price.is_finite() || spec.price < 0.0 {
            return Err(ConfigErrorKind::Inventory(format!("room {} has invalid price {}", spec.number, spec.price)));
        }
        rooms.push(Room::new(spec.number, spec.room_type.as_str(), spec.price));
    }
    Ok(rooms)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn toml_fills_missing_fields_with_defaults() {
        let cfg: Config = toml::from_str("color = false").unwrap();
        assert!(!cfg.color);
        assert_eq!(cfg.prompt, "Enter your choice: ");
        assert_eq!(cfg.log_level, "warn");
        assert_eq!(cfg.inventory, None);
    }

    #[test]
    fn env_vars_override() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("FRONTDESK_COLOR", "off"),
            ("FRONTDESK_LOG", "debug"),
            ("FRONTDESK_INVENTORY", "rooms.toml"),
        ]);
        let cfg = Config::default().with_vars(|k| vars.get(k).map(|v| v.to_string())).unwrap();
        assert!(!cfg.color);
        assert_eq!(cfg.log_level, "debug");
        assert_eq!(cfg.inventory, Some(PathBuf::from("rooms.toml")));
    }

    #[test]
    fn bad_bool_is_rejected() {
        let err = Config::default()
            .with_vars(|k| (k == "FRONTDESK_COLOR").then(|| "maybe".to_string()))
            .unwrap_err();
        assert!(matches!(err, InfraError::Env(ConfigErrorKind::InvalidEnv(_, _))));
    }

    #[test]
    fn inventory_parses_in_order() {
        let rooms = parse_inventory(
            r#"
            [[rooms]]
            number = 201
            type = "Double"
            price = 95.0

            [[rooms]]
            number = 202
            type = "Penthouse"
            price = 400.0
            "#,
        )
        .unwrap();
        assert_eq!(rooms.len(), 2);
        assert_eq!(rooms[0].number(), RoomNumber(201));
        assert_eq!(rooms[1].room_type().as_str(), "Penthouse");
        assert!(!rooms[1].is_occupied());
    }

    #[test]
    fn inventory_rejects_duplicates_and_negative_prices() {
        let dup = "[[rooms]]\nnumber = 1\ntype = \"Single\"\nprice = 1.0\n[[rooms]]\nnumber = 1\ntype = \"Suite\"\nprice = 2.0\n";
        assert!(matches!(parse_inventory(dup), Err(ConfigErrorKind::Inventory(_))));

        let negative = "[[rooms]]\nnumber = 1\ntype = \"Single\"\nprice = -1.0\n";
        assert!(matches!(parse_inventory(negative), Err(ConfigErrorKind::Inventory(_))));
    }
}

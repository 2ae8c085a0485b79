//! Domain objects wrapped by the test presenters

use gift_wrap::models::{Record, StaticModel};
use gift_wrap::wrapped::{no_args, single_arg};
use gift_wrap::{Association, PresenterError, PresenterResult, Wrapped, WrappedRef};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Everyone loves maps.
#[derive(Debug)]
pub struct Map {
    pub kind: String,
    pub center: Value,
    pub units: String,
    pub notes: Mutex<String>,
    legend: Mutex<Association>,
}

impl Map {
    pub fn new(kind: &str, center: Value, units: &str) -> Self {
        Self {
            kind: kind.to_string(),
            center,
            units: units.to_string(),
            notes: Mutex::new(String::new()),
            legend: Mutex::new(Association::Nil),
        }
    }

    pub fn with_legend(self, legend: Legend) -> Self {
        self.set_legend(legend);
        self
    }

    pub fn set_legend(&self, legend: Legend) {
        *self.legend.lock().unwrap() = Association::single(legend);
    }

    fn shows_roads(&self) -> bool {
        ["road", "traffic", "political"].contains(&self.kind.as_str())
    }
}

impl Wrapped for Map {
    fn type_name(&self) -> &str {
        "Map"
    }

    fn call(&self, method: &str, args: &[Value]) -> PresenterResult<Value> {
        no_args(method, args)?;
        match method {
            "type" => Ok(json!(self.kind)),
            "center" => Ok(self.center.clone()),
            "units" => Ok(json!(self.units)),
            "notes" => Ok(json!(self.notes.lock().unwrap().as_str())),
            "shows_roads?" => Ok(json!(self.shows_roads())),
            _ => Err(PresenterError::method_not_found(self.type_name(), method)),
        }
    }

    fn association(&self, name: &str) -> PresenterResult<Association> {
        match name {
            "legend" => Ok(self.legend.lock().unwrap().clone()),
            _ => Err(PresenterError::method_not_found(self.type_name(), name)),
        }
    }
}

/// An object to associate with a map
#[derive(Debug, Clone, Default)]
pub struct Legend {
    colored_regions: HashMap<String, String>,
    colored_lines: HashMap<String, String>,
}

impl Legend {
    pub fn new(regions: &[(&str, &str)], lines: &[(&str, &str)]) -> Self {
        Self {
            colored_regions: Self::owned(regions),
            colored_lines: Self::owned(lines),
        }
    }

    fn owned(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(color, meaning)| (color.to_string(), meaning.to_string()))
            .collect()
    }

    fn lookup(table: &HashMap<String, String>, method: &str, args: &[Value]) -> PresenterResult<Value> {
        let color = single_arg(method, args)?
            .as_str()
            .ok_or_else(|| PresenterError::invalid_arguments(method, "color must be a string"))?;
        Ok(table.get(color).map_or(Value::Null, |meaning| json!(meaning)))
    }
}

impl Wrapped for Legend {
    fn type_name(&self) -> &str {
        "Legend"
    }

    fn call(&self, method: &str, args: &[Value]) -> PresenterResult<Value> {
        match method {
            "region_meaning" => Self::lookup(&self.colored_regions, method, args),
            "line_meaning" => Self::lookup(&self.colored_lines, method, args),
            _ => Err(PresenterError::method_not_found(self.type_name(), method)),
        }
    }
}

/// A bound collection of maps
#[derive(Debug)]
pub struct Atlas {
    pub title: String,
    maps: Vec<WrappedRef>,
}

impl Atlas {
    pub fn new(title: &str, maps: Vec<Map>) -> Self {
        Self {
            title: title.to_string(),
            maps: maps
                .into_iter()
                .map(|map| Arc::new(map) as WrappedRef)
                .collect(),
        }
    }
}

impl Wrapped for Atlas {
    fn type_name(&self) -> &str {
        "Atlas"
    }

    fn call(&self, method: &str, args: &[Value]) -> PresenterResult<Value> {
        no_args(method, args)?;
        match method {
            "title" => Ok(json!(self.title)),
            _ => Err(PresenterError::method_not_found(self.type_name(), method)),
        }
    }

    fn association(&self, name: &str) -> PresenterResult<Association> {
        match name {
            "maps" => Ok(Association::Sequence(self.maps.clone())),
            _ => Err(PresenterError::method_not_found(self.type_name(), name)),
        }
    }
}

pub fn physical_map() -> Map {
    Map::new("physical", json!(["here", "there"]), "mi")
}

pub fn traffic_legend() -> Legend {
    Legend::new(
        &[("beige", "land"), ("blue", "water")],
        &[
            ("green", "no congestion"),
            ("yellow", "light congestion"),
            ("red", "heavy congestion"),
            ("black", "impassable"),
        ],
    )
}

pub fn map_with_legend() -> Map {
    Map::new("traffic", json!("downtown"), "km").with_legend(traffic_legend())
}

pub fn road_atlas() -> Atlas {
    Atlas::new(
        "Road Atlas",
        vec![
            Map::new("road", json!("north"), "mi"),
            Map::new("traffic", json!("downtown"), "km"),
            Map::new("political", json!("capital"), "m"),
        ],
    )
}

pub const USER_COLUMNS: [&str; 8] = [
    "id",
    "email",
    "first_name",
    "last_name",
    "encrypted_password",
    "sign_in_count",
    "created_at",
    "updated_at",
];

pub fn users_model() -> StaticModel {
    StaticModel::new("User", USER_COLUMNS)
}

pub fn paul_wall() -> Record {
    Record::from_json(
        "User",
        json!({
            "id": 1,
            "email": "paulwall@example.com",
            "first_name": "Paul",
            "last_name": "Wall",
            "encrypted_password": "$2a$10$DbRvyFxovWAly4ZCDtcJ6uVhbMGya2iGiLCURhSwM1ZGUyXpM5UiW",
            "sign_in_count": 2,
            "created_at": "2015-06-01T12:00:00Z",
            "updated_at": "2015-06-01T12:00:00Z",
        }),
    )
    .expect("user fixture is a JSON object")
    .with_method("initials", |user, args| {
        no_args("initials", args)?;
        let initial = |column: &str| user.get_str(column).chars().next().unwrap_or_default();
        Ok(json!(format!(
            "{}{}",
            initial("first_name"),
            initial("last_name")
        )))
    })
}

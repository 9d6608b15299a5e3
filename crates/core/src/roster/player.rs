use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const FULL_IMAGE_KEY: &str = "fullImage";
pub const PROFILE_IMAGE_KEY: &str = "profileImage";
const PLAYERS_KEY: &str = "players";

/// One entry of the `players` array.
///
/// Only `name` is typed. Every other field, image paths included, lives in
/// `extra` with its original value and position, so a record this tool does
/// not touch is written back exactly as it was read.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extra: Map::new(),
        }
    }

    /// `fullImage`, when present and a string.
    pub fn full_image(&self) -> Option<&str> {
        self.extra.get(FULL_IMAGE_KEY).and_then(Value::as_str)
    }

    /// `profileImage`, when present and a string.
    pub fn profile_image(&self) -> Option<&str> {
        self.extra.get(PROFILE_IMAGE_KEY).and_then(Value::as_str)
    }

    /// Overwrites both image fields in place, appending them if absent.
    pub fn set_images(&mut self, full_image: impl Into<String>, profile_image: impl Into<String>) {
        self.extra
            .insert(FULL_IMAGE_KEY.to_string(), Value::String(full_image.into()));
        self.extra.insert(
            PROFILE_IMAGE_KEY.to_string(),
            Value::String(profile_image.into()),
        );
    }
}

impl From<Player> for Value {
    fn from(player: Player) -> Self {
        let mut object = Map::with_capacity(player.extra.len() + 1);
        object.insert("name".to_string(), Value::String(player.name));
        object.extend(player.extra);
        Value::Object(object)
    }
}

/// The player metadata document: a `players` array plus any sibling fields.
///
/// Sibling fields keep their order, and `players` is written back at the
/// position it was read from.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct Roster {
    pub players: Vec<Player>,
    pub extra: Map<String, Value>,
    /// Number of sibling fields preceding `players`.
    players_position: usize,
}

impl Roster {
    pub fn new(players: Vec<Player>) -> Self {
        Self {
            players,
            extra: Map::new(),
            players_position: 0,
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.players.iter().any(|p| p.name == name)
    }
}

impl TryFrom<Map<String, Value>> for Roster {
    type Error = serde_json::Error;

    fn try_from(document: Map<String, Value>) -> Result<Self, Self::Error> {
        let mut players = None;
        let mut extra = Map::new();
        let mut players_position = 0;

        for (key, value) in document {
            if key == PLAYERS_KEY {
                players_position = extra.len();
                players = Some(serde_json::from_value(value)?);
            } else {
                extra.insert(key, value);
            }
        }

        let players = players
            .ok_or_else(|| <serde_json::Error as serde::de::Error>::missing_field(PLAYERS_KEY))?;
        Ok(Self {
            players,
            extra,
            players_position,
        })
    }
}

impl From<Roster> for Map<String, Value> {
    fn from(roster: Roster) -> Self {
        let players = Value::Array(roster.players.into_iter().map(Value::from).collect());
        let mut document = Map::with_capacity(roster.extra.len() + 1);
        let mut players = Some(players);

        for (i, (key, value)) in roster.extra.into_iter().enumerate() {
            if i == roster.players_position {
                if let Some(players) = players.take() {
                    document.insert(PLAYERS_KEY.to_string(), players);
                }
            }
            document.insert(key, value);
        }
        if let Some(players) = players {
            document.insert(PLAYERS_KEY.to_string(), players);
        }
        document
    }
}

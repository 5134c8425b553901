use std::fmt;

use serde::ser::SerializeMap;
use serde::{de, Deserializer, Serializer};

/// One entry of the `paths` table: a logical module name and the location it loads from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathAlias {
    pub name: String,
    pub location: String,
}

impl PathAlias {
    pub fn new(name: &str, location: &str) -> Self {
        Self {
            name: name.to_string(),
            location: location.to_string(),
        }
    }
}

// A plain HashMap would silently keep the last of two equal keys (serde_json does this),
// so entries are collected in declaration order and duplicates are left for validation.
struct PathsVisitor;

impl<'de> de::Visitor<'de> for PathsVisitor {
    type Value = Vec<PathAlias>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of module names to locations")
    }

    fn visit_map<M>(self, mut map: M) -> Result<Vec<PathAlias>, M::Error>
    where
        M: de::MapAccess<'de>,
    {
        let mut aliases = Vec::with_capacity(map.size_hint().unwrap_or_default());
        while let Some((name, location)) = map.next_entry::<String, String>()? {
            aliases.push(PathAlias { name, location });
        }
        Ok(aliases)
    }
}

pub fn deserialize_paths<'de, D>(deserializer: D) -> Result<Vec<PathAlias>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_map(PathsVisitor)
}

pub fn serialize_paths<S>(paths: &Vec<PathAlias>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut map = serializer.serialize_map(Some(paths.len()))?;
    for alias in paths {
        map.serialize_entry(&alias.name, &alias.location)?;
    }
    map.end()
}

use std::fmt;

use serde::ser::SerializeStruct;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use super::utils::default_main;

/// A package maps a name (and everything below `name/`) onto a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageConfig {
    pub name: String,
    pub location: String,
    pub main: String,
}

/// Loader convention: `main` may be written as `./lib/index.js`, which means `lib/index`.
fn normalize_main(main: &str) -> String {
    let main = main.strip_prefix("./").unwrap_or(main);
    main.strip_suffix(".js").unwrap_or(main).to_string()
}

impl PackageConfig {
    pub fn new(name: &str, location: &str, main: &str) -> Self {
        Self {
            name: name.to_string(),
            location: location.to_string(),
            main: normalize_main(main),
        }
    }

    /// The short form: a package living in a directory of its own name with a `main` module.
    pub fn from_name(name: &str) -> Self {
        Self::new(name, name, &default_main())
    }

    pub fn is_short_form(&self) -> bool {
        self.location == self.name && self.main == default_main()
    }

    /// The part of `module` below this package, if the package owns it.
    /// `Some("")` means the package itself was requested.
    pub fn strip_package_prefix<'a>(&self, module: &'a str) -> Option<&'a str> {
        let rest = module.strip_prefix(self.name.as_str())?;
        if rest.is_empty() {
            Some(rest)
        } else {
            rest.strip_prefix('/')
        }
    }

    pub fn main_path(&self) -> String {
        self.path_for(&self.main)
    }

    pub fn path_for(&self, rest: &str) -> String {
        format!("{}/{}", self.location.trim_end_matches('/'), rest)
    }
}

impl Serialize for PackageConfig {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if self.is_short_form() {
            serializer.serialize_str(&self.name)
        } else {
            let mut state = serializer.serialize_struct("PackageConfig", 3)?;
            state.serialize_field("name", &self.name)?;
            state.serialize_field("location", &self.location)?;
            state.serialize_field("main", &self.main)?;
            state.end()
        }
    }
}

struct PackageConfigVisitor;

impl<'de> de::Visitor<'de> for PackageConfigVisitor {
    type Value = PackageConfig;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("string or map")
    }

    fn visit_str<E>(self, value: &str) -> Result<PackageConfig, E>
    where
        E: de::Error,
    {
        Ok(PackageConfig::from_name(value))
    }

    fn visit_map<M>(self, mut map: M) -> Result<PackageConfig, M::Error>
    where
        M: de::MapAccess<'de>,
    {
        let mut name: Option<String> = None;
        let mut location: Option<String> = None;
        let mut main: Option<String> = None;

        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                "name" => {
                    if name.is_some() {
                        return Err(de::Error::duplicate_field("name"));
                    }
                    name = Some(map.next_value()?);
                }
                "location" => {
                    if location.is_some() {
                        return Err(de::Error::duplicate_field("location"));
                    }
                    location = Some(map.next_value()?);
                }
                "main" => {
                    if main.is_some() {
                        return Err(de::Error::duplicate_field("main"));
                    }
                    main = Some(map.next_value()?);
                }
                _ => {
                    return Err(de::Error::unknown_field(
                        &key,
                        &["name", "location", "main"],
                    ));
                }
            }
        }

        let name = name.ok_or_else(|| de::Error::missing_field("name"))?;
        let location = location.unwrap_or_else(|| name.clone());
        let main = main.unwrap_or_else(default_main);

        Ok(PackageConfig::new(&name, &location, &main))
    }
}

impl<'de> Deserialize<'de> for PackageConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(PackageConfigVisitor)
    }
}

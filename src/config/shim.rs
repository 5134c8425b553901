use std::fmt;

use serde::ser::SerializeMap;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// Binding for a script that does not call `define`: what it publishes and what it needs first.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ShimConfig {
    pub module: String,
    pub exports: Option<String>,
    pub deps: Vec<String>,
}

impl ShimConfig {
    pub fn new(module: &str, exports: Option<&str>, deps: &[&str]) -> Self {
        Self {
            module: module.to_string(),
            exports: exports.map(String::from),
            deps: deps.iter().map(|dep| dep.to_string()).collect(),
        }
    }

    pub fn exporting(module: &str, exports: &str) -> Self {
        Self::new(module, Some(exports), &[])
    }
}

#[derive(Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct ShimBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    exports: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    deps: Vec<String>,
}

// `shim: { backbone: ["underscore", "jquery"] }` is shorthand for `{ deps: [...] }`
#[derive(Deserialize)]
#[serde(untagged)]
enum ShimValue {
    Deps(Vec<String>),
    Body(ShimBody),
}

struct ShimVisitor;

impl<'de> de::Visitor<'de> for ShimVisitor {
    type Value = Vec<ShimConfig>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of module names to shim settings")
    }

    fn visit_map<M>(self, mut map: M) -> Result<Vec<ShimConfig>, M::Error>
    where
        M: de::MapAccess<'de>,
    {
        let mut shims = Vec::with_capacity(map.size_hint().unwrap_or_default());
        while let Some((module, value)) = map.next_entry::<String, ShimValue>()? {
            shims.push(match value {
                ShimValue::Deps(deps) => ShimConfig {
                    module,
                    exports: None,
                    deps,
                },
                ShimValue::Body(body) => ShimConfig {
                    module,
                    exports: body.exports,
                    deps: body.deps,
                },
            });
        }
        Ok(shims)
    }
}

pub fn deserialize_shim<'de, D>(deserializer: D) -> Result<Vec<ShimConfig>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_map(ShimVisitor)
}

pub fn serialize_shim<S>(shims: &Vec<ShimConfig>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut map = serializer.serialize_map(Some(shims.len()))?;
    for shim in shims {
        match &shim.exports {
            None => map.serialize_entry(&shim.module, &shim.deps)?,
            Some(exports) => map.serialize_entry(
                &shim.module,
                &ShimBody {
                    exports: Some(exports.clone()),
                    deps: shim.deps.clone(),
                },
            )?,
        }
    }
    map.end()
}

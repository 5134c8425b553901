use std::fmt;

/// Where a resolved module loads from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LoadLocation {
    /// An AMD module that registers itself through `define`.
    Direct(String),
    /// A plain script whose API appears under the global `exports` once it has run.
    ShimmedGlobal { path: String, exports: String },
}

impl LoadLocation {
    pub fn path(&self) -> &str {
        match self {
            LoadLocation::Direct(path) => path,
            LoadLocation::ShimmedGlobal { path, .. } => path,
        }
    }

    pub fn exports(&self) -> Option<&str> {
        match self {
            LoadLocation::Direct(_) => None,
            LoadLocation::ShimmedGlobal { exports, .. } => Some(exports),
        }
    }

    pub fn to_url(&self) -> String {
        script_url(self.path(), "js")
    }
}

impl fmt::Display for LoadLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadLocation::Direct(path) => write!(f, "{path}"),
            LoadLocation::ShimmedGlobal { path, exports } => write!(f, "{path} (global '{exports}')"),
        }
    }
}

/// Appends `.{extension}` unless the path already has it or carries a query string.
pub fn script_url(path: &str, extension: &str) -> String {
    let extension = extension.trim_start_matches('.');
    if path.contains('?') || path.ends_with(&format!(".{extension}")) {
        path.to_string()
    } else {
        format!("{path}.{extension}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("../bower_components/angular/angular", "js", "../bower_components/angular/angular.js")]
    #[case("vendor/jquery.js", "js", "vendor/jquery.js")]
    #[case("//cdn.example.com/react?v=1", "js", "//cdn.example.com/react?v=1")]
    #[case("static/scripts/main", "coffee", "static/scripts/main.coffee")]
    #[case("static/scripts/main", ".coffee", "static/scripts/main.coffee")]
    fn test_script_url(#[case] path: &str, #[case] extension: &str, #[case] expected: &str) {
        assert_eq!(script_url(path, extension), expected);
    }

    #[test]
    fn test_accessors() {
        let shimmed = LoadLocation::ShimmedGlobal {
            path: "../bower_components/angular/angular".to_string(),
            exports: "angular".to_string(),
        };
        assert_eq!(shimmed.path(), "../bower_components/angular/angular");
        assert_eq!(shimmed.exports(), Some("angular"));
        assert_eq!(
            shimmed.to_string(),
            "../bower_components/angular/angular (global 'angular')"
        );

        let direct = LoadLocation::Direct("static/scripts/main".to_string());
        assert_eq!(direct.exports(), None);
        assert_eq!(direct.to_url(), "static/scripts/main.js");
    }
}

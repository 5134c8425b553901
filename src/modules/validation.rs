use std::collections::HashSet;

use itertools::Itertools;
use petgraph::algo::kosaraju_scc;
use petgraph::graphmap::DiGraphMap;

use super::error::{ConfigValidationError, ValidationIssue};
use super::request::{ModuleRequest, PLUGIN_SEPARATOR};
use crate::config::{AmdConfig, ShimConfig};

fn find_duplicates<'a>(names: impl IntoIterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    let mut duplicates = Vec::new();

    for name in names {
        if !seen.insert(name) && !duplicates.contains(&name) {
            duplicates.push(name);
        }
    }

    duplicates
}

pub fn find_duplicate_aliases(config: &AmdConfig) -> Vec<&str> {
    find_duplicates(config.paths.iter().map(|alias| alias.name.as_str()))
}

pub fn find_duplicate_packages(config: &AmdConfig) -> Vec<&str> {
    find_duplicates(
        config
            .packages
            .iter()
            .map(|package| package.name.as_str())
            .filter(|name| !name.is_empty()),
    )
}

pub fn find_duplicate_shims(config: &AmdConfig) -> Vec<&str> {
    find_duplicates(config.shim.iter().map(|shim| shim.module.as_str()))
}

/// Groups of shimmed modules whose `deps` form a cycle. Members of each group are sorted.
pub fn find_shim_cycles(shims: &[ShimConfig]) -> Vec<Vec<String>> {
    let mut graph = DiGraphMap::new();

    for shim in shims {
        graph.add_node(shim.module.as_str());
    }

    for shim in shims {
        for dep in &shim.deps {
            graph.add_edge(shim.module.as_str(), dep.as_str(), ());
        }
    }

    kosaraju_scc(&graph)
        .into_iter()
        .filter(|scc| scc.len() > 1 || graph.contains_edge(scc[0], scc[0]))
        .map(|scc| scc.into_iter().map(String::from).sorted().collect::<Vec<_>>())
        .sorted()
        .collect()
}

fn has_plugin_prefix(name: &str) -> bool {
    name.contains(PLUGIN_SEPARATOR)
}

fn has_empty_segment(name: &str) -> bool {
    name.split('/').any(str::is_empty)
}

fn is_valid_shim_dep(dep: &str) -> bool {
    match dep.parse::<ModuleRequest>() {
        Ok(request) => {
            request.plugin.as_deref().map_or(true, |plugin| !has_empty_segment(plugin))
                && !has_empty_segment(request.resource())
        }
        Err(_) => false,
    }
}

pub fn find_validation_issues(config: &AmdConfig) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if config.base_url.as_deref() == Some("") {
        issues.push(ValidationIssue::EmptyBaseUrl);
    }

    for alias in &config.paths {
        if alias.name.is_empty() {
            issues.push(ValidationIssue::EmptyAliasName);
            continue;
        }
        if has_plugin_prefix(&alias.name) {
            issues.push(ValidationIssue::PluginPrefixInName(alias.name.clone()));
        } else if has_empty_segment(&alias.name) {
            issues.push(ValidationIssue::InvalidName(alias.name.clone()));
        }
        if alias.location.is_empty() {
            issues.push(ValidationIssue::EmptyAliasLocation(alias.name.clone()));
        }
    }
    issues.extend(
        find_duplicate_aliases(config)
            .into_iter()
            .map(|name| ValidationIssue::DuplicateAlias(name.to_string())),
    );

    for (index, package) in config.packages.iter().enumerate() {
        if package.name.is_empty() {
            issues.push(ValidationIssue::EmptyPackageName { index });
            continue;
        }
        if has_plugin_prefix(&package.name) {
            issues.push(ValidationIssue::PluginPrefixInName(package.name.clone()));
        } else if has_empty_segment(&package.name) {
            issues.push(ValidationIssue::InvalidName(package.name.clone()));
        }
        if package.location.is_empty() {
            issues.push(ValidationIssue::EmptyPackageLocation(package.name.clone()));
        }
        if package.main.is_empty() {
            issues.push(ValidationIssue::EmptyPackageMain(package.name.clone()));
        }
    }
    issues.extend(
        find_duplicate_packages(config)
            .into_iter()
            .map(|name| ValidationIssue::DuplicatePackage(name.to_string())),
    );

    for shim in &config.shim {
        if shim.module.is_empty() {
            issues.push(ValidationIssue::EmptyShimModule);
            continue;
        }
        if has_plugin_prefix(&shim.module) {
            issues.push(ValidationIssue::PluginPrefixInName(shim.module.clone()));
        } else if has_empty_segment(&shim.module) {
            issues.push(ValidationIssue::InvalidName(shim.module.clone()));
        }
        if shim.exports.as_deref() == Some("") {
            issues.push(ValidationIssue::EmptyShimExports(shim.module.clone()));
        }
        for dep in shim.deps.iter().filter(|dep| !is_valid_shim_dep(dep)) {
            issues.push(ValidationIssue::InvalidShimDep {
                module: shim.module.clone(),
                dep: dep.clone(),
            });
        }
    }
    issues.extend(
        find_duplicate_shims(config)
            .into_iter()
            .map(|name| ValidationIssue::DuplicateShim(name.to_string())),
    );
    issues.extend(
        find_shim_cycles(&config.shim)
            .into_iter()
            .map(ValidationIssue::ShimCycle),
    );

    for (name, plugin) in &config.plugins {
        if plugin.extension.trim_start_matches('.').is_empty() {
            issues.push(ValidationIssue::EmptyPluginExtension(name.clone()));
        }
    }

    issues
}

pub fn validate_config(config: &AmdConfig) -> Result<(), ConfigValidationError> {
    let issues = find_validation_issues(config);
    if issues.is_empty() {
        Ok(())
    } else {
        Err(ConfigValidationError { issues })
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::config::PackageConfig;
    use crate::parsing::parse_config;
    use crate::tests::fixtures::{fixtures_dir, original_config};
    use rstest::rstest;

    #[rstest]
    fn test_original_config_is_valid(original_config: AmdConfig) {
        assert_eq!(validate_config(&original_config), Ok(()));
    }

    #[rstest]
    fn test_duplicate_paths_fixture(fixtures_dir: PathBuf) {
        let config = parse_config(fixtures_dir.join("duplicate_paths.json")).unwrap();
        let error = validate_config(&config).unwrap_err();
        assert_eq!(
            error.issues,
            vec![
                ValidationIssue::DuplicateAlias("react".to_string()),
                ValidationIssue::EmptyPackageName { index: 0 },
            ]
        );
    }

    #[rstest]
    fn test_shim_cycle_fixture(fixtures_dir: PathBuf) {
        let config = parse_config(fixtures_dir.join("shim_cycle.toml")).unwrap();
        assert_eq!(
            find_shim_cycles(&config.shim),
            vec![vec!["backbone".to_string(), "underscore".to_string()]]
        );
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_self_referencing_shim_is_a_cycle() {
        let shims = vec![ShimConfig::new("jquery", Some("jQuery"), &["jquery"])];
        assert_eq!(find_shim_cycles(&shims), vec![vec!["jquery".to_string()]]);
    }

    #[test]
    fn test_acyclic_shim_chain() {
        let shims = vec![
            ShimConfig::new("backbone", Some("Backbone"), &["underscore", "jquery"]),
            ShimConfig::new("underscore", Some("_"), &[]),
            ShimConfig::new("marionette", None, &["backbone"]),
        ];
        assert!(find_shim_cycles(&shims).is_empty());
    }

    #[test]
    fn test_duplicates_reported_once() {
        let config = AmdConfig::default()
            .with_package(PackageConfig::from_name("cs"))
            .with_package(PackageConfig::from_name("cs"))
            .with_package(PackageConfig::from_name("cs"));
        assert_eq!(find_duplicate_packages(&config), vec!["cs"]);
    }

    #[test]
    fn test_collects_every_issue() {
        let config = AmdConfig::default()
            .with_base_url("")
            .with_path("", "../lib/nameless")
            .with_path("cs!main", "main")
            .with_path("jquery", "")
            .with_path("jquery/", "../lib/jquery")
            .with_path("/abs", "../lib/abs")
            .with_package(PackageConfig::new("cs", "", "cs"))
            .with_package(PackageConfig::from_name("app//core"))
            .with_shim(ShimConfig::new("angular", Some(""), &["", "css!", "css!widget"]))
            .with_shim(ShimConfig::new("angular", Some("angular"), &[]))
            .with_shim(ShimConfig::exporting("vendor/", "Vendor"))
            .with_plugin("cs", ".");

        assert_eq!(
            find_validation_issues(&config),
            vec![
                ValidationIssue::EmptyBaseUrl,
                ValidationIssue::EmptyAliasName,
                ValidationIssue::PluginPrefixInName("cs!main".to_string()),
                ValidationIssue::EmptyAliasLocation("jquery".to_string()),
                ValidationIssue::InvalidName("jquery/".to_string()),
                ValidationIssue::InvalidName("/abs".to_string()),
                ValidationIssue::EmptyPackageLocation("cs".to_string()),
                ValidationIssue::InvalidName("app//core".to_string()),
                ValidationIssue::EmptyShimExports("angular".to_string()),
                ValidationIssue::InvalidShimDep {
                    module: "angular".to_string(),
                    dep: "".to_string(),
                },
                ValidationIssue::InvalidShimDep {
                    module: "angular".to_string(),
                    dep: "css!".to_string(),
                },
                ValidationIssue::InvalidName("vendor/".to_string()),
                ValidationIssue::DuplicateShim("angular".to_string()),
                ValidationIssue::EmptyPluginExtension("cs".to_string()),
            ]
        );
    }

    #[rstest]
    #[case("jquery/")]
    #[case("/abs")]
    #[case("a//b")]
    fn test_alias_with_empty_segment_is_rejected(#[case] name: &str) {
        let config = AmdConfig::default().with_path(name, "../lib/somewhere");
        assert_eq!(
            validate_config(&config),
            Err(ConfigValidationError {
                issues: vec![ValidationIssue::InvalidName(name.to_string())]
            })
        );
    }

    #[test]
    fn test_plugin_shim_deps_are_valid() {
        let config = AmdConfig::default()
            .with_shim(ShimConfig::new("widget", Some("Widget"), &["css!widget", "jquery"]))
            .with_shim(ShimConfig::new("templates", None, &["text!tpl.html!strip"]));
        assert_eq!(validate_config(&config), Ok(()));
    }

    #[test]
    fn test_error_message_lists_issues() {
        let error = ConfigValidationError {
            issues: vec![
                ValidationIssue::DuplicateAlias("react".to_string()),
                ValidationIssue::ShimCycle(vec!["a".to_string(), "b".to_string()]),
            ],
        };
        assert_eq!(
            error.to_string(),
            "Invalid loader configuration:\n  - Alias 'react' is defined more than once in 'paths'\n  - Circular shim dependency between: 'a', 'b'"
        );
    }
}

use std::path::PathBuf;

use amd_resolve::{
    check, parse_config, Bootstrap, LoadLocation, ModuleResolver, ResolveError, ScriptLoad,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

#[test]
fn boots_the_configured_entry_point() {
    init_logging();
    let config = parse_config(fixture("amd.config.toml")).unwrap();
    let resolver = ModuleResolver::try_new(&config).unwrap();
    let mut loaded: Vec<ScriptLoad> = vec![];

    Bootstrap::new(&resolver).start_deps(&mut loaded).unwrap();

    let urls: Vec<&str> = loaded.iter().map(|script| script.url.as_str()).collect();
    assert_eq!(
        urls,
        vec![
            "../bower_components/require-cs/cs.js",
            "static/scripts/main.coffee"
        ]
    );
}

#[test]
fn json_and_toml_configs_resolve_alike() {
    init_logging();
    let toml_config = parse_config(fixture("amd.config.toml")).unwrap();
    let json_config = parse_config(fixture("amd.config.json")).unwrap();
    let toml_resolver = ModuleResolver::try_new(&toml_config).unwrap();
    let json_resolver = ModuleResolver::try_new(&json_config).unwrap();

    for module in ["angular", "react", "cs", "coffee-script", "main"] {
        assert_eq!(toml_resolver.resolve(module), json_resolver.resolve(module));
    }
}

#[test]
fn resolves_documented_scenarios() {
    init_logging();
    let config = parse_config(fixture("amd.config.json")).unwrap();
    let resolver = ModuleResolver::try_new(&config).unwrap();

    assert_eq!(
        resolver.resolve("angular").unwrap(),
        LoadLocation::ShimmedGlobal {
            path: "../bower_components/angular/angular".to_string(),
            exports: "angular".to_string(),
        }
    );
    assert_eq!(
        resolver.resolve("cs").unwrap().path(),
        "../bower_components/require-cs/cs"
    );
}

#[test]
fn rejects_invalid_fixtures() {
    init_logging();
    for name in ["duplicate_paths.json", "shim_cycle.toml"] {
        let config = parse_config(fixture(name)).unwrap();
        assert!(ModuleResolver::try_new(&config).is_err(), "{name} should be rejected");
        assert!(check(&config).has_errors());
    }
}

#[test]
fn unresolved_without_base_url() {
    init_logging();
    let mut config = parse_config(fixture("amd.config.toml")).unwrap();
    config.base_url = None;
    let resolver = ModuleResolver::try_new(&config).unwrap();

    assert_eq!(
        resolver.resolve("nonexistent"),
        Err(ResolveError::UnresolvedModule("nonexistent".to_string()))
    );
}

#[cfg(test)]
pub mod fixtures {
    use rstest::fixture;

    use crate::config::{AmdConfig, PackageConfig, ShimConfig};

    #[fixture]
    pub fn fixtures_dir() -> std::path::PathBuf {
        std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
    }

    /// The loader configuration the fixture files describe.
    #[fixture]
    pub fn original_config() -> AmdConfig {
        AmdConfig::default()
            .with_base_url("static/scripts")
            .with_path("angular", "../bower_components/angular/angular")
            .with_path("jquery", "../bower_components/jquery/jquery")
            .with_path("JSXTransformer", "../bower_components/react/JSXTransformer")
            .with_path("jsx", "../bower_components/require-jsx/jsx")
            .with_path("react", "../bower_components/react/react")
            .with_shim(ShimConfig::exporting("angular", "angular"))
            .with_package(PackageConfig::new(
                "cs",
                "../bower_components/require-cs",
                "cs",
            ))
            .with_package(PackageConfig::new(
                "coffee-script",
                "../bower_components/coffee-script",
                "index",
            ))
            .with_deps(&["cs!main"])
            .with_plugin("cs", "coffee")
    }
}

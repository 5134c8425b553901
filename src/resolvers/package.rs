use crate::config::PackageConfig;

#[derive(Debug, PartialEq, Eq)]
pub enum PackageResolution<'a> {
    Found {
        package: &'a PackageConfig,
        path: String,
    },
    NotFound,
}

#[derive(Debug)]
pub struct PackageResolver<'a> {
    // longest name first, so that 'app/core' wins over 'app' for 'app/core/x'
    packages: Vec<&'a PackageConfig>,
}

impl<'a> PackageResolver<'a> {
    pub fn new(packages: &'a [PackageConfig]) -> Self {
        let mut packages: Vec<&PackageConfig> = packages.iter().collect();
        packages.sort_by(|a, b| b.name.len().cmp(&a.name.len()));
        Self { packages }
    }

    pub fn get_package(&self, name: &str) -> Option<&'a PackageConfig> {
        self.packages
            .iter()
            .find(|package| package.name == name)
            .copied()
    }

    pub fn resolve_module_path(&self, module_path: &str) -> PackageResolution<'a> {
        for package in self.packages.iter().copied() {
            match package.strip_package_prefix(module_path) {
                Some("") => {
                    return PackageResolution::Found {
                        package,
                        path: package.main_path(),
                    }
                }
                Some(rest) => {
                    return PackageResolution::Found {
                        package,
                        path: package.path_for(rest),
                    }
                }
                None => continue,
            }
        }
        PackageResolution::NotFound
    }
}

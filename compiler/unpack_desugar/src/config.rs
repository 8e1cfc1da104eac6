//! Pass configuration.

/// Which calls count as unpacking markers.
///
/// `owner` is the fully qualified class that declares the marker method;
/// `method` is the marker method's name. The defaults describe
/// `lombok.Tuple.tuple`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MarkerConfig {
    pub owner: String,
    pub method: String,
}

impl Default for MarkerConfig {
    fn default() -> Self {
        MarkerConfig {
            owner: "lombok.Tuple".to_string(),
            method: "tuple".to_string(),
        }
    }
}

impl MarkerConfig {
    pub fn new(owner: impl Into<String>, method: impl Into<String>) -> Self {
        MarkerConfig {
            owner: owner.into(),
            method: method.into(),
        }
    }

    /// Simple name of the owner class (`Tuple` for `lombok.Tuple`).
    pub fn owner_simple_name(&self) -> &str {
        self.owner.rsplit('.').next().unwrap_or(&self.owner)
    }

    /// Package of the owner class (`lombok` for `lombok.Tuple`), empty when
    /// the owner lives in the default package.
    pub fn owner_package(&self) -> &str {
        self.owner.rsplit_once('.').map_or("", |(package, _)| package)
    }

    /// Path of the static single import for the bare form.
    pub fn static_import_path(&self) -> String {
        format!("{}.{}", self.owner, self.method)
    }
}

/// Configuration for one run of the desugaring pass.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DesugarConfig {
    pub marker: MarkerConfig,
    /// Prefix of generated temporary names; a counter is appended.
    pub temp_prefix: String,
}

impl Default for DesugarConfig {
    fn default() -> Self {
        DesugarConfig {
            marker: MarkerConfig::default(),
            temp_prefix: "$tuple".to_string(),
        }
    }
}

impl DesugarConfig {
    #[must_use]
    pub fn with_marker(mut self, marker: MarkerConfig) -> Self {
        self.marker = marker;
        self
    }

    #[must_use]
    pub fn with_temp_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.temp_prefix = prefix.into();
        self
    }
}

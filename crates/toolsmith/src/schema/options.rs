/// The name used when no root name is given.
pub const DEFAULT_ROOT_NAME: &str = "Root";

/// Controls the shape of [`convert`](super::convert) output.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(::serde::Serialize, ::serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct ConvertOptions {
    /// Emit one `interface` per object instead of a single inline alias.
    pub use_multiple_interfaces: bool,
    /// Name of the root type. An empty name falls back to `Root`.
    pub root_name: String,
}

impl ConvertOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn multiple_interfaces(mut self, enabled: bool) -> Self {
        self.use_multiple_interfaces = enabled;
        self
    }

    #[must_use]
    pub fn root_name(mut self, name: impl Into<String>) -> Self {
        self.root_name = name.into();
        self
    }

    /// The root name to sanitize, with empty input replaced by `Root`.
    pub(crate) fn effective_root_name(&self) -> &str {
        if self.root_name.is_empty() {
            DEFAULT_ROOT_NAME
        } else {
            &self.root_name
        }
    }
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            use_multiple_interfaces: false,
            root_name: DEFAULT_ROOT_NAME.to_owned(),
        }
    }
}

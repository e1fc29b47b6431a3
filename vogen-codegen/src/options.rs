use vogen_model::ErrorScope;

/// Settings for one generator run, after CLI flags and `vogen.toml` are merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Prefix of hand-written constructors, also used for generated ones.
    pub prefix: String,
    /// Requested struct names, in the order given.
    pub structs: Vec<String>,
    /// Emit the `<S>Setter` / `Build<S>` factory file.
    pub factory: bool,
    /// Emit `RawValue()` accessors.
    pub raw_values: bool,
    pub error_scope: ErrorScope,
}

impl GenerateOptions {
    pub fn new(
        prefix: impl Into<String>,
        structs: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            prefix: prefix.into(),
            structs: structs.into_iter().map(Into::into).collect(),
            factory: false,
            raw_values: false,
            error_scope: ErrorScope::default(),
        }
    }

    pub fn with_factory(mut self, factory: bool) -> Self {
        self.factory = factory;
        self
    }

    pub fn with_raw_values(mut self, raw_values: bool) -> Self {
        self.raw_values = raw_values;
        self
    }

    pub fn with_error_scope(mut self, scope: ErrorScope) -> Self {
        self.error_scope = scope;
        self
    }

    /// Requested struct names with duplicates removed, first occurrence kept.
    pub fn targets(&self) -> Vec<&str> {
        let mut targets: Vec<&str> = Vec::new();
        for name in &self.structs {
            if !targets.contains(&name.as_str()) {
                targets.push(name);
            }
        }
        targets
    }
}

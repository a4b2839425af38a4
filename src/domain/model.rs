use std::fmt;

/// Chat models offered in the model selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ModelName {
    /// Widely available; the default selection.
    #[default]
    Gpt35Turbo,
    /// Requires special access.
    Gpt4,
    /// Requires special access.
    Gpt4Turbo,
}

impl ModelName {
    /// All supported models in selector order. The first entry is the default.
    pub const ALL: [ModelName; 3] = [ModelName::Gpt35Turbo, ModelName::Gpt4, ModelName::Gpt4Turbo];

    /// Identifier sent to the completion endpoint.
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelName::Gpt35Turbo => "gpt-3.5-turbo",
            ModelName::Gpt4 => "gpt-4",
            ModelName::Gpt4Turbo => "gpt-4-turbo",
        }
    }

    pub fn requires_special_access(&self) -> bool {
        !matches!(self, ModelName::Gpt35Turbo)
    }
}

impl fmt::Display for ModelName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

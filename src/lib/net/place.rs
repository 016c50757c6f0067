use serde::{Deserialize, Serialize};

/// A named token holder. Token counts are unsigned, so a place can never
/// represent a negative marking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Place {
    name: String,
    tokens: u64,
}

impl Place {
    pub fn new(name: &str, tokens: u64) -> Self {
        Place {
            name: name.to_owned(),
            tokens,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tokens(&self) -> u64 {
        self.tokens
    }

    pub fn set_tokens(&mut self, tokens: u64) {
        self.tokens = tokens;
    }

    /// Removes `weight` tokens. Callers must have checked enablement first.
    pub(crate) fn consume(&mut self, weight: u64) {
        self.tokens = self
            .tokens
            .checked_sub(weight)
            .expect("transition consumed more tokens than the place holds");
    }

    /// Adds `weight` tokens, saturating at `u64::MAX`.
    pub(crate) fn produce(&mut self, weight: u64) {
        self.tokens = self.tokens.saturating_add(weight);
    }
}

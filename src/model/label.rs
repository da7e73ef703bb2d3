use serde::Deserialize;
use std::fmt;

/// A string tag naming one discovery generation of the network
/// (e.g. "fuel", "H", "R", "ROO", "QOOH", "O2QOOH").
///
/// Labels are fixed at configuration time and key the sets held by a
/// [`SpeciesPool`](super::pool::SpeciesPool).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct GenerationLabel(String);

impl GenerationLabel {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GenerationLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for GenerationLabel {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for GenerationLabel {
    fn from(name: String) -> Self {
        Self(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_as_bare_name() {
        assert_eq!(GenerationLabel::from("ROO").to_string(), "ROO");
    }

    #[test]
    fn equal_labels_hash_equal() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(GenerationLabel::from("R"));
        set.insert(GenerationLabel::new("R".to_string()));
        assert_eq!(set.len(), 1);
    }
}

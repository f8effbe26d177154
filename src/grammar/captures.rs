use serde_derive::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::ScopeName;

/// How a rule labels its capture groups before normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureSpec {
    /// Shorthand for labelling group 1 only.
    SingleLabel(String),
    /// Group index to label. Keys are passed through as given.
    IndexedLabels(BTreeMap<String, String>),
}

impl CaptureSpec {
    pub fn indexed<K, V>(labels: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: ToString,
        V: Into<String>,
    {
        Self::IndexedLabels(
            labels
                .into_iter()
                .map(|(index, label)| (index.to_string(), label.into()))
                .collect(),
        )
    }

    /// Expands the shorthand into the verbose form the grammar schema wants.
    pub fn normalize(&self) -> Captures {
        match self {
            CaptureSpec::SingleLabel(label) => Captures(BTreeMap::from([(
                "1".to_string(),
                Capture::from(label.as_str()),
            )])),
            CaptureSpec::IndexedLabels(labels) => Captures(
                labels
                    .iter()
                    .map(|(index, label)| (index.clone(), Capture::from(label.as_str())))
                    .collect(),
            ),
        }
    }
}

impl From<&str> for CaptureSpec {
    fn from(label: &str) -> Self {
        Self::SingleLabel(label.to_string())
    }
}

impl From<&Captures> for CaptureSpec {
    fn from(captures: &Captures) -> Self {
        Self::IndexedLabels(
            captures
                .0
                .iter()
                .map(|(index, capture)| (index.clone(), capture.name.0.clone()))
                .collect(),
        )
    }
}

/// Normalized captures, keyed by group index ("0" is the whole match).
// keys order as strings, so "10" sorts before "2"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Captures(pub BTreeMap<String, Capture>);

impl Captures {
    pub fn get(&self, index: &str) -> Option<&ScopeName> {
        self.0.get(index).map(|capture| &capture.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capture {
    pub name: ScopeName,
}

impl From<&str> for Capture {
    fn from(name: &str) -> Self {
        Self { name: name.into() }
    }
}

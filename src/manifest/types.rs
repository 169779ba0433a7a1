use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One published documentation version.
///
/// Entries keep the JSON object they were read from: hand-curated fields,
/// their order and their values (including `null`s) are written back as they
/// were. Only `version` is required, and it must be a string.
// RUST LEARNING: `try_from`/`into` route (de)serialization through another type
// - Deserialize reads a JSON object, then `TryFrom` validates it
// - Serialize converts back with `From<VersionEntry> for Map`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct VersionEntry {
    fields: Map<String, Value>,
}

impl VersionEntry {
    /// Entry as registered by a documentation build: no PDF, no PDF name.
    pub fn new(version: impl Into<String>, folder: impl Into<String>) -> Self {
        let mut fields = Map::new();
        fields.insert("version".to_string(), Value::String(version.into()));
        fields.insert("folder".to_string(), Value::String(folder.into()));
        fields.insert("has_pdf".to_string(), Value::Bool(false));
        Self { fields }
    }

    pub fn version(&self) -> &str {
        self.fields
            .get("version")
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    pub fn folder(&self) -> Option<&str> {
        self.fields.get("folder").and_then(Value::as_str)
    }

    pub fn pdf_name(&self) -> Option<&str> {
        self.fields.get("pdf_name").and_then(Value::as_str)
    }

    /// Whether the version switcher treats this entry as having a PDF.
    ///
    /// The switcher tests `has_pdf` as a script value, so any non-empty
    /// string counts as set (including `"false"`), as does a non-zero number.
    pub fn has_pdf(&self) -> bool {
        match self.fields.get("has_pdf") {
            None | Some(Value::Null) => false,
            Some(Value::Bool(flag)) => *flag,
            Some(Value::Number(n)) => n.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
            Some(Value::String(text)) => !text.is_empty(),
            Some(Value::Array(_)) | Some(Value::Object(_)) => true,
        }
    }

    /// Raw value of any field, as stored.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }
}

impl TryFrom<Map<String, Value>> for VersionEntry {
    type Error = String;

    fn try_from(fields: Map<String, Value>) -> Result<Self, Self::Error> {
        match fields.get("version") {
            Some(Value::String(_)) => Ok(Self { fields }),
            Some(other) => Err(format!("`version` must be a string, found {}", other)),
            None => Err("entry has no `version` field".to_string()),
        }
    }
}

impl From<VersionEntry> for Map<String, Value> {
    fn from(entry: VersionEntry) -> Self {
        entry.fields
    }
}

// RUST LEARNING: `#[serde(transparent)]` makes the wrapper (de)serialize as its only field
// - The file holds a bare JSON array, not `{ "entries": [...] }`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Manifest {
    entries: Vec<VersionEntry>,
}

impl Manifest {
    pub fn new(entries: Vec<VersionEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[VersionEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First entry whose version matches exactly.
    pub fn find(&self, version: &str) -> Option<&VersionEntry> {
        self.entries.iter().find(|entry| entry.version() == version)
    }

    pub fn contains(&self, version: &str) -> bool {
        self.find(version).is_some()
    }

    pub fn push(&mut self, entry: VersionEntry) {
        self.entries.push(entry);
    }

    /// Removes every entry with this version and returns how many were dropped.
    pub fn remove(&mut self, version: &str) -> usize {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.version() != version);
        before - self.entries.len()
    }

    pub fn sort_descending(&mut self) {
        super::sort::sort_descending(&mut self.entries);
    }

    pub fn versions(&self) -> Vec<&str> {
        self.entries.iter().map(VersionEntry::version).collect()
    }
}

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Field values extracted by a single decode, in schema declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodedFields {
    entries: Vec<(String, String)>,
}

impl DecodedFields {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, name: String, value: String) {
        self.entries.push((name, value));
    }

    /// Raw value captured for `name`, if the schema declares such a field.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn into_vec(self) -> Vec<(String, String)> {
        self.entries
    }
}

impl IntoIterator for DecodedFields {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

// Serialized as a map so JSON output keeps schema order.
impl Serialize for DecodedFields {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DecodedFields {
        let mut fields = DecodedFields::with_capacity(3);
        fields.push("Zeta".into(), "z".into());
        fields.push("Alpha".into(), "a".into());
        fields.push("Mid".into(), "m".into());
        fields
    }

    #[test]
    fn lookup_and_order() {
        let fields = sample();
        assert_eq!(fields.len(), 3);
        assert_eq!(fields.get("Alpha"), Some("a"));
        assert_eq!(fields.get("Missing"), None);
        assert_eq!(fields.names().collect::<Vec<_>>(), ["Zeta", "Alpha", "Mid"]);
    }

    #[test]
    fn json_keeps_declaration_order() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert_eq!(json, r#"{"Zeta":"z","Alpha":"a","Mid":"m"}"#);
    }

    #[test]
    fn into_vec_is_owned_pairs() {
        let pairs = sample().into_vec();
        assert_eq!(pairs[0], ("Zeta".to_string(), "z".to_string()));
    }
}

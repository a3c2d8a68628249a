use std::fmt;

use indexmap::IndexMap;
use serde::{
    de::{MapAccess, Visitor},
    ser::SerializeMap,
    Deserialize, Serialize,
};

use crate::types::PropertyTable;

impl Serialize for PropertyTable {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (k, v) in self.entries() {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

struct PropertyTableVisitor {}

impl PropertyTableVisitor {
    fn new() -> Self {
        PropertyTableVisitor {}
    }
}

impl<'de> Visitor<'de> for PropertyTableVisitor {
    type Value = IndexMap<String, String>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a string/string map")
    }

    fn visit_map<M>(self, mut access: M) -> Result<Self::Value, M::Error>
    where
        M: MapAccess<'de>,
    {
        let mut map = IndexMap::with_capacity(access.size_hint().unwrap_or(0));

        while let Some((key, value)) = access.next_entry::<String, String>()? {
            map.insert(key, value);
        }

        Ok(map)
    }
}

impl<'de> Deserialize<'de> for PropertyTable {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Ok(PropertyTable::new(
            deserializer.deserialize_map(PropertyTableVisitor::new())?,
        ))
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use crate::types::PropertyTable;

    #[test]
    fn json_round_trip_keeps_order() {
        let table = PropertyTable::from([("z", "26"), ("a", "1")]);

        let json = serde_json::to_string(&table).expect("serialization should succeed");
        assert_eq!(json, r#"{"z":"26","a":"1"}"#);

        let back: PropertyTable = serde_json::from_str(&json).expect("deserialization should succeed");
        assert_eq!(back, table);
    }
}

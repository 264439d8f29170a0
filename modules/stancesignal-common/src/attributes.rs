use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::catalog;
use crate::types::{Attribute, AttributeInference, AttributeType};

/// A raw attribute record: `(key, value)` pairs in insertion order.
///
/// Keys are not validated; records may carry fields outside the attribute
/// schema. Deserializes from a JSON object, keeping document order. Non-string
/// JSON values read as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawAttributes(Vec<(String, Option<String>)>);

impl RawAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: impl Into<String>, value: Option<impl Into<String>>) {
        self.0.push((key.into(), value.map(Into::into)));
    }

    /// Project inference output into the stored-attribute shape, keeping only
    /// entries at or above `min_confidence`.
    pub fn from_inferences(inferences: &[AttributeInference], min_confidence: f32) -> Self {
        inferences
            .iter()
            .filter(|inf| inf.confidence >= min_confidence)
            .map(|inf| {
                (
                    inf.attribute_type.as_str().to_string(),
                    Some(inf.value.clone()),
                )
            })
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_deref()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, Option<V>)> for RawAttributes {
    fn from_iter<I: IntoIterator<Item = (K, Option<V>)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.map(Into::into)))
                .collect(),
        )
    }
}

impl Serialize for RawAttributes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in &self.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for RawAttributes {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RawAttributesVisitor;

        impl<'de> Visitor<'de> for RawAttributesVisitor {
            type Value = RawAttributes;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object of attribute codes")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut pairs = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, value)) = access.next_entry::<String, serde_json::Value>()? {
                    let value = match value {
                        serde_json::Value::String(s) => Some(s),
                        _ => None,
                    };
                    pairs.push((key, value));
                }
                Ok(RawAttributes(pairs))
            }
        }

        deserializer.deserialize_map(RawAttributesVisitor)
    }
}

/// Map a raw attribute record into display-ready attributes.
///
/// Null values and keys outside [`AttributeType`] are dropped. Codes missing
/// from the catalog pass through as their own label. Output keeps the input
/// order; sort downstream if canonical order is needed.
pub fn map_attributes(attrs: Option<&RawAttributes>) -> Vec<Attribute> {
    let Some(attrs) = attrs else {
        return Vec::new();
    };

    attrs
        .iter()
        .filter_map(|(key, value)| {
            let value = value?;
            let attribute_type = AttributeType::from_key(key)?;
            let label = catalog::label_for(attribute_type, value).unwrap_or(value);
            Some(Attribute {
                attribute_type,
                value: label.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attr(attribute_type: AttributeType, value: &str) -> Attribute {
        Attribute {
            attribute_type,
            value: value.to_string(),
        }
    }

    #[test]
    fn none_maps_to_empty() {
        assert!(map_attributes(None).is_empty());
    }

    #[test]
    fn drops_unknown_keys_and_null_values() {
        let raw: RawAttributes = [
            ("gender", Some("f")),
            ("unknown_field", Some("x")),
            ("age_range", None),
        ]
        .into_iter()
        .collect();

        let mapped = map_attributes(Some(&raw));
        assert_eq!(mapped, vec![attr(AttributeType::Gender, "f")]);
    }

    #[test]
    fn known_codes_map_to_catalog_labels() {
        let raw: RawAttributes = [("gender", Some("female")), ("occupation", Some("student"))]
            .into_iter()
            .collect();

        let mapped = map_attributes(Some(&raw));
        assert_eq!(
            mapped,
            vec![
                attr(AttributeType::Gender, "女性"),
                attr(AttributeType::Occupation, "学生"),
            ]
        );
    }

    #[test]
    fn preserves_input_order_not_enumeration_order() {
        let raw: RawAttributes = [
            ("political_party", Some("ldp")),
            ("age_range", Some("40s")),
            ("gender", Some("male")),
        ]
        .into_iter()
        .collect();

        let types: Vec<_> = map_attributes(Some(&raw))
            .into_iter()
            .map(|a| a.attribute_type)
            .collect();
        assert_eq!(
            types,
            vec![
                AttributeType::PoliticalParty,
                AttributeType::AgeRange,
                AttributeType::Gender,
            ]
        );
    }

    #[test]
    fn deserialize_keeps_document_order() {
        let raw: RawAttributes = serde_json::from_str(
            r#"{"occupation": "employee", "gender": null, "education": "bachelor", "score": 3}"#,
        )
        .unwrap();

        let pairs: Vec<_> = raw.iter().collect();
        assert_eq!(
            pairs,
            vec![
                ("occupation", Some("employee")),
                ("gender", None),
                ("education", Some("bachelor")),
                ("score", None),
            ]
        );

        let mapped = map_attributes(Some(&raw));
        assert_eq!(
            mapped,
            vec![
                attr(AttributeType::Occupation, "会社員"),
                attr(AttributeType::Education, "大学卒"),
            ]
        );
    }

    #[test]
    fn serialize_writes_an_object_in_order() {
        let mut raw = RawAttributes::new();
        raw.push("political_stance", Some("center"));
        raw.push("gender", None::<String>);

        let json = serde_json::to_string(&raw).unwrap();
        assert_eq!(json, r#"{"political_stance":"center","gender":null}"#);
    }

    #[test]
    fn from_inferences_applies_confidence_floor() {
        let inferences = vec![
            AttributeInference {
                attribute_type: AttributeType::AgeRange,
                value: "20s".to_string(),
                confidence: 0.8,
            },
            AttributeInference {
                attribute_type: AttributeType::Gender,
                value: "female".to_string(),
                confidence: 0.3,
            },
        ];

        let raw = RawAttributes::from_inferences(&inferences, 0.6);
        assert_eq!(raw.len(), 1);
        assert_eq!(
            map_attributes(Some(&raw)),
            vec![attr(AttributeType::AgeRange, "20代")]
        );
    }
}

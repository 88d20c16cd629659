//! Conversion from the API's JSON payload into records.
//!
//! The table only reads scalar columns, so nested objects and arrays
//! (JSONPlaceholder's `address` and `company` members) are skipped rather
//! than flattened. No schema validation beyond "the body is an array of
//! objects": the table-state engine trusts records to expose the keys it
//! configured.

use waitlist_core::model::Record;
use waitlist_core::model::Value;

use crate::error::Error;

/// Parse the response body into records.
///
/// Each array element becomes one [`Record`]. The record id comes from the
/// element's integer `id` member, falling back to the array position when
/// it is absent or non-integer.
pub fn records_from_json(body: serde_json::Value) -> Result<Vec<Record>, Error> {
    let serde_json::Value::Array(items) = body else {
        return Err(Error::parse("expected a JSON array of records"));
    };

    let records = items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            serde_json::Value::Object(map) => Ok(record_from_object(index, map)),
            other => Err(Error::parse(format!(
                "expected a JSON object at index {index}, got {other}"
            ))),
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(records)
}

fn record_from_object(index: usize, map: serde_json::Map<String, serde_json::Value>) -> Record {
    let id = map
        .get("id")
        .and_then(serde_json::Value::as_i64)
        .unwrap_or(index as i64);

    let mut record = Record::new(id);
    for (key, value) in map {
        if let Some(scalar) = scalar_value(value) {
            record.insert(key, scalar);
        }
    }
    record
}

/// Map a JSON scalar to a field value. Objects and arrays return `None`.
fn scalar_value(value: serde_json::Value) -> Option<Value> {
    match value {
        serde_json::Value::Null => Some(Value::Null),
        serde_json::Value::Bool(b) => Some(Value::Bool(b)),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Some(Value::Int(i))
            } else {
                n.as_f64().map(Value::Float)
            }
        }
        serde_json::Value::String(s) => Some(Value::String(s)),
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_users_payload() {
        let json = serde_json::json!([
            {
                "id": 1,
                "name": "Leanne Graham",
                "email": "Sincere@april.biz",
                "phone": "1-770-736-8031 x56442",
                "website": "hildegard.org",
                "address": { "city": "Gwenborough" },
                "company": { "name": "Romaguera-Crona" }
            },
            {
                "id": 2,
                "name": "Ervin Howell",
                "email": "Shanna@melissa.tv",
                "phone": "010-692-6593 x09125",
                "website": "anastasia.net"
            }
        ]);

        let records = records_from_json(json).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id(), 1);
        assert_eq!(records[0].get_string("name").unwrap(), Some("Leanne Graham"));
        assert_eq!(records[1].get_string("website").unwrap(), Some("anastasia.net"));
        // Nested objects are skipped, not flattened.
        assert!(!records[0].contains("address"));
        assert!(!records[0].contains("company"));
    }

    #[test]
    fn test_parse_id_fallback_to_index() {
        let json = serde_json::json!([
            { "name": "No Id" },
            { "id": "not-a-number", "name": "String Id" }
        ]);

        let records = records_from_json(json).unwrap();
        assert_eq!(records[0].id(), 0);
        assert_eq!(records[1].id(), 1);
        // The raw id member is still kept as a field.
        assert_eq!(records[1].get_string("id").unwrap(), Some("not-a-number"));
    }

    #[test]
    fn test_parse_scalar_types() {
        let json = serde_json::json!([
            { "id": 7, "active": true, "score": 4.5, "note": null }
        ]);

        let records = records_from_json(json).unwrap();
        let record = &records[0];
        assert_eq!(record.get_bool("active").unwrap(), Some(true));
        assert_eq!(record.get_float("score").unwrap(), Some(4.5));
        assert_eq!(record.get_string("note").unwrap(), None);
        assert_eq!(record.get_int("id").unwrap(), Some(7));
    }

    #[test]
    fn test_parse_rejects_non_array() {
        let json = serde_json::json!({ "users": [] });
        assert!(records_from_json(json).is_err());
    }

    #[test]
    fn test_parse_rejects_non_object_element() {
        let json = serde_json::json!([1, 2, 3]);
        assert!(records_from_json(json).is_err());
    }
}

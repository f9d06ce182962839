//! Envelope reconstruction.
//!
//! The projector always returns a sequence. Clients expect the shape they
//! would have received without `fields`, so the adapter restores it from the
//! original payload's [`Cardinality`].

use serde_json::{Map, Value};

use crate::sliceable::Cardinality;

/// Rebuilds the response envelope from projected records.
///
/// - nothing left of a single record: `{}`
/// - nothing left of a sequence: `[]`
/// - one record left of a single record: the bare record
/// - anything else: an array
pub fn rebuild_envelope(original: Cardinality, mut projected: Vec<Value>) -> Value {
    match (original, projected.len()) {
        (Cardinality::Single, 0) => Value::Object(Map::new()),
        (Cardinality::Single, 1) => projected.pop().unwrap_or(Value::Null),
        _ => Value::Array(projected),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_single_dropped_is_empty_object() {
        assert_eq!(rebuild_envelope(Cardinality::Single, vec![]), json!({}));
    }

    #[test]
    fn test_many_dropped_is_empty_array() {
        assert_eq!(rebuild_envelope(Cardinality::Many, vec![]), json!([]));
    }

    #[test]
    fn test_single_is_unwrapped() {
        let projected = vec![json!({"email": "a@x"})];
        assert_eq!(
            rebuild_envelope(Cardinality::Single, projected),
            json!({"email": "a@x"})
        );
    }

    #[test]
    fn test_many_with_one_element_stays_array() {
        let projected = vec![json!({"email": "a@x"})];
        assert_eq!(
            rebuild_envelope(Cardinality::Many, projected),
            json!([{"email": "a@x"}])
        );
    }
}

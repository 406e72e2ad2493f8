//! # Selector Queries
//!
//! Equality subset of CouchDB-style `{"selector": {...}}` documents, enough
//! for rich queries over private collections.
//!
//! A selector field may be a nested object (`{"owner": {"id": "x"}}`), a
//! dotted path (`{"owner.id": "x"}`) or an explicit `{"$eq": value}`.

use crate::domain::LedgerError;
use serde_json::{Map, Value};

/// Parsed selector.
#[derive(Clone, Debug)]
pub struct Selector {
    fields: Map<String, Value>,
}

impl Selector {
    /// Parse a query document. The `selector` member must be an object.
    pub fn parse(query: &str) -> Result<Self, LedgerError> {
        let doc: Value =
            serde_json::from_str(query).map_err(|e| LedgerError::InvalidQuery(e.to_string()))?;

        match doc.get("selector") {
            Some(Value::Object(fields)) => Ok(Self {
                fields: fields.clone(),
            }),
            Some(_) => Err(LedgerError::InvalidQuery(
                "selector must be an object".to_string(),
            )),
            None => Err(LedgerError::InvalidQuery("missing selector".to_string())),
        }
    }

    /// Whether a stored document satisfies every condition.
    pub fn matches(&self, doc: &Value) -> Result<bool, LedgerError> {
        match_fields(doc, &self.fields)
    }
}

fn match_fields(doc: &Value, fields: &Map<String, Value>) -> Result<bool, LedgerError> {
    for (field, expected) in fields {
        if let Some(op) = field.strip_prefix('$') {
            if op != "eq" {
                return Err(LedgerError::InvalidQuery(format!(
                    "unsupported operator ${op}"
                )));
            }
            if doc != expected {
                return Ok(false);
            }
            continue;
        }

        let Some(actual) = lookup(doc, field) else {
            return Ok(false);
        };

        let ok = match expected {
            Value::Object(nested) => match_fields(actual, nested)?,
            other => actual == other,
        };
        if !ok {
            return Ok(false);
        }
    }
    Ok(true)
}

fn lookup<'v>(doc: &'v Value, path: &str) -> Option<&'v Value> {
    path.split('.').try_fold(doc, |v, segment| v.get(segment))
}

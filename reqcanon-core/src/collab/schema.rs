use serde_json::Value;

/// Schema key of the HTTP request interface.
pub const HTTP_INTERFACE_SCHEMA: &str = "request";

/// Structural pre-validation of raw interface data.
pub trait SchemaValidator: Send + Sync {
    /// Returns every violation found, or `Ok(())` when `data` conforms.
    fn validate(&self, data: &Value, schema: &str) -> Result<(), Vec<String>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Null,
    String,
    Object,
    Array,
    Any,
}

impl Kind {
    fn matches(&self, value: &Value) -> bool {
        match self {
            Kind::Null => value.is_null(),
            Kind::String => value.is_string(),
            Kind::Object => value.is_object(),
            Kind::Array => value.is_array(),
            Kind::Any => true,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Kind::Null => "null",
            Kind::String => "string",
            Kind::Object => "object",
            Kind::Array => "array",
            Kind::Any => "any",
        }
    }
}

const HTTP_FIELDS: &[(&str, &[Kind])] = &[
    ("url", &[Kind::String, Kind::Null]),
    ("method", &[Kind::String, Kind::Null]),
    ("fragment", &[Kind::String, Kind::Null]),
    ("inferred_content_type", &[Kind::String, Kind::Null]),
    ("query_string", &[Kind::String, Kind::Object, Kind::Array, Kind::Null]),
    ("cookies", &[Kind::String, Kind::Object, Kind::Array, Kind::Null]),
    ("headers", &[Kind::Object, Kind::Array, Kind::Null]),
    ("env", &[Kind::Object, Kind::Null]),
    ("data", &[Kind::Any]),
];

/// Built-in schema for the `request` interface.
///
/// Checks the top-level shape and the type of every known field, plus the
/// pair shape of list-form headers. Unknown fields are allowed.
#[derive(Debug, Default, Clone, Copy)]
pub struct HttpInterfaceSchema;

impl SchemaValidator for HttpInterfaceSchema {
    fn validate(&self, data: &Value, schema: &str) -> Result<(), Vec<String>> {
        if schema != HTTP_INTERFACE_SCHEMA {
            return Err(vec![format!("unknown schema '{schema}'")]);
        }

        let Some(obj) = data.as_object() else {
            return Err(vec!["interface data must be an object".to_string()]);
        };

        let mut errors = Vec::new();

        for (field, kinds) in HTTP_FIELDS {
            let Some(value) = obj.get(*field) else {
                continue;
            };
            if !kinds.iter().any(|k| k.matches(value)) {
                let expected: Vec<&str> = kinds.iter().map(Kind::name).collect();
                errors.push(format!("'{field}' must be one of: {}", expected.join(", ")));
            }
        }

        if let Some(Value::Array(headers)) = obj.get("headers") {
            for (i, item) in headers.iter().enumerate() {
                if !is_header_pair(item) {
                    errors.push(format!("'headers[{i}]' must be a [name, value] pair"));
                }
            }
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

fn is_header_pair(item: &Value) -> bool {
    match item {
        // Dropped by the header formatter.
        Value::Null => true,
        Value::Array(pair) => matches!(
            pair.as_slice(),
            [Value::String(_), v] if !v.is_object()
        ),
        _ => false,
    }
}

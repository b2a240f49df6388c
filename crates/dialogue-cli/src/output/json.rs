//! JSON output formatting

use dialogue_core::Message;
use serde_json::{Map, Value};

/// Wrap a converted result under a single key, e.g. `{"text": ...}`
pub fn wrap(key: &str, result: &str) -> Value {
    let mut map = Map::new();
    map.insert(key.to_string(), Value::String(result.to_string()));
    Value::Object(map)
}

/// Serialize a value, indented when `pretty` is set
pub fn render(value: &Value, pretty: bool) -> anyhow::Result<String> {
    if pretty {
        Ok(serde_json::to_string_pretty(value)?)
    } else {
        Ok(serde_json::to_string(value)?)
    }
}

/// Messages as one pretty array, or one compact object per line
pub fn format_messages(messages: &[Message], pretty: bool) -> anyhow::Result<String> {
    if pretty {
        return Ok(serde_json::to_string_pretty(messages)?);
    }
    let lines = messages
        .iter()
        .map(serde_json::to_string)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(lines.join("\n"))
}

//! Normalization of the three upstream response shapes into a [`Skin`].
//!
//! Absent data (null body, missing or null containers) yields
//! [`Skin::empty`]. Data present with the wrong JSON type fails with
//! [`SkinError::MalformedResponse`].

use serde_json::{Map, Value};

use disguise_types::error::SkinError;
use disguise_types::skin::Skin;

/// `{ properties: [ { value, signature }, ... ] }`. The last non-null entry wins.
pub fn skin_from_profile(provider: &str, body: &Value) -> Result<Skin, SkinError> {
    let Some(profile) = as_object(provider, body, "profile")? else {
        return Ok(Skin::empty());
    };

    let properties = match profile.get("properties") {
        None | Some(Value::Null) => return Ok(Skin::empty()),
        Some(Value::Array(items)) => items,
        Some(other) => {
            return Err(SkinError::malformed(
                provider,
                format!("`properties` is {}, expected an array", kind(other)),
            ));
        }
    };

    let mut skin = Skin::empty();
    for entry in properties {
        if let Some(property) = as_object(provider, entry, "property entry")? {
            skin = Skin::from_parts(
                string_field(provider, property, "value")?,
                string_field(provider, property, "signature")?,
            );
        }
    }
    Ok(skin)
}

/// `{ raw: { properties: [...] } }` -- the profile shape one level down.
pub fn skin_from_raw_profile(provider: &str, body: &Value) -> Result<Skin, SkinError> {
    let Some(wrapper) = as_object(provider, body, "response")? else {
        return Ok(Skin::empty());
    };
    match wrapper.get("raw") {
        Some(raw) => skin_from_profile(provider, raw),
        None => Ok(Skin::empty()),
    }
}

/// `{ data: { texture: { value, signature } } }` -- a single texture object.
pub fn skin_from_texture_bundle(provider: &str, body: &Value) -> Result<Skin, SkinError> {
    let Some(root) = as_object(provider, body, "response")? else {
        return Ok(Skin::empty());
    };
    let Some(data) = object_field(provider, root, "data")? else {
        return Ok(Skin::empty());
    };
    let Some(texture) = object_field(provider, data, "texture")? else {
        return Ok(Skin::empty());
    };
    Ok(Skin::from_parts(
        string_field(provider, texture, "value")?,
        string_field(provider, texture, "signature")?,
    ))
}

fn as_object<'a>(
    provider: &str,
    value: &'a Value,
    what: &str,
) -> Result<Option<&'a Map<String, Value>>, SkinError> {
    match value {
        Value::Null => Ok(None),
        Value::Object(map) => Ok(Some(map)),
        other => Err(SkinError::malformed(
            provider,
            format!("{what} is {}, expected an object", kind(other)),
        )),
    }
}

fn object_field<'a>(
    provider: &str,
    map: &'a Map<String, Value>,
    key: &str,
) -> Result<Option<&'a Map<String, Value>>, SkinError> {
    match map.get(key) {
        None => Ok(None),
        Some(value) => as_object(provider, value, &format!("`{key}`")),
    }
}

fn string_field(
    provider: &str,
    map: &Map<String, Value>,
    key: &str,
) -> Result<Option<String>, SkinError> {
    match map.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(SkinError::malformed(
            provider,
            format!("`{key}` is {}, expected a string", kind(other)),
        )),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

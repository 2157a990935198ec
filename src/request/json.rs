//! Bracket-path field reconstruction
//!
//! Rebuilds nested JSON from HTTPie field paths such as `user[name]`,
//! `items[0]` and `tags[]`. Only used when nested field reconstruction is
//! switched on; by default field keys are kept literally.

use serde_json::{Map, Value as JsonValue};
use winnow::combinator::{delimited, opt, repeat};
use winnow::prelude::*;
use winnow::token::take_while;
use winnow::ModalResult;

use crate::errors::{ConvertError, Result};

/// Largest array index accepted in a path, bounds the allocation for `a[n]`
const MAX_ARRAY_INDEX: usize = 10000;

/// One step of a field path
#[derive(Debug, Clone, PartialEq)]
enum Segment {
    /// `name` or `[name]`
    Key(String),
    /// `[3]`
    Index(usize),
    /// `[]`
    Append,
}

/// Check if a field key uses bracket notation
pub fn is_nested_path(key: &str) -> bool {
    key.contains('[')
}

/// Store `value` in `root` at the location named by `path`
///
/// Intermediate objects and arrays are created on demand. Fails when the
/// path is malformed or runs into an existing value of another shape.
pub fn insert_path(root: &mut JsonValue, path: &str, value: JsonValue) -> Result<()> {
    let segments = parse_path(path)?;

    // `[0]=x` and `[]=x` turn a still-empty root object into an array
    let root_is_empty_object = root.as_object().map(Map::is_empty).unwrap_or(false);
    if root_is_empty_object && !matches!(segments.first(), Some(Segment::Key(_))) {
        *root = JsonValue::Null;
    }

    let mut slot = root;
    for segment in &segments {
        slot = descend(slot, segment, path)?;
    }
    *slot = value;
    Ok(())
}

fn descend<'a>(slot: &'a mut JsonValue, segment: &Segment, path: &str) -> Result<&'a mut JsonValue> {
    match segment {
        Segment::Key(key) => {
            if slot.is_null() {
                *slot = JsonValue::Object(Map::new());
            }
            match slot {
                JsonValue::Object(map) => Ok(map.entry(key.clone()).or_insert(JsonValue::Null)),
                _ => Err(shape_conflict(path, "an object")),
            }
        }
        Segment::Index(idx) => {
            if slot.is_null() {
                *slot = JsonValue::Array(Vec::new());
            }
            match slot {
                JsonValue::Array(items) => {
                    if items.len() <= *idx {
                        items.resize(*idx + 1, JsonValue::Null);
                    }
                    Ok(&mut items[*idx])
                }
                _ => Err(shape_conflict(path, "an array")),
            }
        }
        Segment::Append => {
            if slot.is_null() {
                *slot = JsonValue::Array(Vec::new());
            }
            match slot {
                JsonValue::Array(items) => {
                    let at = items.len();
                    items.push(JsonValue::Null);
                    Ok(&mut items[at])
                }
                _ => Err(shape_conflict(path, "an array")),
            }
        }
    }
}

fn shape_conflict(path: &str, expected: &str) -> ConvertError {
    ConvertError::FieldPath {
        path: path.to_string(),
        message: format!("expected {} but an earlier field set another value", expected),
    }
}

fn segment_from_brackets(content: &str) -> Segment {
    if content.is_empty() {
        Segment::Append
    } else if let Ok(idx) = content.parse::<usize>() {
        Segment::Index(idx)
    } else {
        Segment::Key(content.to_string())
    }
}

fn bare_key(input: &mut &str) -> ModalResult<Segment> {
    take_while(1.., |c: char| c != '[' && c != ']')
        .map(|key: &str| Segment::Key(key.to_string()))
        .parse_next(input)
}

fn bracketed(input: &mut &str) -> ModalResult<Segment> {
    delimited('[', take_while(0.., |c: char| c != '[' && c != ']'), ']')
        .map(segment_from_brackets)
        .parse_next(input)
}

fn path_segments(input: &mut &str) -> ModalResult<Vec<Segment>> {
    let head = opt(bare_key).parse_next(input)?;
    let tail: Vec<Segment> = repeat(0.., bracketed).parse_next(input)?;
    Ok(head.into_iter().chain(tail).collect())
}

fn parse_path(path: &str) -> Result<Vec<Segment>> {
    let error = |message: String| ConvertError::FieldPath {
        path: path.to_string(),
        message,
    };

    let mut input = path;
    let segments = path_segments(&mut input).map_err(|e| error(e.to_string()))?;

    if !input.is_empty() {
        return Err(error(format!("unexpected '{}'", input)));
    }
    if segments.is_empty() {
        return Err(error("empty path".to_string()));
    }
    for segment in &segments {
        if let Segment::Index(idx) = segment {
            if *idx > MAX_ARRAY_INDEX {
                return Err(error(format!(
                    "array index {} exceeds maximum allowed ({})",
                    idx, MAX_ARRAY_INDEX
                )));
            }
        }
    }

    Ok(segments)
}

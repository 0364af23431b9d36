//! JSON Patch (RFC 6902) over `serde_json::Value`
//!
//! Operations run strictly in order; each one sees the effects of the previous
//! ones. `apply` works on a copy and only replaces the caller's document when
//! every operation succeeded, so a failing patch leaves the input untouched.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

// ============================================================================
// Wire types
// ============================================================================

/// One patch instruction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum PatchOperation {
    Add { path: String, value: Value },
    Remove { path: String },
    Replace { path: String, value: Value },
    Move { from: String, path: String },
    Copy { from: String, path: String },
    Test { path: String, value: Value },
}

impl PatchOperation {
    /// Target location of the operation
    pub fn path(&self) -> &str {
        match self {
            PatchOperation::Add { path, .. }
            | PatchOperation::Remove { path }
            | PatchOperation::Replace { path, .. }
            | PatchOperation::Move { path, .. }
            | PatchOperation::Copy { path, .. }
            | PatchOperation::Test { path, .. } => path,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PatchOperation::Add { .. } => "add",
            PatchOperation::Remove { .. } => "remove",
            PatchOperation::Replace { .. } => "replace",
            PatchOperation::Move { .. } => "move",
            PatchOperation::Copy { .. } => "copy",
            PatchOperation::Test { .. } => "test",
        }
    }
}

/// Ordered list of operations, serialized as a bare JSON array
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JsonPatch(pub Vec<PatchOperation>);

impl JsonPatch {
    pub fn operations(&self) -> &[PatchOperation] {
        &self.0
    }
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatchError {
    #[error("'{0}' is not a valid JSON pointer")]
    InvalidPointer(String),

    #[error("the target location '{0}' was not found")]
    PathNotFound(String),

    #[error("'{0}' is not a valid array index")]
    InvalidIndex(String),

    #[error("the current value at '{0}' does not match the tested value")]
    TestFailed(String),

    #[error("cannot move '{from}' into its own child '{path}'")]
    MoveIntoDescendant { from: String, path: String },

    #[error("the document root cannot be removed")]
    RootRemoval,
}

/// Failing operation together with its position in the patch
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("operation #{index} ({op} {path}) failed: {source}")]
pub struct PatchFailure {
    pub index: usize,
    pub op: &'static str,
    pub path: String,
    #[source]
    pub source: PatchError,
}

// ============================================================================
// Application
// ============================================================================

/// Apply every operation to `doc`, all or nothing
pub fn apply(doc: &mut Value, ops: &[PatchOperation]) -> Result<(), PatchFailure> {
    let mut working = doc.clone();
    for (index, op) in ops.iter().enumerate() {
        apply_one(&mut working, op).map_err(|source| PatchFailure {
            index,
            op: op.name(),
            path: op.path().to_string(),
            source,
        })?;
    }
    *doc = working;
    Ok(())
}

fn apply_one(doc: &mut Value, op: &PatchOperation) -> Result<(), PatchError> {
    match op {
        PatchOperation::Add { path, value } => add(doc, path, value.clone()),
        PatchOperation::Remove { path } => remove(doc, path).map(|_| ()),
        PatchOperation::Replace { path, value } => replace(doc, path, value.clone()),
        PatchOperation::Move { from, path } => {
            validate_pointer(from)?;
            validate_pointer(path)?;
            if from == path {
                return lookup(doc, from).map(|_| ());
            }
            if path.starts_with(&format!("{}/", from)) {
                return Err(PatchError::MoveIntoDescendant {
                    from: from.clone(),
                    path: path.clone(),
                });
            }
            let value = remove(doc, from)?;
            add(doc, path, value)
        }
        PatchOperation::Copy { from, path } => {
            let value = lookup(doc, from)?.clone();
            add(doc, path, value)
        }
        PatchOperation::Test { path, value } => {
            if lookup(doc, path)? == value {
                Ok(())
            } else {
                Err(PatchError::TestFailed(path.clone()))
            }
        }
    }
}

fn add(doc: &mut Value, path: &str, value: Value) -> Result<(), PatchError> {
    validate_pointer(path)?;
    if path.is_empty() {
        *doc = value;
        return Ok(());
    }

    let (parent_path, token) = split_last(path)?;
    let parent = doc
        .pointer_mut(parent_path)
        .ok_or_else(|| PatchError::PathNotFound(path.to_string()))?;

    match parent {
        Value::Object(map) => {
            map.insert(token, value);
            Ok(())
        }
        Value::Array(items) => {
            if token == "-" {
                items.push(value);
                return Ok(());
            }
            let index = parse_index(&token).ok_or_else(|| PatchError::InvalidIndex(path.to_string()))?;
            if index > items.len() {
                return Err(PatchError::InvalidIndex(path.to_string()));
            }
            items.insert(index, value);
            Ok(())
        }
        _ => Err(PatchError::PathNotFound(path.to_string())),
    }
}

fn remove(doc: &mut Value, path: &str) -> Result<Value, PatchError> {
    validate_pointer(path)?;
    if path.is_empty() {
        return Err(PatchError::RootRemoval);
    }

    let (parent_path, token) = split_last(path)?;
    let parent = doc
        .pointer_mut(parent_path)
        .ok_or_else(|| PatchError::PathNotFound(path.to_string()))?;

    match parent {
        Value::Object(map) => map
            .remove(&token)
            .ok_or_else(|| PatchError::PathNotFound(path.to_string())),
        Value::Array(items) => {
            let index = parse_index(&token).ok_or_else(|| PatchError::InvalidIndex(path.to_string()))?;
            if index >= items.len() {
                return Err(PatchError::InvalidIndex(path.to_string()));
            }
            Ok(items.remove(index))
        }
        _ => Err(PatchError::PathNotFound(path.to_string())),
    }
}

fn replace(doc: &mut Value, path: &str, value: Value) -> Result<(), PatchError> {
    validate_pointer(path)?;
    let target = doc
        .pointer_mut(path)
        .ok_or_else(|| PatchError::PathNotFound(path.to_string()))?;
    *target = value;
    Ok(())
}

fn lookup<'a>(doc: &'a Value, path: &str) -> Result<&'a Value, PatchError> {
    validate_pointer(path)?;
    doc.pointer(path)
        .ok_or_else(|| PatchError::PathNotFound(path.to_string()))
}

// ============================================================================
// JSON pointer helpers (RFC 6901)
// ============================================================================

fn validate_pointer(path: &str) -> Result<(), PatchError> {
    if !path.is_empty() && !path.starts_with('/') {
        return Err(PatchError::InvalidPointer(path.to_string()));
    }
    let mut chars = path.chars();
    while let Some(c) = chars.next() {
        if c == '~' && !matches!(chars.next(), Some('0') | Some('1')) {
            return Err(PatchError::InvalidPointer(path.to_string()));
        }
    }
    Ok(())
}

/// Split into the parent pointer and the unescaped last reference token
fn split_last(path: &str) -> Result<(&str, String), PatchError> {
    let idx = path
        .rfind('/')
        .ok_or_else(|| PatchError::InvalidPointer(path.to_string()))?;
    let token = path[idx + 1..].replace("~1", "/").replace("~0", "~");
    Ok((&path[..idx], token))
}

fn parse_index(token: &str) -> Option<usize> {
    if token.is_empty() || (token.len() > 1 && token.starts_with('0')) {
        return None;
    }
    if !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}

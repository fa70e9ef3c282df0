// Author: Dustin Pilgrim
// License: MIT

use indexmap::IndexMap;

use super::section::{SectionPath, SectionState};
use crate::ast::{Map, Value};

/// How a flushed section is combined with the document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) enum MergeKind {
    /// Section closed by the next header.
    Deep,
    /// Section closed by end of input. Top-level keys are replaced wholesale,
    /// so a final `[a:y]` drops an earlier `[a:x]`. Consumers rely on this.
    Shallow,
}

pub(super) fn flush(document: &mut Map, state: SectionState, kind: MergeKind) {
    match state.path {
        SectionPath::Global => {
            tracing::debug!(keys = state.values.len(), "flushing global section");
            *document = state.values;
        }
        SectionPath::Named(segments) => {
            tracing::debug!(section = %segments.join("."), merge = ?kind, "flushing section");
            let tree = wrap(&segments, state.values);
            match kind {
                MergeKind::Deep => merge_deep(document, tree),
                MergeKind::Shallow => merge_shallow(document, tree),
            }
        }
    }
}

/// Nest `values` behind each segment, innermost last: `[a, b]` gives
/// `{a: {b: values}}`. No segments returns `values` as is.
pub fn wrap(segments: &[String], values: Map) -> Map {
    segments.iter().rev().fold(values, |inner, seg| {
        let mut level = Map::new();
        level.insert(seg.clone(), Value::Map(inner));
        level
    })
}

/// Recursive key-wise merge, later values win on leaf collisions. Runs off an
/// explicit work list so depth is not limited by the call stack.
pub fn merge_deep(target: &mut Map, incoming: Map) {
    let mut pending: Vec<(&mut Map, Map)> = vec![(target, incoming)];

    while let Some((target, incoming)) = pending.pop() {
        let mut nested: IndexMap<String, Map> = IndexMap::new();
        for (key, value) in incoming {
            match value {
                Value::Map(map) if matches!(target.get(&key), Some(Value::Map(_))) => {
                    nested.insert(key, map);
                }
                value => {
                    target.insert(key, value);
                }
            }
        }

        if nested.is_empty() {
            continue;
        }
        for (key, existing) in target.iter_mut() {
            if let (Some(map), Value::Map(existing)) = (nested.shift_remove(key), existing) {
                pending.push((existing, map));
            }
        }
    }
}

/// Top-level overwrite only.
pub fn merge_shallow(target: &mut Map, incoming: Map) {
    for (key, value) in incoming {
        target.insert(key, value);
    }
}

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: helpers are shared across spec binaries,
// and not every spec uses every helper.
#![allow(dead_code)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use serde_json::{json, Value};

/// Parses `text` and returns the JSON projection of the AST.
pub fn ast(text: &str) -> Value {
    let groups = fexpr::parse(text).unwrap_or_else(|e| panic!("failed to parse {text:?}: {e}"));
    serde_json::to_value(&groups).expect("AST serializes")
}

pub fn token(kind: &str, literal: &str) -> Value {
    json!({ "type": kind, "literal": literal })
}

pub fn join(literal: &str) -> Value {
    token("join", literal)
}

/// Projection of a group holding one comparison.
pub fn clause(
    join_literal: &str,
    left: (&str, &str),
    sign: &str,
    right: (&str, &str),
) -> Value {
    json!({
        "operation": join(join_literal),
        "item": {
            "left": token(left.0, left.1),
            "operation": token("sign", sign),
            "right": token(right.0, right.1),
        }
    })
}

/// Projection of a group holding a parenthesized sub-expression.
pub fn group(join_literal: &str, items: Vec<Value>) -> Value {
    json!({ "operation": join(join_literal), "item": items })
}

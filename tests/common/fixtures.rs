use serde_json::{Value, json};

/// A page holding a single view with the given style.
pub fn page_with_view(style: Value) -> Value {
    json!({
        "type": "PAGE",
        "style": {},
        "children": [
            { "type": "VIEW", "style": style, "children": [] }
        ]
    })
}

/// A page with two stacked views, the first carrying `first_style`.
pub fn page_with_stacked_views(first_style: Value) -> Value {
    json!({
        "type": "PAGE",
        "props": { "size": "A4" },
        "style": { "padding": 10 },
        "children": [
            { "type": "VIEW", "style": first_style },
            { "type": "TEXT", "style": { "height": 12 } }
        ]
    })
}

use serde_json::{Value, json};

pub const STORE_ITEM_ID: &str = "{12345678-1234-1234-1234-123456789ABC}";

/// A document description with the given body nodes.
pub fn document(body: Vec<Value>) -> Value {
    json!({ "body": body })
}

pub fn text(text: &str) -> Value {
    json!({ "type": "text", "text": text })
}

pub fn paragraph(children: Vec<Value>) -> Value {
    json!({ "type": "paragraph", "children": children })
}

/// A plain-text control holding one run.
pub fn inline_text(tag: &str, content: &str) -> Value {
    json!({
        "type": "inlineText",
        "properties": { "tag": tag },
        "children": [text(content)]
    })
}

pub fn rich_inline_text(tag: &str, children: Vec<Value>) -> Value {
    json!({
        "type": "inlineText",
        "properties": { "tag": tag },
        "richText": true,
        "children": children
    })
}

pub fn block(tag: &str, children: Vec<Value>) -> Value {
    json!({
        "type": "block",
        "properties": { "tag": tag },
        "children": children
    })
}

/// A dropdown whose options are `(display text, value)` pairs.
pub fn dropdown(tag: &str, mode: &str, options: &[(&str, &str)]) -> Value {
    let options: Vec<Value> = options
        .iter()
        .map(|(display, value)| json!({ "displayText": display, "value": value }))
        .collect();
    json!({
        "type": "dropdown",
        "properties": { "tag": tag },
        "mode": mode,
        "options": options
    })
}

pub fn checkbox(tag: &str, checked: bool) -> Value {
    json!({
        "type": "checkbox",
        "properties": { "tag": tag },
        "checked": checked
    })
}

pub fn bound_date(tag: &str, xpath: &str, store_item_id: &str) -> Value {
    json!({
        "type": "date",
        "properties": {
            "tag": tag,
            "dataBinding": { "xpath": xpath, "storeItemId": store_item_id }
        }
    })
}

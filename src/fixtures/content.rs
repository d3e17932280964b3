use serde_json::{json, Value};

use crate::model::{Issue, Label};

pub fn get_label_json(name: &str, color: &str, description: Option<&str>) -> Value {
    json!({
        "id": 208045946,
        "node_id": "MDU6TGFiZWwyMDgwNDU5NDY=",
        "url": "",
        "name": name,
        "color": color,
        "default": false,
        "description": description,
    })
}

pub fn get_issue_json(title: &str, body: Option<&str>, labels: &[Value]) -> Value {
    json!({
        "id": 1,
        "number": 1,
        "state": "open",
        "url": "",
        "html_url": "",
        "title": title,
        "body": body,
        "labels": labels,
        "comments": 0,
    })
}

pub fn get_pull_request_json(title: &str) -> Value {
    let mut pull_request = get_issue_json(title, Some(""), &[]);
    pull_request["pull_request"] = json!({ "url": "", "html_url": "" });

    pull_request
}

pub fn get_board_json(id: u64, name: &str, body: Option<&str>) -> Value {
    json!({
        "id": id,
        "number": 1,
        "url": "",
        "columns_url": "",
        "name": name,
        "body": body,
        "state": "open",
    })
}

pub fn get_column_json(id: u64, name: &str) -> Value {
    json!({
        "id": id,
        "url": "",
        "cards_url": "",
        "name": name,
    })
}

pub fn get_label(name: &str, color: &str, description: Option<&str>) -> Label {
    serde_json::from_value(get_label_json(name, color, description)).unwrap()
}

pub fn get_issue(title: &str, body: Option<&str>, labels: &[Label]) -> Issue {
    let labels: Vec<Value> = labels
        .iter()
        .map(|label| get_label_json(&label.name, &label.color, label.description.as_deref()))
        .collect();

    serde_json::from_value(get_issue_json(title, body, &labels)).unwrap()
}

pub fn get_pull_request(title: &str) -> Issue {
    serde_json::from_value(get_pull_request_json(title)).unwrap()
}

use serde_json::{json, Value};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

fn page_response(response: Value, next: Option<String>) -> ResponseTemplate {
    let template = ResponseTemplate::new(200).set_body_json(response);

    match next {
        Some(url) => template.insert_header("link", format!("<{url}>; rel=\"next\"", url = url).as_str()),
        None => template,
    }
}

pub fn next_page_url(server_uri: &str, route: &str, page: u32) -> String {
    format!(
        "{server_uri}/{route}?per_page=100&page={page}",
        server_uri = server_uri,
        route = route,
        page = page
    )
}

pub fn get_labels_mock(owner: &str, repo: &str, page: u32, response: Value, next: Option<String>) -> Mock {
    Mock::given(method("GET"))
        .and(path(format!(
            "/repos/{owner}/{repo}/labels",
            owner = owner,
            repo = repo
        )))
        .and(query_param("page", page.to_string()))
        .respond_with(page_response(response, next))
}

pub fn create_label_mock(owner: &str, repo: &str, label: Value) -> Mock {
    Mock::given(method("POST"))
        .and(path(format!(
            "/repos/{owner}/{repo}/labels",
            owner = owner,
            repo = repo
        )))
        .and(body_json(&label))
        .respond_with(ResponseTemplate::new(201).set_body_json(label))
}

pub fn reject_label_mock(owner: &str, repo: &str) -> Mock {
    Mock::given(method("POST"))
        .and(path(format!(
            "/repos/{owner}/{repo}/labels",
            owner = owner,
            repo = repo
        )))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "message": "Validation Failed",
            "errors": [{ "resource": "Label", "code": "already_exists", "field": "name" }],
            "documentation_url": "https://docs.github.com/rest/issues/labels#create-a-label",
        })))
}

pub fn get_issues_mock(owner: &str, repo: &str, page: u32, response: Value, next: Option<String>) -> Mock {
    Mock::given(method("GET"))
        .and(path(format!(
            "/repos/{owner}/{repo}/issues",
            owner = owner,
            repo = repo
        )))
        .and(query_param("page", page.to_string()))
        .and(query_param("sort", "created"))
        .and(query_param("direction", "asc"))
        .respond_with(page_response(response, next))
}

pub fn create_issue_mock(owner: &str, repo: &str, title: &str, body: &str, labels: &[&str]) -> Mock {
    Mock::given(method("POST"))
        .and(path(format!(
            "/repos/{owner}/{repo}/issues",
            owner = owner,
            repo = repo
        )))
        .and(body_json(json!({ "title": title, "body": body, "labels": labels })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "number": 1, "title": title })))
}

pub fn get_projects_mock(owner: &str, repo: &str, response: Value) -> Mock {
    Mock::given(method("GET"))
        .and(path(format!(
            "/repos/{owner}/{repo}/projects",
            owner = owner,
            repo = repo
        )))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
}

pub fn create_project_mock(owner: &str, repo: &str, name: &str, body: &str, response: Value) -> Mock {
    Mock::given(method("POST"))
        .and(path(format!(
            "/repos/{owner}/{repo}/projects",
            owner = owner,
            repo = repo
        )))
        .and(body_json(json!({ "name": name, "body": body })))
        .respond_with(ResponseTemplate::new(201).set_body_json(response))
}

pub fn get_columns_mock(board_id: u64, response: Value) -> Mock {
    Mock::given(method("GET"))
        .and(path(format!("/projects/{board_id}/columns", board_id = board_id)))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
}

pub fn create_column_mock(board_id: u64, name: &str) -> Mock {
    Mock::given(method("POST"))
        .and(path(format!("/projects/{board_id}/columns", board_id = board_id)))
        .and(body_json(json!({ "name": name })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": 1, "name": name })))
}

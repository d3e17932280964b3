use crate::mocks::github::{
    create_column_mock, create_issue_mock, create_label_mock, create_project_mock,
    get_columns_mock, get_issues_mock, get_labels_mock, get_projects_mock, next_page_url,
};

use issue_migration::{
    cli::{Repository, Settings},
    fixtures::content::{
        get_board_json, get_column_json, get_issue_json, get_label_json, get_pull_request_json,
    },
    github_provider::GithubProvider,
    migration,
};
use reqwest::Url;
use serde_json::{json, Value};
use wiremock::MockServer;

#[tokio::test]
async fn migrates_board_labels_and_issues() {
    let mock_server = MockServer::start().await;
    let settings = Settings {
        source: Repository::new("owner", "repo1"),
        destination: Repository::new("owner", "repo2"),
        api_url: Some(Url::parse(&mock_server.uri()).unwrap()),
        ..Settings::default()
    };
    let (source, destination) = (&settings.source, &settings.destination);

    get_projects_mock(
        &source.owner,
        &source.name,
        json!([get_board_json(11, "OSSA", Some("desc"))]),
    )
    .expect(1)
    .mount(&mock_server)
    .await;

    get_columns_mock(
        11,
        json!([
            get_column_json(1, "To Do"),
            get_column_json(2, "In Progress"),
            get_column_json(3, "Done"),
        ]),
    )
    .expect(1)
    .mount(&mock_server)
    .await;

    create_project_mock(
        &destination.owner,
        &destination.name,
        "OSSA",
        "desc",
        get_board_json(21, "OSSA", Some("desc")),
    )
    .expect(1)
    .mount(&mock_server)
    .await;

    for column in ["To Do", "In Progress", "Done"] {
        create_column_mock(21, column)
            .expect(1)
            .mount(&mock_server)
            .await;
    }

    let bug = get_label_json("bug", "ff0000", Some("defect"));

    // The destination starts without labels and has `bug` once it is created.
    get_labels_mock(&destination.owner, &destination.name, 1, json!([]), None)
        .up_to_n_times(1)
        .expect(1)
        .mount(&mock_server)
        .await;
    get_labels_mock(
        &destination.owner,
        &destination.name,
        1,
        json!([bug.clone()]),
        None,
    )
    .expect(1)
    .mount(&mock_server)
    .await;

    create_label_mock(
        &destination.owner,
        &destination.name,
        json!({ "name": "bug", "color": "ff0000", "description": "defect" }),
    )
    .expect(1)
    .mount(&mock_server)
    .await;

    get_issues_mock(
        &source.owner,
        &source.name,
        1,
        json!([
            get_issue_json("Bug X", Some("repro steps"), &[bug.clone()]),
            get_pull_request_json("Fix bug X"),
        ]),
        Some(next_page_url(&mock_server.uri(), "repos/owner/repo1/issues", 2)),
    )
    .expect(1)
    .mount(&mock_server)
    .await;
    get_issues_mock(
        &source.owner,
        &source.name,
        2,
        json!([get_issue_json("Docs", None, &[bug.clone()])]),
        None,
    )
    .expect(1)
    .mount(&mock_server)
    .await;

    create_issue_mock(
        &destination.owner,
        &destination.name,
        "Bug X",
        "repro steps",
        &["bug"],
    )
    .expect(1)
    .mount(&mock_server)
    .await;
    create_issue_mock(&destination.owner, &destination.name, "Docs", "", &["bug"])
        .expect(1)
        .mount(&mock_server)
        .await;

    let report = migration::run(
        &settings,
        |_| Some("random_token".to_string()),
        |token| GithubProvider::configure_provider(token, settings.api_url.clone()),
    )
    .await
    .unwrap();

    assert_eq!(report.labels_created, 1);
    assert_eq!(report.issues_created, 2);
    assert_eq!(report.pull_requests_skipped, 1);
    assert_eq!(report.board.unwrap().board.id, 21);

    let requests = mock_server.received_requests().await.unwrap();
    let created_columns: Vec<Value> = requests
        .iter()
        .filter(|request| request.url.path() == "/projects/21/columns")
        .map(|request| serde_json::from_slice::<Value>(&request.body).unwrap()["name"].clone())
        .collect();
    assert_eq!(
        created_columns,
        vec![json!("To Do"), json!("In Progress"), json!("Done")]
    );

    let created_issues: Vec<Value> = requests
        .iter()
        .filter(|request| request.url.path() == "/repos/owner/repo2/issues")
        .map(|request| serde_json::from_slice::<Value>(&request.body).unwrap()["title"].clone())
        .collect();
    assert_eq!(created_issues, vec![json!("Bug X"), json!("Docs")]);

    mock_server.verify().await;
}

#[tokio::test]
async fn missing_token_reaches_no_endpoint() {
    let mock_server = MockServer::start().await;
    let settings = Settings {
        api_url: Some(Url::parse(&mock_server.uri()).unwrap()),
        ..Settings::default()
    };

    let result = migration::run(
        &settings,
        |_| None,
        |token| GithubProvider::configure_provider(token, settings.api_url.clone()),
    )
    .await;

    assert!(result.is_err());
    assert_eq!(mock_server.received_requests().await.unwrap().len(), 0);
}

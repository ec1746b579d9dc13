use chrono::TimeZone;
use instruqt_client::{QueryOptions, api::types::PlayType, errors::ErrorKind};
use rstest::rstest;
use serde_json::json;

use crate::common::{RequestRecorder, TEAM, TOKEN, client_for};

mod common;

#[tokio::test]
async fn get_track_by_id_sends_authenticated_query() -> anyhow::Result<()> {
    let mut server = mockito::Server::new_async().await;
    let cli = client_for(&server)?;

    let recorder = RequestRecorder::default();

    let mock = server
        .mock("POST", "/graphql")
        .match_header("authorization", format!("Bearer {TOKEN}").as_str())
        .match_request(recorder.as_matcher())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
              "data": {
                "track": {
                  "id": "t1",
                  "slug": "intro",
                  "icon": null,
                  "title": "Intro",
                  "description": "Getting started",
                  "teaser": null,
                  "level": "beginner",
                  "embedToken": null,
                  "createdAt": "2024-05-01T10:00:00Z",
                  "deletedAt": null,
                  "lastUpdate": null,
                  "statistics": { "averageReviewScore": 4.0 },
                  "trackTags": [{ "value": "intro" }]
                }
              }
            }
        "#,
        )
        .create_async()
        .await;

    let track = cli
        .get_track_by_id("t1", &QueryOptions::default())
        .await?
        .expect("track must be found");
    assert_eq!("Intro", track.track.title);
    assert_eq!("intro", track.track.track_tags[0].value);

    mock.assert_async().await;

    let requests = recorder.requests();
    assert_eq!(1, requests.len());
    assert_eq!("POST", requests[0].method);
    assert_eq!(Some(format!("Bearer {TOKEN}")), requests[0].authorization);
    assert!(requests[0].query().contains("track("));
    assert!(requests[0].variables().to_string().contains("\"t1\""));

    Ok(())
}

#[tokio::test]
async fn empty_identifiers_never_reach_the_server() -> anyhow::Result<()> {
    let mut server = mockito::Server::new_async().await;
    let cli = client_for(&server)?;

    let mock = server.mock("POST", "/graphql").expect(0).create_async().await;

    assert!(cli.get_track_by_id("", &QueryOptions::default()).await?.is_none());
    assert!(cli.get_challenge("", &QueryOptions::default()).await?.is_none());
    assert!(cli.get_review("", &QueryOptions::default()).await?.is_none());
    assert!(cli.get_invite("").await?.is_none());

    mock.assert_async().await;

    Ok(())
}

#[tokio::test]
async fn identical_calls_are_not_cached() -> anyhow::Result<()> {
    let mut server = mockito::Server::new_async().await;
    let cli = client_for(&server)?;

    let mock = server
        .mock("POST", "/graphql")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{ "data": { "trackInvites": [] } }"#)
        .expect(3)
        .create_async()
        .await;

    for _ in 0..3 {
        assert!(cli.get_invites().await?.is_empty());
    }

    mock.assert_async().await;

    Ok(())
}

#[rstest]
#[case(401, "unauthorized")]
#[case(500, "internal error")]
#[case(503, "maintenance")]
#[tokio::test]
async fn non_success_status_is_an_error(#[case] status: usize, #[case] body: &str) -> anyhow::Result<()> {
    let mut server = mockito::Server::new_async().await;
    let cli = client_for(&server)?;

    let _mock = server
        .mock("POST", "/graphql")
        .with_status(status)
        .with_body(body)
        .create_async()
        .await;

    let err = cli.get_sandbox("sb-1").await.unwrap_err();

    assert_eq!(Some("get_sandbox"), err.operation());
    match err.kind() {
        ErrorKind::HttpStatus { status: got, body: got_body } => {
            assert_eq!(status as u16, got.as_u16());
            assert_eq!(body, got_body);
        }
        other => anyhow::bail!("unexpected error {other:?}"),
    }

    Ok(())
}

#[tokio::test]
async fn graphql_errors_are_surfaced() -> anyhow::Result<()> {
    let mut server = mockito::Server::new_async().await;
    let cli = client_for(&server)?;

    let _mock = server
        .mock("POST", "/graphql")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{ "data": null, "errors": [{ "message": "track not found" }] }"#)
        .create_async()
        .await;

    let err = cli.get_challenges("t1").await.unwrap_err();

    assert!(matches!(err.kind(), ErrorKind::GraphQLError(e) if e.message == "track not found"));
    assert_eq!("[get_challenges] GraphQL error: track not found", err.to_string());

    Ok(())
}

#[rstest]
#[case::default_play_type(QueryOptions::default(), "ALL")]
#[case::developer(QueryOptions::default().with_play_type(PlayType::Developer), "DEVELOPER")]
#[case::normal(QueryOptions::default().with_play_type(PlayType::Normal), "NORMAL")]
#[tokio::test]
async fn play_filters_reach_the_server(#[case] options: QueryOptions, #[case] play_type: &str) -> anyhow::Result<()> {
    let mut server = mockito::Server::new_async().await;
    let cli = client_for(&server)?;

    let recorder = RequestRecorder::default();

    let mock = server
        .mock("POST", "/graphql")
        .match_request(recorder.as_matcher())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{ "data": { "playReports": { "items": [], "totalItems": 0 } } }"#)
        .create_async()
        .await;

    let from = chrono::Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let to = chrono::Utc.with_ymd_and_hms(2024, 1, 31, 0, 0, 0).unwrap();
    let reports = cli
        .get_plays(from, to, 20, 0, &options.with_track_ids(["t1", "t2"]))
        .await?;
    assert_eq!(0, reports.total_items);

    mock.assert_async().await;

    let requests = recorder.requests();
    let input = &requests[0].variables()["input"];
    assert_eq!(json!(play_type), input["playType"]);
    assert_eq!(json!(["t1", "t2"]), input["trackIds"]);
    assert_eq!(json!([]), input["userIds"]);
    assert_eq!(json!(TEAM), input["teamSlug"]);

    Ok(())
}

#[tokio::test]
async fn one_time_play_token_is_returned() -> anyhow::Result<()> {
    let mut server = mockito::Server::new_async().await;
    let cli = client_for(&server)?;

    let recorder = RequestRecorder::default();

    let mock = server
        .mock("POST", "/graphql")
        .match_request(recorder.as_matcher())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{ "data": { "generateOneTimePlayToken": "one-time-token" } }"#)
        .create_async()
        .await;

    assert_eq!("one-time-token", cli.generate_one_time_play_token("t1").await?);

    mock.assert_async().await;

    assert!(recorder.requests()[0].query().starts_with("mutation"));

    Ok(())
}

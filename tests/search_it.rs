mod common;

// crates.io
use httpmock::prelude::*;
// self
use sfdc_jwt_search::{
	config::Secret,
	error::{Error, SearchError},
	http,
	search,
	token::AccessTokenGrant,
};

fn grant_for(server: &MockServer) -> AccessTokenGrant {
	AccessTokenGrant {
		access_token: Secret::new("bearer-token"),
		instance_url: server.base_url(),
	}
}

#[tokio::test]
async fn search_returns_records_with_bearer_credential() {
	let server = MockServer::start_async().await;
	let config = common::test_identity_config("https://auth.test.invalid");
	let mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/services/data/v54.0/search/")
				.query_param("q", "FIND {article} IN ALL FIELDS")
				.header("authorization", "Bearer bearer-token")
				.header("content-type", "application/json");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"searchRecords\":[{\"Id\":\"1\"}]}");
		})
		.await;
	let client = http::build_client(&config).expect("Client construction should succeed.");
	let records =
		search::search(&grant_for(&server), "FIND {article} IN ALL FIELDS", &client, &config)
			.await
			.expect("Search against a well-formed mock should succeed.");

	assert_eq!(records.len(), 1);
	assert_eq!(records[0]["Id"], "1");

	mock.assert_async().await;
}

#[tokio::test]
async fn search_treats_missing_records_field_as_empty() {
	let server = MockServer::start_async().await;
	let config = common::test_identity_config("https://auth.test.invalid");
	let _mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/services/data/v54.0/search/");
			then.status(200).header("content-type", "application/json").body("{}");
		})
		.await;
	let client = http::build_client(&config).expect("Client construction should succeed.");
	let records = search::search(&grant_for(&server), "FIND {nothing}", &client, &config)
		.await
		.expect("A body without searchRecords should still be a success.");

	assert!(records.is_empty());
}

#[tokio::test]
async fn search_treats_empty_records_array_as_empty() {
	let server = MockServer::start_async().await;
	let config = common::test_identity_config("https://auth.test.invalid");
	let _mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/services/data/v54.0/search/");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"searchRecords\":[]}");
		})
		.await;
	let client = http::build_client(&config).expect("Client construction should succeed.");
	let records = search::search(&grant_for(&server), "FIND {nothing}", &client, &config)
		.await
		.expect("An empty searchRecords array should still be a success.");

	assert!(records.is_empty());
}

#[tokio::test]
async fn search_respects_configured_api_version() {
	let server = MockServer::start_async().await;
	let config =
		common::test_identity_config("https://auth.test.invalid").with_api_version("v60.0");
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/services/data/v60.0/search/");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"searchRecords\":[]}");
		})
		.await;
	let client = http::build_client(&config).expect("Client construction should succeed.");

	search::search(&grant_for(&server), "FIND {nothing}", &client, &config)
		.await
		.expect("Search against the versioned path should succeed.");

	mock.assert_async().await;
}

#[tokio::test]
async fn search_maps_rejection_with_status_and_body() {
	let server = MockServer::start_async().await;
	let config = common::test_identity_config("https://auth.test.invalid");
	let _mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/services/data/v54.0/search/");
			then.status(401)
				.header("content-type", "application/json")
				.body("[{\"errorCode\":\"INVALID_SESSION_ID\"}]");
		})
		.await;
	let client = http::build_client(&config).expect("Client construction should succeed.");
	let err = search::search(&grant_for(&server), "FIND {article}", &client, &config)
		.await
		.expect_err("An HTTP 401 should surface as an API call rejection.");

	match err {
		Error::ApiCall(SearchError::Rejected { status, body }) => {
			assert_eq!(status, 401);
			assert_eq!(body, "[{\"errorCode\":\"INVALID_SESSION_ID\"}]");
		},
		other => panic!("Expected an API call rejection, got: {other:?}."),
	}
}

#[tokio::test]
async fn search_surfaces_malformed_json() {
	let server = MockServer::start_async().await;
	let config = common::test_identity_config("https://auth.test.invalid");
	let _mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/services/data/v54.0/search/");
			then.status(200).header("content-type", "application/json").body("<html>");
		})
		.await;
	let client = http::build_client(&config).expect("Client construction should succeed.");
	let err = search::search(&grant_for(&server), "FIND {article}", &client, &config)
		.await
		.expect_err("A malformed body should surface as an API call error.");

	assert!(matches!(err, Error::ApiCall(SearchError::Malformed { .. })));
}

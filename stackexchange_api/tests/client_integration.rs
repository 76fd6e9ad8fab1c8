use stackexchange_api::types::{Answer, Question};
use stackexchange_api::{Client, Error, Params, Sort, PATH_ALL_QUESTIONS, STACK_OVERFLOW};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[tokio::test]
async fn get_questions_success() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("questions.json");

    Mock::given(method("GET"))
        .and(path("/questions"))
        .and(query_param("site", "stackoverflow"))
        .and(query_param("sort", "votes"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = Client::new().with_base_url(&mock_server.uri());
    let params = Params::new(STACK_OVERFLOW).with_sort(Sort::Score);
    let result = client.questions(&params).await;
    assert!(result.is_ok());

    let resp = result.unwrap();
    assert_eq!(resp.items.len(), 2);
    assert_eq!(resp.items[0].question_id, 69999);
    assert!(resp.wrapper.has_more);
}

#[tokio::test]
async fn get_generic_destination() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/questions"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"{"items":[{"id":1}],"page":1,"has_more":false}"#),
        )
        .mount(&mock_server)
        .await;

    #[derive(serde::Deserialize, Default)]
    struct Item {
        id: i64,
    }

    let client = Client::new().with_base_url(&mock_server.uri());
    let resp = client
        .get::<Vec<Item>>(PATH_ALL_QUESTIONS, &Params::new(STACK_OVERFLOW))
        .await
        .unwrap();
    assert_eq!(resp.items.len(), 1);
    assert_eq!(resp.items[0].id, 1);
    assert_eq!(resp.wrapper.page, 1);
    assert!(!resp.wrapper.has_more);
}

#[tokio::test]
async fn get_question_answers_by_ids() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("answers.json");

    Mock::given(method("GET"))
        .and(path("/questions/69999;70500/answers"))
        .and(query_param("key", "appkey"))
        .and(query_param("access_token", "token"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = Client::new()
        .with_base_url(&mock_server.uri())
        .with_key("appkey")
        .with_access_token("token")
        .with_verbose(true);
    let resp = client
        .question_answers(&[69999, 70500], &Params::new(STACK_OVERFLOW))
        .await
        .unwrap();
    let answers: &Vec<Answer> = &resp.items;
    assert_eq!(answers.len(), 1);
    assert_eq!(answers[0].answer_id, 70001);
    assert_eq!(resp.wrapper.backoff, 10);
}

#[tokio::test]
async fn get_comments_on_answers() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("comments.json");

    Mock::given(method("GET"))
        .and(path("/answers/70001/comments"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = Client::new().with_base_url(&mock_server.uri());
    let resp = client
        .answer_comments(&[70001], &Params::new(STACK_OVERFLOW))
        .await
        .unwrap();
    assert_eq!(resp.items.len(), 1);
    assert_eq!(resp.items[0].comment_id, 123456);
}

#[tokio::test]
async fn api_error_status_is_decoded() {
    let mock_server = MockServer::start().await;
    let body = r#"{"error_id":400,"error_name":"bad_parameter","error_message":"site is required"}"#;

    Mock::given(method("GET"))
        .and(path("/questions"))
        .respond_with(ResponseTemplate::new(400).set_body_string(body))
        .mount(&mock_server)
        .await;

    let client = Client::new().with_base_url(&mock_server.uri());
    let resp = client.questions(&Params::default()).await.unwrap();
    assert!(resp.items.is_empty());

    let err = resp.wrapper.api_error().unwrap();
    assert_eq!(err.id, 400);
    assert_eq!(err.name, "bad_parameter");
    assert_eq!(err.message, "site is required");
}

#[tokio::test]
async fn server_error_with_text_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/questions"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let client = Client::new().with_base_url(&mock_server.uri());
    let result = client.questions(&Params::new(STACK_OVERFLOW)).await;
    assert!(matches!(result, Err(Error::Decode { .. })));
}

#[tokio::test]
async fn malformed_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/questions"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"items":[{"question_id":1}"#))
        .mount(&mock_server)
        .await;

    let client = Client::new().with_base_url(&mock_server.uri());
    let result = client.get::<Vec<Question>>(PATH_ALL_QUESTIONS, &Params::new(STACK_OVERFLOW)).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn transport_error() {
    // Nothing listens on a port freed right after binding it.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let uri = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let client = Client::new()
        .with_base_url(&uri)
        .with_http_client(reqwest::Client::new());
    let result = client.questions(&Params::new(STACK_OVERFLOW)).await;
    assert!(matches!(result, Err(Error::Transport(_))));
}

#[derive(Clone, Default)]
struct CapturedLogs(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

impl std::io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

async fn fetch_with_logs(verbose: bool) -> (String, String) {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/questions"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"items":[]}"#))
        .mount(&mock_server)
        .await;

    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_max_level(tracing::Level::INFO)
        .with_ansi(false)
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let client = Client::new()
        .with_base_url(&mock_server.uri())
        .with_verbose(verbose);
    let params = Params::new(STACK_OVERFLOW);
    let url = client.request_url(PATH_ALL_QUESTIONS, &params);
    client.questions(&params).await.unwrap();

    (url, logs.contents())
}

#[tokio::test]
async fn verbose_client_logs_request_url() {
    let (url, logs) = fetch_with_logs(true).await;
    assert!(logs.contains(&format!("GET {}", url)), "logs: {}", logs);
}

#[tokio::test]
async fn quiet_client_does_not_log_request_url() {
    let (url, logs) = fetch_with_logs(false).await;
    assert!(!logs.contains(&url), "logs: {}", logs);
}

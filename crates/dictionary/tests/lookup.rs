use dictionary::{Dictionary, DictionaryError, EntrySummary};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

fn local_dictionary(base_url: String) -> Dictionary {
    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    Dictionary::with_client(client, base_url)
}

/// Serves a single canned HTTP response and hands back the request line it saw.
async fn serve_once(status_line: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}/api/v2/entries/en", listener.local_addr().unwrap());
    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let read = socket.read(&mut buf).await.unwrap();
            if read == 0 {
                break;
            }
            request.extend_from_slice(&buf[..read]);
        }
        let response = format!(
            "HTTP/1.1 {status_line}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
        let request = String::from_utf8_lossy(&request).to_string();
        request.lines().next().unwrap_or_default().to_owned()
    });
    (base_url, handle)
}

#[tokio::test]
async fn successful_lookup_parses_entries() {
    let body = r#"[{"word":"cat","phonetics":[{"text":""},{"text":"/kæt/","audio":" https://cat.mp3 "}],
        "meanings":[{"partOfSpeech":"noun","definitions":[{"definition":"A small feline."}],"synonyms":["kitty"]},
        {"partOfSpeech":"verb","definitions":[{"definition":"To hoist an anchor.","example":"cat the anchor"}]}]}]"#;
    let (base_url, server) = serve_once("200 OK", body).await;

    let dict = local_dictionary(base_url);
    let entries = dict.get_entries("cat").await.unwrap();
    assert_eq!(server.await.unwrap(), "GET /api/v2/entries/en/cat HTTP/1.1");

    let summary = EntrySummary::from_entries(&entries).unwrap();
    assert_eq!(summary.word, "cat");
    assert_eq!(summary.phonetic.as_deref(), Some("/kæt/"));
    assert_eq!(summary.audio_url.as_deref(), Some("https://cat.mp3"));
    assert_eq!(summary.noun.unwrap().synonyms.as_deref(), Some("kitty"));
    let verb = summary.verb.unwrap();
    assert_eq!(verb.definitions[0].example.as_deref(), Some("cat the anchor"));
}

#[tokio::test]
async fn word_is_percent_encoded_in_the_path() {
    let (base_url, server) = serve_once("200 OK", "[]").await;
    let entries = local_dictionary(base_url)
        .get_entries("ice cream")
        .await
        .unwrap();
    assert!(entries.is_empty());
    assert_eq!(server.await.unwrap(), "GET /api/v2/entries/en/ice%20cream HTTP/1.1");
}

#[tokio::test]
async fn not_found_surfaces_the_api_message() {
    let body = r#"{"title":"No Definitions Found","message":"Sorry pal, we couldn't find definitions for the word you were looking for.","resolution":"You can try the search again at later time or head to the web instead."}"#;
    let (base_url, server) = serve_once("404 Not Found", body).await;

    let error = local_dictionary(base_url)
        .get_entries("qwxz")
        .await
        .unwrap_err();
    server.await.unwrap();
    assert!(error.is_not_found());
    assert_eq!(
        error.display_message(),
        "Sorry pal, we couldn't find definitions for the word you were looking for."
    );
}

#[tokio::test]
async fn error_without_body_uses_status_text() {
    let (base_url, server) = serve_once("503 Service Unavailable", "").await;
    let error = local_dictionary(base_url)
        .get_entries("cat")
        .await
        .unwrap_err();
    server.await.unwrap();
    assert!(matches!(error, DictionaryError::Api { status: 503, .. }));
    assert_eq!(error.display_message(), "Service Unavailable");
}

#[tokio::test]
async fn malformed_success_body_is_a_deserialize_error() {
    let (base_url, server) = serve_once("200 OK", r#"{"not":"a list"}"#).await;
    let error = local_dictionary(base_url)
        .get_entries("cat")
        .await
        .unwrap_err();
    server.await.unwrap();
    assert!(matches!(error, DictionaryError::Deserialize(_)));
    assert!(!error.display_message().is_empty());
}

#[tokio::test]
async fn unreachable_host_is_a_fetch_error() {
    // bind then drop so the port is very likely closed
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let error = local_dictionary(format!("http://{addr}/"))
        .get_entries("cat")
        .await
        .unwrap_err();
    assert!(matches!(error, DictionaryError::Fetch(_)));
    assert!(!error.display_message().is_empty());
}

//! HttpPolicyApi against a one-shot loopback server with canned responses.
//!
//! A scratch thread accepts a single connection, captures the raw request,
//! and replies with a fixed HTTP/1.1 response. That keeps the wire-level
//! assertions (method, path, body key) honest without an async stack.

use policy_browser::api::{HttpPolicyApi, PolicyApi};
use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread::JoinHandle;

struct OneShotServer {
    base_url: String,
    handle: JoinHandle<String>,
}

impl OneShotServer {
    /// Serve exactly one request with `status_line` and JSON `body`.
    fn start(status_line: &str, body: &str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback listener");
        let base_url = format!("http://{}", listener.local_addr().expect("local addr"));
        let response = format!(
            "{status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );

        let handle = std::thread::spawn(move || {
            let (mut stream, _) = listener.accept().expect("accept connection");
            let request = read_request(&mut stream);
            stream
                .write_all(response.as_bytes())
                .expect("write response");
            request
        });

        Self { base_url, handle }
    }

    /// Wait for the served request and return its raw text.
    fn request(self) -> String {
        self.handle.join().expect("server thread")
    }
}

fn read_request(stream: &mut std::net::TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        let n = stream.read(&mut chunk).expect("read request");
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(header_end) = find_header_end(&buf) {
            let headers = String::from_utf8_lossy(&buf[..header_end]).to_string();
            let body_len = content_length(&headers);
            if buf.len() >= header_end + 4 + body_len {
                break;
            }
        }
    }
    String::from_utf8_lossy(&buf).to_string()
}

fn find_header_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|window| window == b"\r\n\r\n")
}

fn content_length(headers: &str) -> usize {
    headers
        .lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            name.eq_ignore_ascii_case("content-length")
                .then(|| value.trim().parse().ok())?
        })
        .unwrap_or(0)
}

#[test]
fn list_fetch_hits_policies_endpoint() {
    let server = OneShotServer::start(
        "HTTP/1.1 200 OK",
        r#"{"policies": [{"id": 1, "name": "Policy One"}, {"id": 2}]}"#,
    );

    let api = HttpPolicyApi::new(&server.base_url);
    let policies = api.fetch_policy_list().expect("fetch list");
    assert_eq!(policies.len(), 2);
    assert_eq!(policies[0].id, 1);
    assert_eq!(policies[0].name.as_deref(), Some("Policy One"));
    assert_eq!(policies[1].id, 2);

    let request = server.request();
    assert!(request.starts_with("GET /policies HTTP/1.1"));
}

#[test]
fn detail_fetch_posts_date_cursor() {
    let server = OneShotServer::start(
        "HTTP/1.1 200 OK",
        r#"{"policy": {"id": 7, "accountBalance": 365.0}, "invoices": [{"id": 70}], "payments": []}"#,
    );

    let api = HttpPolicyApi::new(&server.base_url);
    let detail = api.fetch_policy_detail("7", "2015-6-1").expect("fetch detail");
    assert_eq!(detail.policy.id, 7);
    assert_eq!(detail.policy.account_balance, Some(365.0));
    assert_eq!(detail.invoices.len(), 1);
    assert!(detail.payments.is_empty());

    let request = server.request();
    assert!(request.starts_with("POST /policies/7 HTTP/1.1"));
    assert!(request.contains(r#""dateCursor":"2015-6-1""#));
}

#[test]
fn non_2xx_is_a_uniform_error() {
    let server = OneShotServer::start("HTTP/1.1 404 NOT FOUND", r#"{"error": "no such policy"}"#);

    let api = HttpPolicyApi::new(&server.base_url);
    let err = api
        .fetch_policy_detail("999", "2015-6-1")
        .expect_err("non-2xx should fail");
    assert!(err.to_string().contains("fetch policy detail"));

    let request = server.request();
    assert!(request.starts_with("POST /policies/999 HTTP/1.1"));
}

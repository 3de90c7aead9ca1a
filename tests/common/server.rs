//! Minimal HTTP/1.1 server answering GitHub API requests with canned
//! responses. Every connection serves a single request and is closed.

use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

pub struct Canned {
    pub status: &'static str,
    pub headers: Vec<(&'static str, String)>,
    pub body: String,
}

impl Canned {
    pub fn ok(body: &str) -> Self {
        Self::new("200 OK", body)
    }

    pub fn new(status: &'static str, body: &str) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    pub fn header(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.headers.push((name, value.into()));
        self
    }
}

/// A running canned server: its base URL and the raw heads of every request.
pub struct CannedServer {
    pub base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl CannedServer {
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

/// Bind on an ephemeral loopback port and answer each request with
/// `route(base_url, path_and_query)`. Must be called inside a tokio runtime.
pub async fn serve(route: fn(&str, &str) -> Canned) -> CannedServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let base_url = format!("http://{}", listener.local_addr().expect("addr"));
    let requests = Arc::new(Mutex::new(Vec::new()));

    let recorded = requests.clone();
    let base = base_url.clone();
    tokio::spawn(async move {
        while let Ok((socket, _)) = listener.accept().await {
            let _ = answer(socket, &base, route, &recorded).await;
        }
    });

    CannedServer { base_url, requests }
}

async fn answer(
    mut socket: TcpStream,
    base_url: &str,
    route: fn(&str, &str) -> Canned,
    recorded: &Mutex<Vec<String>>,
) -> std::io::Result<()> {
    let mut head = Vec::new();
    let mut chunk = [0u8; 1024];
    while !head.windows(4).any(|w| w == b"\r\n\r\n") {
        let n = socket.read(&mut chunk).await?;
        if n == 0 {
            break;
        }
        head.extend_from_slice(&chunk[..n]);
    }

    let head = String::from_utf8_lossy(&head).to_string();
    let target = head
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("/")
        .to_string();
    recorded.lock().unwrap().push(head);

    let canned = route(base_url, &target);
    let mut response = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n",
        canned.status,
        canned.body.len()
    );
    for (name, value) in &canned.headers {
        response.push_str(&format!("{}: {}\r\n", name, value));
    }
    response.push_str("\r\n");
    response.push_str(&canned.body);

    socket.write_all(response.as_bytes()).await?;
    socket.shutdown().await
}

/// Routes shared by the client and binary tests.
///
/// - `someone`: two pages linked by `rel="next"` (stars 1, then 2000)
/// - `ghost`: 404
/// - `limited`: 403 with the rate limit exhausted, resetting at 123
/// - `forbidden`: 403 with rate limit left
/// - `boom`: 500 with body `oops`
/// - `garbled`: 200 with a body that is not a repository array
/// - `empty`: 200 with `[]`
pub fn github_routes(base_url: &str, target: &str) -> Canned {
    let path = target.split('?').next().unwrap_or(target);
    let page = target
        .split(['?', '&'])
        .find_map(|pair| pair.strip_prefix("page="))
        .unwrap_or("1");

    match (path, page) {
        ("/users/someone/repos", "1") => Canned::ok(
            r#"[{"name":"small","html_url":"https://github.com/someone/small","description":null,"stargazers_count":1,"language":null}]"#,
        )
        .header(
            "Link",
            format!(
                r#"<{}/users/someone/repos?page=2>; rel="next", <{}/users/someone/repos?page=2>; rel="last""#,
                base_url, base_url
            ),
        )
        .header("X-RateLimit-Remaining", "59"),
        ("/users/someone/repos", _) => Canned::ok(
            r#"[{"name":"big","html_url":"https://github.com/someone/big","description":"Big one","stargazers_count":2000,"language":"Rust"}]"#,
        )
        .header(
            "Link",
            format!(r#"<{}/users/someone/repos?page=1>; rel="prev""#, base_url),
        ),
        ("/users/limited/repos", _) => Canned::new("403 Forbidden", r#"{"message":"API rate limit exceeded"}"#)
            .header("X-RateLimit-Remaining", "0")
            .header("X-RateLimit-Reset", "123"),
        ("/users/forbidden/repos", _) => Canned::new("403 Forbidden", r#"{"message":"Forbidden"}"#)
            .header("X-RateLimit-Remaining", "42"),
        ("/users/boom/repos", _) => Canned::new("500 Internal Server Error", "oops"),
        ("/users/garbled/repos", _) => Canned::ok(r#"{"message":"not a list"}"#),
        ("/users/empty/repos", _) => Canned::ok("[]"),
        _ => Canned::new("404 Not Found", r#"{"message":"Not Found"}"#),
    }
}

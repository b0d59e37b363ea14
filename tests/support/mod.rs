use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::mpsc::{Receiver, channel};
use std::thread;
use std::time::Duration;

/// Serve exactly one HTTP request with `200 OK` and the given JSON body,
/// returning the base URL and a channel that yields the raw request text.
pub fn serve_once_json(body: &str) -> (String, Receiver<String>) {
    serve_once_raw(format!(
        "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\n\r\n{}",
        body.len(),
        body
    ))
}

/// Serve exactly one HTTP request with a fully raw response.
pub fn serve_once_raw(response: String) -> (String, Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let (request_tx, request_rx) = channel();
    thread::spawn(move || {
        let Ok((mut stream, _)) = listener.accept() else {
            return;
        };
        let request = read_request(&mut stream);
        let _ = stream.write_all(response.as_bytes());
        let _ = request_tx.send(request);
    });
    (format!("http://{}", addr), request_rx)
}

/// Return a base URL that nothing listens on, for transport-failure paths.
pub fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

/// Read one HTTP request: headers, then as many body bytes as Content-Length
/// announces.
fn read_request(stream: &mut std::net::TcpStream) -> String {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(5)));
    let mut bytes = Vec::new();
    let mut buf = [0u8; 1024];
    loop {
        if let Some(done) = request_complete(&bytes) {
            if done {
                break;
            }
        }
        match stream.read(&mut buf) {
            Ok(0) => break,
            Ok(read) => bytes.extend_from_slice(&buf[..read]),
            Err(_) => break,
        }
    }
    String::from_utf8_lossy(&bytes).into_owned()
}

/// `Some(true)` once headers plus the announced body are buffered, `Some(false)`
/// while more is expected, `None` before the header terminator arrives.
fn request_complete(bytes: &[u8]) -> Option<bool> {
    let text = String::from_utf8_lossy(bytes);
    let header_end = text.find("\r\n\r\n")?;
    let content_length = text
        .lines()
        .take_while(|line| !line.trim_end().is_empty())
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            name.eq_ignore_ascii_case("content-length")
                .then(|| value.trim().parse::<usize>().ok())?
        })
        .unwrap_or(0);
    Some(bytes.len() >= header_end + 4 + content_length)
}

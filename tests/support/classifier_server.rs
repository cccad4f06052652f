use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::{Duration, Instant};

/// Loopback stand-in for the classifier: answers each connection with the
/// next scripted `(status line, JSON body)` and reports the raw request.
pub struct ClassifierServer {
    pub endpoint: String,
    pub requests: Receiver<Vec<u8>>,
}

impl ClassifierServer {
    pub fn start(responses: Vec<(&'static str, String)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback");
        let addr = listener.local_addr().expect("local addr");
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            for (status, body) in responses {
                let Ok((mut stream, _)) = listener.accept() else {
                    return;
                };
                let request = read_request(&mut stream);
                let response = format!(
                    "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = stream.write_all(response.as_bytes());
                let _ = stream.flush();
                if tx.send(request).is_err() {
                    return;
                }
            }
        });
        Self {
            endpoint: format!("http://{addr}/api/prediccion/"),
            requests: rx,
        }
    }

    pub fn next_request(&self) -> String {
        let bytes = self
            .requests
            .recv_timeout(Duration::from_secs(5))
            .expect("request received");
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

fn read_request(stream: &mut TcpStream) -> Vec<u8> {
    let _ = stream.set_read_timeout(Some(Duration::from_millis(200)));
    let deadline = Instant::now() + Duration::from_secs(5);
    let mut request = Vec::new();
    let mut buf = [0u8; 8192];
    while Instant::now() < deadline {
        if expected_len(&request).is_some_and(|expected| request.len() >= expected) {
            break;
        }
        match stream.read(&mut buf) {
            Ok(0) => break,
            Ok(read) => request.extend_from_slice(&buf[..read]),
            Err(err)
                if matches!(
                    err.kind(),
                    std::io::ErrorKind::WouldBlock | std::io::ErrorKind::TimedOut
                ) => {}
            Err(_) => break,
        }
    }
    request
}

fn expected_len(request: &[u8]) -> Option<usize> {
    let header_end = request.windows(4).position(|w| w == b"\r\n\r\n")? + 4;
    let head = String::from_utf8_lossy(&request[..header_end]).to_ascii_lowercase();
    let length = head
        .lines()
        .find_map(|line| line.strip_prefix("content-length:"))
        .and_then(|value| value.trim().parse::<usize>().ok())
        .unwrap_or(0);
    Some(header_end + length)
}

use foundation_wirehead::client::{FetchError, HeadFetcher, TcpTransport, Target, Transport};
use foundation_wirehead::config::FetchConfig;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;

/// Serves one connection: reads the request head, answers with `response`
/// and closes. Returns the bound port and the handle yielding the request.
fn serve_once(response: Vec<u8>) -> (u16, thread::JoinHandle<Vec<u8>>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("should bind local listener");
    let port = listener.local_addr().unwrap().port();

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("should accept");
        let mut request = Vec::new();
        let mut chunk = [0u8; 256];
        while !request.windows(4).any(|window| window == b"\r\n\r\n") {
            let read = stream.read(&mut chunk).expect("should read request");
            if read == 0 {
                break;
            }
            request.extend_from_slice(&chunk[..read]);
        }
        // the client may hang up early once it has seen enough
        let _ = stream.write_all(&response);
        request
    });

    (port, handle)
}

#[test]
fn fetches_and_parses_a_local_response() {
    let (port, server) = serve_once(
        b"HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nbroken line\r\n\r\nhello world"
            .to_vec(),
    );

    let fetcher = HeadFetcher::from_config(&FetchConfig::default());
    let head = fetcher
        .fetch(&format!("http://127.0.0.1:{port}/probe?x=1"))
        .unwrap();

    assert_eq!(head.version(), Some("1.1"));
    assert_eq!(head.status_code(), Some(200));
    assert_eq!(
        head.good_headers(),
        &[("Content-Type".to_string(), "text/plain".to_string())]
    );
    assert_eq!(head.bad_headers(), &["broken line".to_string()]);

    let request = String::from_utf8(server.join().unwrap()).unwrap();
    assert!(request.starts_with("GET /probe?x=1 HTTP/1.1\r\n"));
    assert!(request.contains(&format!("Host: 127.0.0.1:{port}\r\n")));
    assert!(request.contains("Connection: close\r\n"));
}

#[test]
fn enforces_the_response_size_limit() {
    let (port, server) =
        serve_once(b"HTTP/1.1 200 OK\r\nX-Padding: aaaaaaaaaaaaaaaaaaaa\r\n\r\n".to_vec());

    let config = FetchConfig {
        max_response_bytes: 16,
        ..FetchConfig::default()
    };
    let result =
        HeadFetcher::from_config(&config).fetch(&format!("http://127.0.0.1:{port}/"));

    assert!(matches!(result, Err(FetchError::ResponseTooLarge(16))));
    server.join().unwrap();
}

#[test]
fn oversized_body_after_complete_head_still_parses() {
    let mut response = b"HTTP/1.1 200 OK\r\nContent-Type: text/html\r\n\r\n".to_vec();
    response.extend(std::iter::repeat(b'x').take(64 * 1024));
    let (port, server) = serve_once(response);

    let config = FetchConfig {
        max_response_bytes: 1024,
        ..FetchConfig::default()
    };
    let head = HeadFetcher::from_config(&config)
        .fetch(&format!("http://127.0.0.1:{port}/large"))
        .unwrap();

    assert_eq!(head.status_code(), Some(200));
    assert_eq!(
        head.good_headers(),
        &[("Content-Type".to_string(), "text/html".to_string())]
    );
    assert!(head.bad_headers().is_empty());
    server.join().unwrap();
}

#[test]
fn reports_refused_connections() {
    // bind then drop to get a port nobody listens on
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let target = Target::parse(&format!("http://127.0.0.1:{port}/")).unwrap();
    let result = TcpTransport::default().exchange(&target, b"GET / HTTP/1.1\r\n\r\n");
    assert!(matches!(result, Err(FetchError::Connect(_))));
}

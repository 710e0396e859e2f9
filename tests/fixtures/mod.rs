// Test fixtures - reusable test data
// Provides sample guests, configs and a one-shot HTTP responder

#![allow(dead_code)]

use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::sync::mpsc::{self, Receiver};
use std::thread;

use wedding_invitation::models::rsvp::{Choice, RsvpResponse};
use wedding_invitation::models::settings::TelegramConfig;

/// Sample guests for testing
pub mod guests {
    use super::*;

    /// Attending together with a partner
    pub fn ivan_with_partner() -> RsvpResponse {
        RsvpResponse::new("Ivan", "Petrov", Choice::Yes, Choice::Yes)
    }

    /// Declined the invitation
    pub fn anna_declined() -> RsvpResponse {
        RsvpResponse::new("Anna", "Sidorova", Choice::No, Choice::Unset)
    }
}

/// Telegram config pointing at a local test server
pub fn telegram_config(api_base: &str) -> TelegramConfig {
    let mut config = TelegramConfig::new("123:test-token", "-100500");
    config.api_base = api_base.to_string();
    config.timeout_secs = 5;
    config
}

/// A request captured by [`serve_once`].
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub request_line: String,
    pub body: String,
}

/// Serve exactly one HTTP request with a canned response.
///
/// Returns the base URL and a receiver for the captured request.
pub fn serve_once(status_line: &str, body: &str) -> (String, Receiver<CapturedRequest>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind test listener");
    let addr = listener.local_addr().expect("listener address");
    let (tx, rx) = mpsc::channel();

    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status_line,
        body.len(),
        body
    );

    thread::spawn(move || {
        let (stream, _) = listener.accept().expect("accept connection");
        let mut reader = BufReader::new(stream.try_clone().expect("clone stream"));

        let mut request_line = String::new();
        reader.read_line(&mut request_line).expect("read request line");

        let mut content_length = 0usize;
        loop {
            let mut header = String::new();
            reader.read_line(&mut header).expect("read header");
            let header = header.trim_end();
            if header.is_empty() {
                break;
            }
            if let Some((name, value)) = header.split_once(':') {
                if name.eq_ignore_ascii_case("content-length") {
                    content_length = value.trim().parse().unwrap_or(0);
                }
            }
        }

        let mut body = vec![0u8; content_length];
        reader.read_exact(&mut body).expect("read body");

        let mut stream = stream;
        stream
            .write_all(response.as_bytes())
            .expect("write response");
        stream.flush().ok();

        let _ = tx.send(CapturedRequest {
            request_line: request_line.trim_end().to_string(),
            body: String::from_utf8_lossy(&body).into_owned(),
        });
    });

    (format!("http://{}", addr), rx)
}

//! Common test utilities for integration tests.
//!
//! Provides mock client factories and render helpers shared by the
//! integration test files.

use bytes::Bytes;
use ratatui::{backend::TestBackend, Terminal};

use ragdeck::adapters::mock::{MockHttpClient, MockResponse};
use ragdeck::app::App;
use ragdeck::traits::{HttpError, Response};
use ragdeck::ui;

/// A mock client whose ping endpoint answers 200 with a JSON body.
pub fn ping_ok_client() -> MockHttpClient {
    let client = MockHttpClient::new();
    client.set_response(
        "http://localhost:8000/api/ping",
        MockResponse::Success(Response::new(200, Bytes::from("{}"))),
    );
    client
}

/// A mock client whose ping endpoint fails at the transport level.
pub fn ping_refused_client() -> MockHttpClient {
    let client = MockHttpClient::new();
    client.set_response(
        "http://localhost:8000/api/ping",
        MockResponse::Error(HttpError::ConnectionFailed(
            "connection refused".to_string(),
        )),
    );
    client
}

/// A mock client whose ping endpoint answers with a non-JSON body.
pub fn ping_html_client() -> MockHttpClient {
    let client = MockHttpClient::new();
    client.set_response(
        "http://localhost:8000/api/ping",
        MockResponse::Success(Response::new(200, Bytes::from("<html>proxy</html>"))),
    );
    client
}

/// Draw the app once into a test backend and return the buffer as text,
/// one string per row joined with newlines.
pub fn render_to_text(app: &App, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| ui::render(f, app)).unwrap();

    let buffer = terminal.backend().buffer();
    let mut rows = Vec::with_capacity(height as usize);
    for y in 0..height {
        let mut row = String::new();
        for x in 0..width {
            row.push_str(buffer[(x, y)].symbol());
        }
        rows.push(row);
    }
    rows.join("\n")
}

/// Rows of the rendered buffer, for position-sensitive assertions.
pub fn render_to_rows(app: &App, width: u16, height: u16) -> Vec<String> {
    render_to_text(app, width, height)
        .split('\n')
        .map(String::from)
        .collect()
}

// src/core/net.rs

// Blocking HTTPS GET (ureq)

use std::io::Read;
use std::time::Duration;

use crate::config::consts::USER_AGENT;
use crate::error::{Error, Result};

pub fn http_get(url: &str, connect_timeout: Duration, read_timeout: Duration) -> Result<String> {
    let agent = ureq::AgentBuilder::new()
        .timeout_connect(connect_timeout)
        .timeout_read(read_timeout)
        .user_agent(USER_AGENT)
        .build();

    let resp = match agent.get(url).call() {
        Ok(resp) => resp,
        Err(ureq::Error::Status(code, resp)) => {
            return Err(Error::unavailable(
                url,
                format!("HTTP error: {} {}", code, resp.status_text()),
            ));
        }
        Err(e) => return Err(Error::unavailable(url, e)),
    };

    // into_string() caps bodies at 10 MB; the feed is far larger.
    let mut body = String::new();
    resp.into_reader()
        .read_to_string(&mut body)
        .map_err(|e| Error::unavailable(url, format!("Failed to read body: {e}")))?;
    Ok(body)
}

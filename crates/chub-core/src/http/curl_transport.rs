//! libcurl-backed [`HttpTransport`]. One `Easy` handle per request.

use std::str;
use std::time::Duration;

use super::headers;
use super::{HttpResponse, HttpTransport, TransportError};
use crate::config::ChubConfig;

#[derive(Debug, Clone)]
pub struct CurlTransport {
    connect_timeout: Duration,
    timeout: Duration,
}

impl Default for CurlTransport {
    fn default() -> Self {
        Self::from_config(&ChubConfig::default())
    }
}

impl CurlTransport {
    pub fn new(connect_timeout: Duration, timeout: Duration) -> Self {
        Self {
            connect_timeout,
            timeout,
        }
    }

    pub fn from_config(cfg: &ChubConfig) -> Self {
        Self::new(cfg.connect_timeout(), cfg.timeout())
    }

    fn easy(&self, url: &str) -> Result<curl::easy::Easy, curl::Error> {
        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.follow_location(true)?;
        easy.max_redirections(10)?;
        easy.connect_timeout(self.connect_timeout)?;
        easy.timeout(self.timeout)?;
        easy.useragent(concat!("chub-search/", env!("CARGO_PKG_VERSION")))?;
        Ok(easy)
    }

    fn perform(
        mut easy: curl::easy::Easy,
        upload: Option<&[u8]>,
    ) -> Result<HttpResponse, TransportError> {
        let mut header_lines: Vec<String> = Vec::new();
        let mut body: Vec<u8> = Vec::new();
        let mut upload = upload.unwrap_or_default();

        {
            let mut transfer = easy.transfer();
            transfer.header_function(|data| {
                if let Ok(s) = str::from_utf8(data) {
                    header_lines.push(s.trim_end().to_string());
                }
                true
            })?;
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.read_function(|buf| {
                let n = buf.len().min(upload.len());
                buf[..n].copy_from_slice(&upload[..n]);
                upload = &upload[n..];
                Ok(n)
            })?;
            transfer.perform()?;
        }

        let status = easy.response_code()?;
        Ok(HttpResponse {
            status,
            content_type: headers::content_type(&header_lines),
            body,
        })
    }
}

impl HttpTransport for CurlTransport {
    fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        let easy = self.easy(url)?;
        Self::perform(easy, None)
    }

    fn post_json(&self, url: &str, body: &[u8]) -> Result<HttpResponse, TransportError> {
        let mut easy = self.easy(url)?;
        easy.post(true)?;
        easy.post_field_size(body.len() as u64)?;
        let mut list = curl::easy::List::new();
        list.append("Content-Type: application/json")?;
        list.append("Accept: application/json")?;
        easy.http_headers(list)?;
        Self::perform(easy, Some(body))
    }
}

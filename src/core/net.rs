// src/core/net.rs
//
// Blocking page fetch. One client per run, explicit timeout on every request,
// no retries.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::error::{Error, Result};

/// Anything that can turn a URL into page text.
/// `Sync` so detail pages can be fetched from worker threads.
pub trait Fetch: Sync {
    fn fetch(&self, url: &str) -> Result<String>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| Error::Fetch { url: s!("<client>"), source: Box::new(e) })?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String> {
        let t = std::time::Instant::now();
        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| Error::Fetch { url: s!(url), source: Box::new(e) })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::Status { url: s!(url), status: status.as_u16() });
        }

        let body = resp
            .text()
            .map_err(|e| Error::Fetch { url: s!(url), source: Box::new(e) })?;
        logd!("GET {url} -> {} bytes in {:?}", body.len(), t.elapsed());
        Ok(body)
    }
}

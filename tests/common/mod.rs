use async_trait::async_trait;
use edgarlookup::{EdgarError, EdgarUrls, Fetch};
use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
    sync::Mutex,
};

pub const TICKERS_URL: &str = "https://www.sec.gov/files/company_tickers.json";
pub const APPLE_SUBMISSIONS_URL: &str = "https://data.sec.gov/submissions/CIK0000320193.json";

pub fn fixture_path(relative: impl AsRef<Path>) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(relative)
}

pub fn read_fixture(relative: impl AsRef<Path>) -> String {
    fs::read_to_string(fixture_path(relative)).expect("fixture file should be readable")
}

/// In-memory `Fetch` serving canned bodies and recording every requested URL.
#[allow(dead_code)]
pub struct FixtureSource {
    urls: EdgarUrls,
    routes: HashMap<String, String>,
    requests: Mutex<Vec<String>>,
}

#[allow(dead_code)]
impl FixtureSource {
    pub fn new() -> Self {
        Self {
            urls: EdgarUrls::default(),
            routes: HashMap::new(),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn with_route(mut self, url: &str, body: impl Into<String>) -> Self {
        self.routes.insert(url.to_string(), body.into());
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Fetch for FixtureSource {
    fn urls(&self) -> &EdgarUrls {
        &self.urls
    }

    async fn fetch(&self, url: &str) -> edgarlookup::Result<String> {
        self.requests.lock().unwrap().push(url.to_string());
        self.routes.get(url).cloned().ok_or(EdgarError::NotFound)
    }
}

#[allow(dead_code)]
pub fn apple_source() -> FixtureSource {
    FixtureSource::new()
        .with_route(TICKERS_URL, read_fixture("tickers/company_tickers.json"))
        .with_route(
            APPLE_SUBMISSIONS_URL,
            read_fixture("submissions/CIK0000320193.json"),
        )
}

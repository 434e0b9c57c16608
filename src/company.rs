//! Company identity lookups (name / ticker → CIK).
//!
//! SEC.gov publishes `company_tickers.json`, an object whose values each carry a
//! `cik_str`, a `title` and a `ticker`. [`CikIndex`] reads that feed once and keeps
//! two uppercase-keyed maps so later lookups never touch the network:
//!
//! ```ignore
//! use edgarlookup::{CompanyOperations, Edgar};
//!
//! let edgar = Edgar::new("MyApp contact@example.com")?;
//! let index = edgar.cik_index().await?;
//! let apple = index.ticker_to_cik("aapl").expect("AAPL is listed");
//! assert_eq!(apple.cik, "0000320193");
//! ```

use super::error::Result;
use super::parsing::{OrderedEntries, deserialize_cik};
use super::traits::{CompanyOperations, Fetch};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A filer as listed in the bulk ticker feed.
///
/// `cik` is always 10 digits, zero-padded. `name` and `ticker` are uppercased.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct FilerRecord {
    pub cik: String,
    pub name: String,
    pub ticker: String,
}

#[derive(Debug, Deserialize)]
struct TickerEntry {
    #[serde(rename = "cik_str", deserialize_with = "deserialize_cik")]
    cik: String,
    title: String,
    ticker: String,
}

impl From<TickerEntry> for FilerRecord {
    fn from(entry: TickerEntry) -> Self {
        FilerRecord {
            cik: entry.cik,
            name: entry.title.to_uppercase(),
            ticker: entry.ticker.to_uppercase(),
        }
    }
}

/// Lookup table from company name and ticker to [`FilerRecord`].
///
/// Built once and read-only afterwards, so a shared reference can be handed to
/// any number of readers. When the feed lists the same name or ticker twice, the
/// entry appearing later in the document wins.
#[derive(Debug, Clone, Default)]
pub struct CikIndex {
    by_name: HashMap<String, FilerRecord>,
    by_ticker: HashMap<String, FilerRecord>,
}

impl CikIndex {
    /// Builds the index from the body of `company_tickers.json`.
    ///
    /// Entries missing `cik_str`, `title` or `ticker`, or whose `cik_str` is not a
    /// CIK, are skipped and logged at `warn`.
    ///
    /// # Errors
    ///
    /// `EdgarError::JsonError` if the document is not a JSON object.
    pub fn from_feed(content: &str) -> Result<Self> {
        let OrderedEntries(entries) = serde_json::from_str(content)?;
        let mut index = CikIndex::default();
        let mut skipped = 0usize;

        for (key, value) in entries {
            match serde_json::from_value::<TickerEntry>(value) {
                Ok(entry) => index.insert(entry.into()),
                Err(err) => {
                    skipped += 1;
                    tracing::warn!("Skipping ticker feed entry {}: {}", key, err);
                }
            }
        }

        tracing::debug!(
            "Built CIK index: {} tickers, {} names, {} entries skipped",
            index.by_ticker.len(),
            index.by_name.len(),
            skipped
        );
        Ok(index)
    }

    fn insert(&mut self, record: FilerRecord) {
        self.by_name.insert(record.name.clone(), record.clone());
        self.by_ticker.insert(record.ticker.clone(), record);
    }

    /// Looks up a filer by company name, ignoring case.
    pub fn name_to_cik(&self, name: &str) -> Option<&FilerRecord> {
        self.by_name.get(&name.to_uppercase())
    }

    /// Looks up a filer by ticker symbol, ignoring case.
    pub fn ticker_to_cik(&self, ticker: &str) -> Option<&FilerRecord> {
        self.by_ticker.get(&ticker.to_uppercase())
    }

    /// Resolves free-form input, trying it as a ticker before a company name.
    pub fn resolve(&self, query: &str) -> Option<&FilerRecord> {
        let query = query.trim();
        self.ticker_to_cik(query)
            .or_else(|| self.name_to_cik(query))
    }

    /// Number of distinct tickers in the index.
    pub fn len(&self) -> usize {
        self.by_ticker.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_ticker.is_empty()
    }

    /// Iterates over the records reachable by ticker, in no particular order.
    pub fn records(&self) -> impl Iterator<Item = &FilerRecord> {
        self.by_ticker.values()
    }
}

#[derive(Debug)]
enum CompanyUrlType {
    CompanyTickers,
}

fn build_company_url(files_url: &str, url_type: CompanyUrlType) -> String {
    match url_type {
        CompanyUrlType::CompanyTickers => format!("{}/company_tickers.json", files_url),
    }
}

/// Company lookups for any [`Fetch`] implementation.
///
/// # Errors
///
/// Transport and decoding failures from the single fetch are returned unchanged.
#[async_trait]
impl<T> CompanyOperations for T
where
    T: Fetch,
{
    async fn cik_index(&self) -> Result<CikIndex> {
        let url = build_company_url(&self.urls().files, CompanyUrlType::CompanyTickers);
        let response = self.fetch(&url).await?;
        CikIndex::from_feed(&response)
    }
}

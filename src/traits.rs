//! Trait definitions for the transport seam and the two lookup domains.
//!
//! [`Fetch`] is the only point where this crate touches the network. Everything
//! else, building the CIK index and selecting filings, is written against it, and
//! [`CompanyOperations`] and [`FilingOperations`] are implemented for every
//! `Fetch` type. The HTTP client [`Edgar`](crate::Edgar) is the production
//! implementation; tests substitute an in-memory one backed by fixtures.

use super::company::CikIndex;
use super::config::EdgarUrls;
use super::error::Result;
use super::filings::{FilingDescriptor, SubmissionHistory};
use super::period::Quarter;
use async_trait::async_trait;

/// Retrieves one document body per call.
///
/// Implementations must not retry or cache; each call corresponds to one request.
#[async_trait]
pub trait Fetch: Send + Sync {
    /// Base URLs the lookup operations build request and document URLs from.
    fn urls(&self) -> &EdgarUrls;
    /// Fetches the body at `url`.
    async fn fetch(&self, url: &str) -> Result<String>;
}

/// Operations for resolving company names and tickers to CIKs.
#[async_trait]
pub trait CompanyOperations {
    /// Fetches the bulk ticker feed once and builds a [`CikIndex`] from it.
    async fn cik_index(&self) -> Result<CikIndex>;
}

/// Operations for locating periodic reports in a filer's submission history.
///
/// Each method fetches the submission history anew; nothing is cached between
/// calls. A period with no matching filing is `Ok(None)`.
#[async_trait]
pub trait FilingOperations {
    /// Retrieves the recent-filings table for a CIK.
    async fn fetch_submissions(&self, cik: &str) -> Result<SubmissionHistory>;
    /// Finds the first 10-K filed in `year`, in submission order.
    async fn annual_filing(&self, cik: &str, year: i32) -> Result<Option<FilingDescriptor>>;
    /// Finds the first 10-Q filed within `quarter` of `year`, in submission order.
    async fn quarterly_filing(
        &self,
        cik: &str,
        year: i32,
        quarter: Quarter,
    ) -> Result<Option<FilingDescriptor>>;
}

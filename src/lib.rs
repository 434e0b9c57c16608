//! # edgarlookup - CIK resolution and periodic-report lookup for SEC EDGAR
//!
//! edgarlookup turns a company name or ticker into its SEC Central Index Key (CIK)
//! and finds the 10-K or 10-Q a filer submitted for a given year or quarter,
//! returning the direct URL of the filing's primary document.
//!
//! ## Features
//!
//! - **CIK index** - built once from SEC.gov's bulk `company_tickers.json`, then
//!   case-insensitive name and ticker lookups without further requests
//! - **Filing selection** - first 10-K filed in a year, first 10-Q filed in a
//!   calendar quarter, scanned in the order SEC.gov lists them
//! - **Pluggable transport** - all lookups run against the [`Fetch`] trait;
//!   [`Edgar`] is the `reqwest`-based implementation
//!
//! ## Basic Usage
//!
//! ```ignore
//! use edgarlookup::{CompanyOperations, Edgar, FilingOperations, Quarter};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // SEC.gov requires an identifying user agent
//!     let edgar = Edgar::new("YourAppName contact@example.com")?;
//!
//!     let index = edgar.cik_index().await?;
//!     let apple = index.ticker_to_cik("AAPL").ok_or("unknown ticker")?;
//!
//!     if let Some(filing) = edgar.annual_filing(&apple.cik, 2024).await? {
//!         println!("10-K filed {}: {}", filing.filing_date, filing.url);
//!     }
//!     if let Some(filing) = edgar.quarterly_filing(&apple.cik, 2024, Quarter::Q2).await? {
//!         println!("10-Q filed {}: {}", filing.filing_date, filing.url);
//!     }
//!
//!     Ok(())
//! }
//! ```

mod company;
mod config;
mod core;
mod error;
mod filings;
mod parsing;
mod period;
mod traits;

pub use company::{CikIndex, FilerRecord};
pub use config::{EdgarConfig, EdgarUrls};
pub use self::core::Edgar;
pub use error::{EdgarError, Result};
pub use filings::{
    DEFAULT_ARCHIVES_URL, FilingDescriptor, FilingRow, SubmissionHistory, build_filing_url,
    filing_url_at,
};
pub use parsing::{CIK_WIDTH, pad_cik, strip_cik};
pub use period::{FormType, Quarter};
pub use traits::{CompanyOperations, Fetch, FilingOperations};

/// Current crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

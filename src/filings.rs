//! Submission histories and periodic-report selection.
//!
//! `data.sec.gov/submissions/CIK##########.json` describes a filer's recent filings
//! as a table stored column-wise: `filings.recent.form[i]`,
//! `filings.recent.filingDate[i]` and so on all describe filing `i`. The columns are
//! checked for equal length once, right after the fetch, and turned into
//! [`FilingRow`]s in their original order. Selection is then a single forward scan
//! where the first matching row wins.

use super::error::{EdgarError, Result};
use super::parsing::{pad_cik, strip_cik};
use super::period::{FormType, Quarter};
use super::traits::{Fetch, FilingOperations};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Archive base used by [`build_filing_url`].
pub const DEFAULT_ARCHIVES_URL: &str = "https://www.sec.gov/Archives/edgar";

#[derive(Debug, Deserialize)]
struct Submission {
    #[serde(default)]
    name: Option<String>,
    filings: FilingsData,
}

#[derive(Debug, Deserialize)]
struct FilingsData {
    recent: RecentFilings,
}

#[derive(Debug, Deserialize)]
struct RecentFilings {
    #[serde(rename = "accessionNumber")]
    accession_number: Vec<String>,
    #[serde(rename = "filingDate")]
    filing_date: Vec<String>,
    form: Vec<String>,
    #[serde(rename = "primaryDocument")]
    primary_document: Vec<String>,
}

impl RecentFilings {
    fn into_rows(self) -> Result<Vec<FilingRow>> {
        let len = self.form.len();
        if self.filing_date.len() != len
            || self.accession_number.len() != len
            || self.primary_document.len() != len
        {
            return Err(EdgarError::MalformedSubmissions(format!(
                "column lengths differ: form={}, filingDate={}, accessionNumber={}, primaryDocument={}",
                len,
                self.filing_date.len(),
                self.accession_number.len(),
                self.primary_document.len()
            )));
        }

        Ok(self
            .form
            .into_iter()
            .zip(self.filing_date)
            .zip(self.accession_number)
            .zip(self.primary_document)
            .map(
                |(((form, filing_date), accession_number), primary_document)| FilingRow {
                    form,
                    filing_date,
                    accession_number,
                    primary_document,
                },
            )
            .collect())
    }
}

/// One filing event from the recent-filings table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilingRow {
    pub form: String,
    /// ISO `YYYY-MM-DD`.
    pub filing_date: String,
    pub accession_number: String,
    pub primary_document: String,
}

impl FilingRow {
    fn is_form(&self, form: FormType) -> bool {
        self.form == form.as_str()
    }

    fn filed_in_year(&self, year: i32) -> bool {
        self.filing_date.get(..4) == Some(year.to_string().as_str())
    }

    // Lexicographic on ISO dates.
    fn filed_between(&self, start: &str, end: &str) -> bool {
        let date = self.filing_date.as_str();
        date >= start && date <= end
    }

    /// Builds the descriptor for this row, with the document URL rooted at `archives_url`.
    pub fn describe(&self, cik: &str, archives_url: &str) -> FilingDescriptor {
        FilingDescriptor {
            form: self.form.clone(),
            accession_number: self.accession_number.clone(),
            filing_date: self.filing_date.clone(),
            url: filing_url_at(
                archives_url,
                cik,
                &self.accession_number,
                &self.primary_document,
            ),
            document: self.primary_document.clone(),
        }
    }
}

/// A selected filing and the direct URL of its primary document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilingDescriptor {
    pub form: String,
    pub accession_number: String,
    pub filing_date: String,
    pub url: String,
    pub document: String,
}

/// The recent-filings table of one filer, in the order SEC.gov lists it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionHistory {
    cik: String,
    entity_name: Option<String>,
    rows: Vec<FilingRow>,
}

impl SubmissionHistory {
    /// Wraps already extracted rows. `cik` is padded to 10 digits.
    pub fn new(cik: &str, rows: Vec<FilingRow>) -> Result<Self> {
        Ok(Self {
            cik: pad_cik(cik)?,
            entity_name: None,
            rows,
        })
    }

    /// Extracts `filings.recent` from a submissions document.
    ///
    /// # Errors
    ///
    /// * `EdgarError::JsonError` - invalid JSON, or one of `form`, `filingDate`,
    ///   `accessionNumber`, `primaryDocument` is missing
    /// * `EdgarError::MalformedSubmissions` - those arrays differ in length
    /// * `EdgarError::InvalidCik` - `cik` is not a CIK
    pub fn from_json(cik: &str, content: &str) -> Result<Self> {
        let cik = pad_cik(cik)?;
        let submission: Submission = serde_json::from_str(content)?;
        Ok(Self {
            cik,
            entity_name: submission.name,
            rows: submission.filings.recent.into_rows()?,
        })
    }

    /// Zero-padded CIK the history belongs to.
    pub fn cik(&self) -> &str {
        &self.cik
    }

    /// Filer name as given in the submissions document, if present.
    pub fn entity_name(&self) -> Option<&str> {
        self.entity_name.as_deref()
    }

    pub fn rows(&self) -> &[FilingRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// First row of `form` satisfying `predicate`, scanning in source order.
    pub fn first_matching<P>(&self, form: FormType, predicate: P) -> Option<&FilingRow>
    where
        P: Fn(&FilingRow) -> bool,
    {
        self.rows
            .iter()
            .find(|row| row.is_form(form) && predicate(row))
    }

    /// First 10-K whose filing date falls in `year`.
    ///
    /// Amended reports (`10-K/A`) are a different form and never match. If a year
    /// holds several 10-K rows the earliest-listed one is returned, which is not
    /// necessarily the most recent or authoritative filing.
    pub fn annual(&self, year: i32) -> Option<&FilingRow> {
        self.first_matching(FormType::Annual, |row| row.filed_in_year(year))
    }

    /// First 10-Q whose filing date lies within `quarter` of `year`, bounds inclusive.
    pub fn quarterly(&self, year: i32, quarter: Quarter) -> Option<&FilingRow> {
        let (start, end) = quarter.date_range(year);
        self.first_matching(FormType::Quarterly, |row| row.filed_between(&start, &end))
    }
}

/// Builds the SEC.gov URL of a filing document.
///
/// Leading zeros are stripped from the CIK and dashes from the accession number.
///
/// ```rust
/// use edgarlookup::build_filing_url;
///
/// assert_eq!(
///     build_filing_url("0000320193", "0000320193-24-000123", "aapl-20240928.htm"),
///     "https://www.sec.gov/Archives/edgar/data/320193/000032019324000123/aapl-20240928.htm"
/// );
/// ```
pub fn build_filing_url(cik: &str, accession_number: &str, document: &str) -> String {
    filing_url_at(DEFAULT_ARCHIVES_URL, cik, accession_number, document)
}

/// Same as [`build_filing_url`] with an explicit archives base URL.
pub fn filing_url_at(
    archives_url: &str,
    cik: &str,
    accession_number: &str,
    document: &str,
) -> String {
    build_url(
        archives_url,
        UrlType::FilingContent,
        &[cik, accession_number, document],
    )
}

#[derive(Debug)]
enum UrlType {
    Submission,
    FilingContent,
}

fn build_url(base: &str, url_type: UrlType, params: &[&str]) -> String {
    match url_type {
        UrlType::Submission => format!("{}/submissions/CIK{}.json", base, params[0]),
        UrlType::FilingContent => {
            let (cik, acc_no, filename) = (params[0], params[1], params[2]);
            let formatted_acc = acc_no.replace('-', "");
            format!(
                "{}/data/{}/{}/{}",
                base,
                strip_cik(cik),
                formatted_acc,
                filename
            )
        }
    }
}

/// Filing selection for any [`Fetch`] implementation.
///
/// Every call fetches the submission history once. Fetch and decoding failures
/// are returned as errors; a period without a matching filing is `Ok(None)`.
#[async_trait]
impl<T> FilingOperations for T
where
    T: Fetch,
{
    /// Retrieves and validates the recent-filings table for `cik`.
    ///
    /// # Errors
    ///
    /// * `EdgarError::InvalidCik` - `cik` is not 1 to 10 digits; nothing is fetched
    /// * `EdgarError::MalformedSubmissions` - the table's arrays differ in length
    /// * Errors from the underlying fetch
    async fn fetch_submissions(&self, cik: &str) -> Result<SubmissionHistory> {
        let cik = pad_cik(cik)?;
        let url = build_url(&self.urls().data, UrlType::Submission, &[&cik]);
        let response = self.fetch(&url).await?;
        SubmissionHistory::from_json(&cik, &response)
    }

    async fn annual_filing(&self, cik: &str, year: i32) -> Result<Option<FilingDescriptor>> {
        let history = self.fetch_submissions(cik).await?;
        let found = history
            .annual(year)
            .map(|row| row.describe(history.cik(), &self.urls().archives));

        tracing::debug!(
            "10-K for CIK {} in {}: {:?}",
            history.cik(),
            year,
            found.as_ref().map(|f| &f.accession_number)
        );
        Ok(found)
    }

    async fn quarterly_filing(
        &self,
        cik: &str,
        year: i32,
        quarter: Quarter,
    ) -> Result<Option<FilingDescriptor>> {
        let history = self.fetch_submissions(cik).await?;
        let found = history
            .quarterly(year, quarter)
            .map(|row| row.describe(history.cik(), &self.urls().archives));

        tracing::debug!(
            "10-Q for CIK {} in {} {}: {:?}",
            history.cik(),
            year,
            quarter,
            found.as_ref().map(|f| &f.accession_number)
        );
        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(form: &str, filing_date: &str, accession_number: &str, document: &str) -> FilingRow {
        FilingRow {
            form: form.to_string(),
            filing_date: filing_date.to_string(),
            accession_number: accession_number.to_string(),
            primary_document: document.to_string(),
        }
    }

    fn history(rows: Vec<FilingRow>) -> SubmissionHistory {
        SubmissionHistory::new("320193", rows).unwrap()
    }

    #[test]
    fn test_build_filing_url() {
        assert_eq!(
            build_filing_url("0000320193", "0000320193-24-000123", "aapl-20240928.htm"),
            "https://www.sec.gov/Archives/edgar/data/320193/000032019324000123/aapl-20240928.htm"
        );
        assert_eq!(
            filing_url_at("http://localhost/Archives/edgar", "1750", "0001104659-19-016320", "a.htm"),
            "http://localhost/Archives/edgar/data/1750/000110465919016320/a.htm"
        );
    }

    #[test]
    fn test_submission_url() {
        assert_eq!(
            build_url("https://data.sec.gov", UrlType::Submission, &["0000320193"]),
            "https://data.sec.gov/submissions/CIK0000320193.json"
        );
    }

    #[test]
    fn test_annual_picks_matching_year() {
        let h = history(vec![
            row("10-K", "2023-02-10", "0000320193-23-000001", "a-2023.htm"),
            row("10-K", "2024-02-09", "0000320193-24-000001", "a-2024.htm"),
        ]);
        assert_eq!(h.annual(2024).unwrap().primary_document, "a-2024.htm");
        assert_eq!(h.annual(2023).unwrap().primary_document, "a-2023.htm");
        assert!(h.annual(2020).is_none());
    }

    #[test]
    fn test_annual_first_match_wins() {
        let h = history(vec![
            row("10-K/A", "2024-06-01", "0000320193-24-000009", "amend.htm"),
            row("10-K", "2024-05-01", "0000320193-24-000005", "second.htm"),
            row("10-K", "2024-02-01", "0000320193-24-000002", "first.htm"),
        ]);
        assert_eq!(h.annual(2024).unwrap().primary_document, "second.htm");
    }

    #[test]
    fn test_quarterly_range_is_inclusive() {
        let h = history(vec![
            row("10-Q", "2024-05-03", "0000320193-24-000050", "q2.htm"),
            row("10-Q", "2024-03-31", "0000320193-24-000031", "q1-edge.htm"),
            row("10-K", "2024-10-01", "0000320193-24-000100", "k.htm"),
            row("10-Q", "2024-10-01", "0000320193-24-000101", "q4-edge.htm"),
        ]);
        assert_eq!(h.quarterly(2024, Quarter::Q2).unwrap().primary_document, "q2.htm");
        assert_eq!(
            h.quarterly(2024, Quarter::Q1).unwrap().primary_document,
            "q1-edge.htm"
        );
        assert!(h.quarterly(2024, Quarter::Q3).is_none());
        assert_eq!(
            h.quarterly(2024, Quarter::Q4).unwrap().primary_document,
            "q4-edge.htm"
        );
        assert!(h.quarterly(2023, Quarter::Q2).is_none());
    }

    #[test]
    fn test_short_filing_date_never_matches() {
        let h = history(vec![row("10-K", "24", "x", "y")]);
        assert!(h.annual(2024).is_none());
        assert!(h.annual(24).is_none());
    }

    #[test]
    fn test_describe() {
        let descriptor = row("10-K", "2024-11-01", "0000320193-24-000123", "aapl-20240928.htm")
            .describe("0000320193", DEFAULT_ARCHIVES_URL);
        assert_eq!(
            descriptor,
            FilingDescriptor {
                form: "10-K".to_string(),
                accession_number: "0000320193-24-000123".to_string(),
                filing_date: "2024-11-01".to_string(),
                url: "https://www.sec.gov/Archives/edgar/data/320193/000032019324000123/aapl-20240928.htm"
                    .to_string(),
                document: "aapl-20240928.htm".to_string(),
            }
        );
    }

    #[test]
    fn test_from_json_preserves_order() {
        let json = r#"{
            "cik": "320193",
            "name": "Apple Inc.",
            "filings": {
                "recent": {
                    "accessionNumber": ["a-1", "a-2"],
                    "filingDate": ["2024-02-01", "2023-02-01"],
                    "form": ["10-K", "8-K"],
                    "primaryDocument": ["one.htm", "two.htm"],
                    "size": [1, 2]
                },
                "files": []
            }
        }"#;
        let h = SubmissionHistory::from_json("320193", json).unwrap();
        assert_eq!(h.cik(), "0000320193");
        assert_eq!(h.entity_name(), Some("Apple Inc."));
        assert_eq!(h.len(), 2);
        assert_eq!(h.rows()[0], row("10-K", "2024-02-01", "a-1", "one.htm"));
        assert_eq!(h.rows()[1].form, "8-K");
    }

    #[test]
    fn test_from_json_rejects_mismatched_columns() {
        let json = r#"{"filings": {"recent": {
            "accessionNumber": ["a-1", "a-2"],
            "filingDate": ["2024-02-01"],
            "form": ["10-K", "10-Q"],
            "primaryDocument": ["one.htm", "two.htm"]
        }}}"#;
        let result = SubmissionHistory::from_json("320193", json);
        assert!(matches!(result, Err(EdgarError::MalformedSubmissions(_))));
    }

    #[test]
    fn test_from_json_rejects_missing_column() {
        let json = r#"{"filings": {"recent": {
            "accessionNumber": ["a-1"],
            "filingDate": ["2024-02-01"],
            "form": ["10-K"]
        }}}"#;
        let result = SubmissionHistory::from_json("320193", json);
        assert!(matches!(result, Err(EdgarError::JsonError(_))));
    }

    #[test]
    fn test_empty_history() {
        let h = history(Vec::new());
        assert!(h.is_empty());
        assert!(h.annual(2024).is_none());
        assert!(h.quarterly(2024, Quarter::Q1).is_none());
    }
}

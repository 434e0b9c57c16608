use edgarlookup::{CompanyOperations, Edgar};

#[tokio::test]
#[ignore]
async fn cik_index() {
    let edgar = Edgar::new("test_agent example@example.com").unwrap();
    let index = edgar.cik_index().await.unwrap();

    let apple = index.ticker_to_cik("aapl").unwrap();
    assert_eq!(apple.cik, "0000320193");
    assert_eq!(index.name_to_cik("apple inc.").unwrap().ticker, "AAPL");
    assert!(index.ticker_to_cik("INVALID").is_none());
}

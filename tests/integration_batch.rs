use isostamp::batch::{self, BatchResult};

#[test]
fn formats_requests_from_file() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("requests.json");
    std::fs::write(
        &path,
        r#"[
            {"precision": 0, "raw": {"compact": -1}},
            {"precision": 6, "raw": {"compact": 1577836800000001}},
            {"precision": 12, "raw": {"extended": {
                "epoch_micros": -9223372036854775808,
                "picos_of_micro": 999
            }}},
            {"precision": 9, "raw": {"extended": {"epoch_micros": 0, "picos_of_micro": 1000}}}
        ]"#,
    )?;

    let results = batch::run(&batch::load_requests(&path)?);
    assert_eq!(results.len(), 4);
    assert_eq!(results[0].value.as_deref(), Some("1969-12-31T23:59:59"));
    assert_eq!(results[1].value.as_deref(), Some("2020-01-01T00:00:00.000001"));

    let widest = results[2].value.as_deref().unwrap();
    assert_eq!(widest, "-290308-12-21T19:59:05.224192999000");
    assert_eq!(Some(widest.len()), results[2].length_bound);

    assert!(results[3].value.is_none());
    assert!(results[3].error.as_deref().unwrap().contains("picos_of_micro 1000"));

    let json = serde_json::to_string(&results)?;
    let back: Vec<BatchResult> = serde_json::from_str(&json)?;
    assert_eq!(back, results);
    Ok(())
}

#[test]
fn missing_file_reports_path() {
    let err = batch::load_requests(std::path::Path::new("/nonexistent/requests.json")).unwrap_err();
    assert!(err.to_string().contains("/nonexistent/requests.json"));
}

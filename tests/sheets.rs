#[cfg(test)]
mod tests {
    use sheetdash::api::sheets::{parse_body, SheetsConfig, SheetsError};
    use sheetdash::libs::cell::CellValue;
    use sheetdash::libs::mode::Mode;

    const QUERY_RESPONSE: &str = r#"/*O_o*/
google.visualization.Query.setResponse({"version":"0.6","reqId":"0","status":"ok","sig":"1","table":{"cols":[{"id":"A","label":"","type":"string"}],"rows":[{"c":[{"v":"Timestamp"},{"v":"Task ID"},null,{"v":null},{"v":"Name"}]},{"c":[null,{"v":"T1"},null,null,{"v":"Alice"},{"v":"Count cash"},{"v":"Date(2024,0,10)","f":"10/01/2024"},{"v":"Daily"}]},{"c":[null,{"v":7.0},null,null,{"v":true}]}]}});"#;

    #[test]
    fn test_parse_query_response() {
        let rows = parse_body(QUERY_RESPONSE).unwrap();

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1].text(1).as_deref(), Some("T1"));
        assert_eq!(rows[1].text(4).as_deref(), Some("Alice"));
        assert_eq!(rows[1].get(6), Some(&CellValue::Text("Date(2024,0,10)".to_string())));
        assert_eq!(rows[1].get(2), None);
        assert_eq!(rows[0].get(3), None);
        assert_eq!(rows[2].text(1).as_deref(), Some("7"));
        assert_eq!(rows[2].get(4), Some(&CellValue::Bool(true)));
        assert_eq!(rows[2].get(10), None);
    }

    #[test]
    fn test_parse_row_array() {
        let body = r#"[["Timestamp","Task ID"],[null,"T1","",3,"Bob"]]"#;
        let rows = parse_body(body).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].text(1).as_deref(), Some("T1"));
        assert_eq!(rows[1].get(2), None);
        assert_eq!(rows[1].get(3), Some(&CellValue::Number(3.0)));
        assert_eq!(rows[1].text(4).as_deref(), Some("Bob"));
    }

    #[test]
    fn test_parse_null_row_cells() {
        let body = r#"{"status":"ok","table":{"rows":[{"c":null},{"c":[{"v":"x"}]}]}}"#;
        let rows = parse_body(body).unwrap();

        assert_eq!(rows.len(), 2);
        assert!(rows[0].is_empty());
        assert_eq!(rows[1].len(), 1);
    }

    #[test]
    fn test_query_error_status() {
        let body = r#"google.visualization.Query.setResponse({"status":"error","errors":[{"reason":"invalid_query","message":"INVALID_QUERY","detailed_message":"Invalid sheet name"}]});"#;
        match parse_body(body) {
            Err(SheetsError::Query(reason)) => assert_eq!(reason, "Invalid sheet name"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_malformed_bodies() {
        assert!(matches!(parse_body("<html>Sign in</html>"), Err(SheetsError::Malformed)));
        assert!(matches!(parse_body(r#"{"status":"ok"}"#), Err(SheetsError::Malformed)));
        assert!(matches!(parse_body("{not json}"), Err(SheetsError::Json(_))));
    }

    #[test]
    fn test_config_urls_and_sheets() {
        let mut config = SheetsConfig::new("abc123");
        assert_eq!(config.query_url(), "https://docs.google.com/spreadsheets/d/abc123/gviz/tq");
        assert_eq!(config.sheet_name(Mode::Checklist), "Checklist");
        assert_eq!(config.sheet_name(Mode::Delegation), "DELEGATION");

        config.base_url = "http://localhost:8080/".to_string();
        assert_eq!(config.query_url(), "http://localhost:8080/abc123/gviz/tq");
    }

    #[test]
    fn test_config_defaults_when_deserialized() {
        let config: SheetsConfig = serde_json::from_str(r#"{"spreadsheet_id":"abc"}"#).unwrap();
        assert_eq!(config, SheetsConfig::new("abc"));
    }
}

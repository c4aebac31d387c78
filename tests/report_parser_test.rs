use incident_report_viewer::generator::{generate_markdown, sample_incidents, Incident};
use incident_report_viewer::parser::parse_report;
use incident_report_viewer::render::{render, TableBody};
use incident_report_viewer::types::{BreakdownItem, ParseOutcome, SummaryValue};

const REPORT: &str = "# Daily Cloud Incident Report - 2025-11-29

**Summary**
- Total incidents: 4
- Success (heuristic): 3
- Failed (heuristic): 1
- Unique instances: 4
- Note: see ticket

**By event type**
- EC2_HIGH_CPU: 2
- malformed
- StatusCheckFailed: 1
- UnexpectedStop: 1

**By remediation type**
- EC2_HIGH_CPU: 2
- EC2_STATUS_CHECK_FAILED: 1
- EC2_UNEXPECTED_STOP: 1

---

## Incident Details

| Time (created_at) | Event Type | Instance ID | Remediation Type | Action | Message |
|-------------------|------------|-------------|------------------|--------|---------|
| 2025-11-29T01:20:00Z | EC2_HIGH_CPU | i-samplecpu-001 | EC2_HIGH_CPU | NO_ACTION | CPU reached 92% for over 3 minutes. |
| 2025-11-29T02:50:00Z | EC2_HIGH_CPU | i-samplecpu-002 | EC2_HIGH_CPU | REBOOT |
| 2025-11-29T05:10:00Z | StatusCheckFailed | i-samplestatus-001 | EC2_STATUS_CHECK_FAILED | FAILED | StatusCheckFailed detected. Reboot dry-run failed. |
";

#[test]
fn test_well_formed_report() {
    let record = parse_report(Some(REPORT)).into_record().unwrap();

    assert_eq!(record.date.as_deref(), Some("2025-11-29"));

    let keys: Vec<&str> = record.summary.keys().collect();
    assert_eq!(
        keys,
        vec![
            "total incidents",
            "success (heuristic)",
            "failed (heuristic)",
            "unique instances",
            "note"
        ]
    );
    assert_eq!(record.summary.get("failed (heuristic)"), Some(&SummaryValue::Int(1)));
    assert_eq!(
        record.summary.get("note"),
        Some(&SummaryValue::Text("see ticket".to_string()))
    );

    assert_eq!(
        record.by_event,
        vec![
            BreakdownItem::new("EC2_HIGH_CPU", 2),
            BreakdownItem::new("StatusCheckFailed", 1),
            BreakdownItem::new("UnexpectedStop", 1),
        ]
    );
    assert_eq!(record.by_remediation.len(), 3);
    assert_eq!(record.by_remediation[1].name, "EC2_STATUS_CHECK_FAILED");

    // the short second row is dropped, its neighbours survive
    assert_eq!(record.incidents.len(), 2);
    assert_eq!(record.incidents[0].get("Instance ID"), Some("i-samplecpu-001"));
    assert_eq!(record.incidents[1].get("Action"), Some("FAILED"));
    assert!(record
        .incidents
        .iter()
        .all(|row| row.headers().count() == 6));
}

#[test]
fn test_sections_are_independent() {
    let doc = "## Incident Details\n| A |\n|---|\n| 1 |\n\n**By remediation type**\n- REBOOT: 3";
    let record = parse_report(Some(doc)).into_record().unwrap();

    assert_eq!(record.date, None);
    assert!(record.summary.is_empty());
    assert!(record.by_event.is_empty());
    assert_eq!(record.by_remediation, vec![BreakdownItem::new("REBOOT", 3)]);
    assert_eq!(record.incidents.len(), 1);
}

#[test]
fn test_empty_inputs() {
    assert_eq!(parse_report(None), ParseOutcome::Empty);
    assert!(parse_report(Some("")).is_empty());
    assert!(parse_report(Some("random text")).record().is_some());
}

#[test]
fn test_generated_report_parses_back() {
    let incidents = sample_incidents("2025-11-29");
    let record = parse_report(Some(&generate_markdown("2025-11-29", &incidents)))
        .into_record()
        .unwrap();

    assert_eq!(record.date.as_deref(), Some("2025-11-29"));
    assert_eq!(record.summary.get("total incidents"), Some(&SummaryValue::Int(4)));
    assert_eq!(record.summary.get("unique instances"), Some(&SummaryValue::Int(4)));
    assert_eq!(record.incidents.len(), incidents.len());
    assert_eq!(
        record.incidents[2].get("Message"),
        Some("StatusCheckFailed detected. Reboot dry-run failed.")
    );

    let view = render(Some(&record));
    let values: Vec<&str> = view.summary_cards.iter().map(|c| c.value.as_str()).collect();
    assert_eq!(values, vec!["4", "3", "1", "4"]);
    assert_eq!(view.breakdown_cards[0].headline, "4");
    match view.incident_body {
        TableBody::Rows { rows } => {
            assert_eq!(rows.len(), 4);
            assert_eq!(rows[0][0], "2025-11-29T01:20:00Z");
        }
        other => panic!("expected rows, got {:?}", other),
    }
}

#[test]
fn test_generated_row_without_message_parses_back() {
    let incident = Incident {
        created_at: Some("2025-11-29T01:00:00Z".to_string()),
        event_type: Some("E".to_string()),
        instance_id: Some("i-1".to_string()),
        remediation_type: Some("R".to_string()),
        action: Some("REBOOT".to_string()),
        message: None,
    };
    let record = parse_report(Some(&generate_markdown("2025-11-29", &[incident])))
        .into_record()
        .unwrap();

    assert_eq!(record.incidents.len(), 1);
    assert_eq!(record.incidents[0].get("Action"), Some("REBOOT"));
    assert_eq!(record.incidents[0].get("Message"), Some("-"));
}

#[test]
fn test_no_incident_day_renders_placeholders() {
    let record = parse_report(Some(&generate_markdown("2025-11-30", &[])))
        .into_record()
        .unwrap();
    assert_eq!(record.date.as_deref(), Some("2025-11-30"));

    let view = render(Some(&record));
    assert!(view.summary_cards.iter().all(|c| c.value == "–"));
    assert!(view.breakdown_cards.iter().all(|c| c.is_empty()));
    assert_eq!(view.incident_body, TableBody::placeholder());
}

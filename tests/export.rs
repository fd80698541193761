#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use shiftdesk::libs::attendance::{AttendanceAggregator, AttendanceRecord, AttendanceStatus};
    use shiftdesk::libs::export::{ExportData, ExportFormat, Exporter};
    use shiftdesk::libs::worklog::{LogStatus, Priority, TaskKind, WorkLogEntry};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ExportTestContext {
        temp_dir: TempDir,
        entries: Vec<WorkLogEntry>,
    }

    impl TestContext for ExportTestContext {
        fn setup() -> Self {
            let entries = vec![WorkLogEntry {
                id: 7,
                date: NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
                time: "09:15".to_string(),
                kind: TaskKind::Pest,
                category: "Routine inspection".to_string(),
                details: "Replaced bait station".to_string(),
                location: "Basement 1 (B1)".to_string(),
                priority: Priority::Urgent,
                status: LogStatus::InProgress,
                photo_url: None,
            }];
            ExportTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
                entries,
            }
        }
    }

    fn report() -> shiftdesk::libs::attendance::AttendanceReport {
        let records = vec![AttendanceRecord {
            id: 1,
            employee_name: "Kim".to_string(),
            department: "Pest".to_string(),
            date: "2025-03-03".to_string(),
            check_in: "08:00".to_string(),
            check_out: "19:00".to_string(),
            total_hours: "11h 0m".to_string(),
            status: AttendanceStatus::Overtime,
        }];
        AttendanceAggregator::default().aggregate(&records)
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_logs_csv(ctx: &mut ExportTestContext) {
        let path = ctx.temp_dir.path().join("logs.csv");
        let exporter = Exporter::new(ExportFormat::Csv, ExportData::Logs, Some(path.clone()));
        exporter.export_logs(&ctx.entries).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert!(lines.next().unwrap().starts_with("ID,Date,Time,Kind"));
        let row = lines.next().unwrap();
        assert!(row.starts_with("7,2025-03-14,09:15,Pest"));
        assert!(row.contains("In Progress"));
        assert!(row.contains("Urgent"));
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_logs_json(ctx: &mut ExportTestContext) {
        let path = ctx.temp_dir.path().join("logs.json");
        Exporter::new(ExportFormat::Json, ExportData::Logs, Some(path.clone()))
            .export_logs(&ctx.entries)
            .unwrap();

        let parsed: Vec<WorkLogEntry> = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed, ctx.entries);
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_logs_excel(ctx: &mut ExportTestContext) {
        let path = ctx.temp_dir.path().join("logs.xlsx");
        Exporter::new(ExportFormat::Excel, ExportData::Logs, Some(path.clone()))
            .export_logs(&ctx.entries)
            .unwrap();

        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_report_csv(ctx: &mut ExportTestContext) {
        let path = ctx.temp_dir.path().join("report.csv");
        Exporter::new(ExportFormat::Csv, ExportData::Report, Some(path.clone()))
            .export_report(&report())
            .unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("Total Hours,11"));
        assert!(content.contains("Overtime Hours,2"));
        assert!(content.contains("Mon,11"));
        assert!(content.contains("Pest,100%"));
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_report_json_and_excel(ctx: &mut ExportTestContext) {
        let json = ctx.temp_dir.path().join("report.json");
        Exporter::new(ExportFormat::Json, ExportData::Report, Some(json.clone()))
            .export_report(&report())
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&json).unwrap()).unwrap();
        assert_eq!(value["stats"]["total_hours"], 11);
        assert_eq!(value["weekly"].as_array().unwrap().len(), 7);

        let xlsx = ctx.temp_dir.path().join("report.xlsx");
        Exporter::new(ExportFormat::Excel, ExportData::Report, Some(xlsx.clone()))
            .export_report(&report())
            .unwrap();
        assert!(xlsx.exists());
    }

    #[test]
    fn test_default_file_name() {
        let exporter = Exporter::new(ExportFormat::Excel, ExportData::Report, None);
        let name = exporter.output_path().to_string_lossy().into_owned();
        assert!(name.starts_with("shiftdesk_report_"));
        assert!(name.ends_with(".xlsx"));
    }
}

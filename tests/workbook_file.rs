#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use workbook::libs::error::WorkbookError;
    use workbook::libs::workbook::Workbook;

    /// Temporary directory holding the workbook files of one test.
    struct WorkbookFileContext {
        temp_dir: TempDir,
    }

    impl TestContext for WorkbookFileContext {
        fn setup() -> Self {
            WorkbookFileContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    impl WorkbookFileContext {
        fn write(&self, name: &str, content: &str) -> PathBuf {
            let path = self.temp_dir.path().join(name);
            fs::write(&path, content).unwrap();
            path
        }
    }

    #[test_context(WorkbookFileContext)]
    #[test]
    fn test_load_workbook_file(ctx: &mut WorkbookFileContext) {
        let path = ctx.write(
            "hours.yaml",
            "2024-01-01:\n  - ticket: AB-1\n    time: 2\n  - ticket: AB-2\n    time: 1\n2024-01-02:\n  - ticket: AB-3\n    time: 8\n    note: ignored\n",
        );

        let workbook = Workbook::load(&path).unwrap();

        assert_eq!(workbook.days.len(), 2);
        assert_eq!(workbook.days[0].items.len(), 2);
        assert_eq!(workbook.days[1].items[0].ticket.as_deref(), Some("AB-3"));
        assert_eq!(workbook.days[1].items[0].time, Some(8.0));
    }

    #[test_context(WorkbookFileContext)]
    #[test]
    fn test_missing_file_is_a_config_error(ctx: &mut WorkbookFileContext) {
        let path = ctx.temp_dir.path().join("absent.yaml");

        let err = Workbook::load(&path).unwrap_err();

        assert!(matches!(err, WorkbookError::Config { .. }));
        assert!(err.to_string().contains("absent.yaml"));
    }

    #[test_context(WorkbookFileContext)]
    #[test]
    fn test_malformed_yaml_reports_location(ctx: &mut WorkbookFileContext) {
        let path = ctx.write("broken.yaml", "2024-01-01:\n  - ticket: AB-1\n    time: [1\n");

        let err = Workbook::load(&path).unwrap_err();

        match err {
            WorkbookError::Parse { line, .. } => assert!(line.is_some()),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test_context(WorkbookFileContext)]
    #[test]
    fn test_item_without_time_loads_but_fails_planning(ctx: &mut WorkbookFileContext) {
        let path = ctx.write("partial.yaml", "2024-01-01:\n  - ticket: AB-1\n");

        let workbook = Workbook::load(&path).unwrap();
        let err = workbook.plans("acc-1").unwrap_err();

        assert!(matches!(err, WorkbookError::MissingField { .. }));
    }

    #[test_context(WorkbookFileContext)]
    #[test]
    fn test_non_mapping_document_is_rejected(ctx: &mut WorkbookFileContext) {
        let path = ctx.write("list.yaml", "- ticket: AB-1\n  time: 1\n");

        assert!(matches!(Workbook::load(&path), Err(WorkbookError::Parse { .. })));
    }
}

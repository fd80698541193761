#[cfg(test)]
mod tests {
    use shiftdesk::libs::config::{Config, FacilityConfig, PhotoConfig, ShiftConfig};
    use shiftdesk::libs::worklog::location_options;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ConfigTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            ConfigTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_missing_file_gives_defaults(ctx: &mut ConfigTestContext) {
        let config = Config::read_from(&ctx.temp_dir.path().join("config.json")).unwrap();

        assert!(config.shift.is_none());
        assert_eq!(config.shift().standard_shift_minutes, 540);
        assert_eq!(config.shift().roster().team_a, "A");
        assert_eq!(config.facility().basement_levels, 6);
        assert!(config.photo_directory().is_none());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_back(ctx: &mut ConfigTestContext) {
        let path = ctx.temp_dir.path().join("config.json");
        let config = Config {
            shift: Some(ShiftConfig {
                standard_shift_minutes: 480,
                team_a_worker: "Kim".to_string(),
                team_b_worker: "Lee".to_string(),
            }),
            facility: Some(FacilityConfig {
                basement_levels: 2,
                above_ground_levels: 3,
                categories: vec!["Routine inspection".to_string()],
            }),
            photos: Some(PhotoConfig {
                directory: Some(ctx.temp_dir.path().join("pics")),
            }),
        };
        config.save_to(&path).unwrap();

        let loaded = Config::read_from(&path).unwrap();
        assert_eq!(loaded.shift, config.shift);
        assert_eq!(loaded.facility, config.facility);
        assert_eq!(loaded.photo_directory(), Some(ctx.temp_dir.path().join("pics")));
        assert_eq!(loaded.shift().roster().team_b, "Lee");
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_partial_file_keeps_other_defaults(ctx: &mut ConfigTestContext) {
        let path = ctx.temp_dir.path().join("config.json");
        std::fs::write(&path, r#"{"facility":{"basement_levels":1,"above_ground_levels":2,"categories":[]}}"#).unwrap();

        let config = Config::read_from(&path).unwrap();
        assert_eq!(config.facility().above_ground_levels, 2);
        assert_eq!(config.shift(), ShiftConfig::default());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_broken_file_is_an_error(ctx: &mut ConfigTestContext) {
        let path = ctx.temp_dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(Config::read_from(&path).is_err());
    }

    #[test]
    fn test_location_options_basements_first() {
        let facility = FacilityConfig {
            basement_levels: 2,
            above_ground_levels: 2,
            categories: Vec::new(),
        };
        assert_eq!(
            location_options(&facility),
            vec!["Basement 2 (B2)", "Basement 1 (B1)", "Floor 1 (1F)", "Floor 2 (2F)"]
        );
    }
}

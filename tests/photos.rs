#[cfg(test)]
mod tests {
    use shiftdesk::libs::photos::{upload_file, work_log_photo_key, LocalPhotoStore, PhotoError, PhotoStore};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct PhotoTestContext {
        temp_dir: TempDir,
        store: LocalPhotoStore,
    }

    impl TestContext for PhotoTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let store = LocalPhotoStore::new(temp_dir.path().join("photos"));
            PhotoTestContext { temp_dir, store }
        }
    }

    #[test_context(PhotoTestContext)]
    #[test]
    fn test_upload_writes_under_key(ctx: &mut PhotoTestContext) {
        let url = ctx.store.upload("work_logs/1_trap.jpg", b"jpeg bytes").unwrap();

        let stored = ctx.store.root().join("work_logs/1_trap.jpg");
        assert_eq!(std::fs::read(&stored).unwrap(), b"jpeg bytes");
        assert!(url.starts_with("file://"));
        assert!(url.ends_with("1_trap.jpg"));
    }

    #[test_context(PhotoTestContext)]
    #[test]
    fn test_keys_cannot_escape_root(ctx: &mut PhotoTestContext) {
        let err = ctx.store.upload("../outside.jpg", b"x").unwrap_err();
        assert!(matches!(err, PhotoError::UploadFailed { ref key, .. } if key == "../outside.jpg"));
        assert!(!ctx.temp_dir.path().join("outside.jpg").exists());
    }

    #[test_context(PhotoTestContext)]
    #[test]
    fn test_upload_file_uses_work_log_key(ctx: &mut PhotoTestContext) {
        let source = ctx.temp_dir.path().join("drain.png");
        std::fs::write(&source, b"png").unwrap();

        let url = upload_file(&ctx.store, &source).unwrap();
        assert!(url.contains("work_logs/"));
        assert!(url.ends_with("_drain.png"));
    }

    #[test_context(PhotoTestContext)]
    #[test]
    fn test_missing_file_is_upload_failure(ctx: &mut PhotoTestContext) {
        let missing = ctx.temp_dir.path().join("missing.jpg");
        assert!(matches!(upload_file(&ctx.store, &missing), Err(PhotoError::UploadFailed { .. })));
    }

    #[test]
    fn test_photo_key_shape() {
        let key = work_log_photo_key("a.jpg");
        assert!(key.starts_with("work_logs/"));
        assert!(key.ends_with("_a.jpg"));
    }
}

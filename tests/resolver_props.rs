use projmeta::StoreConfig;
use proptest::prelude::*;

proptest! {
    #[test]
    fn info_file_is_dir_plus_descriptor_name(project_id in "[A-Za-z0-9_-]{1,40}") {
        let config =
            StoreConfig::new("/file-watcher/fwdata/projects/", "/codewind-workspace/.logs/");

        let meta = projmeta::resolve_metadata(&config, &project_id);

        prop_assert_eq!(
            meta.dir.to_str().unwrap(),
            format!("/file-watcher/fwdata/projects/{project_id}/")
        );
        prop_assert_eq!(
            meta.info_file.to_str().unwrap(),
            format!("/file-watcher/fwdata/projects/{project_id}/{project_id}.json")
        );
        prop_assert_eq!(meta.log_dir.to_str().unwrap(), "/codewind-workspace/.logs/");
    }

    #[test]
    fn data_root_separator_is_normalized(project_id in "[a-z]{1,12}", trailing in any::<bool>()) {
        let root = if trailing { "/srv/projects/" } else { "/srv/projects" };
        let config = StoreConfig::new(root, "/srv/logs");

        let meta = projmeta::resolve_metadata(&config, &project_id);

        prop_assert_eq!(meta.dir.to_str().unwrap(), format!("/srv/projects/{project_id}/"));
    }
}

use lfs_config::{Configuration, Values, clean_path};
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_clean_path_invariants(raw in "[a-z./\\\\]{0,24}") {
        let cleaned = clean_path(&raw);

        prop_assert!(!cleaned.contains("//"));
        prop_assert!(cleaned == "/" || !cleaned.ends_with('/'));
        prop_assert!(
            cleaned == "." || !cleaned.split('/').any(|segment| segment == "."),
            "{}",
            cleaned
        );

        // Cleaning is idempotent
        prop_assert_eq!(clean_path(&cleaned), cleaned.clone());
    }

    #[test]
    fn test_resolvers_are_pure(
        branch in proptest::option::of("[a-z]{1,8}"),
        remote in "[a-z]{1,8}",
        flag in "[a-z01]{0,6}",
        shared in "[a-z0-9]{0,5}",
    ) {
        let values = Values::new()
            .git("branch.main.remote", [remote.as_str()])
            .git("remote.pushdefault", [remote.as_str()])
            .git("lfs.tustransfers", [flag.as_str()])
            .git("core.sharedrepository", [shared.as_str()])
            .git("lfs.extension.x.priority", [flag.as_str()]);
        let config = Configuration::from_values(values, branch);

        prop_assert_eq!(config.remote(), config.remote());
        prop_assert_eq!(config.push_remote(), config.push_remote());
        prop_assert_eq!(config.tus_transfers_allowed(), config.tus_transfers_allowed());
        prop_assert_eq!(config.repository_permissions(), config.repository_permissions());
        prop_assert_eq!(config.extensions(), config.extensions());
        prop_assert_eq!(config.current_committer(), config.current_committer());
    }
}

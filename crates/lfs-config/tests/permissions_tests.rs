use lfs_config::{Configuration, Values, umask};
use rstest::rstest;

fn permissions_for(token: &str) -> u32 {
    Configuration::new(Values::new().git("core.sharedrepository", [token])).repository_permissions()
}

#[rstest]
#[case("group", 0o660)]
#[case("true", 0o660)]
#[case("1", 0o660)]
#[case("YES", 0o660)]
#[case("all", 0o664)]
#[case("world", 0o664)]
#[case("everybody", 0o664)]
#[case("2", 0o664)]
#[case("0664", 0o664)]
#[case("0666", 0o666)]
#[case("0600", 0o600)]
#[case("0660", 0o660)]
#[case("0644", 0o644)]
fn test_repository_permissions_fixed_modes(#[case] token: &str, #[case] expected: u32) {
    assert_eq!(permissions_for(token), expected, "token {token:?}");
}

#[rstest]
#[case("false")]
#[case("umask")]
#[case("0")]
#[case("NO")]
#[case("this does not remotely look like a valid value")]
fn test_repository_permissions_umask_default(#[case] token: &str) {
    let expected = 0o666 & !umask();
    assert_eq!(permissions_for(token), expected, "token {token:?}");
}

#[test]
fn test_repository_permissions_unset() {
    let config = Configuration::new(Values::new());
    assert_eq!(config.repository_permissions(), 0o666 & !umask());
}

#[test]
fn test_repository_executable_permissions() {
    let config = Configuration::new(Values::new().git("core.sharedRepository", ["group"]));
    assert_eq!(config.repository_executable_permissions(), 0o770);
}

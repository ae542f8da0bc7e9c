use lfs_config::{Configuration, Identity, Values};

fn identity(name: &str, email: &str) -> Identity {
    Identity {
        name: name.to_string(),
        email: email.to_string(),
    }
}

#[test]
fn test_committer_from_user_config() {
    let config = Configuration::new(
        Values::new()
            .git("user.name", ["Pat Doe"])
            .git("user.email", ["pdoe@example.org"])
            .os("EMAIL", ["pdoe@example.com"]),
    );

    assert_eq!(config.current_committer(), identity("Pat Doe", "pdoe@example.org"));
}

#[test]
fn test_committer_email_falls_back_to_email_env() {
    let config = Configuration::new(
        Values::new()
            .git("user.name", ["Pat Doe"])
            .os("EMAIL", ["pdoe@example.com"]),
    );

    assert_eq!(config.current_committer(), identity("Pat Doe", "pdoe@example.com"));
}

#[test]
fn test_committer_env_overrides_user_config() {
    let config = Configuration::new(
        Values::new()
            .git("user.name", ["Pat Doe"])
            .git("user.email", ["pdoe@example.org"])
            .os("GIT_COMMITTER_NAME", ["Sam Roe"])
            .os("GIT_COMMITTER_EMAIL", ["sroe@example.net"])
            .os("EMAIL", ["pdoe@example.com"]),
    );

    assert_eq!(config.current_committer(), identity("Sam Roe", "sroe@example.net"));
    assert_eq!(config.current_author(), identity("Pat Doe", "pdoe@example.org"));
}

#[test]
fn test_author_env_does_not_bleed_into_committer() {
    let config = Configuration::new(
        Values::new()
            .git("user.name", ["Pat Doe"])
            .git("user.email", ["pdoe@example.org"])
            .os("GIT_AUTHOR_NAME", ["Sam Roe"])
            .os("GIT_AUTHOR_EMAIL", ["sroe@example.net"])
            .os("EMAIL", ["pdoe@example.com"]),
    );

    assert_eq!(config.current_committer(), identity("Pat Doe", "pdoe@example.org"));
    assert_eq!(config.current_author(), identity("Sam Roe", "sroe@example.net"));
}

#[test]
fn test_identity_unset_is_empty() {
    let config = Configuration::new(Values::new());
    assert_eq!(config.current_author(), Identity::default());
}

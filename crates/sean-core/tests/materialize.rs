//! End-to-end materialization scenarios against a fake skeleton clone

use sean_core::probe::probe_database;
use sean_core::session::{DatabaseSettings, Dialect, SessionState};
use sean_core::templates;
use sean_core::{ProductConfig, ScaffoldError};
use std::fs;
use std::path::Path;

/// Lay out what a fresh clone of the skeleton looks like: placeholder configs
/// plus the example module directories.
fn fake_clone(destination: &Path) {
    for placeholder in [
        "package.json",
        "bower.json",
        "config/env/default.js",
        "config/env/development.js",
    ] {
        let path = destination.join(placeholder);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "// placeholder\n").unwrap();
    }

    for module in [
        "modules/chat/server",
        "modules/articles/server",
        "modules/users/server/controllers/users",
        "modules/users/server/models",
    ] {
        fs::create_dir_all(destination.join(module)).unwrap();
    }
    fs::write(destination.join("server.js"), "// entry\n").unwrap();
}

fn demo_state() -> SessionState {
    SessionState {
        version: "master".to_string(),
        folder: "demo".to_string(),
        app_name: "Demo App".to_string(),
        add_article_example: false,
        add_chat_example: false,
        ..SessionState::default()
    }
}

#[tokio::test]
async fn end_to_end_demo_scenario() {
    let tmp = tempfile::tempdir().unwrap();
    let destination = tmp.path().join("demo");
    fake_clone(&destination);

    let state = demo_state();
    templates::materialize(&state, &destination).await.unwrap();

    // Rendered package.json reflects the slug and description.
    let pkg = fs::read_to_string(destination.join("package.json")).unwrap();
    assert!(pkg.contains("\"name\": \"demo-app\""));
    assert!(pkg.contains(&state.app_description));
    assert!(!pkg.contains("placeholder"));

    // Declined example modules are gone.
    assert!(!destination.join("modules/articles").exists());
    assert!(!destination.join("modules/chat").exists());

    // The rest of the clone is untouched.
    assert!(destination.join("server.js").exists());
    assert!(destination.join("modules/users").exists());
}

#[tokio::test]
async fn accepted_examples_stay_present() {
    let tmp = tempfile::tempdir().unwrap();
    let destination = tmp.path().join("app");
    fake_clone(&destination);

    let state = SessionState {
        add_article_example: true,
        add_chat_example: true,
        ..demo_state()
    };
    templates::materialize(&state, &destination).await.unwrap();

    assert!(destination.join("modules/articles").exists());
    assert!(destination.join("modules/chat").exists());
}

#[tokio::test]
async fn rendered_configs_carry_database_settings() {
    let tmp = tempfile::tempdir().unwrap();
    let destination = tmp.path().join("app");
    fake_clone(&destination);

    let mut state = demo_state();
    state.database = Some(DatabaseSettings {
        name: "demo-db".to_string(),
        ..DatabaseSettings::defaults_for(Dialect::MariaDb)
    });

    templates::materialize(&state, &destination).await.unwrap();

    let dev = fs::read_to_string(destination.join("config/env/development.js")).unwrap();
    assert!(dev.contains("name: \"demo-db\""));
    assert!(dev.contains("port: 3306"));
    // MariaDB renders as the mysql dialect for the ORM.
    assert!(dev.contains("dialect: \"mysql\""));

    let default = fs::read_to_string(destination.join("config/env/default.js")).unwrap();
    assert!(default.contains("title: 'Demo App'"));
}

#[tokio::test]
async fn failed_database_probe_does_not_block_materialization() {
    let tmp = tempfile::tempdir().unwrap();
    let destination = tmp.path().join("app");
    fake_clone(&destination);

    let mut state = demo_state();
    state.database = Some(DatabaseSettings {
        host: "127.0.0.1".to_string(),
        port: 1,
        check_connection: true,
        ..DatabaseSettings::defaults_for(Dialect::Postgres)
    });

    // Probe fails (nothing listens on port 1) but is advisory only.
    let outcome = probe_database(state.database.as_ref().unwrap()).await;
    assert!(!outcome.is_ok());

    templates::materialize(&state, &destination).await.unwrap();
    assert!(destination.join("package.json").exists());
    assert!(destination.join("config/env/development.js").exists());
}

#[tokio::test]
async fn rerun_over_existing_output_is_not_idempotent_but_succeeds() {
    // Idempotence is a documented limitation: a second run overwrites the
    // rendered files in place and leaves any partial state behind.
    let tmp = tempfile::tempdir().unwrap();
    let destination = tmp.path().join("app");
    fake_clone(&destination);

    let state = demo_state();
    templates::materialize(&state, &destination).await.unwrap();

    // Simulate a stray partially-written file from an interrupted run.
    fs::write(destination.join("config/env/partial.tmp"), "half").unwrap();

    let renamed = SessionState {
        app_name: "Renamed App".to_string(),
        ..demo_state()
    };
    templates::materialize(&renamed, &destination).await.unwrap();

    let pkg = fs::read_to_string(destination.join("package.json")).unwrap();
    assert!(pkg.contains("\"name\": \"renamed-app\""));
    // The stray file survives: no rollback, no cleanup.
    assert!(destination.join("config/env/partial.tmp").exists());
}

#[tokio::test]
async fn every_failed_placeholder_deletion_is_attributed() {
    let tmp = tempfile::tempdir().unwrap();
    let destination = tmp.path().join("app");
    fake_clone(&destination);

    // Turn two placeholders into non-empty directories so the file deletions
    // fail with something other than NotFound.
    for placeholder in ["package.json", "bower.json"] {
        let path = destination.join(placeholder);
        fs::remove_file(&path).unwrap();
        fs::create_dir(&path).unwrap();
        fs::write(path.join("keep"), "x").unwrap();
    }

    let err = templates::remove_placeholders("master", &destination)
        .await
        .unwrap_err();

    match err {
        ScaffoldError::Materialize { source, .. } => {
            let detail = source.to_string();
            // Both failures are reported, each naming its own path.
            assert!(detail.contains("package.json"), "detail: {}", detail);
            assert!(detail.contains("bower.json"), "detail: {}", detail);
        }
        other => panic!("expected Materialize, got {:?}", other),
    }

    // The remaining placeholders still settled and were deleted.
    assert!(!destination.join("config/env/default.js").exists());
    assert!(!destination.join("config/env/development.js").exists());
}

#[tokio::test]
async fn unknown_version_aborts_before_touching_files() {
    let tmp = tempfile::tempdir().unwrap();
    let destination = tmp.path().join("app");
    fake_clone(&destination);

    let state = SessionState {
        version: "v99".to_string(),
        ..demo_state()
    };

    let result = templates::materialize(&state, &destination).await;
    assert!(matches!(result, Err(ScaffoldError::UnknownVersion(_))));
    // Placeholders untouched.
    let pkg = fs::read_to_string(destination.join("package.json")).unwrap();
    assert!(pkg.contains("placeholder"));
}

#[derive(Clone)]
struct TestConfig;

impl ProductConfig for TestConfig {
    fn name(&self) -> &'static str {
        "sean-test"
    }
    fn display_name(&self) -> &'static str {
        "SEAN test"
    }
    fn repo_url(&self) -> &'static str {
        "https://example.com/skeleton.git"
    }
    fn repo_url_env(&self) -> &'static str {
        "SEAN_TEST_REPO_URL_UNSET"
    }
    fn variant_base_url(&self) -> &'static str {
        // Nothing listens here: variant downloads must fail fast.
        "http://127.0.0.1:1/variants"
    }
    fn variant_url_env(&self) -> &'static str {
        "SEAN_TEST_VARIANT_URL_UNSET"
    }
    fn docs_url(&self) -> &'static str {
        "https://example.com/docs"
    }
    fn cli_description(&self) -> &'static str {
        "test"
    }
    fn next_steps(&self, _dir: &Path) -> Vec<String> {
        Vec::new()
    }
}

#[tokio::test]
async fn postgres_skips_the_variant_download_path() {
    let tmp = tempfile::tempdir().unwrap();
    let destination = tmp.path().join("app");
    fake_clone(&destination);

    // Default dialect: no download attempted, so the unreachable base URL
    // never matters.
    templates::apply_dialect_variants(&TestConfig, "master", Dialect::Postgres, &destination)
        .await
        .unwrap();
}

#[tokio::test]
async fn mysql_triggers_the_variant_download_path() {
    let tmp = tempfile::tempdir().unwrap();
    let destination = tmp.path().join("app");
    fake_clone(&destination);

    for dialect in [Dialect::MySql, Dialect::MariaDb] {
        let result =
            templates::apply_dialect_variants(&TestConfig, "master", dialect, &destination).await;
        // The download is attempted and fails against the unreachable host;
        // that failure is fatal (materialization class).
        assert!(matches!(result, Err(ScaffoldError::Materialize { .. })));
    }
}

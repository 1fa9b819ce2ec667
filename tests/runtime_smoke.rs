#![cfg(test)]
// End-to-end runtime smoke test (headless)
// - Runs diiwaan::app::run with DIIWAAN_TEST_HEADLESS=1 so no raw TTY is touched.
// - Points the config directory at a temp dir so the user's settings are never read.
// - A headless run returns once the bundled seed has been loaded.

use std::time::Duration;

use clap::Parser;

#[tokio::test(flavor = "multi_thread")]
async fn runtime_smoke_headless_loads_seed_and_exits() {
    let dir = tempfile::tempdir().expect("tempdir");
    unsafe {
        std::env::set_var(diiwaan::util::HEADLESS_ENV, "1");
        std::env::set_var("XDG_CONFIG_HOME", dir.path());
    }

    let args = diiwaan::args::Args::parse_from(["diiwaan", "--seed", "bundled", "--profile-id", "1"]);
    let handle = tokio::spawn(async move { diiwaan::app::run(&args).await });

    match tokio::time::timeout(Duration::from_secs(10), handle).await {
        Ok(Ok(result)) => {
            if let Err(e) = result {
                panic!("app::run returned error: {e:?}");
            }
        }
        Ok(Err(join_err)) => panic!("app::run task panicked: {join_err}"),
        Err(_) => panic!("headless run did not finish after the seed load"),
    }
    assert!(
        !dir.path().join("diiwaan").join("settings.conf").exists(),
        "headless runs must not write settings"
    );
}

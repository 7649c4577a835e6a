//! Tests for the `uninstall` pipeline against `FakeHost`.

#![allow(clippy::expect_used)]

use touchpad_installer::application::services::lifecycle::{install, uninstall};
use touchpad_installer::application::services::status::inspect;
use touchpad_installer::domain::ServiceState;

use crate::mocks::{EUID_EVENT, FakeHost, NoopReporter, RecordingReporter};

async fn installed_host() -> FakeHost {
    let host = FakeHost::as_root();
    let layout = host.layout().clone();
    install(&host, &layout, &host.sources(), &NoopReporter)
        .await
        .expect("install");
    host.clear_events();
    host
}

#[tokio::test]
async fn uninstall_after_install_removes_everything_but_the_module() {
    let host = installed_host().await;
    let layout = host.layout().clone();

    uninstall(&host, &layout, &NoopReporter)
        .await
        .expect("uninstall");

    assert_eq!(host.service(), ServiceState::default());
    assert!(!layout.binary_path.exists());
    assert!(!layout.unit_path.exists());
    assert!(!layout.install_dir.exists(), "empty install dir is removed");
    assert!(host.module_loaded(), "uninstall never unloads the module");
}

#[tokio::test]
async fn uninstall_stops_before_disabling_and_removes_files_last() {
    let host = installed_host().await;
    let layout = host.layout().clone();

    uninstall(&host, &layout, &NoopReporter)
        .await
        .expect("uninstall");

    assert_eq!(host.events().first().map(String::as_str), Some(EUID_EVENT));
    assert_eq!(
        host.mutations(),
        vec![
            "stop asus-touchpad.service",
            "disable asus-touchpad.service",
            "rm usr/share/asus-touchpad/asus-touchpad",
            "rm etc/systemd/system/asus-touchpad.service",
            "rmdir usr/share/asus-touchpad",
            "daemon-reload",
        ]
    );
}

#[tokio::test]
async fn uninstall_twice_succeeds_and_skips_disable() {
    let host = installed_host().await;
    let layout = host.layout().clone();

    uninstall(&host, &layout, &NoopReporter)
        .await
        .expect("first uninstall");
    host.clear_events();
    uninstall(&host, &layout, &NoopReporter)
        .await
        .expect("second uninstall must not fail on absent targets");

    assert_eq!(
        host.mutations(),
        vec![
            "stop asus-touchpad.service",
            "rm usr/share/asus-touchpad/asus-touchpad",
            "rm etc/systemd/system/asus-touchpad.service",
            "rmdir usr/share/asus-touchpad",
            "daemon-reload",
        ]
    );
    let status = inspect(&host, &layout).await.expect("inspect");
    assert!(status.is_uninstalled());
}

#[tokio::test]
async fn uninstall_on_clean_host_is_a_no_op_success() {
    let host = FakeHost::as_root();
    let layout = host.layout().clone();

    uninstall(&host, &layout, &NoopReporter)
        .await
        .expect("uninstall of nothing");

    assert!(!host.mutations().iter().any(|e| e.starts_with("disable")));
    assert_eq!(host.service(), ServiceState::default());
}

#[tokio::test]
async fn uninstall_keeps_install_dir_holding_foreign_files() {
    let host = installed_host().await;
    let layout = host.layout().clone();
    std::fs::write(layout.install_dir.join("notes.txt"), b"mine").expect("write");
    let reporter = RecordingReporter::default();

    uninstall(&host, &layout, &reporter)
        .await
        .expect("uninstall");

    assert!(!layout.binary_path.exists());
    assert!(layout.install_dir.join("notes.txt").exists());
    let kept = format!("! Kept {}", layout.install_dir.display());
    assert!(
        reporter.messages().iter().any(|m| m.starts_with(&kept)),
        "missing warning in {:?}",
        reporter.messages()
    );
}

#[tokio::test]
async fn uninstall_as_regular_user_mutates_nothing_and_exits_one() {
    let root = installed_host().await;
    let layout = root.layout().clone();
    // Same files on disk, but a host that reports a non-root uid.
    let user = FakeHost::as_uid(1000);

    let err = uninstall(&user, &layout, &NoopReporter)
        .await
        .expect_err("non-root uninstall must fail");

    assert_eq!(err.exit_code(), 1);
    assert_eq!(user.events(), vec![EUID_EVENT]);
    assert!(layout.binary_path.exists());
    assert!(layout.unit_path.exists());
}

#[tokio::test]
async fn stop_failure_aborts_before_disable_and_file_removal() {
    let installed = installed_host().await;
    let layout = installed.layout().clone();
    let host = installed.failing("stop");

    let err = uninstall(&host, &layout, &NoopReporter)
        .await
        .expect_err("stop failure must abort");

    assert_eq!(err.exit_code(), 5);
    assert_eq!(host.mutations(), vec!["stop asus-touchpad.service"]);
    assert!(host.service().enabled);
    assert!(layout.binary_path.exists());
    assert!(layout.unit_path.exists());
}

#[tokio::test]
async fn stop_is_sent_even_when_unit_reads_inactive() {
    let host = installed_host().await;
    let layout = host.layout().clone();
    {
        use touchpad_installer::application::ports::ServiceManager;
        host.stop(&layout.unit_name).await.expect("manual stop");
    }
    host.clear_events();

    uninstall(&host, &layout, &NoopReporter)
        .await
        .expect("uninstall");

    let mutations = host.mutations();
    assert_eq!(
        mutations[..2],
        ["stop asus-touchpad.service", "disable asus-touchpad.service"]
    );
}

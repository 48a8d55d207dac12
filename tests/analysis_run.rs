//! Integration tests for run_analysis
//!
//! These tests verify the sequential driver end to end:
//! - Every check records into the shared findings/issues lists
//! - HTTP failures (status, connect, timeout) become issues, never errors
//! - The written report matches the returned lists entry for entry

mod helpers;

use std::fs;
use std::time::Duration;

use helpers::{closed_port_url, create_test_config, parse_report_entries, TestProject};
use site_audit::{run_analysis, Config, Stage};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const HOME_PAGE: &str = r#"<!doctype html>
<html><head>
<title>Trustup24</title>
<meta name="description" content="Anbieter in den VAE finden und vergleichen.">
<script type="application/ld+json">{"@context":"https://schema.org","@type":"Organization"}</script>
<script src="/assets/ux-improvements.js"></script>
</head><body><div id="root"></div></body></html>"#;

async fn mount_site(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(HOME_PAGE))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/anbieter-finden.html"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>static</html>"))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/matching-finden.html"))
        .respond_with(ResponseTemplate::new(500))
        .mount(server)
        .await;
    // /anbieter-vergleichen.html is left unmounted: wiremock answers 404
}

#[tokio::test]
async fn test_full_run_records_every_check_in_order() {
    let server = MockServer::start().await;
    mount_site(&server).await;

    let project = TestProject::new()
        .asset(
            "index-abc.js",
            "function App() { return window.supabaseReady }\nexport default App",
        )
        .root_file(".env", "SUPABASE_URL=\"https://x.supabase.co\"\n");
    let config = create_test_config(&project, &server.uri());

    let report = run_analysis(config).await.expect("run should succeed");

    assert_eq!(
        report.findings,
        vec![
            "Components in index-abc.js: App",
            "Supabase integration found in index-abc.js",
            "Supabase config found in .env",
            "Supabase URL pattern found in .env",
            "/ - Status: 200",
            "React root element found on /",
            "UX improvements script loaded on /",
            "/anbieter-finden.html - Status: 200",
            "Title: Trustup24",
            "Meta description found",
            "Structured data (JSON-LD) found: Organization",
        ]
    );
    assert_eq!(
        report.issues,
        vec![
            "HTTP 500 for /matching-finden.html",
            "HTTP 404 for /anbieter-vergleichen.html",
        ]
    );

    assert_eq!(report.report_path, project.report_path());
    let written = fs::read_to_string(&report.report_path).expect("report should exist");
    assert!(written.starts_with("TRUSTUP24 SYSTEM ANALYSIS REPORT\n"));
    assert!(written.contains("ISSUES (2):"));
    let (findings, issues) = parse_report_entries(&written);
    assert_eq!(findings, report.findings);
    assert_eq!(issues, report.issues);
}

#[tokio::test]
async fn test_unreachable_site_becomes_issues() {
    let project = TestProject::new();
    let config = Config {
        skip: vec![Stage::Bundle, Stage::Config],
        ..create_test_config(&project, &closed_port_url())
    };

    let report = run_analysis(config).await.expect("network errors must not fail the run");

    assert!(report.findings.is_empty());
    assert_eq!(report.issues.len(), 5);
    let endpoints = ["/", "/anbieter-finden.html", "/matching-finden.html", "/anbieter-vergleichen.html"];
    for (issue, endpoint) in report.issues.iter().zip(endpoints) {
        assert!(
            issue.starts_with(&format!("Connection error for {}: ", endpoint)),
            "unexpected issue: {}",
            issue
        );
    }
    assert!(report.issues[4].starts_with("❌ Could not check SEO structure: "));

    let written = fs::read_to_string(&report.report_path).expect("report should exist");
    let (_, issues) = parse_report_entries(&written);
    assert_eq!(issues, report.issues);
}

#[tokio::test]
async fn test_slow_endpoint_times_out_into_issue() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/slow.html"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("late")
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let project = TestProject::new();
    let config = Config {
        endpoints: vec!["/slow.html".to_string()],
        timeout_seconds: 1,
        skip: vec![Stage::Bundle, Stage::Config, Stage::Seo],
        ..create_test_config(&project, &server.uri())
    };

    let report = run_analysis(config).await.expect("timeouts must not fail the run");

    assert!(report.findings.is_empty());
    assert_eq!(report.issues.len(), 1);
    assert!(
        report.issues[0].starts_with("Connection error for /slow.html: timed out: "),
        "unexpected issue: {}",
        report.issues[0]
    );
}

#[tokio::test]
async fn test_seo_non_200_is_issue() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let project = TestProject::new();
    let config = Config {
        skip: vec![Stage::Bundle, Stage::Config, Stage::Endpoints],
        ..create_test_config(&project, &server.uri())
    };

    let report = run_analysis(config).await.expect("run should succeed");
    assert_eq!(report.issues, vec!["HTTP 503 for SEO check"]);
}

#[tokio::test]
async fn test_missing_assets_and_config_are_issues() {
    let project = TestProject::new();
    fs::remove_dir(project.root().join("assets")).expect("Failed to remove assets dir");
    let config = Config {
        skip: vec![Stage::Endpoints, Stage::Seo],
        ..create_test_config(&project, "http://127.0.0.1:9")
    };

    let report = run_analysis(config).await.expect("run should succeed");
    assert!(report.findings.is_empty());
    assert_eq!(
        report.issues,
        vec![
            "❌ No assets directory found",
            "❌ No Supabase configuration found",
        ]
    );
}

#[tokio::test]
async fn test_report_write_failure_fails_run() {
    let project = TestProject::new().root_file("blocker", "not a directory");
    let config = Config {
        report_path: Some(project.root().join("blocker").join("report.txt")),
        skip: vec![Stage::Endpoints, Stage::Seo],
        ..create_test_config(&project, "http://127.0.0.1:9")
    };

    let err = run_analysis(config)
        .await
        .expect_err("unwritable report path should fail the run");
    assert!(format!("{:#}", err).contains("Failed to write report"));
}

#[tokio::test]
async fn test_invalid_base_url_fails_before_checks() {
    let project = TestProject::new();
    let config = create_test_config(&project, "ftp://trustup24.ae");

    let err = run_analysis(config)
        .await
        .expect_err("non-http base URL should be rejected");
    assert!(format!("{:#}", err).contains("Invalid configuration"));
    assert!(!project.report_path().exists());
}

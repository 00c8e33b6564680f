//! Integration tests covering the full load-then-lookup lifecycle,
//! including the process-wide default instance.

use std::io::Write;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use pretty_assertions::assert_eq;
use serial_test::serial;
use tempfile::NamedTempFile;

use confreg::constants;
use confreg::env::Env;
use confreg::{ConfigError, ConfigRegistry};

/// Path to the test fixture directory.
fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

fn write_properties(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn roundtrip_typed_accessors() {
    let file = write_properties("a=1\nb=true\nc=hello\n");
    let registry = ConfigRegistry::new();
    registry.init_from_path(file.path()).unwrap();

    assert_eq!(registry.get_int("a", 0).unwrap(), 1);
    assert!(registry.get_bool("b", false));
    assert_eq!(registry.get_string("c", ""), "hello");
}

#[test]
fn framework_fixture_loads_all_key_categories() {
    let registry = ConfigRegistry::new();
    registry
        .init_from_path(fixtures_dir().join(constants::PROPERTIES_FILE_NAME))
        .unwrap();

    assert!(!registry.get_bool(constants::ISDEBUG, true));
    assert!(registry.get_bool(constants::CORS, false));
    assert_eq!(
        registry.get_string(constants::JDBC_RESOURCE, ""),
        "jdbc/defaultdb"
    );
    assert_eq!(
        registry.get_string(constants::EVENT_FOLDER, ""),
        "/WEB-INF/efw/event"
    );
    assert_eq!(registry.get_string(constants::LOG_LEVEL, "INFO"), "WARNING");
    assert_eq!(registry.get_int(constants::LOG_LIMIT, 0).unwrap(), 1_048_576);
    assert_eq!(registry.get_int(constants::LOG_NUM, 0).unwrap(), 5);
    assert_eq!(
        registry.get_string(constants::SYSTEM_ERROR_URL, ""),
        "error.jsp"
    );
    assert_eq!(
        registry.get_raw(constants::OUTOFLOGIN_URL_PATTERN),
        Some("^/(login|public)/.*".to_string())
    );
}

#[test]
fn per_case_authorization_keys_resolve_flat() {
    let registry = ConfigRegistry::new();
    registry
        .init_from_path(fixtures_dir().join(constants::PROPERTIES_FILE_NAME))
        .unwrap();

    let cases = registry.get_string(constants::AUTH_CASES, "");
    for case_id in cases.split(',') {
        let url_key = constants::case_key(case_id, constants::URL_PATTERN_SUFFIX);
        let auth_key = constants::case_key(case_id, constants::AUTH_PATTERN_SUFFIX);
        assert!(registry.get_raw(&url_key).is_some(), "missing {url_key}");
        assert!(registry.get_raw(&auth_key).is_some(), "missing {auth_key}");
    }
    assert_eq!(
        registry.get_string(&constants::case_key("admin", constants::URL_PATTERN_SUFFIX), ""),
        "^/admin/.*"
    );
}

/// Writer that collects formatted log output into a shared buffer.
#[derive(Clone, Default)]
struct LogCapture(Arc<Mutex<Vec<u8>>>);

impl LogCapture {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl std::io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for LogCapture {
    type Writer = LogCapture;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[test]
fn failed_init_is_logged_before_propagation() {
    let capture = LogCapture::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(capture.clone())
        .with_ansi(false)
        .finish();

    let registry = ConfigRegistry::new();
    let err = tracing::subscriber::with_default(subscriber, || {
        registry
            .init_from_path("/nonexistent/confreg-test/efw.properties")
            .unwrap_err()
    });

    assert!(matches!(err, ConfigError::Read { .. }));
    let output = capture.contents();
    assert!(
        output.contains("configuration init failed"),
        "expected the load failure in log output, got: {output}"
    );
    assert!(output.contains("efw.properties"));
}

#[test]
fn malformed_file_surfaces_load_error() {
    let file = write_properties("good=1\nbad=\\uZZZZ\n");
    let registry = ConfigRegistry::new();
    let err = registry.init_from_path(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Malformed { .. }));
    // Nothing was stored.
    assert_eq!(registry.get_string("good", "default"), "default");
}

#[test]
#[serial]
fn global_instance_init_and_reinit() {
    let first = write_properties("x=1\n");
    let second = write_properties("y=2\n");

    ConfigRegistry::global().init_from_path(first.path()).unwrap();
    assert_eq!(ConfigRegistry::global().get_string("x", ""), "1");

    // Last init wins: prior values are fully replaced, not merged.
    ConfigRegistry::global().init_from_path(second.path()).unwrap();
    assert_eq!(ConfigRegistry::global().get_string("x", "default"), "default");
    assert_eq!(ConfigRegistry::global().get_string("y", ""), "2");
}

#[test]
#[serial]
fn global_instance_default_init_honours_env_override() {
    let env = Env::overridden(fixtures_dir().join(constants::PROPERTIES_FILE_NAME));

    ConfigRegistry::global().init(&env).unwrap();
    assert!(ConfigRegistry::global().is_initialized());
    assert_eq!(
        ConfigRegistry::global().get_string(constants::LOGIN_KEY, ""),
        "loginUser"
    );
}

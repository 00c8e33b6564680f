//! Well-known configuration keys.
//!
//! Centralises the fixed properties file name and every key the hosting
//! framework reads, so consumers reference constants instead of assembling
//! key strings ad hoc. The key names are an external contract shared with
//! deployed properties files and must not be renamed casually.

/// Display name of the library (lowercase), used for the config-dir
/// fallback in resource resolution.
pub const APP_NAME: &str = "confreg";

/// Fixed name of the properties file resolved by the default init.
pub const PROPERTIES_FILE_NAME: &str = "efw.properties";

/// Environment variable that points the default init at an explicit
/// properties file, overriding the search path.
pub const ENV_PROPERTIES_PATH: &str = "CONFREG_PROPERTIES";

// ── Framework flags ─────────────────────────────────────────────────

/// Debug mode flag.
pub const ISDEBUG: &str = "efw.isdebug";

/// Cross-origin resource sharing flag.
pub const CORS: &str = "efw.cors";

// ── External resources ──────────────────────────────────────────────

/// JDBC resource name.
pub const JDBC_RESOURCE: &str = "efw.jdbc.resource";
pub const JDBC_RESOURCE_URL: &str = "efw.jdbc.resource.url";
pub const JDBC_RESOURCE_USERNAME: &str = "efw.jdbc.resource.username";
pub const JDBC_RESOURCE_PASSWORD: &str = "efw.jdbc.resource.password";

/// Mail resource name.
pub const MAIL_RESOURCE: &str = "efw.mail.resource";

// ── Rule imports ────────────────────────────────────────────────────

/// Business-rule import list.
pub const BRMS_IMPORT: &str = "efw.brms.import";

/// Business-rule code type.
pub const BRMS_CODETYPE: &str = "efw.brms.codetype";

// ── Folder layout ───────────────────────────────────────────────────

/// Event-script folder path.
pub const EVENT_FOLDER: &str = "efw.event.folder";

/// Externalized-SQL folder path.
pub const SQL_FOLDER: &str = "efw.sql.folder";

/// File-storage folder path.
pub const STORAGE_FOLDER: &str = "efw.storage.folder";

/// Mail-template folder path.
pub const MAIL_FOLDER: &str = "efw.mail.folder";

// ── Logging ─────────────────────────────────────────────────────────

pub const LOG_FILE_PATH: &str = "efw.logging.path";
pub const LOG_FILE_NAME: &str = "efw.logging.name";
pub const LOG_LEVEL: &str = "efw.logging.level";

/// Log rotation size limit, in bytes.
pub const LOG_LIMIT: &str = "efw.logging.limit";

/// Number of rotated log files to keep.
pub const LOG_NUM: &str = "efw.logging.num";

// ── Login ───────────────────────────────────────────────────────────

/// Login check flag.
pub const LOGIN_CHECK: &str = "efw.login.check";

/// Session key holding the login information.
pub const LOGIN_KEY: &str = "efw.login.key";

/// Redirect URL for session timeouts.
pub const LOGIN_URL: &str = "efw.login.url";

/// Regex for URLs exempt from the login check.
pub const OUTOFLOGIN_URL_PATTERN: &str = "efw.outoflogin.url.pattern";

/// Regex for event IDs exempt from the login check.
pub const OUTOFLOGIN_EVENTID_PATTERN: &str = "efw.outoflogin.eventid.pattern";

// ── Authorization ───────────────────────────────────────────────────

/// Authorization check flag.
pub const AUTH_CHECK: &str = "efw.auth.check";

/// Session key holding the authorization information.
pub const AUTH_KEY: &str = "efw.auth.key";

/// Comma-separated list of authorization case identifiers.
pub const AUTH_CASES: &str = "efw.auth.cases";

/// Per-case key suffix: required-authorization pattern (`<case>.auth.pattern`).
pub const AUTH_PATTERN_SUFFIX: &str = "auth.pattern";

/// Per-case key suffix: URL pattern the case applies to (`<case>.url.pattern`).
pub const URL_PATTERN_SUFFIX: &str = "url.pattern";

// ── Miscellaneous ───────────────────────────────────────────────────

/// Redirect URL for system errors.
pub const SYSTEM_ERROR_URL: &str = "efw.system.error.url";

/// Full path of the HTML-to-PDF conversion tool.
pub const PDF_WKHTMLTOPDF: &str = "efw.pdf.wkhtmltopdf";

/// Full path of the PDF merge tool.
pub const PDF_PDFTK: &str = "efw.pdf.pdftk";

/// Assemble a per-case authorization key from a case identifier and one of
/// the pattern suffixes.
///
/// The authorization keys are flat entries in the properties file
/// (`admin.url.pattern=^/admin/.*`), so callers build the full key from the
/// case identifiers listed under [`AUTH_CASES`].
pub fn case_key(case_id: &str, suffix: &str) -> String {
    format!("{case_id}.{suffix}")
}

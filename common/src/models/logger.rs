use std::collections::HashMap;
use std::sync::Arc;

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};
use tracing::trace;

use crate::Client;

/// Characters that cannot appear unescaped in the `[LOG_ID]` part of a log name
const LOG_ID: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'?');

/// A named log within a project
#[derive(Clone, Debug)]
pub struct Logger {
    name: String,
    project: String,
    client: Arc<Client>,
}

impl Logger {
    /// A logger in the project of `client`
    pub fn new(name: impl Into<String>, client: Arc<Client>) -> Self {
        let project = client.project().to_string();

        Self::in_project(project, name, client)
    }

    /// A logger in `project`, which need not be the project of `client`
    pub fn in_project(
        project: impl Into<String>,
        name: impl Into<String>,
        client: Arc<Client>,
    ) -> Self {
        Self {
            name: name.into(),
            project: project.into(),
            client,
        }
    }

    /// The short, unescaped name of this logger
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn project(&self) -> &str {
        &self.project
    }

    pub fn client(&self) -> &Arc<Client> {
        &self.client
    }

    /// The full resource name of the log, in the form `projects/[PROJECT_ID]/logs/[LOG_ID]`
    pub fn full_name(&self) -> String {
        format!(
            "projects/{}/logs/{}",
            self.project(),
            utf8_percent_encode(&self.name, LOG_ID)
        )
    }
}

/// Get the short logger name out of a `projects/[PROJECT_ID]/logs/[LOG_ID]` path
///
/// Logs that belong to organizations, folders or billing accounts have no project
/// scoped logger and give `None`.
pub fn logger_name_from_path(path: &str) -> Option<String> {
    logger_path(path).map(|(_, name)| name)
}

/// The project and the short logger name of a `projects/[PROJECT_ID]/logs/[LOG_ID]` path
pub fn logger_path(path: &str) -> Option<(&str, String)> {
    let mut segments = path.split('/');

    match (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) {
        (Some("projects"), Some(project), Some("logs"), Some(log_id), None)
            if !project.is_empty() && !log_id.is_empty() =>
        {
            Some((
                project,
                percent_decode_str(log_id).decode_utf8_lossy().into_owned(),
            ))
        }
        _ => None,
    }
}

/// Loggers already created while listing entries, keyed by the full log name
///
/// Lives for exactly one listing call so entries of the same log share a single logger.
#[derive(Debug, Default)]
pub struct LoggerCache {
    loggers: HashMap<String, Arc<Logger>>,
}

impl LoggerCache {
    /// Get the logger for `log_name`, creating it on first sight
    ///
    /// The logger belongs to the project named in `log_name`, so entries listed from
    /// other projects keep their own full name.
    pub fn get_or_create(&mut self, log_name: &str, client: &Arc<Client>) -> Option<Arc<Logger>> {
        if let Some(logger) = self.loggers.get(log_name) {
            return Some(Arc::clone(logger));
        }

        let (project, name) = logger_path(log_name)?;
        let logger = Arc::new(Logger::in_project(project, name, Arc::clone(client)));
        trace!(log_name, "created logger for listed entries");
        self.loggers
            .insert(log_name.to_string(), Arc::clone(&logger));

        Some(logger)
    }

    pub fn len(&self) -> usize {
        self.loggers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loggers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn name_from_project_path() {
        assert_eq!(
            logger_name_from_path("projects/my-project/logs/syslog"),
            Some("syslog".to_string())
        );
        assert_eq!(
            logger_name_from_path(
                "projects/my-project/logs/cloudresourcemanager.googleapis.com%2Factivity"
            ),
            Some("cloudresourcemanager.googleapis.com/activity".to_string())
        );
    }

    #[test]
    fn name_from_other_paths() {
        assert_eq!(
            logger_name_from_path("organizations/1234567890/logs/syslog"),
            None
        );
        assert_eq!(logger_name_from_path("projects/my-project/logs"), None);
        assert_eq!(logger_name_from_path("projects/my-project/logs/a/b"), None);
        assert_eq!(logger_name_from_path("syslog"), None);
    }

    #[test]
    fn full_name_escapes_log_id() {
        let client = Arc::new(Client::new("my-project"));
        let logger = client.logger("cloudresourcemanager.googleapis.com/activity");

        assert_eq!(
            logger.full_name(),
            "projects/my-project/logs/cloudresourcemanager.googleapis.com%2Factivity"
        );
        assert_eq!(
            logger_name_from_path(&logger.full_name()).as_deref(),
            Some(logger.name())
        );
    }

    #[test]
    fn cache_binds_loggers_to_their_project() {
        let client = Arc::new(Client::new("my-project"));
        let mut cache = LoggerCache::default();

        let own = cache
            .get_or_create("projects/my-project/logs/syslog", &client)
            .unwrap();
        let other = cache
            .get_or_create("projects/other/logs/x", &client)
            .unwrap();

        assert_eq!(own.project(), "my-project");
        assert_eq!(other.project(), "other");
        assert_eq!(other.name(), "x");
        assert_eq!(other.full_name(), "projects/other/logs/x");
        assert!(Arc::ptr_eq(other.client(), &client));
    }

    #[test]
    fn cache_reuses_loggers() {
        let client = Arc::new(Client::new("my-project"));
        let mut cache = LoggerCache::default();

        let first = cache
            .get_or_create("projects/my-project/logs/syslog", &client)
            .unwrap();
        let second = cache
            .get_or_create("projects/my-project/logs/syslog", &client)
            .unwrap();
        let other = cache
            .get_or_create("projects/my-project/logs/stderr", &client)
            .unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert!(!Arc::ptr_eq(&first, &other));
        assert_eq!(cache.len(), 2);

        assert!(cache
            .get_or_create("folders/123/logs/syslog", &client)
            .is_none());
        assert_eq!(cache.len(), 2);
    }
}

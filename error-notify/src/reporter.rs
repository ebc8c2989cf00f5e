use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{error, warn};

use crate::dispatch::Dispatcher;
use crate::error::{NotifyError, Result};
use crate::i18n::Catalog;
use crate::report::{Report, ReportKind};

/// Message id returned to callers that send an unknown report type
pub const INVALID_TYPE_MSGID: &str = "Invalid type parameter";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseResult {
    Success,
    Error,
}

/// JSON reply body for a report submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportResponse {
    pub result: ResponseResult,
    pub msg: String,
}

impl ReportResponse {
    pub fn success() -> Self {
        Self {
            result: ResponseResult::Success,
            msg: String::new(),
        }
    }

    pub fn error(msg: impl Into<String>) -> Self {
        Self {
            result: ResponseResult::Error,
            msg: msg.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.result == ResponseResult::Success
    }
}

/// Entry point of the pipeline: stamps, validates and dispatches one report
pub struct ErrorReporter {
    dispatcher: Dispatcher,
    catalog: Catalog,
}

impl ErrorReporter {
    pub fn new(dispatcher: Dispatcher, catalog: Catalog) -> Self {
        Self { dispatcher, catalog }
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Handle a report of type `kind` from `deployment_name`.
    ///
    /// An unknown kind is a caller error and nothing is sent. For a known kind the
    /// reply is always success; delivery failures only reach the log.
    pub async fn report_error(
        &self,
        deployment_name: &str,
        kind: &str,
        mut report: Map<String, Value>,
    ) -> Result<ReportResponse> {
        report.insert("deployment".to_string(), Value::from(deployment_name));

        let kind: ReportKind = match kind.parse() {
            Ok(kind) => kind,
            Err(e) => {
                warn!(error = %e, "Rejected error report");
                return Err(NotifyError::InvalidType {
                    kind: e.0,
                    message: self.catalog.translate(INVALID_TYPE_MSGID),
                });
            }
        };

        let report = Report::normalize(report);
        let outcome = match kind {
            ReportKind::Browser => self.dispatcher.notify_browser_error(&report).await,
            ReportKind::Server => self.dispatcher.notify_server_error(&report).await,
        };

        if let Err(e) = outcome {
            error!(
                kind = %kind,
                error_type = e.error_type(),
                error = %e,
                "Error report notification failed"
            );
        }

        Ok(ReportResponse::success())
    }
}

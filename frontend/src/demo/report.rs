use std::collections::BTreeMap;
use std::fmt::Display;

/// CSS class a result block is rendered with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Loading,
    Success,
    Error,
}

impl Tone {
    pub const fn class(self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Success => "success",
            Self::Error => "error",
        }
    }

    pub const fn from_ok(ok: bool) -> Self {
        if ok {
            Self::Success
        } else {
            Self::Error
        }
    }
}

/// The parts of a response the demos look at. Bodies are never read.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResponseSummary {
    pub status: u16,
    pub status_text: String,
    pub ok: bool,
}

impl ResponseSummary {
    fn status_line(&self) -> String {
        format!("{} {}", self.status, escape_html(&self.status_text))
    }
}

pub trait Report {
    fn tone(&self) -> Tone;

    fn body(&self) -> String;

    fn to_html(&self) -> String {
        block(self.tone(), &self.body())
    }
}

pub fn loading(message: &str) -> String {
    block(Tone::Loading, &escape_html(message))
}

pub fn failure(error: &dyn Display) -> String {
    block(Tone::Error, &format!("Error: {}", escape_html(&error.to_string())))
}

fn block(tone: Tone, body: &str) -> String {
    format!("<div class=\"{}\">{body}</div>", tone.class())
}

pub struct MethodReport {
    pub method: String,
    pub response: ResponseSummary,
    pub headers: BTreeMap<String, String>,
}

impl Report for MethodReport {
    fn tone(&self) -> Tone {
        Tone::from_ok(self.response.ok)
    }

    fn body(&self) -> String {
        let headers =
            serde_json::to_string_pretty(&self.headers).unwrap_or_else(|_| "{}".to_string());
        format!(
            "<strong>{}</strong>: {}<br>Headers: {}",
            escape_html(&self.method),
            self.response.status_line(),
            escape_html(&headers)
        )
    }
}

#[derive(Debug)]
pub struct ConcurrencyReport {
    pub requests: usize,
    pub successful: usize,
    pub duration_ms: f64,
}

impl ConcurrencyReport {
    pub fn new(outcomes: &[bool], duration_ms: f64) -> Self {
        Self {
            requests: outcomes.len(),
            successful: outcomes.iter().filter(|ok| **ok).count(),
            duration_ms,
        }
    }

    pub fn average_ms(&self) -> f64 {
        self.duration_ms / self.requests.max(1) as f64
    }
}

impl Report for ConcurrencyReport {
    // A completed batch always counts as a successful run.
    fn tone(&self) -> Tone {
        Tone::Success
    }

    fn body(&self) -> String {
        format!(
            "<strong>Concurrent Test Results:</strong><br>Requests: {}<br>Successful: {}<br>Duration: {}ms<br>Avg: {:.2}ms per request",
            self.requests,
            self.successful,
            self.duration_ms,
            self.average_ms()
        )
    }
}

pub struct LargePayloadReport {
    pub payload_len: usize,
    pub response: ResponseSummary,
    pub duration_ms: f64,
}

impl Report for LargePayloadReport {
    fn tone(&self) -> Tone {
        Tone::from_ok(self.response.ok)
    }

    fn body(&self) -> String {
        format!(
            "<strong>Large File Test:</strong><br>Data Size: {} bytes<br>Status: {}<br>Duration: {}ms",
            self.payload_len,
            self.response.status_line(),
            self.duration_ms
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TraversalVerdict {
    Blocked,
    Vulnerable,
}

impl TraversalVerdict {
    /// Only a 404 counts as the server refusing to walk out of its root.
    pub const fn from_status(status: u16) -> Self {
        if status == 404 {
            Self::Blocked
        } else {
            Self::Vulnerable
        }
    }

    pub const fn message(self) -> &'static str {
        match self {
            Self::Blocked => "Path traversal blocked ✓",
            Self::Vulnerable => "Path traversal vulnerability!",
        }
    }
}

pub struct TraversalReport {
    pub path: String,
    pub response: ResponseSummary,
}

impl TraversalReport {
    pub const fn verdict(&self) -> TraversalVerdict {
        TraversalVerdict::from_status(self.response.status)
    }
}

impl Report for TraversalReport {
    fn tone(&self) -> Tone {
        match self.verdict() {
            TraversalVerdict::Blocked => Tone::Success,
            TraversalVerdict::Vulnerable => Tone::Error,
        }
    }

    fn body(&self) -> String {
        format!(
            "<strong>Path Traversal Test:</strong><br>Path: {}<br>Status: {}<br>Result: {}",
            escape_html(&self.path),
            self.response.status_line(),
            self.verdict().message()
        )
    }
}

/// The header demo reports success for any response that arrives; only the
/// styling follows the status.
pub struct HeaderReport {
    pub response: ResponseSummary,
}

impl Report for HeaderReport {
    fn tone(&self) -> Tone {
        Tone::from_ok(self.response.ok)
    }

    fn body(&self) -> String {
        format!(
            "<strong>Header Validation Test:</strong><br>Status: {}<br>Result: Headers processed safely ✓<br>Note: Browser blocks malicious header injection",
            self.response.status_line()
        )
    }
}

pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    fn summary(status: u16, status_text: &str) -> ResponseSummary {
        ResponseSummary {
            status,
            status_text: status_text.to_string(),
            ok: (200..300).contains(&status),
        }
    }

    #[test]
    fn loading_block() {
        assert_eq!(
            loading("Testing GET..."),
            "<div class=\"loading\">Testing GET...</div>"
        );
    }

    #[test]
    fn failure_block_escapes_message() {
        let html = failure(&"Failed <to> fetch");
        assert_eq!(
            html,
            "<div class=\"error\">Error: Failed &lt;to&gt; fetch</div>"
        );
    }

    #[test]
    fn method_report_lists_headers_pretty() {
        let mut headers = BTreeMap::new();
        headers.insert("content-type".to_string(), "text/html".to_string());
        headers.insert("allow".to_string(), "GET, POST".to_string());

        let report = MethodReport {
            method: "GET".to_string(),
            response: summary(200, "OK"),
            headers,
        };

        assert_eq!(report.tone(), Tone::Success);
        let html = report.to_html();
        assert!(html.starts_with("<div class=\"success\"><strong>GET</strong>: 200 OK"));
        assert!(html.contains("{\n  &quot;allow&quot;: &quot;GET, POST&quot;,\n  &quot;content-type&quot;"));
    }

    #[test]
    fn method_report_errors_on_non_ok() {
        let report = MethodReport {
            method: "DELETE".to_string(),
            response: summary(405, "Method Not Allowed"),
            headers: BTreeMap::new(),
        };

        assert_eq!(report.tone(), Tone::Error);
        assert!(report.to_html().contains("405 Method Not Allowed<br>Headers: {}"));
    }

    #[test]
    fn ten_successful_requests() {
        let report = ConcurrencyReport::new(&[true; 10], 153.0);

        assert_eq!(report.requests, 10);
        assert_eq!(report.successful, 10);
        assert_eq!(report.average_ms(), 153.0 / 10.0);

        let html = report.to_html();
        assert!(html.contains("Requests: 10<br>Successful: 10<br>Duration: 153ms"));
        assert!(html.contains("Avg: 15.30ms per request"));
    }

    #[test]
    fn concurrency_counts_only_ok_responses() {
        let mut outcomes = [true; 10];
        outcomes[3] = false;
        outcomes[7] = false;

        let report = ConcurrencyReport::new(&outcomes, 40.0);
        assert_eq!(report.successful, 8);
        assert_eq!(report.tone(), Tone::Success);
    }

    #[test]
    fn large_payload_reports_size_and_status() {
        let report = LargePayloadReport {
            payload_len: 10_000,
            response: summary(413, "Payload Too Large"),
            duration_ms: 12.0,
        };

        assert_eq!(report.tone(), Tone::Error);
        let html = report.to_html();
        assert!(html.contains("Data Size: 10000 bytes"));
        assert!(html.contains("Status: 413 Payload Too Large<br>Duration: 12ms"));
    }

    #[test]
    fn not_found_means_blocked() {
        let report = TraversalReport {
            path: "../../../etc/passwd".to_string(),
            response: summary(404, "Not Found"),
        };

        assert_eq!(report.verdict(), TraversalVerdict::Blocked);
        assert_eq!(report.tone(), Tone::Success);
        assert!(report.to_html().contains("Result: Path traversal blocked ✓"));
    }

    #[test]
    fn any_other_status_is_a_vulnerability() {
        for status in [200, 301, 403, 500] {
            assert_eq!(
                TraversalVerdict::from_status(status),
                TraversalVerdict::Vulnerable
            );
        }

        let report = TraversalReport {
            path: "../../../etc/passwd".to_string(),
            response: summary(200, "OK"),
        };
        assert_eq!(report.tone(), Tone::Error);
        assert!(report.to_html().contains("Path traversal vulnerability!"));
    }

    #[test]
    fn header_report_always_claims_safe_handling() {
        for (status, text) in [(200, "OK"), (400, "Bad Request")] {
            let report = HeaderReport {
                response: summary(status, text),
            };
            assert!(report.to_html().contains("Headers processed safely ✓"));
        }

        let rejected = HeaderReport {
            response: summary(400, "Bad Request"),
        };
        assert_eq!(rejected.tone(), Tone::Error);
    }

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(
            escape_html("<a href=\"x\">Tom & 'Jerry'</a>"),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }
}

use thiserror::Error;

/// Failures while attaching to the page at startup.
#[derive(Debug, Error)]
pub enum BindError {
    #[error("no browser window available")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("required element `{0}` is missing from the page")]
    MissingElement(&'static str),
    #[error("element `{0}` is not an HTML element")]
    NotHtmlElement(&'static str),
    #[error("selector `{0}` could not be evaluated")]
    BadSelector(&'static str),
    #[error("failed to register `{0}` handler")]
    Listener(&'static str),
    #[error("failed to create intersection observer")]
    Observer,
    #[error("failed to inject result styles: {0}")]
    Styles(String),
    #[error("failed to publish global `{0}`")]
    Global(&'static str),
}

/// Failures of a single demo run. Rendered into the runner's result area.
#[derive(Debug, Error)]
pub enum DemoError {
    #[error("{0}")]
    Request(#[from] gloo_net::Error),
    #[error("invalid HTTP method `{0}`")]
    InvalidMethod(String),
}

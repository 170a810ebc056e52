use std::rc::Rc;

use futures::future::try_join_all;
use gloo_net::http::{Method, Request, RequestBuilder, Response};
use log::{info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::future_to_promise;
use web_sys::js_sys::{Date, Promise, Reflect};
use web_sys::Window;

use crate::config::DemoConfig;
use crate::demo::report::{
    self, ConcurrencyReport, HeaderReport, LargePayloadReport, MethodReport, Report,
    ResponseSummary, TraversalReport,
};
use crate::error::{BindError, DemoError};
use crate::view::{ResultArea, ResultAreas};

/// The five demo buttons and the result areas they write into.
pub struct DemoPanel {
    results: ResultAreas,
    config: DemoConfig,
}

impl DemoPanel {
    pub fn new(results: ResultAreas, config: DemoConfig) -> Self {
        Self { results, config }
    }

    fn show(&self, area: ResultArea, html: &str) {
        self.results.get(area).set_inner_html(html);
    }

    async fn run<R, F>(&self, area: ResultArea, loading: &str, demo: F)
    where
        R: Report,
        F: std::future::Future<Output = Result<R, DemoError>>,
    {
        self.show(area, &report::loading(loading));
        match demo.await {
            Ok(result) => self.show(area, &result.to_html()),
            Err(e) => {
                warn!("{loading} failed: {e}");
                self.show(area, &report::failure(&e));
            }
        }
    }

    pub async fn test_method(&self, method: &str) {
        self.run(
            ResultArea::Method,
            &format!("Testing {method}..."),
            self.send_method(method),
        )
        .await;
    }

    pub async fn test_concurrency(&self) {
        self.run(
            ResultArea::Performance,
            "Testing concurrent requests...",
            self.send_concurrent(),
        )
        .await;
    }

    pub async fn test_large_file(&self) {
        self.run(
            ResultArea::Performance,
            "Testing large file...",
            self.send_large_payload(),
        )
        .await;
    }

    pub async fn test_security(&self) {
        self.run(
            ResultArea::Security,
            "Testing path traversal...",
            self.send_traversal(),
        )
        .await;
    }

    pub async fn test_headers(&self) {
        self.run(
            ResultArea::Security,
            "Testing header validation...",
            self.send_custom_headers(),
        )
        .await;
    }

    async fn send_method(&self, method: &str) -> Result<MethodReport, DemoError> {
        let verb = parse_method(method)?;
        let response = RequestBuilder::new("/")
            .method(verb)
            .header("Content-Type", "text/plain")
            .build()?
            .send()
            .await?;

        Ok(MethodReport {
            method: method.to_string(),
            headers: response.headers().entries().collect(),
            response: summarize(&response),
        })
    }

    async fn send_concurrent(&self) -> Result<ConcurrencyReport, DemoError> {
        let started = Date::now();
        let requests = (0..self.config.concurrent_requests)
            .map(|i| async move { Request::get(&format!("/?test={i}")).build()?.send().await });

        let responses = try_join_all(requests).await?;
        let duration_ms = Date::now() - started;

        let outcomes: Vec<bool> = responses.iter().map(Response::ok).collect();
        info!(
            "Concurrent batch of {} finished in {duration_ms}ms",
            outcomes.len()
        );
        Ok(ConcurrencyReport::new(&outcomes, duration_ms))
    }

    async fn send_large_payload(&self) -> Result<LargePayloadReport, DemoError> {
        let payload = large_payload(&self.config);
        let payload_len = payload.len();

        let started = Date::now();
        let response = Request::post("/")
            .header("Content-Type", "text/plain")
            .body(payload)?
            .send()
            .await?;
        let duration_ms = Date::now() - started;

        Ok(LargePayloadReport {
            payload_len,
            response: summarize(&response),
            duration_ms,
        })
    }

    async fn send_traversal(&self) -> Result<TraversalReport, DemoError> {
        let path = self.config.traversal_path;
        let response = Request::get(&format!("/{path}")).build()?.send().await?;

        Ok(TraversalReport {
            path: path.to_string(),
            response: summarize(&response),
        })
    }

    async fn send_custom_headers(&self) -> Result<HeaderReport, DemoError> {
        let response = Request::get("/")
            .header("X-Test", "Normal-Header")
            .header("X-Custom", "Safe-Value-123")
            .build()?
            .send()
            .await?;

        Ok(HeaderReport {
            response: summarize(&response),
        })
    }
}

fn summarize(response: &Response) -> ResponseSummary {
    ResponseSummary {
        status: response.status(),
        status_text: response.status_text(),
        ok: response.ok(),
    }
}

/// Same normalization `fetch` applies: the six common verbs are matched
/// case-insensitively and upper-cased, any other token is sent as given.
pub fn parse_method(method: &str) -> Result<Method, DemoError> {
    let normalized = match method.to_ascii_uppercase().as_str() {
        upper @ ("DELETE" | "GET" | "HEAD" | "OPTIONS" | "POST" | "PUT") => upper.to_string(),
        _ => method.to_string(),
    };

    Method::from_bytes(normalized.as_bytes())
        .map_err(|_| DemoError::InvalidMethod(method.to_string()))
}

pub fn large_payload(config: &DemoConfig) -> String {
    std::iter::repeat(config.large_payload_fill)
        .take(config.large_payload_len)
        .collect()
}

/// Publishes the runners as the globals the page's buttons call, e.g.
/// `onclick="testMethod('GET')"`. Each returns a promise that settles once the
/// result is rendered.
pub fn install_globals(window: &Window, panel: DemoPanel) -> Result<(), BindError> {
    let panel = Rc::new(panel);

    let test_method = {
        let panel = panel.clone();
        Closure::<dyn Fn(String) -> Promise>::new(move |method: String| {
            let panel = panel.clone();
            future_to_promise(async move {
                panel.test_method(&method).await;
                Ok(JsValue::UNDEFINED)
            })
        })
    };
    publish(window, "testMethod", test_method.into_js_value())?;

    publish(
        window,
        "testConcurrency",
        runner(&panel, |panel| async move { panel.test_concurrency().await }),
    )?;
    publish(
        window,
        "testLargeFile",
        runner(&panel, |panel| async move { panel.test_large_file().await }),
    )?;
    publish(
        window,
        "testSecurity",
        runner(&panel, |panel| async move { panel.test_security().await }),
    )?;
    publish(
        window,
        "testHeaders",
        runner(&panel, |panel| async move { panel.test_headers().await }),
    )?;

    Ok(())
}

fn runner<F, Fut>(panel: &Rc<DemoPanel>, demo: F) -> JsValue
where
    F: Fn(Rc<DemoPanel>) -> Fut + 'static,
    Fut: std::future::Future<Output = ()> + 'static,
{
    let panel = panel.clone();
    Closure::<dyn Fn() -> Promise>::new(move || {
        let run = demo(panel.clone());
        future_to_promise(async move {
            run.await;
            Ok(JsValue::UNDEFINED)
        })
    })
    .into_js_value()
}

fn publish(window: &Window, name: &'static str, function: JsValue) -> Result<(), BindError> {
    match Reflect::set(window, &JsValue::from_str(name), &function) {
        Ok(true) => Ok(()),
        _ => Err(BindError::Global(name)),
    }
}

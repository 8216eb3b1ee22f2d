//! Shared fakes for the behavior tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use indexwatch_core::{
    HttpClient, HttpError, HttpRequest, HttpResponse, IndexFetcher, IndexId, WatchlistConfig,
};

pub const BASE_URL: &str = "https://archive.test/content/indices";

pub const NIFTY50_CSV: &str = "\
Company Name,Industry,Symbol,Series,ISIN Code
HDFC Bank Ltd.,Financial Services,HDFCBANK,EQ,INE040A01034
Infosys Ltd.,Information Technology,INFY,EQ,INE009A01021
Tata Consultancy Services Ltd.,Information Technology,TCS,EQ,INE467B01029
";

pub const NEXT50_CSV: &str = "\
Company Name,Industry,Symbol,Series,ISIN Code
Avenue Supermarts Ltd.,Consumer Services,DMART,EQ,INE192R01011
Bajaj Auto Ltd.,Automobile and Auto Components,BAJAJ-AUTO,EQ,INE917I01010
";

pub const NIFTY500_CSV: &str = "\
Company Name,Industry,Symbol,Series,ISIN Code
Avenue Supermarts Ltd.,Consumer Services,DMART,EQ,INE192R01011
HDFC Bank Ltd.,Financial Services,HDFCBANK,EQ,INE040A01034
Infosys Ltd.,Information Technology,INFY,EQ,INE009A01021
Mahindra & Mahindra Ltd.,Automobile and Auto Components,M&M,EQ,INE101A01026
Tata Consultancy Services Ltd.,Information Technology,TCS,EQ,INE467B01029
";

pub const SMALLCAP50_CSV: &str = "\
Company Name,Industry,Symbol,Series,ISIN Code
Angel One Ltd.,Financial Services,ANGELONE,EQ,INE732I01013
";

pub const MIDCAP50_CSV: &str = "\
Company Name,Industry,Symbol,Series,ISIN Code
Cummins India Ltd.,Capital Goods,CUMMINSIND,EQ,INE298A01020
,,,,
";

/// Serves canned csv bodies keyed by index and records every request.
#[derive(Debug, Default)]
pub struct FakeArchive {
    responses: Mutex<HashMap<String, Result<HttpResponse, HttpError>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl FakeArchive {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Archive serving every known index.
    pub fn full() -> Arc<Self> {
        let archive = Self::new();
        archive.serve(IndexId::Nifty500, NIFTY500_CSV);
        archive.serve(IndexId::Nifty50, NIFTY50_CSV);
        archive.serve(IndexId::NiftyNext50, NEXT50_CSV);
        archive.serve(IndexId::NiftySmallcap50, SMALLCAP50_CSV);
        archive.serve(IndexId::NiftyMidcap50, MIDCAP50_CSV);
        archive
    }

    pub fn serve(&self, index: IndexId, body: &str) {
        self.respond(index, Ok(HttpResponse::ok(body)));
    }

    pub fn fail_with_status(&self, index: IndexId, status: u16) {
        self.respond(index, Ok(HttpResponse::new(status, "<html>Not Found</html>")));
    }

    pub fn fail_transport(&self, index: IndexId) {
        self.respond(index, Err(HttpError::new("connection reset by peer")));
    }

    fn respond(&self, index: IndexId, response: Result<HttpResponse, HttpError>) {
        self.responses
            .lock()
            .expect("response table should not be poisoned")
            .insert(url_for(index), response);
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests
            .lock()
            .expect("request log should not be poisoned")
            .clone()
    }

    pub fn requested_urls(&self) -> Vec<String> {
        self.requests().into_iter().map(|request| request.url).collect()
    }

    pub fn clear_requests(&self) {
        self.requests
            .lock()
            .expect("request log should not be poisoned")
            .clear();
    }
}

impl HttpClient for FakeArchive {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
        let response = self
            .responses
            .lock()
            .expect("response table should not be poisoned")
            .get(&request.url)
            .cloned()
            .unwrap_or_else(|| Ok(HttpResponse::new(404, "")));
        self.requests
            .lock()
            .expect("request log should not be poisoned")
            .push(request);
        Box::pin(async move { response })
    }
}

pub fn url_for(index: IndexId) -> String {
    format!("{BASE_URL}/{}.csv", index.as_str())
}

pub fn config(home: &std::path::Path) -> WatchlistConfig {
    WatchlistConfig::resolve(
        Some(home.to_path_buf()),
        Some(String::from(BASE_URL)),
        None,
    )
}

pub fn fetcher(archive: &Arc<FakeArchive>, home: &std::path::Path) -> IndexFetcher {
    IndexFetcher::new(archive.clone(), &config(home))
}

use crate::search_index::VALID_SEARCH_INDEXES;
use crate::signer::UrlSigner;
use crate::transform;
use crate::xml::Document;
use crate::{Credential, Locale};
use bytes::Bytes;
use log::{debug, warn};
use paapi_core::{Context, Error, Result};
use serde_json::Value;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

/// Result of a search or lookup call.
#[derive(Debug, Clone)]
pub enum Response {
    /// The parsed document itself, attributes preserved.
    Document(Document),
    /// Recursively flattened mapping/sequence tree, attributes dropped.
    Flattened(Value),
}

/// High level client for the product data API.
///
/// Calls are independent and may run concurrently from a shared instance;
/// the only shared mutable state is the error log and the transform flag.
/// Failures are recorded in the error log and surfaced as `None` rather
/// than raised, so callers check the return value and poll [`Client::errors`]
/// for the reason.
#[derive(Debug)]
pub struct Client {
    ctx: Context,
    signer: UrlSigner,
    retrieve_array: AtomicBool,
    errors: Mutex<Vec<String>>,
}

impl Client {
    /// Create a new client.
    ///
    /// Fails with `ConfigInvalid` when any credential field is empty.
    pub fn new(ctx: Context, credential: Credential, locale: Locale) -> Result<Self> {
        Ok(Self {
            ctx,
            signer: UrlSigner::new(credential, locale)?,
            retrieve_array: AtomicBool::new(false),
            errors: Mutex::new(Vec::new()),
        })
    }

    /// Switch future calls between [`Response::Document`] and
    /// [`Response::Flattened`].
    pub fn set_retrieve_as_array(&self, retrieve: bool) {
        self.retrieve_array.store(retrieve, Ordering::Relaxed);
    }

    /// Search index names accepted by [`Client::item_search`]. No network
    /// call involved.
    pub fn valid_search_names(&self) -> &'static [&'static str] {
        VALID_SEARCH_INDEXES
    }

    /// Snapshot of accumulated failure descriptions, oldest first.
    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().expect("lock poisoned").clone()
    }

    /// Search for items by keyword.
    ///
    /// `search_index` defaults to `All`; `condition` defaults to `New`.
    /// The service only honors `Sort` inside a concrete search index, so it
    /// is dropped when `search_index` is the literal `"All"`.
    pub async fn item_search(
        &self,
        keywords: &str,
        search_index: Option<&str>,
        sort_by: Option<&str>,
        condition: Option<&str>,
    ) -> Option<Response> {
        let sort = sort_by.filter(|_| search_index != Some("All"));
        let params = [
            ("Operation", Some("ItemSearch")),
            ("ResponseGroup", Some("ItemAttributes,Offers,Images")),
            ("Keywords", Some(keywords)),
            ("Condition", Some(condition.unwrap_or("New"))),
            ("SearchIndex", Some(search_index.unwrap_or("All"))),
            ("Sort", sort),
        ];

        self.request(&params).await
    }

    /// Look up one or more items by identifier.
    ///
    /// Identifiers are joined with commas into a single request. Set
    /// `only_from_amazon` to exclude third party merchants.
    pub async fn item_lookup<I, S>(&self, item_ids: I, only_from_amazon: bool) -> Option<Response>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let ids = item_ids
            .into_iter()
            .map(|id| id.as_ref().to_string())
            .collect::<Vec<_>>()
            .join(",");
        let merchant = if only_from_amazon { "Amazon" } else { "All" };
        let params = [
            ("Operation", Some("ItemLookup")),
            (
                "ResponseGroup",
                Some("ItemAttributes,Offers,Reviews,Images,EditorialReview"),
            ),
            ("ReviewSort", Some("-OverallRating")),
            ("ItemId", Some(ids.as_str())),
            ("MerchantId", Some(merchant)),
        ];

        self.request(&params).await
    }

    async fn request(&self, params: &[(&str, Option<&str>)]) -> Option<Response> {
        match self.fetch_document(params).await {
            Ok(doc) => Some(if self.retrieve_array.load(Ordering::Relaxed) {
                Response::Flattened(transform::flatten(&doc))
            } else {
                Response::Document(doc)
            }),
            Err(err) => {
                warn!("request failed: {err}");
                self.errors.lock().expect("lock poisoned").push(err.to_string());
                None
            }
        }
    }

    async fn fetch_document(&self, params: &[(&str, Option<&str>)]) -> Result<Document> {
        let url = self.signer.generate(params)?;
        debug!("sending request to {url}");

        let req = http::Request::get(url.as_str()).body(Bytes::new())?;
        let resp = self
            .ctx
            .http_send(req)
            .await
            .map_err(|e| Error::unexpected(format!("error downloading data: {url}: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::unexpected(format!(
                "error downloading data: {url}: status {status}"
            )));
        }

        let body = String::from_utf8(resp.into_body().to_vec())?;
        Document::parse(&body)
    }
}

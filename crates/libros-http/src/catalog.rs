//! Catalog queries and mutations over the authenticated client.

use std::fmt;
use std::str::FromStr;

use tracing::{debug, info, instrument, warn};
use url::Url;

use libros_core::error::{ApiError, InvalidInputError};
use libros_core::forms::{
    self, QUERY_AUTHOR_REQUIRED, QUERY_FORMAT_REQUIRED, QUERY_ISBN_REQUIRED,
};
use libros_core::{
    BookUpdate, CatalogOptions, ClientConfig, DeleteBooks, DeleteForm, InsertForm, Isbn, NewBook,
    OperationOutcome, Result, UpdateForm, xml,
};

use crate::fetch::{ApiRequest, AuthenticatedClient};
use crate::http::transport;

pub const LOADED_STATUS: &str = "Datos cargados y transformados correctamente";
pub const EMPTY_STATUS: &str = "No se encontró ningún dato para cargar";
pub const FAILED_STATUS: &str = "Error al cargar datos";

/// What a catalog query produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogResult {
    /// At least one `<book>`; `xml` is the response document.
    Loaded { count: usize, xml: String },
    /// A successful response without books.
    Empty,
    /// Non-success status, with the `<message>` text or `Error <status>`.
    Failed { status: u16, message: String },
}

impl CatalogResult {
    /// The status line shown above the result.
    pub fn status_line(&self) -> &str {
        match self {
            CatalogResult::Loaded { .. } => LOADED_STATUS,
            CatalogResult::Empty => EMPTY_STATUS,
            CatalogResult::Failed { .. } => FAILED_STATUS,
        }
    }

    /// `Total de libros: N` for loaded results.
    pub fn total_line(&self) -> Option<String> {
        match self {
            CatalogResult::Loaded { count, .. } => Some(format!("Total de libros: {count}")),
            _ => None,
        }
    }

    /// Render the document for `view`. `None` unless loaded.
    pub fn render(&self, view: ResultView) -> Option<Result<String>> {
        match self {
            CatalogResult::Loaded { xml, .. } => Some(view.render(xml)),
            _ => None,
        }
    }
}

/// How a loaded document is shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResultView {
    /// Re-indented text.
    #[default]
    Formatted,
    /// The document as received.
    Raw,
}

impl ResultView {
    pub fn toggle(self) -> Self {
        match self {
            ResultView::Formatted => ResultView::Raw,
            ResultView::Raw => ResultView::Formatted,
        }
    }

    pub fn render(self, document: &str) -> Result<String> {
        match self {
            ResultView::Formatted => xml::format_xml(document),
            ResultView::Raw => Ok(document.to_string()),
        }
    }
}

impl fmt::Display for ResultView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResultView::Formatted => write!(f, "formatted"),
            ResultView::Raw => write!(f, "raw"),
        }
    }
}

impl FromStr for ResultView {
    type Err = libros_core::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "formatted" | "text" => Ok(ResultView::Formatted),
            "raw" | "frame" => Ok(ResultView::Raw),
            other => Err(InvalidInputError::form(format!(
                "unknown view '{other}', expected formatted or raw"
            ))
            .into()),
        }
    }
}

/// Result of submitting the insert form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertOutcome {
    pub outcome: OperationOutcome,
    /// Reloaded options after a successful insert.
    pub options: Option<CatalogOptions>,
}

/// Client for the catalog service.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    config: ClientConfig,
    fetch: AuthenticatedClient,
}

impl CatalogClient {
    pub fn new(config: ClientConfig, fetch: AuthenticatedClient) -> Self {
        Self { config, fetch }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn fetch(&self) -> &AuthenticatedClient {
        &self.fetch
    }

    /// Every book in the catalog.
    #[instrument(skip(self))]
    pub async fn list_all(&self) -> Result<CatalogResult> {
        self.query(self.config.books_url()?).await
    }

    /// Books with the given ISBN. Blank input never reaches the wire.
    #[instrument(skip(self))]
    pub async fn by_isbn(&self, isbn: &str) -> Result<CatalogResult> {
        let isbn = Isbn::new(forms::require(isbn, QUERY_ISBN_REQUIRED)?)?;
        self.query(self.config.isbn_url(&isbn)?).await
    }

    #[instrument(skip(self))]
    pub async fn by_author(&self, author: &str) -> Result<CatalogResult> {
        let author = forms::require(author, QUERY_AUTHOR_REQUIRED)?;
        self.query(self.config.author_url(author)?).await
    }

    #[instrument(skip(self))]
    pub async fn by_format(&self, format: &str) -> Result<CatalogResult> {
        let format = forms::require(format, QUERY_FORMAT_REQUIRED)?;
        self.query(self.config.format_url(format)?).await
    }

    /// Author and format choices from the full listing.
    ///
    /// # Errors
    ///
    /// A non-success status is an [`ApiError`] carrying the `<message>` text.
    #[instrument(skip(self))]
    pub async fn load_options(&self) -> Result<CatalogOptions> {
        let (status, body) = self.send(&ApiRequest::get(self.config.books_url()?)).await?;
        if !is_success(status) {
            warn!(status, "Could not load catalog options");
            return Err(ApiError::new(status, xml::message(&body)).into());
        }

        let options = xml::catalog_options(&body)?;
        debug!(
            authors = options.authors.len(),
            formats = options.formats.len(),
            "Catalog options loaded"
        );
        Ok(options)
    }

    #[instrument(skip(self, book), fields(isbn = %book.isbn))]
    pub async fn insert(&self, book: &NewBook) -> Result<OperationOutcome> {
        let request = ApiRequest::post(self.config.insert_url()?).json(book)?;
        self.mutate(&request).await
    }

    #[instrument(skip(self, update))]
    pub async fn update(&self, isbn: &Isbn, update: &BookUpdate) -> Result<OperationOutcome> {
        let request = ApiRequest::put(self.config.update_url(isbn)?).json(update)?;
        self.mutate(&request).await
    }

    #[instrument(skip(self, request), fields(count = request.isbns.len()))]
    pub async fn delete(&self, request: &DeleteBooks) -> Result<OperationOutcome> {
        let request = ApiRequest::delete(self.config.delete_url()?).json(request)?;
        self.mutate(&request).await
    }

    /// Validate and send the insert form.
    ///
    /// On success the form is cleared and the options are reloaded. An
    /// options reload failure is logged and leaves `options` empty.
    pub async fn submit_insert(&self, form: &mut InsertForm) -> Result<InsertOutcome> {
        let book = form.validate()?;
        let outcome = self.insert(&book).await?;
        if !outcome.is_success() {
            return Ok(InsertOutcome {
                outcome,
                options: None,
            });
        }

        form.clear();
        let options = match self.load_options().await {
            Ok(options) => Some(options),
            Err(e) => {
                warn!(error = %e, "Could not reload options after insert");
                None
            }
        };
        Ok(InsertOutcome { outcome, options })
    }

    pub async fn submit_update(&self, form: &UpdateForm) -> Result<OperationOutcome> {
        let (isbn, update) = form.validate()?;
        self.update(&isbn, &update).await
    }

    /// Validate and send the delete form, clearing it on success.
    pub async fn submit_delete(&self, form: &mut DeleteForm) -> Result<OperationOutcome> {
        let request = form.validate()?;
        let outcome = self.delete(&request).await?;
        if outcome.is_success() {
            form.clear();
        }
        Ok(outcome)
    }

    async fn query(&self, url: Url) -> Result<CatalogResult> {
        let (status, body) = self.send(&ApiRequest::get(url)).await?;
        if !is_success(status) {
            let message = ApiError::new(status, xml::message(&body)).display_message();
            info!(status, %message, "Catalog query failed");
            return Ok(CatalogResult::Failed { status, message });
        }

        let count = xml::count_books(&body)?;
        debug!(count, "Catalog query answered");
        if count == 0 {
            Ok(CatalogResult::Empty)
        } else {
            Ok(CatalogResult::Loaded { count, xml: body })
        }
    }

    async fn mutate(&self, request: &ApiRequest) -> Result<OperationOutcome> {
        let (status, body) = self.send(request).await?;
        let outcome = OperationOutcome::from_response(status, &body);
        info!(status, message = %outcome.message, "Catalog mutation answered");
        Ok(outcome)
    }

    async fn send(&self, request: &ApiRequest) -> Result<(u16, String)> {
        let response = self.fetch.execute(request).await?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(transport)?;
        Ok((status, body))
    }
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

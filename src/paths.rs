//! Path templates for the static content API.
//!
//! Every content kind is addressed on three levels:
//!
//! | level   | translation                         | commentary                      | dataset                         |
//! |---------|-------------------------------------|---------------------------------|---------------------------------|
//! | listing | `/api/available-translations.json`  | `/api/available-commentaries.json` | `/api/available-datasets.json` |
//! | books   | `/api/{id}/books.json`              | `/api/c/{id}/books.json`        | `/api/d/{id}/books.json`        |
//! | chapter | `/api/{id}/{book}/{chapter}.json`   | `/api/c/{id}/{book}/{chapter}.json` | `/api/d/{id}/{book}/{chapter}.json` |
//!
//! Listing paths can be overridden by the configuration document; the books
//! and chapter templates are fixed per kind.

use crate::api_config::ConfigDocument;
use crate::mount::MountPrefix;

pub const DEFAULT_API_BASE: &str = "/api";

/// The three categories of static Bible content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    Translation,
    Commentary,
    Dataset,
}

impl ContentKind {
    pub const ALL: [ContentKind; 3] = [
        ContentKind::Translation,
        ContentKind::Commentary,
        ContentKind::Dataset,
    ];

    /// Key of this kind under `endpoints` in the configuration document.
    pub fn endpoint_key(self) -> &'static str {
        match self {
            ContentKind::Translation => "translations",
            ContentKind::Commentary => "commentaries",
            ContentKind::Dataset => "datasets",
        }
    }

    /// Fixed root of the books and chapter templates.
    pub fn root(self) -> &'static str {
        match self {
            ContentKind::Translation => "/api",
            ContentKind::Commentary => "/api/c",
            ContentKind::Dataset => "/api/d",
        }
    }

    pub fn default_listing(self) -> &'static str {
        match self {
            ContentKind::Translation => "/api/available-translations.json",
            ContentKind::Commentary => "/api/available-commentaries.json",
            ContentKind::Dataset => "/api/available-datasets.json",
        }
    }

    /// Name of the identifier parameter in path templates.
    pub fn param_name(self) -> &'static str {
        match self {
            ContentKind::Translation => "translation",
            ContentKind::Commentary => "commentary",
            ContentKind::Dataset => "dataset",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ContentKind::Translation => "Translations",
            ContentKind::Commentary => "Commentaries",
            ContentKind::Dataset => "Datasets",
        }
    }

    pub fn example_identifier(self) -> &'static str {
        match self {
            ContentKind::Translation => "BSB",
            ContentKind::Commentary => "tyndale",
            ContentKind::Dataset => "crossref",
        }
    }

    fn index(self) -> usize {
        match self {
            ContentKind::Translation => 0,
            ContentKind::Commentary => 1,
            ContentKind::Dataset => 2,
        }
    }
}

impl std::fmt::Display for ContentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.param_name())
    }
}

/// Addressing level within a content kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathLevel {
    Listing,
    Books,
    Chapter,
}

/// Which argument of a path request was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Argument {
    Identifier,
    Book,
    Chapter,
}

impl std::fmt::Display for Argument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Argument::Identifier => f.write_str("identifier"),
            Argument::Book => f.write_str("book"),
            Argument::Chapter => f.write_str("chapter"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidIdentifier {
    pub argument: Argument,
    pub reason: String,
}

impl InvalidIdentifier {
    fn new(argument: Argument, reason: impl Into<String>) -> Self {
        Self {
            argument,
            reason: reason.into(),
        }
    }
}

impl std::fmt::Display for InvalidIdentifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid {}: {}", self.argument, self.reason)
    }
}

impl std::error::Error for InvalidIdentifier {}

fn validate_token(argument: Argument, value: &str) -> Result<(), InvalidIdentifier> {
    if value.is_empty() {
        return Err(InvalidIdentifier::new(argument, "must not be empty"));
    }
    if value.contains('/') {
        return Err(InvalidIdentifier::new(
            argument,
            format!("must not contain '/', got '{}'", value),
        ));
    }
    if value.chars().any(char::is_whitespace) {
        return Err(InvalidIdentifier::new(
            argument,
            format!("must not contain whitespace, got '{}'", value),
        ));
    }
    Ok(())
}

fn validate_chapter(chapter: i64) -> Result<(), InvalidIdentifier> {
    if chapter < 1 {
        return Err(InvalidIdentifier::new(
            Argument::Chapter,
            format!("must be a positive integer, got {}", chapter),
        ));
    }
    Ok(())
}

/// Parse a chapter segment such as `"12"`.
///
/// Only the canonical decimal spelling is accepted: `+1` and `01` name other
/// files than `1` and are rejected rather than rewritten.
pub fn parse_chapter(raw: &str) -> Result<i64, InvalidIdentifier> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InvalidIdentifier::new(
            Argument::Chapter,
            format!("must be a positive integer, got '{}'", raw),
        ));
    }
    if raw.len() > 1 && raw.starts_with('0') {
        return Err(InvalidIdentifier::new(
            Argument::Chapter,
            format!("must not have leading zeros, got '{}'", raw),
        ));
    }
    let chapter = raw.parse::<i64>().map_err(|_| {
        InvalidIdentifier::new(
            Argument::Chapter,
            format!("is out of range, got '{}'", raw),
        )
    })?;
    validate_chapter(chapter)?;
    Ok(chapter)
}

/// One documented route with a worked example, for human-facing pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvertisedEndpoint {
    pub kind: ContentKind,
    pub level: PathLevel,
    pub template: String,
    pub example: String,
    pub summary: String,
}

/// Canonical path resolution for all content kinds, plus the mount prefix
/// used when links to this service are advertised.
#[derive(Debug, Clone)]
pub struct RouteDescriptor {
    listings: [String; 3],
    prefix: MountPrefix,
}

impl RouteDescriptor {
    pub fn new(document: &ConfigDocument, prefix: MountPrefix) -> Self {
        let listings = ContentKind::ALL.map(|kind| {
            document
                .endpoint(kind)
                .unwrap_or_else(|| kind.default_listing())
                .to_string()
        });

        Self { listings, prefix }
    }

    pub fn prefix(&self) -> &MountPrefix {
        &self.prefix
    }

    /// Absolute link to a page of this service, including the mount prefix.
    pub fn advertise(&self, path: &str) -> String {
        self.prefix.advertise(path)
    }

    pub fn listing_path(&self, kind: ContentKind) -> &str {
        &self.listings[kind.index()]
    }

    pub fn books_template(kind: ContentKind) -> String {
        format!("{}/{{{}}}/books.json", kind.root(), kind.param_name())
    }

    pub fn chapter_template(kind: ContentKind) -> String {
        format!(
            "{}/{{{}}}/{{book}}/{{chapter}}.json",
            kind.root(),
            kind.param_name()
        )
    }

    /// Canonical path of a listing, a book list or a chapter.
    ///
    /// * no book, no chapter: the kind's listing path
    /// * book, no chapter: `{root}/{identifier}/books.json`
    /// * book and chapter: `{root}/{identifier}/{book}/{chapter}.json`
    ///
    /// All arguments are checked before a path is built.
    pub fn canonical_path(
        &self,
        kind: ContentKind,
        identifier: &str,
        book: Option<&str>,
        chapter: Option<i64>,
    ) -> Result<String, InvalidIdentifier> {
        validate_token(Argument::Identifier, identifier)?;
        if let Some(book) = book {
            validate_token(Argument::Book, book)?;
        }
        if let Some(chapter) = chapter {
            validate_chapter(chapter)?;
        }

        match (book, chapter) {
            (None, None) => Ok(self.listing_path(kind).to_string()),
            (Some(_), None) => Ok(books_path(kind, identifier)),
            (Some(book), Some(chapter)) => Ok(chapter_path(kind, identifier, book, chapter)),
            (None, Some(_)) => Err(InvalidIdentifier::new(
                Argument::Book,
                "is required when a chapter is given",
            )),
        }
    }

    /// Match a request path against the content templates.
    ///
    /// Returns the canonical path when the request addresses a listing, book
    /// list or chapter, `None` when it matches no template, and an error when
    /// it matches a template with an invalid identifier, book or chapter.
    pub fn match_request(&self, path: &str) -> Result<Option<String>, InvalidIdentifier> {
        for kind in ContentKind::ALL {
            if path == self.listing_path(kind) || path == kind.default_listing() {
                return Ok(Some(self.listing_path(kind).to_string()));
            }
        }

        let Some(rest) = path.strip_prefix("/api/") else {
            return Ok(None);
        };
        let segments: Vec<&str> = rest.split('/').collect();

        let nested = match segments.first() {
            Some(&"c") => Some(ContentKind::Commentary),
            Some(&"d") => Some(ContentKind::Dataset),
            _ => None,
        };
        if let Some(kind) = nested {
            if let Some(matched) = self.match_segments(kind, &segments[1..])? {
                return Ok(Some(matched));
            }
        }

        self.match_segments(ContentKind::Translation, &segments)
    }

    fn match_segments(
        &self,
        kind: ContentKind,
        segments: &[&str],
    ) -> Result<Option<String>, InvalidIdentifier> {
        match segments {
            [identifier, "books.json"] => {
                validate_token(Argument::Identifier, identifier)?;
                Ok(Some(books_path(kind, identifier)))
            }
            [identifier, book, last] => {
                let Some(raw_chapter) = last.strip_suffix(".json") else {
                    return Ok(None);
                };
                let chapter = parse_chapter(raw_chapter)?;
                self.canonical_path(kind, identifier, Some(*book), Some(chapter))
                    .map(Some)
            }
            _ => Ok(None),
        }
    }

    /// One example per (kind, level), in kind order then level order.
    pub fn advertised_endpoints(&self) -> Vec<AdvertisedEndpoint> {
        let mut endpoints = Vec::with_capacity(ContentKind::ALL.len() * 3);

        for kind in ContentKind::ALL {
            let id = kind.example_identifier();
            let (list_summary, books_summary, chapter_summary) = match kind {
                ContentKind::Translation => (
                    "List all available translations",
                    "List books in a translation",
                    "Get a chapter",
                ),
                ContentKind::Commentary => (
                    "List all available commentaries",
                    "List books in a commentary",
                    "Get a commentary chapter",
                ),
                ContentKind::Dataset => (
                    "List all available datasets",
                    "List books in a dataset",
                    "Get a dataset chapter",
                ),
            };

            endpoints.push(AdvertisedEndpoint {
                kind,
                level: PathLevel::Listing,
                template: self.listing_path(kind).to_string(),
                example: self.listing_path(kind).to_string(),
                summary: list_summary.to_string(),
            });
            endpoints.push(AdvertisedEndpoint {
                kind,
                level: PathLevel::Books,
                template: Self::books_template(kind),
                example: books_path(kind, id),
                summary: books_summary.to_string(),
            });
            endpoints.push(AdvertisedEndpoint {
                kind,
                level: PathLevel::Chapter,
                template: Self::chapter_template(kind),
                example: chapter_path(kind, id, EXAMPLE_BOOK, EXAMPLE_CHAPTER),
                summary: chapter_summary.to_string(),
            });
        }

        endpoints
    }
}

const EXAMPLE_BOOK: &str = "GEN";
const EXAMPLE_CHAPTER: i64 = 1;

fn books_path(kind: ContentKind, identifier: &str) -> String {
    format!("{}/{}/books.json", kind.root(), identifier)
}

fn chapter_path(kind: ContentKind, identifier: &str, book: &str, chapter: i64) -> String {
    format!("{}/{}/{}/{}.json", kind.root(), identifier, book, chapter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn descriptor() -> RouteDescriptor {
        RouteDescriptor::new(&ConfigDocument::default_document(), MountPrefix::default())
    }

    #[test]
    fn test_chapter_paths_per_kind() {
        let routes = descriptor();

        assert_eq!(
            routes.canonical_path(ContentKind::Translation, "BSB", Some("GEN"), Some(1)).unwrap(),
            "/api/BSB/GEN/1.json"
        );
        assert_eq!(
            routes.canonical_path(ContentKind::Commentary, "tyndale", Some("GEN"), Some(1)).unwrap(),
            "/api/c/tyndale/GEN/1.json"
        );
        assert_eq!(
            routes.canonical_path(ContentKind::Dataset, "crossref", Some("GEN"), Some(1)).unwrap(),
            "/api/d/crossref/GEN/1.json"
        );
    }

    #[test]
    fn test_listing_and_books_paths() {
        let routes = descriptor();

        assert_eq!(
            routes.canonical_path(ContentKind::Commentary, "tyndale", None, None).unwrap(),
            "/api/available-commentaries.json"
        );
        assert_eq!(
            routes.canonical_path(ContentKind::Dataset, "crossref", Some("GEN"), None).unwrap(),
            "/api/d/crossref/books.json"
        );
    }

    #[test]
    fn test_non_positive_chapter_is_rejected() {
        let routes = descriptor();

        for chapter in [0, -1] {
            let err = routes
                .canonical_path(ContentKind::Translation, "BSB", Some("GEN"), Some(chapter))
                .unwrap_err();
            assert_eq!(err.argument, Argument::Chapter);
            assert!(err.to_string().contains("positive integer"));
        }
    }

    #[test]
    fn test_empty_tokens_are_rejected() {
        let routes = descriptor();

        let err = routes
            .canonical_path(ContentKind::Translation, "", Some("GEN"), Some(1))
            .unwrap_err();
        assert_eq!(err.argument, Argument::Identifier);

        let err = routes
            .canonical_path(ContentKind::Translation, "BSB", Some(""), Some(1))
            .unwrap_err();
        assert_eq!(err.argument, Argument::Book);

        let err = routes
            .canonical_path(ContentKind::Translation, "BSB", Some("G/EN"), None)
            .unwrap_err();
        assert_eq!(err.argument, Argument::Book);
    }

    #[test]
    fn test_chapter_without_book_is_rejected() {
        let err = descriptor()
            .canonical_path(ContentKind::Dataset, "crossref", None, Some(3))
            .unwrap_err();

        assert_eq!(err.argument, Argument::Book);
    }

    #[test]
    fn test_levels_are_distinct_nested_and_deterministic() {
        let routes = descriptor();

        for kind in ContentKind::ALL {
            let derive = || {
                (
                    routes.canonical_path(kind, "ID", None, None).unwrap(),
                    routes.canonical_path(kind, "ID", Some("JHN"), None).unwrap(),
                    routes.canonical_path(kind, "ID", Some("JHN"), Some(3)).unwrap(),
                )
            };
            let (listing, books, chapter) = derive();

            assert_ne!(listing, books);
            assert_ne!(books, chapter);
            assert_ne!(listing, chapter);
            for path in [&listing, &books, &chapter] {
                assert!(path.starts_with("/api/"));
            }
            let collection = format!("{}/ID/", kind.root());
            assert!(books.starts_with(&collection));
            assert!(chapter.starts_with(&collection));
            assert_eq!(derive(), (listing, books, chapter));
        }
    }

    #[test]
    fn test_configured_listing_overrides_default() {
        let document = ConfigDocument::from_value(json!({
            "apiBase": "/api",
            "endpoints": {"translations": "/api/translations.json"}
        }))
        .unwrap();
        let routes = RouteDescriptor::new(&document, MountPrefix::default());

        assert_eq!(routes.listing_path(ContentKind::Translation), "/api/translations.json");
        assert_eq!(
            routes.listing_path(ContentKind::Commentary),
            "/api/available-commentaries.json"
        );
        assert_eq!(
            routes.canonical_path(ContentKind::Translation, "BSB", Some("GEN"), None).unwrap(),
            "/api/BSB/books.json"
        );
    }

    #[test]
    fn test_parse_chapter() {
        assert_eq!(parse_chapter("12"), Ok(12));
        assert_eq!(parse_chapter("0").unwrap_err().argument, Argument::Chapter);
        assert_eq!(parse_chapter("-1").unwrap_err().argument, Argument::Chapter);
        assert!(parse_chapter("1.5").unwrap_err().reason.contains("integer"));
        assert!(parse_chapter("one").is_err());
        assert!(parse_chapter("").is_err());
        for raw in ["01", "+1", "00"] {
            assert_eq!(
                parse_chapter(raw).unwrap_err().argument,
                Argument::Chapter,
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_match_request() {
        let routes = descriptor();

        assert_eq!(
            routes.match_request("/api/available-datasets.json").unwrap(),
            Some("/api/available-datasets.json".to_string())
        );
        assert_eq!(
            routes.match_request("/api/BSB/books.json").unwrap(),
            Some("/api/BSB/books.json".to_string())
        );
        assert_eq!(
            routes.match_request("/api/c/tyndale/GEN/1.json").unwrap(),
            Some("/api/c/tyndale/GEN/1.json".to_string())
        );
        assert_eq!(
            routes.match_request("/api/d/crossref/books.json").unwrap(),
            Some("/api/d/crossref/books.json".to_string())
        );
        // "c" as a translation id when the commentary layout does not fit
        assert_eq!(
            routes.match_request("/api/c/GEN/2.json").unwrap(),
            Some("/api/c/GEN/2.json".to_string())
        );
        assert_eq!(routes.match_request("/api/BSB/GEN/1.txt").unwrap(), None);
        assert_eq!(routes.match_request("/api/a/b/c/d.json").unwrap(), None);
        assert_eq!(routes.match_request("/other").unwrap(), None);

        let err = routes.match_request("/api/BSB/GEN/0.json").unwrap_err();
        assert_eq!(err.argument, Argument::Chapter);
        // non-canonical spellings name different files and are not rewritten
        for path in [
            "/api/BSB/GEN/01.json",
            "/api/BSB/GEN/+1.json",
            "/api/c/tyndale/GEN/007.json",
        ] {
            let err = routes.match_request(path).unwrap_err();
            assert_eq!(err.argument, Argument::Chapter, "{path}");
        }
        let err = routes.match_request("/api//books.json").unwrap_err();
        assert_eq!(err.argument, Argument::Identifier);
    }

    #[test]
    fn test_advertised_endpoints() {
        let endpoints = descriptor().advertised_endpoints();

        assert_eq!(endpoints.len(), 9);
        let examples: Vec<&str> = endpoints.iter().map(|e| e.example.as_str()).collect();
        assert!(examples.contains(&"/api/BSB/GEN/1.json"));
        assert!(examples.contains(&"/api/c/tyndale/books.json"));
        assert!(examples.contains(&"/api/d/crossref/GEN/1.json"));
        assert!(examples.contains(&"/api/available-translations.json"));

        let chapter = endpoints
            .iter()
            .find(|e| e.kind == ContentKind::Commentary && e.level == PathLevel::Chapter)
            .unwrap();
        assert_eq!(chapter.template, "/api/c/{commentary}/{book}/{chapter}.json");
    }
}

//! Remote catalog access: URLs, response parsing and the random pick.
//!
//! A random item takes two sequential GETs: the listing, then the detail
//! record of one uniformly chosen entry. Transport is abstracted behind
//! [`HttpGet`] so the same flow runs on browser `fetch` and on `reqwest`.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::CatalogConfig;
use crate::error::FetchError;
use crate::prng::Prng;

/// Minimal HTTP seam: GET a URL and hand back the body of a 2xx answer.
///
/// Implementations map non-2xx statuses to [`FetchError::Status`] and
/// network failures to [`FetchError::Transport`].
#[allow(async_fn_in_trait)]
pub trait HttpGet {
    async fn get_text(&self, url: &str) -> Result<String, FetchError>;
}

/// One row of the catalog listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

impl CatalogEntry {
    /// Key for the detail request: the numeric id at the end of the entry URL
    /// when there is one, else the name.
    pub fn identifier(&self) -> String {
        self.url
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .filter(|seg| !seg.is_empty() && seg.bytes().all(|b| b.is_ascii_digit()))
            .map(str::to_string)
            .unwrap_or_else(|| self.name.clone())
    }
}

/// A complete catalog record: always has both a name and an image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: u32,
    pub name: String,
    pub image_url: String,
}

impl CatalogItem {
    pub fn new(id: u32, name: impl Into<String>, image_url: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            image_url: image_url.into(),
        }
    }

    /// `"mr-mime"` -> `"Mr Mime"`.
    pub fn display_name(&self) -> String {
        self.name
            .split(['-', '_', ' '])
            .filter(|w| !w.is_empty())
            .map(|w| {
                let mut chars = w.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// URL builder for the configured catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogApi {
    base_url: String,
    list_limit: u32,
}

impl CatalogApi {
    pub fn new(base_url: &str, list_limit: u32) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            list_limit,
        }
    }

    pub fn list_url(&self) -> String {
        format!("{}/pokemon?limit={}", self.base_url, self.list_limit)
    }

    pub fn detail_url(&self, identifier: &str) -> String {
        format!("{}/pokemon/{}", self.base_url, identifier)
    }
}

impl From<&CatalogConfig> for CatalogApi {
    fn from(cfg: &CatalogConfig) -> Self {
        Self::new(&cfg.base_url, cfg.list_limit)
    }
}

#[derive(Deserialize)]
struct ListingBody {
    #[serde(default)]
    results: Vec<CatalogEntry>,
}

#[derive(Deserialize)]
struct DetailBody {
    id: u32,
    name: String,
    #[serde(default)]
    sprites: SpritesBody,
}

#[derive(Deserialize, Default)]
struct SpritesBody {
    #[serde(default)]
    front_default: Option<String>,
    #[serde(default)]
    other: Option<OtherSprites>,
}

#[derive(Deserialize, Default)]
struct OtherSprites {
    #[serde(rename = "official-artwork", default)]
    official_artwork: Option<ArtworkSprite>,
}

#[derive(Deserialize)]
struct ArtworkSprite {
    #[serde(default)]
    front_default: Option<String>,
}

/// Parse the listing body. `url` only feeds error messages.
pub fn parse_listing(url: &str, body: &str) -> Result<Vec<CatalogEntry>, FetchError> {
    let listing: ListingBody =
        serde_json::from_str(body).map_err(|e| FetchError::decode(url, e))?;
    Ok(listing.results)
}

/// Parse a detail record, preferring the default front sprite and falling
/// back to the official artwork.
pub fn parse_item(url: &str, body: &str) -> Result<CatalogItem, FetchError> {
    let detail: DetailBody = serde_json::from_str(body).map_err(|e| FetchError::decode(url, e))?;

    let artwork = detail
        .sprites
        .other
        .and_then(|o| o.official_artwork)
        .and_then(|a| a.front_default);
    let image_url = detail
        .sprites
        .front_default
        .or(artwork)
        .filter(|u| !u.trim().is_empty())
        .ok_or_else(|| FetchError::MissingImage {
            name: detail.name.clone(),
        })?;

    Ok(CatalogItem {
        id: detail.id,
        name: detail.name,
        image_url,
    })
}

/// Fetch the listing, pick one entry uniformly at random, fetch its record.
pub async fn fetch_random_item<H: HttpGet>(
    http: &H,
    api: &CatalogApi,
    rng: &mut Prng,
) -> Result<CatalogItem, FetchError> {
    let list_url = api.list_url();
    debug!(url = %list_url, "fetching catalog listing");
    let body = http.get_text(&list_url).await?;
    let entries = parse_listing(&list_url, &body)?;

    let index = rng
        .pick_index(entries.len())
        .ok_or(FetchError::EmptyCatalog)?;
    let entry = &entries[index];
    debug!(index, total = entries.len(), name = %entry.name, "picked catalog entry");

    let detail_url = api.detail_url(&entry.identifier());
    let body = http.get_text(&detail_url).await?;
    let item = parse_item(&detail_url, &body)?;
    info!(id = item.id, name = %item.name, "fetched catalog item");
    Ok(item)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct FakeHttp {
        routes: HashMap<String, Result<String, FetchError>>,
        calls: RefCell<Vec<String>>,
    }

    impl FakeHttp {
        fn route(mut self, url: &str, body: &str) -> Self {
            self.routes.insert(url.to_string(), Ok(body.to_string()));
            self
        }

        fn fail(mut self, url: &str, err: FetchError) -> Self {
            self.routes.insert(url.to_string(), Err(err));
            self
        }
    }

    impl HttpGet for FakeHttp {
        async fn get_text(&self, url: &str) -> Result<String, FetchError> {
            self.calls.borrow_mut().push(url.to_string());
            self.routes.get(url).cloned().unwrap_or(Err(FetchError::Status {
                url: url.to_string(),
                status: 404,
            }))
        }
    }

    const BASE: &str = "https://api.test/v2";

    fn single_entry_listing() -> &'static str {
        r#"{"count":1,"results":[{"name":"pikachu","url":"https://api.test/v2/pokemon/25/"}]}"#
    }

    fn pikachu_detail() -> &'static str {
        r#"{"id":25,"name":"pikachu","height":4,"sprites":{"front_default":"https://img.test/25.png","back_default":null}}"#
    }

    #[test]
    fn urls_follow_the_catalog_layout() {
        let api = CatalogApi::new("https://api.test/v2/", 1000);
        assert_eq!(api.list_url(), "https://api.test/v2/pokemon?limit=1000");
        assert_eq!(api.detail_url("25"), "https://api.test/v2/pokemon/25");
    }

    #[test]
    fn identifier_prefers_numeric_url_tail() {
        let e = CatalogEntry {
            name: "bulbasaur".into(),
            url: "https://api.test/v2/pokemon/1/".into(),
        };
        assert_eq!(e.identifier(), "1");

        let e = CatalogEntry {
            name: "bulbasaur".into(),
            url: String::new(),
        };
        assert_eq!(e.identifier(), "bulbasaur");
    }

    #[test]
    fn display_name_title_cases_words() {
        assert_eq!(CatalogItem::new(122, "mr-mime", "x").display_name(), "Mr Mime");
        assert_eq!(CatalogItem::new(25, "pikachu", "x").display_name(), "Pikachu");
    }

    #[test]
    fn detail_falls_back_to_official_artwork() {
        let body = r#"{"id":10001,"name":"deoxys-attack","sprites":{"front_default":null,
            "other":{"official-artwork":{"front_default":"https://img.test/art.png"}}}}"#;
        let item = parse_item("u", body).unwrap();
        assert_eq!(item.image_url, "https://img.test/art.png");
    }

    #[test]
    fn detail_without_any_image_is_rejected() {
        let body = r#"{"id":1,"name":"missingno","sprites":{"front_default":null}}"#;
        assert_eq!(
            parse_item("u", body),
            Err(FetchError::MissingImage {
                name: "missingno".into()
            })
        );
    }

    #[test]
    fn garbage_body_is_a_decode_error() {
        assert!(matches!(
            parse_listing("u", "<html>"),
            Err(FetchError::Decode { .. })
        ));
        assert!(matches!(parse_item("u", "{}"), Err(FetchError::Decode { .. })));
    }

    #[test]
    fn fetches_listing_then_detail() {
        let api = CatalogApi::new(BASE, 1000);
        let http = FakeHttp::default()
            .route(&api.list_url(), single_entry_listing())
            .route(&api.detail_url("25"), pikachu_detail());

        let mut rng = Prng::new(1);
        let item = pollster::block_on(fetch_random_item(&http, &api, &mut rng)).unwrap();

        assert_eq!(item, CatalogItem::new(25, "pikachu", "https://img.test/25.png"));
        assert_eq!(
            *http.calls.borrow(),
            vec![api.list_url(), api.detail_url("25")]
        );
    }

    #[test]
    fn empty_listing_stops_before_detail() {
        let api = CatalogApi::new(BASE, 10);
        let http = FakeHttp::default().route(&api.list_url(), r#"{"results":[]}"#);

        let mut rng = Prng::new(1);
        let res = pollster::block_on(fetch_random_item(&http, &api, &mut rng));
        assert_eq!(res, Err(FetchError::EmptyCatalog));
        assert_eq!(http.calls.borrow().len(), 1);
    }

    #[test]
    fn listing_failure_propagates() {
        let api = CatalogApi::new(BASE, 10);
        let http = FakeHttp::default().fail(&api.list_url(), FetchError::transport(BASE, "offline"));

        let mut rng = Prng::new(1);
        let res = pollster::block_on(fetch_random_item(&http, &api, &mut rng));
        assert!(matches!(res, Err(FetchError::Transport { .. })));
    }

    #[test]
    fn detail_404_propagates_as_status() {
        let api = CatalogApi::new(BASE, 10);
        let http = FakeHttp::default().route(&api.list_url(), single_entry_listing());

        let mut rng = Prng::new(1);
        let res = pollster::block_on(fetch_random_item(&http, &api, &mut rng));
        assert_eq!(
            res,
            Err(FetchError::Status {
                url: api.detail_url("25"),
                status: 404
            })
        );
    }

    #[test]
    fn random_pick_draws_from_the_whole_listing() {
        let api = CatalogApi::new(BASE, 3);
        let listing = r#"{"results":[
            {"name":"a","url":"https://api.test/v2/pokemon/1/"},
            {"name":"b","url":"https://api.test/v2/pokemon/2/"},
            {"name":"c","url":"https://api.test/v2/pokemon/3/"}]}"#;
        let mut http = FakeHttp::default().route(&api.list_url(), listing);
        for (id, name) in [(1, "a"), (2, "b"), (3, "c")] {
            let body = format!(
                r#"{{"id":{id},"name":"{name}","sprites":{{"front_default":"https://img.test/{id}.png"}}}}"#
            );
            http = http.route(&api.detail_url(&id.to_string()), &body);
        }

        let mut rng = Prng::new(99);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..60 {
            let item = pollster::block_on(fetch_random_item(&http, &api, &mut rng)).unwrap();
            seen.insert(item.id);
        }
        assert_eq!(seen.len(), 3);
    }
}

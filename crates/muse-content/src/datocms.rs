//! DatoCMS implementation of [`ContentSource`].
//!
//! Every call is a single GraphQL POST against the content delivery API. The
//! wire records mirror the CMS schema (camelCase, nested uploads and color
//! fields) and are mapped into the catalogue's own types before they leave
//! this module.

use crate::source::{CheckFitPage, ContentSource, DefaultFit, ProductFit};
use crate::{ContentFetchError, FetchClient};
use async_trait::async_trait;
use muse_catalog::prelude::{
    ContactTemplate, ModelShot, Product, ProductColor, ProductId, Review, ReviewId, SizeTag,
};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// Content delivery API endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://graphql.datocms.com/";

/// CMS environment queried when none is configured.
pub const DEFAULT_ENVIRONMENT: &str = "main";

/// Environment variables checked for the API token, in order.
const TOKEN_VARS: [&str; 3] = [
    "DATOCMS_API_TOKEN",
    "NEXT_DATOCMS_API_TOKEN",
    "NEXT_PUBLIC_DATOCMS_API_TOKEN",
];

const ENVIRONMENT_VARS: [&str; 2] = ["DATOCMS_ENVIRONMENT", "NEXT_DATOCMS_ENVIRONMENT"];

const PRODUCTS_QUERY: &str = r#"
query Products {
  allProducts {
    id
    productImage { image { url } }
    productName
    rating
    size
    price
    color { colorName color { hex } }
    slug
    soldNumber
  }
}"#;

const PRODUCT_QUERY: &str = r#"
query Product($slug: String!) {
  product(filter: { slug: { eq: $slug } }) {
    id
    productName
    price
    rating
    description { value }
    color { colorName color { hex } }
    size
    slug
    soldNumber
    productImage { image { url } }
  }
}"#;

const PRODUCT_FIT_QUERY: &str = r#"
query ProductFit($slug: String!) {
  product(filter: { slug: { eq: $slug } }) {
    productName
    slug
    productFit { id image { url } desc }
  }
}"#;

const REVIEWS_QUERY: &str = r#"
query Reviews {
  allReviews { id title stars review author }
}"#;

const CATALOGUE_PAGE_QUERY: &str = r#"
query CataloguePage {
  cataloguePage { title }
}"#;

const CHECK_FIT_PAGE_QUERY: &str = r#"
query CheckFitPage {
  checkFitPage { title button whatsappTop whatsappBottom phoneNumber }
}"#;

const DEFAULT_FIT_QUERY: &str = r#"
query DefaultFit {
  defaultfit {
    defaultProduct
    image1 { url } text1
    image2 { url } text2
    image3 { url } text3
    image4 { url } text4
    image5 { url } text5
  }
}"#;

/// Shots beyond this many are ignored on a product's fit page.
const MAX_FIT_SHOTS: usize = 5;

/// Connection settings for DatoCMS.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatoCmsConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Read-only API token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_token: Option<String>,
    #[serde(default = "default_environment")]
    pub environment: String,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_environment() -> String {
    DEFAULT_ENVIRONMENT.to_string()
}

impl Default for DatoCmsConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            api_token: None,
            environment: default_environment(),
        }
    }
}

impl DatoCmsConfig {
    /// Defaults overlaid with the token and environment from the process
    /// environment.
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// Replace the token and environment with values from the process
    /// environment, where set.
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(token) = first_env(&TOKEN_VARS) {
            self.api_token = Some(token);
        }
        if let Some(environment) = first_env(&ENVIRONMENT_VARS) {
            self.environment = environment;
        }
        self
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }

    /// The token, if one is set and non-blank.
    pub fn token(&self) -> Option<&str> {
        self.api_token
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }
}

fn first_env(names: &[&str]) -> Option<String> {
    names
        .iter()
        .filter_map(|name| std::env::var(name).ok())
        .find(|value| !value.trim().is_empty())
}

/// GraphQL client for the DatoCMS content delivery API.
#[derive(Clone)]
pub struct DatoCmsClient {
    http: FetchClient,
    config: DatoCmsConfig,
}

impl DatoCmsClient {
    /// Create a client. Fails with [`ContentFetchError::MissingToken`] when
    /// no token is configured.
    pub fn new(config: DatoCmsConfig) -> Result<Self, ContentFetchError> {
        Self::with_http(FetchClient::new(), config)
    }

    /// Create a client on top of an existing HTTP client.
    pub fn with_http(http: FetchClient, config: DatoCmsConfig) -> Result<Self, ContentFetchError> {
        if config.token().is_none() {
            tracing::error!("DatoCMS API token is not defined");
            return Err(ContentFetchError::MissingToken);
        }
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &DatoCmsConfig {
        &self.config
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        query: &'static str,
        variables: serde_json::Value,
    ) -> Result<T, ContentFetchError> {
        let token = self.config.token().ok_or(ContentFetchError::MissingToken)?;

        let response = self
            .http
            .post(self.config.endpoint.as_str())
            .bearer_auth(token)
            .header("X-Environment", self.config.environment.as_str())
            .header("Accept", "application/json")
            .json(&GraphQlRequest { query, variables })?
            .send()
            .await?
            .error_for_status()?;

        decode(&response.body)
    }
}

#[derive(Serialize)]
struct GraphQlRequest<'a> {
    query: &'a str,
    variables: serde_json::Value,
}

#[derive(Deserialize)]
struct GraphQlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Deserialize)]
struct GraphQlError {
    message: String,
}

/// Unwrap a GraphQL `{data, errors}` envelope.
pub(crate) fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, ContentFetchError> {
    let envelope: GraphQlResponse<T> = serde_json::from_slice(body)?;
    if !envelope.errors.is_empty() {
        let messages = envelope.errors.into_iter().map(|e| e.message).collect();
        return Err(ContentFetchError::GraphQl(messages));
    }
    envelope
        .data
        .ok_or_else(|| ContentFetchError::UnexpectedShape("response has no data".to_string()))
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Non-negative whole number from a CMS numeric field.
fn whole(value: Option<f64>) -> u64 {
    match value {
        Some(v) if v.is_finite() && v > 0.0 => v.round() as u64,
        _ => 0,
    }
}

#[derive(Deserialize)]
struct Upload {
    #[serde(default, deserialize_with = "null_as_default")]
    url: String,
}

#[derive(Deserialize)]
struct WireImage {
    image: Option<Upload>,
}

#[derive(Deserialize)]
struct WireHex {
    #[serde(default, deserialize_with = "null_as_default")]
    hex: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireColor {
    #[serde(default, deserialize_with = "null_as_default")]
    color_name: String,
    color: Option<WireHex>,
}

#[derive(Deserialize)]
struct WireStructuredText {
    value: serde_json::Value,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireProduct {
    id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    product_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    slug: String,
    #[serde(default)]
    price: Option<f64>,
    #[serde(default)]
    rating: Option<f64>,
    #[serde(default)]
    size: Option<String>,
    #[serde(default)]
    sold_number: Option<f64>,
    #[serde(default, deserialize_with = "null_as_empty")]
    color: Vec<WireColor>,
    #[serde(default, deserialize_with = "null_as_empty")]
    product_image: Vec<WireImage>,
    #[serde(default)]
    description: Option<WireStructuredText>,
}

impl From<WireProduct> for Product {
    fn from(wire: WireProduct) -> Self {
        let mut product = Product::new(
            ProductId::new(wire.id),
            wire.product_name,
            wire.slug,
            whole(wire.price),
        );
        product.rating = wire.rating.filter(|r| r.is_finite()).unwrap_or(0.0);
        product.size = wire
            .size
            .filter(|s| !s.trim().is_empty())
            .map(SizeTag::from)
            .unwrap_or_default();
        product.sold_count = whole(wire.sold_number);
        product.colors = wire
            .color
            .into_iter()
            .filter(|c| !c.color_name.trim().is_empty())
            .map(|c| ProductColor::new(c.color_name, c.color.map(|h| h.hex).unwrap_or_default()))
            .collect();
        product.images = wire
            .product_image
            .into_iter()
            .filter_map(|i| i.image.map(|u| u.url))
            .filter(|url| !url.is_empty())
            .collect();
        product.description = wire.description.map(|d| d.value);
        product
    }
}

#[derive(Deserialize)]
struct WireReview {
    id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    title: String,
    #[serde(default)]
    stars: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    review: String,
    #[serde(default, deserialize_with = "null_as_default")]
    author: String,
}

impl From<WireReview> for Review {
    fn from(wire: WireReview) -> Self {
        Review {
            id: ReviewId::new(wire.id),
            title: wire.title,
            stars: wire.stars.filter(|s| s.is_finite()).unwrap_or(0.0) as i64,
            review: wire.review,
            author: wire.author,
        }
    }
}

/// Phone numbers are stored as integers in the CMS; accept strings too.
#[derive(Deserialize)]
#[serde(untagged)]
enum PhoneNumber {
    Number(serde_json::Number),
    Text(String),
}

impl PhoneNumber {
    fn into_recipient(self) -> Option<String> {
        let text = match self {
            PhoneNumber::Number(n) => n.to_string(),
            PhoneNumber::Text(s) => s,
        };
        let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
        if digits.is_empty() || digits.chars().all(|c| c == '0') {
            None
        } else {
            Some(digits)
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireCheckFitPage {
    #[serde(default, deserialize_with = "null_as_default")]
    title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    button: String,
    #[serde(default, deserialize_with = "null_as_default")]
    whatsapp_top: String,
    #[serde(default, deserialize_with = "null_as_default")]
    whatsapp_bottom: String,
    #[serde(default)]
    phone_number: Option<PhoneNumber>,
}

impl From<WireCheckFitPage> for CheckFitPage {
    fn from(wire: WireCheckFitPage) -> Self {
        CheckFitPage {
            title: wire.title,
            button: wire.button,
            template: ContactTemplate::new(wire.whatsapp_top, wire.whatsapp_bottom),
            phone_number: wire.phone_number.and_then(PhoneNumber::into_recipient),
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireDefaultFit {
    #[serde(default, deserialize_with = "null_as_default")]
    default_product: String,
    image1: Option<Upload>,
    #[serde(default, deserialize_with = "null_as_default")]
    text1: String,
    image2: Option<Upload>,
    #[serde(default, deserialize_with = "null_as_default")]
    text2: String,
    image3: Option<Upload>,
    #[serde(default, deserialize_with = "null_as_default")]
    text3: String,
    image4: Option<Upload>,
    #[serde(default, deserialize_with = "null_as_default")]
    text4: String,
    image5: Option<Upload>,
    #[serde(default, deserialize_with = "null_as_default")]
    text5: String,
}

impl From<WireDefaultFit> for DefaultFit {
    fn from(wire: WireDefaultFit) -> Self {
        let slots = [
            (wire.image1, wire.text1),
            (wire.image2, wire.text2),
            (wire.image3, wire.text3),
            (wire.image4, wire.text4),
            (wire.image5, wire.text5),
        ];
        DefaultFit {
            default_product: wire.default_product,
            shots: slots
                .into_iter()
                .map(|(image, desc)| ModelShot {
                    image: image.map(|u| u.url).unwrap_or_default(),
                    desc,
                })
                .collect(),
        }
    }
}

#[derive(Deserialize)]
struct WireFitShot {
    image: Option<Upload>,
    #[serde(default, deserialize_with = "null_as_default")]
    desc: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireProductFit {
    #[serde(default, deserialize_with = "null_as_default")]
    product_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    slug: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    product_fit: Vec<WireFitShot>,
}

impl From<WireProductFit> for ProductFit {
    fn from(wire: WireProductFit) -> Self {
        ProductFit {
            product_name: wire.product_name,
            slug: wire.slug,
            shots: wire
                .product_fit
                .into_iter()
                .take(MAX_FIT_SHOTS)
                .map(|shot| ModelShot {
                    image: shot.image.map(|u| u.url).unwrap_or_default(),
                    desc: shot.desc,
                })
                .collect(),
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AllProducts {
    #[serde(default, deserialize_with = "null_as_empty")]
    all_products: Vec<WireProduct>,
}

#[derive(Deserialize)]
struct SingleProduct<T> {
    product: Option<T>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AllReviews {
    #[serde(default, deserialize_with = "null_as_empty")]
    all_reviews: Vec<WireReview>,
}

#[derive(Deserialize)]
struct TitleOnly {
    title: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CataloguePageData {
    catalogue_page: Option<TitleOnly>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CheckFitPageData {
    check_fit_page: Option<WireCheckFitPage>,
}

#[derive(Deserialize)]
struct DefaultFitData {
    defaultfit: Option<WireDefaultFit>,
}

#[async_trait]
impl ContentSource for DatoCmsClient {
    async fn fetch_products(&self) -> Result<Vec<Product>, ContentFetchError> {
        let data: AllProducts = self
            .execute(PRODUCTS_QUERY, serde_json::json!({}))
            .await?;
        tracing::debug!(count = data.all_products.len(), "fetched products");
        Ok(data.all_products.into_iter().map(Product::from).collect())
    }

    async fn fetch_product(&self, slug: &str) -> Result<Option<Product>, ContentFetchError> {
        let data: SingleProduct<WireProduct> = self
            .execute(PRODUCT_QUERY, serde_json::json!({ "slug": slug }))
            .await?;
        Ok(data.product.map(Product::from))
    }

    async fn fetch_reviews(&self) -> Result<Vec<Review>, ContentFetchError> {
        let data: AllReviews = self.execute(REVIEWS_QUERY, serde_json::json!({})).await?;
        Ok(data.all_reviews.into_iter().map(Review::from).collect())
    }

    async fn fetch_catalogue_title(&self) -> Result<Option<String>, ContentFetchError> {
        let data: CataloguePageData = self
            .execute(CATALOGUE_PAGE_QUERY, serde_json::json!({}))
            .await?;
        Ok(data.catalogue_page.and_then(|p| p.title))
    }

    async fn fetch_check_fit_page(&self) -> Result<Option<CheckFitPage>, ContentFetchError> {
        let data: CheckFitPageData = self
            .execute(CHECK_FIT_PAGE_QUERY, serde_json::json!({}))
            .await?;
        Ok(data.check_fit_page.map(CheckFitPage::from))
    }

    async fn fetch_default_fit(&self) -> Result<Option<DefaultFit>, ContentFetchError> {
        let data: DefaultFitData = self
            .execute(DEFAULT_FIT_QUERY, serde_json::json!({}))
            .await?;
        Ok(data.defaultfit.map(DefaultFit::from))
    }

    async fn fetch_product_fit(
        &self,
        slug: &str,
    ) -> Result<Option<ProductFit>, ContentFetchError> {
        let data: SingleProduct<WireProductFit> = self
            .execute(PRODUCT_FIT_QUERY, serde_json::json!({ "slug": slug }))
            .await?;
        Ok(data.product.map(ProductFit::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRODUCTS_BODY: &str = r##"{
      "data": {
        "allProducts": [
          {
            "id": "118245033",
            "productImage": [
              { "image": { "url": "https://www.datocms-assets.com/1/front.jpg" } },
              { "image": null }
            ],
            "productName": "Kebaya Kartini",
            "rating": 4.5,
            "size": "all_size",
            "price": 350000,
            "color": [
              { "colorName": "Maroon", "color": { "hex": "#800000" } },
              { "colorName": "Sage", "color": { "hex": "#9caf88" } }
            ],
            "slug": "kebaya-kartini",
            "soldNumber": 42
          },
          {
            "id": "118245034",
            "productImage": null,
            "productName": "Outer Batik",
            "rating": null,
            "size": "M",
            "price": 189999.6,
            "color": null,
            "slug": "outer-batik",
            "soldNumber": null
          }
        ]
      }
    }"##;

    #[test]
    fn test_decode_products() {
        let data: AllProducts = decode(PRODUCTS_BODY.as_bytes()).unwrap();
        let products: Vec<Product> = data.all_products.into_iter().map(Product::from).collect();

        assert_eq!(products.len(), 2);

        let kebaya = &products[0];
        assert_eq!(kebaya.id.as_str(), "118245033");
        assert_eq!(kebaya.name, "Kebaya Kartini");
        assert_eq!(kebaya.price, 350_000);
        assert_eq!(kebaya.sold_count, 42);
        assert!(kebaya.size.is_all_size());
        assert_eq!(kebaya.colors.len(), 2);
        assert_eq!(kebaya.colors[0].hex, "#800000");
        assert_eq!(kebaya.images, vec!["https://www.datocms-assets.com/1/front.jpg"]);

        let outer = &products[1];
        assert_eq!(outer.price, 190_000);
        assert_eq!(outer.size, SizeTag::M);
        assert!(outer.colors.is_empty());
        assert!(outer.images.is_empty());
        assert_eq!(outer.sold_count, 0);
        assert_eq!(outer.rating, 0.0);
    }

    #[test]
    fn test_null_color_and_image_fields_do_not_drop_products() {
        let body = br##"{"data": {"allProducts": [
            {"id": "1", "productName": "Kebaya", "slug": "kebaya", "price": 100000,
             "color": [{"colorName": "Maroon", "color": {"hex": "#800000"}}]},
            {"id": "2", "productName": "Outer", "slug": "outer", "price": 90000,
             "color": [
                {"colorName": null, "color": {"hex": null}},
                {"colorName": "Sage", "color": {"hex": null}}
             ],
             "productImage": [{"image": {"url": null}}, {"image": {"url": "https://cdn/outer.jpg"}}]}
        ]}}"##;
        let data: AllProducts = decode(body).unwrap();
        let products: Vec<Product> = data.all_products.into_iter().map(Product::from).collect();

        assert_eq!(products.len(), 2);
        assert_eq!(products[0].colors[0].name, "Maroon");

        let outer = &products[1];
        assert_eq!(outer.colors.len(), 1);
        assert_eq!(outer.colors[0].name, "Sage");
        assert_eq!(outer.colors[0].hex, "");
        assert_eq!(outer.images, vec!["https://cdn/outer.jpg"]);
    }

    #[test]
    fn test_decode_graphql_errors() {
        let body = br#"{"data": null, "errors": [{"message": "Field 'foo' doesn't exist"}, {"message": "second"}]}"#;
        let result: Result<AllProducts, _> = decode(body);
        match result {
            Err(ContentFetchError::GraphQl(messages)) => {
                assert_eq!(messages.len(), 2);
                assert_eq!(messages[0], "Field 'foo' doesn't exist");
            }
            _ => panic!("expected GraphQL error"),
        }
    }

    #[test]
    fn test_decode_missing_data() {
        let result: Result<AllProducts, _> = decode(br#"{}"#);
        assert!(matches!(result, Err(ContentFetchError::UnexpectedShape(_))));

        let result: Result<AllProducts, _> = decode(b"not json");
        assert!(matches!(result, Err(ContentFetchError::UnexpectedShape(_))));
    }

    #[test]
    fn test_decode_product_with_description() {
        let body = br#"{"data": {"product": {
            "id": "1", "productName": "Dress", "slug": "dress", "price": 100000,
            "description": {"value": {"schema": "dast", "document": {"type": "root", "children": []}}}
        }}}"#;
        let data: SingleProduct<WireProduct> = decode(body).unwrap();
        let product = Product::from(data.product.unwrap());
        let description = product.description.unwrap();
        assert_eq!(description["schema"], "dast");
    }

    #[test]
    fn test_decode_unknown_product() {
        let data: SingleProduct<WireProduct> = decode(br#"{"data": {"product": null}}"#).unwrap();
        assert!(data.product.is_none());
    }

    #[test]
    fn test_decode_reviews() {
        let body = br#"{"data": {"allReviews": [
            {"id": "r1", "title": "Cantik", "stars": 5, "review": "Bahannya adem", "author": "Sari"},
            {"id": "r2", "title": null, "stars": 7, "review": "", "author": "Dewi"}
        ]}}"#;
        let data: AllReviews = decode(body).unwrap();
        let reviews: Vec<Review> = data.all_reviews.into_iter().map(Review::from).collect();
        assert_eq!(reviews[0].stars, 5);
        assert_eq!(reviews[1].title, "");
        assert_eq!(reviews[1].filled_stars(), 5);
    }

    #[test]
    fn test_decode_check_fit_page() {
        let body = br#"{"data": {"checkFitPage": {
            "title": "Cek Ukuranmu", "button": "Cek!", "whatsappTop": "Halo kak,",
            "whatsappBottom": "Terima kasih", "phoneNumber": 6281234567890
        }}}"#;
        let data: CheckFitPageData = decode(body).unwrap();
        let page = CheckFitPage::from(data.check_fit_page.unwrap());
        assert_eq!(page.title, "Cek Ukuranmu");
        assert_eq!(page.template.prefix, "Halo kak,");
        assert_eq!(page.template.suffix, "Terima kasih");
        assert_eq!(page.phone_number.as_deref(), Some("6281234567890"));
    }

    #[test]
    fn test_phone_number_forms() {
        let body = br#"{"data": {"checkFitPage": {"phoneNumber": "+62 812-000"}}}"#;
        let data: CheckFitPageData = decode(body).unwrap();
        let page = CheckFitPage::from(data.check_fit_page.unwrap());
        assert_eq!(page.phone_number.as_deref(), Some("62812000"));

        let body = br#"{"data": {"checkFitPage": {"phoneNumber": 0}}}"#;
        let data: CheckFitPageData = decode(body).unwrap();
        assert!(CheckFitPage::from(data.check_fit_page.unwrap()).phone_number.is_none());
    }

    #[test]
    fn test_decode_default_fit() {
        let body = br#"{"data": {"defaultfit": {
            "defaultProduct": "Muse Signature Dress",
            "image1": {"url": "https://cdn/1.jpg"}, "text1": "one",
            "image2": {"url": "https://cdn/2.jpg"}, "text2": "two",
            "image3": null, "text3": "three",
            "image4": {"url": "https://cdn/4.jpg"}, "text4": "four",
            "image5": {"url": "https://cdn/5.jpg"}, "text5": null
        }}}"#;
        let data: DefaultFitData = decode(body).unwrap();
        let fit = DefaultFit::from(data.defaultfit.unwrap());
        assert_eq!(fit.default_product, "Muse Signature Dress");
        assert_eq!(fit.shots.len(), 5);
        assert_eq!(fit.shots[2].image, "");
        assert_eq!(fit.shots[2].desc, "three");
        assert_eq!(fit.shots[4].desc, "");
    }

    #[test]
    fn test_product_fit_keeps_first_five_shots() {
        let shots: Vec<String> = (1..=7)
            .map(|i| format!(r#"{{"id": "{i}", "image": {{"url": "https://cdn/{i}.jpg"}}, "desc": "d{i}"}}"#))
            .collect();
        let body = format!(
            r#"{{"data": {{"product": {{"productName": "Kebaya", "slug": "kebaya", "productFit": [{}]}}}}}}"#,
            shots.join(",")
        );
        let data: SingleProduct<WireProductFit> = decode(body.as_bytes()).unwrap();
        let fit = ProductFit::from(data.product.unwrap());
        assert_eq!(fit.shots.len(), 5);
        assert_eq!(fit.shots[4].desc, "d5");
    }

    #[test]
    fn test_missing_token_rejected() {
        let result = DatoCmsClient::new(DatoCmsConfig::default());
        assert!(matches!(result, Err(ContentFetchError::MissingToken)));

        let result = DatoCmsClient::new(DatoCmsConfig::default().with_token("   "));
        assert!(matches!(result, Err(ContentFetchError::MissingToken)));

        let client = DatoCmsClient::new(DatoCmsConfig::default().with_token("abc")).unwrap();
        assert_eq!(client.config().environment, "main");
        assert_eq!(client.config().endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_config_serde_defaults() {
        let config: DatoCmsConfig = serde_json::from_str(r#"{"api_token": "t"}"#).unwrap();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.environment, DEFAULT_ENVIRONMENT);
        assert_eq!(config.token(), Some("t"));
    }
}

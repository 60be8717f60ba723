//! Endpoints of the ingredient collection in the remote document store.
//!
//! The store exposes a collection resource (`<base>/<collection>.json`) and a
//! per-id sub-resource (`<base>/<collection>/<id>.json`).

use reqwest::Url;
use serde_json::Value;

use crate::domain::{Ingredient, NewIngredient, RequestError};

use super::app_config::AppConfig;
use super::http::{HttpMethod, HttpRequest};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientApi {
    base_url: String,
    collection: String,
}

impl IngredientApi {
    pub fn new(base_url: impl Into<String>, collection: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        let collection: String = collection.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            collection: collection.trim_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(&config.base_url, &config.collection)
    }

    pub fn collection_url(&self) -> String {
        format!("{}/{}.json", self.base_url, self.collection)
    }

    /// The per-id resource. The id is pushed as a single encoded path segment.
    pub fn item_url(&self, id: &str) -> Result<String, RequestError> {
        if id.trim().is_empty() {
            return Err(RequestError::InvalidUrl("ingredient id is empty".into()));
        }

        let mut url =
            Url::parse(&self.base_url).map_err(|e| RequestError::InvalidUrl(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| RequestError::InvalidUrl(format!("{} cannot be a base", self.base_url)))?
            .pop_if_empty()
            .extend(self.collection.split('/').filter(|s| !s.is_empty()))
            .push(&format!("{id}.json"));
        Ok(url.to_string())
    }

    pub fn create_request(&self, ingredient: &NewIngredient) -> Result<HttpRequest, RequestError> {
        let body = serde_json::to_value(ingredient)?;
        Ok(HttpRequest::new(HttpMethod::Post, self.collection_url()).with_body(body))
    }

    pub fn delete_request(&self, id: &str) -> Result<HttpRequest, RequestError> {
        Ok(HttpRequest::new(HttpMethod::Delete, self.item_url(id)?))
    }

    /// Lists the collection, restricted to exact title matches when `filter` is non-empty.
    pub fn search_request(&self, filter: &str) -> Result<HttpRequest, RequestError> {
        let filter = filter.trim();
        if filter.is_empty() {
            return Ok(HttpRequest::new(HttpMethod::Get, self.collection_url()));
        }

        let mut url = Url::parse(&self.collection_url())
            .map_err(|e| RequestError::InvalidUrl(e.to_string()))?;
        url.query_pairs_mut()
            .append_pair("orderBy", "\"title\"")
            .append_pair("equalTo", &serde_json::to_string(filter)?);
        Ok(HttpRequest::new(HttpMethod::Get, url.to_string()))
    }
}

/// Pulls the backend-assigned key out of a create response (`{"name": "<id>"}`).
pub fn created_id(payload: &Value) -> Result<String, RequestError> {
    payload
        .get("name")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| RequestError::Decode("create response has no `name` field".into()))
}

/// Converts a collection listing (`{"<id>": {title, amount}, ...}` or `null`)
/// into ingredients, ordered by key.
pub fn parse_collection(payload: Value) -> Result<Vec<Ingredient>, RequestError> {
    match payload {
        Value::Null => Ok(Vec::new()),
        Value::Object(entries) => entries
            .into_iter()
            .map(|(id, fields)| -> Result<Ingredient, RequestError> {
                let fields: NewIngredient = serde_json::from_value(fields)?;
                Ok(fields.with_id(id))
            })
            .collect(),
        other => Err(RequestError::Decode(format!(
            "expected an object keyed by id, got {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Amount;
    use serde_json::json;

    fn api() -> IngredientApi {
        IngredientApi::new("https://example.firebaseio.com/", "ingredients")
    }

    #[test]
    fn urls_are_built_from_base_and_collection() {
        assert_eq!(
            api().collection_url(),
            "https://example.firebaseio.com/ingredients.json"
        );
        assert_eq!(
            api().item_url("-Nabc").unwrap(),
            "https://example.firebaseio.com/ingredients/-Nabc.json"
        );
    }

    #[test]
    fn item_url_rejects_empty_id() {
        assert!(matches!(api().item_url(""), Err(RequestError::InvalidUrl(_))));
        assert!(matches!(api().item_url("  "), Err(RequestError::InvalidUrl(_))));
        assert!(matches!(
            api().delete_request(""),
            Err(RequestError::InvalidUrl(_))
        ));
    }

    #[test]
    fn item_url_keeps_id_in_one_segment() {
        let nested = api().item_url("a/b").unwrap();
        assert_eq!(
            nested,
            "https://example.firebaseio.com/ingredients/a%2Fb.json"
        );

        let url = Url::parse(&api().item_url("a.json?x=1#").unwrap()).unwrap();
        assert_eq!(url.query(), None);
        assert_eq!(url.fragment(), None);
        let segments: Vec<&str> = url.path_segments().unwrap().collect();
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0], "ingredients");
        assert!(segments[1].ends_with(".json"));
    }

    #[test]
    fn create_request_posts_fields() {
        let request = api()
            .create_request(&NewIngredient::new("Sugar", "2"))
            .unwrap();
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.body, Some(json!({ "title": "Sugar", "amount": "2" })));
    }

    #[test]
    fn delete_request_has_no_body() {
        let request = api().delete_request("abc").unwrap();
        assert_eq!(request.method, HttpMethod::Delete);
        assert!(request.body.is_none());
    }

    #[test]
    fn search_request_adds_title_query_only_when_filtering() {
        let all = api().search_request("  ").unwrap();
        assert_eq!(all.url, api().collection_url());

        let filtered = api().search_request("Sugar").unwrap();
        let url = Url::parse(&filtered.url).unwrap();
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(
            pairs,
            vec![
                ("orderBy".to_string(), "\"title\"".to_string()),
                ("equalTo".to_string(), "\"Sugar\"".to_string()),
            ]
        );
    }

    #[test]
    fn created_id_requires_name() {
        assert_eq!(created_id(&json!({ "name": "abc123" })).unwrap(), "abc123");
        assert!(matches!(
            created_id(&json!({ "id": 1 })),
            Err(RequestError::Decode(_))
        ));
    }

    #[test]
    fn parse_collection_handles_null_and_objects() {
        assert!(parse_collection(Value::Null).unwrap().is_empty());

        let list = parse_collection(json!({
            "b": { "title": "Salt", "amount": 1 },
            "a": { "title": "Sugar", "amount": "2" },
        }))
        .unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].id, "a");
        assert_eq!(list[0].title, "Sugar");
        assert_eq!(list[1].amount, Amount::from(1u64));

        assert!(parse_collection(json!([1, 2])).is_err());
    }
}

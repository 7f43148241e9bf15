use serde::Serialize;
use serde_json::Value;

use crate::client::LexofficeClient;
use crate::domain::{ApiResult, ContactFilters, ResourceId};
use crate::resources::{Resource, ResourceManager};

#[derive(Clone)]
/// `contacts` endpoint: customers and vendors.
pub struct Contacts {
    inner: ResourceManager,
}

impl Contacts {
    pub fn new(client: LexofficeClient) -> Self {
        Self {
            inner: ResourceManager::new(client, Resource::CONTACTS),
        }
    }

    /// `POST contacts`.
    pub async fn create<B>(&self, data: &B) -> ApiResult<Value>
    where
        B: Serialize + ?Sized,
    {
        self.inner.create(data, false).await
    }

    /// `PUT contacts/{id}`. lexoffice expects the current `version` in `data`.
    pub async fn update<B>(&self, id: &ResourceId, data: &B) -> ApiResult<Value>
    where
        B: Serialize + ?Sized,
    {
        self.inner.update(id, data).await
    }

    pub async fn find(&self, id: &ResourceId) -> ApiResult<Value> {
        self.inner.find(id).await
    }

    /// `GET contacts`, filtered by the present fields of `filters`.
    pub async fn all(&self, filters: ContactFilters) -> ApiResult<Value> {
        self.inner.all(filters).await
    }

    pub async fn delete(&self, id: &ResourceId) -> ApiResult<Value> {
        self.inner.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::domain::Method;
    use crate::test_support::FakeTransport;

    fn id(value: &str) -> ResourceId {
        ResourceId::new(value).unwrap()
    }

    #[tokio::test]
    async fn create_posts_data_verbatim() {
        let transport = FakeTransport::respond(200, r#"{"id":"c-1","version":0}"#);
        let contacts = transport.client().contacts();
        let data = json!({
            "version": 0,
            "roles": { "customer": {} },
            "person": { "salutation": "Herr", "firstName": "Max", "lastName": "Mustermann" }
        });

        let result = contacts.create(&data).await;
        assert_eq!(result.data(), Some(&json!({ "id": "c-1", "version": 0 })));

        let request = transport.last_request();
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.url.as_str(), "https://api.lexoffice.io/v1/contacts");
        assert_eq!(request.body, Some(data));
    }

    #[tokio::test]
    async fn update_puts_to_contact_path() {
        let transport = FakeTransport::respond(200, r#"{"id":"c-1","version":2}"#);
        let contacts = transport.client().contacts();

        contacts.update(&id("c-1"), &json!({ "version": 1 })).await;

        let request = transport.last_request();
        assert_eq!(request.method, Method::Put);
        assert_eq!(request.url.as_str(), "https://api.lexoffice.io/v1/contacts/c-1");
        assert_eq!(request.body, Some(json!({ "version": 1 })));
    }

    #[tokio::test]
    async fn find_and_delete_address_single_contact() {
        let transport = FakeTransport::respond(200, "{}");
        let contacts = transport.client().contacts();

        contacts.find(&id("c-1")).await;
        contacts.delete(&id("c-2")).await;

        let requests = transport.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].method, Method::Get);
        assert_eq!(
            requests[0].url.as_str(),
            "https://api.lexoffice.io/v1/contacts/c-1"
        );
        assert_eq!(requests[1].method, Method::Delete);
        assert_eq!(
            requests[1].url.as_str(),
            "https://api.lexoffice.io/v1/contacts/c-2"
        );
    }

    #[tokio::test]
    async fn all_without_filters_has_no_query() {
        let transport = FakeTransport::respond(200, r#"{"content":[]}"#);
        let contacts = transport.client().contacts();

        contacts.all(ContactFilters::default()).await;

        let request = transport.last_request();
        assert_eq!(request.method, Method::Get);
        assert_eq!(request.url.as_str(), "https://api.lexoffice.io/v1/contacts");
    }

    #[tokio::test]
    async fn all_with_filters_sends_only_present_pairs_in_order() {
        let transport = FakeTransport::respond(200, r#"{"content":[]}"#);
        let contacts = transport.client().contacts();

        contacts
            .all(ContactFilters {
                email: Some("max@gmx.de".to_owned()),
                name: Some("Mustermann".to_owned()),
                ..Default::default()
            })
            .await;

        let url = transport.last_request().url;
        assert_eq!(url.query(), Some("email=max%40gmx.de&name=Mustermann"));
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(
            pairs,
            vec![
                ("email".to_owned(), "max@gmx.de".to_owned()),
                ("name".to_owned(), "Mustermann".to_owned()),
            ]
        );
    }

    #[tokio::test]
    async fn create_surfaces_upstream_validation_message() {
        let transport = FakeTransport::respond(
            400,
            r#"{"status":400,"error":"Bad Request","message":"Validation failed for request."}"#,
        );
        let contacts = transport.client().contacts();

        let result = contacts.create(&json!({})).await;
        assert_eq!(result.status(), Some(400));
        assert_eq!(result.error(), Some("Validation failed for request."));
    }
}

use crate::client::LexofficeClient;
use crate::domain::{ApiResult, ResourceId};
use crate::resources::{Resource, ResourceManager};

#[derive(Clone)]
/// `files` endpoint: download of rendered documents and uploaded files.
pub struct Files {
    inner: ResourceManager,
}

impl Files {
    pub fn new(client: LexofficeClient) -> Self {
        Self {
            inner: ResourceManager::new(client, Resource::FILES),
        }
    }

    /// `GET files/{id}` returning the file content (for example a rendered PDF).
    pub async fn download(&self, id: &ResourceId) -> ApiResult<Vec<u8>> {
        self.inner.download(id).await
    }
}

use async_trait::async_trait;
use fittrack_model::catalog::{Exercise, NutritionFacts};

const API_KEY_HEADER: &str = "X-Api-Key";

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("upstream unreachable")]
    CommunicationError,
    #[error("upstream internal error")]
    InternalServerError,
    #[error("invalid request")]
    RequestError,
    #[error("incorrect upstream response")]
    ResponseError,
}

type Result<T> = std::result::Result<T, Error>;

#[mockall::automock]
#[async_trait]
pub trait Client: Send + Sync {
    async fn search_exercises(&self, muscle: &str) -> Result<Vec<Exercise>>;
    async fn lookup_nutrition(&self, query: &str) -> Result<Vec<NutritionFacts>>;
}

pub struct ClientImpl {
    base_url: String,
    api_key: String,
    client: reqwest::Client,
}

impl ClientImpl {
    fn new(base_url: String, api_key: String) -> Self {
        Self {
            base_url,
            api_key,
            client: reqwest::Client::new(),
        }
    }
}

pub fn create(base_url: String, api_key: String) -> ClientImpl {
    ClientImpl::new(base_url, api_key)
}

#[async_trait]
impl Client for ClientImpl {
    async fn search_exercises(&self, muscle: &str) -> Result<Vec<Exercise>> {
        self.client
            .get(format!("{}/v1/exercises", self.base_url))
            .header(API_KEY_HEADER, &self.api_key)
            .query(&[("muscle", muscle)])
            .send()
            .await
            .map_err(|_| Error::CommunicationError)
            .and_then(|resp| {
                if resp.status().is_client_error() {
                    Err(Error::RequestError)
                } else if resp.status().is_server_error() {
                    Err(Error::InternalServerError)
                } else {
                    Ok(resp)
                }
            })?
            .json()
            .await
            .map_err(|_| Error::ResponseError)
    }

    async fn lookup_nutrition(&self, query: &str) -> Result<Vec<NutritionFacts>> {
        self.client
            .get(format!("{}/v1/nutrition", self.base_url))
            .header(API_KEY_HEADER, &self.api_key)
            .query(&[("query", query)])
            .send()
            .await
            .map_err(|_| Error::CommunicationError)
            .and_then(|resp| {
                if resp.status().is_client_error() {
                    Err(Error::RequestError)
                } else if resp.status().is_server_error() {
                    Err(Error::InternalServerError)
                } else {
                    Ok(resp)
                }
            })?
            .json()
            .await
            .map_err(|_| Error::ResponseError)
    }
}

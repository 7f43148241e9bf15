//! In-crate fake transport shared by unit tests.

use std::sync::{Arc, Mutex};

use crate::client::{ClientConfig, LexofficeClient};
use crate::domain::ApiToken;
use crate::transport::{BoxFuture, HttpRequest, HttpResponse, HttpTransport, TransportFailure};

#[derive(Debug, Clone)]
pub(crate) struct FakeTransport {
    state: Arc<Mutex<FakeTransportState>>,
}

#[derive(Debug)]
struct FakeTransportState {
    requests: Vec<HttpRequest>,
    reply: Result<HttpResponse, TransportFailure>,
}

impl FakeTransport {
    fn with_reply(reply: Result<HttpResponse, TransportFailure>) -> Self {
        Self {
            state: Arc::new(Mutex::new(FakeTransportState {
                requests: Vec::new(),
                reply,
            })),
        }
    }

    pub(crate) fn respond(status: u16, body: impl Into<String>) -> Self {
        Self::with_reply(Ok(HttpResponse {
            status,
            body: body.into().into_bytes(),
        }))
    }

    pub(crate) fn fail(code: u16, message: impl Into<String>) -> Self {
        Self::with_reply(Err(TransportFailure::new(code, message)))
    }

    pub(crate) fn client(&self) -> LexofficeClient {
        let config = ClientConfig::new(ApiToken::new("test-token").unwrap());
        LexofficeClient::builder(config)
            .transport(self.clone())
            .build()
            .unwrap()
    }

    pub(crate) fn requests(&self) -> Vec<HttpRequest> {
        self.state.lock().unwrap().requests.clone()
    }

    pub(crate) fn last_request(&self) -> HttpRequest {
        self.requests()
            .pop()
            .expect("transport received no request")
    }
}

impl HttpTransport for FakeTransport {
    fn send<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, TransportFailure>> {
        Box::pin(async move {
            let mut state = self.state.lock().unwrap();
            state.requests.push(request);
            state.reply.clone()
        })
    }
}

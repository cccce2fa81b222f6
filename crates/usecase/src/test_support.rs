use std::{collections::HashMap, sync::Mutex};

use async_trait::async_trait;
use feedjoin_ports::CollectionFetcher;
use feedjoin_shared_kernel::{InfraResult, InfrastructureError, Record, Resource};
use serde_json::Value;

enum Reply {
    Records(Vec<Record>),
    Status(u16),
    Malformed,
}

/// Fetcher double answering from canned replies and recording every call.
#[derive(Default)]
pub(crate) struct StubFetcher {
    replies: HashMap<Resource, Reply>,
    calls: Mutex<Vec<Resource>>,
}

impl StubFetcher {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_records(mut self, resource: Resource, records: Value) -> Self {
        let records = serde_json::from_value(records).expect("array of objects");
        self.replies.insert(resource, Reply::Records(records));
        self
    }

    pub(crate) fn with_status(mut self, resource: Resource, status: u16) -> Self {
        self.replies.insert(resource, Reply::Status(status));
        self
    }

    pub(crate) fn with_malformed(mut self, resource: Resource) -> Self {
        self.replies.insert(resource, Reply::Malformed);
        self
    }

    pub(crate) fn calls(&self) -> Vec<Resource> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CollectionFetcher for StubFetcher {
    async fn fetch(&self, resource: Resource) -> InfraResult<Vec<Record>> {
        self.calls.lock().unwrap().push(resource);
        match self.replies.get(&resource) {
            Some(Reply::Records(records)) => Ok(records.clone()),
            Some(Reply::Status(status)) => Err(InfrastructureError::HttpStatus { resource, status: *status }),
            Some(Reply::Malformed) | None => Err(InfrastructureError::Decode {
                resource,
                source: "expected a JSON array".into(),
            }),
        }
    }
}

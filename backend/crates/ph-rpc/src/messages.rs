use serde::{Deserialize, Serialize};

/// Body of `POST /profiles/{name}/host-file`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachContentRequest {
    pub name: String,
    pub file_uuid: String,
    pub host_url: String,
}

/// Body of `POST /profiles/{name}/stop`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StopRequest {
    pub name: String,
}

/// Body of `POST /profiles/{name}/start`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartRequest {
    pub name: String,
}

use serde::{Deserialize, Serialize};

/// Request envelope of a callable function: `{ "data": ... }`.
#[derive(Debug, Deserialize)]
pub struct CallableRequest<T> {
    pub data: T,
}

/// Response envelope of a callable function: `{ "result": ... }`.
#[derive(Debug, Serialize)]
pub struct CallableResponse<T> {
    pub result: T,
}

use strum_macros::Display;

pub(crate) trait JSONBodyHTTPResponseType: HTTPResponseType {
    async fn parse_json_body(
        response: reqwest::Response,
    ) -> Result<Self::ParsedResponseType, ResponseError>
    where Self::ParsedResponseType: for<'de> serde::Deserialize<'de> {
        Ok(response.json::<Self::ParsedResponseType>().await?)
    }
}

pub(crate) trait SerdeJSONBodyHTTPResponseType {}

impl<T> JSONBodyHTTPResponseType for T
where
    T: SerdeJSONBodyHTTPResponseType,
    for<'de> T: serde::Deserialize<'de>,
{
}

impl<T> HTTPResponseType for T
where
    T: SerdeJSONBodyHTTPResponseType,
    for<'de> T: serde::Deserialize<'de>,
{
    type ParsedResponseType = T;

    async fn read_response(
        response: reqwest::Response,
    ) -> Result<Self::ParsedResponseType, ResponseError> {
        let resp = Self::unwrap_return_code(response)?;
        Self::parse_json_body(resp).await
    }
}

/// Response type for endpoints returning an opaque text body, such as the
/// aircraft database passthrough.
pub(crate) struct PlainTextResponse;

impl HTTPResponseType for PlainTextResponse {
    type ParsedResponseType = String;

    async fn read_response(
        response: reqwest::Response,
    ) -> Result<Self::ParsedResponseType, ResponseError> {
        let resp = Self::unwrap_return_code(response)?;
        Ok(resp.text().await?)
    }
}

pub(crate) trait HTTPResponseType {
    type ParsedResponseType;

    async fn read_response(
        response: reqwest::Response,
    ) -> Result<Self::ParsedResponseType, ResponseError>;

    fn unwrap_return_code(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, ResponseError> {
        if response.status().is_success() {
            Ok(response)
        } else {
            Err(ResponseError::BadStatus { code: response.status() })
        }
    }
}

#[derive(Debug, Display)]
pub enum ResponseError {
    #[strum(to_string = "no connection to the remote host")]
    NoConnection,
    #[strum(to_string = "request timed out")]
    Timeout,
    #[strum(to_string = "unexpected status code {code}")]
    BadStatus { code: reqwest::StatusCode },
    #[strum(to_string = "response body could not be decoded")]
    InvalidBody,
    #[strum(to_string = "unknown transport error")]
    Unknown,
}

impl std::error::Error for ResponseError {}
impl From<reqwest::Error> for ResponseError {
    fn from(value: reqwest::Error) -> Self {
        if value.is_timeout() {
            ResponseError::Timeout
        } else if value.is_connect() {
            ResponseError::NoConnection
        } else if value.is_decode() {
            ResponseError::InvalidBody
        } else {
            ResponseError::Unknown
        }
    }
}

use crate::http_handler::http_client::HTTPClient;
use crate::http_handler::http_response::response_common::{HTTPResponseType, ResponseError};

pub(crate) enum HTTPRequestMethod {
    Get,
    Post,
}

/// One implementor per upstream endpoint. The default [`Self::send_request`]
/// assembles the URL from the client's base URL and the endpoint path,
/// attaches query parameters, form body and headers, and hands the raw
/// response to the associated response type for parsing.
pub(crate) trait HTTPRequestType {
    type Response: HTTPResponseType;

    fn endpoint(&self) -> &str;
    fn request_method(&self) -> HTTPRequestMethod;
    fn query_params(&self) -> Vec<(&'static str, String)> { Vec::new() }
    fn form_body(&self) -> Option<Vec<(&'static str, String)>> { None }
    fn header_params(&self) -> reqwest::header::HeaderMap {
        reqwest::header::HeaderMap::default()
    }

    async fn send_request(
        &self,
        client: &HTTPClient,
    ) -> Result<<Self::Response as HTTPResponseType>::ParsedResponseType, ResponseError> {
        let url = format!("{}{}", client.url(), self.endpoint());
        let mut request = match self.request_method() {
            HTTPRequestMethod::Get => client.client().get(&url),
            HTTPRequestMethod::Post => client.client().post(&url),
        };
        request = request.headers(self.header_params());
        let params = self.query_params();
        if !params.is_empty() {
            request = request.query(&params);
        }
        if let Some(form) = self.form_body() {
            request = request.form(&form);
        }
        let response = request.send().await?;
        <Self::Response as HTTPResponseType>::read_response(response).await
    }
}

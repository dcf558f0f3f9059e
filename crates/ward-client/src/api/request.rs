use super::*;

impl WardApiClient {
    /// Execute a GET request and return the body of a 2xx response.
    pub(super) async fn get_text(&self, url: Url) -> Result<String, WardError> {
        let resp = self.http.get(url.clone()).send().await?;

        let status = resp.status();
        let body = resp.text().await?;

        if !status.is_success() {
            tracing::debug!(url = %url, status = status.as_u16(), "Ward API GET failed");
            return Err(WardError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        Ok(body)
    }

    /// Execute a PUT request with no body.
    pub(super) async fn put_no_body(&self, url: Url) -> Result<String, WardError> {
        let resp = self.http.put(url.clone()).send().await?;

        let status = resp.status();
        let body = resp.text().await?;

        if !status.is_success() {
            tracing::debug!(url = %url, status = status.as_u16(), "Ward API PUT failed");
            return Err(WardError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        Ok(body)
    }
}

use super::*;

impl WardApiClient {
    /// List alerts matching the query.
    pub async fn get_alerts(&self, query: &AlertQuery) -> Result<Vec<AlertRecord>, WardError> {
        let url = alerts_url(&self.endpoint(&["api", "alerts"])?, query);
        let body = self.get_text(url).await?;
        let resp: AlertListResponse = serde_json::from_str(&body)?;
        Ok(resp.data)
    }

    /// Aggregate alert counters.
    pub async fn get_alert_stats(&self) -> Result<AlertStats, WardError> {
        let url = self.endpoint(&["api", "alerts", "stats"])?;
        let body = self.get_text(url).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Mark an alert as acknowledged.
    pub async fn acknowledge_alert(&self, id: &str) -> Result<serde_json::Value, WardError> {
        let url = self.endpoint(&["api", "alerts", id, "acknowledge"])?;
        let body = self.put_no_body(url).await?;
        Ok(parse_optional_body(&body)?)
    }

    /// Mark an alert as resolved.
    pub async fn resolve_alert(&self, id: &str) -> Result<serde_json::Value, WardError> {
        let url = self.endpoint(&["api", "alerts", id, "resolve"])?;
        let body = self.put_no_body(url).await?;
        Ok(parse_optional_body(&body)?)
    }
}

/// Append only the parameters that are set, in status/severity/limit order.
pub(super) fn alerts_url(base: &Url, query: &AlertQuery) -> Url {
    let mut url = base.clone();
    {
        let mut pairs = url.query_pairs_mut();
        if let Some(status) = &query.status {
            pairs.append_pair("status", status);
        }
        if let Some(severity) = &query.severity {
            pairs.append_pair("severity", severity);
        }
        if let Some(limit) = query.limit {
            pairs.append_pair("limit", &limit.to_string());
        }
    }
    if url.query() == Some("") {
        url.set_query(None);
    }
    url
}

fn parse_optional_body(body: &str) -> Result<serde_json::Value, serde_json::Error> {
    if body.trim().is_empty() {
        return Ok(serde_json::Value::Null);
    }
    serde_json::from_str(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://ward.example/api/alerts").unwrap()
    }

    #[test]
    fn alerts_url_active_query() {
        let url = alerts_url(&base(), &AlertQuery::active(5));
        assert_eq!(
            url.as_str(),
            "https://ward.example/api/alerts?status=active&limit=5"
        );
    }

    #[test]
    fn alerts_url_skips_unset_params() {
        let url = alerts_url(&base(), &AlertQuery::default());
        assert_eq!(url.as_str(), "https://ward.example/api/alerts");

        let query = AlertQuery {
            severity: Some("critical".into()),
            ..AlertQuery::default()
        };
        let url = alerts_url(&base(), &query);
        assert_eq!(url.query(), Some("severity=critical"));
    }

    #[test]
    fn action_endpoint_escapes_id() {
        let client = WardApiClient::new("https://ward.example").unwrap();
        let url = client
            .endpoint(&["api", "alerts", "a/1", "acknowledge"])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://ward.example/api/alerts/a%2F1/acknowledge"
        );
    }

    #[test]
    fn endpoint_appends_to_bare_host() {
        let client = WardApiClient::new("https://ward.example").unwrap();
        let url = client.endpoint(&["api", "alerts", "stats"]).unwrap();
        assert_eq!(url.as_str(), "https://ward.example/api/alerts/stats");
    }

    #[test]
    fn endpoint_keeps_base_path_prefix() {
        let client = WardApiClient::new("https://host.example/backend").unwrap();
        let url = client.endpoint(&["api", "alerts"]).unwrap();
        assert_eq!(url.as_str(), "https://host.example/backend/api/alerts");

        let client = WardApiClient::new("https://host.example/backend/").unwrap();
        let url = client.endpoint(&["api", "alerts", "ALT-1", "resolve"]).unwrap();
        assert_eq!(
            url.as_str(),
            "https://host.example/backend/api/alerts/ALT-1/resolve"
        );

        let alerts = client.endpoint(&["api", "alerts"]).unwrap();
        let url = alerts_url(&alerts, &AlertQuery::active(5));
        assert_eq!(
            url.as_str(),
            "https://host.example/backend/api/alerts?status=active&limit=5"
        );
    }

    #[test]
    fn new_rejects_relative_base() {
        assert!(matches!(
            WardApiClient::new("not a url"),
            Err(WardError::UrlParse(_))
        ));
    }

    #[test]
    fn alert_list_deserializes_mixed_records() {
        let body = r#"{
          "data": [
            {
              "alert_id": "ALT-1",
              "patient_id": "P-7",
              "patient_name": "Asha Rao",
              "severity": "critical",
              "message": "SpO2 below 88%",
              "triggered_rule": "spo2_low",
              "status": "active",
              "vitals": { "spo2": 86 }
            },
            { "_id": "65f0c2", "message": "Heart rate spike" }
          ]
        }"#;

        let parsed: AlertListResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.data.len(), 2);
        assert_eq!(parsed.data[0].alert_id.as_deref(), Some("ALT-1"));
        assert_eq!(parsed.data[0].triggered_rule.as_deref(), Some("spo2_low"));
        assert_eq!(parsed.data[1].object_id.as_deref(), Some("65f0c2"));
        assert_eq!(parsed.data[1].severity, None);
    }

    #[test]
    fn alert_list_accepts_non_string_scalars() {
        let body = r#"{"data":[{"alert_id":"ALT-1","message":"ok"},{"patient_id":17,"message":"HR spike","timestamp":1718000000}]}"#;

        let parsed: AlertListResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.data.len(), 2);
        assert_eq!(parsed.data[0].alert_id.as_deref(), Some("ALT-1"));
        assert_eq!(parsed.data[1].patient_id.as_deref(), Some("17"));
        assert_eq!(parsed.data[1].message.as_deref(), Some("HR spike"));
        assert_eq!(parsed.data[1].timestamp, Some(serde_json::json!(1718000000)));
    }

    #[test]
    fn alert_record_nested_values_read_as_absent() {
        let body = r#"{"alert_id":null,"_id":{"$oid":"65f0"},"severity":["high"],"message":"x"}"#;

        let record: AlertRecord = serde_json::from_str(body).unwrap();
        assert_eq!(record.alert_id, None);
        assert_eq!(record.object_id, None);
        assert_eq!(record.severity, None);
        assert_eq!(record.message.as_deref(), Some("x"));
    }

    #[test]
    fn alert_list_allows_missing_data() {
        let parsed: AlertListResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.data.is_empty());
    }

    #[test]
    fn empty_action_body_is_null() {
        assert_eq!(parse_optional_body("  ").unwrap(), serde_json::Value::Null);
        assert_eq!(
            parse_optional_body(r#"{"status":"acknowledged"}"#).unwrap()["status"],
            "acknowledged"
        );
    }
}

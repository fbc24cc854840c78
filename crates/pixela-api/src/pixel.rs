use chrono::NaiveDate;
use log::debug;
use pixela_core::{dates, ApiResponse, Params, Pixel, Quantity};
use reqwest::Method;

use crate::client::PixelaClient;
use crate::errors::Result;

/// Resource client for day-level pixel records.
#[derive(Debug, Clone, Copy)]
pub struct PixelClient<'a> {
    api: &'a PixelaClient,
}

impl<'a> PixelClient<'a> {
    pub fn new(api: &'a PixelaClient) -> Self {
        Self { api }
    }

    /// Record the quantity of the specified date as a pixel.
    pub async fn create(
        &self,
        graph_id: &str,
        date: NaiveDate,
        quantity: impl Into<Quantity>,
        optional_data: Option<&str>,
    ) -> Result<ApiResponse> {
        let quantity = quantity.into();
        debug!("Recording pixel {} on graph {}", quantity, graph_id);
        let params = Params::new()
            .insert_date("date", date)
            .insert("quantity", quantity.to_string())
            .insert_opt_str("optionalData", optional_data);

        self.api
            .send_envelope(
                Method::POST,
                &self.api.user_path(&format!("graphs/{graph_id}")),
                Some(params),
            )
            .await
    }

    /// Get the quantity registered for one day.
    pub async fn show(&self, graph_id: &str, date: NaiveDate) -> Result<Pixel> {
        self.api.get_json(&self.day_path(graph_id, date), None).await
    }

    /// Overwrite the quantity already registered for one day.
    pub async fn update(
        &self,
        graph_id: &str,
        date: NaiveDate,
        quantity: impl Into<Quantity>,
        optional_data: Option<&str>,
    ) -> Result<ApiResponse> {
        let params = Params::new()
            .insert("quantity", quantity.into().to_string())
            .insert_opt_str("optionalData", optional_data);

        self.api
            .send_envelope(Method::PUT, &self.day_path(graph_id, date), Some(params))
            .await
    }

    /// Increment the quantity of today's (UTC) pixel by one unit.
    pub async fn increment(&self, graph_id: &str) -> Result<ApiResponse> {
        debug!("Incrementing graph {}", graph_id);
        self.api
            .send_envelope(
                Method::PUT,
                &self.api.user_path(&format!("graphs/{graph_id}/increment")),
                None,
            )
            .await
    }

    /// Decrement the quantity of today's (UTC) pixel by one unit.
    pub async fn decrement(&self, graph_id: &str) -> Result<ApiResponse> {
        debug!("Decrementing graph {}", graph_id);
        self.api
            .send_envelope(
                Method::PUT,
                &self.api.user_path(&format!("graphs/{graph_id}/decrement")),
                None,
            )
            .await
    }

    /// Delete one day's record.
    pub async fn destroy(&self, graph_id: &str, date: NaiveDate) -> Result<ApiResponse> {
        debug!("Deleting pixel {} on graph {}", date, graph_id);
        self.api
            .send_envelope(Method::DELETE, &self.day_path(graph_id, date), None)
            .await
    }

    /// Path addressing a single day's pixel.
    fn day_path(&self, graph_id: &str, date: NaiveDate) -> String {
        self.api.user_path(&format!(
            "graphs/{}/{}",
            graph_id,
            dates::format_wire_date(date)
        ))
    }
}

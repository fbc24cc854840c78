use chrono::NaiveDate;
use log::debug;
use pixela_core::{
    dates, ApiResponse, Graph, GraphColor, GraphStats, GraphType, GraphUpdate, Params,
    SelfSufficiency,
};
use reqwest::Method;

use crate::client::PixelaClient;
use crate::errors::Result;

/// Resource client for pixelation graph definitions.
#[derive(Debug, Clone, Copy)]
pub struct GraphsClient<'a> {
    api: &'a PixelaClient,
}

impl<'a> GraphsClient<'a> {
    pub fn new(api: &'a PixelaClient) -> Self {
        Self { api }
    }

    /// Create a new pixelation graph definition.
    ///
    /// `id` must match `^[a-z][a-z0-9-]{1,16}$`; the service enforces the
    /// pattern and rejects offenders, nothing is checked locally.
    /// `timezone` defaults to UTC server-side when omitted.
    pub async fn create(
        &self,
        id: &str,
        name: &str,
        unit: &str,
        graph_type: GraphType,
        color: GraphColor,
        timezone: Option<&str>,
        self_sufficient: Option<SelfSufficiency>,
    ) -> Result<ApiResponse> {
        debug!("Creating graph {}", id);
        let params = Params::new()
            .insert("id", id)
            .insert("name", name)
            .insert("unit", unit)
            .insert("type", graph_type.as_str())
            .insert("color", color.as_str())
            .insert_opt_str("timezone", timezone)
            .insert_opt("selfSufficient", self_sufficient.map(|s| s.as_str()));

        self.api
            .send_envelope(Method::POST, &self.api.user_path("graphs"), Some(params))
            .await
    }

    /// Get all predefined pixelation graph definitions.
    pub async fn list(&self) -> Result<Vec<Graph>> {
        debug!("Fetching graphs");
        let envelope: ApiResponse = self.api.get_json(&self.api.user_path("graphs"), None).await?;
        let graphs = envelope.graphs()?;
        Ok(graphs)
    }

    /// Render the graph as an SVG document.
    ///
    /// A `date` renders the graph dating back to the past with that day
    /// as the start date; `mode` selects a display variant.
    pub async fn show(
        &self,
        graph_id: &str,
        date: Option<NaiveDate>,
        mode: Option<&str>,
    ) -> Result<String> {
        let params = Params::new()
            .insert_opt_date("date", date)
            .insert_opt_str("mode", mode);

        self.api
            .get_text(
                &self.api.user_path(&format!("graphs/{graph_id}")),
                Some(&params),
            )
            .await
    }

    /// Update a graph definition; only the fields present on `update`
    /// are sent.
    pub async fn update(&self, graph_id: &str, update: &GraphUpdate) -> Result<ApiResponse> {
        debug!("Updating graph {}", graph_id);
        self.api
            .send_envelope(
                Method::PUT,
                &self.api.user_path(&format!("graphs/{graph_id}")),
                Some(update.params()),
            )
            .await
    }

    /// Delete the graph definition and every pixel in it.
    pub async fn destroy(&self, graph_id: &str) -> Result<ApiResponse> {
        debug!("Deleting graph {}", graph_id);
        self.api
            .send_envelope(
                Method::DELETE,
                &self.api.user_path(&format!("graphs/{graph_id}")),
                None,
            )
            .await
    }

    /// URL of the graph's HTML detail view. Built locally, no request
    /// is issued.
    pub fn details_url(&self, graph_id: &str) -> String {
        format!(
            "{}{}.html",
            self.api.base_url().trim_end_matches('/'),
            self.api.user_path(&format!("graphs/{graph_id}"))
        )
    }

    /// Get the dates holding a pixel within the given window.
    ///
    /// Window semantics follow the service defaults:
    /// - neither bound: the 365 days ending today
    /// - `from` only: 365 days forward from `from`
    /// - `to` only: 365 days back from `to`
    /// - both: exactly the given range, rejected locally when it runs
    ///   backwards or spans more than 365 days
    pub async fn pixel_dates(
        &self,
        graph_id: &str,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<Vec<NaiveDate>> {
        if let (Some(from), Some(to)) = (from, to) {
            dates::validate_range(from, to)?;
        }

        let params = Params::new()
            .insert_opt_date("from", from)
            .insert_opt_date("to", to);

        let envelope: ApiResponse = self
            .api
            .get_json(
                &self.api.user_path(&format!("graphs/{graph_id}/pixels")),
                Some(&params),
            )
            .await?;
        let dates = envelope.pixel_dates()?;
        Ok(dates)
    }

    /// Get various statistics based on the registered information.
    pub async fn stats(&self, graph_id: &str) -> Result<GraphStats> {
        self.api
            .get_json(&self.api.user_path(&format!("graphs/{graph_id}/stats")), None)
            .await
    }
}

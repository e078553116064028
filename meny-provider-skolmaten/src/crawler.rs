//! Hierarchical crawl of the Skolmaten catalog.
//!
//! The provider lists provinces, the districts of each province, and the
//! stations (schools) of each district. [`collect`] walks all three levels,
//! fanning out concurrently at each one, and flattens the leaves into a single
//! list in traversal order.

use std::fmt;

use futures::future::try_join_all;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Number;
use tracing::{debug, info, instrument, trace};

use meny_core::{model::School, ports::PortError};

use crate::transport::Transport;

/// Response from /provinces
#[derive(Debug, Deserialize)]
struct ProvincesResponse {
    provinces: Vec<Node>,
}

/// Response from /districts?province={id}
#[derive(Debug, Deserialize)]
struct DistrictsResponse {
    districts: Vec<Node>,
}

/// Response from /stations?district={id}
#[derive(Debug, Deserialize)]
struct StationsResponse {
    stations: Vec<Station>,
}

/// Province or district entry. Only the id is needed to descend.
#[derive(Debug, Deserialize)]
struct Node {
    id: NodeId,
}

/// Opaque identifier of an inner node, sent back verbatim as a query value.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum NodeId {
    Number(Number),
    Text(String),
}

impl NodeId {
    fn to_query_value(&self) -> String {
        match self {
            NodeId::Number(number) => number.to_string(),
            NodeId::Text(text) => urlencoding::encode(text).into_owned(),
        }
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeId::Number(number) => write!(formatter, "{number}"),
            NodeId::Text(text) => formatter.write_str(text),
        }
    }
}

/// Leaf entry from /stations. Any JSON number is accepted as the id.
#[derive(Debug, Deserialize)]
struct Station {
    id: Number,
    name: String,
}

impl Station {
    fn into_school(self) -> School {
        School::new(self.id.to_string(), self.name)
    }
}

/// Whether a station name denotes a real school.
///
/// The provider mixes administrative "info" entries into the station lists,
/// so any name containing `info` in any ASCII casing is rejected, including
/// schools that merely happen to contain the substring.
#[must_use]
pub fn is_valid_name(name: &str) -> bool {
    !name.to_ascii_lowercase().contains("info")
}

/// Crawl every province, district and station and return the valid schools.
///
/// Requests for all provinces are in flight together, as are requests for all
/// districts across provinces. Output order follows the provider's list order
/// at every level.
///
/// # Errors
///
/// Fails on the first failing request anywhere in the tree, with the
/// transport's error or [`PortError::UnexpectedSchema`] for a body that is not
/// the expected listing. No partial result is returned.
#[instrument(skip(transport), err)]
pub async fn collect(transport: &dyn Transport) -> Result<Vec<School>, PortError> {
    let ProvincesResponse { provinces } = request(transport, "/provinces").await?;
    debug!(provinces = provinces.len(), "fetched province list");

    let per_province = try_join_all(
        provinces
            .iter()
            .map(|province| collect_province(transport, &province.id)),
    )
    .await?;

    let schools: Vec<School> = per_province
        .into_iter()
        .flatten()
        .flatten()
        .filter(|school| {
            let keep = is_valid_name(&school.title);
            if !keep {
                trace!(id = %school.id, title = %school.title, "skipping non-school station");
            }
            keep
        })
        .collect();

    info!(schools = schools.len(), "collected school catalog");
    Ok(schools)
}

async fn collect_province(
    transport: &dyn Transport,
    province: &NodeId,
) -> Result<Vec<Vec<School>>, PortError> {
    let path = format!("/districts?province={}", province.to_query_value());
    let DistrictsResponse { districts } = request(transport, &path).await?;
    debug!(%province, districts = districts.len(), "fetched district list");

    try_join_all(
        districts
            .iter()
            .map(|district| collect_district(transport, &district.id)),
    )
    .await
}

async fn collect_district(
    transport: &dyn Transport,
    district: &NodeId,
) -> Result<Vec<School>, PortError> {
    let path = format!("/stations?district={}", district.to_query_value());
    let StationsResponse { stations } = request(transport, &path).await?;
    debug!(%district, stations = stations.len(), "fetched station list");

    Ok(stations.into_iter().map(Station::into_school).collect())
}

// Fetch a path and decode its body into the expected listing shape.
async fn request<T: DeserializeOwned>(
    transport: &dyn Transport,
    path: &str,
) -> Result<T, PortError> {
    let body = transport.fetch(path).await?;

    serde_json::from_str(&body).map_err(|err| PortError::UnexpectedSchema {
        path: path.to_owned(),
        message: err.to_string(),
    })
}

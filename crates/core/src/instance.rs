use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A single VM as reported by `gcloud compute instances list`.
///
/// Serialization uses the capitalized keys of the on-disk selection state;
/// deserialization also accepts the lowercase keys of gcloud's JSON output.
/// Any other listing fields are ignored.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Instance {
    #[serde(rename = "Name", alias = "name")]
    pub name: String,
    #[serde(rename = "Zone", alias = "zone")]
    pub zone: String,
}

impl Instance {
    /// Trailing segment of the zone resource path, e.g. `us-east1-b`.
    ///
    /// The listing reports zones as full resource URLs; only the final
    /// segment is meaningful to `gcloud compute ssh` and to the user.
    #[must_use]
    pub fn short_zone(&self) -> &str {
        self.zone.rsplit('/').next().unwrap_or(&self.zone)
    }
}

/// Parses the JSON array from a listing call and sorts it ascending by name.
///
/// The sort is case-sensitive and stable, so equally-named entries keep
/// their listing order.
///
/// # Errors
///
/// Returns an error carrying the raw output if the input is not a JSON
/// array of instance records.
pub fn parse_instances(raw: &str) -> Result<Vec<Instance>> {
    let mut instances: Vec<Instance> =
        serde_json::from_str(raw).map_err(|e| Error::InstanceParse {
            original: e,
            raw: raw.to_string(),
        })?;

    instances.sort_by(|a, b| a.name.cmp(&b.name));

    Ok(instances)
}

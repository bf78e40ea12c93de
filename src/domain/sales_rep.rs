use serde::{Deserialize, Serialize};

/// A single deal belonging to a sales representative.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Deal {
    #[serde(default)]
    pub client: String,
    #[serde(default)]
    pub value: f64,
    #[serde(default)]
    pub status: String,
}

/// A client account handled by a sales representative.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct ClientAccount {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub industry: String,
    #[serde(default)]
    pub contact: String,
}

/// One sales representative record with nested deals and clients.
///
/// The backing file is externally controlled, so every field defaults when
/// missing instead of failing the whole load.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct SalesRep {
    /// Opaque identifier assigned by the data source.
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub deals: Vec<Deal>,
    #[serde(default)]
    pub clients: Vec<ClientAccount>,
}

/// Top-level container as stored in the backing data file.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Dataset {
    /// A payload without the `salesReps` key deserializes to an empty list.
    #[serde(default, rename = "salesReps")]
    pub sales_reps: Vec<SalesRep>,
}

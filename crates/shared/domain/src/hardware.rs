use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// CPU families offered by the form.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum CpuModel {
    #[default]
    #[strum(to_string = "Power")]
    Power,
    #[strum(to_string = "ARM")]
    Arm,
    #[strum(to_string = "X86")]
    X86,
}

/// Server models a configuration can be built into.
///
/// [`ServerModel::NoOptions`] is a sentinel and never appears next to another model.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ServerModel {
    #[strum(to_string = "Tower Server")]
    TowerServer,
    #[strum(to_string = "4U Rack Server")]
    RackServer,
    #[strum(to_string = "Mainframe")]
    Mainframe,
    #[strum(to_string = "High Density Server")]
    HighDensityServer,
    #[strum(to_string = "No Options")]
    NoOptions,
}

impl ServerModel {
    /// Label shown to the user.
    #[must_use]
    pub fn label(self) -> &'static str {
        self.into()
    }
}

/*
    Schwarzschild orbit, relativistic orbit propagation
    Copyright (C) 2023 The schwarzschild-orbit contributors

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU Affero General Public License as published
    by the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.

    This program is distributed in the hope that it will be useful,
    but WITHOUT ANY WARRANTY; without even the implied warranty of
    MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
    GNU Affero General Public License for more details.

    You should have received a copy of the GNU Affero General Public License
    along with this program.  If not, see <https://www.gnu.org/licenses/>.
*/

use crate::units::{parse_quantity, Quantity};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde::{Serialize, Serializer};
use snafu::prelude::*;
use std::collections::BTreeMap;
use std::fmt::Debug;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum ConfigError {
    #[snafu(display("failed to read configuration file {}: {source}", path.display()))]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[snafu(display("failed to parse YAML configuration: {source}"))]
    ParseError { source: serde_yaml::Error },

    #[snafu(display("invalid configuration: {msg}"))]
    InvalidConfig { msg: String },
}

pub trait ConfigRepr: Debug + Sized + Serialize + DeserializeOwned {
    /// Loads a single configuration from a YAML file.
    fn load<P>(path: P) -> Result<Self, ConfigError>
    where
        P: AsRef<Path>,
    {
        let reader = open(path.as_ref())?;
        serde_yaml::from_reader(reader).context(ParseSnafu)
    }

    /// Loads a YAML sequence of configurations.
    fn load_many<P>(path: P) -> Result<Vec<Self>, ConfigError>
    where
        P: AsRef<Path>,
    {
        let reader = open(path.as_ref())?;
        serde_yaml::from_reader(reader).context(ParseSnafu)
    }

    /// Loads a YAML map of named configurations.
    fn load_named<P>(path: P) -> Result<BTreeMap<String, Self>, ConfigError>
    where
        P: AsRef<Path>,
    {
        let reader = open(path.as_ref())?;
        serde_yaml::from_reader(reader).context(ParseSnafu)
    }

    /// Builds "Self" from the provided string of a yaml
    fn loads(data: &str) -> Result<Self, ConfigError> {
        debug!("Loading YAML:\n{data}");
        serde_yaml::from_str(data).context(ParseSnafu)
    }

    /// Parses a YAML sequence of configurations.
    fn loads_many(data: &str) -> Result<Vec<Self>, ConfigError> {
        debug!("Loading YAML:\n{data}");
        serde_yaml::from_str(data).context(ParseSnafu)
    }
}

fn open(path: &Path) -> Result<BufReader<File>, ConfigError> {
    let file = File::open(path).context(ReadSnafu { path })?;
    Ok(BufReader::new(file))
}

pub(crate) fn quantity_to_str<S>(quantity: &Quantity, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format!("{quantity}"))
}

/// A deserializer from a quantity string, e.g. `147.09e6 km`
pub(crate) fn quantity_from_str<'de, D>(deserializer: D) -> Result<Quantity, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_quantity(&s).map_err(serde::de::Error::custom)
}

pub(crate) fn maybe_quantity_to_str<S>(
    quantity: &Option<Quantity>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if let Some(quantity) = quantity {
        quantity_to_str(quantity, serializer)
    } else {
        serializer.serialize_none()
    }
}

/// Deserializes an optional quantity: a missing or null field is `None`, a malformed one is an error.
pub(crate) fn maybe_quantity_from_str<'de, D>(deserializer: D) -> Result<Option<Quantity>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(s) => parse_quantity(&s)
            .map(Some)
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

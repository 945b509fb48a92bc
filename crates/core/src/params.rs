//! Parameter registry for DNS record commands.
//!
//! A [`Command`] owns an ordered set of [`Parameter`]s, unique by name. Each
//! parameter carries a [`Capability`] that says whether it is a part or an
//! extra option of some composite record parameter, and if so which one.
//!
//! The `*Definition` types are the YAML forms read by
//! [`crate::file_handling`]; they are converted into the registry types once
//! at load time.

use std::fmt::{Display, Formatter};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::Error::NonUniqueParameterName;
use crate::error::Result;

/// User-supplied options for one invocation, in the order they were given.
pub type Options = IndexMap<String, String>;

/// How a parameter relates to a composite DNS record parameter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Capability {
    /// Not tied to a record parameter. Composite record parameters such as
    /// `mxrecord` are plain and are recognised by their name.
    #[default]
    Plain,
    /// One field of a composite record, e.g. the MX preference.
    Part { parent: Option<String> },
    /// Auxiliary option of a composite record. Never counts as record data on its own.
    Extra { parent: Option<String> },
}

impl Capability {
    pub fn is_part(&self) -> bool {
        matches!(self, Capability::Part { .. })
    }

    pub fn is_extra(&self) -> bool {
        matches!(self, Capability::Extra { .. })
    }

    /// Name of the parent record parameter, for parts and extras only.
    pub fn parent(&self) -> Option<&str> {
        match self {
            Capability::Plain => None,
            Capability::Part { parent } | Capability::Extra { parent } => parent.as_deref(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub name: String,
    pub capability: Capability,
    pub description: Option<String>,
}

impl Parameter {
    pub fn plain(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            capability: Capability::Plain,
            description: None,
        }
    }

    pub fn part(name: impl Into<String>, parent: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            capability: Capability::Part {
                parent: Some(parent.into()),
            },
            description: None,
        }
    }

    pub fn extra(name: impl Into<String>, parent: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            capability: Capability::Extra {
                parent: Some(parent.into()),
            },
            description: None,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl Display for Parameter {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "`{}`", self.name)?;

        if let Some(desc) = &self.description {
            write!(formatter, " ({desc})")?;
        }

        Ok(())
    }
}

/// A command and its parameter registry.
#[derive(Debug, Clone)]
pub struct Command {
    name: String,
    description: Option<String>,
    params: IndexMap<String, Parameter>,
}

impl Command {
    /// Builds a command from its parameters, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns [`NonUniqueParameterName`] if two parameters share a name.
    pub fn new(
        name: impl Into<String>,
        params: impl IntoIterator<Item = Parameter>,
    ) -> Result<Self> {
        let name = name.into();
        let mut registry = IndexMap::new();

        for param in params {
            if registry.contains_key(&param.name) {
                return Err(NonUniqueParameterName(name, param.name));
            }
            registry.insert(param.name.clone(), param);
        }

        Ok(Self {
            name,
            description: None,
            params: registry,
        })
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Looks up a parameter by name. Unknown names are `None`.
    pub fn get(&self, name: &str) -> Option<&Parameter> {
        self.params.get(name)
    }

    /// All parameters in registration order.
    pub fn params(&self) -> impl Iterator<Item = &Parameter> {
        self.params.values()
    }
}

impl Display for Command {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.description {
            Some(desc) => write!(formatter, "{} ({})", self.name, desc),
            None => formatter.write_str(&self.name),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ParameterKind {
    #[default]
    Plain,
    Part,
    Extra,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ParameterDefinition {
    pub name: String,
    #[serde(default)]
    pub kind: ParameterKind,
    pub hint: Option<String>,
    pub description: Option<String>,
}

impl From<ParameterDefinition> for Parameter {
    fn from(value: ParameterDefinition) -> Self {
        let capability = match value.kind {
            // a hint on a plain parameter carries no meaning
            ParameterKind::Plain => Capability::Plain,
            ParameterKind::Part => Capability::Part { parent: value.hint },
            ParameterKind::Extra => Capability::Extra { parent: value.hint },
        };

        Self {
            name: value.name,
            capability,
            description: value.description,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct CommandDefinition {
    pub name: String,
    pub description: Option<String>,
    pub parameters: Option<Vec<ParameterDefinition>>,
}

impl TryFrom<CommandDefinition> for Command {
    type Error = crate::error::Error;

    fn try_from(value: CommandDefinition) -> Result<Self> {
        let params = value
            .parameters
            .unwrap_or_default()
            .into_iter()
            .map(Parameter::from);
        let command = Command::new(value.name, params)?;

        Ok(match value.description {
            Some(description) => command.with_description(description),
            None => command,
        })
    }
}

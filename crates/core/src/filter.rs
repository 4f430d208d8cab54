//! Narrowing the instance list down to connection candidates.
//!
//! The matcher is built once per run, before any gcloud call, so malformed
//! input fails without paying for a listing. Positional filters match by
//! name prefix, with one deliberate twist: a name equal to the filter wins
//! outright, even when other names share the prefix. `--regex` switches the
//! filter to a regular expression matched anywhere in the name, and
//! `--host` demands exactly one instance with that name.

use regex::Regex;

use crate::error::{Error, Result};
use crate::instance::Instance;

/// Name matcher for a single run.
#[derive(Debug, Clone)]
pub enum Filter {
    /// No filter given: every instance is a candidate.
    Everything,
    /// Anchored equality against a single VM name.
    Host(String),
    /// Name prefix; an exact name match becomes the sole candidate.
    Prefix(String),
    /// Regular expression matched anywhere in the name.
    Pattern(Regex),
}

impl Filter {
    /// Builds the matcher from the command-line inputs.
    ///
    /// # Errors
    ///
    /// Returns an error if the regex expression does not compile.
    pub fn new(host: Option<&str>, expression: Option<&str>, use_regex: bool) -> Result<Self> {
        if let Some(host) = host {
            return Ok(Self::Host(host.to_string()));
        }

        match expression {
            None => Ok(Self::Everything),
            Some(expression) if use_regex => {
                let pattern = Regex::new(expression).map_err(|e| Error::InvalidPattern {
                    pattern: expression.to_string(),
                    original: e,
                })?;
                Ok(Self::Pattern(pattern))
            }
            Some(expression) => Ok(Self::Prefix(expression.to_string())),
        }
    }

    /// The user-supplied filter text, if any. Used in error messages.
    fn text(&self) -> Option<String> {
        match self {
            Self::Everything => None,
            Self::Host(host) => Some(host.clone()),
            Self::Prefix(prefix) => Some(prefix.clone()),
            Self::Pattern(pattern) => Some(pattern.as_str().to_string()),
        }
    }

    /// Narrows `instances` to the connection candidates, preserving order.
    ///
    /// # Errors
    ///
    /// Returns an error when nothing matches, and for [`Filter::Host`] also
    /// when more than one instance carries the requested name.
    pub fn apply(&self, instances: Vec<Instance>) -> Result<Vec<Instance>> {
        let matched = match self {
            Self::Everything => instances,
            Self::Host(host) => {
                let matched: Vec<Instance> = instances
                    .into_iter()
                    .filter(|instance| instance.name == *host)
                    .collect();

                match matched.len() {
                    0 => return Err(Error::HostNotFound(host.clone())),
                    1 => matched,
                    _ => return Err(Error::AmbiguousHost(host.clone())),
                }
            }
            Self::Prefix(prefix) => {
                let mut matched = Vec::new();
                for instance in instances {
                    if instance.name == *prefix {
                        // An exact name match beats every other prefix match.
                        matched = vec![instance];
                        break;
                    }
                    if instance.name.starts_with(prefix.as_str()) {
                        matched.push(instance);
                    }
                }
                matched
            }
            Self::Pattern(pattern) => instances
                .into_iter()
                .filter(|instance| pattern.is_match(&instance.name))
                .collect(),
        };

        if matched.is_empty() {
            return Err(Error::NoVmsFound {
                filter: self.text(),
            });
        }

        Ok(matched)
    }
}

//! Interactive VM selection.
//!
//! A sole candidate is taken without prompting. Otherwise a single-choice
//! list prompt shows `name  zone` labels with the cursor pre-positioned at
//! the previously chosen VM when it is still among the candidates.

use dialoguer::Select;

use gssh_core::error::{Error, Result};
use gssh_core::instance::Instance;

/// Formats the picker labels: names left-padded to the longest name,
/// followed by the short zone.
#[must_use]
pub fn format_choices(instances: &[Instance]) -> Vec<String> {
    let width = instances
        .iter()
        .map(|instance| instance.name.len())
        .max()
        .unwrap_or(0);

    instances
        .iter()
        .map(|instance| format!("{:<width$}  {}", instance.name, instance.short_zone()))
        .collect()
}

/// Index the picker cursor starts at: the remembered VM if it is still a
/// candidate, otherwise the top of the list.
#[must_use]
pub fn initial_cursor(instances: &[Instance], previous: Option<&Instance>) -> usize {
    previous
        .and_then(|previous| {
            instances
                .iter()
                .position(|instance| instance.name == previous.name)
        })
        .unwrap_or(0)
}

/// Resolves the candidate list to a single instance.
///
/// # Errors
///
/// Returns an error if the interactive prompt fails or is aborted. An abort
/// never falls back to a candidate silently.
pub fn choose_instance<'a>(
    instances: &'a [Instance],
    previous: Option<&Instance>,
) -> Result<&'a Instance> {
    if let [only] = instances {
        return Ok(only);
    }

    let items = format_choices(instances);

    let selected = Select::new()
        .with_prompt("Select VM")
        .items(&items)
        .default(initial_cursor(instances, previous))
        .interact()
        .map_err(|e| Error::Selector(e.to_string()))?;

    Ok(&instances[selected])
}

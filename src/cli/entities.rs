//! CLI command for inspecting registered entity types

use crate::display::{format_entity_columns, format_entity_list};
use crate::error::{TallyError, TallyResult};
use crate::export::ExportRegistry;

/// Handle `tally entities [ENTITY]`
pub fn handle_entities_command(registry: &ExportRegistry, entity: Option<String>) -> TallyResult<()> {
    match entity {
        None => print!("{}", format_entity_list(registry)),
        Some(entity_type) => {
            let config = registry
                .get(&entity_type)
                .ok_or_else(|| TallyError::config_missing(entity_type.as_str()))?;
            print!("{}", format_entity_columns(&entity_type, config));
        }
    }
    Ok(())
}

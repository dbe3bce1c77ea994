//! Entity display formatting
//!
//! Formats registered entity types and their columns as terminal tables.

use crate::export::{ExportConfig, ExportRegistry};

/// Format the list of registered entity types as a table
pub fn format_entity_list(registry: &ExportRegistry) -> String {
    if registry.is_empty() {
        return "No entity types registered.\n".to_string();
    }

    let name_width = registry
        .entity_types()
        .map(str::len)
        .max()
        .unwrap_or(6)
        .max(6);

    let file_width = registry
        .iter()
        .map(|(_, c)| c.file_name().len())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_width$}  {:<file_width$}  {:>7}\n",
        "Entity",
        "File",
        "Columns",
        name_width = name_width,
        file_width = file_width,
    ));

    output.push_str(&format!(
        "{:-<name_width$}  {:-<file_width$}  {:->7}\n",
        "",
        "",
        "",
        name_width = name_width,
        file_width = file_width,
    ));

    for (entity_type, config) in registry.iter() {
        output.push_str(&format!(
            "{:<name_width$}  {:<file_width$}  {:>7}\n",
            entity_type,
            config.file_name(),
            config.columns().len(),
            name_width = name_width,
            file_width = file_width,
        ));
    }

    output.push_str(&format!("\n{} entity types\n", registry.len()));
    output
}

/// Format the columns of one configuration as a table
pub fn format_entity_columns(entity_type: &str, config: &ExportConfig) -> String {
    let header_width = config
        .columns()
        .iter()
        .map(|c| c.header.len())
        .max()
        .unwrap_or(6)
        .max(6);

    let path_width = config
        .columns()
        .iter()
        .map(|c| c.spec.path().len())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!("{} -> {}\n\n", entity_type, config.file_name()));

    output.push_str(&format!(
        "{:<header_width$}  {:<path_width$}  {}\n",
        "Header",
        "Path",
        "Transform",
        header_width = header_width,
        path_width = path_width,
    ));

    output.push_str(&format!(
        "{:-<header_width$}  {:-<path_width$}  {:-<9}\n",
        "",
        "",
        "",
        header_width = header_width,
        path_width = path_width,
    ));

    for column in config.columns() {
        output.push_str(&format!(
            "{:<header_width$}  {:<path_width$}  {}\n",
            column.header,
            column.spec.path(),
            column.spec.transform().map(|t| t.name()).unwrap_or("-"),
            header_width = header_width,
            path_width = path_width,
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_list() {
        let registry = ExportRegistry::builtin().unwrap();
        let output = format_entity_list(&registry);

        assert!(output.starts_with("Entity"));
        assert!(output.contains("staff-list.csv"));
        assert!(output.contains("users-list.csv"));
        assert!(output.contains(&format!("{} entity types", registry.len())));
    }

    #[test]
    fn test_empty_registry() {
        let registry = ExportRegistry::default();
        assert_eq!(format_entity_list(&registry), "No entity types registered.\n");
    }

    #[test]
    fn test_entity_columns() {
        let registry = ExportRegistry::builtin().unwrap();
        let config = registry.get("users").unwrap();
        let output = format_entity_columns("users", config);

        assert!(output.starts_with("users -> users-list.csv"));
        let last_login = output
            .lines()
            .find(|l| l.starts_with("Last_Login"))
            .unwrap();
        assert!(last_login.contains("last_login"));
        assert!(last_login.ends_with("date_or_dash"));

        let username = output.lines().find(|l| l.starts_with("Username")).unwrap();
        assert!(username.trim_end().ends_with('-'));
    }
}

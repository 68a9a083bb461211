//! TypeScript module generation from extracted variables.
//!
//! Keys are bucketed by their first underscore-delimited segment. Each bucket
//! becomes a `<group>Color` constant, and one exported object spreads all of
//! them in the order the groups were first seen.

use indexmap::IndexMap;

use super::extract::CssVariables;

/// Export name used when none (or an empty one) is given.
pub const DEFAULT_EXPORT_NAME: &str = "colors";

/// Options for [`generate`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateOptions {
    pub export_name: Option<String>,
}

impl GenerateOptions {
    /// The export name to emit. Empty names fall back to [`DEFAULT_EXPORT_NAME`].
    pub fn export_name(&self) -> &str {
        match self.export_name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => DEFAULT_EXPORT_NAME,
        }
    }
}

/// Variables sharing the same first key segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorGroup<'a> {
    /// First segment of every member key. May be empty for keys like `_x`.
    pub name: &'a str,
    /// Full normalized key → value, in insertion order.
    pub entries: Vec<(&'a str, &'a str)>,
}

impl ColorGroup<'_> {
    /// Identifier of the generated constant for this group.
    pub fn const_name(&self) -> String {
        format!("{}Color", self.name)
    }
}

/// Bucket variables into groups by the segment before their first underscore.
///
/// Keys without an underscore belong to no group and are left out.
pub fn group_variables(variables: &CssVariables) -> Vec<ColorGroup<'_>> {
    let mut groups: IndexMap<&str, Vec<(&str, &str)>> = IndexMap::new();

    for (key, value) in variables {
        let Some((group, _)) = key.split_once('_') else {
            continue;
        };
        groups
            .entry(group)
            .or_default()
            .push((key.as_str(), value.as_str()));
    }

    groups
        .into_iter()
        .map(|(name, entries)| ColorGroup { name, entries })
        .collect()
}

/// Keys that [`group_variables`] leaves out.
pub fn ungrouped_keys(variables: &CssVariables) -> Vec<&str> {
    variables
        .keys()
        .filter(|key| !key.contains('_'))
        .map(String::as_str)
        .collect()
}

/// Name of the key-union type for an export: `colors` → `TColors`.
pub fn type_name(export_name: &str) -> String {
    let mut chars = export_name.chars();
    match chars.next() {
        Some(first) => format!("T{}{}", first.to_uppercase(), chars.as_str()),
        None => "T".to_string(),
    }
}

/// Generate the TypeScript module source for `variables`.
///
/// Values are written inside double quotes as-is; a value that itself contains
/// `"` produces invalid TypeScript.
///
/// # Examples
///
/// ```
/// use css_vars_to_ts::{GenerateOptions, extract, generate};
///
/// let vars = extract(":root { --color-primary: #fff; }", Default::default());
/// let code = generate(&vars, &GenerateOptions::default());
/// assert!(code.contains("export type TColors = keyof typeof colors;"));
/// ```
pub fn generate(variables: &CssVariables, options: &GenerateOptions) -> String {
    let groups = group_variables(variables);
    let export_name = options.export_name();

    let mut code = String::new();

    for group in &groups {
        code.push_str(&format!("const {} = {{\n", group.const_name()));
        for (key, value) in &group.entries {
            code.push_str(&format!("  {}: \"{}\",\n", key, value));
        }
        code.push_str("};\n\n");
    }

    code.push_str(&format!("export const {} = {{\n", export_name));
    for group in &groups {
        code.push_str(&format!("  ...{},\n", group.const_name()));
    }
    code.push_str("};\n\n");

    code.push_str(&format!(
        "export type {} = keyof typeof {};\n",
        type_name(export_name),
        export_name
    ));

    code
}

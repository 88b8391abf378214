use std::collections::HashSet;

use serde::Deserialize;

use crate::error::SchemaError;

/// Named output schema: the ordered headers an export should carry.
/// Created and edited outside the core; only `target_headers` is read here.
#[derive(Debug, Clone, Deserialize)]
pub struct TemplateSchema {
    pub name: String,
    pub target_headers: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct TemplateFile {
    #[serde(default)]
    template: Vec<TemplateSchema>,
}

/// Load a template library from TOML. Names must be non-empty and unique;
/// every template needs at least one target header.
pub fn templates_from_toml(input: &str) -> Result<Vec<TemplateSchema>, SchemaError> {
    let file: TemplateFile =
        toml::from_str(input).map_err(|e| SchemaError::ConfigParse(e.to_string()))?;

    let mut seen = HashSet::new();
    for template in &file.template {
        if template.name.is_empty() {
            return Err(SchemaError::ConfigValidation(
                "template with empty name".into(),
            ));
        }
        if !seen.insert(template.name.clone()) {
            return Err(SchemaError::ConfigValidation(format!(
                "duplicate template name '{}'",
                template.name
            )));
        }
        if template.target_headers.is_empty() {
            return Err(SchemaError::ConfigValidation(format!(
                "template '{}' has no target headers",
                template.name
            )));
        }
    }

    Ok(file.template)
}

/// The stock templates shipped with the product-data tooling.
pub fn builtin_templates() -> Vec<TemplateSchema> {
    fn t(name: &str, headers: &[&str]) -> TemplateSchema {
        TemplateSchema {
            name: name.into(),
            target_headers: headers.iter().map(|s| s.to_string()).collect(),
        }
    }

    vec![
        t(
            "Attribute Audit",
            &[
                "ASIN", "Brand", "Title", "UPC", "Manufacturer", "Size", "Bullet Point 1",
                "Bullet Point 2", "Bullet Point 3", "Bullet Point 4", "Bullet Point 5",
            ],
        ),
        t(
            "Suggested vs Live",
            &[
                "ASIN", "Brand", "Title", "Bullet Point 1", "Bullet Point 2", "Bullet Point 3",
                "Bullet Point 4", "Bullet Point 5",
            ],
        ),
        t(
            "keepa_full",
            &[
                "ASIN", "Title", "Sales Rank", "Bullet Point 1", "Bullet Point 2",
                "Bullet Point 3", "Bullet Point 4", "Bullet Point 5", "UPC", "GTIN",
                "Description", "Locale", "Root Category", "Sub-Category", "Rating",
                "Rating Count", "Main Image", "Short Description", "Bullet Point 6", "EAN",
                "Category Tree", "Sales Rank 30d Avg", "Sales Rank 90d Avg",
                "Sales Rank 365d Avg",
            ],
        ),
        t(
            "Sales Overview",
            &["ASIN", "Title", "Sales Rank", "Buy Box Price", "Units Sold", "Revenue", "Returns"],
        ),
        t(
            "Customer Service",
            &["ASIN", "Title", "Return Rate", "Review Count", "Rating", "Feedback"],
        ),
    ]
}

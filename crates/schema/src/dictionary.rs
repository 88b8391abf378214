use std::collections::{HashMap, HashSet};

use serde::Deserialize;

use crate::error::SchemaError;

// ---------------------------------------------------------------------------
// Entries
// ---------------------------------------------------------------------------

/// One canonical attribute and the provider spellings known to mean it.
#[derive(Debug, Clone, Deserialize)]
pub struct SynonymEntry {
    pub standard: String,
    #[serde(default)]
    pub aliases: Vec<String>,
}

impl SynonymEntry {
    /// All names this entry answers to. The standard name is a de-facto
    /// alias of itself.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.standard.as_str()).chain(self.aliases.iter().map(String::as_str))
    }

    /// Case-insensitive membership across the full alias set.
    pub fn contains(&self, name: &str) -> bool {
        let lower = name.to_lowercase();
        self.names()
            .any(|n| !n.is_empty() && n.to_lowercase() == lower)
    }
}

// ---------------------------------------------------------------------------
// Dictionary
// ---------------------------------------------------------------------------

/// Read-only synonym dictionary with a precomputed reverse index from
/// lowercase alias to entry, so every lookup is O(1).
#[derive(Debug, Clone, Default)]
pub struct SynonymDictionary {
    entries: Vec<SynonymEntry>,
    index: HashMap<String, usize>,
}

#[derive(Debug, Deserialize)]
struct DictionaryFile {
    #[serde(default)]
    entry: Vec<SynonymEntry>,
}

impl SynonymDictionary {
    /// Empty alias strings are skipped (a provider may have no spelling for
    /// an attribute). When two entries claim the same alias the first entry
    /// wins, matching the first-hit scan of the original lookup.
    pub fn new(entries: Vec<SynonymEntry>) -> Self {
        let mut index = HashMap::new();
        for (i, entry) in entries.iter().enumerate() {
            for name in entry.names() {
                if name.is_empty() {
                    continue;
                }
                index.entry(name.to_lowercase()).or_insert(i);
            }
        }
        Self { entries, index }
    }

    pub fn from_toml(input: &str) -> Result<Self, SchemaError> {
        let file: DictionaryFile =
            toml::from_str(input).map_err(|e| SchemaError::ConfigParse(e.to_string()))?;

        let mut seen = HashSet::new();
        for entry in &file.entry {
            if entry.standard.is_empty() {
                return Err(SchemaError::ConfigValidation(
                    "entry with empty standard name".into(),
                ));
            }
            if !seen.insert(entry.standard.to_lowercase()) {
                return Err(SchemaError::ConfigValidation(format!(
                    "duplicate standard name '{}'",
                    entry.standard
                )));
            }
        }

        Ok(Self::new(file.entry))
    }

    pub fn entries(&self) -> &[SynonymEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entry whose alias set contains `name`, case-insensitively.
    pub fn entry_for(&self, name: &str) -> Option<&SynonymEntry> {
        self.index
            .get(&name.to_lowercase())
            .map(|&i| &self.entries[i])
    }

    /// Canonical name for `header`, or `header` unchanged when no entry
    /// matches. Never fails.
    pub fn resolve_standard_name<'a>(&'a self, header: &'a str) -> &'a str {
        self.entry_for(header)
            .map(|e| e.standard.as_str())
            .unwrap_or(header)
    }

    /// The master attribute key shipped with the product-data tooling:
    /// canonical attribute names plus their BigQuery, SmartScout, and Keepa
    /// export spellings.
    pub fn builtin() -> Self {
        fn e(standard: &str, aliases: &[&str]) -> SynonymEntry {
            SynonymEntry {
                standard: standard.into(),
                aliases: aliases.iter().map(|s| s.to_string()).collect(),
            }
        }

        Self::new(vec![
            e("ASIN", &[]),
            e("Title", &[]),
            e(
                "Sales Rank",
                &["sales_rank_current", "Main Category Rank", "Sales Rank: Current"],
            ),
            e(
                "Bullet Point 1",
                &["description_features_feature_1", "Description & Features: Feature 1"],
            ),
            e(
                "Bullet Point 2",
                &["description_features_feature_2", "Description & Features: Feature 2"],
            ),
            e(
                "Bullet Point 3",
                &["description_features_feature_3", "Description & Features: Feature 3"],
            ),
            e(
                "Bullet Point 4",
                &["description_features_feature_4", "Description & Features: Feature 4"],
            ),
            e(
                "Bullet Point 5",
                &["description_features_feature_5", "Description & Features: Feature 5"],
            ),
            e("UPC", &["product_codes_upc", "Product Codes: UPC"]),
            e("GTIN", &["product_codes_gtin", "Product Codes: GTIN"]),
            e(
                "Description",
                &["description_features_description", "Description & Features: Description"],
            ),
            e("Locale", &[]),
            e(
                "Root Category",
                &["categories_root", "Main Category Name", "Categories: Root"],
            ),
            e(
                "Sub-Category",
                &["categories_sub", "Primary Subcategory Name", "Categories: Sub"],
            ),
            e("Rating", &["reviews_rating", "Reviews: Rating"]),
            e(
                "Rating Count",
                &["reviews_rating_count", "Listing Review Count", "Reviews: Rating Count"],
            ),
            e("Main Image", &["image", "Product Image", "Image"]),
            e(
                "Short Description",
                &[
                    "description_features_short_description",
                    "Description & Features: Short Description",
                ],
            ),
            e(
                "Bullet Point 6",
                &["description_features_feature_6", "Description & Features: Feature 6"],
            ),
            e("EAN", &["product_codes_ean", "Product Codes: EAN"]),
            e("Category Tree", &["categories_tree", "Categories: Tree"]),
            e("Adult Product", &["adult_product"]),
            e("Deal Type", &["deals_deal_type", "Deals: Deal Type"]),
            e("Badge", &["deals_badge", "Deals: Badge"]),
            e(
                "Subscribe & Save",
                &["buy_box_subscribe_and_save", "Buy Box: Subscribe & Save"],
            ),
            e("Is a Variation", &["is_variation", "Is Variation"]),
            e("SmartScout Page Score", &["page_score", "Page Score"]),
            e("Amazon In-Stock Rate", &["amazon_instock_rate"]),
            e(
                "Is Buy Box Suppressed",
                &["buy_box_suppression", "Buy Box Suppression"],
            ),
        ])
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_known_alias() {
        let dict = SynonymDictionary::builtin();
        assert_eq!(dict.resolve_standard_name("Product Codes: UPC"), "UPC");
        assert_eq!(dict.resolve_standard_name("sales_rank_current"), "Sales Rank");
        assert_eq!(dict.resolve_standard_name("Main Category Name"), "Root Category");
    }

    #[test]
    fn resolve_is_case_insensitive() {
        let dict = SynonymDictionary::builtin();
        assert_eq!(dict.resolve_standard_name("PRODUCT CODES: upc"), "UPC");
        assert_eq!(dict.resolve_standard_name("asin"), "ASIN");
        assert_eq!(dict.resolve_standard_name("AsIn"), "ASIN");
    }

    #[test]
    fn resolve_unknown_returns_input() {
        let dict = SynonymDictionary::builtin();
        assert_eq!(dict.resolve_standard_name("Warehouse Zone"), "Warehouse Zone");
        assert_eq!(dict.resolve_standard_name(""), "");
    }

    #[test]
    fn standard_name_resolves_to_itself() {
        let dict = SynonymDictionary::builtin();
        assert_eq!(dict.resolve_standard_name("Sales Rank"), "Sales Rank");
    }

    #[test]
    fn first_entry_wins_on_alias_overlap() {
        let dict = SynonymDictionary::new(vec![
            SynonymEntry { standard: "Color".into(), aliases: vec!["colour".into()] },
            SynonymEntry { standard: "Shade".into(), aliases: vec!["Colour".into()] },
        ]);
        assert_eq!(dict.resolve_standard_name("COLOUR"), "Color");
    }

    #[test]
    fn empty_aliases_never_match() {
        let dict = SynonymDictionary::new(vec![SynonymEntry {
            standard: "UPC".into(),
            aliases: vec!["".into()],
        }]);
        assert_eq!(dict.resolve_standard_name(""), "");
    }

    #[test]
    fn from_toml_roundtrip() {
        let input = r#"
[[entry]]
standard = "UPC"
aliases = ["Product Codes: UPC", "product_codes_upc"]

[[entry]]
standard = "Title"
"#;
        let dict = SynonymDictionary::from_toml(input).unwrap();
        assert_eq!(dict.len(), 2);
        assert_eq!(dict.resolve_standard_name("product_codes_upc"), "UPC");
        assert_eq!(dict.resolve_standard_name("title"), "Title");
    }

    #[test]
    fn from_toml_rejects_duplicate_standard() {
        let input = r#"
[[entry]]
standard = "UPC"

[[entry]]
standard = "upc"
"#;
        let err = SynonymDictionary::from_toml(input).unwrap_err();
        assert!(err.to_string().contains("duplicate standard name"));
    }

    #[test]
    fn from_toml_rejects_empty_standard() {
        let input = r#"
[[entry]]
standard = ""
aliases = ["x"]
"#;
        assert!(SynonymDictionary::from_toml(input).is_err());
    }

    #[test]
    fn entry_contains_full_alias_set() {
        let dict = SynonymDictionary::builtin();
        let entry = dict.entry_for("UPC").unwrap();
        assert!(entry.contains("upc"));
        assert!(entry.contains("PRODUCT CODES: UPC"));
        assert!(!entry.contains("GTIN"));
    }
}

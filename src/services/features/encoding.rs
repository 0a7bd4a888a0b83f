use std::collections::{BTreeSet, HashMap};

use crate::error::{AppError, AppResult};

/// Maps categorical values to integer codes
///
/// The code of a category is its position in `categories`. Building the list
/// from sorted distinct values makes the codes independent of row order.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryEncoder {
    categories: Vec<String>,
    codes: HashMap<String, usize>,
}

impl CategoryEncoder {
    /// Learns categories as the sorted distinct values
    pub fn fit_sorted<'a, I>(values: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let distinct: BTreeSet<&str> = values.into_iter().collect();
        Self::from_categories(distinct.into_iter().map(str::to_string).collect())
    }

    /// Uses an externally declared category order
    pub fn declared<I, S>(categories: I) -> AppResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let categories: Vec<String> = categories.into_iter().map(Into::into).collect();
        let distinct: BTreeSet<&str> = categories.iter().map(String::as_str).collect();
        if distinct.len() != categories.len() {
            return Err(AppError::Configuration(
                "declared categories contain duplicates".to_string(),
            ));
        }
        Ok(Self::from_categories(categories))
    }

    fn from_categories(categories: Vec<String>) -> Self {
        let codes = categories
            .iter()
            .enumerate()
            .map(|(code, category)| (category.clone(), code))
            .collect();
        Self { categories, codes }
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn encode(&self, value: &str) -> AppResult<usize> {
        self.codes
            .get(value)
            .copied()
            .ok_or_else(|| AppError::Data(format!("unknown category '{}'", value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_codes_independent_of_input_order() {
        let forward = CategoryEncoder::fit_sorted(["G", "15+", "18+", "15+"]);
        let backward = CategoryEncoder::fit_sorted(["18+", "15+", "G"]);

        assert_eq!(forward, backward);
        assert_eq!(forward.encode("15+").unwrap(), 0);
        assert_eq!(forward.encode("18+").unwrap(), 1);
        assert_eq!(forward.encode("G").unwrap(), 2);
    }

    #[test]
    fn test_declared_order_is_respected() {
        let encoder = CategoryEncoder::declared(["G", "15+", "18+"]).unwrap();
        assert_eq!(encoder.encode("G").unwrap(), 0);
        assert_eq!(encoder.encode("18+").unwrap(), 2);
    }

    #[test]
    fn test_unknown_category_is_data_error() {
        let encoder = CategoryEncoder::declared(["G"]).unwrap();
        assert!(matches!(encoder.encode("R"), Err(AppError::Data(_))));
    }

    #[test]
    fn test_declared_duplicates_rejected() {
        assert!(CategoryEncoder::declared(["G", "G"]).is_err());
    }
}

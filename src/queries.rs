//! The fixed query taxonomy driven against the service under evaluation.

use serde::{Deserialize, Serialize};

/// A named group of related test queries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryCategory {
    /// Category name, used as the top-level key in the report.
    pub name: String,
    /// Queries evaluated for this category, in order.
    pub queries: Vec<String>,
}

impl QueryCategory {
    pub fn new(name: impl Into<String>, queries: Vec<String>) -> Self {
        Self {
            name: name.into(),
            queries,
        }
    }
}

/// An ordered set of query categories, fixed for the duration of a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuerySet {
    /// Categories in evaluation order.
    pub categories: Vec<QueryCategory>,
}

impl QuerySet {
    /// Create an empty query set.
    pub fn new() -> Self {
        Self {
            categories: Vec::new(),
        }
    }

    /// Add a category with its queries.
    pub fn add_category(
        &mut self,
        name: impl Into<String>,
        queries: impl IntoIterator<Item = impl Into<String>>,
    ) {
        self.categories.push(QueryCategory::new(
            name,
            queries.into_iter().map(Into::into).collect(),
        ));
    }

    /// Number of categories.
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// Total number of queries across all categories.
    pub fn query_count(&self) -> usize {
        self.categories.iter().map(|c| c.queries.len()).sum()
    }

    /// Check if the set contains no queries.
    pub fn is_empty(&self) -> bool {
        self.query_count() == 0
    }
}

impl Default for QuerySet {
    /// The built-in taxonomy of city-services queries exercised by the harness.
    fn default() -> Self {
        let mut set = QuerySet::new();
        set.add_category(
            "Контакты",
            [
                "Найти контакты ЖКХ",
                "Управляющая компания Петроградского района",
                "Телефон диспетчерской службы",
            ],
        );
        set.add_category(
            "Городские услуги",
            [
                "Как сообщить о проблеме с благоустройством",
                "Ремонт дорог в Санкт-Петербурге",
                "Куда жаловаться на коммунальные услуги",
            ],
        );
        set.add_category(
            "Образование",
            [
                "Как записать ребенка в детский сад",
                "Информация о школах Санкт-Петербурга",
                "Дополнительное образование для детей",
            ],
        );
        set.add_category(
            "Развлечения",
            [
                "Афиша Санкт-Петербурга",
                "Музеи и театры",
                "Культурные события этой недели",
            ],
        );
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_taxonomy_shape() {
        let set = QuerySet::default();
        assert_eq!(set.category_count(), 4);
        assert_eq!(set.query_count(), 12);

        let names: Vec<_> = set.categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            ["Контакты", "Городские услуги", "Образование", "Развлечения"]
        );
        assert!(set.categories.iter().all(|c| c.queries.len() == 3));
    }

    #[test]
    fn test_add_category_preserves_order() {
        let mut set = QuerySet::new();
        assert!(set.is_empty());

        set.add_category("first", ["a", "b"]);
        set.add_category("second", ["c"]);

        assert_eq!(set.categories[0].name, "first");
        assert_eq!(set.categories[1].name, "second");
        assert_eq!(set.query_count(), 3);
    }
}

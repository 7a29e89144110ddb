use crate::utils::error::ProxyError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// SWAPI 的資源分類，同時也是上游 URL 的路徑段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    People,
    Films,
    Starships,
    Planets,
    Species,
    Vehicles,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::People,
        Category::Films,
        Category::Starships,
        Category::Planets,
        Category::Species,
        Category::Vehicles,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::People => "people",
            Category::Films => "films",
            Category::Starships => "starships",
            Category::Planets => "planets",
            Category::Species => "species",
            Category::Vehicles => "vehicles",
        }
    }

    /// Films are titled, everything else is named.
    pub fn sort_key(&self) -> &'static str {
        match self {
            Category::Films => "title",
            _ => "name",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ProxyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| ProxyError::InvalidCategory {
                value: s.to_string(),
            })
    }
}

/// One upstream record. The schema differs per category, so it stays untyped.
pub type Record = serde_json::Map<String, serde_json::Value>;

/// Parsed body of a SWAPI list endpoint. `count`/`next`/`previous` are only logged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogPage {
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    #[serde(default)]
    pub results: Vec<Record>,
}

/// The query parameters the handler understands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub category: Option<String>,
    pub search: Option<String>,
    pub sort: bool,
}

impl Query {
    /// 第一次出現的值為準；`sort` 只看有沒有出現
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut query = Query::default();
        for (key, value) in pairs {
            match key.as_ref() {
                "category" if query.category.is_none() => query.category = Some(value.into()),
                "search" if query.search.is_none() => query.search = Some(value.into()),
                "sort" => query.sort = true,
                _ => {}
            }
        }
        query
    }
}

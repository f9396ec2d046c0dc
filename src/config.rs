use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub catalog: CatalogSection,
    #[serde(default)]
    pub recommend: RecommendSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogSection {
    /// File path or http(s) URL of the product CSV
    pub source: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendSection {
    #[serde(default = "default_top_n")]
    pub top_n: usize,
}

fn default_top_n() -> usize {
    3
}

impl Default for RecommendSection {
    fn default() -> Self {
        RecommendSection { top_n: default_top_n() }
    }
}

impl AppConfig {
    pub fn from_file(path: &str) -> Result<Self, anyhow::Error> {
        let content = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&content)?;
        Ok(config)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            catalog: CatalogSection {
                source: "data/products.csv".to_string(),
            },
            recommend: RecommendSection::default(),
        }
    }
}

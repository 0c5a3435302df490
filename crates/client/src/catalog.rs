use serde::Deserialize;
use std::collections::BTreeMap;

const EMBEDDED: &str = include_str!("../assets/puzzles.json");

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PuzzleEntry {
    pub image: String,
    pub message: String,
    pub link: String,
}

/// Pictures selectable through the `id` query parameter, with the entry used
/// for missing or unknown ids.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Catalog {
    pub fallback: PuzzleEntry,
    #[serde(default)]
    pub puzzles: BTreeMap<String, PuzzleEntry>,
}

impl Catalog {
    pub fn parse(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn embedded() -> Self {
        match Self::parse(EMBEDDED) {
            Ok(catalog) => catalog,
            Err(err) => {
                log::error!("invalid puzzle catalog: {}", err);
                Self::builtin()
            }
        }
    }

    fn builtin() -> Self {
        Catalog {
            fallback: PuzzleEntry {
                image: "pictures/default.webp".to_string(),
                message: "¡Ganaste! 🎉".to_string(),
                link: "index.html".to_string(),
            },
            puzzles: BTreeMap::new(),
        }
    }

    pub fn resolve(&self, id: Option<&str>) -> &PuzzleEntry {
        id.and_then(|id| self.puzzles.get(id))
            .unwrap_or(&self.fallback)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_embedded_catalog() {
        let catalog = Catalog::parse(EMBEDDED).unwrap();
        assert_eq!(catalog.fallback.image, "pictures/default.webp");
        assert_eq!(catalog.puzzles.len(), 7);
        for id in ["d1", "d2", "d3", "d4", "d5", "d6", "d7"] {
            let entry = catalog.resolve(Some(id));
            assert_eq!(entry.image, format!("pictures/{}.webp", id));
            assert_ne!(entry.link, catalog.fallback.link);
        }
    }

    #[test]
    fn test_resolve_falls_back() {
        let catalog = Catalog::embedded();
        assert_eq!(catalog.resolve(None), &catalog.fallback);
        assert_eq!(catalog.resolve(Some("d9")), &catalog.fallback);
        assert_eq!(catalog.resolve(Some("")), &catalog.fallback);
    }

    #[test]
    fn test_parse_without_puzzles() {
        let catalog = Catalog::parse(
            r#"{"fallback": {"image": "a.webp", "message": "hi", "link": "b.html"}}"#,
        )
        .unwrap();
        assert!(catalog.puzzles.is_empty());
        assert_eq!(catalog.resolve(Some("d1")).image, "a.webp");
        assert!(Catalog::parse("{}").is_err());
    }

    #[test]
    fn test_builtin_matches_embedded_fallback() {
        assert_eq!(Catalog::builtin().fallback, Catalog::embedded().fallback);
    }
}

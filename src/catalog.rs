//! The film catalog behind the work grid. The data ships inside the binary;
//! there is no backend to fetch it from.

use serde::Deserialize;

const FILMS_JSON: &str = include_str!("../assets/films.json");

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Film {
    pub title: String,
    #[serde(default)]
    pub director: Option<String>,
    /// Full-size media played in the lightbox.
    pub src: String,
    /// Poster image shown in the grid.
    pub thumb: String,
    /// Optional muted preview clip layered over the poster on hover.
    #[serde(default)]
    pub preview: Option<String>,
    /// Explicit preview frame, absolute seconds. When absent the preview
    /// rests on a frame derived from its duration.
    #[serde(default)]
    pub preview_seek: Option<f64>,
    #[serde(default)]
    pub year: Option<u16>,
}

impl Film {
    /// Credit line shown under the title, empty when no director is listed.
    pub fn director_credit(&self) -> String {
        match self.director.as_deref() {
            Some(name) if !name.is_empty() => format!("Dir. {name}"),
            _ => String::new(),
        }
    }
}

/// Parse the embedded catalog. A malformed catalog is logged and rendered
/// as an empty grid rather than taking the page down.
pub fn films() -> Vec<Film> {
    match serde_json::from_str::<Vec<Film>>(FILMS_JSON) {
        Ok(films) => films,
        Err(err) => {
            log::error!("film catalog failed to parse: {err}");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_embedded_catalog_parses() {
        let films = films();
        assert!(!films.is_empty());
        assert!(films.iter().all(|f| !f.title.is_empty()));
        assert!(films.iter().all(|f| f.src.starts_with("/assets/")));
    }

    #[test]
    fn test_catalog_field_mapping() {
        let film: Film = serde_json::from_str(
            r#"{
                "title": "Short Film",
                "director": "J. Doe",
                "src": "/assets/films/short.mp4",
                "thumb": "/assets/thumbs/short.jpg",
                "preview_seek": 4.0,
                "year": 2024
            }"#,
        )
        .unwrap();
        assert_eq!(film.title, "Short Film");
        assert_eq!(film.preview_seek, Some(4.0));
        assert_eq!(film.preview, None);
        assert_eq!(film.year, Some(2024));
    }

    #[test]
    fn test_director_credit_formatting() {
        let mut film: Film = serde_json::from_str(
            r#"{"title": "Short Film", "director": "J. Doe", "src": "/assets/a.mp4", "thumb": "/assets/a.jpg"}"#,
        )
        .unwrap();
        assert_eq!(film.director_credit(), "Dir. J. Doe");

        film.director = None;
        assert_eq!(film.director_credit(), "");

        film.director = Some(String::new());
        assert_eq!(film.director_credit(), "");
    }
}

use std::fmt;

/// Navigable locations of the exhibition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/`
    Landing,
    /// `/gallery`
    Gallery,
    /// `/paintings/{id}`
    Painting(String),
    /// Anything else; rendered as not found.
    Unknown(String),
}

impl Route {
    pub fn parse(path: &str) -> Self {
        let raw = path.trim();
        let path = raw.trim_end_matches('/');

        match path {
            "" => Route::Landing,
            "/gallery" => Route::Gallery,
            _ => match path.strip_prefix("/paintings/") {
                Some(id) if !id.is_empty() && !id.contains('/') => Route::Painting(id.to_string()),
                _ => Route::Unknown(raw.to_string()),
            },
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Landing => "/".to_string(),
            Route::Gallery => "/gallery".to_string(),
            Route::Painting(id) => format!("/paintings/{id}"),
            Route::Unknown(raw) => raw.clone(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

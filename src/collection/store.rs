use crate::error::LookupError;

use super::model::Artwork;

static ARTWORKS: &[Artwork] = &[
    Artwork {
        id: "1",
        title: "Mona Lisa",
        description: "The enigmatic portrait of Lisa Gherardini, wife of a Florentine merchant, painted by Leonardo da Vinci during the Italian Renaissance. Her mysterious smile and penetrating gaze have captivated viewers for centuries. The artist's mastery of sfumato, a technique of subtle gradations of light and shadow, creates an almost ethereal quality. The landscape behind her adds depth and mystery, while her pose demonstrates Leonardo's understanding of human anatomy and expression, making this one of the most famous and enigmatic paintings in the world.",
        image: "paintings/monalisa.png",
        sound: "sounds/monalisa.mp3",
        year: Some("1503-1519"),
        artist: Some("Leonardo da Vinci"),
    },
    Artwork {
        id: "2",
        title: "Starry Night",
        description: "A swirling night sky over the French village of Saint-Rémy-de-Provence, painted from memory during the day while Van Gogh was in an asylum. The dynamic sky pulses with energy, featuring bold brushstrokes that create movement and rhythm. A dark cypress tree in the foreground reaches upward like a flame toward the rolling celestial dance above. The painting represents both turbulent emotion and profound beauty, capturing the artist's unique vision of the cosmos and his connection to nature during a period of great personal struggle.",
        image: "paintings/stary-night.webp",
        sound: "sounds/stary-night.mp3",
        year: Some("1889"),
        artist: Some("Vincent van Gogh"),
    },
];

/// The artworks adjacent to a given one in navigation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbors<'a> {
    pub previous: Option<&'a Artwork>,
    pub next: Option<&'a Artwork>,
}

/// Read-only view over an ordered list of artworks.
#[derive(Debug, Clone, Copy)]
pub struct Collection<'a> {
    items: &'a [Artwork],
}

impl Collection<'static> {
    /// The exhibition's built-in collection.
    pub fn builtin() -> Self {
        Self { items: ARTWORKS }
    }
}

impl<'a> Collection<'a> {
    pub fn new(items: &'a [Artwork]) -> Self {
        Self { items }
    }

    /// All artworks in navigation order.
    pub fn artworks(&self) -> &'a [Artwork] {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&'a Artwork> {
        self.items.get(index)
    }

    /// Index of the artwork with `id`, if any.
    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|a| a.id == id)
    }

    /// Look up an artwork by id. The list is tiny, so this is a linear scan.
    pub fn find_by_id(&self, id: &str) -> Result<&'a Artwork, LookupError> {
        self.items
            .iter()
            .find(|a| a.id == id)
            .ok_or_else(|| LookupError::NotFound { id: id.to_string() })
    }

    /// Previous/next artworks of `id` by list position; both `None` at the boundaries.
    pub fn find_neighbors(&self, id: &str) -> Result<Neighbors<'a>, LookupError> {
        let index = self
            .position_of(id)
            .ok_or_else(|| LookupError::NotFound { id: id.to_string() })?;

        let previous = index.checked_sub(1).and_then(|i| self.items.get(i));
        let next = self.items.get(index + 1);
        Ok(Neighbors { previous, next })
    }
}

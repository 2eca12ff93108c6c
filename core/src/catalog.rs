use alloc::string::{String, ToString};
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// A category players can choose from the menu.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Category {
    pub id: &'static str,
    pub name: &'static str,
}

pub const DEFAULT_CATEGORIES: [Category; 3] = [
    Category {
        id: "animals",
        name: "Animals",
    },
    Category {
        id: "objects",
        name: "Objects",
    },
    Category {
        id: "food",
        name: "Food",
    },
];

pub const IMAGE_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "gif", "webp", "bmp"];

/// The `image-list.json` document listing image file names.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageManifest {
    pub images: Vec<String>,
}

impl ImageManifest {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|err| GameError::InvalidManifest(err.to_string()))
    }

    pub fn is_image_file(file_name: &str) -> bool {
        match file_name.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() => IMAGE_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext)),
            _ => false,
        }
    }

    /// Image files of the manifest, other entries are skipped.
    pub fn image_files(&self) -> impl Iterator<Item = &str> + '_ {
        self.images.iter().map(String::as_str).filter(|&file| {
            let keep = Self::is_image_file(file);
            if !keep {
                log::warn!("Skipping manifest entry that is not an image: {file}");
            }
            keep
        })
    }
}

/// In-memory list of puzzles to pick rounds from.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageCatalog {
    images: Vec<PixelImage>,
}

impl ImageCatalog {
    pub fn new(images: Vec<PixelImage>) -> Self {
        Self { images }
    }

    /// Builds a catalog from a manifest, every image shares the given
    /// category, difficulty and grid size.
    pub fn from_manifest(
        manifest: &ImageManifest,
        category: &str,
        difficulty: Difficulty,
        grid_size: Coord,
    ) -> Result<Self> {
        let images = manifest
            .image_files()
            .map(|file| PixelImage::from_file_name(file, category, difficulty, grid_size))
            .collect::<Result<Vec<_>>>()?;
        log::debug!("Loaded {} images into category {}", images.len(), category);
        Ok(Self::new(images))
    }

    pub fn push(&mut self, image: PixelImage) {
        self.images.push(image);
    }

    pub fn extend(&mut self, other: ImageCatalog) {
        self.images.extend(other.images);
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn images(&self) -> &[PixelImage] {
        &self.images
    }

    pub fn in_category<'a>(&'a self, category: &str) -> impl Iterator<Item = &'a PixelImage> {
        self.images
            .iter()
            .filter(move |image| image.category == category)
    }

    pub fn find(&self, id: &str) -> Option<&PixelImage> {
        self.images.iter().find(|image| image.id == id)
    }

    /// Seeded uniform pick across every category.
    pub fn pick_random(&self, seed: u64) -> Result<&PixelImage> {
        let candidates: Vec<_> = self.images.iter().collect();
        Self::pick_from(&candidates, seed).ok_or(GameError::EmptyCatalog)
    }

    /// Seeded uniform pick within one category.
    pub fn pick_random_in(&self, category: &str, seed: u64) -> Result<&PixelImage> {
        if self.is_empty() {
            return Err(GameError::EmptyCatalog);
        }
        let candidates: Vec<&PixelImage> = self
            .images
            .iter()
            .filter(|image| image.category == category)
            .collect();
        Self::pick_from(&candidates, seed)
            .ok_or_else(|| GameError::UnknownCategory(category.to_string()))
    }

    fn pick_from<'a>(candidates: &[&'a PixelImage], seed: u64) -> Option<&'a PixelImage> {
        use rand::prelude::*;

        let mut rng = SmallRng::seed_from_u64(seed);
        candidates.choose(&mut rng).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn catalog() -> ImageCatalog {
        let manifest = ImageManifest::from_json(
            r#"{"images": ["cat.jpg", "dog.PNG", "notes.txt", ".hidden", "image-list.json"]}"#,
        )
        .unwrap();
        let mut catalog =
            ImageCatalog::from_manifest(&manifest, "animals", Difficulty::Easy, 16).unwrap();
        catalog.push(
            PixelImage::new("food/pizza", "pizza", "food", "/images/pizza.png", 12, Difficulty::Hard)
                .unwrap(),
        );
        catalog
    }

    #[test]
    fn manifest_keeps_only_image_files() {
        let catalog = catalog();

        let names: Vec<_> = catalog.images().iter().map(|image| image.name.as_str()).collect();
        assert_eq!(names, vec!["cat", "dog", "pizza"]);
        assert_eq!(catalog.find("animals/dog").unwrap().grid_size, 16);
    }

    #[test]
    fn malformed_manifest_is_an_error() {
        assert!(matches!(
            ImageManifest::from_json(r#"{"files": []}"#),
            Err(GameError::InvalidManifest(_))
        ));
    }

    #[test]
    fn random_pick_is_reproducible() {
        let catalog = catalog();

        let a = catalog.pick_random(9).unwrap();
        let b = catalog.pick_random(9).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn category_pick_stays_in_category() {
        let catalog = catalog();

        for seed in 0..20 {
            assert_eq!(catalog.pick_random_in("animals", seed).unwrap().category, "animals");
        }
        assert_eq!(catalog.pick_random_in("food", 3).unwrap().name, "pizza");
        assert_eq!(
            catalog.pick_random_in("vehicles", 0),
            Err(GameError::UnknownCategory("vehicles".into()))
        );
    }

    #[test]
    fn picked_image_outlives_category_key() {
        let catalog = catalog();

        let picked = {
            let category = String::from("food");
            catalog.pick_random_in(&category, 1).unwrap()
        };
        assert_eq!(picked.name, "pizza");
        assert_eq!(catalog.in_category("animals").count(), 2);
    }

    #[test]
    fn empty_catalog_cannot_pick() {
        let catalog = ImageCatalog::default();

        assert_eq!(catalog.pick_random(0), Err(GameError::EmptyCatalog));
        assert_eq!(catalog.pick_random_in("animals", 0), Err(GameError::EmptyCatalog));
    }
}

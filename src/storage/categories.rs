//! Category repository for JSON storage

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::HorizonResult;
use crate::models::{Category, CategoryId, CategoryKind};

use super::file_io::{read_json, write_json_atomic};
use super::{read_lock, write_lock};

/// On-disk layout of categories.json
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct CategoryData {
    pub categories: Vec<Category>,
}

/// Repository for category persistence
pub struct CategoryRepository {
    path: PathBuf,
    data: RwLock<HashMap<CategoryId, Category>>,
}

impl CategoryRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    pub fn load(&self) -> HorizonResult<()> {
        let file_data: CategoryData = read_json(&self.path)?;
        let mut data = write_lock(&self.data)?;
        data.clear();
        for category in file_data.categories {
            data.insert(category.id, category);
        }
        Ok(())
    }

    pub fn save(&self) -> HorizonResult<()> {
        let categories = self.get_all()?;
        write_json_atomic(&self.path, &CategoryData { categories })
    }

    pub fn get(&self, id: CategoryId) -> HorizonResult<Option<Category>> {
        Ok(read_lock(&self.data)?.get(&id).cloned())
    }

    /// All categories, income first, then by name
    pub fn get_all(&self) -> HorizonResult<Vec<Category>> {
        let mut categories: Vec<_> = read_lock(&self.data)?.values().cloned().collect();
        categories.sort_by(|a, b| {
            kind_rank(a.kind)
                .cmp(&kind_rank(b.kind))
                .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        });
        Ok(categories)
    }

    /// Find a category by ID (full or short form) or by name (case-insensitive)
    pub fn find(&self, identifier: &str) -> HorizonResult<Option<Category>> {
        let data = read_lock(&self.data)?;
        if let Some(category) = data.values().find(|c| c.id.matches(identifier)) {
            return Ok(Some(category.clone()));
        }
        let name_lower = identifier.trim().to_lowercase();
        Ok(data
            .values()
            .find(|c| c.name.to_lowercase() == name_lower)
            .cloned())
    }

    pub fn upsert(&self, category: Category) -> HorizonResult<()> {
        write_lock(&self.data)?.insert(category.id, category);
        Ok(())
    }

    pub fn exists(&self, id: CategoryId) -> HorizonResult<bool> {
        Ok(read_lock(&self.data)?.contains_key(&id))
    }

    pub fn name_exists(&self, name: &str) -> HorizonResult<bool> {
        let name_lower = name.trim().to_lowercase();
        Ok(read_lock(&self.data)?
            .values()
            .any(|c| c.name.to_lowercase() == name_lower))
    }

    pub fn count(&self) -> HorizonResult<usize> {
        Ok(read_lock(&self.data)?.len())
    }
}

fn kind_rank(kind: CategoryKind) -> u8 {
    match kind {
        CategoryKind::Income => 0,
        CategoryKind::Expense => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_save_reload_and_order() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("categories.json");
        let repo = CategoryRepository::new(path.clone());

        repo.upsert(Category::new("Rent", CategoryKind::Expense)).unwrap();
        repo.upsert(Category::new("Salary", CategoryKind::Income)).unwrap();
        repo.upsert(Category::new("Groceries", CategoryKind::Expense)).unwrap();
        repo.save().unwrap();

        let reloaded = CategoryRepository::new(path);
        reloaded.load().unwrap();
        let names: Vec<_> = reloaded
            .get_all()
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["Salary", "Groceries", "Rent"]);
    }

    #[test]
    fn test_find() {
        let temp_dir = TempDir::new().unwrap();
        let repo = CategoryRepository::new(temp_dir.path().join("categories.json"));
        let category = Category::new("Dining Out", CategoryKind::Expense);
        let id = category.id;
        repo.upsert(category).unwrap();

        assert_eq!(repo.find("dining out").unwrap().unwrap().id, id);
        assert_eq!(repo.find(&id.as_uuid().to_string()).unwrap().unwrap().id, id);
        assert!(repo.name_exists("DINING OUT").unwrap());
        assert!(repo.find("travel").unwrap().is_none());
    }
}

//! Category service

use crate::audit::EntityType;
use crate::error::{HorizonError, HorizonResult};
use crate::models::{Category, CategoryId, CategoryKind};
use crate::storage::Storage;

/// Service for category management
pub struct CategoryService<'a> {
    storage: &'a Storage,
}

impl<'a> CategoryService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new category
    pub fn create(&self, name: &str, kind: CategoryKind) -> HorizonResult<Category> {
        let name = name.trim();
        if name.is_empty() {
            return Err(HorizonError::Validation("Category name cannot be empty".into()));
        }

        if self.storage.categories.name_exists(name)? {
            return Err(HorizonError::Duplicate {
                entity_type: "Category",
                identifier: name.to_string(),
            });
        }

        let category = Category::new(name, kind);
        category
            .validate()
            .map_err(|e| HorizonError::Validation(e.to_string()))?;

        self.storage.categories.upsert(category.clone())?;
        self.storage.categories.save()?;

        self.storage.log_create(
            EntityType::Category,
            category.id.to_string(),
            Some(category.name.clone()),
            &category,
        )?;

        Ok(category)
    }

    pub fn get(&self, id: CategoryId) -> HorizonResult<Option<Category>> {
        self.storage.categories.get(id)
    }

    /// Find a category by name or ID string
    pub fn find(&self, identifier: &str) -> HorizonResult<Option<Category>> {
        self.storage.categories.find(identifier)
    }

    pub fn list(&self) -> HorizonResult<Vec<Category>> {
        self.storage.categories.get_all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::HorizonPaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = HorizonPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_create_and_find() {
        let (_temp_dir, storage) = create_test_storage();
        let service = CategoryService::new(&storage);

        let created = service.create("  Groceries ", CategoryKind::Expense).unwrap();
        assert_eq!(created.name, "Groceries");
        assert_eq!(service.find("groceries").unwrap().unwrap().id, created.id);
        assert_eq!(service.list().unwrap().len(), 1);
    }

    #[test]
    fn test_rejects_duplicates_and_blank_names() {
        let (_temp_dir, storage) = create_test_storage();
        let service = CategoryService::new(&storage);

        service.create("Salary", CategoryKind::Income).unwrap();
        assert!(matches!(
            service.create("SALARY", CategoryKind::Income),
            Err(HorizonError::Duplicate { .. })
        ));
        assert!(service.create("   ", CategoryKind::Expense).unwrap_err().is_validation());
    }
}

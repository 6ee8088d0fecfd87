pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_event_categories;
mod m20250301_000002_create_event_organizers;
mod m20250301_000003_create_events;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_event_categories::Migration),
            Box::new(m20250301_000002_create_event_organizers::Migration),
            Box::new(m20250301_000003_create_events::Migration),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_migrations_are_ordered_by_name() {
        let names: Vec<String> = Migrator::migrations()
            .iter()
            .map(|m| m.name().to_string())
            .collect();

        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
        assert_eq!(names.len(), 3);
    }
}

pub mod github_registry;

pub mod hazard;

pub const DEFAULT_MIGRATIONS_PATH: &str = "db/migrate";
pub const DEFAULT_REVERT_COMMAND: &str = "rake db:migrate:down VERSION={version}";
pub const VERSION_PLACEHOLDER: &str = "{version}";

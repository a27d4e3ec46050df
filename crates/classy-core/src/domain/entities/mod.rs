pub mod command;
pub mod rename;
pub mod template_dirs;

pub use command::{DEFAULT_GENERATOR, GeneratorCommand};
pub use rename::{RENAME_MAPPING, RenamePair, ResolvedRename, plan_renames};
pub use template_dirs::TemplateDirs;

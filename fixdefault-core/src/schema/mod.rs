mod enum_set;
mod fixer;
mod processor;
mod rules;
mod scanner;
mod splicer;
mod types;


// 重新导出公共接口
pub use enum_set::first_enum_value;
pub use fixer::{fix_defaults, fix_defaults_str};
pub use processor::TableProcessor;
pub use rules::{DefaultRule, DefaultRules, builtin_rule};
pub use scanner::SchemaScanner;
pub use splicer::{SpliceOutcome, inject_default, terminate_statement};
pub use types::{ColumnDef, SourceLine, TableBlock};

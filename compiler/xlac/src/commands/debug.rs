//! Debug command: `parse` for inspecting the normalized tree.

use xla_ir::dump_tree;

use super::{read_file, report};
use crate::{check_source, CliError, RunConfig};

/// Parse a file and print its tree, one node per line.
pub fn parse_file(config: &RunConfig) -> Result<(), CliError> {
    let path = config.display_path();
    let source = read_file(&path)?;
    match check_source(&source) {
        Ok(tree) => {
            println!("Parse result for '{path}':");
            print!("{}", dump_tree(&tree));
            Ok(())
        }
        Err(diagnostic) => {
            report(&diagnostic, &source, config);
            Err(CliError::Reported)
        }
    }
}

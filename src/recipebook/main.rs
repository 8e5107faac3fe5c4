//! # Recipebook CLI
//!
//! The binary is intentionally thin: everything lives in `src/recipebook/cli/`, and
//! this file only invokes `cli::run()` and handles process termination.
//!
//! ## Session Model
//!
//! Each invocation is one short session against the remote store:
//!
//! 1. Resolve configuration (flag, environment, `config.json`, default).
//! 2. `load()` the collection.
//! 3. Run the requested operation through the `RecipeBook` facade.
//! 4. Print the resulting view and any messages.
//!
//! Rejected submits (missing fields, failed save) exit with status 1 and print the
//! session's error message. Failed loads and deletes only show up in the log output
//! on stderr, the same as in the library.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

//! Binary that emits command-line options markdown to stdout.
//!
//! Used by the docs build to refresh `docs/reference/command-line-options.md`
//! before mdbook runs.

fn main() {
    print!("{}", csvista_cli::render_options_markdown());
}

/// Usage banner printed by `help` and for any unrecognised subcommand.
pub const USAGE: &str = "\
buildtask

Helpful sets of commands for developing this project.
Building the project does not require any of these; use cargo as normal.

Usage: buildtask [-v] [-q] [-C <DIR>] [--config <FILE>] <SUBCOMMAND> [ARGS]...

Subcommands:
  help                        Print this message.
  ci                          Run all CI checks.
  web-bin [release] <NAME>    Build the given example for wasm into target/generated.
  serve                       Serve target/generated using simple-http-server.
  download-assets             Download all assets needed for the examples.
  update-readme               Regenerate README.md with cargo-readme.
";

pub fn print_usage() {
    print!("{USAGE}");
}

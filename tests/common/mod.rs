use assert_cmd::Command;

pub fn twolist_cmd() -> Command {
    let mut cmd = Command::cargo_bin("twolist").unwrap();
    cmd.env_remove("TWOLIST_ROOT");
    cmd.env_remove("RUST_LOG");
    cmd
}

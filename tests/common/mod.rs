use assert_cmd::Command;

pub fn metahead_cmd() -> Command {
    let mut cmd = Command::cargo_bin("metahead").unwrap();
    cmd.env_remove("METAHEAD_CONFIG");
    cmd
}

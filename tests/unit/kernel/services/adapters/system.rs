use super::*;

#[cfg(target_os = "linux")]
#[test]
fn linux_opens_parent_of_file() {
    let cmd = reveal_command(Path::new("/notes/a/todo.md"), false).unwrap();
    assert_eq!(cmd.program, "xdg-open");
    assert_eq!(cmd.args, vec![OsString::from("/notes/a")]);
}

#[cfg(target_os = "linux")]
#[test]
fn linux_opens_folder_itself() {
    let cmd = reveal_command(Path::new("/notes/a"), true).unwrap();
    assert_eq!(cmd.args, vec![OsString::from("/notes/a")]);
}

#[cfg(target_os = "macos")]
#[test]
fn macos_selects_in_finder() {
    let cmd = reveal_command(Path::new("/notes/a/todo.md"), false).unwrap();
    assert_eq!(cmd.program, "open");
    assert_eq!(cmd.args[0], OsString::from("-R"));
}

#[cfg(unix)]
#[test]
fn launched_process_is_waited_for() {
    let cmd = RevealCommand {
        program: "sh",
        args: vec![OsString::from("-c"), OsString::from("exit 3")],
    };
    let status = spawn_reaped(&cmd).unwrap().join().unwrap().unwrap();
    assert_eq!(status.code(), Some(3));
}

#[test]
fn missing_program_is_an_error() {
    let cmd = RevealCommand {
        program: "urnote-no-such-file-manager",
        args: Vec::new(),
    };
    let err = spawn_reaped(&cmd).unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
}

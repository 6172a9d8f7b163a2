use super::*;
use std::collections::HashMap;

fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name| map.get(name).cloned()
}

#[test]
fn override_env_wins() {
    let dir = config_dir_with(vars(&[
        (CONFIG_DIR_ENV, "/tmp/urnote-config"),
        ("HOME", "/home/me"),
        ("APPDATA", "C:\\Users\\me"),
    ]));
    assert_eq!(dir, Some(PathBuf::from("/tmp/urnote-config")));
}

#[test]
fn no_env_means_no_dir() {
    assert_eq!(config_dir_with(vars(&[])), None);
    assert_eq!(data_dir_with(vars(&[])), None);
}

#[cfg(target_os = "linux")]
#[test]
fn linux_prefers_xdg_dirs() {
    let env = vars(&[
        ("HOME", "/home/me"),
        ("XDG_CONFIG_HOME", "/xdg/config"),
        ("XDG_DATA_HOME", "/xdg/data"),
    ]);
    assert_eq!(
        config_dir_with(&env),
        Some(PathBuf::from("/xdg/config/urnote"))
    );
    assert_eq!(data_dir_with(&env), Some(PathBuf::from("/xdg/data/urnote")));
}

#[cfg(target_os = "linux")]
#[test]
fn linux_falls_back_to_home() {
    let env = vars(&[("HOME", "/home/me")]);
    assert_eq!(
        config_dir_with(&env),
        Some(PathBuf::from("/home/me/.config/urnote"))
    );
    assert_eq!(
        data_dir_with(&env),
        Some(PathBuf::from("/home/me/.local/share/urnote"))
    );
}

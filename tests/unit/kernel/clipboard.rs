use super::*;

#[test]
fn paste_on_empty_slot_fails() {
    let slot = ClipboardSlot::empty();
    assert_eq!(
        slot.plan_paste(Path::new("/notes")),
        Err(KernelError::EmptyClipboard)
    );
}

#[test]
fn stage_replaces_previous_entry() {
    let slot = ClipboardSlot::stage(PathBuf::from("/notes/a.md"), ClipboardAction::Copy);
    assert_eq!(slot.entry().unwrap().action, ClipboardAction::Copy);

    let slot = ClipboardSlot::stage(PathBuf::from("/notes/b.md"), ClipboardAction::Cut);
    let entry = slot.entry().unwrap();
    assert_eq!(entry.path, PathBuf::from("/notes/b.md"));
    assert_eq!(entry.action, ClipboardAction::Cut);
}

#[test]
fn plan_joins_basename_onto_target() {
    let slot = ClipboardSlot::stage(PathBuf::from("/notes/a/todo.md"), ClipboardAction::Copy);
    let plan = slot.plan_paste(Path::new("/notes/b")).unwrap();
    assert_eq!(plan.from, PathBuf::from("/notes/a/todo.md"));
    assert_eq!(plan.to, PathBuf::from("/notes/b/todo.md"));
    assert_eq!(plan.action, ClipboardAction::Copy);
}

#[test]
fn copy_stays_staged_after_paste() {
    let slot = ClipboardSlot::stage(PathBuf::from("/notes/a.md"), ClipboardAction::Copy);
    let plan = slot.plan_paste(Path::new("/notes/x")).unwrap();

    let slot = slot.after_paste(&plan, true);
    let slot = slot.after_paste(&plan, false);
    assert_eq!(
        slot,
        ClipboardSlot::stage(PathBuf::from("/notes/a.md"), ClipboardAction::Copy)
    );
}

#[test]
fn cut_clears_only_on_success() {
    let slot = ClipboardSlot::stage(PathBuf::from("/notes/a.md"), ClipboardAction::Cut);
    let plan = slot.plan_paste(Path::new("/notes/x")).unwrap();

    let slot = slot.after_paste(&plan, false);
    assert!(!slot.is_empty());

    let slot = slot.after_paste(&plan, true);
    assert!(slot.is_empty());
    assert_eq!(
        slot.plan_paste(Path::new("/notes/y")),
        Err(KernelError::EmptyClipboard)
    );
}

#[test]
fn successful_paste_of_older_cut_keeps_newer_entry() {
    let old = ClipboardSlot::stage(PathBuf::from("/notes/a.md"), ClipboardAction::Cut);
    let plan = old.plan_paste(Path::new("/notes/x")).unwrap();

    let newer = ClipboardSlot::stage(PathBuf::from("/notes/b.md"), ClipboardAction::Cut);
    assert_eq!(newer.clone().after_paste(&plan, true), newer);
}

#[test]
fn pasting_folder_into_itself_is_rejected() {
    let slot = ClipboardSlot::stage(PathBuf::from("/notes/a"), ClipboardAction::Copy);
    assert_eq!(
        slot.plan_paste(Path::new("/notes/a")),
        Err(KernelError::PasteIntoSelf(PathBuf::from("/notes/a")))
    );
    assert_eq!(
        slot.plan_paste(Path::new("/notes/a/deep")),
        Err(KernelError::PasteIntoSelf(PathBuf::from("/notes/a")))
    );

}

#[test]
fn pasting_into_own_folder_names_the_source() {
    let slot = ClipboardSlot::stage(PathBuf::from("/notes/a.md"), ClipboardAction::Copy);
    let err = slot.plan_paste(Path::new("/notes")).unwrap_err();
    assert_eq!(err, KernelError::PasteOntoSource(PathBuf::from("/notes/a.md")));
    assert_eq!(
        err.to_string(),
        "Cannot paste /notes/a.md: the destination is the source itself"
    );

    let slot = ClipboardSlot::stage(PathBuf::from("/notes/a"), ClipboardAction::Cut);
    assert_eq!(
        slot.plan_paste(Path::new("/notes")),
        Err(KernelError::PasteOntoSource(PathBuf::from("/notes/a")))
    );
}

#[test]
fn delete_clears_staged_path_or_descendant() {
    let slot = ClipboardSlot::stage(PathBuf::from("/notes/a/b.md"), ClipboardAction::Copy);
    assert_eq!(slot.clone().after_delete(Path::new("/notes/c")), slot);
    assert!(slot.clone().after_delete(Path::new("/notes/a")).is_empty());
    assert!(slot.after_delete(Path::new("/notes/a/b.md")).is_empty());
}

#[test]
fn delete_of_sibling_with_common_prefix_keeps_slot() {
    let slot = ClipboardSlot::stage(PathBuf::from("/notes/ab"), ClipboardAction::Cut);
    assert_eq!(slot.clone().after_delete(Path::new("/notes/a")), slot);
}

#[test]
fn rename_drops_cut_and_retargets_copy() {
    let cut = ClipboardSlot::stage(PathBuf::from("/notes/a/b.md"), ClipboardAction::Cut);
    assert!(cut
        .after_rename(Path::new("/notes/a"), Path::new("/notes/z"))
        .is_empty());

    let copy = ClipboardSlot::stage(PathBuf::from("/notes/a/b.md"), ClipboardAction::Copy);
    let moved = copy.after_rename(Path::new("/notes/a"), Path::new("/notes/z"));
    assert_eq!(moved.entry().unwrap().path, PathBuf::from("/notes/z/b.md"));

    let copy = ClipboardSlot::stage(PathBuf::from("/notes/a.md"), ClipboardAction::Copy);
    let moved = copy.after_rename(Path::new("/notes/a.md"), Path::new("/notes/b.md"));
    assert_eq!(moved.entry().unwrap().path, PathBuf::from("/notes/b.md"));
}

#[test]
fn unrelated_rename_keeps_slot() {
    let cut = ClipboardSlot::stage(PathBuf::from("/notes/a.md"), ClipboardAction::Cut);
    assert_eq!(
        cut.clone()
            .after_rename(Path::new("/notes/b.md"), Path::new("/notes/c.md")),
        cut
    );
}

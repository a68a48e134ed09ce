mod stack_item_view;

pub use stack_item_view::{ItemKind, StackItemView, TITLE_MAX_CHARS};

/// `"1 item"`, `"3 items"`.
pub fn count_noun(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

#[cfg(test)]
mod tests {
    use super::count_noun;

    #[test]
    fn pluralizes_everything_but_one() {
        assert_eq!(count_noun(0, "item"), "0 items");
        assert_eq!(count_noun(1, "item"), "1 item");
        assert_eq!(count_noun(3, "file"), "3 files");
    }
}

use crate::types::BookmarkList;

/// Lines shown for `list`: one per entry, line N for position N.
pub fn render_lines(list: &BookmarkList, placeholder: &str) -> Vec<String> {
    if list.is_empty() {
        return vec![placeholder.to_string()];
    }
    list.iter().map(str::to_owned).collect()
}

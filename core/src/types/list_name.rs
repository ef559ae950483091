use nutype::nutype;

pub const MAX_LIST_NAME_LENGTH: usize = 128;

/// Identifier of the default snapshot file. Never a valid [`ListName`].
pub const DEFAULT_SNAPSHOT_NAME: &str = "_current_list";

fn is_valid_list_name(name: &str) -> bool {
    name != DEFAULT_SNAPSHOT_NAME
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\', '\0'])
}

/// Name of a saved list, used as the file stem of `<name>.json`.
#[nutype(
    sanitize(trim),
    validate(
        not_empty,
        len_char_max = MAX_LIST_NAME_LENGTH,
        predicate = is_valid_list_name
    ),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        AsRef,
        Deref,
        TryFrom,
        Into,
        Hash,
        Borrow,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct ListName(String);

#[cfg(test)]
mod tests;

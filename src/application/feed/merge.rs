use crate::domain::address::address::Address;

/// Merges the two live address streams into one display list.
///
/// Segment order: the user's private addresses (when `show_private`), then
/// the user's public addresses followed by everyone else's public addresses
/// (when `show_public`). Each segment keeps its source stream's order,
/// newest first; no global re-sort is applied across segments, so callers
/// must not assume one. The owner's addresses come exclusively from
/// `my_addresses` (the public stream is already filtered of them), so an
/// address never appears twice.
///
/// Pure and idempotent: the same inputs always yield the same output.
pub fn merge_visible(
    my_addresses: &[Address],
    other_public_addresses: &[Address],
    show_public: bool,
    show_private: bool,
) -> Vec<Address> {
    let mut result = Vec::new();

    if show_private {
        result.extend(my_addresses.iter().filter(|a| !a.is_public).cloned());
    }

    if show_public {
        result.extend(my_addresses.iter().filter(|a| a.is_public).cloned());
        result.extend(other_public_addresses.iter().cloned());
    }

    result
}
